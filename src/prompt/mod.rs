use std::io::{BufRead, Write};
use anyhow::Context;
use crate::catalog::Catalog;
use crate::models::search_query::SearchQuery;
use crate::presentation::listing_line;
use crate::search::search;

const PROMPT_DEFAULT_CITY: &str = "Richmond";
const PROMPT_DEFAULT_PEOPLE: u32 = 2;
const PROMPT_DEFAULT_START: &str = "19:00";
const PROMPT_DEFAULT_END: &str = "21:00";

/// Interactive structured search: asks one question per line, then prints the matches.
pub fn run<R: BufRead, W: Write>(catalog: &Catalog, mut input: R, mut output: W) -> anyhow::Result<()> {
    writeln!(output, "Restaurant search (interactive)\n")?;

    let city = ask(&mut input, &mut output, "City (default: Richmond): ")?
        .unwrap_or_else(|| PROMPT_DEFAULT_CITY.to_string());
    let neighborhood = ask(&mut input, &mut output, "Neighborhood (optional, e.g. 'Short Pump'): ")?;
    let cuisine = ask(&mut input, &mut output, "Cuisine (optional, e.g. 'Indian', 'Italian'): ")?;

    let people = match ask(&mut input, &mut output, "Number of people (default: 2): ")? {
        Some(answer) => match answer.parse::<u32>() {
            Ok(people) => people,
            Err(_) => {
                writeln!(output, "Invalid number, using {}.", PROMPT_DEFAULT_PEOPLE)?;
                PROMPT_DEFAULT_PEOPLE
            }
        },
        None => PROMPT_DEFAULT_PEOPLE,
    };

    let time_range_start = ask(&mut input, &mut output, "Earliest time (HH:MM, default: 19:00): ")?
        .unwrap_or_else(|| PROMPT_DEFAULT_START.to_string());
    let time_range_end = ask(&mut input, &mut output, "Latest time (HH:MM, default: 21:00): ")?
        .unwrap_or_else(|| PROMPT_DEFAULT_END.to_string());

    let max_budget_per_person = match ask(&mut input, &mut output, "Max budget per person (optional, e.g. 30): ")? {
        Some(answer) => match answer.parse::<f64>() {
            Ok(budget) => Some(budget),
            Err(_) => {
                writeln!(output, "Invalid budget, searching without one.")?;
                None
            }
        },
        None => None,
    };

    let query = SearchQuery {
        city,
        neighborhood,
        cuisine,
        people,
        time_range_start: Some(time_range_start),
        time_range_end: Some(time_range_end),
        max_budget_per_person,
    };

    writeln!(output, "\nSearching with:")?;
    writeln!(output, "{}\n", serde_json::to_string(&query)?)?;

    let matches = match search(catalog, &query) {
        Ok(matches) => matches,
        Err(e) => {
            writeln!(output, "Could not search: {}", e)?;
            return Ok(());
        }
    };

    if matches.is_empty() {
        writeln!(output, "No matching restaurants found.")?;
        return Ok(());
    }

    writeln!(output, "Found {} matching restaurant(s). Top results:\n", matches.len())?;
    for restaurant in &matches {
        writeln!(output, "{}", listing_line(restaurant))?;
    }

    Ok(())
}

/// Prints `question` and returns the trimmed answer, or `None` when it is blank or the
/// input has ended.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> anyhow::Result<Option<String>> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read answer from input")?;

    let answer = line.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}
