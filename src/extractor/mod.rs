//! Rule-based extraction of a [`SearchQuery`] from a free-form message.
//!
//! Every field is matched independently against the lowercased text and the first
//! match wins. Keyword tables are scanned in the order written below, so a message
//! naming two cuisines gets whichever comes first in [`CUISINES`], not whichever comes
//! first in the message. Extending the extractor means adding table rows.

use std::sync::LazyLock;
use regex::Regex;
use crate::models::search_query::{
    SearchQuery, DEFAULT_PARTY_SIZE, DEFAULT_TIME_RANGE_END, DEFAULT_TIME_RANGE_START,
};

pub const DEFAULT_CITY: &str = "Richmond";

/// Budget assumed when a message only says it should be cheap.
pub const CHEAP_BUDGET_PER_PERSON: f64 = 30.0;

pub const CITIES: &[(&str, &str)] = &[("richmond", "Richmond")];

pub const NEIGHBORHOODS: &[(&str, &str)] = &[
    ("short pump", "Short Pump"),
    ("downtown", "Downtown"),
    ("the fan", "The Fan"),
    ("fan district", "The Fan"),
    ("carytown", "Carytown"),
    ("scott's addition", "Scott's Addition"),
    ("scotts addition", "Scott's Addition"),
    ("church hill", "Church Hill"),
    ("jackson ward", "Jackson Ward"),
    ("museum district", "Museum District"),
    ("west end", "West End"),
    ("midlothian", "Midlothian"),
];

pub const CUISINES: &[&str] = &[
    "indian",
    "italian",
    "vegetarian",
    "japanese",
    "mexican",
    "thai",
    "chinese",
    "southern",
    "mediterranean",
    "american",
];

const CHEAP_KEYWORDS: &[&str] = &["cheap", "budget"];

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

static PARTY_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfor\s+(\d+)\b").expect("party size pattern"));

static PARTY_OF_US: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d+|two|three|four|five|six|seven|eight|nine|ten)\s+of\s+us\b")
        .expect("party of us pattern")
});

static BUDGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:under|below|max)\s*\$?\s*(\d+(?:\.\d+)?)").expect("budget pattern")
});

static HOUR_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(1[0-2]|0?[1-9])\s*(am|pm)\b").expect("hour of day pattern")
});

/// Builds a best-effort query from `text`. Never fails; unmatched fields keep their
/// defaults (Richmond, party of 2, 18:00-21:00, no other filters).
pub fn extract_query(text: &str) -> SearchQuery {
    let message = text.to_lowercase();
    let (time_range_start, time_range_end) = extract_time_window(&message).unwrap_or_else(|| {
        (
            DEFAULT_TIME_RANGE_START.to_string(),
            DEFAULT_TIME_RANGE_END.to_string(),
        )
    });

    SearchQuery {
        city: lookup(&message, CITIES).unwrap_or(DEFAULT_CITY).to_string(),
        neighborhood: lookup(&message, NEIGHBORHOODS).map(str::to_string),
        cuisine: extract_cuisine(&message),
        people: extract_party_size(&message).unwrap_or(DEFAULT_PARTY_SIZE),
        time_range_start: Some(time_range_start),
        time_range_end: Some(time_range_end),
        max_budget_per_person: extract_budget(&message),
    }
}

fn lookup(message: &str, table: &[(&str, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(keyword, _)| message.contains(keyword))
        .map(|(_, canonical)| *canonical)
}

fn extract_cuisine(message: &str) -> Option<String> {
    CUISINES
        .iter()
        .find(|cuisine| message.contains(*cuisine))
        .map(|cuisine| capitalize(cuisine))
}

fn extract_party_size(message: &str) -> Option<u32> {
    if let Some(people) = PARTY_SIZE
        .captures(message)
        .and_then(|caps| caps[1].parse().ok())
    {
        return Some(people);
    }

    let caps = PARTY_OF_US.captures(message)?;
    let count = &caps[1];
    count.parse().ok().or_else(|| {
        NUMBER_WORDS
            .iter()
            .find(|(word, _)| *word == count)
            .map(|(_, value)| *value)
    })
}

fn extract_budget(message: &str) -> Option<f64> {
    if let Some(budget) = BUDGET
        .captures(message)
        .and_then(|caps| caps[1].parse().ok())
    {
        return Some(budget);
    }

    CHEAP_KEYWORDS
        .iter()
        .any(|keyword| message.contains(keyword))
        .then_some(CHEAP_BUDGET_PER_PERSON)
}

/// Turns the first "<N>am"/"<N>pm" into a window one hour either side, kept within
/// 00:00 and 23:00.
fn extract_time_window(message: &str) -> Option<(String, String)> {
    let caps = HOUR_OF_DAY.captures(message)?;
    let hour: u8 = caps[1].parse().ok()?;
    let hour = match (&caps[2], hour) {
        ("am", 12) => 0,
        ("am", hour) => hour,
        ("pm", 12) => 12,
        (_, hour) => hour + 12,
    };

    let start = hour.saturating_sub(1);
    let end = (hour + 1).min(23);
    Some((format!("{start:02}:00"), format!("{end:02}:00")))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_every_field_from_a_full_request() {
        let query = extract_query("Looking for Indian food in Short Pump for 4, under $30, around 8pm");

        assert_eq!(
            query,
            SearchQuery {
                city: "Richmond".to_string(),
                neighborhood: Some("Short Pump".to_string()),
                cuisine: Some("Indian".to_string()),
                people: 4,
                time_range_start: Some("19:00".to_string()),
                time_range_end: Some("21:00".to_string()),
                max_budget_per_person: Some(30.0),
            }
        );
    }

    #[test]
    fn no_keywords_gives_defaults() {
        let query = extract_query("Where should we eat tonight?");

        assert_eq!(query.city, "Richmond");
        assert_eq!(query.neighborhood, None);
        assert_eq!(query.cuisine, None);
        assert_eq!(query.people, 2);
        assert_eq!(query.max_budget_per_person, None);
        assert_eq!(query.time_range_start.as_deref(), Some("18:00"));
        assert_eq!(query.time_range_end.as_deref(), Some("21:00"));
    }

    #[test]
    fn city_keyword_is_recognised() {
        assert_eq!(extract_query("dinner in RICHMOND").city, "Richmond");
    }

    #[test]
    fn neighborhood_table_order_decides_overlaps() {
        let query = extract_query("downtown or the fan, whichever, maybe short pump");
        assert_eq!(query.neighborhood.as_deref(), Some("Short Pump"));

        let query = extract_query("something in the Fan District");
        assert_eq!(query.neighborhood.as_deref(), Some("The Fan"));
    }

    #[test]
    fn cuisine_table_order_decides_overlaps() {
        let query = extract_query("japanese or italian?");
        assert_eq!(query.cuisine.as_deref(), Some("Italian"));

        let query = extract_query("Vegetarian please");
        assert_eq!(query.cuisine.as_deref(), Some("Vegetarian"));
    }

    #[test]
    fn party_size_needs_a_number_after_for() {
        assert_eq!(extract_query("table for 6 please").people, 6);
        assert_eq!(extract_query("looking for sushi").people, 2);
        assert_eq!(extract_query("table for 99999999999999999999").people, 2);
    }

    #[test]
    fn party_size_falls_back_to_of_us() {
        assert_eq!(extract_query("there are four of us").people, 4);
        assert_eq!(extract_query("3 of us tonight").people, 3);
        assert_eq!(extract_query("for 5, well maybe two of us").people, 5);
    }

    #[test]
    fn budget_accepts_several_phrasings() {
        assert_eq!(extract_query("under 40").max_budget_per_person, Some(40.0));
        assert_eq!(extract_query("below $25").max_budget_per_person, Some(25.0));
        assert_eq!(extract_query("max $ 35 per person").max_budget_per_person, Some(35.0));
        assert_eq!(extract_query("under $22.50").max_budget_per_person, Some(22.5));
    }

    #[test]
    fn cheap_implies_a_default_budget() {
        assert_eq!(extract_query("somewhere cheap").max_budget_per_person, Some(30.0));
        assert_eq!(extract_query("cheap, under $15").max_budget_per_person, Some(15.0));
    }

    #[test]
    fn hour_becomes_a_two_hour_window() {
        let query = extract_query("around 7 pm");
        assert_eq!(query.time_range_start.as_deref(), Some("18:00"));
        assert_eq!(query.time_range_end.as_deref(), Some("20:00"));

        let query = extract_query("brunch at 11am");
        assert_eq!(query.time_range_start.as_deref(), Some("10:00"));
        assert_eq!(query.time_range_end.as_deref(), Some("12:00"));

        let query = extract_query("lunch at 12pm");
        assert_eq!(query.time_range_start.as_deref(), Some("11:00"));
        assert_eq!(query.time_range_end.as_deref(), Some("13:00"));
    }

    #[test]
    fn window_is_clamped_to_the_day() {
        let query = extract_query("midnight snack at 12am");
        assert_eq!(query.time_range_start.as_deref(), Some("00:00"));
        assert_eq!(query.time_range_end.as_deref(), Some("01:00"));

        let query = extract_query("late one at 11pm");
        assert_eq!(query.time_range_start.as_deref(), Some("22:00"));
        assert_eq!(query.time_range_end.as_deref(), Some("23:00"));
    }

    #[test]
    fn out_of_range_hours_are_ignored() {
        let query = extract_query("at 13pm");
        assert_eq!(query.time_range_start.as_deref(), Some("18:00"));
        assert_eq!(query.time_range_end.as_deref(), Some("21:00"));
    }
}
