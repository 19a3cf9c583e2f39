use std::cmp::Ordering;
use time::Time;
use tracing::debug;
use crate::catalog::Catalog;
use crate::error::SearchError;
use crate::helpers::time_format::parse_time_str;
use crate::models::restaurant::Restaurant;
use crate::models::search_query::SearchQuery;

/// Filters the catalog by every field set on `query` and ranks what is left by rating
/// (highest first), then by price (cheapest first). Remaining ties keep catalog order.
///
/// Each time bound that is present must be `HH:MM`, even when the other bound is
/// missing. The slot filter itself only applies when both bounds are given.
pub fn search(catalog: &Catalog, query: &SearchQuery) -> Result<Vec<Restaurant>, SearchError> {
    let start = query.time_range_start.as_deref().map(parse_time_str).transpose()?;
    let end = query.time_range_end.as_deref().map(parse_time_str).transpose()?;
    let window = start.zip(end);

    let mut results: Vec<Restaurant> = catalog
        .restaurants()
        .iter()
        .filter(|restaurant| matches_query(restaurant, query, window))
        .cloned()
        .collect();

    results.sort_by(rank);

    debug!(
        "Search in {} for {} people matched {} of {} restaurants",
        query.city,
        query.people,
        results.len(),
        catalog.len()
    );
    Ok(results)
}

fn matches_query(restaurant: &Restaurant, query: &SearchQuery, window: Option<(Time, Time)>) -> bool {
    if !restaurant.city.eq_ignore_ascii_case(&query.city) {
        return false;
    }

    if let Some(neighborhood) = non_blank(&query.neighborhood) {
        if !restaurant.neighborhood.eq_ignore_ascii_case(neighborhood) {
            return false;
        }
    }

    if let Some(cuisine) = non_blank(&query.cuisine) {
        if !restaurant.cuisine.eq_ignore_ascii_case(cuisine) {
            return false;
        }
    }

    if let Some(budget) = query.max_budget_per_person {
        if restaurant.avg_price_per_person > budget {
            return false;
        }
    }

    if query.people > restaurant.max_guests_per_slot {
        return false;
    }

    match window {
        Some((start, end)) => restaurant
            .available_slots
            .iter()
            .any(|slot| slot_in_range(*slot, start, end)),
        None => true,
    }
}

/// Blank text filters count as unset.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Same-day inclusive check; `start <= end` is assumed.
fn slot_in_range(slot: Time, start: Time, end: Time) -> bool {
    start <= slot && slot <= end
}

fn rank(a: &Restaurant, b: &Restaurant) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| a.avg_price_per_person.total_cmp(&b.avg_price_per_person))
}
