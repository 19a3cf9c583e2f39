use crate::helpers::time_format::format_time;
use crate::models::restaurant::Restaurant;

pub const NO_MATCHES_REPLY: &str = "I couldn't find any restaurants matching your request.";

const MAX_DISPLAY_SLOTS: usize = 3;
const MAX_RUNNERS_UP: usize = 2;

/// Chat reply describing the best match, naming up to two runners-up and counting
/// the rest.
pub fn summarize(candidates: &[Restaurant]) -> String {
    let Some((first, others)) = candidates.split_first() else {
        return NO_MATCHES_REPLY.to_string();
    };

    let mut reply = format!(
        "Here is a good option: {} in {} ({}, around ${} per person, rating {}).",
        first.name,
        location(first),
        first.cuisine,
        first.avg_price_per_person,
        first.rating,
    );

    let slots = display_slots(first);
    if !slots.is_empty() {
        reply.push_str(&format!(" Available times include: {}.", slots));
    }

    let runners_up: Vec<String> = others
        .iter()
        .take(MAX_RUNNERS_UP)
        .map(|r| format!("{} in {} (rating {})", r.name, location(r), r.rating))
        .collect();
    if !runners_up.is_empty() {
        reply.push_str(&format!(" You could also try {}.", runners_up.join(" or ")));
    }

    let remaining = others.len().saturating_sub(MAX_RUNNERS_UP);
    if remaining > 0 {
        reply.push_str(&format!(
            " I also found {} more option(s) you can review in the response.",
            remaining
        ));
    }

    reply
}

/// One line of the terminal listing.
pub fn listing_line(restaurant: &Restaurant) -> String {
    let slots: Vec<String> = restaurant
        .available_slots
        .iter()
        .map(|slot| format_time(*slot))
        .collect();

    format!(
        "- {} ({}) - {}, ${} per person, rating {}, slots: {}",
        restaurant.name,
        restaurant.neighborhood,
        restaurant.cuisine,
        restaurant.avg_price_per_person,
        restaurant.rating,
        slots.join(", "),
    )
}

fn location(restaurant: &Restaurant) -> &str {
    if restaurant.neighborhood.is_empty() {
        &restaurant.city
    } else {
        &restaurant.neighborhood
    }
}

fn display_slots(restaurant: &Restaurant) -> String {
    restaurant
        .available_slots
        .iter()
        .take(MAX_DISPLAY_SLOTS)
        .map(|slot| format_time(*slot))
        .collect::<Vec<_>>()
        .join(", ")
}
