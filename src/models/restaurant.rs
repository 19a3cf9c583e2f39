use serde::Serialize;
use time::Time;
use crate::helpers::time_format::{hh_mm, hh_mm_list};

/// A catalog entry. Loaded once and never mutated.
///
/// `opens_at <= slot <= closes_at` is expected for every slot but is not checked.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Restaurant {
    pub name: String,
    pub city: String,
    pub neighborhood: String,
    pub cuisine: String,
    pub avg_price_per_person: f64,
    pub rating: f64,
    #[serde(with = "hh_mm")]
    pub opens_at: Time,
    #[serde(with = "hh_mm")]
    pub closes_at: Time,
    pub max_guests_per_slot: u32,
    /// Reservation start times, in catalog order.
    #[serde(serialize_with = "hh_mm_list::serialize")]
    pub available_slots: Vec<Time>,
}
