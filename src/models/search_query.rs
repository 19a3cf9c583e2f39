use serde::{Deserialize, Serialize};

pub const DEFAULT_PARTY_SIZE: u32 = 2;
pub const DEFAULT_TIME_RANGE_START: &str = "18:00";
pub const DEFAULT_TIME_RANGE_END: &str = "21:00";

/// Structured restaurant search. Built per request and thrown away afterwards.
///
/// When deserialized, a missing `people` becomes 2 and missing time bounds become
/// the 18:00-21:00 dinner window. An explicit `null` bound stays unset, which turns the
/// time filter off.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SearchQuery {
    pub city: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default = "default_people")]
    pub people: u32,
    #[serde(default = "default_time_range_start")]
    pub time_range_start: Option<String>,
    #[serde(default = "default_time_range_end")]
    pub time_range_end: Option<String>,
    #[serde(default)]
    pub max_budget_per_person: Option<f64>,
}

impl SearchQuery {
    /// A query for `city` with no optional filters and the default party size.
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            neighborhood: None,
            cuisine: None,
            people: DEFAULT_PARTY_SIZE,
            time_range_start: None,
            time_range_end: None,
            max_budget_per_person: None,
        }
    }
}

fn default_people() -> u32 {
    DEFAULT_PARTY_SIZE
}

fn default_time_range_start() -> Option<String> {
    Some(DEFAULT_TIME_RANGE_START.to_string())
}

fn default_time_range_end() -> Option<String> {
    Some(DEFAULT_TIME_RANGE_END.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[test]
    fn missing_fields_take_request_defaults() {
        let query: SearchQuery = serde_json::from_value(json!({ "city": "Richmond" })).unwrap();

        assert_eq!(query.people, 2);
        assert_eq!(query.time_range_start.as_deref(), Some("18:00"));
        assert_eq!(query.time_range_end.as_deref(), Some("21:00"));
        assert_eq!(query.neighborhood, None);
        assert_eq!(query.max_budget_per_person, None);
    }

    #[test]
    fn explicit_null_disables_a_time_bound() {
        let query: SearchQuery = serde_json::from_value(json!({
            "city": "Richmond",
            "time_range_start": null,
            "time_range_end": "20:00",
        }))
        .unwrap();

        assert_eq!(query.time_range_start, None);
        assert_eq!(query.time_range_end.as_deref(), Some("20:00"));
    }

    #[test]
    fn city_is_required() {
        assert!(serde_json::from_value::<SearchQuery>(json!({ "people": 4 })).is_err());
    }
}
