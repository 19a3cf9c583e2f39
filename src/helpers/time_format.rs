use time::macros::format_description;
use time::Time;
use crate::error::TimeFormatError;

/// Parses a 24-hour `HH:MM` string, ignoring surrounding whitespace.
pub fn parse_time_str(value: &str) -> Result<Time, TimeFormatError> {
    Time::parse(value.trim(), format_description!("[hour]:[minute]"))
        .map_err(|_| TimeFormatError { value: value.to_string() })
}

pub fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Parses a `;`-separated list of times, skipping empty entries.
pub fn parse_slot_list(value: &str) -> Result<Vec<Time>, TimeFormatError> {
    value
        .split(';')
        .filter(|slot| !slot.trim().is_empty())
        .map(parse_time_str)
        .collect()
}

pub mod hh_mm {
    use serde::Serializer;
    use time::Time;

    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }
}

pub mod hh_mm_list {
    use serde::Serializer;
    use time::Time;

    pub fn serialize<S: Serializer>(times: &[Time], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(times.iter().map(|time| super::format_time(*time)))
    }
}
