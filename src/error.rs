use thiserror::Error;

/// A time-of-day string that is not `HH:MM` (24-hour).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time '{value}', expected HH:MM")]
pub struct TimeFormatError {
    pub value: String,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    InvalidTime(#[from] TimeFormatError),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open catalog at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog row: {0}")]
    Csv(#[from] csv_async::Error),
    #[error("restaurant '{name}' has an invalid {field}: {source}")]
    InvalidTime {
        name: String,
        field: &'static str,
        #[source]
        source: TimeFormatError,
    },
}
