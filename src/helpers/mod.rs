pub mod handler_404;
pub mod time_format;
