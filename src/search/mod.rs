pub mod engine;

pub use engine::search;
