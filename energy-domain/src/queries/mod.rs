pub mod usage_queries;

pub use usage_queries::{daily_range, date_span, load_profile};
