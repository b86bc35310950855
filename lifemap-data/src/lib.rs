pub mod error;
pub mod metric;
pub mod record;
pub mod topology;
