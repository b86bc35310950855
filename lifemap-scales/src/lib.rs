pub mod array;
pub mod band;
pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod numeric;
pub mod ordinal;
pub mod quantile;
pub mod threshold;
