pub mod choropleth;
pub mod config;
