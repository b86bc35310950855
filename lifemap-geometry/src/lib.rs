pub mod bounds;
pub mod controller;
pub mod error;
pub mod projection;
pub mod transition;
pub mod zoom;

pub use geo_types;
