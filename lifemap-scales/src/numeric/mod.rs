pub mod linear;
pub mod log;

use std::fmt::Debug;

use linear::LinearNumericScale;
use log::LogNumericScale;

/// A scale that maps a continuous numeric domain onto a continuous numeric range
pub trait ContinuousNumericScale: Debug + Clone + Send + Sync + 'static {
    /// Returns the domain as (start, end)
    fn domain(&self) -> (f32, f32);

    /// Returns the range as (start, end)
    fn range(&self) -> (f32, f32);

    /// Returns whether output clamping is enabled
    fn clamp(&self) -> bool;

    /// Maps a domain value to the range
    fn scale(&self, value: f32) -> f32;

    /// Maps a range value back to the domain
    fn invert(&self, value: f32) -> f32;

    /// Nicely rounded tick values inside the domain
    fn ticks(&self, count: Option<f32>) -> Vec<f32>;

    fn scale_all(&self, values: &[f32]) -> Vec<f32> {
        values.iter().map(|v| self.scale(*v)).collect()
    }

    fn invert_all(&self, values: &[f32]) -> Vec<f32> {
        values.iter().map(|v| self.invert(*v)).collect()
    }
}

#[derive(Clone, Debug)]
pub enum NumericScale {
    Linear(LinearNumericScale),
    Log(LogNumericScale),
}

impl NumericScale {
    pub fn with_domain(self, domain: (f32, f32)) -> Self {
        match self {
            NumericScale::Linear(scale) => NumericScale::Linear(scale.with_domain(domain)),
            NumericScale::Log(scale) => NumericScale::Log(scale.with_domain(domain)),
        }
    }

    pub fn with_range(self, range: (f32, f32)) -> Self {
        match self {
            NumericScale::Linear(scale) => NumericScale::Linear(scale.with_range(range)),
            NumericScale::Log(scale) => NumericScale::Log(scale.with_range(range)),
        }
    }

    pub fn with_clamp(self, clamp: bool) -> Self {
        match self {
            NumericScale::Linear(scale) => NumericScale::Linear(scale.with_clamp(clamp)),
            NumericScale::Log(scale) => NumericScale::Log(scale.with_clamp(clamp)),
        }
    }
}

impl ContinuousNumericScale for NumericScale {
    fn domain(&self) -> (f32, f32) {
        match self {
            NumericScale::Linear(scale) => scale.domain(),
            NumericScale::Log(scale) => scale.domain(),
        }
    }

    fn range(&self) -> (f32, f32) {
        match self {
            NumericScale::Linear(scale) => scale.range(),
            NumericScale::Log(scale) => scale.range(),
        }
    }

    fn clamp(&self) -> bool {
        match self {
            NumericScale::Linear(scale) => scale.clamp(),
            NumericScale::Log(scale) => scale.clamp(),
        }
    }

    fn scale(&self, value: f32) -> f32 {
        match self {
            NumericScale::Linear(scale) => scale.scale(value),
            NumericScale::Log(scale) => scale.scale(value),
        }
    }

    fn invert(&self, value: f32) -> f32 {
        match self {
            NumericScale::Linear(scale) => scale.invert(value),
            NumericScale::Log(scale) => scale.invert(value),
        }
    }

    fn ticks(&self, count: Option<f32>) -> Vec<f32> {
        match self {
            NumericScale::Linear(scale) => scale.ticks(count),
            NumericScale::Log(scale) => scale.ticks(count),
        }
    }
}

impl From<LinearNumericScale> for NumericScale {
    fn from(scale: LinearNumericScale) -> Self {
        NumericScale::Linear(scale)
    }
}

impl From<LogNumericScale> for NumericScale {
    fn from(scale: LogNumericScale) -> Self {
        NumericScale::Log(scale)
    }
}
