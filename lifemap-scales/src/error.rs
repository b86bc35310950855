#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LifemapScaleError {
    #[error("Domain length ({domain_len}) does not match range length ({range_len})")]
    DomainRangeMismatch { domain_len: usize, range_len: usize },

    #[error("Empty domain")]
    EmptyDomain,

    #[error("Empty range")]
    EmptyRange,

    #[error("Domain must be finite with start <= end: ({0}, {1})")]
    InvalidDomain(f32, f32),

    #[error("Domain has zero width: ({0}, {0})")]
    DegenerateDomain(f32),

    #[error("Log scale domain must be strictly positive or strictly negative: ({0}, {1})")]
    InvalidLogDomain(f32, f32),

    #[error("Thresholds must be in ascending order: {0:?}")]
    ThresholdsNotAscending(Vec<f32>),

    #[error("Threshold {threshold} lies outside of the domain ({start}, {end})")]
    ThresholdOutsideDomain { threshold: f32, start: f32, end: f32 },

    #[error(
        "Threshold domain length ({domain_len}) must be one less than range length ({range_len})"
    )]
    ThresholdDomainMismatch { domain_len: usize, range_len: usize },

    #[error("Incompatible numeric scale for color range: {0}")]
    IncompatibleNumericScaleForColorRange(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid scale spec: {0}")]
    InvalidScaleSpec(String),
}
