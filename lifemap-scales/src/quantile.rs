use crate::error::LifemapScaleError;
use std::fmt::Debug;

/// A quantile scale maps a continuous domain to discrete values based on sample quantiles.
///
/// The domain is a sample population. With a range of n values, n - 1 thresholds
/// are computed at the quantiles 1/n, 2/n, ... so that each output covers an
/// equal share of the samples. Non-finite samples are ignored.
#[derive(Debug, Clone)]
pub struct QuantileScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    samples: Vec<f32>,
    range: Vec<R>,
    default: R,
    thresholds: Vec<f32>,
}

impl<R> QuantileScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    pub fn try_new(samples: &[f32], range: Vec<R>, default: R) -> Result<Self, LifemapScaleError> {
        if range.is_empty() {
            return Err(LifemapScaleError::EmptyRange);
        }
        let mut sorted = samples
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        if sorted.is_empty() {
            return Err(LifemapScaleError::EmptyDomain);
        }
        sorted.sort_by(|a, b| a.total_cmp(b));

        let n = range.len();
        let thresholds = (1..n)
            .map(|i| quantile_sorted(&sorted, i as f32 / n as f32))
            .collect();

        Ok(Self {
            samples: sorted,
            range,
            default,
            thresholds,
        })
    }

    /// Sorted finite samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Smallest and largest sample
    pub fn extent(&self) -> (f32, f32) {
        // samples is non-empty by construction
        (self.samples[0], self.samples[self.samples.len() - 1])
    }

    pub fn range(&self) -> &[R] {
        &self.range
    }

    /// Returns the computed quantile thresholds
    pub fn quantiles(&self) -> &[f32] {
        &self.thresholds
    }

    pub fn scale(&self, x: f32) -> R {
        if !x.is_finite() {
            return self.default.clone();
        }
        let idx = self.thresholds.partition_point(|t| *t <= x);
        self.range[idx].clone()
    }

    pub fn scale_all(&self, values: &[f32]) -> Vec<R> {
        values.iter().map(|v| self.scale(*v)).collect()
    }
}

/// The p-quantile of ascending `sorted` using linear interpolation between
/// closest ranks (the R-7 method).
pub fn quantile_sorted(sorted: &[f32], p: f32) -> f32 {
    let n = sorted.len();
    if n == 0 {
        return f32::NAN;
    }
    if p <= 0.0 || n < 2 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }
    let i = (n - 1) as f32 * p;
    let i0 = i.floor() as usize;
    let lo = sorted[i0];
    let hi = sorted[(i0 + 1).min(n - 1)];
    lo + (hi - lo) * (i - i0 as f32)
}
