use crate::error::LifemapScaleError;
use std::fmt::Debug;

/// A threshold scale maps continuous values to discrete values based on explicit
/// threshold boundaries. N thresholds split the line into N + 1 bins.
#[derive(Debug, Clone)]
pub struct ThresholdScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    thresholds: Vec<f32>,
    range: Vec<R>,
    default: R,
}

impl<R> ThresholdScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    pub fn try_new(
        range: Vec<R>,
        thresholds: Vec<f32>,
        default: R,
    ) -> Result<Self, LifemapScaleError> {
        if thresholds.iter().any(|t| !t.is_finite())
            || !thresholds.windows(2).all(|w| w[0] <= w[1])
        {
            return Err(LifemapScaleError::ThresholdsNotAscending(thresholds));
        }

        if range.len() != thresholds.len() + 1 {
            return Err(LifemapScaleError::ThresholdDomainMismatch {
                domain_len: thresholds.len(),
                range_len: range.len(),
            });
        }
        Ok(Self {
            thresholds,
            range,
            default,
        })
    }

    pub fn thresholds(&self) -> &[f32] {
        &self.thresholds
    }

    pub fn range(&self) -> &[R] {
        &self.range
    }

    pub fn default(&self) -> &R {
        &self.default
    }

    /// Index of the bin holding `x`. A value equal to a threshold belongs to the bin above it.
    pub fn bin_index(&self, x: f32) -> Option<usize> {
        if x.is_finite() {
            Some(self.thresholds.partition_point(|t| *t <= x))
        } else {
            None
        }
    }

    pub fn scale(&self, x: f32) -> R {
        match self.bin_index(x) {
            Some(idx) => self.range[idx].clone(),
            None => self.default.clone(),
        }
    }

    pub fn scale_all(&self, values: &[f32]) -> Vec<R> {
        values.iter().map(|v| self.scale(*v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_threshold_scale_basic() -> Result<(), LifemapScaleError> {
        let scale =
            ThresholdScale::try_new(vec!["low", "medium", "high"], vec![30.0, 70.0], "default")?;

        let result = scale.scale_all(&[20.0, 50.0, 80.0, f32::NAN]);
        assert_eq!(result, vec!["low", "medium", "high", "default"]);
        Ok(())
    }

    #[test]
    fn test_threshold_scale_boundary_goes_up() -> Result<(), LifemapScaleError> {
        let scale = ThresholdScale::try_new(vec![-1.0, 1.0], vec![0.0], f32::NAN)?;

        let result = scale.scale_all(&[-0.5, 0.0, 0.5]);
        assert_approx_eq!(f32, result[0], -1.0);
        assert_approx_eq!(f32, result[1], 1.0);
        assert_approx_eq!(f32, result[2], 1.0);
        Ok(())
    }

    #[test]
    fn test_thresholds_not_ascending() {
        let result = ThresholdScale::try_new(vec![1, 2, 3], vec![5.0, 1.0], 0);
        assert_eq!(
            result.err(),
            Some(LifemapScaleError::ThresholdsNotAscending(vec![5.0, 1.0]))
        );
    }

    #[test]
    fn test_threshold_range_mismatch() {
        let result = ThresholdScale::try_new(vec![1, 2], vec![1.0, 2.0], 0);
        assert_eq!(
            result.err(),
            Some(LifemapScaleError::ThresholdDomainMismatch {
                domain_len: 2,
                range_len: 2
            })
        );
    }
}
