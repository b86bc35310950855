use crate::array;

use super::ContinuousNumericScale;

#[derive(Clone, Debug)]
pub struct LinearNumericScaleConfig {
    pub domain: (f32, f32),
    pub range: (f32, f32),
    pub clamp: bool,
    pub nice: Option<usize>,
}

impl Default for LinearNumericScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
            nice: None,
        }
    }
}

/// A linear scale that maps numeric input values from a domain to a range.
/// Supports clamping, domain niceing, and tick generation.
#[derive(Clone, Debug)]
pub struct LinearNumericScale {
    domain_start: f32,
    domain_end: f32,
    range_start: f32,
    range_end: f32,
    clamp: bool,
}

impl LinearNumericScale {
    pub fn new(config: &LinearNumericScaleConfig) -> Self {
        let this = Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
        };

        match config.nice {
            Some(count) => this.nice(Some(count)),
            None => this,
        }
    }

    /// Extends the domain to nice round numbers for better tick selection
    pub fn nice(mut self, count: Option<usize>) -> Self {
        if self.domain_start == self.domain_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
        {
            return self;
        }

        let reversed = self.domain_start > self.domain_end;
        let (mut start, mut stop) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let count = count.unwrap_or(10) as f32;
        let mut prestep = 0.0;
        for _ in 0..10 {
            let step = array::tick_increment(start, stop, count);
            if step == prestep {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = step;
        }

        if reversed {
            self.domain_start = stop;
            self.domain_end = start;
        } else {
            self.domain_start = start;
            self.domain_end = stop;
        }
        self
    }

    pub fn with_domain(mut self, domain: (f32, f32)) -> Self {
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        self
    }

    pub fn with_range(mut self, range: (f32, f32)) -> Self {
        self.range_start = range.0;
        self.range_end = range.1;
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    fn is_degenerate(&self) -> bool {
        self.domain_start == self.domain_end
            || self.range_start == self.range_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
            || self.range_start.is_nan()
            || self.range_end.is_nan()
    }

    fn range_bounds(&self) -> (f32, f32) {
        if self.range_start <= self.range_end {
            (self.range_start, self.range_end)
        } else {
            (self.range_end, self.range_start)
        }
    }
}

impl ContinuousNumericScale for LinearNumericScale {
    fn domain(&self) -> (f32, f32) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_start, self.range_end)
    }

    fn clamp(&self) -> bool {
        self.clamp
    }

    fn scale(&self, value: f32) -> f32 {
        // Zero-width domains and ranges collapse onto range start (d3 behavior)
        if self.is_degenerate() {
            return self.range_start;
        }

        let scale = (self.range_end - self.range_start) / (self.domain_end - self.domain_start);
        let offset = self.range_start - scale * self.domain_start;
        let result = scale * value + offset;

        if self.clamp {
            let (range_min, range_max) = self.range_bounds();
            result.clamp(range_min, range_max)
        } else {
            result
        }
    }

    fn invert(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            return self.domain_start;
        }

        let scale = (self.domain_end - self.domain_start) / (self.range_end - self.range_start);
        let offset = self.domain_start - scale * self.range_start;

        let value = if self.clamp {
            let (range_min, range_max) = self.range_bounds();
            value.clamp(range_min, range_max)
        } else {
            value
        };
        scale * value + offset
    }

    fn ticks(&self, count: Option<f32>) -> Vec<f32> {
        array::ticks(self.domain_start, self.domain_end, count.unwrap_or(10.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_defaults() {
        let scale = LinearNumericScale::new(&Default::default());
        assert_eq!(scale.domain(), (0.0, 1.0));
        assert_eq!(scale.range(), (0.0, 1.0));
        assert!(!scale.clamp());
    }

    #[test]
    fn test_scale() {
        let scale = LinearNumericScale::new(&LinearNumericScaleConfig {
            domain: (10.0, 30.0),
            range: (0.0, 100.0),
            clamp: true,
            ..Default::default()
        });

        let values = vec![0.0, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0];
        let result = scale.scale_all(&values);

        assert_approx_eq!(f32, result[0], 0.0); // clamped
        assert_approx_eq!(f32, result[1], 0.0);
        assert_approx_eq!(f32, result[2], 25.0);
        assert_approx_eq!(f32, result[3], 50.0);
        assert_approx_eq!(f32, result[4], 75.0);
        assert_approx_eq!(f32, result[5], 100.0);
        assert_approx_eq!(f32, result[6], 100.0); // clamped
    }

    #[test]
    fn test_scale_degenerate() {
        let scale = LinearNumericScale::new(&LinearNumericScaleConfig {
            domain: (10.0, 10.0),
            range: (0.0, 100.0),
            clamp: true,
            ..Default::default()
        });

        for v in [0.0, 10.0, 20.0] {
            assert_approx_eq!(f32, scale.scale(v), 0.0);
        }
    }

    #[test]
    fn test_invert_clamped() {
        let scale = LinearNumericScale::new(&LinearNumericScaleConfig {
            domain: (10.0, 30.0),
            range: (0.0, 100.0),
            clamp: true,
            ..Default::default()
        });

        let result = scale.invert_all(&[-25.0, 0.0, 50.0, 100.0, 125.0]);
        assert_approx_eq!(f32, result[0], 10.0);
        assert_approx_eq!(f32, result[1], 10.0);
        assert_approx_eq!(f32, result[2], 20.0);
        assert_approx_eq!(f32, result[3], 30.0);
        assert_approx_eq!(f32, result[4], 30.0);
    }

    #[test]
    fn test_invert_unclamped() {
        let scale = LinearNumericScale::new(&LinearNumericScaleConfig {
            domain: (10.0, 30.0),
            range: (0.0, 100.0),
            ..Default::default()
        });

        let result = scale.invert_all(&[-25.0, 0.0, 50.0, 100.0, 125.0]);
        assert_approx_eq!(f32, result[0], 5.0);
        assert_approx_eq!(f32, result[1], 10.0);
        assert_approx_eq!(f32, result[2], 20.0);
        assert_approx_eq!(f32, result[3], 30.0);
        assert_approx_eq!(f32, result[4], 35.0);
    }

    #[test]
    fn test_invert_reversed_range() {
        let scale = LinearNumericScale::new(&LinearNumericScaleConfig {
            domain: (10.0, 30.0),
            range: (100.0, 0.0),
            clamp: true,
            ..Default::default()
        });

        let result = scale.invert_all(&[125.0, 100.0, 50.0, 0.0, -25.0]);
        assert_approx_eq!(f32, result[0], 10.0);
        assert_approx_eq!(f32, result[2], 20.0);
        assert_approx_eq!(f32, result[4], 30.0);
    }

    #[test]
    fn test_ticks() {
        let scale = LinearNumericScale::new(&LinearNumericScaleConfig {
            domain: (0.0, 10.0),
            range: (0.0, 100.0),
            ..Default::default()
        });

        assert_eq!(scale.ticks(Some(5.0)), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(scale.ticks(Some(2.0)), vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_nice_convergence() {
        let scale = LinearNumericScale::new(&LinearNumericScaleConfig {
            domain: (1.1, 10.9),
            ..Default::default()
        })
        .nice(Some(10));

        assert_eq!(scale.domain(), (1.0, 11.0));
    }

    #[test]
    fn test_nice_reversed_domain() {
        let scale = LinearNumericScale::new(&LinearNumericScaleConfig {
            domain: (-1.1, -10.9),
            ..Default::default()
        })
        .nice(Some(10));

        assert_eq!(scale.domain(), (-1.0, -11.0));
    }
}
