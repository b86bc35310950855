use std::sync::Arc;

use super::ContinuousNumericScale;

/// Handles logarithmic transformations with different bases
#[derive(Clone, Debug)]
enum LogFunction {
    Static {
        log_fun: fn(f32) -> f32,
        pow_fun: fn(f32) -> f32,
        base: f32,
    },
    Custom {
        ln_base: f32,
        base: f32,
    },
}

impl LogFunction {
    /// Uses the specialized std implementations for the common bases
    fn new(base: f32) -> Self {
        if base == std::f32::consts::E {
            LogFunction::Static {
                log_fun: f32::ln,
                pow_fun: f32::exp,
                base,
            }
        } else if base == 10.0 {
            LogFunction::Static {
                log_fun: f32::log10,
                pow_fun: |x| 10.0f32.powf(x),
                base,
            }
        } else if base == 2.0 {
            LogFunction::Static {
                log_fun: f32::log2,
                pow_fun: |x| 2.0f32.powf(x),
                base,
            }
        } else {
            LogFunction::Custom {
                ln_base: base.ln(),
                base,
            }
        }
    }

    fn log(&self, x: f32) -> f32 {
        match self {
            LogFunction::Static { log_fun, .. } => log_fun(x),
            LogFunction::Custom { ln_base, .. } => x.ln() / ln_base,
        }
    }

    fn pow(&self, x: f32) -> f32 {
        match self {
            LogFunction::Static { pow_fun, .. } => pow_fun(x),
            LogFunction::Custom { base, .. } => base.powf(x),
        }
    }

    fn base(&self) -> f32 {
        match self {
            LogFunction::Static { base, .. } | LogFunction::Custom { base, .. } => *base,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogNumericScaleConfig {
    pub domain: (f32, f32),
    pub range: (f32, f32),
    pub base: f32,
    pub clamp: bool,
    pub nice: bool,
}

impl Default for LogNumericScaleConfig {
    fn default() -> Self {
        Self {
            domain: (1.0, 10.0),
            range: (0.0, 1.0),
            base: 10.0,
            clamp: false,
            nice: false,
        }
    }
}

/// A logarithmic scale that maps numeric input values using a log transform.
/// Supports different bases, clamping, domain niceing, and tick generation.
///
/// Negative domains are handled by reflecting through zero, so the domain must
/// not include or cross zero.
#[derive(Clone, Debug)]
pub struct LogNumericScale {
    domain_start: f32,
    domain_end: f32,
    range_start: f32,
    range_end: f32,
    clamp: bool,
    log_fun: Arc<LogFunction>,
}

impl LogNumericScale {
    pub fn new(config: &LogNumericScaleConfig) -> Self {
        let this = Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
            log_fun: Arc::new(LogFunction::new(config.base)),
        };
        if config.nice {
            this.nice()
        } else {
            this
        }
    }

    pub fn base(&self) -> f32 {
        self.log_fun.base()
    }

    /// Extends the domain outward to whole powers of the base
    pub fn nice(mut self) -> Self {
        if self.domain_start.is_nan() || self.domain_end.is_nan() {
            return self;
        }
        if self.domain_start == 0.0 && self.domain_end == 0.0 {
            return self;
        }

        let (start, stop, reverse) = if self.domain_start < self.domain_end {
            (self.domain_start, self.domain_end, false)
        } else {
            (self.domain_end, self.domain_start, true)
        };

        let (nstart, nstop) = if start < 0.0 && stop < 0.0 {
            (
                -self.log_fun.pow(self.log_fun.log(-start).ceil()),
                -self.log_fun.pow(self.log_fun.log(-stop).floor()),
            )
        } else {
            (
                self.log_fun.pow(self.log_fun.log(start).floor()),
                self.log_fun.pow(self.log_fun.log(stop).ceil()),
            )
        };

        if reverse {
            self.domain_start = nstop;
            self.domain_end = nstart;
        } else {
            self.domain_start = nstart;
            self.domain_end = nstop;
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

    pub fn with_base(mut self, base: f32) -> Self {
        self.log_fun = Arc::new(LogFunction::new(base));
        self
    }

    /// Signed log so that strictly negative domains map symmetrically
    fn transform(&self, v: f32) -> f32 {
        if v < 0.0 {
            -self.log_fun.log(-v)
        } else {
            self.log_fun.log(v)
        }
    }

    fn untransform(&self, v: f32, negative: bool) -> f32 {
        if negative {
            -self.log_fun.pow(-v)
        } else {
            self.log_fun.pow(v)
        }
    }

    /// Returns (scale, offset) of the affine map from log space to range, or
    /// `None` when the domain is degenerate in log space
    fn log_affine(&self) -> Option<(f32, f32)> {
        if self.domain_start == self.domain_end || self.range_start == self.range_end {
            return None;
        }
        let log_start = self.transform(self.domain_start);
        let log_end = self.transform(self.domain_end);
        let span = log_end - log_start;
        if span == 0.0 || !span.is_finite() {
            return None;
        }
        let scale = (self.range_end - self.range_start) / span;
        Some((scale, self.range_start - scale * log_start))
    }

    fn range_bounds(&self) -> (f32, f32) {
        if self.range_start <= self.range_end {
            (self.range_start, self.range_end)
        } else {
            (self.range_end, self.range_start)
        }
    }
}

impl ContinuousNumericScale for LogNumericScale {
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
        let Some((scale, offset)) = self.log_affine() else {
            return self.range_start;
        };

        if value.is_nan() {
            return f32::NAN;
        }

        let negative_domain = self.domain_start < 0.0;
        let result = if value == 0.0 || (value < 0.0) != negative_domain {
            // Outside the half line the domain lives on
            if self.clamp {
                if negative_domain == (self.range_start <= self.range_end) {
                    return self.range_bounds().1;
                } else {
                    return self.range_bounds().0;
                }
            }
            f32::NAN
        } else {
            scale * self.transform(value) + offset
        };

        if self.clamp {
            let (range_min, range_max) = self.range_bounds();
            result.clamp(range_min, range_max)
        } else {
            result
        }
    }

    fn invert(&self, value: f32) -> f32 {
        let Some((scale, offset)) = self.log_affine() else {
            return self.domain_start;
        };

        let value = if self.clamp {
            let (range_min, range_max) = self.range_bounds();
            value.clamp(range_min, range_max)
        } else {
            value
        };
        self.untransform((value - offset) / scale, self.domain_start < 0.0)
    }

    /// Follows d3's log ticks: every integer multiple of each power of the base
    /// when the domain spans fewer decades than `count`, otherwise powers only
    fn ticks(&self, count: Option<f32>) -> Vec<f32> {
        let count = count.unwrap_or(10.0);
        if !(self.domain_start > 0.0 && self.domain_end > 0.0) {
            return vec![];
        }

        let (mut u, mut v) = (self.domain_start, self.domain_end);
        let reverse = v < u;
        if reverse {
            std::mem::swap(&mut u, &mut v);
        }

        let i = self.log_fun.log(u);
        let j = self.log_fun.log(v);
        let base = self.log_fun.base();

        let mut z = Vec::new();
        if base.fract() == 0.0 && j - i < count {
            for exp in (i.floor() as i32)..=(j.ceil() as i32) {
                for k in 1..(base as i32) {
                    // powi keeps whole powers of an integer base exact
                    let t = if exp < 0 {
                        k as f32 / base.powi(-exp)
                    } else {
                        k as f32 * base.powi(exp)
                    };
                    if t < u {
                        continue;
                    }
                    if t > v {
                        break;
                    }
                    z.push(t);
                }
            }
            if (z.len() as f32) * 2.0 < count {
                z = crate::array::ticks(u, v, count);
            }
        } else {
            z = crate::array::ticks(i, j, count.min(j - i))
                .into_iter()
                .map(|x| self.log_fun.pow(x))
                .collect();
        }

        if reverse {
            z.reverse();
        }
        z
    }
}
