use crate::error::LifemapScaleError;
use crate::ordinal::OrdinalScale;
use std::fmt::Debug;
use std::hash::Hash;

/// A band scale divides a continuous range into uniform bands, one per domain value.
///
/// Used to lay out categorical legend entries side by side.
#[derive(Debug, Clone)]
pub struct BandScale<D: Debug + Clone + Hash + Eq + Sync + 'static> {
    domain: Vec<D>,
    ordinal_scale: OrdinalScale<D, f32>,
    range: (f32, f32),
    padding_inner: f32,
    padding_outer: f32,
    align: f32,
}

impl<D: Debug + Clone + Hash + Eq + Sync + 'static> BandScale<D> {
    /// Creates a new band scale with the given domain.
    ///
    /// # Defaults
    /// - range: (0.0, 1.0)
    /// - padding_inner: 0.0
    /// - padding_outer: 0.0
    /// - align: 0.5
    pub fn try_new(domain: Vec<D>) -> Result<Self, LifemapScaleError> {
        if domain.is_empty() {
            return Err(LifemapScaleError::EmptyDomain);
        }
        let mut this = Self {
            ordinal_scale: OrdinalScale::new(&domain, &vec![f32::NAN; domain.len()], f32::NAN)?,
            domain,
            range: (0.0, 1.0),
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
        };

        this.update_ordinal_scale()?;
        Ok(this)
    }

    fn update_ordinal_scale(&mut self) -> Result<(), LifemapScaleError> {
        let n = self.domain.len();
        let reverse = self.range.1 < self.range.0;
        let (start, stop) = self.ordered_range();

        let step = self.step();
        let start = start + (stop - start - step * (n as f32 - self.padding_inner)) * self.align;

        let range_values: Vec<f32> = (0..n).map(|i| start + step * i as f32).collect();
        let range_values = if reverse {
            range_values.into_iter().rev().collect()
        } else {
            range_values
        };

        self.ordinal_scale = OrdinalScale::new(&self.domain, &range_values, f32::NAN)?;
        Ok(())
    }

    fn ordered_range(&self) -> (f32, f32) {
        if self.range.1 < self.range.0 {
            (self.range.1, self.range.0)
        } else {
            (self.range.0, self.range.1)
        }
    }

    /// Sets the output range. The range may be reversed for inverted scales.
    pub fn range(mut self, range: (f32, f32)) -> Result<Self, LifemapScaleError> {
        self.range = range;
        self.update_ordinal_scale()?;
        Ok(self)
    }

    /// Sets the fraction of each step reserved as blank space between bands, clamped to [0, 1]
    pub fn padding_inner(mut self, padding: f32) -> Result<Self, LifemapScaleError> {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.update_ordinal_scale()?;
        Ok(self)
    }

    /// Sets the blank space before the first and after the last band, in steps
    pub fn padding_outer(mut self, padding: f32) -> Result<Self, LifemapScaleError> {
        self.padding_outer = padding.max(0.0);
        self.update_ordinal_scale()?;
        Ok(self)
    }

    /// Sets both inner and outer padding to the same value
    pub fn padding(mut self, padding: f32) -> Result<Self, LifemapScaleError> {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding.max(0.0);
        self.update_ordinal_scale()?;
        Ok(self)
    }

    /// Sets how leftover space is distributed: 0 aligns bands to the start,
    /// 0.5 centers them and 1 aligns them to the end
    pub fn align(mut self, align: f32) -> Result<Self, LifemapScaleError> {
        self.align = align.clamp(0.0, 1.0);
        self.update_ordinal_scale()?;
        Ok(self)
    }

    pub fn get_domain(&self) -> &[D] {
        &self.domain
    }

    pub fn get_range(&self) -> (f32, f32) {
        self.range
    }

    pub fn get_padding_inner(&self) -> f32 {
        self.padding_inner
    }

    pub fn get_padding_outer(&self) -> f32 {
        self.padding_outer
    }

    pub fn get_align(&self) -> f32 {
        self.align
    }

    /// Returns the width of each band
    pub fn bandwidth(&self) -> f32 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Returns the distance between the starts of adjacent bands
    pub fn step(&self) -> f32 {
        let (start, stop) = self.ordered_range();
        (stop - start)
            / 1.0_f32.max(bandspace(
                self.domain.len(),
                Some(self.padding_inner),
                Some(self.padding_outer),
            ))
    }

    /// Start position of the band for `value`, NaN when the value is not in the domain
    pub fn scale(&self, value: &D) -> f32 {
        self.ordinal_scale.scale(value)
    }

    /// Center position of the band for `value`
    pub fn center(&self, value: &D) -> f32 {
        self.scale(value) + self.bandwidth() / 2.0
    }

    pub fn scale_all(&self, values: &[D]) -> Vec<f32> {
        self.ordinal_scale.scale_all(values)
    }
}

/// Number of steps a band scale spans for `count` domain values and the given padding
pub fn bandspace(count: usize, padding_inner: Option<f32>, padding_outer: Option<f32>) -> f32 {
    let padding_inner = padding_inner.unwrap_or(0.0).clamp(0.0, 1.0);
    let padding_outer = padding_outer.unwrap_or(0.0).max(0.0);

    count as f32 - padding_inner + padding_outer * 2.0
}
