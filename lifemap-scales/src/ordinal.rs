use std::fmt::Debug;
use std::hash::Hash;

use crate::error::LifemapScaleError;
use indexmap::IndexMap;

/// A discrete scale that maps input values to a fixed set of output values.
/// Inputs missing from the domain map to the default value.
#[derive(Debug, Clone)]
pub struct OrdinalScale<D, R>
where
    D: Clone + Hash + Eq + Debug + Sync + 'static,
    R: Clone + Debug + Sync + 'static,
{
    mapping: IndexMap<D, R>,
    default_value: R,
}

impl<D, R> OrdinalScale<D, R>
where
    D: Clone + Hash + Eq + Debug + Sync + 'static,
    R: Clone + Debug + Sync + 'static,
{
    /// Creates a new ordinal scale from domain and range arrays of equal length
    pub fn new(domain: &[D], range: &[R], default_value: R) -> Result<Self, LifemapScaleError> {
        if domain.len() != range.len() {
            return Err(LifemapScaleError::DomainRangeMismatch {
                domain_len: domain.len(),
                range_len: range.len(),
            });
        }

        let mapping = domain
            .iter()
            .cloned()
            .zip(range.iter().cloned())
            .collect::<IndexMap<_, _>>();

        Ok(Self {
            mapping,
            default_value,
        })
    }

    /// Creates an ordinal scale that cycles through `range` when the domain is longer
    pub fn new_cycled(
        domain: &[D],
        range: &[R],
        default_value: R,
    ) -> Result<Self, LifemapScaleError> {
        if range.is_empty() {
            return Err(LifemapScaleError::EmptyRange);
        }
        let mapping = domain
            .iter()
            .cloned()
            .zip(range.iter().cloned().cycle())
            .collect::<IndexMap<_, _>>();

        Ok(Self {
            mapping,
            default_value,
        })
    }

    pub fn default_value(&self) -> &R {
        &self.default_value
    }

    /// Returns the domain in insertion order
    pub fn domain(&self) -> Vec<D> {
        self.mapping.keys().cloned().collect()
    }

    pub fn range(&self) -> Vec<R> {
        self.mapping.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn scale(&self, value: &D) -> R {
        self.mapping
            .get(value)
            .unwrap_or(&self.default_value)
            .clone()
    }

    pub fn scale_all(&self, values: &[D]) -> Vec<R> {
        values.iter().map(|v| self.scale(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_ordinal_scale() -> Result<(), LifemapScaleError> {
        let scale = OrdinalScale::new(&["a", "b", "c"], &["red", "green", "blue"], "black")?;

        let result = scale.scale_all(&["a", "b", "c", "d", "a"]);
        assert_eq!(result, vec!["red", "green", "blue", "black", "red"]);
        assert_eq!(scale.domain(), vec!["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn test_domain_range_mismatch() {
        let result = OrdinalScale::new(&["a", "b"], &["red"], "black");
        assert_eq!(
            result.err(),
            Some(LifemapScaleError::DomainRangeMismatch {
                domain_len: 2,
                range_len: 1
            })
        );
    }

    #[test]
    fn test_cycled_range() -> Result<(), LifemapScaleError> {
        let scale = OrdinalScale::new_cycled(&["a", "b", "c"], &[1, 2], 0)?;
        assert_eq!(scale.range(), vec![1, 2, 1]);
        assert_eq!(scale.scale(&"z"), 0);
        Ok(())
    }

    #[test]
    fn test_cycled_empty_range() {
        let result = OrdinalScale::<&str, i32>::new_cycled(&["a"], &[], 0);
        assert_eq!(result.err(), Some(LifemapScaleError::EmptyRange));
    }
}
