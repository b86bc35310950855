pub mod group;
pub mod mark;
pub mod rect;
pub mod rule;
pub mod text;

use crate::error::LifemapSceneGraphError;
use lifemap_common::value::ScalarOrArray;

/// Array channels must hold exactly `len` values, scalars are broadcast
pub(crate) fn check_channel<T: Sync + Clone>(
    mark: &str,
    channel: &'static str,
    values: &ScalarOrArray<T>,
    len: u32,
) -> Result<(), LifemapSceneGraphError> {
    if let ScalarOrArray::Array(values) = values {
        if values.len() != len as usize {
            return Err(LifemapSceneGraphError::ChannelLengthMismatch {
                mark: mark.to_string(),
                channel,
                expected: len as usize,
                actual: values.len(),
            });
        }
    }
    Ok(())
}
