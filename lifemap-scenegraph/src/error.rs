use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LifemapSceneGraphError {
    #[error("Internal error: `{0}`")]
    InternalError(String),

    #[error("Mark `{mark}` has {actual} values for channel `{channel}`, expected {expected}")]
    ChannelLengthMismatch {
        mark: String,
        channel: &'static str,
        expected: usize,
        actual: usize,
    },
}
