//! Error types

use thiserror::Error;

/// Error raised when caller-supplied viewer options cannot be converted to
/// JSON
///
/// Rendering itself never fails: once a [`RedocConfig`](crate::RedocConfig)
/// holds its options as a JSON value, the page is produced unconditionally.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The options value rejected JSON serialization
    #[error("failed to serialize viewer options: {0}")]
    Serialize(#[from] serde_json::Error),
}
