use std::result;
use thiserror::Error;

/// Failure modes of a debayer call. Anything other than success means the
/// output buffer contents must not be trusted or displayed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum DebayerError {
    /// The color filter tag is not one of the four valid 2x2 tiles.
    #[error("invalid color filter pattern")]
    InvalidColorFilter,

    /// The method selector is outside the set of decodable methods.
    #[error("invalid bayer decoding method")]
    InvalidBayerMethod,

    /// The method exists as a selector but its implementation was removed.
    #[error("function not supported")]
    FunctionNotSupported,
}

pub type Result<T> = result::Result<T, DebayerError>;
