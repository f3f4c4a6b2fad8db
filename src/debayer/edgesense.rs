use crate::debayer::{FilterPattern, RawSample};
use crate::error::{DebayerError, Result};

/// Edge-sensing interpolation II (Laroche, U.S. patent 5,373,322).
/// Removed due to patent concerns; the selector is kept so callers get a
/// stable error instead of silently falling back. Never writes to the
/// output buffer.
pub(crate) fn decode<T: RawSample>(
    _bayer: &[T],
    _rgb: &mut [T],
    _sx: usize,
    _sy: usize,
    _pattern: FilterPattern,
) -> Result<()> {
    Err(DebayerError::FunctionNotSupported)
}
