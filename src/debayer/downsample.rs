use itertools::iproduct;

use crate::debayer::{clip, FilterPattern, RawSample};
use crate::error::Result;

/// Half-resolution reconstruction. Every complete 2x2 tile collapses to a
/// single RGB pixel: the tile's raw red and blue samples pass through and
/// green is the rounded average of the tile's two greens. Nothing is
/// interpolated, so there is no border to black out; odd trailing rows or
/// columns are simply dropped.
///
/// The output buffer must be sized for `sx/2` x `sy/2` pixels.
pub(crate) fn decode<T: RawSample>(
    bayer: &[T],
    rgb: &mut [T],
    sx: usize,
    sy: usize,
    pattern: FilterPattern,
    max: i32,
) -> Result<()> {
    let dw = sx / 2;
    let dh = sy / 2;

    // positions of red, the two greens, and blue inside one tile
    let (red, g0, g1, blu) = match pattern {
        FilterPattern::RGGB => (0, 1, sx, sx + 1),
        FilterPattern::BGGR => (sx + 1, 1, sx, 0),
        FilterPattern::GRBG => (1, 0, sx + 1, sx),
        FilterPattern::GBRG => (sx, 0, sx + 1, 1),
    };

    for (row, col) in iproduct!(0..dh, 0..dw) {
        let base = 2 * row * sx + 2 * col;
        let out = (row * dw + col) * 3;
        rgb[out] = clip(bayer[base + red].widen(), max);
        rgb[out + 1] = clip(
            (bayer[base + g0].widen() + bayer[base + g1].widen() + 1) >> 1,
            max,
        );
        rgb[out + 2] = clip(bayer[base + blu].widen(), max);
    }

    Ok(())
}
