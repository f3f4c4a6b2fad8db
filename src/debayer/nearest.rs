use crate::debayer::{border, FilterPattern, RawSample};
use crate::error::Result;

/// Nearest-neighbor reconstruction. Every pixel of a 2x2 cell takes the
/// cell's single raw red and blue samples unchanged, and the green of the
/// closest raw green sample. No arithmetic at all, so also no rounding;
/// the cost is hard 2x2 blocking.
pub(crate) fn decode<T: RawSample>(
    bayer: &[T],
    rgb: &mut [T],
    sx: usize,
    sy: usize,
    pattern: FilterPattern,
) -> Result<()> {
    if sx < 2 || sy < 2 {
        rgb.fill(T::ZERO);
        return Ok(());
    }

    border::clear_trailing_edges(rgb, sx, sy);

    let step = sx;
    let mut blue = pattern.blue_sign();
    let mut start_with_green = pattern.starts_on_green();
    let width = sx - 1;
    let height = sy - 1;

    for row in 0..height {
        let mut b = row * step;
        let bayer_end = b + width;
        // rgb cursor sits on the green channel of the current pixel
        let mut r = row * 3 * step + 1;

        if start_with_green {
            if blue > 0 {
                rgb[r - 1] = bayer[b + 1];
                rgb[r + 1] = bayer[b + step];
            } else {
                rgb[r + 1] = bayer[b + 1];
                rgb[r - 1] = bayer[b + step];
            }
            rgb[r] = bayer[b + step + 1];
            b += 1;
            r += 3;
        }

        if blue > 0 {
            while b + 2 <= bayer_end {
                rgb[r - 1] = bayer[b];
                rgb[r] = bayer[b + 1];
                rgb[r + 1] = bayer[b + step + 1];

                rgb[r + 2] = bayer[b + 2];
                rgb[r + 3] = bayer[b + step + 2];
                rgb[r + 4] = bayer[b + step + 1];
                b += 2;
                r += 6;
            }
        } else {
            while b + 2 <= bayer_end {
                rgb[r + 1] = bayer[b];
                rgb[r] = bayer[b + 1];
                rgb[r - 1] = bayer[b + step + 1];

                rgb[r + 4] = bayer[b + 2];
                rgb[r + 3] = bayer[b + step + 2];
                rgb[r + 2] = bayer[b + step + 1];
                b += 2;
                r += 6;
            }
        }

        if b < bayer_end {
            if blue > 0 {
                rgb[r - 1] = bayer[b];
                rgb[r + 1] = bayer[b + step + 1];
            } else {
                rgb[r + 1] = bayer[b];
                rgb[r - 1] = bayer[b + step + 1];
            }
            rgb[r] = bayer[b + 1];
        }

        blue = -blue;
        start_with_green = !start_with_green;
    }

    Ok(())
}
