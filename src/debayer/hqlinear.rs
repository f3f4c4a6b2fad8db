// High-quality linear interpolation for demosaicing of Bayer-patterned
// color images, by Henrique S. Malvar, Li-wei He and Ross Cutler, ICASSP'04.

use crate::debayer::{border, clip, FilterPattern, RawSample};
use crate::error::Result;

/// Gradient-corrected linear reconstruction. Every missing sample is a
/// fixed integer-weighted blend of same-color neighbors at distance 2 and
/// opposite-color neighbors at distance 1 and 3, normalized as
/// `(sum + 4) >> 3` and clamped. The kernels reach 2 pixels out, so a
/// 2-pixel border is blacked out first; frames too small to hold any
/// interior come back fully black.
pub(crate) fn decode<T: RawSample>(
    bayer: &[T],
    rgb: &mut [T],
    sx: usize,
    sy: usize,
    pattern: FilterPattern,
    max: i32,
) -> Result<()> {
    if sx < 5 || sy < 5 {
        rgb.fill(T::ZERO);
        return Ok(());
    }

    border::clear(rgb, sx, sy, 2);

    let step = sx;
    // The interior starts one row and one column into the pattern, which
    // keeps start_with_green but lands on the opposite diagonal.
    let mut blue = -pattern.blue_sign();
    let mut start_with_green = pattern.starts_on_green();
    let width = sx - 4;
    let height = sy - 4;

    for row in 0..height {
        let mut b = row * step;
        let bayer_end = b + width;
        let mut r = (row + 2) * 3 * step + 7;

        if start_with_green {
            let g = bayer[b + 2 * step + 2];
            rgb[r] = g;
            let (t0, t1) = at_green(bayer, b, step, g.widen());
            let t0 = clip((t0 + 4) >> 3, max);
            let t1 = clip((t1 + 4) >> 3, max);
            if blue > 0 {
                rgb[r - 1] = t0;
                rgb[r + 1] = t1;
            } else {
                rgb[r + 1] = t0;
                rgb[r - 1] = t1;
            }
            b += 1;
            r += 3;
        }

        while b + 2 <= bayer_end {
            // first pixel of the pair carries the raw red or blue sample
            let c = bayer[b + 2 * step + 2];
            let (t0, t1) = at_chroma(bayer, b, step, c.widen());
            let t0 = clip((t0 + 4) >> 3, max);
            let t1 = clip((t1 + 4) >> 3, max);
            rgb[r] = t1;
            if blue > 0 {
                rgb[r + 1] = c;
                rgb[r - 1] = t0;
            } else {
                rgb[r - 1] = c;
                rgb[r + 1] = t0;
            }

            // second pixel of the pair sits on a raw green sample
            let g = bayer[b + 2 * step + 3];
            rgb[r + 3] = g;
            let (t0, t1) = at_green(bayer, b + 1, step, g.widen());
            let t0 = clip((t0 + 4) >> 3, max);
            let t1 = clip((t1 + 4) >> 3, max);
            if blue > 0 {
                rgb[r + 2] = t0;
                rgb[r + 4] = t1;
            } else {
                rgb[r + 4] = t0;
                rgb[r + 2] = t1;
            }
            b += 2;
            r += 6;
        }

        if b < bayer_end {
            let c = bayer[b + 2 * step + 2];
            let (t0, t1) = at_chroma(bayer, b, step, c.widen());
            let t0 = clip((t0 + 4) >> 3, max);
            let t1 = clip((t1 + 4) >> 3, max);
            rgb[r] = t1;
            if blue > 0 {
                rgb[r + 1] = c;
                rgb[r - 1] = t0;
            } else {
                rgb[r - 1] = c;
                rgb[r + 1] = t0;
            }
        }

        blue = -blue;
        start_with_green = !start_with_green;
    }

    Ok(())
}

// Kernels for a target sitting on a raw green sample, centered at
// bayer[b + 2*step + 2]. Returns the un-normalized sums for the colors of
// the vertical neighbors (t0) and the horizontal neighbors (t1): 5x the
// center green, 4x the distance-1 neighbors of the wanted color, minus the
// ring of distance-2 samples, plus half the same-axis distance-2 pair.
#[inline]
fn at_green<T: RawSample>(bayer: &[T], b: usize, step: usize, g: i32) -> (i32, i32) {
    let t0 = g * 5
        + ((bayer[b + step + 2].widen() + bayer[b + 3 * step + 2].widen()) << 2)
        - bayer[b + 2].widen()
        - bayer[b + step + 1].widen()
        - bayer[b + step + 3].widen()
        - bayer[b + 3 * step + 1].widen()
        - bayer[b + 3 * step + 3].widen()
        - bayer[b + 4 * step + 2].widen()
        + ((bayer[b + 2 * step].widen() + bayer[b + 2 * step + 4].widen() + 1) >> 1);
    let t1 = g * 5
        + ((bayer[b + 2 * step + 1].widen() + bayer[b + 2 * step + 3].widen()) << 2)
        - bayer[b + 2 * step].widen()
        - bayer[b + step + 1].widen()
        - bayer[b + step + 3].widen()
        - bayer[b + 3 * step + 1].widen()
        - bayer[b + 3 * step + 3].widen()
        - bayer[b + 2 * step + 4].widen()
        + ((bayer[b + 2].widen() + bayer[b + 4 * step + 2].widen() + 1) >> 1);
    (t0, t1)
}

// Kernels for a target on a raw red or blue sample, centered at
// bayer[b + 2*step + 2] with widened value `c`. t0 estimates the opposite
// chroma from the diagonal quad against the same-color axis ring; t1
// estimates green from the cross.
#[inline]
fn at_chroma<T: RawSample>(bayer: &[T], b: usize, step: usize, c: i32) -> (i32, i32) {
    let ring = bayer[b + 2].widen()
        + bayer[b + 2 * step].widen()
        + bayer[b + 2 * step + 4].widen()
        + bayer[b + 4 * step + 2].widen();
    let t0 = ((bayer[b + step + 1].widen()
        + bayer[b + step + 3].widen()
        + bayer[b + 3 * step + 1].widen()
        + bayer[b + 3 * step + 3].widen())
        << 1)
        - ((ring * 3 + 1) >> 1)
        + c * 6;
    let t1 = ((bayer[b + step + 2].widen()
        + bayer[b + 2 * step + 1].widen()
        + bayer[b + 2 * step + 3].widen()
        + bayer[b + 3 * step + 2].widen())
        << 1)
        - ring
        + (c << 2);
    (t0, t1)
}
