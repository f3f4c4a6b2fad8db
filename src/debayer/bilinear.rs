use crate::debayer::{border, clip, FilterPattern, RawSample};
use crate::error::Result;

/// Bilinear reconstruction. A missing red or blue sample is the rounded
/// average of its 2 or 4 same-color neighbors on the diagonal quad; a
/// missing green is the rounded average of its cross neighbors. Interior
/// only; a 1-pixel border is blacked out first.
pub(crate) fn decode<T: RawSample>(
    bayer: &[T],
    rgb: &mut [T],
    sx: usize,
    sy: usize,
    pattern: FilterPattern,
    max: i32,
) -> Result<()> {
    if sx < 3 || sy < 3 {
        rgb.fill(T::ZERO);
        return Ok(());
    }

    border::clear(rgb, sx, sy, 1);

    let step = sx;
    let mut blue = pattern.blue_sign();
    let mut start_with_green = pattern.starts_on_green();
    let width = sx - 2;
    let height = sy - 2;

    for row in 0..height {
        let mut b = row * step;
        let bayer_end = b + width;
        // one row and one column in from the raw origin
        let mut r = (row + 1) * 3 * step + 4;

        if start_with_green {
            let t0 = clip(
                (bayer[b + 1].widen() + bayer[b + 2 * step + 1].widen() + 1) >> 1,
                max,
            );
            let t1 = clip(
                (bayer[b + step].widen() + bayer[b + step + 2].widen() + 1) >> 1,
                max,
            );
            if blue > 0 {
                rgb[r - 1] = t0;
                rgb[r + 1] = t1;
            } else {
                rgb[r + 1] = t0;
                rgb[r - 1] = t1;
            }
            rgb[r] = bayer[b + step + 1];
            b += 1;
            r += 3;
        }

        while b + 2 <= bayer_end {
            // diagonal quad around the first pixel of the pair, then the
            // cross through it
            let t0 = clip(
                (bayer[b].widen()
                    + bayer[b + 2].widen()
                    + bayer[b + 2 * step].widen()
                    + bayer[b + 2 * step + 2].widen()
                    + 2)
                    >> 2,
                max,
            );
            let t1 = clip(
                (bayer[b + 1].widen()
                    + bayer[b + step].widen()
                    + bayer[b + step + 2].widen()
                    + bayer[b + 2 * step + 1].widen()
                    + 2)
                    >> 2,
                max,
            );
            // vertical and horizontal pairs around the second (green) pixel
            let t2 = clip(
                (bayer[b + 2].widen() + bayer[b + 2 * step + 2].widen() + 1) >> 1,
                max,
            );
            let t3 = clip(
                (bayer[b + step + 1].widen() + bayer[b + step + 3].widen() + 1) >> 1,
                max,
            );

            if blue > 0 {
                rgb[r - 1] = t0;
                rgb[r] = t1;
                rgb[r + 1] = bayer[b + step + 1];

                rgb[r + 2] = t2;
                rgb[r + 3] = bayer[b + step + 2];
                rgb[r + 4] = t3;
            } else {
                rgb[r + 1] = t0;
                rgb[r] = t1;
                rgb[r - 1] = bayer[b + step + 1];

                rgb[r + 4] = t2;
                rgb[r + 3] = bayer[b + step + 2];
                rgb[r + 2] = t3;
            }
            b += 2;
            r += 6;
        }

        if b < bayer_end {
            let t0 = clip(
                (bayer[b].widen()
                    + bayer[b + 2].widen()
                    + bayer[b + 2 * step].widen()
                    + bayer[b + 2 * step + 2].widen()
                    + 2)
                    >> 2,
                max,
            );
            let t1 = clip(
                (bayer[b + 1].widen()
                    + bayer[b + step].widen()
                    + bayer[b + step + 2].widen()
                    + bayer[b + 2 * step + 1].widen()
                    + 2)
                    >> 2,
                max,
            );
            if blue > 0 {
                rgb[r - 1] = t0;
                rgb[r + 1] = bayer[b + step + 1];
            } else {
                rgb[r + 1] = t0;
                rgb[r - 1] = bayer[b + step + 1];
            }
            rgb[r] = t1;
        }

        blue = -blue;
        start_with_green = !start_with_green;
    }

    Ok(())
}
