use crate::debayer::{border, clip, FilterPattern, RawSample};
use crate::error::Result;

/// The reconstruction used inside AVT cameras: red and blue are copied from
/// the nearest raw sample like nearest-neighbor, while green is the rounded
/// average of the two nearest raw greens, which smooths the channel the eye
/// is most sensitive to.
pub(crate) fn decode<T: RawSample>(
    bayer: &[T],
    rgb: &mut [T],
    sx: usize,
    sy: usize,
    pattern: FilterPattern,
    max: i32,
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
        let mut r = row * 3 * step + 1;

        if start_with_green {
            if blue > 0 {
                rgb[r - 1] = bayer[b + 1];
                rgb[r + 1] = bayer[b + step];
            } else {
                rgb[r + 1] = bayer[b + 1];
                rgb[r - 1] = bayer[b + step];
            }
            rgb[r] = clip((bayer[b].widen() + bayer[b + step + 1].widen() + 1) >> 1, max);
            b += 1;
            r += 3;
        }

        if blue > 0 {
            while b + 2 <= bayer_end {
                rgb[r - 1] = bayer[b];
                rgb[r] = clip((bayer[b + 1].widen() + bayer[b + step].widen() + 1) >> 1, max);
                rgb[r + 1] = bayer[b + step + 1];

                rgb[r + 2] = bayer[b + 2];
                rgb[r + 3] =
                    clip((bayer[b + 1].widen() + bayer[b + step + 2].widen() + 1) >> 1, max);
                rgb[r + 4] = bayer[b + step + 1];
                b += 2;
                r += 6;
            }
        } else {
            while b + 2 <= bayer_end {
                rgb[r + 1] = bayer[b];
                rgb[r] = clip((bayer[b + 1].widen() + bayer[b + step].widen() + 1) >> 1, max);
                rgb[r - 1] = bayer[b + step + 1];

                rgb[r + 4] = bayer[b + 2];
                rgb[r + 3] =
                    clip((bayer[b + 1].widen() + bayer[b + step + 2].widen() + 1) >> 1, max);
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
            rgb[r] = clip((bayer[b + 1].widen() + bayer[b + step].widen() + 1) >> 1, max);
        }

        blue = -blue;
        start_with_green = !start_with_green;
    }

    Ok(())
}
