use itertools::iproduct;

use crate::debayer::RawSample;

/// Zeroes the outer `w`-pixel frame of an `sx` x `sy` interleaved RGB
/// buffer. Decoders that cannot interpolate all the way to the edge run
/// this before filling the interior; the margin comes out exactly `w`
/// pixels wide on every side.
pub(crate) fn clear<T: RawSample>(rgb: &mut [T], sx: usize, sy: usize, w: usize) {
    if 2 * w >= sx || 2 * w >= sy {
        rgb.fill(T::ZERO);
        return;
    }

    // Top and bottom bands, swept from both ends of the buffer at once.
    let band = sx * w * 3;
    let len = sx * sy * 3;
    for i in 0..band {
        rgb[i] = T::ZERO;
        rgb[len - 1 - i] = T::ZERO;
    }

    // Left and right bands of the remaining rows.
    for (row, col) in iproduct!(w..sy - w, 0..w) {
        let left = (row * sx + col) * 3;
        let right = (row * sx + sx - 1 - col) * 3;
        for c in 0..3 {
            rgb[left + c] = T::ZERO;
            rgb[right + c] = T::ZERO;
        }
    }
}

// The last row and column have no forward neighbors to interpolate from;
// the row-pair decoders black them out instead.
pub(crate) fn clear_trailing_edges<T: RawSample>(rgb: &mut [T], sx: usize, sy: usize) {
    for v in rgb[sx * (sy - 1) * 3..].iter_mut() {
        *v = T::ZERO;
    }
    for row in 0..sy {
        let i = (row * sx + sx - 1) * 3;
        rgb[i] = T::ZERO;
        rgb[i + 1] = T::ZERO;
        rgb[i + 2] = T::ZERO;
    }
}
