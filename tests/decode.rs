use rawbayer::debayer::{decode_8bit, DebayerMethod, FilterPattern};

const ALL_PATTERNS: [FilterPattern; 4] = [
    FilterPattern::RGGB,
    FilterPattern::GBRG,
    FilterPattern::GRBG,
    FilterPattern::BGGR,
];

// Channel index (0=R, 1=G, 2=B) of the raw sample at (row, col).
fn color_at(pattern: FilterPattern, row: usize, col: usize) -> usize {
    let tile = match pattern {
        FilterPattern::RGGB => [[0, 1], [1, 2]],
        FilterPattern::GBRG => [[1, 2], [0, 1]],
        FilterPattern::GRBG => [[1, 0], [2, 1]],
        FilterPattern::BGGR => [[2, 1], [1, 0]],
    };
    tile[row & 1][col & 1]
}

// Mosaic where every raw sample carries the constant for its color.
fn constant_mosaic(
    width: usize,
    height: usize,
    pattern: FilterPattern,
    rgb: [u8; 3],
) -> Vec<u8> {
    let mut mosaic = vec![0u8; width * height];
    for row in 0..height {
        for col in 0..width {
            mosaic[row * width + col] = rgb[color_at(pattern, row, col)];
        }
    }
    mosaic
}

fn pixel(rgb: &[u8], width: usize, x: usize, y: usize) -> [u8; 3] {
    let i = (y * width + x) * 3;
    [rgb[i], rgb[i + 1], rgb[i + 2]]
}

#[test]
fn test_nearest_constant_rggb() {
    let width = 8;
    let height = 6;
    let bayer = constant_mosaic(width, height, FilterPattern::RGGB, [100, 150, 200]);
    let mut rgb = vec![0u8; width * height * 3];

    decode_8bit(
        &bayer,
        &mut rgb,
        width,
        height,
        FilterPattern::RGGB,
        DebayerMethod::Nearest,
    )
    .unwrap();

    for y in 0..height {
        for x in 0..width {
            let expected = if x == width - 1 || y == height - 1 {
                [0, 0, 0]
            } else {
                [100, 150, 200]
            };
            assert_eq!(pixel(&rgb, width, x, y), expected, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_row_pair_methods_constant_all_patterns() {
    let width = 10;
    let height = 8;

    for method in [DebayerMethod::Nearest, DebayerMethod::Simple] {
        for pattern in ALL_PATTERNS {
            let bayer = constant_mosaic(width, height, pattern, [40, 90, 160]);
            let mut rgb = vec![0xFFu8; width * height * 3];

            decode_8bit(&bayer, &mut rgb, width, height, pattern, method).unwrap();

            for y in 0..height {
                for x in 0..width {
                    let expected = if x == width - 1 || y == height - 1 {
                        [0, 0, 0]
                    } else {
                        [40, 90, 160]
                    };
                    assert_eq!(
                        pixel(&rgb, width, x, y),
                        expected,
                        "{:?} {:?} pixel ({}, {})",
                        method,
                        pattern,
                        x,
                        y
                    );
                }
            }
        }
    }
}

#[test]
fn test_bilinear_constant_all_patterns() {
    let width = 9;
    let height = 7;

    for pattern in ALL_PATTERNS {
        let bayer = constant_mosaic(width, height, pattern, [64, 128, 192]);
        let mut rgb = vec![0xFFu8; width * height * 3];

        decode_8bit(
            &bayer,
            &mut rgb,
            width,
            height,
            pattern,
            DebayerMethod::Bilinear,
        )
        .unwrap();

        for y in 0..height {
            for x in 0..width {
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                let expected = if border { [0, 0, 0] } else { [64, 128, 192] };
                assert_eq!(
                    pixel(&rgb, width, x, y),
                    expected,
                    "{:?} pixel ({}, {})",
                    pattern,
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn test_hqlinear_constant_all_patterns() {
    let width = 12;
    let height = 10;

    for pattern in ALL_PATTERNS {
        let bayer = constant_mosaic(width, height, pattern, [30, 110, 220]);
        let mut rgb = vec![0xFFu8; width * height * 3];

        decode_8bit(
            &bayer,
            &mut rgb,
            width,
            height,
            pattern,
            DebayerMethod::HQLinear,
        )
        .unwrap();

        for y in 0..height {
            for x in 0..width {
                let border = x < 2 || y < 2 || x >= width - 2 || y >= height - 2;
                let expected = if border { [0, 0, 0] } else { [30, 110, 220] };
                assert_eq!(
                    pixel(&rgb, width, x, y),
                    expected,
                    "{:?} pixel ({}, {})",
                    pattern,
                    x,
                    y
                );
            }
        }
    }
}

// 4x4 RGGB ramp with bayer[i] = i. Interior bilinear averages land exactly
// on the center of each neighborhood, so the expected values are exact.
#[test]
fn test_bilinear_exact_values() {
    let bayer: Vec<u8> = (0u8..16).collect();
    let mut rgb = vec![0xFFu8; 4 * 4 * 3];

    decode_8bit(
        &bayer,
        &mut rgb,
        4,
        4,
        FilterPattern::RGGB,
        DebayerMethod::Bilinear,
    )
    .unwrap();

    assert_eq!(pixel(&rgb, 4, 1, 1), [5, 5, 5]);
    assert_eq!(pixel(&rgb, 4, 2, 1), [6, 6, 6]);
    assert_eq!(pixel(&rgb, 4, 1, 2), [9, 9, 9]);
    assert_eq!(pixel(&rgb, 4, 2, 2), [10, 10, 10]);

    for y in 0..4 {
        for x in 0..4 {
            if x == 0 || y == 0 || x == 3 || y == 3 {
                assert_eq!(pixel(&rgb, 4, x, y), [0, 0, 0], "border ({}, {})", x, y);
            }
        }
    }
}

// 4x4 RGGB ramp through the AVT-style decoder, checked against values
// worked out by hand from the kernel definition.
#[test]
fn test_simple_exact_values() {
    let bayer: Vec<u8> = (0u8..16).collect();
    let mut rgb = vec![0xFFu8; 4 * 4 * 3];

    decode_8bit(
        &bayer,
        &mut rgb,
        4,
        4,
        FilterPattern::RGGB,
        DebayerMethod::Simple,
    )
    .unwrap();

    let expected: [[u8; 3]; 16] = [
        [0, 3, 5],
        [2, 4, 5],
        [2, 5, 7],
        [0, 0, 0],
        [8, 7, 5],
        [10, 8, 5],
        [10, 9, 7],
        [0, 0, 0],
        [8, 11, 13],
        [10, 12, 13],
        [10, 13, 15],
        [0, 0, 0],
        [0, 0, 0],
        [0, 0, 0],
        [0, 0, 0],
        [0, 0, 0],
    ];

    for (i, want) in expected.iter().enumerate() {
        assert_eq!(
            pixel(&rgb, 4, i % 4, i / 4),
            *want,
            "pixel ({}, {})",
            i % 4,
            i / 4
        );
    }
}

#[test]
fn test_downsample_dimensions_and_values() {
    // GRBG tile with bayer[i] = i: every block's output can be read off
    // the tile positions directly.
    let bayer: Vec<u8> = (0u8..16).collect();
    let mut rgb = vec![0xFFu8; 2 * 2 * 3];

    decode_8bit(
        &bayer,
        &mut rgb,
        4,
        4,
        FilterPattern::GRBG,
        DebayerMethod::Downsample,
    )
    .unwrap();

    assert_eq!(
        rgb,
        vec![1, 3, 4, 3, 5, 6, 9, 11, 12, 11, 13, 14],
        "one RGB triplet per 2x2 block"
    );
}

#[test]
fn test_downsample_constant_all_patterns() {
    for pattern in ALL_PATTERNS {
        let bayer = constant_mosaic(6, 6, pattern, [10, 20, 30]);
        let mut rgb = vec![0xFFu8; 3 * 3 * 3];

        decode_8bit(&bayer, &mut rgb, 6, 6, pattern, DebayerMethod::Downsample).unwrap();

        for (i, &v) in rgb.iter().enumerate() {
            assert_eq!(v, [10, 20, 30][i % 3], "{:?} sample {}", pattern, i);
        }
    }
}

#[test]
fn test_downsample_odd_dimensions_floor() {
    // 5x5 halves to 2x2; the trailing row and column are dropped.
    let bayer = constant_mosaic(5, 5, FilterPattern::BGGR, [7, 77, 177]);
    let mut rgb = vec![0u8; 2 * 2 * 3];

    decode_8bit(
        &bayer,
        &mut rgb,
        5,
        5,
        FilterPattern::BGGR,
        DebayerMethod::Downsample,
    )
    .unwrap();

    for (i, &v) in rgb.iter().enumerate() {
        assert_eq!(v, [7, 77, 177][i % 3], "sample {}", i);
    }
}

#[test]
fn test_borders_zeroed_on_varied_data() {
    let width = 11;
    let height = 9;
    let bayer: Vec<u8> = (0..width * height).map(|i| (i * 37 % 251) as u8).collect();

    for pattern in ALL_PATTERNS {
        for (method, w) in [(DebayerMethod::Bilinear, 1), (DebayerMethod::HQLinear, 2)] {
            let mut rgb = vec![0xFFu8; width * height * 3];
            decode_8bit(&bayer, &mut rgb, width, height, pattern, method).unwrap();

            for y in 0..height {
                for x in 0..width {
                    if x < w || y < w || x >= width - w || y >= height - w {
                        assert_eq!(
                            pixel(&rgb, width, x, y),
                            [0, 0, 0],
                            "{:?} {:?} border ({}, {})",
                            method,
                            pattern,
                            x,
                            y
                        );
                    }
                }
            }
        }

        // Row-pair decoders leave their margin on the trailing edges only.
        for method in [DebayerMethod::Nearest, DebayerMethod::Simple] {
            let mut rgb = vec![0xFFu8; width * height * 3];
            decode_8bit(&bayer, &mut rgb, width, height, pattern, method).unwrap();

            for x in 0..width {
                assert_eq!(pixel(&rgb, width, x, height - 1), [0, 0, 0]);
            }
            for y in 0..height {
                assert_eq!(pixel(&rgb, width, width - 1, y), [0, 0, 0]);
            }
        }
    }
}

#[test]
fn test_degenerate_frames_come_back_black() {
    // Too small for any interior: the whole output is zeroed and the call
    // still succeeds.
    let cases = [
        (DebayerMethod::Nearest, 1, 4),
        (DebayerMethod::Simple, 4, 1),
        (DebayerMethod::Bilinear, 2, 6),
        (DebayerMethod::HQLinear, 4, 4),
    ];

    for (method, width, height) in cases {
        let bayer = vec![200u8; width * height];
        let mut rgb = vec![0xFFu8; width * height * 3];
        decode_8bit(&bayer, &mut rgb, width, height, FilterPattern::RGGB, method).unwrap();
        assert!(
            rgb.iter().all(|&v| v == 0),
            "{:?} {}x{} should be all black",
            method,
            width,
            height
        );
    }
}
