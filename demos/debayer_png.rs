// Decode a grayscale image shot through a Bayer mosaic into a color PNG.
//
// Usage: cargo run --example debayer_png -- <input> <output> [method] [pattern]

use std::env;
use std::process;
use std::str::FromStr;

use rawbayer::debayer::{decode_8bit, DebayerMethod, FilterPattern};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: debayer_png <input> <output> [method] [pattern]");
        process::exit(1);
    }

    let method = if args.len() > 3 {
        DebayerMethod::from_str(&args[3]).unwrap()
    } else {
        DebayerMethod::Bilinear
    };
    let pattern = if args.len() > 4 {
        FilterPattern::from_str(&args[4]).unwrap()
    } else {
        FilterPattern::RGGB
    };

    let raw = image::open(&args[1]).unwrap().to_luma8();
    let width = raw.width() as usize;
    let height = raw.height() as usize;

    let (out_width, out_height) = method.output_size(width, height);
    let mut rgb = vec![0u8; out_width * out_height * 3];

    decode_8bit(raw.as_raw(), &mut rgb, width, height, pattern, method).unwrap();

    image::RgbImage::from_raw(out_width as u32, out_height as u32, rgb)
        .unwrap()
        .save(&args[2])
        .unwrap();

    println!(
        "{}x{} {} -> {}x{} rgb ({})",
        width, height, pattern, out_width, out_height, method
    );
}
