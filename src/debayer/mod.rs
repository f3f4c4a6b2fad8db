//! Bayer mosaic reconstruction.
//!
//! A single-sensor camera records one color sample per pixel through a
//! repeating 2x2 color filter tile. The decoders here rebuild the two
//! missing channels at every pixel and write an interleaved RGB frame into
//! a caller-owned output buffer. Methods trade cost for quality:
//!
//! - [`DebayerMethod::Nearest`] copies the nearest raw sample of each color.
//!   Fastest, hard 2x2 block artifacts.
//! - [`DebayerMethod::Simple`] is nearest-neighbor red/blue with the green
//!   channel averaged from its two nearest raw greens.
//! - [`DebayerMethod::Bilinear`] averages the 2 or 4 nearest same-color
//!   samples for every missing channel.
//! - [`DebayerMethod::HQLinear`] is the gradient-corrected linear
//!   interpolation of Malvar, He and Cutler (ICASSP'04). Best quality of
//!   the full-resolution methods; needs a 2-pixel border.
//! - [`DebayerMethod::Downsample`] emits one RGB pixel per 2x2 tile at half
//!   resolution. No interpolation at all, so no border and no artifacts.
//!
//! Three further selectors are recognized but cannot decode anything.
//! `EdgeSense` (edge-sensing interpolation II) was removed over patent
//! concerns and permanently fails with
//! [`DebayerError::FunctionNotSupported`]. `Vng` (threshold-based variable
//! number of gradients) and `Ahd` (adaptive homogeneity-directed
//! interpolation) are accepted selector names for which no implementation
//! is provided; dispatching them fails with
//! [`DebayerError::InvalidBayerMethod`]. None of the three ever touches the
//! output buffer.

mod bilinear;
mod border;
mod downsample;
mod edgesense;
mod hqlinear;
mod nearest;
mod simple;

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::error::{DebayerError, Result};

/// Layout of the repeating 2x2 color unit, named in reading order: top-left,
/// top-right, bottom-left, bottom-right.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterPattern {
    RGGB,
    GBRG,
    GRBG,
    BGGR,
}

impl FilterPattern {
    /// Resolves an IIDC/DCAM color filter code as cameras report them.
    /// Tags outside the four valid codes fail with
    /// [`DebayerError::InvalidColorFilter`].
    pub fn from_tag(tag: u32) -> Result<FilterPattern> {
        match tag {
            512 => Ok(FilterPattern::RGGB),
            513 => Ok(FilterPattern::GBRG),
            514 => Ok(FilterPattern::GRBG),
            515 => Ok(FilterPattern::BGGR),
            _ => Err(DebayerError::InvalidColorFilter),
        }
    }

    /// The IIDC/DCAM color filter code for this pattern.
    pub fn tag(&self) -> u32 {
        match self {
            FilterPattern::RGGB => 512,
            FilterPattern::GBRG => 513,
            FilterPattern::GRBG => 514,
            FilterPattern::BGGR => 515,
        }
    }

    // +1 when blue lies on the lower-right diagonal of the first 2x2 unit,
    // -1 when it lies on the lower-left. Decoders flip this after every row.
    pub(crate) fn blue_sign(&self) -> i32 {
        match self {
            FilterPattern::BGGR | FilterPattern::GBRG => -1,
            FilterPattern::RGGB | FilterPattern::GRBG => 1,
        }
    }

    // Whether the first decoded pixel sits on a green sample. Flips after
    // every row, like blue_sign.
    pub(crate) fn starts_on_green(&self) -> bool {
        matches!(self, FilterPattern::GBRG | FilterPattern::GRBG)
    }
}

impl FromStr for FilterPattern {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<FilterPattern> {
        match s.to_uppercase().as_str() {
            "RGGB" => Ok(FilterPattern::RGGB),
            "GBRG" => Ok(FilterPattern::GBRG),
            "GRBG" => Ok(FilterPattern::GRBG),
            "BGGR" => Ok(FilterPattern::BGGR),
            _ => Err(anyhow!("Invalid filter pattern specified: {}", s)),
        }
    }
}

impl fmt::Display for FilterPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterPattern::RGGB => write!(f, "RGGB"),
            FilterPattern::GBRG => write!(f, "GBRG"),
            FilterPattern::GRBG => write!(f, "GRBG"),
            FilterPattern::BGGR => write!(f, "BGGR"),
        }
    }
}

/// Selector for the reconstruction method, in wire-tag order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebayerMethod {
    Nearest,
    Simple,
    Bilinear,
    HQLinear,
    Downsample,
    /// Permanently unsupported; see the module documentation.
    EdgeSense,
    /// Selector only, no implementation.
    Vng,
    /// Selector only, no implementation.
    Ahd,
}

impl DebayerMethod {
    /// Resolves a numeric method tag. Tags outside the enumerated set fail
    /// with [`DebayerError::InvalidBayerMethod`].
    pub fn from_tag(tag: u32) -> Result<DebayerMethod> {
        match tag {
            0 => Ok(DebayerMethod::Nearest),
            1 => Ok(DebayerMethod::Simple),
            2 => Ok(DebayerMethod::Bilinear),
            3 => Ok(DebayerMethod::HQLinear),
            4 => Ok(DebayerMethod::Downsample),
            5 => Ok(DebayerMethod::EdgeSense),
            6 => Ok(DebayerMethod::Vng),
            7 => Ok(DebayerMethod::Ahd),
            _ => Err(DebayerError::InvalidBayerMethod),
        }
    }

    /// The numeric tag for this method.
    pub fn tag(&self) -> u32 {
        match self {
            DebayerMethod::Nearest => 0,
            DebayerMethod::Simple => 1,
            DebayerMethod::Bilinear => 2,
            DebayerMethod::HQLinear => 3,
            DebayerMethod::Downsample => 4,
            DebayerMethod::EdgeSense => 5,
            DebayerMethod::Vng => 6,
            DebayerMethod::Ahd => 7,
        }
    }

    /// Width in pixels of the zeroed, uninterpolated margin this method
    /// leaves in its output.
    pub fn border_width(&self) -> usize {
        match self {
            DebayerMethod::HQLinear => 2,
            DebayerMethod::Nearest | DebayerMethod::Simple | DebayerMethod::Bilinear => 1,
            _ => 0,
        }
    }

    /// True for methods that emit one pixel per 2x2 tile instead of one per
    /// raw sample.
    pub fn halves_resolution(&self) -> bool {
        matches!(self, DebayerMethod::Downsample)
    }

    /// Output dimensions for an `sx` x `sy` raw frame decoded with this
    /// method. Odd dimensions round down when halved.
    pub fn output_size(&self, sx: usize, sy: usize) -> (usize, usize) {
        if self.halves_resolution() {
            (sx / 2, sy / 2)
        } else {
            (sx, sy)
        }
    }
}

impl FromStr for DebayerMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<DebayerMethod> {
        match s.to_uppercase().as_str() {
            "NEAREST" => Ok(DebayerMethod::Nearest),
            "SIMPLE" => Ok(DebayerMethod::Simple),
            "BILINEAR" => Ok(DebayerMethod::Bilinear),
            "HQLINEAR" => Ok(DebayerMethod::HQLinear),
            "DOWNSAMPLE" => Ok(DebayerMethod::Downsample),
            "EDGESENSE" => Ok(DebayerMethod::EdgeSense),
            "VNG" => Ok(DebayerMethod::Vng),
            "AHD" => Ok(DebayerMethod::Ahd),
            _ => Err(anyhow!("Invalid debayer method specified: {}", s)),
        }
    }
}

impl fmt::Display for DebayerMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebayerMethod::Nearest => write!(f, "Nearest"),
            DebayerMethod::Simple => write!(f, "Simple"),
            DebayerMethod::Bilinear => write!(f, "Bilinear"),
            DebayerMethod::HQLinear => write!(f, "HQLinear"),
            DebayerMethod::Downsample => write!(f, "Downsample"),
            DebayerMethod::EdgeSense => write!(f, "EdgeSense"),
            DebayerMethod::Vng => write!(f, "VNG"),
            DebayerMethod::Ahd => write!(f, "AHD"),
        }
    }
}

/// Sample storage a raw frame arrives in. Kernel arithmetic is done in
/// `i32` regardless of storage width, so a widen/narrow pair is all the
/// decoders need from the concrete type.
pub(crate) trait RawSample: Copy {
    const ZERO: Self;

    fn widen(self) -> i32;

    /// Narrow an in-range value back to storage width.
    fn narrow(v: i32) -> Self;
}

impl RawSample for u8 {
    const ZERO: Self = 0;

    #[inline]
    fn widen(self) -> i32 {
        self as i32
    }

    #[inline]
    fn narrow(v: i32) -> Self {
        v as u8
    }
}

impl RawSample for u16 {
    const ZERO: Self = 0;

    #[inline]
    fn widen(self) -> i32 {
        self as i32
    }

    #[inline]
    fn narrow(v: i32) -> Self {
        v as u16
    }
}

// Every interpolated sum passes through here before storage, for both
// storage widths; `max` is 2^bits - 1 for the active depth.
#[inline]
pub(crate) fn clip<T: RawSample>(v: i32, max: i32) -> T {
    T::narrow(v.clamp(0, max))
}

/// Decodes an 8-bit raw frame into an interleaved 8-bit RGB buffer.
///
/// `bayer` holds one sample per pixel, row-major with stride `sx`. `rgb` is
/// filled with three samples per pixel; for [`DebayerMethod::Downsample`]
/// it must be sized for the halved dimensions (see
/// [`DebayerMethod::output_size`]).
///
/// # Panics
///
/// Panics if either buffer length does not match the stated dimensions.
pub fn decode_8bit(
    bayer: &[u8],
    rgb: &mut [u8],
    sx: usize,
    sy: usize,
    pattern: FilterPattern,
    method: DebayerMethod,
) -> Result<()> {
    decode(bayer, rgb, sx, sy, pattern, method, 8)
}

/// Decodes a deep raw frame (up to 16 significant bits per sample) into an
/// interleaved 16-bit-storage RGB buffer.
///
/// `bits` is the significant sample depth, 8 through 16; every computed
/// value is clamped to `[0, 2^bits - 1]`.
///
/// # Panics
///
/// Panics if either buffer length does not match the stated dimensions, or
/// if `bits` is outside `8..=16`.
pub fn decode_16bit(
    bayer: &[u16],
    rgb: &mut [u16],
    sx: usize,
    sy: usize,
    pattern: FilterPattern,
    method: DebayerMethod,
    bits: u32,
) -> Result<()> {
    assert!((8..=16).contains(&bits), "bit depth {} outside 8..=16", bits);
    decode(bayer, rgb, sx, sy, pattern, method, bits)
}

fn decode<T: RawSample>(
    bayer: &[T],
    rgb: &mut [T],
    sx: usize,
    sy: usize,
    pattern: FilterPattern,
    method: DebayerMethod,
    bits: u32,
) -> Result<()> {
    assert_eq!(bayer.len(), sx * sy, "raw buffer does not match dimensions");
    let (ow, oh) = method.output_size(sx, sy);
    assert_eq!(rgb.len(), ow * oh * 3, "rgb buffer does not match dimensions");

    let max = (1_i32 << bits) - 1;
    match method {
        DebayerMethod::Nearest => nearest::decode(bayer, rgb, sx, sy, pattern),
        DebayerMethod::Simple => simple::decode(bayer, rgb, sx, sy, pattern, max),
        DebayerMethod::Bilinear => bilinear::decode(bayer, rgb, sx, sy, pattern, max),
        DebayerMethod::HQLinear => hqlinear::decode(bayer, rgb, sx, sy, pattern, max),
        DebayerMethod::Downsample => downsample::decode(bayer, rgb, sx, sy, pattern, max),
        DebayerMethod::EdgeSense => edgesense::decode(bayer, rgb, sx, sy, pattern),
        DebayerMethod::Vng | DebayerMethod::Ahd => Err(DebayerError::InvalidBayerMethod),
    }
}
