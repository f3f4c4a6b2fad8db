//! Reconstruction of full-color images from raw Bayer-mosaiced sensor
//! frames. The caller owns both buffers; every decode is a synchronous,
//! allocation-free transform of one frame.

pub mod debayer;
pub mod error;
