//! Asset loading
//!
//! Decodes image files into CPU-side pixel data ready for GPU upload.

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The file could not be read or decoded
    #[error("Asset load failed: {0}")]
    LoadFailed(String),

    /// The image decoded but its channel layout cannot be uploaded
    #[error("Unsupported channel count {channels} (expected 3 or 4)")]
    UnsupportedChannels {
        /// Channel count reported by the decoder
        channels: u8,
    },
}
