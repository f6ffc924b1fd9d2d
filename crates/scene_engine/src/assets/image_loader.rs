//! Image loading utilities for texture data
//!
//! Images are always flipped vertically on load so that row 0 of the pixel
//! data is the bottom of the picture, matching the renderer's texture
//! coordinate origin. The native channel layout is kept: RGB images stay
//! three-channel and RGBA images stay four-channel. Anything else is rejected.

use std::path::Path;
use image::DynamicImage;
use crate::assets::AssetError;

/// Loaded image data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw pixel data, tightly packed rows, bottom row first
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (3 for RGB, 4 for RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image {}: {}", path_ref.display(), e)))?;

        let loaded = Self::from_dynamic(&img)?;

        log::info!(
            "Successfully loaded image: {}, width: {}, height: {}, channels: {}",
            path_ref.display(),
            loaded.width,
            loaded.height,
            loaded.channels
        );

        Ok(loaded)
    }

    /// Load image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

        let loaded = Self::from_dynamic(&img)?;
        log::debug!("Loaded image {}x{} from memory", loaded.width, loaded.height);
        Ok(loaded)
    }

    fn from_dynamic(img: &DynamicImage) -> Result<Self, AssetError> {
        let channels = img.color().channel_count();
        let flipped = img.flipv();
        let (width, height) = (flipped.width(), flipped.height());

        let data = match channels {
            3 => flipped.to_rgb8().into_raw(),
            4 => flipped.to_rgba8().into_raw(),
            other => return Err(AssetError::UnsupportedChannels { channels: other }),
        };

        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Create a solid color image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether the pixel buffer matches the declared dimensions and channels
    pub fn is_consistent(&self) -> bool {
        self.data.len() == self.width as usize * self.height as usize * self.channels as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, LumaA, Luma, Rgb, RgbImage, Rgba, RgbaImage};
    use std::path::PathBuf;

    fn temp_image_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("scene_engine_img_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_solid_color_image() {
        let img = ImageData::solid_color(4, 4, [255, 0, 0, 255]);
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.channels, 4);
        assert_eq!(img.size_bytes(), 4 * 4 * 4);
        assert!(img.is_consistent());

        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_rgb_file_keeps_three_channels_and_flips() {
        // Top row red, bottom row blue
        let mut source = RgbImage::new(2, 2);
        for x in 0..2 {
            source.put_pixel(x, 0, Rgb([255, 0, 0]));
            source.put_pixel(x, 1, Rgb([0, 0, 255]));
        }
        let path = temp_image_path("rgb.png");
        source.save(&path).unwrap();

        let loaded = ImageData::from_file(&path);
        std::fs::remove_file(&path).ok();
        let loaded = loaded.unwrap();

        assert_eq!(loaded.channels, 3);
        assert_eq!((loaded.width, loaded.height), (2, 2));
        assert!(loaded.is_consistent());
        // After the vertical flip the first row in memory is the bottom (blue) row
        assert_eq!(&loaded.data[0..3], &[0, 0, 255]);
        assert_eq!(&loaded.data[6..9], &[255, 0, 0]);
    }

    #[test]
    fn test_rgba_file_keeps_four_channels() {
        let source = RgbaImage::from_pixel(3, 1, Rgba([10, 20, 30, 40]));
        let path = temp_image_path("rgba.png");
        source.save(&path).unwrap();

        let loaded = ImageData::from_file(&path);
        std::fs::remove_file(&path).ok();
        let loaded = loaded.unwrap();

        assert_eq!(loaded.channels, 4);
        assert_eq!(loaded.size_bytes(), 3 * 4);
        assert_eq!(&loaded.data[0..4], &[10, 20, 30, 40]);
    }

    #[test]
    fn test_grayscale_is_rejected() {
        let path = temp_image_path("gray.png");
        GrayImage::from_pixel(2, 2, Luma([128])).save(&path).unwrap();
        let result = ImageData::from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AssetError::UnsupportedChannels { channels: 1 })));
    }

    #[test]
    fn test_gray_alpha_is_rejected() {
        let path = temp_image_path("gray_alpha.png");
        GrayAlphaImage::from_pixel(2, 2, LumaA([128, 255])).save(&path).unwrap();
        let result = ImageData::from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AssetError::UnsupportedChannels { channels: 2 })));
    }

    #[test]
    fn test_nonexistent_file() {
        let result = ImageData::from_file("nonexistent_file.png");
        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }

    #[test]
    fn test_garbage_bytes() {
        let result = ImageData::from_bytes(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }
}
