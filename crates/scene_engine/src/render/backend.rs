//! Texture backend abstraction
//!
//! This module defines the trait a graphics backend implements so the
//! texture registry can create, bind and release GPU textures without
//! knowing which API sits underneath.

use crate::assets::ImageData;
use crate::render::RenderResult;

/// Handle for a GPU texture resource
///
/// Handle 0 is never issued by a backend; it stands for "no texture".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(pub u32);

/// Texture filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Nearest neighbor filtering
    Nearest,
    /// Linear filtering
    Linear,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Repeat the texture
    Repeat,
    /// Mirror the texture
    MirroredRepeat,
    /// Clamp to edge
    ClampToEdge,
}

/// Texture creation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureParams {
    /// Texture filtering mode, used for both minification and magnification
    pub filter_mode: FilterMode,
    /// Texture wrapping mode, applied to both S and T
    pub wrap_mode: WrapMode,
    /// Generate mipmaps
    pub generate_mipmaps: bool,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::Linear,
            wrap_mode: WrapMode::Repeat,
            generate_mipmaps: true,
        }
    }
}

/// GPU texture backend
///
/// Implementations upload pixel data, attach textures to numbered texture
/// units and free them again. The image passed to [`create_texture`] always
/// has 3 (RGB8) or 4 (RGBA8) channels.
///
/// [`create_texture`]: TextureBackend::create_texture
pub trait TextureBackend {
    /// Upload an image and return a handle to the new texture
    fn create_texture(&mut self, image: &ImageData, params: &TextureParams) -> RenderResult<TextureHandle>;

    /// Attach a texture to a texture unit
    fn bind_texture(&mut self, unit: usize, handle: TextureHandle) -> RenderResult<()>;

    /// Release a texture
    fn delete_texture(&mut self, handle: TextureHandle) -> RenderResult<()>;
}
