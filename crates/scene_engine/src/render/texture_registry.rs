//! Texture registry
//!
//! Maps symbolic tags to GPU textures. A texture's slot is its registration
//! index: the first texture registered is bound to unit 0, the second to
//! unit 1 and so on. Tags are not required to be unique; lookups return the
//! first registered match.

use std::path::Path;
use thiserror::Error;

use crate::assets::{AssetError, ImageData};
use crate::render::backend::{TextureBackend, TextureHandle, TextureParams};
use crate::render::RenderError;

/// Number of texture units available by default
pub const MAX_TEXTURE_UNITS: usize = 16;

/// Sampler value written when a tag has no registered texture
pub const TEXTURE_NOT_FOUND: i32 = -1;

/// Texture registration errors
#[derive(Error, Debug)]
pub enum TextureError {
    /// The image could not be decoded or has an unsupported layout
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Every texture unit is already taken
    #[error("All {max} texture units are in use")]
    UnitsExhausted {
        /// Unit budget of the registry
        max: usize,
    },

    /// The backend refused the operation
    #[error(transparent)]
    Backend(#[from] RenderError),
}

/// A registered texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    /// Lookup tag
    pub tag: String,
    /// Backend texture handle
    pub handle: TextureHandle,
}

/// Ordered texture registry
#[derive(Debug)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    max_units: usize,
    params: TextureParams,
}

impl TextureRegistry {
    /// Create an empty registry with [`MAX_TEXTURE_UNITS`] units
    pub fn new() -> Self {
        Self::with_max_units(MAX_TEXTURE_UNITS)
    }

    /// Create an empty registry with a custom unit budget
    pub fn with_max_units(max_units: usize) -> Self {
        Self {
            entries: Vec::with_capacity(max_units),
            max_units,
            params: TextureParams::default(),
        }
    }

    /// Decode an image file and register it under `tag`
    ///
    /// Returns the slot the texture will occupy. On failure nothing is
    /// registered; callers are expected to log and continue without it.
    pub fn load<P: AsRef<Path>>(
        &mut self,
        backend: &mut dyn TextureBackend,
        path: P,
        tag: &str,
    ) -> Result<usize, TextureError> {
        self.ensure_capacity()?;
        let image = ImageData::from_file(path)?;
        self.load_image(backend, &image, tag)
    }

    /// Register an already decoded image under `tag`
    pub fn load_image(
        &mut self,
        backend: &mut dyn TextureBackend,
        image: &ImageData,
        tag: &str,
    ) -> Result<usize, TextureError> {
        self.ensure_capacity()?;
        if !matches!(image.channels, 3 | 4) {
            return Err(AssetError::UnsupportedChannels { channels: image.channels }.into());
        }

        let handle = backend.create_texture(image, &self.params)?;
        let slot = self.entries.len();
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });

        log::debug!("Registered texture '{}' as {:?} in slot {}", tag, handle, slot);
        Ok(slot)
    }

    fn ensure_capacity(&self) -> Result<(), TextureError> {
        if self.entries.len() >= self.max_units {
            return Err(TextureError::UnitsExhausted { max: self.max_units });
        }
        Ok(())
    }

    /// Bind every registered texture to the unit matching its slot
    ///
    /// Call once after all loads and before the first textured draw.
    pub fn bind_all(&self, backend: &mut dyn TextureBackend) -> Result<(), TextureError> {
        for (slot, entry) in self.entries.iter().enumerate() {
            backend.bind_texture(slot, entry.handle)?;
        }
        log::debug!("Bound {} textures", self.entries.len());
        Ok(())
    }

    /// Slot of the first texture registered under `tag`
    pub fn find_slot(&self, tag: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.tag == tag)
    }

    /// Sampler value for `tag`, or [`TEXTURE_NOT_FOUND`]
    pub fn sampler_index(&self, tag: &str) -> i32 {
        self.find_slot(tag)
            .and_then(|slot| i32::try_from(slot).ok())
            .unwrap_or(TEXTURE_NOT_FOUND)
    }

    /// Backend handle of the first texture registered under `tag`
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.handle)
    }

    /// Release every texture and empty the registry
    ///
    /// Deletion failures are logged; the registry is emptied regardless.
    pub fn destroy_all(&mut self, backend: &mut dyn TextureBackend) {
        for entry in self.entries.drain(..) {
            if let Err(e) = backend.delete_texture(entry.handle) {
                log::warn!("Failed to delete texture '{}' ({:?}): {}", entry.tag, entry.handle, e);
            }
        }
    }

    /// Registered textures in slot order
    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no texture is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unit budget
    pub fn max_units(&self) -> usize {
        self.max_units
    }

    /// Parameters every texture is created with
    pub fn params(&self) -> &TextureParams {
        &self.params
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
