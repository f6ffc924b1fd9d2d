//! Configuration system
//!
//! Scene configuration is plain data: which image files become textures (and
//! under which tag), how many texture units the renderer may use, and the
//! optional material list. Files are read as TOML or RON depending on the
//! extension.

use std::path::{Path, PathBuf};

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec3;
use crate::render::material_registry::ObjectMaterial;
use crate::render::texture_registry::MAX_TEXTURE_UNITS;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        match extension_of(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension_of(path) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Configuration parsed but describes an unusable scene
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// An image file to register under a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureSource {
    /// Lookup tag used by render entries
    pub tag: String,
    /// File name, relative to [`SceneConfig::texture_directory`]
    pub file: PathBuf,
}

impl TextureSource {
    /// Create a texture source
    pub fn new(tag: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            tag: tag.into(),
            file: file.into(),
        }
    }
}

/// A named material bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDefinition {
    /// Lookup tag
    pub tag: String,
    /// Diffuse RGB
    pub diffuse_color: Vec3,
    /// Specular RGB
    pub specular_color: Vec3,
    /// Specular exponent
    pub shininess: f32,
}

impl MaterialDefinition {
    /// Material properties described by this definition
    pub fn material(&self) -> ObjectMaterial {
        ObjectMaterial::new(self.diffuse_color, self.specular_color, self.shininess)
    }
}

/// Scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Directory the texture files are resolved against
    pub texture_directory: PathBuf,
    /// Number of texture units available to the renderer
    pub max_texture_units: usize,
    /// Default log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Frames rendered by the headless driver
    pub frames: u32,
    /// Textures in registration order; slot index follows this order
    pub textures: Vec<TextureSource>,
    /// Materials in lookup order
    pub materials: Vec<MaterialDefinition>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            texture_directory: PathBuf::from("textures"),
            max_texture_units: MAX_TEXTURE_UNITS,
            log_level: "info".to_string(),
            frames: 1,
            textures: vec![
                TextureSource::new("marble", "marble.jpg"),
                TextureSource::new("gold", "gold.jpg"),
                TextureSource::new("versace", "versace.jpg"),
                TextureSource::new("blue_glass", "blue_glass.jpg"),
                TextureSource::new("perfume", "perfume.jpg"),
            ],
            materials: Vec::new(),
        }
    }
}

impl Config for SceneConfig {}

impl SceneConfig {
    /// Full path of a texture source
    pub fn texture_path(&self, source: &TextureSource) -> PathBuf {
        self.texture_directory.join(&source.file)
    }

    /// Check that the configuration describes a renderable scene
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_texture_units == 0 {
            return Err(ConfigError::Invalid("max_texture_units must be at least 1".to_string()));
        }
        if self.textures.len() > self.max_texture_units {
            return Err(ConfigError::Invalid(format!(
                "{} textures declared but only {} texture units available",
                self.textures.len(),
                self.max_texture_units
            )));
        }
        if let Some(source) = self.textures.iter().find(|s| s.tag.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "texture {} has an empty tag",
                source.file.display()
            )));
        }
        if self.materials.iter().any(|m| m.tag.is_empty()) {
            return Err(ConfigError::Invalid("material with an empty tag".to_string()));
        }
        Ok(())
    }
}
