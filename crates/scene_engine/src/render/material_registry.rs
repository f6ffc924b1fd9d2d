//! Material registry
//!
//! An ordered list of named Phong-style material bundles. Lookups are a
//! linear scan returning the first entry whose tag matches. An empty
//! registry and a registry without a matching tag are reported separately,
//! and neither touches the caller's material.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Material properties fed to the shader
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectMaterial {
    /// Diffuse RGB
    pub diffuse_color: Vec3,
    /// Specular RGB
    pub specular_color: Vec3,
    /// Specular exponent
    pub shininess: f32,
}

impl ObjectMaterial {
    /// Create a material
    pub fn new(diffuse_color: Vec3, specular_color: Vec3, shininess: f32) -> Self {
        Self {
            diffuse_color,
            specular_color,
            shininess,
        }
    }
}

impl Default for ObjectMaterial {
    fn default() -> Self {
        Self {
            diffuse_color: Vec3::new(1.0, 1.0, 1.0),
            specular_color: Vec3::zeros(),
            shininess: 1.0,
        }
    }
}

/// Outcome of a material lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialLookup<'a> {
    /// First entry with the requested tag
    Found(&'a ObjectMaterial),
    /// The registry has entries but none with the requested tag
    NoMatch,
    /// The registry has no entries at all
    Empty,
}

impl<'a> MaterialLookup<'a> {
    /// Whether a material was found
    pub const fn is_found(&self) -> bool {
        matches!(self, MaterialLookup::Found(_))
    }

    /// The found material, if any
    pub const fn material(&self) -> Option<&'a ObjectMaterial> {
        match *self {
            MaterialLookup::Found(material) => Some(material),
            MaterialLookup::NoMatch | MaterialLookup::Empty => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct MaterialEntry {
    tag: String,
    material: ObjectMaterial,
}

/// Ordered material registry
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    entries: Vec<MaterialEntry>,
}

impl MaterialRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material; duplicate tags are allowed and shadowed by earlier ones
    pub fn register(&mut self, tag: impl Into<String>, material: ObjectMaterial) {
        let tag = tag.into();
        log::debug!("Registered material '{}'", tag);
        self.entries.push(MaterialEntry { tag, material });
    }

    /// Look up the first material registered under `tag`
    pub fn lookup(&self, tag: &str) -> MaterialLookup<'_> {
        if self.entries.is_empty() {
            return MaterialLookup::Empty;
        }
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map_or(MaterialLookup::NoMatch, |entry| MaterialLookup::Found(&entry.material))
    }

    /// Copy the material registered under `tag` into `material`
    ///
    /// Returns `true` only when a match was copied. On a miss `material`
    /// keeps its previous value.
    pub fn find(&self, tag: &str, material: &mut ObjectMaterial) -> bool {
        match self.lookup(tag) {
            MaterialLookup::Found(found) => {
                *material = *found;
                true
            }
            MaterialLookup::NoMatch | MaterialLookup::Empty => false,
        }
    }

    /// Number of registered materials
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no material is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
