//! Declarative render entries

use crate::foundation::math::{Vec2, Vec3, Vec4};
use crate::render::{FaceVariant, MeshLibrary, ObjectMaterial, PrimitiveKind, ShaderStateDispatcher, TransformParams};

/// How a draw is colored
#[derive(Debug, Clone, PartialEq)]
pub enum Shading {
    /// Flat RGBA color, texture sampling off
    FlatColor(Vec4),
    /// Texture registered under a tag, texture sampling on
    Texture(String),
}

impl Shading {
    /// Flat color from components
    pub fn color(r: f32, g: f32, b: f32, a: f32) -> Self {
        Shading::FlatColor(Vec4::new(r, g, b, a))
    }

    /// Texture by tag
    pub fn texture(tag: impl Into<String>) -> Self {
        Shading::Texture(tag.into())
    }
}

/// One set-then-draw step
///
/// Issuing an entry writes the model matrix, the shading mode, the UV scale,
/// the lighting flag and the material every time, then draws. An entry that
/// names no material, or one that is not registered, gets the default
/// material. Nothing from a previous entry leaks into this one.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderEntry {
    /// Human readable name, used in diagnostics
    pub label: String,
    /// Placement of the primitive
    pub transform: TransformParams,
    /// Color or texture
    pub shading: Shading,
    /// Texture coordinate tiling
    pub uv_scale: Vec2,
    /// Whether lighting applies
    pub lighting: bool,
    /// Material tag, if any
    pub material: Option<String>,
    /// Primitive to draw
    pub primitive: PrimitiveKind,
    /// Part of the primitive to draw
    pub face: FaceVariant,
}

impl RenderEntry {
    /// Create an entry drawing the whole primitive with unit UV scale and no lighting
    pub fn new(
        label: impl Into<String>,
        primitive: PrimitiveKind,
        transform: TransformParams,
        shading: Shading,
    ) -> Self {
        Self {
            label: label.into(),
            transform,
            shading,
            uv_scale: Vec2::new(1.0, 1.0),
            lighting: false,
            material: None,
            primitive,
            face: FaceVariant::Whole,
        }
    }

    /// Shorthand for an unrotated entry
    pub fn placed(
        label: impl Into<String>,
        primitive: PrimitiveKind,
        scale: Vec3,
        position: Vec3,
        shading: Shading,
    ) -> Self {
        Self::new(label, primitive, TransformParams::scaled_at(scale, position), shading)
    }

    /// Builder pattern: Set rotation in degrees
    pub fn rotated(mut self, x_degrees: f32, y_degrees: f32, z_degrees: f32) -> Self {
        self.transform = self.transform.with_rotation(x_degrees, y_degrees, z_degrees);
        self
    }

    /// Builder pattern: Draw only part of the primitive
    pub fn with_face(mut self, face: FaceVariant) -> Self {
        self.face = face;
        self
    }

    /// Builder pattern: Set UV tiling
    pub fn with_uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = Vec2::new(u, v);
        self
    }

    /// Builder pattern: Use a material and enable lighting
    pub fn with_material(mut self, tag: impl Into<String>) -> Self {
        self.material = Some(tag.into());
        self.lighting = true;
        self
    }

    /// Write this entry's state and draw it
    pub fn issue<M: MeshLibrary + ?Sized>(&self, dispatcher: &mut ShaderStateDispatcher<'_>, meshes: &mut M) {
        dispatcher.set_transform(&self.transform);

        match &self.shading {
            Shading::FlatColor(color) => dispatcher.set_flat_color(*color),
            Shading::Texture(tag) => dispatcher.set_texture(tag),
        }

        dispatcher.set_uv_scale(self.uv_scale);
        dispatcher.set_lighting(self.lighting);
        let registered = self
            .material
            .as_deref()
            .is_some_and(|tag| dispatcher.set_material(tag));
        if !registered {
            dispatcher.set_object_material(&ObjectMaterial::default());
        }

        if !self.face.applies_to(self.primitive) {
            log::warn!(
                "Entry '{}' draws {:?} of a {:?}",
                self.label,
                self.face,
                self.primitive
            );
        }
        meshes.draw(self.primitive, self.face);
    }
}

/// A modeled object: the entries that draw it, in order
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Object name
    pub name: String,
    /// Entries in draw order
    pub entries: Vec<RenderEntry>,
}

impl SceneObject {
    /// Create an object from its entries
    pub fn new(name: impl Into<String>, entries: Vec<RenderEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// An object with no geometry yet; rendering it does nothing
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Whether the object draws nothing
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Issue every entry in order, returning the number of draws
    pub fn render<M: MeshLibrary + ?Sized>(&self, dispatcher: &mut ShaderStateDispatcher<'_>, meshes: &mut M) -> usize {
        for entry in &self.entries {
            entry.issue(dispatcher, meshes);
        }
        self.entries.len()
    }
}
