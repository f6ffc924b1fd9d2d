//! Shader state dispatcher
//!
//! Writes the per-draw uniform state: model matrix, flat color or texture
//! selection, UV tiling and material. The dispatcher borrows the registries
//! read-only, so it can only be created once scene preparation has finished
//! mutating them.

use crate::foundation::math::{Vec2, Vec4};
use crate::render::material_registry::{MaterialLookup, MaterialRegistry, ObjectMaterial};
use crate::render::shader::{ShaderInterface, UniformKind, UniformValue};
use crate::render::texture_registry::{TextureRegistry, TEXTURE_NOT_FOUND};
use crate::render::transform::TransformParams;

/// Per-draw uniform writer
pub struct ShaderStateDispatcher<'a> {
    shader: &'a mut dyn ShaderInterface,
    textures: &'a TextureRegistry,
    materials: &'a MaterialRegistry,
}

impl<'a> ShaderStateDispatcher<'a> {
    /// Create a dispatcher over a shader and the scene registries
    pub fn new(
        shader: &'a mut dyn ShaderInterface,
        textures: &'a TextureRegistry,
        materials: &'a MaterialRegistry,
    ) -> Self {
        Self {
            shader,
            textures,
            materials,
        }
    }

    /// Compose and write the model matrix
    pub fn set_transform(&mut self, params: &TransformParams) {
        self.shader
            .set_uniform(UniformKind::Model, UniformValue::Mat4(params.model_matrix()));
    }

    /// Switch to flat color mode with the given RGBA
    pub fn set_flat_color(&mut self, color: Vec4) {
        self.shader.set_uniform(UniformKind::UseTexture, UniformValue::Bool(false));
        self.shader.set_uniform(UniformKind::ObjectColor, UniformValue::Vec4(color));
    }

    /// Switch to texture mode and select the texture registered under `tag`
    ///
    /// An unregistered tag writes [`TEXTURE_NOT_FOUND`] as the sampler slot.
    /// What the shader samples then is undefined; keeping tags registered is
    /// the caller's job.
    pub fn set_texture(&mut self, tag: &str) {
        self.shader.set_uniform(UniformKind::UseTexture, UniformValue::Bool(true));

        let slot = self.textures.sampler_index(tag);
        if slot == TEXTURE_NOT_FOUND {
            log::warn!("No texture registered for tag '{}'", tag);
        }
        self.shader.set_uniform(UniformKind::ObjectTexture, UniformValue::Sampler2D(slot));
    }

    /// Set the texture coordinate tiling scale
    pub fn set_uv_scale(&mut self, scale: Vec2) {
        self.shader.set_uniform(UniformKind::UvScale, UniformValue::Vec2(scale));
    }

    /// Write the material registered under `tag`
    ///
    /// Returns whether a material was written. Nothing is written when the
    /// registry is empty or has no such tag.
    pub fn set_material(&mut self, tag: &str) -> bool {
        match self.materials.lookup(tag) {
            MaterialLookup::Found(material) => {
                self.set_object_material(material);
                true
            }
            MaterialLookup::NoMatch => {
                log::debug!("No material registered for tag '{}'", tag);
                false
            }
            MaterialLookup::Empty => false,
        }
    }

    /// Write material properties directly
    pub fn set_object_material(&mut self, material: &ObjectMaterial) {
        self.shader.set_uniform(
            UniformKind::MaterialDiffuse,
            UniformValue::Vec3(material.diffuse_color),
        );
        self.shader.set_uniform(
            UniformKind::MaterialSpecular,
            UniformValue::Vec3(material.specular_color),
        );
        self.shader.set_uniform(
            UniformKind::MaterialShininess,
            UniformValue::Float(material.shininess),
        );
    }

    /// Enable or disable lighting
    pub fn set_lighting(&mut self, enabled: bool) {
        self.shader.set_uniform(UniformKind::UseLighting, UniformValue::Bool(enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageData;
    use crate::foundation::math::{Mat4, Vec3};
    use crate::render::headless::{FrameEvent, FrameLog, HeadlessTextureBackend, RecordingShader};

    fn registries() -> (TextureRegistry, MaterialRegistry) {
        let mut backend = HeadlessTextureBackend::new();
        let mut textures = TextureRegistry::new();
        for tag in ["marble", "gold", "versace"] {
            textures
                .load_image(&mut backend, &ImageData::solid_color(1, 1, [0, 0, 0, 255]), tag)
                .unwrap();
        }
        (textures, MaterialRegistry::new())
    }

    fn uniforms(log: &FrameLog) -> Vec<(UniformKind, UniformValue)> {
        log.events()
            .into_iter()
            .filter_map(|event| match event {
                FrameEvent::Uniform(kind, value) => Some((kind, value)),
                FrameEvent::Draw(..) => None,
            })
            .collect()
    }

    #[test]
    fn test_flat_color_disables_texture() {
        let (textures, materials) = registries();
        let log = FrameLog::new();
        let mut shader = RecordingShader::new(log.clone());
        let mut dispatcher = ShaderStateDispatcher::new(&mut shader, &textures, &materials);

        dispatcher.set_texture("gold");
        dispatcher.set_flat_color(Vec4::new(1.0, 0.0, 0.0, 1.0));

        assert_eq!(shader.current(UniformKind::UseTexture), Some(UniformValue::Bool(false)));
        assert_eq!(
            shader.current(UniformKind::ObjectColor),
            Some(UniformValue::Vec4(Vec4::new(1.0, 0.0, 0.0, 1.0)))
        );
    }

    #[test]
    fn test_texture_enables_texture_and_selects_slot() {
        let (textures, materials) = registries();
        let log = FrameLog::new();
        let mut shader = RecordingShader::new(log.clone());
        let mut dispatcher = ShaderStateDispatcher::new(&mut shader, &textures, &materials);

        dispatcher.set_flat_color(Vec4::new(1.0, 1.0, 1.0, 1.0));
        dispatcher.set_texture("versace");

        assert_eq!(shader.current(UniformKind::UseTexture), Some(UniformValue::Bool(true)));
        assert_eq!(shader.current(UniformKind::ObjectTexture), Some(UniformValue::Sampler2D(2)));
    }

    #[test]
    fn test_unknown_texture_writes_sentinel() {
        let (textures, materials) = registries();
        let log = FrameLog::new();
        let mut shader = RecordingShader::new(log.clone());
        let mut dispatcher = ShaderStateDispatcher::new(&mut shader, &textures, &materials);

        dispatcher.set_texture("nope");

        assert_eq!(shader.current(UniformKind::UseTexture), Some(UniformValue::Bool(true)));
        assert_eq!(
            shader.current(UniformKind::ObjectTexture),
            Some(UniformValue::Sampler2D(TEXTURE_NOT_FOUND))
        );
    }

    #[test]
    fn test_uv_scale_is_independent_of_mode() {
        let (textures, materials) = registries();
        let log = FrameLog::new();
        let mut shader = RecordingShader::new(log.clone());
        let mut dispatcher = ShaderStateDispatcher::new(&mut shader, &textures, &materials);

        dispatcher.set_uv_scale(Vec2::new(4.0, 2.0));

        assert_eq!(uniforms(&log), vec![(UniformKind::UvScale, UniformValue::Vec2(Vec2::new(4.0, 2.0)))]);
    }

    #[test]
    fn test_transform_writes_composed_matrix() {
        let (textures, materials) = registries();
        let log = FrameLog::new();
        let mut shader = RecordingShader::new(log.clone());
        let mut dispatcher = ShaderStateDispatcher::new(&mut shader, &textures, &materials);
        let params = TransformParams::scaled_at(Vec3::new(2.0, 2.0, 2.0), Vec3::new(0.0, 1.0, 0.0));

        dispatcher.set_transform(&params);

        let expected = Mat4::new_translation(&Vec3::new(0.0, 1.0, 0.0)) * Mat4::new_scaling(2.0);
        assert_eq!(uniforms(&log), vec![(UniformKind::Model, UniformValue::Mat4(expected))]);
    }

    #[test]
    fn test_material_skipped_when_registry_empty() {
        let (textures, materials) = registries();
        let log = FrameLog::new();
        let mut shader = RecordingShader::new(log.clone());
        let mut dispatcher = ShaderStateDispatcher::new(&mut shader, &textures, &materials);

        assert!(!dispatcher.set_material("glass"));
        assert!(log.is_empty());
    }

    #[test]
    fn test_material_written_only_on_match() {
        let (textures, _) = registries();
        let mut materials = MaterialRegistry::new();
        let glass = ObjectMaterial::new(Vec3::new(0.1, 0.2, 0.9), Vec3::new(1.0, 1.0, 1.0), 96.0);
        materials.register("glass", glass);

        let log = FrameLog::new();
        let mut shader = RecordingShader::new(log.clone());
        let mut dispatcher = ShaderStateDispatcher::new(&mut shader, &textures, &materials);

        assert!(!dispatcher.set_material("wood"));
        assert!(log.is_empty());

        assert!(dispatcher.set_material("glass"));
        assert_eq!(
            uniforms(&log),
            vec![
                (UniformKind::MaterialDiffuse, UniformValue::Vec3(glass.diffuse_color)),
                (UniformKind::MaterialSpecular, UniformValue::Vec3(glass.specular_color)),
                (UniformKind::MaterialShininess, UniformValue::Float(96.0)),
            ]
        );
    }

    #[test]
    fn test_object_material_overwrites_previous() {
        let (textures, _) = registries();
        let mut materials = MaterialRegistry::new();
        materials.register("glass", ObjectMaterial::new(Vec3::new(0.1, 0.2, 0.9), Vec3::new(1.0, 1.0, 1.0), 96.0));

        let log = FrameLog::new();
        let mut shader = RecordingShader::new(log.clone());
        let mut dispatcher = ShaderStateDispatcher::new(&mut shader, &textures, &materials);

        dispatcher.set_material("glass");
        dispatcher.set_object_material(&ObjectMaterial::default());

        let default = ObjectMaterial::default();
        assert_eq!(shader.current(UniformKind::MaterialDiffuse), Some(UniformValue::Vec3(default.diffuse_color)));
        assert_eq!(shader.current(UniformKind::MaterialSpecular), Some(UniformValue::Vec3(default.specular_color)));
        assert_eq!(shader.current(UniformKind::MaterialShininess), Some(UniformValue::Float(default.shininess)));
    }

    #[test]
    fn test_lighting_flag() {
        let (textures, materials) = registries();
        let log = FrameLog::new();
        let mut shader = RecordingShader::new(log.clone());
        let mut dispatcher = ShaderStateDispatcher::new(&mut shader, &textures, &materials);

        dispatcher.set_lighting(true);
        assert_eq!(shader.current(UniformKind::UseLighting), Some(UniformValue::Bool(true)));
    }
}
