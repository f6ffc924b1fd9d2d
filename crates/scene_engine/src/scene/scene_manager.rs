//! Scene manager
//!
//! Owns the collaborators and registries and drives the two scene phases:
//! a one-time prepare (textures, materials, meshes) and a per-frame render
//! that replays the object entries.

use crate::config::SceneConfig;
use crate::render::{
    MaterialRegistry, MeshLibrary, PrimitiveKind, ShaderInterface, ShaderStateDispatcher,
    TextureBackend, TextureRegistry,
};
use crate::scene::{objects, SceneError, SceneObject};

/// Lifecycle phase of a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    /// Created, resources not loaded
    Unprepared,
    /// Resources loaded, ready to render
    Prepared,
    /// Resources released
    Destroyed,
}

/// Builder for [`SceneManager`]
///
/// All three collaborators are required; a missing one is reported by
/// [`build`](SceneManagerBuilder::build) rather than discovered mid-frame.
pub struct SceneManagerBuilder<S, M, B> {
    config: SceneConfig,
    shader: Option<S>,
    meshes: Option<M>,
    backend: Option<B>,
    objects: Option<Vec<SceneObject>>,
}

impl<S, M, B> SceneManagerBuilder<S, M, B>
where
    S: ShaderInterface,
    M: MeshLibrary,
    B: TextureBackend,
{
    /// Start a builder from a configuration
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            shader: None,
            meshes: None,
            backend: None,
            objects: None,
        }
    }

    /// Set the shader collaborator
    pub fn with_shader(mut self, shader: S) -> Self {
        self.shader = Some(shader);
        self
    }

    /// Set the mesh library collaborator
    pub fn with_mesh_library(mut self, meshes: M) -> Self {
        self.meshes = Some(meshes);
        self
    }

    /// Set the texture backend collaborator
    pub fn with_texture_backend(mut self, backend: B) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Replace the tabletop scene with other objects
    pub fn with_objects(mut self, objects: Vec<SceneObject>) -> Self {
        self.objects = Some(objects);
        self
    }

    /// Validate the configuration and assemble the scene
    pub fn build(self) -> Result<SceneManager<S, M, B>, SceneError> {
        let shader = self.shader.ok_or(SceneError::MissingShader)?;
        let meshes = self.meshes.ok_or(SceneError::MissingMeshLibrary)?;
        let backend = self.backend.ok_or(SceneError::MissingTextureBackend)?;
        self.config.validate()?;

        let textures = TextureRegistry::with_max_units(self.config.max_texture_units);
        Ok(SceneManager {
            config: self.config,
            shader,
            meshes,
            backend,
            textures,
            materials: MaterialRegistry::new(),
            objects: self.objects.unwrap_or_else(objects::tabletop_scene),
            phase: ScenePhase::Unprepared,
        })
    }
}

/// Prepares and renders a scene of primitive meshes
pub struct SceneManager<S, M, B> {
    config: SceneConfig,
    shader: S,
    meshes: M,
    backend: B,
    textures: TextureRegistry,
    materials: MaterialRegistry,
    objects: Vec<SceneObject>,
    phase: ScenePhase,
}

impl<S, M, B> SceneManager<S, M, B>
where
    S: ShaderInterface,
    M: MeshLibrary,
    B: TextureBackend,
{
    /// Start building a scene
    pub fn builder(config: SceneConfig) -> SceneManagerBuilder<S, M, B> {
        SceneManagerBuilder::new(config)
    }

    /// Load textures, materials and meshes
    ///
    /// A texture that fails to load is logged and left out; entries that use
    /// its tag render with an unresolved sampler. Binding failures abort
    /// preparation.
    pub fn prepare(&mut self) -> Result<(), SceneError> {
        match self.phase {
            ScenePhase::Unprepared => {}
            ScenePhase::Prepared => return Err(SceneError::AlreadyPrepared),
            ScenePhase::Destroyed => return Err(SceneError::Destroyed),
        }

        self.load_scene_textures()?;
        for tag in objects::texture_tags(&self.objects) {
            if self.textures.find_slot(&tag).is_none() {
                log::warn!("Texture '{}' is sampled by the scene but not registered", tag);
            }
        }

        for definition in &self.config.materials {
            self.materials.register(definition.tag.clone(), definition.material());
        }

        // Each mesh is loaded once no matter how many entries draw it
        for kind in PrimitiveKind::LOADABLE {
            self.meshes.load(kind);
        }

        self.phase = ScenePhase::Prepared;
        log::info!(
            "Scene prepared: {} textures, {} materials, {} objects",
            self.textures.len(),
            self.materials.len(),
            self.objects.len()
        );
        Ok(())
    }

    fn load_scene_textures(&mut self) -> Result<(), SceneError> {
        for source in &self.config.textures {
            let path = self.config.texture_path(source);
            match self.textures.load(&mut self.backend, &path, &source.tag) {
                Ok(slot) => log::debug!("Texture '{}' -> slot {}", source.tag, slot),
                Err(e) => log::warn!(
                    "Could not load texture '{}' from {}: {}",
                    source.tag,
                    path.display(),
                    e
                ),
            }
        }

        self.textures.bind_all(&mut self.backend)?;
        Ok(())
    }

    /// Render one frame, returning the number of draws issued
    pub fn render(&mut self) -> Result<usize, SceneError> {
        match self.phase {
            ScenePhase::Prepared => {}
            ScenePhase::Unprepared => return Err(SceneError::NotPrepared),
            ScenePhase::Destroyed => return Err(SceneError::Destroyed),
        }

        let mut dispatcher = ShaderStateDispatcher::new(&mut self.shader, &self.textures, &self.materials);
        let mut draws = 0;
        for object in &self.objects {
            draws += object.render(&mut dispatcher, &mut self.meshes);
        }

        log::trace!("Frame issued {} draws", draws);
        Ok(draws)
    }

    /// Release every texture
    pub fn shutdown(&mut self) {
        if self.phase == ScenePhase::Destroyed {
            return;
        }
        self.textures.destroy_all(&mut self.backend);
        self.phase = ScenePhase::Destroyed;
        log::info!("Scene resources released");
    }

    /// Current phase
    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    /// Texture registry
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// Material registry
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// Scene objects in render order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Active configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Shader collaborator
    pub fn shader(&self) -> &S {
        &self.shader
    }

    /// Mesh library collaborator
    pub fn mesh_library(&self) -> &M {
        &self.meshes
    }

    /// Texture backend collaborator
    pub fn texture_backend(&self) -> &B {
        &self.backend
    }
}
