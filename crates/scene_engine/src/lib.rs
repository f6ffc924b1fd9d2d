//! # Scene Engine
//!
//! Per-draw rendering pipeline for a static 3D scene built from primitive
//! meshes: textures keyed by tag, materials keyed by tag, a fixed-order
//! model matrix composer and a dispatcher that writes a complete uniform set
//! before every draw.
//!
//! The windowing system, the shader program and the mesh geometry are
//! collaborators supplied by the caller. Headless implementations of all
//! three live in [`render::headless`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//! use scene_engine::render::headless::{
//!     FrameLog, HeadlessTextureBackend, RecordingMeshLibrary, RecordingShader,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let log = FrameLog::new();
//!     let mut scene = SceneManager::builder(SceneConfig::default())
//!         .with_shader(RecordingShader::new(log.clone()))
//!         .with_mesh_library(RecordingMeshLibrary::new(log.clone()))
//!         .with_texture_backend(HeadlessTextureBackend::new())
//!         .build()?;
//!
//!     scene.prepare()?;
//!     let draws = scene.render()?;
//!     println!("{} draws, {} events", draws, log.len());
//!     scene.shutdown();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, ImageData},
        config::{Config, ConfigError, MaterialDefinition, SceneConfig, TextureSource},
        foundation::math::{Mat4, Vec2, Vec3, Vec4},
        render::{
            FaceVariant, MaterialRegistry, MeshLibrary, ObjectMaterial, PrimitiveKind, ShaderInterface,
            ShaderStateDispatcher, TextureBackend, TextureRegistry, TransformParams, UniformKind, UniformValue,
        },
        scene::{RenderEntry, SceneError, SceneManager, SceneObject, ScenePhase, Shading},
    };
}
