//! Scene assembly
//!
//! A scene is an ordered list of [`SceneObject`]s, each an ordered list of
//! [`RenderEntry`]s. The [`SceneManager`] prepares the resources the entries
//! refer to once, then replays the entries every frame:
//!
//! ```text
//! for each object, for each entry:
//!     model matrix -> shading (color or texture) -> UV scale -> lighting -> material -> draw
//! ```
//!
//! Entries never depend on state left behind by a previous entry, so any
//! entry can be rendered on its own and the frame output only depends on the
//! entry list.

mod render_entry;
mod scene_manager;
pub mod objects;


pub use render_entry::{RenderEntry, SceneObject, Shading};
pub use scene_manager::{SceneManager, SceneManagerBuilder, ScenePhase};

use thiserror::Error;

use crate::config::ConfigError;
use crate::render::TextureError;

/// Scene setup and lifecycle errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// No shader collaborator was supplied
    #[error("Scene requires a shader interface")]
    MissingShader,

    /// No mesh library was supplied
    #[error("Scene requires a mesh library")]
    MissingMeshLibrary,

    /// No texture backend was supplied
    #[error("Scene requires a texture backend")]
    MissingTextureBackend,

    /// The configuration is unusable
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rendering was requested before preparation
    #[error("Scene rendered before it was prepared")]
    NotPrepared,

    /// Preparation was requested twice
    #[error("Scene has already been prepared")]
    AlreadyPrepared,

    /// The scene was shut down and its textures released
    #[error("Scene has been shut down")]
    Destroyed,

    /// Texture binding failed during preparation
    #[error(transparent)]
    Texture(#[from] TextureError),
}
