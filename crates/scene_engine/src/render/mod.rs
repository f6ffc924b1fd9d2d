//! Per-draw rendering pipeline
//!
//! The renderer does not own a window, a shader program or any geometry.
//! Those are collaborators reached through three traits:
//!
//! - [`ShaderInterface`] accepts typed uniform writes
//! - [`MeshLibrary`] loads and draws primitive shapes
//! - [`TextureBackend`] creates, binds and deletes GPU textures
//!
//! On top of them sit the two registries (textures and materials), the
//! transform composer and the shader state dispatcher. Shader uniforms are a
//! single-slot mailbox: whatever was written last is what the next draw
//! consumes, so every draw must be preceded by its own complete set of writes.

pub mod backend;
pub mod shader;
pub mod mesh;
pub mod texture_registry;
pub mod material_registry;
pub mod transform;
pub mod dispatcher;
pub mod headless;

pub use backend::{FilterMode, TextureBackend, TextureHandle, TextureParams, WrapMode};
pub use shader::{ShaderInterface, UniformKind, UniformValue};
pub use mesh::{BoxSide, CylinderFaces, FaceVariant, MeshLibrary, PrimitiveKind};
pub use texture_registry::{TextureEntry, TextureError, TextureRegistry, MAX_TEXTURE_UNITS, TEXTURE_NOT_FOUND};
pub use material_registry::{MaterialLookup, MaterialRegistry, ObjectMaterial};
pub use transform::{compose_model_matrix, TransformParams};
pub use dispatcher::ShaderStateDispatcher;

use thiserror::Error;

/// Errors reported by rendering collaborators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Resource creation or management failed
    ///
    /// Occurs when GPU resources (textures, buffers) cannot be created or
    /// managed properly, typically due to memory constraints or invalid data.
    #[error("Resource creation failed: {0}")]
    ResourceCreationFailed(String),

    /// Backend-specific error occurred
    ///
    /// Wraps backend-specific errors in a generic form for consistent error
    /// handling across different graphics backends.
    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
