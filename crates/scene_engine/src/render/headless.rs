//! Headless collaborators
//!
//! Implementations of the shader, mesh and texture collaborators that keep
//! everything on the CPU. The shader and mesh library append to a shared
//! [`FrameLog`], so the exact interleaving of uniform writes and draws can be
//! inspected after a frame. The scene driver uses them to render without a
//! window, and the tests use them to check the pipeline.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::assets::ImageData;
use crate::render::backend::{TextureBackend, TextureHandle, TextureParams};
use crate::render::mesh::{FaceVariant, MeshLibrary, PrimitiveKind};
use crate::render::shader::{ShaderInterface, UniformKind, UniformValue};
use crate::render::{RenderError, RenderResult};

/// Something the pipeline sent to a collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameEvent {
    /// A uniform write
    Uniform(UniformKind, UniformValue),
    /// A draw call
    Draw(PrimitiveKind, FaceVariant),
}

impl FrameEvent {
    /// Raw bytes identifying this event, for bitwise comparisons
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            FrameEvent::Uniform(kind, value) => {
                let mut bytes = kind.name().as_bytes().to_vec();
                bytes.extend(value.to_bytes());
                bytes
            }
            FrameEvent::Draw(kind, face) => format!("draw:{:?}:{:?}", kind, face).into_bytes(),
        }
    }
}

/// Shared, ordered record of collaborator calls
///
/// Cloning a log yields another handle to the same record.
#[derive(Debug, Clone, Default)]
pub struct FrameLog {
    events: Rc<RefCell<Vec<FrameEvent>>>,
}

impl FrameLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn push(&self, event: FrameEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Copy of every recorded event
    pub fn events(&self) -> Vec<FrameEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return every recorded event
    pub fn take(&self) -> Vec<FrameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Number of recorded draw calls
    pub fn draw_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, FrameEvent::Draw(..)))
            .count()
    }

    /// Concatenated bytes of every recorded event
    pub fn to_bytes(&self) -> Vec<u8> {
        self.events
            .borrow()
            .iter()
            .flat_map(FrameEvent::to_bytes)
            .collect()
    }
}

/// Shader collaborator that records writes and tracks the current mailbox
#[derive(Debug)]
pub struct RecordingShader {
    log: FrameLog,
    current: HashMap<UniformKind, UniformValue>,
}

impl RecordingShader {
    /// Create a shader recording into `log`
    pub fn new(log: FrameLog) -> Self {
        Self {
            log,
            current: HashMap::new(),
        }
    }

    /// Value the next draw would consume for `kind`
    pub fn current(&self, kind: UniformKind) -> Option<UniformValue> {
        self.current.get(&kind).copied()
    }

    /// The log this shader records into
    pub fn log(&self) -> &FrameLog {
        &self.log
    }
}

impl ShaderInterface for RecordingShader {
    fn set_uniform(&mut self, kind: UniformKind, value: UniformValue) {
        log::trace!("uniform {} = {:?}", kind, value);
        self.current.insert(kind, value);
        self.log.push(FrameEvent::Uniform(kind, value));
    }
}

/// Mesh collaborator that records loads and draws
#[derive(Debug)]
pub struct RecordingMeshLibrary {
    log: FrameLog,
    loaded: Vec<PrimitiveKind>,
}

impl RecordingMeshLibrary {
    /// Create a mesh library recording into `log`
    pub fn new(log: FrameLog) -> Self {
        Self {
            log,
            loaded: Vec::new(),
        }
    }

    /// Whether the geometry a kind draws from has been loaded
    pub fn is_loaded(&self, kind: PrimitiveKind) -> bool {
        self.loaded.contains(&kind.geometry())
    }

    /// Loaded kinds in load order
    pub fn loaded(&self) -> &[PrimitiveKind] {
        &self.loaded
    }
}

impl MeshLibrary for RecordingMeshLibrary {
    fn load(&mut self, kind: PrimitiveKind) {
        if !self.loaded.contains(&kind) {
            self.loaded.push(kind);
        }
    }

    fn draw(&mut self, kind: PrimitiveKind, face: FaceVariant) {
        if !self.is_loaded(kind) {
            log::warn!("Drawing {:?} before its geometry was loaded", kind);
        }
        self.log.push(FrameEvent::Draw(kind, face));
    }
}

#[derive(Debug, Clone)]
struct HeadlessTexture {
    width: u32,
    height: u32,
    channels: u8,
    mipmaps: bool,
}

/// Texture backend that tracks texture lifetimes without a GPU
#[derive(Debug)]
pub struct HeadlessTextureBackend {
    next_handle: u32,
    live: BTreeMap<TextureHandle, HeadlessTexture>,
    units: BTreeMap<usize, TextureHandle>,
    deleted: Vec<TextureHandle>,
}

impl HeadlessTextureBackend {
    /// Create a backend with no textures
    pub fn new() -> Self {
        Self {
            next_handle: 1, // Start from 1, reserve 0 for "no texture"
            live: BTreeMap::new(),
            units: BTreeMap::new(),
            deleted: Vec::new(),
        }
    }

    /// Number of textures created and not yet deleted
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Texture attached to a unit
    pub fn bound(&self, unit: usize) -> Option<TextureHandle> {
        self.units.get(&unit).copied()
    }

    /// Handles deleted so far, in deletion order
    pub fn deleted(&self) -> &[TextureHandle] {
        &self.deleted
    }

    /// Dimensions and channel count of a live texture
    pub fn describe(&self, handle: TextureHandle) -> Option<(u32, u32, u8)> {
        self.live
            .get(&handle)
            .map(|texture| (texture.width, texture.height, texture.channels))
    }

    /// Whether a live texture was created with mipmaps
    pub fn has_mipmaps(&self, handle: TextureHandle) -> bool {
        self.live.get(&handle).is_some_and(|texture| texture.mipmaps)
    }
}

impl Default for HeadlessTextureBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureBackend for HeadlessTextureBackend {
    fn create_texture(&mut self, image: &ImageData, params: &TextureParams) -> RenderResult<TextureHandle> {
        if !image.is_consistent() {
            return Err(RenderError::ResourceCreationFailed(format!(
                "{} bytes of pixel data for a {}x{} image with {} channels",
                image.data.len(),
                image.width,
                image.height,
                image.channels
            )));
        }

        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.live.insert(
            handle,
            HeadlessTexture {
                width: image.width,
                height: image.height,
                channels: image.channels,
                mipmaps: params.generate_mipmaps,
            },
        );
        Ok(handle)
    }

    fn bind_texture(&mut self, unit: usize, handle: TextureHandle) -> RenderResult<()> {
        if !self.live.contains_key(&handle) {
            return Err(RenderError::BackendError(format!("cannot bind unknown texture {:?}", handle)));
        }
        self.units.insert(unit, handle);
        Ok(())
    }

    fn delete_texture(&mut self, handle: TextureHandle) -> RenderResult<()> {
        if self.live.remove(&handle).is_none() {
            return Err(RenderError::BackendError(format!("cannot delete unknown texture {:?}", handle)));
        }
        self.units.retain(|_, bound| *bound != handle);
        self.deleted.push(handle);
        Ok(())
    }
}
