//! Tabletop scene driver
//!
//! Prepares the tabletop scene against the headless collaborators, renders
//! the configured number of frames and releases the textures.
//!
//! Usage: `tabletop_scene [config.toml|config.ron]`

use std::path::PathBuf;

use scene_engine::config::{Config, ConfigError, SceneConfig};
use scene_engine::foundation::logging::{self, LevelFilter};
use scene_engine::render::headless::{FrameLog, HeadlessTextureBackend, RecordingMeshLibrary, RecordingShader};
use scene_engine::scene::{SceneError, SceneManager};
use thiserror::Error;

type HeadlessScene = SceneManager<RecordingShader, RecordingMeshLibrary, HeadlessTextureBackend>;

#[derive(Error, Debug)]
enum AppError {
    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),

    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

struct TabletopApp {
    scene: HeadlessScene,
    frame_log: FrameLog,
    frames: u32,
}

impl TabletopApp {
    fn new(config: SceneConfig) -> Result<Self, AppError> {
        let frame_log = FrameLog::new();
        let frames = config.frames;
        let scene = SceneManager::builder(config)
            .with_shader(RecordingShader::new(frame_log.clone()))
            .with_mesh_library(RecordingMeshLibrary::new(frame_log.clone()))
            .with_texture_backend(HeadlessTextureBackend::new())
            .build()?;

        Ok(Self {
            scene,
            frame_log,
            frames,
        })
    }

    fn run(&mut self) -> Result<(), AppError> {
        self.scene.prepare()?;
        log::info!(
            "Loaded {} of {} textures",
            self.scene.textures().len(),
            self.scene.config().textures.len()
        );

        let mut previous: Option<Vec<u8>> = None;
        for frame in 0..self.frames {
            let draws = self.scene.render()?;
            let events = self.frame_log.len();
            let bytes = self.frame_log.to_bytes();
            self.frame_log.take();

            log::info!("Frame {}: {} draws, {} uniform writes", frame, draws, events - draws);
            if previous.as_ref().is_some_and(|last| *last != bytes) {
                log::warn!("Frame {} differs from the frame before it", frame);
            }
            previous = Some(bytes);
        }

        self.scene.shutdown();
        Ok(())
    }
}

fn load_config() -> Result<SceneConfig, AppError> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Ok(SceneConfig::load_from_file(path)?),
        None => Ok(SceneConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let level: LevelFilter = config
        .log_level
        .parse()
        .map_err(|_| AppError::InvalidLogLevel(config.log_level.clone()))?;
    logging::init_with_level(level).map_err(AppError::from)?;

    log::info!("Starting tabletop scene");

    let mut app = TabletopApp::new(config)?;
    match app.run() {
        Ok(()) => {
            log::info!("Tabletop scene completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Tabletop scene failed: {:?}", e);
            Err(e.into())
        }
    }
}
