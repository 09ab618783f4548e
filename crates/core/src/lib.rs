//! Core library for the Crescent Moon animation.
//!
//! The crate holds everything about the piece that is deterministic and
//! headless: the phase counter, the palette blending, the star scatter, the
//! software raster target and the PNG exporter. The platform binary owns the
//! window, the wall clock and the audio device and drives this crate one
//! tick at a time. Each module owns a distinct subsystem so the piece can be
//! exercised end to end in tests without a display.

pub mod assets;
pub mod audio;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod palette;
pub mod phase;
pub mod raster;
pub mod render;
pub mod scheduler;
pub mod stars;

pub use assets::AssetStore;
pub use audio::{AudioBackend, ContextState, MusicController, SilentBackend};
pub use color::Rgb;
pub use config::{AnimationConfig, AppConfig, AssetConfig, CanvasConfig, CaptionConfig};
pub use error::{CrescentError, Result};
pub use export::{frame_filename, FrameExporter};
pub use input::{Command, InputQueue};
pub use palette::{palette_for_phase, Palette, CONTROL_STOPS};
pub use phase::AnimationState;
pub use raster::Framebuffer;
pub use render::FrameRenderer;
pub use scheduler::FrameScheduler;
pub use stars::{scatter, Star};
