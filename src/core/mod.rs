//! Platform-agnostic animation core - shared between the WASM app and CLI

pub mod error;
pub mod line;
pub mod oscillator;
pub mod params;
pub mod registry;
pub mod scene;
pub mod surface;

pub use error::{SetupError, Viewport};
pub use line::Line;
pub use oscillator::AngleOscillator;
pub use params::Params;
pub use registry::LineRegistry;
pub use scene::{FrameStats, Scene};
pub use surface::{DrawOp, RecordingSurface, Rgba, Surface};
