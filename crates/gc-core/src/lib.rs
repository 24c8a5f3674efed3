/// Shared types and configuration for glyphcast.
///
/// This crate contains the pixel frame, the glyph ramp, the error
/// taxonomy, and the configuration logic used across the glyphcast
/// workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::GlyphRamp;
pub use config::ConvertConfig;
pub use error::ConvertError;
pub use frame::FrameBuffer;
