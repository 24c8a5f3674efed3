/// ASCII conversion engine for glyphcast.
///
/// Converts pixel frames to lines of ramp characters.

pub mod render;

pub use render::{render_row, rows};
