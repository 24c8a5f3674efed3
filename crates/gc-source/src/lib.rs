/// Image input for glyphcast: decoding and resizing.

pub mod loader;
pub mod resize;

pub use loader::load_image;
pub use resize::Resizer;
