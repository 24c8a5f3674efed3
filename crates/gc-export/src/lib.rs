/// Output sink for glyphcast: exclusive-create text writer.

pub mod writer;

pub use writer::write_rows;
