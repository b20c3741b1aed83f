//! CSV input and output for the title table
pub mod reader;
pub mod writer;

pub use reader::read_dataset;
pub use writer::write_dataset;
