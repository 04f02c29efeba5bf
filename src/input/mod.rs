//! Reading the source document.

mod reader;

pub use reader::InputReader;
