//! Generates the wcswidth data tables (wide and zero-width codepoint ranges)
//! from the Unicode Character Database.

pub mod error;
pub mod generator;
pub mod range;
pub mod source;
pub mod table;
pub mod util;
pub mod writer;

pub use error::GenerateError;
pub use generator::{GeneratedTable, Generator, GeneratorConfig};
pub use table::Table;
pub use writer::Format;
