mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{load_schema_str, parse_document_str};
pub use output::{OutputDestination, OutputOptions, emit, render};
