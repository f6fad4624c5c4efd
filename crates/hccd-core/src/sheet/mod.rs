//! Page layout and the generated HTML document

mod document;
mod grid;

pub use document::{build_document, write_document};
pub use grid::{paginate, GridSize};
