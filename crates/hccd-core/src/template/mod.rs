//! Template module - logic-less card template engine
//!
//! Card templates are HTML fragments with Mustache-style tags. Values are
//! already HTML and are inserted verbatim.
//!
//! ## Syntax
//!
//! - Variables: `{{key}}`, `{{{key}}}` or `{{& key}}` (all unescaped, spaces optional)
//! - Sections: `{{#key}} ... {{/key}}` render when `key` is truthy
//! - Inverted sections: `{{^key}} ... {{/key}}` render when `key` is falsy
//! - Current section value: `{{.}}`
//! - Comments: `{{! ignored }}`
//!
//! A field missing from the context renders as `[NOT FOUND]` instead of
//! failing, so broken templates show up in the generated sheet.

pub mod engine;
pub mod error;

pub use engine::{render, TemplateContext, TemplateEngine, Value};
pub use error::TemplateError;
