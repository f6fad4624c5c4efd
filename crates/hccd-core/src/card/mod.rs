//! Card rendering, expansion and selection
//!
//! A [`CardRenderer`] turns each data row into a [`RenderedCard`];
//! [`render_all`] repeats cards according to the copies policy and
//! [`select`] applies the card number filter.

mod expand;
mod render;
mod select;

pub use expand::{copies_for, expand, render_all};
pub use render::{CardRenderer, RenderedCard};
pub use select::select;
