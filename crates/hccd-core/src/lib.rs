// Core modules
pub mod card;
pub mod config;
pub mod data;
pub mod error;
pub mod fragment;
pub mod lock;
pub mod project;
pub mod report;
pub mod sheet;
pub mod template;

// Re-export commonly used types
pub use error::{HccdError, Result};
