//! Generation settings read from `hccd.toml`

pub mod consts;
mod filter;
mod model;

pub use filter::parse_card_filter;
pub use model::{CardsConfig, Config, CopiesValue, CsvConfig, CsvFormat, FalseValue, GridConfig};
