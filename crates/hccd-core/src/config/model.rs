use crate::config::consts::{grid, COPIES_COLUMN};
use crate::error::{HccdError, Result};
use crate::sheet::GridSize;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// hccd.toml schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub csv: CsvConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub cards: CardsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub format: CsvFormat,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            format: CsvFormat::Excel,
        }
    }
}

impl CsvConfig {
    /// Delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        let c = self.delimiter;
        if !c.is_ascii() || matches!(c, '"' | '\n' | '\r') {
            return Err(HccdError::invalid_value(
                "csv.delimiter",
                format!("'{}' is not usable as a delimiter (single ASCII character required)", c.escape_default()),
            ));
        }
        Ok(c as u8)
    }
}

fn default_delimiter() -> char {
    ','
}

/// CSV dialect preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvFormat {
    /// Spreadsheet export: leading BOM stripped, ragged records tolerated
    #[default]
    Excel,
    /// Strict RFC 4180: every record must match the header width
    Rfc4180,
}

impl FromStr for CsvFormat {
    type Err = HccdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excel" => Ok(CsvFormat::Excel),
            "rfc4180" => Ok(CsvFormat::Rfc4180),
            other => Err(HccdError::invalid_value(
                "csv.format",
                format!("unknown format '{}' (expected 'excel' or 'rfc4180')", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: u32,
    #[serde(default = "default_cols")]
    pub cols: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: grid::DEFAULT_ROWS,
            cols: grid::DEFAULT_COLS,
        }
    }
}

fn default_rows() -> u32 {
    grid::DEFAULT_ROWS
}

fn default_cols() -> u32 {
    grid::DEFAULT_COLS
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardsConfig {
    #[serde(default)]
    pub false_value: FalseValue,
    #[serde(default)]
    pub copies: CopiesValue,
    /// 1-based card numbers to keep, in output order; empty keeps every card
    #[serde(default)]
    pub filter: Vec<usize>,
}

/// Cell value treated as boolean false by card templates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FalseValue {
    #[default]
    Disabled,
    /// `""` cells become false
    Empty,
    /// `"-"` cells become false
    Dash,
}

impl FalseValue {
    /// The raw cell text this policy maps to false, `None` when disabled
    pub fn sentinel(self) -> Option<&'static str> {
        match self {
            FalseValue::Disabled => None,
            FalseValue::Empty => Some(""),
            FalseValue::Dash => Some("-"),
        }
    }
}

impl FromStr for FalseValue {
    type Err = HccdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disabled" | "none" => Ok(FalseValue::Disabled),
            "empty" => Ok(FalseValue::Empty),
            "dash" | "-" => Ok(FalseValue::Dash),
            other => Err(HccdError::invalid_value(
                "cards.false_value",
                format!("unknown policy '{}' (expected 'disabled', 'empty' or 'dash')", other),
            )),
        }
    }
}

/// Source of the per-row repeat count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopiesValue {
    #[default]
    #[serde(rename = "disabled")]
    Disabled,
    #[serde(rename = "_copies")]
    Column,
}

impl CopiesValue {
    /// Column to read the count from, `None` when disabled
    pub fn column(self) -> Option<&'static str> {
        match self {
            CopiesValue::Disabled => None,
            CopiesValue::Column => Some(COPIES_COLUMN),
        }
    }
}

impl FromStr for CopiesValue {
    type Err = HccdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "disabled" | "none" => Ok(CopiesValue::Disabled),
            COPIES_COLUMN | "copies" => Ok(CopiesValue::Column),
            other => Err(HccdError::invalid_value(
                "cards.copies",
                format!("unknown policy '{}' (expected 'disabled' or '_copies')", other),
            )),
        }
    }
}

impl Config {
    /// Read hccd.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| HccdError::ConfigParseError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| HccdError::ConfigParseError(e.to_string()))
    }

    /// Read hccd.toml, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write hccd.toml
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HccdError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content)?;

        Ok(())
    }

    /// Check values that serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        self.csv.delimiter_byte()?;
        self.grid_size()?;
        Ok(())
    }

    /// Grid dimensions as a validated page layout
    pub fn grid_size(&self) -> Result<GridSize> {
        GridSize::new(self.grid.rows as usize, self.grid.cols as usize)
    }
}
