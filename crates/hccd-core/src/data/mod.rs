//! Tabular data loading - one [`Row`] per card record
//!
//! The first record of the file is always the header. Data records become
//! rows keyed by header name, in header order.

mod quoting;
mod row;

pub use row::Row;

use crate::config::{CsvConfig, CsvFormat};
use crate::error::{HccdError, Result};
use csv::ReaderBuilder;
use std::fs;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Load every data row of a CSV file
///
/// # Errors
///
/// - [`HccdError::MissingInput`] if `path` is not an existing file
/// - [`HccdError::MalformedData`] on structural CSV errors, including broken
///   quoting
pub fn load_rows(path: &Path, config: &CsvConfig) -> Result<Vec<Row>> {
    if !path.is_file() {
        return Err(HccdError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    let input = match config.format {
        CsvFormat::Excel => strip_bom(&bytes),
        CsvFormat::Rfc4180 => &bytes[..],
    };

    read_rows(input, config)
}

/// Parse rows from any reader using the configured dialect
pub fn read_rows<R: Read>(mut reader: R, config: &CsvConfig) -> Result<Vec<Row>> {
    let delimiter = config.delimiter_byte()?;

    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    quoting::check_quoting(&input, delimiter)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(config.format == CsvFormat::Excel)
        .from_reader(&input[..]);

    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(Row::from_record(&headers, &record));
    }

    Ok(rows)
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}
