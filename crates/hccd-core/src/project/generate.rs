//! Card sheet generation: rows and card fragment in, paginated document out

use super::ProjectFiles;
use crate::card::{render_all, select, CardRenderer};
use crate::config::Config;
use crate::data::{load_rows, Row};
use crate::error::{HccdError, Result};
use crate::fragment::read_card_fragment;
use crate::lock::acquire_lock;
use crate::report::{EventLevel, Reporter};
use crate::sheet::{build_document, paginate, write_document};
use std::path::PathBuf;
use std::time::Duration;

const LOCK_TIMEOUT: Duration = Duration::from_secs(10);

/// A finished card sheet, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub document: String,
    /// Cards placed on the sheet, after copies and filtering
    pub cards: usize,
    pub pages: usize,
}

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Written {
        path: PathBuf,
        cards: usize,
        pages: usize,
    },
    /// Nothing was written and nothing failed
    Skipped { reason: String },
}

/// Build the sheet document from loaded rows and the card fragment
///
/// Pure: renders every row once, repeats cards for the copies policy,
/// applies the card filter, then paginates.
pub fn assemble_sheet(
    rows: &[Row],
    fragment: &str,
    stylesheet_href: &str,
    config: &Config,
) -> Result<Sheet> {
    let grid = config.grid_size()?;
    let renderer = CardRenderer::compile(fragment, config.cards.false_value)?;

    let cards = render_all(&renderer, rows, config.cards.copies);
    let cards = select(cards, &config.cards.filter);

    let body = paginate(&cards, grid);
    Ok(Sheet {
        document: build_document(&body, stylesheet_href),
        cards: cards.len(),
        pages: grid.pages_for(cards.len()),
    })
}

/// Run the whole pipeline for one project and write `<base>-GENERATED.html`
///
/// A missing data file is reported and skipped rather than failed, so a
/// half-created project does not abort the caller. Any other error leaves an
/// existing output file untouched.
pub fn generate_cards(
    files: &ProjectFiles,
    config: &Config,
    reporter: &dyn Reporter,
) -> Result<GenerationOutcome> {
    reporter.on_event("Generating card sheet file...", EventLevel::Info);
    config.validate()?;

    let rows = match load_rows(&files.data, &config.csv) {
        Ok(rows) => rows,
        Err(HccdError::MissingInput { path }) => {
            let reason = format!(
                "CSV file {} does not exist. Generation aborted.",
                path.display()
            );
            reporter.on_event(&reason, EventLevel::Warn);
            return Ok(GenerationOutcome::Skipped { reason });
        }
        Err(e) => return Err(e),
    };
    reporter.on_event(
        &format!(
            "Loaded {} rows from {} (delimiter {:?}, {:?})",
            rows.len(),
            files.data.display(),
            config.csv.delimiter,
            config.csv.format
        ),
        EventLevel::Debug,
    );

    let fragment = read_card_fragment(&files.template)?;
    reporter.on_event(
        &format!("Card template taken from {}", files.template.display()),
        EventLevel::Debug,
    );

    let sheet = assemble_sheet(&rows, &fragment, &files.stylesheet_href(), config)?;

    let target = files.target_path()?;
    let lock_path = files.lock_path()?;
    let _guard = acquire_lock(&lock_path, LOCK_TIMEOUT, "card sheet generation")?;
    write_document(&target, &sheet.document)?;

    reporter.on_event(
        &format!("Card sheet file written to {}", target.display()),
        EventLevel::Info,
    );

    Ok(GenerationOutcome::Written {
        path: target,
        cards: sheet.cards,
        pages: sheet.pages,
    })
}
