//! Generate command - write the printable card sheet for one template

use crate::cli::GenerateArgs;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use hccd_core::config::consts::CONFIG_FILE_NAME;
use hccd_core::config::{parse_card_filter, Config};
use hccd_core::project::{generate_cards, GenerationOutcome, ProjectFiles};
use hccd_core::report::{EventLevel, Reporter, TracingReporter};
use serde::Serialize;

/// Prints pipeline progress to stderr in verbose mode, otherwise hands
/// events to the tracing subscriber
struct CliReporter {
    verbose: bool,
}

impl Reporter for CliReporter {
    fn on_event(&self, message: &str, level: EventLevel) {
        if !self.verbose {
            TracingReporter.on_event(message, level);
        } else if level >= EventLevel::Debug {
            eprintln!("{} {}", "→".cyan(), message);
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Summary<'a> {
    Written {
        path: String,
        cards: usize,
        pages: usize,
    },
    Skipped {
        reason: &'a str,
    },
}

/// Generate `<base>-GENERATED.html`
///
/// Config comes from `--config` or `hccd.toml` next to the template (defaults
/// when absent); command-line flags override it.
pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    let files = ProjectFiles::from_template(&args.template)?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| files.dir.join(CONFIG_FILE_NAME));
    let mut config = Config::load_or_default(&config_path)?;
    apply_overrides(&args, &mut config)?;

    tracing::debug!(config = %config_path.display(), ?config, "configuration loaded");

    let reporter = CliReporter { verbose };
    let outcome = generate_cards(&files, &config, &reporter)?;

    if args.json {
        let summary = match &outcome {
            GenerationOutcome::Written { path, cards, pages } => Summary::Written {
                path: path.display().to_string(),
                cards: *cards,
                pages: *pages,
            },
            GenerationOutcome::Skipped { reason } => Summary::Skipped { reason },
        };
        print_json(&serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    match outcome {
        GenerationOutcome::Written { path, cards, pages } => println!(
            "{} Wrote {} card(s) on {} page(s) to {}",
            "✓".green().bold(),
            cards,
            pages,
            path.display()
        ),
        GenerationOutcome::Skipped { reason } => println!("{} {}", "!".yellow(), reason),
    }

    Ok(())
}

fn apply_overrides(args: &GenerateArgs, config: &mut Config) -> Result<()> {
    if let Some(rows) = args.rows {
        config.grid.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.grid.cols = cols;
    }
    if let Some(delimiter) = args.delimiter {
        config.csv.delimiter = delimiter;
    }
    if let Some(format) = args.format {
        config.csv.format = format;
    }
    if let Some(false_value) = args.false_value {
        config.cards.false_value = false_value;
    }
    if let Some(copies) = args.copies {
        config.cards.copies = copies;
    }
    if let Some(cards) = &args.cards {
        config.cards.filter = parse_card_filter(cards)?;
    }
    Ok(())
}
