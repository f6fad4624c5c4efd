//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use hccd_core::config::{CopiesValue, CsvFormat, FalseValue};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hccd")]
#[command(version, about = "Print-ready card sheets from a CSV file and an HTML card template", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate <NAME>-GENERATED.html from <NAME>.html and <NAME>.csv
    Generate(GenerateArgs),

    /// Write a starter project (template, stylesheet, CSV and hccd.toml)
    Init {
        /// Directory to write into (created if missing)
        dir: PathBuf,

        /// Base name of the project files
        #[arg(short, long, default_value = "cards")]
        name: String,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Card template page; the first element with class "card" is the card
    pub template: PathBuf,

    /// Config file (default: hccd.toml next to the template)
    #[arg(short, long, env = "HCCD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Rows per page
    #[arg(long)]
    pub rows: Option<u32>,

    /// Columns per page
    #[arg(long)]
    pub cols: Option<u32>,

    /// CSV field delimiter
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// CSV dialect: excel or rfc4180
    #[arg(long)]
    pub format: Option<CsvFormat>,

    /// Cell value passed to templates as false: disabled, empty or dash
    #[arg(long)]
    pub false_value: Option<FalseValue>,

    /// Per-row copy count: disabled or _copies
    #[arg(long)]
    pub copies: Option<CopiesValue>,

    /// Cards to print by number, e.g. "5,1-3,1"
    #[arg(long)]
    pub cards: Option<String>,

    /// Print a JSON summary instead of text
    #[arg(long)]
    pub json: bool,
}
