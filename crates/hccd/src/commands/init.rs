//! Init command - write a starter card project

use anyhow::Result;
use colored::Colorize;
use hccd_core::config::Config;
use hccd_core::project::create::create_project;
use std::path::Path;

pub fn run(dir: &Path, name: &str, verbose: bool) -> Result<()> {
    if verbose {
        println!("{} Creating project '{}' in {}", "→".cyan(), name, dir.display());
    }

    let written = create_project(dir, name, &Config::default())?;

    for path in &written {
        println!("{} Created {}", "✓".green().bold(), path.display());
    }
    println!(
        "\nNext: hccd generate {}",
        dir.join(format!("{}.html", name)).display()
    );

    Ok(())
}
