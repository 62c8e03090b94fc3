// Command-line surface: argument definitions and the subcommand handlers.
// Handlers return the lines to print so main.rs only does I/O; an Err means
// "print Error: ... and exit 1".

use crate::catalog::{self, find_unit, Category, ValidationResult};
use crate::engine::{self, ConversionError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;


#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert length, temperature, area and weight units", long_about = None)]
pub struct Cli {
    /// Config file with session defaults and log filter
    #[arg(long, global = true, env = "UNITCONV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a value between two units
    Convert {
        /// Category (length, temperature, area, weight)
        category: String,

        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit id (e.g. "meter")
        from: String,

        /// Target unit id (e.g. "km")
        to: String,
    },

    /// Show the formula relating two units
    Formula {
        category: String,
        from: String,
        to: String,
    },

    /// List categories, or the units of one category
    List {
        category: Option<String>,
    },

    /// Export the unit catalog as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate the built-in unit tables
    Check,

    /// Interactive converter session on stdin
    Repl,
}

/// Both ids must belong to the category; the CLI reports what the engine skips
pub fn require_units(category: Category, ids: &[&str]) -> Result<(), ConversionError> {
    for id in ids {
        if find_unit(category, id).is_none() {
            return Err(ConversionError::UnknownUnit {
                category: category.id().to_string(),
                unit: id.to_string(),
            });
        }
    }
    Ok(())
}

/// `convert`: an invalid number is a normal result line, an unknown unit is an error
pub fn convert_lines(
    category: &str,
    value: &str,
    from: &str,
    to: &str,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let category: Category = category.parse()?;
    require_units(category, &[from, to])?;

    let conversion = engine::convert(category, from, to, value)
        .ok_or_else(|| format!("Cannot convert {} to {}", from, to))?;
    let formula = engine::formula(category, from, to).unwrap_or_default();

    Ok(vec![
        format!("Result:  {}", conversion),
        format!("Formula: {}", formula),
    ])
}

pub fn formula_lines(
    category: &str,
    from: &str,
    to: &str,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let category: Category = category.parse()?;
    require_units(category, &[from, to])?;

    let formula = engine::formula(category, from, to)
        .ok_or_else(|| format!("No formula for {} to {}", from, to))?;
    Ok(vec![formula])
}

pub fn list_lines(category: Option<&str>) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let Some(category) = category else {
        let mut lines = vec![format!("Categories ({}):", Category::ALL.len())];
        for c in Category::ALL {
            lines.push(format!(
                "  - {} ({}, {} units)",
                c.id(),
                c.name(),
                catalog::units(c).len()
            ));
        }
        return Ok(lines);
    };

    let category: Category = category.parse()?;
    let (default_from, default_to) = catalog::default_units(category);

    let mut lines = vec![format!("{} units:", category.name())];
    for unit in catalog::units(category) {
        let marker = if unit.id == default_from.id {
            " [default from]"
        } else if unit.id == default_to.id {
            " [default to]"
        } else {
            ""
        };

        if category.is_affine() {
            lines.push(format!("  - {:<12} {}{}", unit.id, unit.name, marker));
        } else {
            lines.push(format!(
                "  - {:<12} {:<24} factor {}{}",
                unit.id,
                unit.name,
                engine::format_number(unit.factor),
                marker
            ));
        }
    }

    Ok(lines)
}

pub fn export_json() -> Result<String, Box<dyn std::error::Error>> {
    Ok(serde_json::to_string_pretty(&catalog::catalog())?)
}

/// `check`: the report is returned on success, and carried in the error otherwise
pub fn check_lines(validation: &ValidationResult) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let report: Vec<String> = validation.to_string().lines().map(String::from).collect();

    if !validation.is_valid() {
        return Err(format!(
            "{} catalog error(s)\n{}",
            validation.errors.len(),
            report.join("\n")
        )
        .into());
    }

    let mut lines = report;
    lines.push(format!("Catalog OK: {} categories", Category::ALL.len()));
    Ok(lines)
}
