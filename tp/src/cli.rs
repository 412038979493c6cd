//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::prompt::BudgetTier;

/// Trip planner - structured itineraries from the command line
#[derive(Parser)]
#[command(
    name = "tp",
    about = "Budget-friendly travel itineraries with day-by-day maps, powered by Gemini",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate an itinerary for a destination
    Plan {
        /// Destination city or country, e.g. "Paris, France"
        #[arg(value_name = "DESTINATION")]
        destination: String,

        /// Trip length in days (UI-level cap; the planner itself never clamps)
        #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u32).range(1..=14))]
        days: u32,

        /// Budget tier
        #[arg(short, long, value_enum, default_value = "budget")]
        budget: BudgetTier,

        /// Interest tag, repeatable (defaults to general sightseeing when omitted)
        #[arg(short, long = "interest", value_name = "TAG")]
        interests: Vec<String>,

        /// Free-text preferences, e.g. "Vegetarian food only, no early mornings"
        #[arg(short, long, default_value = "")]
        notes: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for the plan command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored terminal output
    Text,
    /// One JSON document with the itinerary, map view, and daily breakdown
    Json,
}
