//! Trip planner CLI entry point

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use tripplanner::cli::{Cli, Command, OutputFormat};
use tripplanner::config::Config;
use tripplanner::llm::GeminiClient;
use tripplanner::map::{compute_daily_breakdown, compute_map_view};
use tripplanner::planner::{PlannerError, generate_itinerary};
use tripplanner::prompt::{BudgetTier, TripRequest};
use tripplanner::session::{PlannerSession, SessionState};
use tripplanner::itinerary::TripItinerary;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let level = if let Some(s) = cli_log_level {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        }
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref())?;
    debug!("main: logging initialized");

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Plan {
            destination,
            days,
            budget,
            interests,
            notes,
            format,
        } => cmd_plan(&config, destination, days, budget, interests, notes, format).await,
    }
}

/// Run one generation and render the result
async fn cmd_plan(
    config: &Config,
    destination: String,
    days: u32,
    budget: BudgetTier,
    interests: Vec<String>,
    notes: String,
    format: OutputFormat,
) -> Result<()> {
    debug!(%destination, days, %budget, "cmd_plan: called");

    // Pre-flight: a missing or placeholder credential never reaches the backend
    let credential = match config.llm.get_api_key() {
        Ok(key) => key,
        Err(e) => {
            let err = PlannerError::Configuration(e.to_string());
            eprintln!("{}", err.user_message().yellow());
            std::process::exit(2);
        }
    };

    let backend = GeminiClient::from_config(&config.llm).map_err(|e| eyre::eyre!("Failed to build client: {}", e))?;

    let request = TripRequest {
        destination,
        days,
        budget,
        interests,
        notes,
    };

    let mut session = PlannerSession::new();
    session.begin_attempt();

    info!(destination = %request.destination, "cmd_plan: requesting itinerary");
    let outcome = generate_itinerary(&backend, &credential, &request).await;
    session.finish(outcome);

    match session.state() {
        SessionState::Ready(trip) => {
            match format {
                OutputFormat::Text => render_text(trip),
                OutputFormat::Json => render_json(trip)?,
            }
            Ok(())
        }
        SessionState::Failed(message) => {
            eprintln!("{}", format!("Failed to generate itinerary: {}", message).red());
            std::process::exit(1);
        }
        SessionState::Empty => {
            // finish() always stores an outcome; this arm is unreachable in practice
            eprintln!("{}", "No result produced.".red());
            std::process::exit(1);
        }
    }
}

/// Human-readable colored rendering: overview, tips, map summary, breakdown
fn render_text(trip: &TripItinerary) {
    println!(
        "{}",
        format!("Trip to {} planned successfully!", trip.destination).green().bold()
    );
    println!("Estimated Total Cost: {}", trip.total_estimated_cost.bold());

    println!("\n{}", "Budget Tips".cyan().bold());
    for tip in &trip.budget_tips {
        println!("  - {}", tip);
    }

    println!("\n{}", "Trip Highlights".cyan().bold());
    match compute_map_view(trip) {
        Some(view) => {
            println!(
                "  Map centered at ({:.4}, {:.4}), fitting ({:.4}, {:.4}) to ({:.4}, {:.4})",
                view.center.lat, view.center.lng, view.bounds.south, view.bounds.west, view.bounds.north,
                view.bounds.east
            );
            for marker in &view.markers {
                println!(
                    "  [{}] {} at ({:.4}, {:.4})",
                    marker.color,
                    marker.tooltip,
                    marker.position.lat,
                    marker.position.lng
                );
            }
        }
        None => println!("  No coordinates returned to display on the map."),
    }

    println!("\n{}", "Your Itinerary".cyan().bold());
    for section in compute_daily_breakdown(trip) {
        println!("\n{}", format!("Day {}: {}", section.day, section.theme).bold());
        for entry in &section.entries {
            println!("  {} - {} ({})", entry.time.bold(), entry.name, entry.cost_estimate);
            println!("    {}", entry.description.italic());
        }
    }
}

/// One JSON document carrying the itinerary plus both derived views
fn render_json(trip: &TripItinerary) -> Result<()> {
    let document = serde_json::json!({
        "itinerary": trip,
        "map_view": compute_map_view(trip),
        "breakdown": compute_daily_breakdown(trip),
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&document).context("Failed to serialize output")?
    );
    Ok(())
}
