//! Travel Genie CLI
//!
//! An LLM-powered travel cost estimator: one submission per `plan`
//! invocation, or a stdin form loop via `interactive`.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::io::Write;
use travel_genie::{
    config::Config,
    error::TravelGenieError,
    llm::{ChatModel, LlmClient},
    normalize::normalize,
    pipeline::TravelPipeline,
    query::TravelQuery,
    schema::ResponseSchema,
};

/// Travel Genie - AI-powered travel options and cost estimates
#[derive(Parser)]
#[command(name = "travel-genie")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate travel options for a single trip
    Plan {
        /// Source location (e.g., "Delhi")
        #[arg(short, long)]
        source: String,

        /// Destination location (e.g., "Hyderabad")
        #[arg(short, long)]
        destination: String,

        /// Travel date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },

    /// Enter trips one after another on stdin
    Interactive,

    /// Test LLM connection
    Test,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            source,
            destination,
            date,
        } => cmd_plan(&source, &destination, &date).await,
        Commands::Interactive => cmd_interactive().await,
        Commands::Test => cmd_test().await,
    }
}

fn build_pipeline() -> Result<TravelPipeline<LlmClient>> {
    let config = Config::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let client = LlmClient::new(config.llm);
    Ok(TravelPipeline::new(client, ResponseSchema::travel_options()))
}

async fn cmd_plan(source: &str, destination: &str, date: &str) -> Result<()> {
    let pipeline = build_pipeline()?;
    println!("Using model: {}", pipeline_model(&pipeline));
    println!();

    submit(&pipeline, source, destination, date)
        .await
        .context("Travel estimation failed")?;

    Ok(())
}

async fn cmd_interactive() -> Result<()> {
    let pipeline = build_pipeline()?;
    println!("Travel Genie - your AI-powered travel assistant");
    println!("Using model: {}", pipeline_model(&pipeline));
    println!("Leave the source blank to quit.");

    loop {
        println!();
        let source = read_line("Source: ")?;
        if source.trim().is_empty() {
            break;
        }
        let destination = read_line("Destination: ")?;
        let date = read_line("Travel date (YYYY-MM-DD): ")?;

        // One submission per loop turn; a failed one leaves the session
        // usable for the next.
        if let Err(e) = submit(&pipeline, &source, &destination, &date).await {
            println!("Error: {}", e);
        }
    }

    Ok(())
}

/// Run one submission and print its outcome.
///
/// Input problems and an empty/missing options reply are user-visible
/// messages, not errors; only API, transport, and parse failures are
/// returned to the caller.
async fn submit(
    pipeline: &TravelPipeline<LlmClient>,
    source: &str,
    destination: &str,
    date: &str,
) -> travel_genie::Result<()> {
    let query = match TravelQuery::new(source, destination, date) {
        Ok(query) => query,
        Err(
            e @ (TravelGenieError::IncompleteQuery(_) | TravelGenieError::InvalidDate(_)),
        ) => {
            println!("{}. Please complete the form and try again.", e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if let Err(e) = query.check_not_past(Local::now().date_naive()) {
        println!("{}. Please pick a later date.", e);
        return Ok(());
    }

    println!(
        "Estimating travel options from {} to {} on {}...",
        query.source,
        query.destination,
        query.date_string()
    );

    match pipeline.invoke(&query).await {
        Ok(result) => {
            let table = normalize(&result);
            if table.is_empty() {
                println!("No travel options found. Please try again.");
            } else {
                println!();
                println!("Travel Cost Breakdown");
                print!("{}", table.format());
            }
            Ok(())
        }
        Err(TravelGenieError::MissingOptions) => {
            println!("No travel options found. Please try again.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn pipeline_model(pipeline: &TravelPipeline<LlmClient>) -> String {
    pipeline.model().model_name().to_string()
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}

async fn cmd_test() -> Result<()> {
    println!("Testing LLM connection...\n");

    let config = Config::load().context("Failed to load configuration")?;

    println!("Configuration:");
    println!("  API Base:  {}", config.llm.api_base);
    println!("  Model:     {}", config.llm.model);
    println!(
        "  API Key:   {}...",
        &config.llm.api_key[..config.llm.api_key.len().min(8)]
    );
    println!();

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Ok(());
    }

    let client = LlmClient::new(config.llm);

    println!("Sending test request...");
    match client.test_connection().await {
        Ok(()) => {
            println!("Connection successful!");
        }
        Err(e) => {
            println!("Connection failed: {}", e);
        }
    }

    Ok(())
}
