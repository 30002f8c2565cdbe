use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

mod cli;
mod config;

use cli::Cli;
use config::Config;
use kaizen::exec::{CodeRunner, ExecConfig};
use kaizen::llm::{AnthropicClient, AnthropicConfig, LlmClient};
use kaizen::planner::{PlannerConfig, TaskPlanner};
use kaizen::runner::{ImproveLoop, LoopOptions, LoopStatus};
use kaizen::ui::StdinPrompter;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kaizen")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("kaizen.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting improvement loop for {}", cli.file.display());

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let source = fs::read_to_string(&cli.file)
        .context(format!("Failed to read {}", cli.file.display()))?;

    let mut llm_config = AnthropicConfig {
        model: config.llm.model.clone(),
        max_tokens: config.llm.max_tokens,
        temperature: config.llm.temperature,
        timeout: Duration::from_millis(config.llm.timeout_ms),
    };
    if let Some(model) = &cli.model {
        llm_config.model = model.clone();
    }

    let client = Arc::new(AnthropicClient::new(llm_config)?);
    info!("Using model: {}", client.model());

    if cli.is_verbose() {
        println!("Model: {}", client.model().cyan());
        println!("Interpreter: {}", config.runner.interpreter.cyan());
    }

    let planner = TaskPlanner::with_config(
        client,
        PlannerConfig {
            max_tasks: config.tasks.max_tasks,
        },
    );
    let runner = CodeRunner::with_config(ExecConfig {
        interpreter: config.runner.interpreter.clone(),
        timeout: Duration::from_millis(config.runner.timeout_ms),
        max_output_bytes: config.runner.max_output_bytes,
    });
    let options = LoopOptions {
        autonomous: cli.autonomous,
        assume_yes: cli.yes,
    };

    let mut improve = ImproveLoop::new(planner, runner, StdinPrompter::new(), options);
    let outcome = improve.run(&source).await?;

    match outcome.status {
        LoopStatus::Completed => println!(
            "{} {} tasks completed over {} iterations",
            "Done:".green().bold(),
            outcome.completed_tasks.len(),
            outcome.iterations
        ),
        LoopStatus::Stopped => println!(
            "{} after {} iterations ({} tasks completed)",
            "Stopped".yellow().bold(),
            outcome.iterations,
            outcome.completed_tasks.len()
        ),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config)
        .await
        .context("Application failed")?;

    Ok(())
}
