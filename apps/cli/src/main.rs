use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resumake::cli::{Cli, Command};
use resumake::commands;
use resumake::config::Config;
use resumake::errors::AppError;
use resumake::render::RenderOutcome;
use resumake::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Usage errors and `help` exit here, before any configuration is read
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            return ExitCode::from(1);
        }
    };

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let state = AppState::new(config);

    let result = match &cli.command {
        Command::Create {
            resume_type,
            identifier,
        } => commands::create(&state, resume_type, identifier).await,
        Command::Generate { identifier } => commands::generate(&state, identifier).await,
        Command::Cover { identifier } => commands::cover(&state, identifier).await,
    };

    match result {
        Ok(RenderOutcome::Rendered { pdf }) => {
            info!("Done: {}", pdf.display());
            ExitCode::SUCCESS
        }
        Ok(RenderOutcome::Unsupported) => {
            warn!("PDF rendering is not supported on this platform; sources were written only");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn report(err: &AppError) {
    match err {
        AppError::InvalidArgument(msg) => {
            eprintln!("{msg}\n\n{}", Cli::command().render_usage());
        }
        other => error!("{other}"),
    }
}
