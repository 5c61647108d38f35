//! Server entrypoint for the trivia API
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use trivia_domain::Picker;
use trivia_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, InMemoryQuestionStore, RandomPicker, SeedData,
    SeededPicker,
};
use trivia_presentation::{AppState, Cli, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_config_sources() {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_overrides(&cli, &mut config);

    // Held until exit so buffered log lines reach the file
    let _log_guard = init_logging(&cli, &config.logging)?;

    info!("Starting trivia server");

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("Invalid configuration: {}", issue);
        }
        bail!("{} configuration problem(s), refusing to start", issues.len());
    }

    // === Dependency Injection ===
    let seed = match &config.store.seed {
        Some(path) => {
            info!("Loading questions from {}", path.display());
            SeedData::load(path)?
        }
        None => SeedData::sample()?,
    };
    let store = Arc::new(InMemoryQuestionStore::from_seed(seed));
    info!("Question store ready with {} questions", store.len().await);

    let picker: Arc<dyn Picker> = match config.quiz.seed {
        Some(seed) => {
            warn!("Quiz draws are deterministic (seed {})", seed);
            Arc::new(SeededPicker::new(seed))
        }
        None => Arc::new(RandomPicker),
    };

    let state = AppState::new(store, picker);

    let addr = config
        .server
        .bind_addr()
        .ok_or_else(|| anyhow!("Invalid bind address '{}'", config.server.bind))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    serve(listener, state, shutdown_signal()).await?;

    info!("Trivia server stopped");
    Ok(())
}

/// Command-line flags win over every configuration source
fn apply_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(bind) = cli.bind {
        config.server.bind = bind.to_string();
    }
    if let Some(seed_file) = &cli.seed_file {
        config.store.seed = Some(seed_file.clone());
    }
    if let Some(seed) = cli.quiz_seed {
        config.quiz.seed = Some(seed);
    }
}

/// Initialize logging
///
/// Filter: `RUST_LOG`, then `-v` flags, then `logging.filter`, then `info`.
/// Console output always; a plain-text copy goes to `logging.file` if set.
fn init_logging(cli: &Cli, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directives = cli
                .verbosity_filter()
                .map(str::to_string)
                .or_else(|| logging.filter.clone())
                .unwrap_or_else(|| "info".to_string());
            EnvFilter::try_new(&directives)
                .with_context(|| format!("Invalid log filter '{}'", directives))?
        }
    };

    let (file_layer, guard) = match &logging.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("logging.file has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            error!("Unable to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
