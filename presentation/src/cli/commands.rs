//! CLI command definitions

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// CLI arguments for trivia-server
#[derive(Parser, Debug)]
#[command(name = "trivia-server")]
#[command(author, version, about = "Trivia question API server")]
#[command(long_about = r#"
Trivia server exposes a JSON API over a bank of trivia questions.

Routes:
  GET    /api/categories                        All categories
  GET    /api/questions?page=N                  Paginated questions
  GET    /api/categories/{id}/questions         Questions in one category
  POST   /api/questions                         Create, or search with {"searchTerm": ...}
  DELETE /api/questions/{id}                    Delete a question
  POST   /api/quizzes                           Draw the next unseen quiz question

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./trivia.toml       Project-level config
3. ~/.config/trivia-api/config.toml   Global config

Environment variables prefixed with TRIVIA_ override file values,
e.g. TRIVIA_SERVER__BIND=0.0.0.0:8080

Example:
  trivia-server --bind 0.0.0.0:5000
  trivia-server --seed-file ./questions.json -vv
"#)]
pub struct Cli {
    /// Address to listen on (overrides server.bind)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// JSON file with categories and questions to start from (overrides store.seed)
    #[arg(long, value_name = "PATH")]
    pub seed_file: Option<PathBuf>,

    /// Fixed RNG seed for quiz draws (overrides quiz.seed)
    #[arg(long, value_name = "SEED")]
    pub quiz_seed: Option<u64>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log filter implied by `-v` flags, if any were given
    pub fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
