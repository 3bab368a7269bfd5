//! Intern Portal CLI
//!
//! Command-line client for the Intern Portal API:
//! - Check server health
//! - Show the intern profile
//! - Show the leaderboard
//! - Generate a default config file

use clap::{Parser, Subcommand};
use intern_portal::api::dto::{ErrorResponse, HealthResponse};
use intern_portal::config::{generate_default_config, LoggingConfig};
use intern_portal::logging::init_tracing;
use intern_portal::portal::{is_ranked, InternProfile, LeaderboardEntry};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "portal-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the Intern Portal API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, env = "PORTAL_API_URL", default_value = "http://localhost:3000", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "10", global = true)]
    pub timeout_secs: u64,

    /// Log each request and response status
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the API is up
    Health,

    /// Show the current intern's profile
    Intern,

    /// Show the donation leaderboard
    Leaderboard,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&LoggingConfig {
        level: if cli.verbose { "portal_cli=debug" } else { "portal_cli=warn" }.to_string(),
        ..LoggingConfig::default()
    });

    let api_url = cli.api_url.trim_end_matches('/').to_string();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()?;

    match cli.command {
        Commands::Health => {
            let health: HealthResponse = match fetch(&client, &api_url, "/api/health").await {
                Ok(health) => health,
                Err(e) => {
                    eprintln!("Cannot reach Intern Portal API at {}", api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin intern-portal");
                    std::process::exit(1);
                }
            };

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&health)?);
            } else {
                println!("API Status: {}", health.status);
                println!("{}", health.message);
                println!("Server time: {}", health.timestamp);
            }
        }

        Commands::Intern => {
            let profile: InternProfile = fetch_or_exit(&client, &api_url, "/api/intern").await;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("Name:          {}", profile.name);
                println!("Referral code: {}", profile.referral_code);
                println!("Donations:     ${}", profile.donations);
            }
        }

        Commands::Leaderboard => {
            let entries: Vec<LeaderboardEntry> =
                fetch_or_exit(&client, &api_url, "/api/leaderboard").await;

            if !is_ranked(&entries) {
                eprintln!("Warning: leaderboard ranks do not match donation order");
            }

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No participants yet.");
            } else {
                print_leaderboard(&entries);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Errors from a single API call
#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{status}: {message}")]
    Status { status: u16, message: String },
}

async fn fetch<T: DeserializeOwned>(
    client: &reqwest::Client,
    api_url: &str,
    path: &str,
) -> Result<T, FetchError> {
    let url = format!("{}{}", api_url, path);
    tracing::debug!("GET {}", url);

    let response = client.get(&url).send().await?;

    let status = response.status();
    tracing::debug!(status = status.as_u16(), "Response from {}", path);
    if !status.is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(FetchError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}

async fn fetch_or_exit<T: DeserializeOwned>(
    client: &reqwest::Client,
    api_url: &str,
    path: &str,
) -> T {
    match fetch(client, api_url, path).await {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Request to {} failed: {}", path, e);
            std::process::exit(1);
        }
    }
}

fn print_leaderboard(entries: &[LeaderboardEntry]) {
    println!(
        "{:<6} {:<20} {:<16} {:>10}",
        "Rank", "Name", "Referral", "Donations"
    );
    println!("{}", "-".repeat(55));

    for entry in entries {
        println!(
            "{:<6} {:<20} {:<16} {:>10}",
            format!("#{}", entry.rank),
            entry.name,
            entry.referral_code,
            format!("${}", entry.donations)
        );
    }
}
