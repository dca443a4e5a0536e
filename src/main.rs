use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use planetpulse::config::PulseConfig;
use planetpulse::pulse::PulseService;
use planetpulse::summary::{GeminiSummarizer, SummaryProvider};
use planetpulse::{gauge, view, web};

#[derive(Parser)]
#[command(
    name = "planetpulse",
    version,
    about = "City environmental pulse: live weather, UV and air quality"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server with the JSON API and browser frontend
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
    /// Look up the current pulse for a city and print a report
    Check {
        /// City name to look up
        city: String,
        /// Also write the AQI gauge as an SVG file
        #[arg(long, value_name = "PATH")]
        gauge: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = PulseConfig::from_env()?;

    match cli.command {
        Commands::Serve { port } => {
            let service = Arc::new(PulseService::from_config(&config)?);
            web::run(service, port).await
        }
        Commands::Check { city, gauge } => check(&config, &city, gauge.as_deref()).await,
    }
}

/// One-shot CLI query. The summary capability is attached only when the
/// Gemini key is configured; without it the report carries a placeholder.
async fn check(config: &PulseConfig, city: &str, gauge_path: Option<&std::path::Path>) -> Result<()> {
    let summary: Option<Arc<dyn SummaryProvider>> = match &config.gemini_api_key {
        Some(_) => Some(Arc::new(GeminiSummarizer::new(
            config.http_client()?,
            config,
        ))),
        None => None,
    };
    let service = PulseService::from_config_with_summary(config, summary)?;

    let result = match service.check(city).await {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error: {}", err.user_message());
            std::process::exit(1);
        }
    };

    print!("{}", view::render_report(&result));

    if let Some(path) = gauge_path {
        if let Some(value) = result.aqi.and_then(|reading| reading.aqi.as_index()) {
            std::fs::write(path, gauge::render_svg(value))
                .with_context(|| format!("Failed to write gauge SVG to {}", path.display()))?;
            println!("\nGauge written to {}", path.display());
        } else {
            println!("\nNo AQI value available, gauge not written");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_requires_city() {
        let result = Cli::try_parse_from(["planetpulse", "check"]);
        assert!(result.is_err());
    }
}
