use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use weather_now_core::{Config, LogTarget};
use weather_now_meteo::WeatherLookup;
use weather_now_ui::View;

/// Current, hourly and daily weather for a city
#[derive(Parser, Debug)]
#[command(name = "weather-now", version, about)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Look up this city once, print the result and exit
    #[arg(long, value_name = "NAME")]
    city: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // The terminal UI owns stderr while it runs
    let log_target = if cli.city.is_some() {
        LogTarget::Stderr
    } else {
        LogTarget::File(Config::log_path()?)
    };
    weather_now_core::init(log_target)?;

    let (config, _) = Config::load_validated(cli.config.as_deref())?;

    let lookup = WeatherLookup::connect(
        &config.endpoints.geocoding_url,
        &config.endpoints.forecast_url,
        &config.lookup.language,
        config.lookup.timeout(),
    )
    .context("Failed to build HTTP client")?;

    tracing::info!("Weather Now started");

    if let Some(city) = cli.city {
        let view = weather_now_ui::run_once(&lookup, &city).await;
        println!("{}", view.to_plain_text());
        return Ok(match view {
            View::Error(_) => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        });
    }

    weather_now_ui::run(Arc::new(lookup)).await?;

    tracing::info!("Weather Now exited");
    Ok(ExitCode::SUCCESS)
}
