use anyhow::Context;
use clap::Parser;

use meteo_core::{DEFAULT_TIMEOUT_SECS, DEFAULT_TIMEZONE, WeatherClient, WeatherRequest};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Open-Meteo forecast client")]
pub struct Cli {
    /// Latitude in degrees, -90 to 90.
    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in degrees, -180 to 180.
    #[arg(allow_negative_numbers = true)]
    pub longitude: f64,

    /// IANA timezone for the forecast.
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print the full payload instead of just the current weather block.
    #[arg(long)]
    pub full: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let request = WeatherRequest::new(self.latitude, self.longitude)
            .with_timezone(self.timezone)
            .with_timeout(self.timeout)
            .with_current(!self.full);

        let client = WeatherClient::new();
        let payload = client
            .fetch(&request)
            .await
            .context("Failed to fetch forecast from Open-Meteo")?;

        if self.full {
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            let current = payload
                .current_weather()
                .context("Forecast response had no usable current weather")?;
            println!("{}", serde_json::to_string_pretty(current)?);
        }

        Ok(())
    }
}
