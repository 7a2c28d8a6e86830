use anyhow::Context;
use clap::{Parser, error::ErrorKind};
use std::{ffi::OsString, io::Write};
use tracing::debug;
use weather_core::{Config, HttpClient, fetch_location_data, fetch_weather_data};

pub const USAGE: &str = "usage: weather LOCATION";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Show the current weather for a place")]
pub struct Cli {
    /// Address or location name, e.g. "Paris".
    #[arg(allow_hyphen_values = true)]
    pub location: String,
}

impl Cli {
    /// Resolve the location, then fetch and print its weather.
    pub async fn run(
        self,
        http: &dyn HttpClient,
        config: &Config,
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let location = fetch_location_data(
            http,
            &config.geocode_api_url,
            &self.location,
            config.geocode_api_key(),
        )
        .await?;

        writeln!(out, "Fetching weather data for {}...", location.display_name)
            .context("Failed to write to stdout")?;

        let weather =
            fetch_weather_data(http, &config.forecast_api_url, location.lat, location.lon).await?;

        writeln!(out, "{}", weather.format()).context("Failed to write to stdout")?;

        Ok(())
    }
}

/// Parse `args` (including the program name), run the lookup and return the exit code.
///
/// `load_config` is only called once the arguments are accepted, so usage errors
/// never touch the config file or the network.
pub async fn run<I, T, L>(
    args: I,
    http: &dyn HttpClient,
    load_config: L,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    L: FnOnce() -> anyhow::Result<Config>,
{
    // Writes on the help, usage and error paths are best effort: the exit code is
    // already decided and there is nowhere left to report a closed stream.
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{e}").ok();
            return 0;
        }
        Err(e) => {
            debug!(kind = ?e.kind(), "rejected arguments");
            writeln!(err, "{USAGE}").ok();
            return 1;
        }
    };

    let result = match load_config() {
        Ok(config) => cli.run(http, &config, out).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            writeln!(err, "error: {e:#}").ok();
            1
        }
    }
}
