//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing the single LOCATION argument
//! - Sequencing geocoding and the forecast lookup
//! - Human-friendly output and exit codes

use std::{io, process::ExitCode};
use tracing_subscriber::EnvFilter;
use weather_core::{Config, ReqwestHttp};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let http = ReqwestHttp::new();
    let code = cli::run(
        std::env::args_os(),
        &http,
        Config::load,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;

    ExitCode::from(code)
}

/// Diagnostics go to stderr; quiet unless `RUST_LOG` asks for more.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
