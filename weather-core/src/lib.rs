//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration of endpoints and credentials
//! - Location resolution (geocoding) and current-weather lookup
//! - Shared domain models and typed errors
//!
//! Every lookup takes an explicit [`HttpClient`], so callers control the transport.

pub mod config;
pub mod error;
pub mod forecast;
pub mod http;
pub mod location;
pub mod model;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::{FetchError, ResolutionError};
pub use forecast::fetch_weather_data;
pub use http::{HttpClient, HttpError, ReqwestHttp};
pub use location::fetch_location_data;
pub use model::{LocationInfo, WeatherData};
