//! Typed failures for the two lookup steps.

use thiserror::Error;

use crate::http::HttpError;

/// Turning a place name into coordinates failed.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("geocoding request failed")]
    Request(#[from] HttpError),

    #[error("could not parse geocoding response")]
    Parse(#[from] serde_json::Error),

    #[error("no location found for '{query}'")]
    NotFound { query: String },
}

/// Retrieving or decoding the forecast failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("forecast request failed")]
    Request(#[from] HttpError),

    #[error("could not parse forecast response")]
    Parse(#[from] serde_json::Error),
}
