use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use thiserror::Error;
use tracing::debug;

/// Failure of a single outbound GET.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with status {status}: {body}")]
    Status { url: String, status: u16, body: String },
}

/// The single HTTP capability the lookups need: a GET returning the body of a 2xx response.
///
/// Passed explicitly into every lookup so callers decide which client is used.
#[async_trait]
pub trait HttpClient: Send + Sync + Debug {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, HttpError>;
}

/// `HttpClient` backed by `reqwest` with its default settings.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttp {
    http: Client,
}

impl ReqwestHttp {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttp {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, HttpError> {
        debug!(url, ?query, "sending GET");

        let transport = |source| HttpError::Transport { url: url.to_string(), source };

        let res = self.http.get(url).query(query).send().await.map_err(transport)?;

        let status = res.status();
        let body = res.text().await.map_err(transport)?;

        debug!(url, status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(HttpError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
