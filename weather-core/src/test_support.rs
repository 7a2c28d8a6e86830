//! Test doubles shared by the unit tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::http::{HttpClient, HttpError};

/// Replays a canned response and records every request it receives.
#[derive(Debug)]
pub struct StubHttp {
    response: Mutex<Option<Result<String, HttpError>>>,
    calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl StubHttp {
    pub fn ok(body: &str) -> Self {
        Self::with(Ok(body.to_string()))
    }

    pub fn status(status: u16) -> Self {
        Self::with(Err(HttpError::Status {
            url: "http://stub".to_string(),
            status,
            body: "Internal Server Error".to_string(),
        }))
    }

    fn with(response: Result<String, HttpError>) -> Self {
        Self { response: Mutex::new(Some(response)), calls: Mutex::new(Vec::new()) }
    }

    pub fn recorded(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for StubHttp {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, HttpError> {
        self.calls.lock().unwrap().push((
            url.to_string(),
            query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        ));
        self.response.lock().unwrap().take().expect("stub called more than once")
    }
}
