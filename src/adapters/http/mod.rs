//! HTTP adapter
//!
//! Implements `DrawSource` with a blocking `reqwest` client: one POST per
//! query, no retries.

use log::debug;

use crate::api::{ApiError, GameQuery};
use crate::core::ports::DrawSource;

/// Default lottery API endpoint
pub const DEFAULT_API_URL: &str = "https://www.michiganlottery.com/api";

/// Draw source backed by the lottery's HTTP API
#[derive(Debug, Clone)]
pub struct HttpDrawSource {
    /// Blocking HTTP client
    client: reqwest::blocking::Client,
    /// Endpoint receiving the POST
    url: String,
}

impl HttpDrawSource {
    /// Create a source that posts queries to `url`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(url: impl Into<String>) -> Result<Self, ApiError> {
        let url = url.into();
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::transport(&url, e))?;
        Ok(Self { client, url })
    }
}

impl DrawSource for HttpDrawSource {
    fn fetch(&self, query: &GameQuery) -> Result<Vec<u8>, ApiError> {
        debug!("POST {} (game {})", self.url, query.variables.game_code);

        let response = self
            .client
            .post(&self.url)
            .json(&query.payload())
            .send()
            .map_err(|e| ApiError::transport(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(&self.url, status.as_u16()));
        }

        let body = response.bytes().map_err(|e| ApiError::transport(&self.url, e))?;
        debug!("Received {} bytes from {}", body.len(), self.url);

        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
