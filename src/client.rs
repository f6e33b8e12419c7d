//! HTTP transport (reqwest)

use crate::error::Result;
use iem_reco_common::{parse_envelope, Error, ResponseEnvelope, Transport, UserInput, RECOMMEND_PATH};
use std::time::Duration;
use tracing::debug;

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// `server` is the backend origin; the endpoint path is appended
    pub fn new(server: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", server.trim_end_matches('/'), RECOMMEND_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn recommend(&self, input: &UserInput) -> iem_reco_common::Result<ResponseEnvelope> {
        debug!(endpoint = %self.endpoint, "posting recommendation request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(input)
            .send()
            .await
            .map_err(Error::transport)?;

        // Status is informational only; the envelope decides
        let status = response.status();
        let body = response.text().await.map_err(Error::transport)?;
        debug!(%status, bytes = body.len(), "response received");

        parse_envelope(&body)
    }
}
