//! Recommendation endpoint contract and the transport seam

use crate::error::{Error, Result};
use crate::types::{ResponseEnvelope, UserInput};

/// Path of the recommendation endpoint, relative to the backend origin
pub const RECOMMEND_PATH: &str = "/api/recommend";

/// Sends one recommendation request.
///
/// Implementations POST the JSON-encoded input to [`RECOMMEND_PATH`] and
/// decode the body whatever the HTTP status. Every failure to obtain an
/// envelope is reported as [`Error::Transport`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn recommend(&self, input: &UserInput) -> Result<ResponseEnvelope>;
}

/// Decode a response body. Non-JSON content is a transport failure.
pub fn parse_envelope(body: &str) -> Result<ResponseEnvelope> {
    serde_json::from_str(body).map_err(Error::transport)
}
