//! `/api/recommend` over fetch
//!
//! The HTTP status is never inspected: a 404 or 500 still carries an
//! envelope whose `success` field decides what the page shows.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use iem_reco_common::{Error, ResponseEnvelope, Result, Transport, UserInput, RECOMMEND_PATH};

/// Browser `fetch` transport
#[derive(Clone, Debug)]
pub struct FetchTransport {
    endpoint: String,
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new(RECOMMEND_PATH)
    }
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for FetchTransport {
    async fn recommend(&self, input: &UserInput) -> Result<ResponseEnvelope> {
        let body = serde_json::to_string(input)?;
        post_json(&self.endpoint, &body)
            .await
            .map_err(|e| Error::transport(js_error_message(&e)))
    }
}

async fn post_json(url: &str, body: &str) -> std::result::Result<ResponseEnvelope, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    // Rejects on a non-JSON body
    let json = JsFuture::from(resp.json()?).await?;
    let envelope: ResponseEnvelope = serde_wasm_bindgen::from_value(json)?;
    Ok(envelope)
}

/// Human-readable text of a thrown JS value (`Error.message` when available)
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    format!("{:?}", value)
}
