use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::constants::{GUESS_ENDPOINT, HINT_ENDPOINT};
use shared::page_settings::PageSettings;
use shared::shared_guess::GuessResponse;
use shared::shared_hint::{HintRequest, HintResponse};
use web_sys::FormData;

use crate::error::ClientError;

/// A decoded response body together with the raw text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Received<T> {
    pub value: T,
    pub body: String,
}

/// Posts the whole guess form as multipart data.
pub async fn submit_guess(
    settings: &PageSettings,
    form: FormData,
) -> Result<Received<GuessResponse>, ClientError> {
    let url = settings.endpoint_url(GUESS_ENDPOINT);
    log::debug!("Submitting guess to {}", url);

    let response = Request::post(&url).body(form)?.send().await?;
    let body = response.text().await?;
    decode_body(response.status(), body)
}

pub async fn request_hint(settings: &PageSettings, request: &HintRequest) -> Result<HintResponse, ClientError> {
    let url = settings.endpoint_url(HINT_ENDPOINT);
    log::debug!(
        "Requesting hint {} for puzzle {:?} from {}",
        request.hint_requested,
        request.puzzle,
        url
    );

    let response = Request::post(&url).json(request)?.send().await?;
    let body = response.text().await?;
    decode_body(response.status(), body).map(|received| received.value)
}

/// Turns a status and body into a decoded value. Non-2xx statuses and bodies
/// that are not the expected JSON keep the raw body in the error.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: String) -> Result<Received<T>, ClientError> {
    log::debug!("Response status {}: {}", status, body);

    if !(200..300).contains(&status) {
        return Err(ClientError::Status { status, body });
    }
    match serde_json::from_str(&body) {
        Ok(value) => Ok(Received { value, body }),
        Err(source) => Err(ClientError::Decode { body, source }),
    }
}
