use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("required element #{0} is missing")]
    MissingElement(&'static str),
    #[error("form field `{0}` is missing")]
    MissingField(&'static str),
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response {body:?}: {source}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unrecognised guess result {result:?} in response {body}")]
    UnexpectedResult { result: String, body: String },
    #[error("no hint entry with index {0}")]
    UnknownHint(usize),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
