use thiserror::Error;
use wasm_bindgen::JsValue;

/// Which signup field was left empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Housing,
}

/// Rejections raised before anything reaches the store.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please use your {institution} email address")]
    NotInstitutional { institution: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no browser window")]
    NoWindow,
    #[error("localStorage unavailable")]
    StorageUnavailable,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<JsValue> for StoreError {
    fn from(value: JsValue) -> Self {
        StoreError::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for StoreError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}
