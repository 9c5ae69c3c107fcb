//! HTTP calls to the document store.
//!
//! Every call marks itself as programmatic with the `X-Requested-With`
//! header. Failures come back as [`ApiError`]; callers turn them into
//! workspace actions and never let them escape.

pub mod documents;
pub mod generation;
pub mod transfer;

use common::requests::{REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE};
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("browser refused the request: {0}")]
    Browser(String),
}

impl ApiError {
    pub fn from_js(value: JsValue) -> Self {
        ApiError::Browser(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

pub(crate) fn programmatic(builder: RequestBuilder) -> RequestBuilder {
    builder.header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
}

/// Decodes a 2xx JSON body, or reports the status with the raw body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

pub(crate) async fn status_error(response: Response) -> ApiError {
    ApiError::Status {
        status: response.status(),
        body: response.text().await.unwrap_or_default(),
    }
}
