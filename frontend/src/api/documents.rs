use common::model::document::DocumentRecord;
use common::replies::StatusReply;
use common::requests::ReorderRequest;
use gloo_net::http::Request;
use log::debug;

use super::{programmatic, read_json, status_error, ApiError};

pub async fn list(url: &str) -> Result<Vec<DocumentRecord>, ApiError> {
    let response = programmatic(Request::get(url)).send().await?;
    read_json(response).await
}

pub async fn delete(url: &str) -> Result<StatusReply, ApiError> {
    let response = programmatic(Request::delete(url)).send().await?;
    read_json(response).await
}

pub async fn clear(url: &str) -> Result<StatusReply, ApiError> {
    let response = programmatic(Request::post(url)).send().await?;
    read_json(response).await
}

/// The answer body is not examined.
pub async fn reorder(url: &str, body: &ReorderRequest) -> Result<(), ApiError> {
    let response = programmatic(Request::post(url)).json(body)?.send().await?;
    if !response.ok() {
        return Err(status_error(response).await);
    }
    debug!("reorder of {} documents committed", body.order.len());
    Ok(())
}

pub async fn recent_logs(url: &str) -> Result<String, ApiError> {
    let response = programmatic(Request::get(url)).send().await?;
    if !response.ok() {
        return Err(status_error(response).await);
    }
    Ok(response.text().await?)
}
