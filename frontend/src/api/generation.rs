use controller::GenerateReply;
use gloo_net::http::{Request, Response};

use super::{programmatic, ApiError};

/// A successful generate answer whose body has not been read yet.
pub struct PendingBook {
    response: Response,
}

impl PendingBook {
    pub async fn bytes(self) -> Result<Vec<u8>, ApiError> {
        Ok(self.response.binary().await?)
    }
}

/// Issues `POST /generate` and classifies the answer.
///
/// Error bodies are read here; a successful body is left to [`PendingBook`].
pub async fn generate(url: &str) -> Result<(GenerateReply, Option<PendingBook>), ApiError> {
    let response = programmatic(Request::post(url)).send().await?;
    if response.ok() {
        let content_disposition = response.headers().get("content-disposition");
        return Ok((
            GenerateReply::Success {
                content_disposition,
            },
            Some(PendingBook { response }),
        ));
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Ok((
        GenerateReply::Failed {
            status,
            status_text,
            body,
        },
        None,
    ))
}
