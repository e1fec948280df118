// Request payload types and body extraction

use http_body_util::BodyExt;
use hyper::body::Body;
use hyper::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::ApiError;

/// Body of create requests. Fields are optional so that a missing field
/// surfaces as Invalid-Input instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateFilePayload {
    pub filename: Option<String>,
    pub content: Option<String>,
}

impl CreateFilePayload {
    /// Both fields present and non-empty, or Invalid-Input.
    pub fn require(self) -> Result<(String, String), ApiError> {
        match (self.filename, self.content) {
            (Some(filename), Some(content)) if !filename.is_empty() && !content.is_empty() => {
                Ok((filename, content))
            }
            _ => Err(ApiError::invalid_input("Parametros inválidos")),
        }
    }
}

/// Body of update requests.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFilePayload {
    pub content: Option<String>,
}

/// Collect the request body and deserialize it as JSON.
///
/// An empty body yields the payload default (all fields missing), so field
/// checks own the error reporting. A body that is not a JSON object is
/// Invalid-Input.
pub async fn payload<T, B>(req: Request<B>) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
    B: Body,
    B::Error: std::fmt::Display,
{
    let bytes = req
        .into_body()
        .collect()
        .await
        .map_err(|e| ApiError::Internal(format!("failed to read request body: {e}")))?
        .to_bytes();

    if bytes.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(&bytes).map_err(|_| ApiError::invalid_input("Parametros inválidos"))
}
