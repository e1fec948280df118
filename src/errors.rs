//! API error kinds
//!
//! Every failure an endpoint can report maps to exactly one HTTP status.
//! Errors are recovered at the router boundary and rendered as a JSON body
//! with a `mensaje` field; none of them terminate the process.

use hyper::StatusCode;
use thiserror::Error;

use crate::storage::StorageError;

/// Failure modes of the CRUD endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is missing or malformed (422).
    #[error("{0}")]
    InvalidInput(String),

    /// The target file already exists (409).
    #[error("{0}")]
    Conflict(String),

    /// The target file does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// The body or stored content fails content validation (415).
    #[error("{0}")]
    UnsupportedContent(String),

    /// Backend I/O failure, never conflated with "not found" (500).
    /// Display carries the detail for the logs.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnsupportedContent(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The `mensaje` string sent to the client.
    pub fn mensaje(&self) -> String {
        match self {
            // Internal detail stays in the logs, not in the response
            Self::Internal(_) => "Error interno del servidor".to_string(),
            other => other.to_string(),
        }
    }

    pub fn invalid_input(mensaje: &str) -> Self {
        Self::InvalidInput(mensaje.to_string())
    }

    pub fn conflict(mensaje: &str) -> Self {
        Self::Conflict(mensaje.to_string())
    }

    pub fn not_found(mensaje: &str) -> Self {
        Self::NotFound(mensaje.to_string())
    }

    pub fn unsupported(mensaje: &str) -> Self {
        Self::UnsupportedContent(mensaje.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidName(_) => {
                Self::InvalidInput("Nombre de fichero no válido".to_string())
            }
            other => Self::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::invalid_input("x").status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::unsupported("x").status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            ApiError::from(StorageError::NotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_mensaje_is_generic() {
        let err = ApiError::from(StorageError::NotFound);
        assert_eq!(err.mensaje(), "Error interno del servidor");
        let err = ApiError::not_found("Fichero no encontrado");
        assert_eq!(err.mensaje(), "Fichero no encontrado");
    }

    #[test]
    fn test_invalid_name_maps_to_invalid_input() {
        let err = ApiError::from(StorageError::InvalidName("../x".to_string()));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
