// API response utility functions module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::errors::ApiError;
use crate::logger;

/// Build JSON response
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"mensaje":"Error interno del servidor"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// 200 response with only a `mensaje` field
pub fn message(mensaje: &str) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &serde_json::json!({ "mensaje": mensaje }))
}

/// 200 response with `mensaje` and `contenido` fields
pub fn with_contenido<T: Serialize>(mensaje: &str, contenido: &T) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &serde_json::json!({ "mensaje": mensaje, "contenido": contenido }),
    )
}

/// Error rendered at the handler boundary
pub fn error_response(err: &ApiError) -> Response<Full<Bytes>> {
    json_response(err.status(), &serde_json::json!({ "mensaje": err.mensaje() }))
}

/// 404 for paths outside the three resource families
pub fn route_not_found() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::NOT_FOUND,
        &serde_json::json!({
            "mensaje": "Ruta no encontrada",
            "available_endpoints": ["/hello", "/csv", "/json", "/healthz"],
        }),
    )
}

/// 405 for known roots with an unsupported verb
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "mensaje": "Método no permitido" });
    let json = body.to_string();
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .header("Allow", "GET, POST, PUT, DELETE")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Method Not Allowed"))))
}

/// 413 when Content-Length exceeds the configured limit
pub fn payload_too_large() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::PAYLOAD_TOO_LARGE,
        &serde_json::json!({ "mensaje": "Cuerpo de la petición demasiado grande" }),
    )
}

/// Liveness probe response
pub fn health() -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &serde_json::json!({ "status": "ok" }))
}
