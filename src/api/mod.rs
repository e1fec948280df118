// API module entry
// Routes the three resource families: /hello (generic), /csv, /json

mod csv;
mod generic;
mod json;
mod request;
mod response;

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Body, Bytes, Incoming};
use hyper::{Method, Request, Response};

use crate::config::AppState;
use crate::errors::ApiError;
use crate::logger;

/// Main entry point for API request handling.
///
/// Every error is recovered here and rendered as a JSON body with the
/// status of its kind; the connection never sees a failure.
pub async fn handle_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        resp
    } else {
        match dispatch(req, &state).await {
            Ok(resp) => resp,
            Err(err) => {
                if err.status().is_server_error() {
                    logger::log_error(&format!("{method} {path}: {err}"));
                }
                response::error_response(&err)
            }
        }
    };

    if state.config.logging.access_log {
        logger::log_request(method.as_str(), &path, response.status().as_u16());
    }
    Ok(response)
}

/// Dispatch to a family handler based on method and path.
async fn dispatch<B>(req: Request<B>, state: &AppState) -> Result<Response<Full<Bytes>>, ApiError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let storage = state.storage.as_ref();

    match (method, segments.as_slice()) {
        (Method::GET, ["healthz"]) => Ok(response::health()),

        // Generic-file family
        (Method::GET, ["hello"]) => generic::list(storage),
        (Method::POST, ["hello"]) => generic::create(storage, request::payload(req).await?),
        (Method::GET, ["hello", name]) => generic::read(storage, name),
        (Method::PUT, ["hello", name]) => {
            generic::update(storage, name, request::payload(req).await?)
        }
        (Method::DELETE, ["hello", name]) => generic::delete(storage, name),

        // CSV family
        (Method::GET, ["csv"]) => csv::list(storage),
        (Method::POST, ["csv"]) => csv::create(storage, request::payload(req).await?),
        (Method::GET, ["csv", name]) => csv::read(storage, name),
        (Method::PUT, ["csv", name]) => csv::update(storage, name, request::payload(req).await?),
        (Method::DELETE, ["csv", name]) => csv::delete(storage, name),

        // JSON family
        (Method::GET, ["json"]) => json::list(storage),
        (Method::POST, ["json"]) => json::create(storage, request::payload(req).await?),
        (Method::GET, ["json", name]) => json::read(storage, name),
        (Method::PUT, ["json", name]) => json::update(storage, name, request::payload(req).await?),
        (Method::DELETE, ["json", name]) => json::delete(storage, name),

        // Known roots with an unsupported verb
        (_, ["hello" | "csv" | "json"] | ["hello" | "csv" | "json", _]) => {
            Ok(response::method_not_allowed())
        }

        _ => Ok(response::route_not_found()),
    }
}

/// Validate Content-Length and return 413 when it exceeds the limit.
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    let size_str = content_length.to_str().ok()?;
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(response::payload_too_large())
        }
        _ => None,
    }
}
