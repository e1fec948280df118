//! JSON-file family (`/json`)
//!
//! Same contract as the generic family, with JSON validation on every write
//! and read. Listing only shows files whose stored content parses as JSON.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::errors::ApiError;
use crate::parse;
use crate::storage::{Storage, StorageError};

use super::request::{CreateFilePayload, UpdateFilePayload};
use super::response;

/// Base names of files containing `.json` whose content parses as JSON.
/// Files that fail to parse are silently excluded.
pub fn list(storage: &dyn Storage) -> Result<Response<Full<Bytes>>, ApiError> {
    let mut valid = Vec::new();
    for name in storage.list()? {
        if !name.contains(".json") {
            continue;
        }
        if let Ok(content) = storage.read(&name) {
            if parse::json::is_valid(&content) {
                valid.push(base_name(&name).to_string());
            }
        }
    }
    Ok(response::with_contenido("Operación exitosa", &valid))
}

/// Create a file that does not exist yet; content must be valid JSON.
pub fn create(
    storage: &dyn Storage,
    payload: CreateFilePayload,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let (filename, content) = payload.require()?;
    if storage.exists(&filename) {
        return Err(ApiError::conflict("El fichero ya existe"));
    }
    if !parse::json::is_valid(&content) {
        return Err(ApiError::unsupported("Contenido no es un JSON válido"));
    }
    match storage.create_new(&filename, &content) {
        Ok(()) => Ok(response::message("Fichero guardado exitosamente")),
        // A racing create can still lose here
        Err(StorageError::AlreadyExists) => Err(ApiError::conflict("El fichero ya existe")),
        Err(e) => Err(e.into()),
    }
}

/// Parsed JSON value of an existing file. Stored content is re-validated,
/// so a file corrupted on disk reports Unsupported-Content.
pub fn read(storage: &dyn Storage, name: &str) -> Result<Response<Full<Bytes>>, ApiError> {
    if !storage.exists(name) {
        return Err(ApiError::not_found("El fichero no existe"));
    }
    let content = storage.read(name)?;
    let value = parse::json::parse(&content)
        .map_err(|_| ApiError::unsupported("Contenido no es un JSON válido"))?;
    Ok(response::with_contenido("Operación exitosa", &value))
}

/// Overwrite an existing file with new JSON text. The raw text is stored
/// verbatim, not a re-serialization of the parsed value.
pub fn update(
    storage: &dyn Storage,
    name: &str,
    payload: UpdateFilePayload,
) -> Result<Response<Full<Bytes>>, ApiError> {
    if !storage.exists(name) {
        return Err(ApiError::not_found("El fichero no existe"));
    }
    let content = payload
        .content
        .filter(|c| parse::json::is_valid(c))
        .ok_or_else(|| ApiError::unsupported("Contenido no es un JSON válido"))?;
    storage.write(name, &content)?;
    Ok(response::message("Fichero actualizado exitosamente"))
}

/// Remove an existing file.
pub fn delete(storage: &dyn Storage, name: &str) -> Result<Response<Full<Bytes>>, ApiError> {
    if !storage.exists(name) {
        return Err(ApiError::not_found("El fichero no existe"));
    }
    storage.delete(name)?;
    Ok(response::message("Fichero eliminado exitosamente"))
}

/// Final path component of a stored name.
fn base_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
