//! Generic-file family (`/hello`)
//!
//! List, create, read, update and delete arbitrary named files under the
//! storage root. No filename filtering and no content validation.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::errors::ApiError;
use crate::storage::{Storage, StorageError};

use super::request::{CreateFilePayload, UpdateFilePayload};
use super::response;

/// Every stored name, verbatim, in backend order.
pub fn list(storage: &dyn Storage) -> Result<Response<Full<Bytes>>, ApiError> {
    let files = storage.list()?;
    Ok(response::with_contenido("Listado de ficheros", &files))
}

/// Create a file that does not exist yet.
pub fn create(
    storage: &dyn Storage,
    payload: CreateFilePayload,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let (filename, content) = payload.require()?;
    match storage.create_new(&filename, &content) {
        Ok(()) => Ok(response::message("Guardado con éxito")),
        Err(StorageError::AlreadyExists) => Err(ApiError::conflict("El archivo ya existe")),
        Err(e) => Err(e.into()),
    }
}

/// Raw content of an existing file.
pub fn read(storage: &dyn Storage, name: &str) -> Result<Response<Full<Bytes>>, ApiError> {
    if !storage.exists(name) {
        return Err(ApiError::not_found("Archivo no encontrado"));
    }
    let content = storage.read(name)?;
    Ok(response::with_contenido("Archivo leído con éxito", &content))
}

/// Overwrite an existing file.
pub fn update(
    storage: &dyn Storage,
    name: &str,
    payload: UpdateFilePayload,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let content = payload
        .content
        .ok_or_else(|| ApiError::invalid_input("Parametros inválidos"))?;
    if !storage.exists(name) {
        return Err(ApiError::not_found("El archivo no existe"));
    }
    storage.write(name, &content)?;
    Ok(response::message("Actualizado con éxito"))
}

/// Remove an existing file.
pub fn delete(storage: &dyn Storage, name: &str) -> Result<Response<Full<Bytes>>, ApiError> {
    if !storage.exists(name) {
        return Err(ApiError::not_found("El archivo no existe"));
    }
    storage.delete(name)?;
    Ok(response::message("Eliminado con éxito"))
}
