//! Animal CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::DbConn;
use crate::model::{parse_body, AnimalChanges, NewAnimal};
use crate::response;
use crate::service::AnimalService;
use axum::{
    body::Bytes,
    extract::Path,
    http::{header, HeaderMap},
    response::IntoResponse,
};
use serde::Deserialize;

/// Ids are unsigned decimal integers; any other segment names no animal.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    let not_found = || AppError::AnimalNotFound { id: id_str.to_string() };
    if id_str.is_empty() || !id_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    id_str.parse().map_err(|_| not_found())
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Decode a request body. A non-blank body must be declared as JSON.
fn json_body<T>(headers: &HeaderMap, body: &Bytes) -> Result<T, AppError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    let blank = body.iter().all(u8::is_ascii_whitespace);
    if !blank && !is_json_content_type(headers) {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        return Err(AppError::UnsupportedMediaType { content_type });
    }
    parse_body(body)
}

pub async fn list(mut conn: DbConn) -> Result<impl IntoResponse, AppError> {
    let animals = AnimalService::list_all(&mut conn).await?;
    Ok(response::ok(animals))
}

pub async fn create(mut conn: DbConn, headers: HeaderMap, body: Bytes) -> Result<impl IntoResponse, AppError> {
    let draft = json_body::<NewAnimal>(&headers, &body)?.validate()?;
    let animal = AnimalService::create(&mut conn, &draft).await?;
    Ok(response::created(animal))
}

pub async fn read(mut conn: DbConn, Path(id_str): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let animal = AnimalService::get_by_id(&mut conn, id)
        .await?
        .ok_or(AppError::AnimalNotFound { id: id_str })?;
    Ok(response::ok(animal))
}

pub async fn update(
    mut conn: DbConn,
    Path(id_str): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let Some(current) = AnimalService::get_by_id(&mut conn, id).await? else {
        return Err(AppError::AnimalNotFound { id: id_str });
    };
    let changes = json_body::<AnimalChanges>(&headers, &body)?;
    // None only if the row was deleted after the lookup.
    let animal = AnimalService::update(&mut conn, current, changes)
        .await?
        .ok_or(AppError::AnimalNotFound { id: id_str })?;
    Ok(response::ok(animal))
}

pub async fn delete(mut conn: DbConn, Path(id_str): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !AnimalService::delete(&mut conn, id).await? {
        return Err(AppError::AnimalNotFound { id: id_str });
    }
    Ok(response::message("Animal deletado com sucesso"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn non_numeric_id_is_not_found() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("007").unwrap(), 7);
        assert!(matches!(parse_id("rex"), Err(AppError::AnimalNotFound { id }) if id == "rex"));
    }

    #[test]
    fn signed_or_oversized_id_is_not_found() {
        for segment in ["+1", "-1", " 1", "", "99999999999999999999"] {
            assert!(matches!(parse_id(segment), Err(AppError::AnimalNotFound { .. })), "{segment:?}");
        }
    }

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn recognizes_json_content_types() {
        assert!(is_json_content_type(&headers_with("application/json")));
        assert!(is_json_content_type(&headers_with("Application/JSON; charset=utf-8")));
        assert!(is_json_content_type(&headers_with("application/merge-patch+json")));
        assert!(!is_json_content_type(&headers_with("text/plain")));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn non_json_body_is_unsupported() {
        let body = Bytes::from_static(br#"{"nome":"Rex","especie":"Cachorro","idade":3}"#);
        let err = json_body::<NewAnimal>(&headers_with("text/plain"), &body).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType { .. }));

        let empty = json_body::<NewAnimal>(&HeaderMap::new(), &Bytes::new()).unwrap();
        assert!(empty.nome.is_none());
    }
}
