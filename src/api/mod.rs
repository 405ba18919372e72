//! Endpoint facades for the Bibliotheca REST backend
//!
//! One client per backend area, all stateless request/response mappers over a
//! shared [`ApiClient`]. Nothing here retries: a failed call propagates as a
//! typed [`ApiError`] for the caller to display.

pub mod auth;
pub mod catalog;
pub mod loans;
pub mod notifications;
pub mod penalties;
pub mod reports;
pub mod reservations;

use std::sync::{Arc, RwLock};

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{
    config::ApiConfig,
    error::{ApiError, ApiResult},
    models::response::ApiEnvelope,
};

/// Shared bearer-credential slot. Written by the session store, read on every
/// outbound request; plain `std::sync::RwLock` since critical sections are a
/// clone of a small string.
pub type TokenCell = Arc<RwLock<Option<String>>>;

/// HTTP wrapper shared by all facades: base URL, bearer header and envelope
/// decoding.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: TokenCell,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, token: TokenCell) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self.token.read().ok().and_then(|guard| guard.clone());
        match token {
            Some(token) if !token.is_empty() => builder.bearer_auth(token),
            _ => builder,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.authorize(self.http.get(self.url(path))))
            .await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(self.authorize(self.http.get(self.url(path)).query(query)))
            .await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.authorize(self.http.post(self.url(path)).json(body)))
            .await
    }

    /// POST with an empty JSON body, the backend's idiom for state transitions
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.post(path, &serde_json::json!({})).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.authorize(self.http.put(self.url(path)).json(body)))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        decode_unit(status, &body)
    }

    /// POST expecting an envelope without caring about its `data`
    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        decode_unit(status, &text)
    }

    /// Authenticated binary download (report endpoints)
    pub(crate) async fn get_bytes<Q>(&self, path: &str, query: &Q) -> ApiResult<Vec<u8>>
    where
        Q: Serialize + ?Sized,
    {
        let response = self
            .authorize(self.http.get(self.url(path)).query(query))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_envelope(status, &body));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_data(status, &body)
    }
}

/// Decode an envelope and extract its `data` payload.
fn decode_data<T: DeserializeOwned>(status: StatusCode, body: &str) -> ApiResult<T> {
    if !status.is_success() {
        return Err(error_from_envelope(status, body));
    }
    let envelope: ApiEnvelope<T> = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(error_from_parts(status, envelope.message, envelope.errors));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::MalformedEntity("response envelope carries no data".to_string()))
}

/// Decode an envelope for endpoints whose payload is irrelevant.
fn decode_unit(status: StatusCode, body: &str) -> ApiResult<()> {
    if !status.is_success() {
        return Err(error_from_envelope(status, body));
    }
    let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(error_from_parts(status, envelope.message, envelope.errors));
    }
    Ok(())
}

fn error_from_envelope(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body) {
        Ok(envelope) => error_from_parts(status, envelope.message, envelope.errors),
        Err(_) => error_from_parts(status, None, None),
    }
}

/// Map an HTTP status plus envelope fields to the client error taxonomy.
fn error_from_parts(
    status: StatusCode,
    message: Option<String>,
    errors: Option<std::collections::HashMap<String, Vec<String>>>,
) -> ApiError {
    let message = message.unwrap_or_else(|| format!("HTTP {}", status));
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Authentication(message),
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::CONFLICT => ApiError::Conflict(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation {
            message,
            errors: errors.unwrap_or_default(),
        },
        _ => ApiError::Transport(format!("HTTP {}: {}", status, message)),
    }
}

/// Re-type a field-less validation failure as a loan-policy rejection.
///
/// The backend reports quota/extension policy violations through the same
/// envelope shape as payload validation; only responses without field errors
/// are policy rejections.
fn map_policy_rejection(
    error: ApiError,
    retype: impl FnOnce(String) -> ApiError,
) -> ApiError {
    match error {
        ApiError::Validation { message, errors } if errors.is_empty() => retype(message),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Book;

    #[test]
    fn decodes_success_envelope() {
        let body = r#"{"success": true, "data": {"id": 1, "titre": "T", "auteur": "A", "isbn": "1234567890"}}"#;
        let book: Book = decode_data(StatusCode::OK, body).unwrap();
        assert_eq!(book.id, 1);
        assert_eq!(book.title, "T");
    }

    #[test]
    fn missing_data_is_malformed() {
        let body = r#"{"success": true}"#;
        let result: ApiResult<Book> = decode_data(StatusCode::OK, body);
        assert!(matches!(result, Err(ApiError::MalformedEntity(_))));
    }

    #[test]
    fn unparsable_body_is_malformed() {
        let result: ApiResult<Book> = decode_data(StatusCode::OK, "<html>oops</html>");
        assert!(matches!(result, Err(ApiError::MalformedEntity(_))));
    }

    #[test]
    fn maps_statuses_to_taxonomy() {
        let body = r#"{"success": false, "message": "nope"}"#;
        assert!(matches!(
            error_from_envelope(StatusCode::UNAUTHORIZED, body),
            ApiError::Authentication(_)
        ));
        assert!(matches!(
            error_from_envelope(StatusCode::FORBIDDEN, body),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            error_from_envelope(StatusCode::NOT_FOUND, body),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            error_from_envelope(StatusCode::CONFLICT, body),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            error_from_envelope(StatusCode::INTERNAL_SERVER_ERROR, body),
            ApiError::Transport(_)
        ));
    }

    #[test]
    fn validation_keeps_field_errors() {
        let body = r#"{"success": false, "message": "invalide", "errors": {"email": ["pris"]}}"#;
        match error_from_envelope(StatusCode::UNPROCESSABLE_ENTITY, body) {
            ApiError::Validation { errors, .. } => assert_eq!(errors["email"], vec!["pris"]),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn policy_rejection_only_retypes_field_less_validation() {
        let policy = ApiError::validation("Quota d'emprunts atteint");
        assert!(matches!(
            map_policy_rejection(policy, ApiError::QuotaExceeded),
            ApiError::QuotaExceeded(_)
        ));

        let mut errors = std::collections::HashMap::new();
        errors.insert("exemplaire_id".to_string(), vec!["requis".to_string()]);
        let payload = ApiError::Validation {
            message: "invalide".to_string(),
            errors,
        };
        assert!(matches!(
            map_policy_rejection(payload, ApiError::QuotaExceeded),
            ApiError::Validation { .. }
        ));
    }
}
