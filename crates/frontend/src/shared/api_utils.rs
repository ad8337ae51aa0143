//! API utilities for frontend-backend communication
//!
//! Base URL resolution, bearer token header, JSON encode/decode and the
//! typed [`ApiError`] every domain `api.rs` returns.

use contracts::shared::api_error::server_message;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::system::auth::{context::notify_session_expired, storage};

/// Port the finance API listens on when served next to the client.
const API_PORT: u16 = 8000;

/// Route prefix of every endpoint.
pub const API_PREFIX: &str = "/api";

/// Get the base URL for API requests
///
/// `FINANCE_API_BASE` at build time wins; otherwise the current window
/// location is used with port 8000.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("FINANCE_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a resource path such as `/accounts`.
pub fn api_url(path: &str) -> String {
    format!("{}{}{}", api_base(), API_PREFIX, path)
}

/// Append an already encoded query string, skipping empty ones.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Percent-encode a single path segment (ids, provider codes).
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Falha de conexão com o servidor: {0}")]
    Network(String),
    #[error("Sessão expirada. Faça login novamente.")]
    Unauthorized,
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
    #[error("Falha ao montar a requisição: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Map a non-2xx response to [`ApiError`]. A 401 also drops the stored session.
async fn check(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    if status == 401 {
        log::warn!("API returned 401, clearing stored session");
        storage::clear_session();
        notify_session_expired();
        return Err(ApiError::Unauthorized);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Server {
        status,
        message: server_message(status, &body),
    })
}

async fn send(request: Request) -> ApiResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn build(builder: RequestBuilder) -> ApiResult<Request> {
    authorized(builder)
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))
}

fn build_json<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<Request> {
    authorized(builder)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let response = send(build(Request::get(&api_url(path)))?).await?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let response = send(build_json(Request::post(&api_url(path)), body)?).await?;
    decode(response).await
}

/// POST without a body whose response is ignored.
pub async fn post_action(path: &str) -> ApiResult<()> {
    send(build(Request::post(&api_url(path)))?).await?;
    Ok(())
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let response = send(build_json(Request::put(&api_url(path)), body)?).await?;
    decode(response).await
}

pub async fn delete(path: &str) -> ApiResult<()> {
    send(build(Request::delete(&api_url(path)))?).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_appended_only_when_present() {
        assert_eq!(with_query("/transactions", ""), "/transactions");
        assert_eq!(
            with_query("/transactions", "type=income"),
            "/transactions?type=income"
        );
    }

    #[test]
    fn segments_are_encoded() {
        assert_eq!(segment("banco do brasil"), "banco%20do%20brasil");
        assert_eq!(segment("a/b"), "a%2Fb");
    }

    #[test]
    fn error_messages_are_user_facing() {
        let err = ApiError::Server {
            status: 400,
            message: "Email já cadastrado".into(),
        };
        assert_eq!(err.to_string(), "Email já cadastrado");
        assert_eq!(err.status(), Some(400));
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }
}
