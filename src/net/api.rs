//! REST API helpers for communicating with the marketplace server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response passes through one status interceptor. HTTP 401 becomes
//! [`ApiError::Unauthorized`] so expired sessions are recognized in a
//! single place (`util::auth::expire_session`) instead of per screen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use super::types::{Advertisement, LoginResponse, User};
#[cfg(feature = "hydrate")]
use super::types::{AdvertisementEnvelope, AdvertisementsEnvelope, ApiMessage, UserEnvelope};
#[cfg(any(test, feature = "hydrate"))]
use crate::util::url::encode_query_component;

/// Failure surfaced by an API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the bearer token (HTTP 401).
    Unauthorized,
    /// Any other non-success HTTP status, with the server's message when
    /// it sent one.
    Status(u16, String),
    /// Transport-level failure (offline, DNS, aborted request).
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "session expired"),
            ApiError::Status(_, message) => write!(f, "{message}"),
            ApiError::Network(message) => write!(f, "network error: {message}"),
        }
    }
}

/// Base URL for the remote API, supplied at build time. Defaults to a
/// same-origin `/api` prefix.
#[cfg(any(test, feature = "hydrate"))]
const API_BASE: &str = match option_env!("MARKETPLACE_API_URL") {
    Some(base) => base,
    None => "/api",
};

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn advertisement_endpoint(id: i64) -> String {
    format!("/advertisement/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_advertisement_endpoint(user_id: i64) -> String {
    format!("/advertisement/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn advertisement_images_endpoint(id: i64) -> String {
    format!("/advertisement/{id}/images")
}

#[cfg(any(test, feature = "hydrate"))]
fn advertisement_image_endpoint(ad_id: i64, image_id: i64) -> String {
    format!("/advertisement/{ad_id}/images/{image_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(id: i64) -> String {
    format!("/user/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_advertisements_endpoint(id: i64) -> String {
    format!("/user/{id}/advertisements")
}

#[cfg(any(test, feature = "hydrate"))]
fn search_endpoint(query: &str) -> String {
    format!("/search?query={}", encode_query_component(query))
}

/// `Authorization` header value for a bearer token.
pub fn auth_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-success status plus optional server message to an [`ApiError`].
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, message: Option<String>) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    ApiError::Status(status, message.unwrap_or_else(|| format!("request failed: {status}")))
}

/// Single status interceptor applied to every response.
#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp.json::<ApiMessage>().await.ok().and_then(|m| m.message);
    Err(status_error(status, message))
}

#[cfg(not(feature = "hydrate"))]
fn server_side_error() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// Exchange credentials for a bearer token via `POST /login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects the
/// credentials.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post(&api_url("/login"))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(server_side_error())
    }
}

/// Invalidate the server-side session via `POST /logout`.
///
/// Best-effort: the response body is ignored. Callers decide what to do
/// about failures; local session teardown never depends on this call.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request cannot be sent or the server
/// rejects it.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_side_error())
    }
}

/// Fetch the advertisement feed from `GET /advertisements`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
pub async fn fetch_advertisements() -> Result<Vec<Advertisement>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/advertisements"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        let envelope: AdvertisementsEnvelope =
            resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(envelope.advertisements)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_side_error())
    }
}

/// Fetch one advertisement from `GET /advertisement/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
pub async fn fetch_advertisement(id: i64) -> Result<Advertisement, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url(&advertisement_endpoint(id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        let envelope: AdvertisementEnvelope =
            resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(envelope.advertisement)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(server_side_error())
    }
}

/// Search advertisements via `GET /search?query=`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
pub async fn search_advertisements(query: &str) -> Result<Vec<Advertisement>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url(&search_endpoint(query)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        let envelope: AdvertisementsEnvelope =
            resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(envelope.advertisements)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(server_side_error())
    }
}

/// Fetch a user record from `GET /user/:id`, attaching the bearer token
/// when one is held.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
pub async fn fetch_user(id: i64, token: Option<&str>) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(&api_url(&user_endpoint(id)));
        if let Some(token) = token {
            req = req.header("Authorization", &auth_header_value(token));
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        let envelope: UserEnvelope = resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(envelope.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err(server_side_error())
    }
}

/// Fetch a user's advertisements from `GET /user/:id/advertisements`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
pub async fn fetch_user_advertisements(id: i64, token: Option<&str>) -> Result<Vec<Advertisement>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(&api_url(&user_advertisements_endpoint(id)));
        if let Some(token) = token {
            req = req.header("Authorization", &auth_header_value(token));
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        let envelope: AdvertisementsEnvelope =
            resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(envelope.advertisements)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err(server_side_error())
    }
}

/// Registration fields submitted by the register screen.
///
/// The optional profile image travels separately as a browser `File`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub profession: String,
    pub location: String,
    pub description: String,
}

/// Create an account via multipart `POST /register`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status;
/// the server's message (duplicate username etc.) is preserved.
#[cfg(feature = "hydrate")]
pub async fn register(form: &RegisterForm, profile_image: Option<web_sys::File>) -> Result<(), ApiError> {
    let data = web_sys::FormData::new().map_err(|_| ApiError::Network("form assembly failed".to_owned()))?;
    let fields = [
        ("username", &form.username),
        ("name", &form.name),
        ("email", &form.email),
        ("password", &form.password),
        ("phone", &form.phone),
        ("profession", &form.profession),
        ("location", &form.location),
        ("description", &form.description),
    ];
    for (key, value) in fields {
        let _ = data.append_with_str(key, value);
    }
    if let Some(file) = profile_image {
        let _ = data.append_with_blob("profileImage", &file);
    }
    let resp = gloo_net::http::Request::post(&api_url("/register"))
        .body(data)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(resp).await?;
    Ok(())
}

/// Create an advertisement via multipart `POST /advertisement/:userId`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
/// The server's per-user listing limit surfaces through the status message.
#[cfg(feature = "hydrate")]
pub async fn create_advertisement(
    token: &str,
    user_id: i64,
    title: &str,
    description: &str,
    images: &web_sys::FileList,
) -> Result<(), ApiError> {
    let data = web_sys::FormData::new().map_err(|_| ApiError::Network("form assembly failed".to_owned()))?;
    let _ = data.append_with_str("title", title);
    let _ = data.append_with_str("description", description);
    for index in 0..images.length() {
        if let Some(file) = images.item(index) {
            let _ = data.append_with_blob("images", &file);
        }
    }
    let resp = gloo_net::http::Request::post(&api_url(&create_advertisement_endpoint(user_id)))
        .header("Authorization", &auth_header_value(token))
        .body(data)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(resp).await?;
    Ok(())
}

/// Update an advertisement's title/description via `PUT /advertisement/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
pub async fn update_advertisement(token: &str, id: i64, title: &str, description: &str) -> Result<Advertisement, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "title": title, "description": description });
        let resp = gloo_net::http::Request::put(&api_url(&advertisement_endpoint(id)))
            .header("Authorization", &auth_header_value(token))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        let envelope: AdvertisementEnvelope =
            resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(envelope.advertisement)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, title, description);
        Err(server_side_error())
    }
}

/// Delete an advertisement via `DELETE /advertisement/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
pub async fn delete_advertisement(token: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&api_url(&advertisement_endpoint(id)))
            .header("Authorization", &auth_header_value(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(server_side_error())
    }
}

/// Attach images to an advertisement via multipart
/// `POST /advertisement/:id/images`. Returns the updated advertisement.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
#[cfg(feature = "hydrate")]
pub async fn upload_advertisement_images(
    token: &str,
    id: i64,
    images: &web_sys::FileList,
) -> Result<Advertisement, ApiError> {
    let data = web_sys::FormData::new().map_err(|_| ApiError::Network("form assembly failed".to_owned()))?;
    for index in 0..images.length() {
        if let Some(file) = images.item(index) {
            let _ = data.append_with_blob("images", &file);
        }
    }
    let resp = gloo_net::http::Request::post(&api_url(&advertisement_images_endpoint(id)))
        .header("Authorization", &auth_header_value(token))
        .body(data)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = check_status(resp).await?;
    let envelope: AdvertisementEnvelope = resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(envelope.advertisement)
}

/// Remove one image via `DELETE /advertisement/:id/images/:imageId`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-success status.
pub async fn delete_advertisement_image(token: &str, ad_id: i64, image_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&api_url(&advertisement_image_endpoint(ad_id, image_id)))
            .header("Authorization", &auth_header_value(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, ad_id, image_id);
        Err(server_side_error())
    }
}
