//! Wire DTOs for the marketplace REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON shapes (camelCase keys, envelope
//! objects around the payload) so screens deserialize responses directly
//! and pass the results around untouched.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A marketplace listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    /// Unique advertisement identifier.
    pub id: i64,
    /// Owning user's identifier.
    pub user_id: i64,
    /// Listing title.
    pub title: String,
    /// Free-form listing description.
    pub description: String,
    /// Attached images, oldest first. Absent in some list responses.
    #[serde(default)]
    pub images: Vec<AdImage>,
    /// ISO 8601 creation timestamp, if the endpoint returns one.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An image attached to an advertisement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdImage {
    /// Unique image identifier.
    pub id: i64,
    /// Publicly fetchable image URL.
    pub image_url: String,
}

/// A marketplace user as returned by `/user/:id`.
///
/// Contact and profile fields are optional; the server omits whatever the
/// user left blank at registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Profile image URL, if one was uploaded.
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Successful `POST /login` payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer credential.
    pub token: String,
    pub user: LoginUser,
}

/// The user summary embedded in a login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginUser {
    pub id: i64,
}

/// Envelope for endpoints returning `{"advertisements": [...]}`.
#[derive(Clone, Debug, Deserialize)]
pub struct AdvertisementsEnvelope {
    pub advertisements: Vec<Advertisement>,
}

/// Envelope for endpoints returning `{"advertisement": {...}}`.
#[derive(Clone, Debug, Deserialize)]
pub struct AdvertisementEnvelope {
    pub advertisement: Advertisement,
}

/// Envelope for endpoints returning `{"user": {...}}`.
#[derive(Clone, Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// Error envelope the server uses for rejected requests.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
