//! Wire types shared with the user service.

use serde::{Deserialize, Serialize};

/// Public identity record returned by `GET /api/auth/me`.
///
/// Mirrors the user service's `UserPublic` schema. Fetched fresh on each
/// probe and never cached by this crate.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}
