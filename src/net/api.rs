//! REST API helpers for communicating with the user service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with cookies
//! included so the session credential travels with every request.
//! Native builds: stubs reporting no session, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The probe is infallible from the caller's point of view: every failure
//! mode is folded into [`SessionProbe`] and the default UI policy collapses
//! it further to `Option<User>` via [`SessionProbe::into_user`]. An
//! unauthenticated 401 is the expected common case, not an error, so nothing
//! is reported above debug level.

#![allow(clippy::unused_async)]
#![cfg_attr(not(feature = "hydrate"), allow(clippy::unused_self))]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
use crate::config::ApiConfig;

/// Outcome of a session probe against `GET /api/auth/me`.
///
/// The variants keep transport failures distinguishable for diagnostics,
/// but UI callers are expected to collapse them with [`Self::into_user`]:
/// "network unreachable" renders the same as "not logged in".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionProbe {
    /// The backend confirmed a live session for this user.
    Authenticated(User),
    /// The backend answered, but without a usable identity (401 or a body
    /// that did not decode).
    Unauthenticated,
    /// The request itself failed before the backend could answer.
    TransportError(String),
}

impl SessionProbe {
    /// Collapse to the identity, treating every failure as "no identity".
    pub fn into_user(self) -> Option<User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated | Self::TransportError(_) => None,
        }
    }
}

/// REST client bound to a gateway origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Build a client from the injected configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Join the gateway origin with an absolute endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Probe `GET /api/auth/me` for the currently authenticated user.
    pub async fn probe_session(&self) -> SessionProbe {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint("/api/auth/me");
            let resp = match gloo_net::http::Request::get(&url)
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(err) => {
                    log::debug!("session probe transport failure: {err}");
                    return SessionProbe::TransportError(err.to_string());
                }
            };
            if !resp.ok() {
                return SessionProbe::Unauthenticated;
            }
            match resp.json::<User>().await {
                Ok(user) => SessionProbe::Authenticated(user),
                Err(_) => SessionProbe::Unauthenticated,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            SessionProbe::Unauthenticated
        }
    }

    /// End the session by calling `POST /api/auth/logout`.
    ///
    /// Fire-and-forget: the response is not examined and failures are
    /// swallowed, matching the backend-authoritative logout flow.
    pub async fn logout(&self) {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint("/api/auth/logout");
            let _ = gloo_net::http::Request::post(&url)
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await;
        }
    }
}
