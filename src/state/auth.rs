//! Authentication state consumed by the navbar.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Known authentication state of the current page.
///
/// `Anonymous` is a confirmed logged-out state, distinct from "not yet
/// probed": a caller holding `Anonymous` has already asked the backend (or
/// knows from context, e.g. right after logout) and the navbar will not
/// probe again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Authenticated(User),
}

impl Session {
    /// Build a session from a collapsed probe result.
    pub fn from_user(user: Option<User>) -> Self {
        user.map_or(Self::Anonymous, Self::Authenticated)
    }

    /// The identity, if authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    /// Display name shown in the navbar, if authenticated.
    pub fn display_name(&self) -> Option<&str> {
        self.user().map(|u| u.username.as_str())
    }
}
