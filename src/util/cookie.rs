//! Best-effort client-side cookie expiry.
//!
//! The backend deletes the session on logout and is the authority; expiring
//! the cookie here only keeps the browser from re-sending a dead credential.
//! Requires a browser environment; native builds are a no-op.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Name of the session credential cookie set by the user service.
pub const SESSION_COOKIE: &str = "session_id";

/// Cookie string that clears `name` by dating its expiry to the epoch.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/")
}

/// Expire the named cookie in the browser's cookie jar.
pub fn expire(name: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Ok(doc) = doc.dyn_into::<web_sys::HtmlDocument>() {
                let _ = doc.set_cookie(&expired_cookie(name));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
    }
}
