use super::*;

fn client(base: &str) -> ApiClient {
    ApiClient::new(&ApiConfig::new(base))
}

fn alice() -> User {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "username": "alice",
        "email": "alice@example.com",
        "bio": null,
        "profile_image_url": null,
    }))
    .unwrap()
}

// =============================================================
// Endpoint joining
// =============================================================

#[test]
fn endpoint_joins_origin_and_path() {
    let c = client("http://localhost");
    assert_eq!(c.endpoint("/api/auth/me"), "http://localhost/api/auth/me");
}

#[test]
fn endpoint_tolerates_trailing_slash_in_base() {
    let c = client("https://gateway.example.com/");
    assert_eq!(
        c.endpoint("/api/auth/logout"),
        "https://gateway.example.com/api/auth/logout"
    );
}

// =============================================================
// Probe collapse policy
// =============================================================

#[test]
fn authenticated_probe_yields_user() {
    let user = alice();
    assert_eq!(
        SessionProbe::Authenticated(user.clone()).into_user(),
        Some(user)
    );
}

#[test]
fn unauthenticated_probe_yields_no_user() {
    assert_eq!(SessionProbe::Unauthenticated.into_user(), None);
}

#[test]
fn transport_error_collapses_like_unauthenticated() {
    let probe = SessionProbe::TransportError("connection refused".to_owned());
    assert_eq!(probe.into_user(), None);
}

#[test]
fn identity_decodes_without_optional_fields() {
    let user: User =
        serde_json::from_str(r#"{"id": 7, "username": "bob", "email": "bob@example.com"}"#)
            .unwrap();
    assert_eq!(user.username, "bob");
    assert!(user.bio.is_none());
    assert!(user.profile_image_url.is_none());
}
