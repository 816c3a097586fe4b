use super::*;

fn alice() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        bio: None,
        profile_image_url: None,
    }
}

// =============================================================
// Session construction
// =============================================================

#[test]
fn session_from_no_user_is_anonymous() {
    assert_eq!(Session::from_user(None), Session::Anonymous);
}

#[test]
fn session_from_user_is_authenticated() {
    let session = Session::from_user(Some(alice()));
    assert_eq!(session, Session::Authenticated(alice()));
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn anonymous_session_has_no_user() {
    assert!(Session::Anonymous.user().is_none());
    assert!(Session::Anonymous.display_name().is_none());
}

#[test]
fn authenticated_session_exposes_display_name() {
    let session = Session::Authenticated(alice());
    assert_eq!(session.display_name(), Some("alice"));
}
