use super::*;

#[test]
fn expired_cookie_clears_value_and_dates_expiry_to_epoch() {
    let cookie = expired_cookie(SESSION_COOKIE);
    assert!(cookie.starts_with("session_id=;"));
    assert!(cookie.contains("expires=Thu, 01 Jan 1970 00:00:00 UTC"));
}

#[test]
fn expired_cookie_applies_to_root_path() {
    assert!(expired_cookie(SESSION_COOKIE).ends_with("path=/"));
}
