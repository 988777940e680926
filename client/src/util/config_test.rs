use super::*;

#[test]
fn missing_param_uses_server_endpoint() {
    assert_eq!(resolve_content_url(None), DEFAULT_CONTENT_URL);
}

#[test]
fn blank_param_uses_server_endpoint() {
    assert_eq!(resolve_content_url(Some("   ".to_owned())), DEFAULT_CONTENT_URL);
}

#[test]
fn param_overrides_endpoint() {
    assert_eq!(resolve_content_url(Some(" /showrooms/garage.json ".to_owned())), "/showrooms/garage.json");
}

#[cfg(not(feature = "csr"))]
#[test]
fn content_url_defaults_outside_browser() {
    assert_eq!(content_url(), DEFAULT_CONTENT_URL);
}
