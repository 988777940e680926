use super::*;

#[test]
fn status_error_names_url_and_status() {
    assert_eq!(
        status_error("/api/content", 503),
        LoadError::Network("GET /api/content: status 503".to_owned())
    );
}

#[test]
fn transport_error_keeps_cause() {
    let err = transport_error("/api/content", "connection refused");
    assert_eq!(err.to_string(), "content fetch failed: GET /api/content: connection refused");
}
