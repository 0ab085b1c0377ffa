use super::*;

#[test]
fn bearer_header_value_is_prefixed() {
    let auth = RequestAuth::bearer("abc123");
    assert_eq!(auth.header_value().as_deref(), Some("Bearer abc123"));
    assert_eq!(auth.token(), Some("abc123"));
}

#[test]
fn anonymous_auth_has_no_header() {
    let auth = RequestAuth::anonymous();
    assert!(auth.is_anonymous());
    assert_eq!(auth.header_value(), None);
}

#[test]
fn request_auth_debug_redacts_token() {
    let rendered = format!("{:?}", RequestAuth::bearer("super-secret"));
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("redacted"));
}

#[test]
fn http_api_url_uses_config_base() {
    let api = HttpApi::new(ClientConfig::default().with_api_base("/api"));
    assert_eq!(api.url(CURRENT_USER_PATH), "/api/user/me");
    assert_eq!(api.url(LOGOUT_PATH), "/api/user/logout");
}

#[test]
fn unauthenticated_errors_are_recognized() {
    assert!(ApiError::Unauthenticated.is_unauthenticated());
    assert!(ApiError::Status { status: 401 }.is_unauthenticated());
    assert!(ApiError::Rejected { code: 4001, msg: String::new() }.is_unauthenticated());
    assert!(!ApiError::Rejected { code: 4003, msg: String::new() }.is_unauthenticated());
    assert!(!ApiError::Request("offline".to_owned()).is_unauthenticated());
}

#[test]
fn rejected_error_message_includes_code_and_msg() {
    let err = ApiError::Rejected { code: 4003, msg: "wrong old password".to_owned() };
    assert_eq!(err.to_string(), "rejected with code 4003: wrong old password");
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn http_api_is_unavailable_outside_browser() {
    let api = HttpApi::new(ClientConfig::default());
    let auth = RequestAuth::bearer("abc123");
    assert_eq!(api.current_user(&auth).await, Err(ApiError::Unavailable));
    assert_eq!(api.logout(&auth).await, Err(ApiError::Unavailable));
}
