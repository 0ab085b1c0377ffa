use super::*;

#[test]
fn default_uses_same_origin_and_token_key() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base, "");
    assert_eq!(config.token_key, "token");
}

#[test]
fn endpoint_without_base_is_path() {
    assert_eq!(ClientConfig::default().endpoint("/user/me"), "/user/me");
}

#[test]
fn with_api_base_trims_trailing_slash() {
    let config = ClientConfig::default().with_api_base("http://localhost:5000/");
    assert_eq!(config.endpoint("/user/logout"), "http://localhost:5000/user/logout");
}

#[test]
fn from_values_falls_back_on_blank_token_key() {
    let config = ClientConfig::from_values(Some("/api/"), Some("  "));
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.token_key, DEFAULT_TOKEN_KEY);
}

#[test]
fn from_values_keeps_custom_token_key() {
    let config = ClientConfig::from_values(None, Some("notes_token"));
    assert_eq!(config.api_base, "");
    assert_eq!(config.token_key, "notes_token");
}
