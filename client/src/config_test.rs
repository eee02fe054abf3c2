use super::*;

#[test]
fn from_values_uses_defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None, None, None, None, None);
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn from_values_treats_blank_as_unset() {
    let cfg = ClientConfig::from_values(Some("  "), None, Some(""), None, None, None);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.brand_token, "");
}

#[test]
fn from_values_trims_trailing_slashes_on_urls() {
    let cfg = ClientConfig::from_values(
        Some("https://api.example.com/"),
        Some("https://brands.example.com/search//"),
        Some("tok"),
        None,
        Some("https://auth.example.com/"),
        None,
    );
    assert_eq!(cfg.api_url, "https://api.example.com");
    assert_eq!(cfg.brand_search_url, "https://brands.example.com/search");
    assert_eq!(cfg.brand_token, "tok");
    assert_eq!(cfg.auth_url, "https://auth.example.com");
}

#[test]
fn listings_endpoint_appends_resource_path() {
    let cfg = ClientConfig { api_url: "https://api.example.com".to_owned(), ..ClientConfig::default() };
    assert_eq!(cfg.listings_endpoint(), "https://api.example.com/api/scratchCards");
}

#[test]
fn asset_url_joins_relative_paths_to_api_origin() {
    let cfg = ClientConfig { api_url: "https://api.example.com".to_owned(), ..ClientConfig::default() };
    assert_eq!(cfg.asset_url("/uploads/a.png"), "https://api.example.com/uploads/a.png");
    assert_eq!(cfg.asset_url("uploads/a.png"), "https://api.example.com/uploads/a.png");
}

#[test]
fn asset_url_keeps_absolute_urls() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.asset_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
}

#[test]
fn auth_urls_hang_off_auth_base() {
    let cfg = ClientConfig { auth_url: "/auth".to_owned(), ..ClientConfig::default() };
    assert_eq!(cfg.auth_session_url(), "/auth/me");
    assert_eq!(cfg.auth_sign_out_url(), "/auth/sign-out");
    assert_eq!(cfg.auth_sign_in_url(), "/auth/sign-in");
    assert_eq!(cfg.auth_sign_up_url(), "/auth/sign-up");
}
