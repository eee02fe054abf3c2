use super::*;

// =============================================================
// Error messages
// =============================================================

#[test]
fn feed_error_message_for_status_is_generic() {
    let err = ApiError::Status { status: 500, message: Some("boom".to_owned()) };
    assert_eq!(feed_error_message(&err), "Failed to fetch scratch cards.");
}

#[test]
fn feed_error_message_surfaces_transport_message() {
    let err = ApiError::Network("Failed to fetch".to_owned());
    assert_eq!(feed_error_message(&err), "Failed to fetch");
}

#[test]
fn post_error_message_prefers_server_error_field() {
    let err = ApiError::Status { status: 400, message: Some("Expiry date must be in the future".to_owned()) };
    assert_eq!(post_error_message(&err), "Expiry date must be in the future");
}

#[test]
fn post_error_message_generic_without_server_message() {
    let err = ApiError::Status { status: 502, message: None };
    assert_eq!(post_error_message(&err), "Failed to post card.");
}

#[test]
fn post_error_message_prefixes_transport_errors() {
    let err = ApiError::Network("NetworkError when attempting to fetch resource.".to_owned());
    assert_eq!(
        post_error_message(&err),
        "Error posting card: NetworkError when attempting to fetch resource."
    );
}

#[test]
fn api_error_display_formats_status() {
    let err = ApiError::Status { status: 404, message: None };
    assert_eq!(err.to_string(), "request failed: 404");
}

// =============================================================
// Brand search request
// =============================================================

#[test]
fn brand_search_url_appends_encoded_segment() {
    assert_eq!(
        brand_search_url("https://api.brandfetch.io/v2/search", "amazon pay").as_deref(),
        Some("https://api.brandfetch.io/v2/search/amazon%20pay")
    );
}

#[test]
fn brand_search_url_encodes_slashes_in_term() {
    assert_eq!(
        brand_search_url("https://brands.example.com/search/", "a/b").as_deref(),
        Some("https://brands.example.com/search/a%2Fb")
    );
}

#[test]
fn brand_search_url_rejects_relative_base() {
    assert_eq!(brand_search_url("not a url", "x"), None);
}

#[test]
fn bearer_header_skips_blank_token() {
    assert_eq!(bearer_header("  "), None);
    assert_eq!(bearer_header("abc").as_deref(), Some("Bearer abc"));
}

// =============================================================
// Server-side stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_listings_is_unavailable_without_browser() {
    let cfg = ClientConfig::default();
    let result = futures::executor::block_on(fetch_listings(&cfg));
    assert!(matches!(result, Err(ApiError::Network(_))));
}
