//! REST helpers for the listings API, the brand-search API and the auth provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `ApiError` instead of panicking. Views turn it into their
//! own user-facing message (`feed_error_message`, `post_error_message`); no
//! request is retried and none has a timeout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ClientConfig;
#[cfg(feature = "hydrate")]
use crate::net::types::ApiErrorBody;
use crate::net::types::{BrandSuggestion, Listing, User};
use crate::state::submission::ListingPayload;
use crate::util::file::SelectedFile;

/// Multipart field name carrying the description image.
pub const DESCRIPTION_IMAGE_FIELD: &str = "descriptionImage";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// Non-2xx response, with the body's `error` field when it had one.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("invalid request: {0}")]
    Encode(String),
}

/// Message the feed shows when loading listings fails.
pub fn feed_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } => "Failed to fetch scratch cards.".to_owned(),
        ApiError::Network(msg) | ApiError::Decode(msg) | ApiError::Encode(msg) => msg.clone(),
    }
}

/// Message the submission form shows when posting a listing fails.
pub fn post_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message: Some(msg), .. } => msg.clone(),
        ApiError::Status { message: None, .. } => "Failed to post card.".to_owned(),
        ApiError::Network(msg) | ApiError::Decode(msg) | ApiError::Encode(msg) => {
            format!("Error posting card: {msg}")
        }
    }
}

/// `{base}/{term}` with `term` encoded as a single path segment.
pub fn brand_search_url(base: &str, term: &str) -> Option<String> {
    let mut url = url::Url::parse(base).ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().push(term);
    Some(url.into())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| format!("Bearer {token}"))
}

/// Fetch every listing from `GET {api}/api/scratchCards`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails, the server responds with a
/// non-OK status, or the body is not a listing array.
pub async fn fetch_listings(config: &ClientConfig) -> Result<Vec<Listing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.listings_endpoint())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), message: None });
        }
        resp.json::<Vec<Listing>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a listing with `POST {api}/api/scratchCards`.
///
/// JSON payloads are sent as `application/json`; multipart payloads are sent
/// as `FormData` with the description image under `descriptionImage`.
///
/// # Errors
///
/// Returns `ApiError::Status` carrying the server's `error` message for
/// non-OK responses, or `ApiError::Network` if the request fails.
pub async fn post_listing(config: &ClientConfig, payload: ListingPayload<SelectedFile>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = config.listings_endpoint();
        let request = match payload {
            ListingPayload::Json(body) => gloo_net::http::Request::post(&endpoint)
                .json(&body)
                .map_err(|e| ApiError::Encode(e.to_string()))?,
            ListingPayload::Multipart { fields, file } => {
                let form = build_form_data(&fields, &file)?;
                gloo_net::http::Request::post(&endpoint)
                    .body(form)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
            }
        };
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.json::<ApiErrorBody>().await.unwrap_or_default();
        Err(ApiError::Status { status, message: body.error })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, payload);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn build_form_data(fields: &[(&'static str, String)], file: &SelectedFile) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_err)?;
    }
    form.append_with_blob_and_filename(DESCRIPTION_IMAGE_FIELD, file.file(), &file.name)
        .map_err(js_err)?;
    Ok(form)
}

/// Look up candidate brands for `term` at `GET {brand_search}/{term}`.
///
/// # Errors
///
/// Returns `ApiError` if the URL cannot be built, the request fails, or the
/// response is not a brand array.
pub async fn fetch_brand_suggestions(config: &ClientConfig, term: &str) -> Result<Vec<BrandSuggestion>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = brand_search_url(&config.brand_search_url, term)
            .ok_or_else(|| ApiError::Encode(format!("bad brand search url: {}", config.brand_search_url)))?;
        let mut request = gloo_net::http::Request::get(&url);
        if let Some(auth) = bearer_header(&config.brand_token) {
            request = request.header("Authorization", &auth);
        }
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), message: None });
        }
        resp.json::<Vec<BrandSuggestion>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, term);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the signed-in identity from the auth provider.
/// Returns `None` if not signed in or on the server.
pub async fn fetch_current_user(config: &ClientConfig) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.auth_session_url())
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// End the provider session.
pub async fn sign_out(config: &ClientConfig) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&config.auth_sign_out_url())
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}
