//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read the host's environment, so endpoints and the
//! brand-search token are baked in at compile time from `ANVAYA_*` variables.
//! `App` provides one `ClientConfig` through context; views read it with
//! `expect_context`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "https://final-backend-srja.onrender.com";
pub const DEFAULT_BRAND_SEARCH_URL: &str = "https://api.brandfetch.io/v2/search";
pub const DEFAULT_LOGO_URL: &str = "https://logo.clearbit.com/{domain}";
pub const DEFAULT_AUTH_URL: &str = "/auth";
pub const DEFAULT_CONTACT_EMAIL: &str = "support@anvaya.app";

/// Path of the scratch-card resource below the API origin.
const LISTINGS_PATH: &str = "/api/scratchCards";

/// Endpoints and credentials used by the client views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the listings API; description image paths are relative to it.
    pub api_url: String,
    pub brand_search_url: String,
    pub brand_token: String,
    /// Logo URL template; `{domain}` is replaced with the derived domain.
    pub logo_url: String,
    /// Base URL of the auth provider routes (`/me`, `/sign-in`, ...).
    pub auth_url: String,
    pub contact_email: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            brand_search_url: DEFAULT_BRAND_SEARCH_URL.to_owned(),
            brand_token: String::new(),
            logo_url: DEFAULT_LOGO_URL.to_owned(),
            auth_url: DEFAULT_AUTH_URL.to_owned(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build the config from compile-time `ANVAYA_*` variables, falling back
    /// to defaults for anything unset or blank.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("ANVAYA_API_URL"),
            option_env!("ANVAYA_BRAND_SEARCH_URL"),
            option_env!("ANVAYA_BRAND_TOKEN"),
            option_env!("ANVAYA_LOGO_URL"),
            option_env!("ANVAYA_AUTH_URL"),
            option_env!("ANVAYA_CONTACT_EMAIL"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        brand_search_url: Option<&str>,
        brand_token: Option<&str>,
        logo_url: Option<&str>,
        auth_url: Option<&str>,
        contact_email: Option<&str>,
    ) -> Self {
        Self {
            api_url: trimmed_url(api_url, DEFAULT_API_URL),
            brand_search_url: trimmed_url(brand_search_url, DEFAULT_BRAND_SEARCH_URL),
            brand_token: non_blank(brand_token, ""),
            logo_url: non_blank(logo_url, DEFAULT_LOGO_URL),
            auth_url: trimmed_url(auth_url, DEFAULT_AUTH_URL),
            contact_email: non_blank(contact_email, DEFAULT_CONTACT_EMAIL),
        }
    }

    /// `GET`/`POST` endpoint for scratch-card listings.
    pub fn listings_endpoint(&self) -> String {
        format!("{}{LISTINGS_PATH}", self.api_url)
    }

    /// Absolute URL for a description image path returned by the API.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.api_url)
        } else {
            format!("{}/{path}", self.api_url)
        }
    }

    pub fn auth_session_url(&self) -> String {
        format!("{}/me", self.auth_url)
    }

    pub fn auth_sign_out_url(&self) -> String {
        format!("{}/sign-out", self.auth_url)
    }

    pub fn auth_sign_in_url(&self) -> String {
        format!("{}/sign-in", self.auth_url)
    }

    pub fn auth_sign_up_url(&self) -> String {
        format!("{}/sign-up", self.auth_url)
    }
}

fn non_blank(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => default.to_owned(),
    }
}

fn trimmed_url(raw: Option<&str>, default: &str) -> String {
    non_blank(raw, default).trim_end_matches('/').to_owned()
}
