//! Wire DTOs for the listings API, the brand-search API and the auth provider.
//!
//! DESIGN
//! ======
//! The listings API is loosely typed: optional fields arrive missing, `null`,
//! or as empty strings, and `price` may be a number or a string. Deserializers
//! here normalize all of those into `Option<String>` so rendering code only
//! has to distinguish present from absent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A scratch-card listing as returned by `GET /api/scratchCards`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Opaque store identifier.
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub description: Option<String>,
    /// Path of the uploaded description image, relative to the API origin.
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub description_image_url: Option<String>,
    /// Cover image URL.
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_price")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub expiry_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub poster_email: Option<String>,
}

/// How a listing's description is presented. Image wins over text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingDescription<'a> {
    Image(&'a str),
    Text(&'a str),
    Missing,
}

impl Listing {
    pub fn description(&self) -> ListingDescription<'_> {
        if let Some(path) = self.description_image_url.as_deref() {
            ListingDescription::Image(path)
        } else if let Some(text) = self.description.as_deref() {
            ListingDescription::Text(text)
        } else {
            ListingDescription::Missing
        }
    }

    pub fn has_description_image(&self) -> bool {
        self.description_image_url.is_some()
    }

    /// Title for display and alt text; falls back to `"Untitled"`.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() { "Untitled" } else { &self.title }
    }
}

/// Identity returned by the auth provider's session endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub email: Option<String>,
}

impl User {
    /// First name, then full name, then email, then `"User"`.
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .or(self.full_name.as_deref())
            .or(self.email.as_deref())
            .unwrap_or("User")
    }
}

/// A candidate brand from the brand-search service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandSuggestion {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "deserialize_logo_urls")]
    pub logos: Vec<String>,
}

impl BrandSuggestion {
    /// Icon if present, otherwise the first logo.
    pub fn preferred_image(&self) -> Option<&str> {
        self.icon.as_deref().or_else(|| self.logos.first().map(String::as_str))
    }
}

/// Error body the listings API sends with non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub error: Option<String>,
}

fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn deserialize_opt_price<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn deserialize_logo_urls<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default().iter().filter_map(logo_url).collect())
}

/// Logo entries are either bare URLs or objects carrying `src` or `url`.
fn logo_url(entry: &serde_json::Value) -> Option<String> {
    let raw = match entry {
        serde_json::Value::String(s) => s.as_str(),
        serde_json::Value::Object(map) => map.get("src").or_else(|| map.get("url"))?.as_str()?,
        _ => return None,
    };
    (!raw.trim().is_empty()).then(|| raw.to_owned())
}
