//! Listing submission form: draft fields, validation, payload assembly and
//! brand-suggestion bookkeeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The post page owns one `ListingDraft` plus a `SuggestionState` and drives
//! them from input events. Everything in this module is browser-agnostic: the
//! description file type is a parameter so tests can use plain values where
//! the page uses `SelectedFile`.
//!
//! DESIGN
//! ======
//! The text and file inputs are kept side by side in the draft so toggling the
//! description mode never loses either. Only at submit time is the active one
//! resolved into a `DescriptionInput`, and `build_payload` is the single place
//! that decides between a JSON body and a multipart body.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::BrandSuggestion;
use crate::util::debounce::{Debouncer, Scheduler};

/// Delay between the last title keystroke and the brand lookup.
pub const SUGGESTION_DEBOUNCE_MS: u32 = 400;
pub const SUCCESS_MESSAGE: &str = "Card posted successfully!";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Client-side validation failures, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required.")]
    MissingTitle,
    #[error("Expiry date is required.")]
    MissingExpiryDate,
    #[error("Email is required.")]
    MissingEmail,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Please select a description image.")]
    MissingDescriptionImage,
}

/// Which description input is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DescriptionMode {
    #[default]
    Text,
    Image,
}

/// The description actually submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DescriptionInput<F> {
    Text(String),
    Image(F),
}

/// Request body for `POST /api/scratchCards`.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingPayload<F> {
    /// `application/json` body.
    Json(serde_json::Value),
    /// Multipart form fields plus the description image.
    Multipart { fields: Vec<(&'static str, String)>, file: F },
}

/// Submitted listing fields other than the description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingFields {
    pub title: String,
    pub image_url: String,
    pub price: String,
    pub expiry_date: String,
    pub poster_email: String,
}

/// Assemble the request body for `fields` and `description`.
pub fn build_payload<F>(fields: &ListingFields, description: DescriptionInput<F>) -> ListingPayload<F> {
    match description {
        DescriptionInput::Text(text) => ListingPayload::Json(serde_json::json!({
            "title": fields.title,
            "description": text,
            "imageUrl": fields.image_url,
            "price": fields.price,
            "expiryDate": fields.expiry_date,
            "posterEmail": fields.poster_email,
        })),
        DescriptionInput::Image(file) => ListingPayload::Multipart {
            fields: vec![
                ("title", fields.title.clone()),
                ("imageUrl", fields.image_url.clone()),
                ("price", fields.price.clone()),
                ("expiryDate", fields.expiry_date.clone()),
                ("posterEmail", fields.poster_email.clone()),
            ],
            file,
        },
    }
}

/// Domain guessed from a brand title: lowercase, whitespace removed, `.com`.
pub fn derive_logo_domain(title: &str) -> Option<String> {
    let compact: String = title.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_lowercase();
    (!compact.is_empty()).then(|| format!("{compact}.com"))
}

/// Cover image URL for `title` using a `{domain}` template.
pub fn derive_cover_image(title: &str, logo_template: &str) -> Option<String> {
    derive_logo_domain(title).map(|domain| logo_template.replace("{domain}", &domain))
}

/// Term sent to the brand-search service for a title, if any.
pub fn lookup_term(title: &str) -> Option<String> {
    let term = title.trim();
    (!term.is_empty()).then(|| term.to_owned())
}

/// Editable form state.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingDraft<F> {
    pub title: String,
    pub description_text: String,
    pub description_file: Option<F>,
    pub mode: DescriptionMode,
    pub image_url: String,
    pub price: String,
    pub expiry_date: String,
    pub poster_email: String,
}

impl<F> Default for ListingDraft<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            description_text: String::new(),
            description_file: None,
            mode: DescriptionMode::default(),
            image_url: String::new(),
            price: String::new(),
            expiry_date: String::new(),
            poster_email: String::new(),
        }
    }
}

impl<F> ListingDraft<F> {
    /// Update the title and re-derive the cover image from it.
    pub fn set_title(&mut self, title: String, logo_template: &str) {
        if let Some(cover) = derive_cover_image(&title, logo_template) {
            self.image_url = cover;
        }
        self.title = title;
    }

    /// Store a picked file and switch to image mode. Returns the file it
    /// replaced so the caller can release its preview.
    pub fn select_file(&mut self, file: F) -> Option<F> {
        self.mode = DescriptionMode::Image;
        self.description_file.replace(file)
    }

    pub fn set_mode(&mut self, mode: DescriptionMode) {
        self.mode = mode;
    }

    /// Take a brand suggestion: its name becomes the title and its image the
    /// cover, falling back to the derived cover.
    pub fn apply_suggestion(&mut self, suggestion: &BrandSuggestion, logo_template: &str) {
        self.title = suggestion.name.clone();
        self.image_url = suggestion
            .preferred_image()
            .map(str::to_owned)
            .or_else(|| derive_cover_image(&suggestion.name, logo_template))
            .unwrap_or_default();
    }

    /// Run the field checks in order; the first failure wins.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.expiry_date.is_empty() {
            return Err(ValidationError::MissingExpiryDate);
        }
        if self.poster_email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_valid_email(&self.poster_email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.mode == DescriptionMode::Image && self.description_file.is_none() {
            return Err(ValidationError::MissingDescriptionImage);
        }
        Ok(())
    }

    pub fn fields(&self) -> ListingFields {
        ListingFields {
            title: self.title.clone(),
            image_url: self.image_url.clone(),
            price: self.price.clone(),
            expiry_date: self.expiry_date.clone(),
            poster_email: self.poster_email.clone(),
        }
    }
}

impl<F: Clone> ListingDraft<F> {
    /// The description for the active mode.
    pub fn description_input(&self) -> Option<DescriptionInput<F>> {
        match self.mode {
            DescriptionMode::Text => Some(DescriptionInput::Text(self.description_text.clone())),
            DescriptionMode::Image => self.description_file.clone().map(DescriptionInput::Image),
        }
    }

    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError`; no payload is built in that case.
    pub fn prepare(&self) -> Result<ListingPayload<F>, ValidationError> {
        self.validate()?;
        let description = self.description_input().ok_or(ValidationError::MissingDescriptionImage)?;
        Ok(build_payload(&self.fields(), description))
    }
}

/// Submit button and banner state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    Succeeded,
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&'static str> {
        matches!(self, Self::Succeeded).then_some(SUCCESS_MESSAGE)
    }
}

/// Candidate brands for the current title.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuggestionState {
    /// Term the current `items` (or in-flight lookup) belong to.
    pub term: Option<String>,
    pub items: Vec<BrandSuggestion>,
    pub loading: bool,
}

impl SuggestionState {
    /// Drop suggestions for the old title.
    pub fn title_changed(&mut self, title: &str) {
        self.term = lookup_term(title);
        self.items.clear();
        self.loading = false;
    }

    pub fn begin(&mut self, term: &str) {
        self.term = Some(term.to_owned());
        self.loading = true;
    }

    /// Store lookup results for `term`. Results for a term that is no longer
    /// current are discarded; returns whether they were kept.
    pub fn finish(&mut self, term: &str, items: Vec<BrandSuggestion>) -> bool {
        if self.term.as_deref() != Some(term) {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }

    /// Selection made; hide the list until the title changes again.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Debounced brand lookup keyed on the title.
pub struct SuggestionLookup<S: Scheduler> {
    debouncer: Debouncer<S>,
}

impl<S: Scheduler> SuggestionLookup<S> {
    pub fn new(scheduler: S) -> Self {
        Self { debouncer: Debouncer::new(scheduler, SUGGESTION_DEBOUNCE_MS) }
    }

    /// Call on every title edit. A non-blank title (re)arms the timer to run
    /// `fetch(term)`; a blank title just cancels the pending lookup.
    pub fn title_changed(&mut self, title: &str, fetch: impl FnOnce(String) + 'static) {
        match lookup_term(title) {
            Some(term) => self.debouncer.call(move || fetch(term)),
            None => self.debouncer.cancel(),
        }
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}
