use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::util::debounce::manual::ManualScheduler;

// =============================================================
// Helpers
// =============================================================

const LOGO: &str = "https://logo.example.com/{domain}";

/// Stand-in for a picked file.
#[derive(Clone, Debug, PartialEq, Eq)]
struct FakeFile(&'static str);

fn valid_draft() -> ListingDraft<FakeFile> {
    ListingDraft {
        title: "Amazon".to_owned(),
        description_text: "10% off electronics".to_owned(),
        image_url: "https://logo.example.com/amazon.com".to_owned(),
        price: "150".to_owned(),
        expiry_date: "2025-09-30".to_owned(),
        poster_email: "seller@example.com".to_owned(),
        ..ListingDraft::default()
    }
}

// =============================================================
// Email pattern
// =============================================================

#[test]
fn email_pattern_accepts_simple_address() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@mail.example.com"));
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    for bad in ["abc", "a@b", "a b@c.com", "a@@b.com", "@b.com", "a@.", ""] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

// =============================================================
// Validation order
// =============================================================

#[test]
fn empty_title_is_rejected_first() {
    let draft: ListingDraft<FakeFile> = ListingDraft::default();
    assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));
    assert_eq!(draft.prepare(), Err(ValidationError::MissingTitle));
}

#[test]
fn whitespace_title_is_rejected() {
    let draft = ListingDraft { title: "   ".to_owned(), ..valid_draft() };
    assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));
}

#[test]
fn missing_expiry_is_rejected_before_email_checks() {
    let draft = ListingDraft { expiry_date: String::new(), poster_email: "abc".to_owned(), ..valid_draft() };
    assert_eq!(draft.validate(), Err(ValidationError::MissingExpiryDate));
}

#[test]
fn missing_email_is_rejected() {
    let draft = ListingDraft { poster_email: "  ".to_owned(), ..valid_draft() };
    assert_eq!(draft.validate(), Err(ValidationError::MissingEmail));
}

#[test]
fn malformed_email_is_rejected() {
    let draft = ListingDraft { poster_email: "abc".to_owned(), ..valid_draft() };
    assert_eq!(draft.validate(), Err(ValidationError::InvalidEmail));
}

#[test]
fn image_mode_without_file_is_rejected_even_when_fields_valid() {
    let mut draft = valid_draft();
    draft.set_mode(DescriptionMode::Image);
    assert_eq!(draft.validate(), Err(ValidationError::MissingDescriptionImage));
    assert_eq!(draft.prepare(), Err(ValidationError::MissingDescriptionImage));
}

#[test]
fn validation_messages_match_form_copy() {
    assert_eq!(ValidationError::MissingTitle.to_string(), "Title is required.");
    assert_eq!(ValidationError::MissingExpiryDate.to_string(), "Expiry date is required.");
    assert_eq!(ValidationError::MissingEmail.to_string(), "Email is required.");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email format.");
    assert_eq!(ValidationError::MissingDescriptionImage.to_string(), "Please select a description image.");
}

// =============================================================
// Description mode
// =============================================================

#[test]
fn selecting_file_switches_to_image_mode() {
    let mut draft = valid_draft();
    assert_eq!(draft.mode, DescriptionMode::Text);
    assert_eq!(draft.select_file(FakeFile("a.png")), None);
    assert_eq!(draft.mode, DescriptionMode::Image);
    assert_eq!(draft.select_file(FakeFile("b.png")), Some(FakeFile("a.png")));
}

#[test]
fn toggling_mode_preserves_text_and_file() {
    let mut draft = valid_draft();
    draft.select_file(FakeFile("card.png"));
    draft.set_mode(DescriptionMode::Text);
    assert_eq!(draft.description_text, "10% off electronics");
    assert_eq!(draft.description_file, Some(FakeFile("card.png")));
    assert_eq!(draft.description_input(), Some(DescriptionInput::Text("10% off electronics".to_owned())));

    draft.set_mode(DescriptionMode::Image);
    assert_eq!(draft.description_text, "10% off electronics");
    assert_eq!(draft.description_input(), Some(DescriptionInput::Image(FakeFile("card.png"))));
}

// =============================================================
// Payload
// =============================================================

#[test]
fn text_mode_builds_json_payload() {
    let payload = valid_draft().prepare().unwrap();
    assert_eq!(
        payload,
        ListingPayload::Json(serde_json::json!({
            "title": "Amazon",
            "description": "10% off electronics",
            "imageUrl": "https://logo.example.com/amazon.com",
            "price": "150",
            "expiryDate": "2025-09-30",
            "posterEmail": "seller@example.com",
        }))
    );
}

#[test]
fn image_mode_builds_multipart_without_text_description() {
    let mut draft = valid_draft();
    draft.select_file(FakeFile("card.png"));
    let ListingPayload::Multipart { fields, file } = draft.prepare().unwrap() else {
        panic!("expected multipart payload");
    };
    assert_eq!(file, FakeFile("card.png"));
    assert_eq!(
        fields,
        vec![
            ("title", "Amazon".to_owned()),
            ("imageUrl", "https://logo.example.com/amazon.com".to_owned()),
            ("price", "150".to_owned()),
            ("expiryDate", "2025-09-30".to_owned()),
            ("posterEmail", "seller@example.com".to_owned()),
        ]
    );
    assert!(fields.iter().all(|(name, _)| *name != "description"));
}

#[test]
fn text_mode_ignores_selected_file() {
    let mut draft = valid_draft();
    draft.select_file(FakeFile("card.png"));
    draft.set_mode(DescriptionMode::Text);
    assert!(matches!(draft.prepare(), Ok(ListingPayload::Json(_))));
}

// =============================================================
// Cover image derivation
// =============================================================

#[test]
fn derive_logo_domain_lowercases_and_strips_whitespace() {
    assert_eq!(derive_logo_domain("Amazon Pay ").as_deref(), Some("amazonpay.com"));
    assert_eq!(derive_logo_domain("  \t "), None);
}

#[test]
fn derive_cover_image_fills_template() {
    assert_eq!(derive_cover_image("Big Basket", LOGO).as_deref(), Some("https://logo.example.com/bigbasket.com"));
}

#[test]
fn set_title_updates_cover_image() {
    let mut draft: ListingDraft<FakeFile> = ListingDraft::default();
    draft.set_title("Flip kart".to_owned(), LOGO);
    assert_eq!(draft.title, "Flip kart");
    assert_eq!(draft.image_url, "https://logo.example.com/flipkart.com");
}

#[test]
fn set_title_blank_keeps_previous_cover() {
    let mut draft = valid_draft();
    draft.set_title(String::new(), LOGO);
    assert_eq!(draft.image_url, "https://logo.example.com/amazon.com");
}

#[test]
fn apply_suggestion_sets_title_and_cover() {
    let mut draft = valid_draft();
    let brand = BrandSuggestion {
        name: "Nykaa".to_owned(),
        icon: Some("https://img.example.com/nykaa.ico".to_owned()),
        logos: vec![],
    };
    draft.apply_suggestion(&brand, LOGO);
    assert_eq!(draft.title, "Nykaa");
    assert_eq!(draft.image_url, "https://img.example.com/nykaa.ico");
}

#[test]
fn apply_suggestion_without_images_uses_derived_cover() {
    let mut draft = valid_draft();
    let brand = BrandSuggestion { name: "Tata Cliq".to_owned(), icon: None, logos: vec![] };
    draft.apply_suggestion(&brand, LOGO);
    assert_eq!(draft.image_url, "https://logo.example.com/tatacliq.com");
}

// =============================================================
// Submit status
// =============================================================

#[test]
fn submit_status_messages() {
    assert!(SubmitStatus::Submitting.is_submitting());
    assert_eq!(SubmitStatus::Failed("nope".to_owned()).error_message(), Some("nope"));
    assert_eq!(SubmitStatus::Succeeded.success_message(), Some("Card posted successfully!"));
    assert_eq!(SubmitStatus::Idle.error_message(), None);
    assert_eq!(SubmitStatus::Idle.success_message(), None);
}

// =============================================================
// Suggestions
// =============================================================

#[test]
fn suggestion_results_for_stale_term_are_discarded() {
    let mut state = SuggestionState::default();
    state.begin("ama");
    state.title_changed("amazon");
    let kept = state.finish("ama", vec![BrandSuggestion { name: "Amari".to_owned(), ..BrandSuggestion::default() }]);
    assert!(!kept);
    assert!(state.items.is_empty());
}

#[test]
fn suggestion_results_for_current_term_are_kept() {
    let mut state = SuggestionState::default();
    state.title_changed("amazon");
    state.begin("amazon");
    assert!(state.loading);
    assert!(state.finish("amazon", vec![BrandSuggestion { name: "Amazon".to_owned(), ..BrandSuggestion::default() }]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    state.clear();
    assert_eq!(state, SuggestionState::default());
}

#[test]
fn rapid_title_edits_issue_one_lookup_with_final_title() {
    let scheduler = ManualScheduler::default();
    let mut lookup = SuggestionLookup::new(scheduler.clone());
    let fetched = Rc::new(RefCell::new(Vec::new()));

    for title in ["S", "St", "Sta", "Starb", "Starbucks "] {
        let sink = Rc::clone(&fetched);
        lookup.title_changed(title, move |term| sink.borrow_mut().push(term));
        scheduler.advance(150);
    }
    assert!(fetched.borrow().is_empty());

    scheduler.advance(u64::from(SUGGESTION_DEBOUNCE_MS));
    assert_eq!(*fetched.borrow(), vec!["Starbucks".to_owned()]);
}

#[test]
fn clearing_title_cancels_pending_lookup() {
    let scheduler = ManualScheduler::default();
    let mut lookup = SuggestionLookup::new(scheduler.clone());
    let fetched = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&fetched);
    lookup.title_changed("Zara", move |term| sink.borrow_mut().push(term));
    let sink = Rc::clone(&fetched);
    lookup.title_changed("   ", move |term| sink.borrow_mut().push(term));
    scheduler.advance(1_000);
    assert!(fetched.borrow().is_empty());
}
