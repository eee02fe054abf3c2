//! Listing submission page (`/postcard`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `ListingDraft`, the submit status and the brand-suggestion state.
//! The draft holds browser `File` handles, so it lives in a thread-local
//! signal. Title edits update the derived cover image immediately and feed a
//! 400 ms debounced brand lookup.
//!
//! ERROR HANDLING
//! ==============
//! Validation runs before any request and reports the first failure. A failed
//! brand lookup only logs and shows no suggestions. A failed post keeps the
//! draft so the user can retry by submitting again.

use leptos::prelude::*;

use crate::components::brand_suggestions::BrandSuggestions;
use crate::config::ClientConfig;
use crate::net::types::BrandSuggestion;
use crate::state::submission::{DescriptionMode, ListingDraft, SubmitStatus, SuggestionLookup, SuggestionState};
use crate::util::debounce::BrowserScheduler;
use crate::util::file::SelectedFile;

#[component]
pub fn PostListingPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let draft = RwSignal::new_local(ListingDraft::<SelectedFile>::default());
    let status = RwSignal::new(SubmitStatus::default());
    let suggestions = RwSignal::new(SuggestionState::default());
    let lookup = StoredValue::new_local(SuggestionLookup::new(BrowserScheduler));
    let file_input = NodeRef::<leptos::html::Input>::new();

    on_cleanup(move || lookup.update_value(SuggestionLookup::cancel));

    let on_title_input = {
        let config = config.clone();
        move |ev: leptos::ev::Event| {
            let title = event_target_value(&ev);
            draft.update(|d| d.set_title(title.clone(), &config.logo_url));
            suggestions.update(|s| s.title_changed(&title));
            let config = config.clone();
            lookup.update_value(|l| {
                l.title_changed(&title, move |term| {
                    suggestions.update(|s| s.begin(&term));
                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local(async move {
                        let items = match crate::net::api::fetch_brand_suggestions(&config, &term).await {
                            Ok(items) => items,
                            Err(e) => {
                                log::warn!("brand lookup for {term} failed: {e}");
                                Vec::new()
                            }
                        };
                        suggestions.update(|s| {
                            s.finish(&term, items);
                        });
                    });
                    #[cfg(not(feature = "hydrate"))]
                    let _ = config;
                });
            });
        }
    };

    let on_select_brand = {
        let logo_url = config.logo_url.clone();
        Callback::new(move |brand: BrandSuggestion| {
            draft.update(|d| d.apply_suggestion(&brand, &logo_url));
            suggestions.update(SuggestionState::clear);
            lookup.update_value(SuggestionLookup::cancel);
        })
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            if let Some(file) = SelectedFile::from_input(&input) {
                draft.update(|d| {
                    if let Some(old) = d.select_file(file) {
                        old.revoke_preview();
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let payload = match draft.with_untracked(ListingDraft::prepare) {
            Ok(payload) => payload,
            Err(e) => {
                status.set(SubmitStatus::Failed(e.to_string()));
                return;
            }
        };
        status.set(SubmitStatus::Submitting);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::post_listing(&config, payload).await {
                    Ok(()) => {
                        draft.update(|d| {
                            if let Some(file) = d.description_file.take() {
                                file.revoke_preview();
                            }
                            *d = ListingDraft::default();
                        });
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                        suggestions.set(SuggestionState::default());
                        lookup.update_value(SuggestionLookup::cancel);
                        status.set(SubmitStatus::Succeeded);
                    }
                    Err(e) => {
                        log::warn!("listing post failed: {e}");
                        status.set(SubmitStatus::Failed(crate::net::api::post_error_message(&e)));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, &config);
    };

    let mode = move || draft.with(|d| d.mode);
    let preview = move || draft.with(|d| d.description_file.as_ref().map(|f| (f.preview_url.clone(), f.name.clone())));

    view! {
        <main class="post-listing">
            <form class="post-listing__form" on:submit=on_submit>
                <h2 class="post-listing__title">"Post a Scratch Card"</h2>

                <Show when=move || status.with(|s| s.error_message().is_some())>
                    <p class="post-listing__error" role="alert">
                        {move || status.with(|s| s.error_message().map(str::to_owned))}
                    </p>
                </Show>
                <Show when=move || status.with(|s| s.success_message().is_some())>
                    <p class="post-listing__success">{move || status.with(SubmitStatus::success_message)}</p>
                </Show>

                <label class="post-listing__field">
                    "Title"
                    <input
                        type="text"
                        autocomplete="off"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=on_title_input
                    />
                </label>
                <BrandSuggestions
                    items=Signal::derive(move || suggestions.with(|s| s.items.clone()))
                    loading=Signal::derive(move || suggestions.with(|s| s.loading))
                    on_select=on_select_brand
                />

                <fieldset class="post-listing__mode">
                    <legend>"Description"</legend>
                    <label>
                        <input
                            type="radio"
                            name="description-mode"
                            prop:checked=move || mode() == DescriptionMode::Text
                            on:change=move |_| draft.update(|d| d.set_mode(DescriptionMode::Text))
                        />
                        "Text"
                    </label>
                    <label>
                        <input
                            type="radio"
                            name="description-mode"
                            prop:checked=move || mode() == DescriptionMode::Image
                            on:change=move |_| draft.update(|d| d.set_mode(DescriptionMode::Image))
                        />
                        "Image"
                    </label>
                </fieldset>

                <Show
                    when=move || mode() == DescriptionMode::Text
                    fallback=move || {
                        view! {
                            <label class="post-listing__field">
                                "Description image"
                                <input type="file" accept="image/*" node_ref=file_input on:change=on_file_change/>
                            </label>
                            {move || {
                                preview()
                                    .map(|(src, name)| {
                                        view! { <img class="post-listing__preview" src=src alt=name/> }
                                    })
                            }}
                        }
                    }
                >
                    <label class="post-listing__field">
                        "Description text"
                        <textarea
                            rows="4"
                            prop:value=move || draft.with(|d| d.description_text.clone())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                draft.update(|d| d.description_text = text);
                            }
                        ></textarea>
                    </label>
                </Show>

                <label class="post-listing__field">
                    "Cover image URL"
                    <input
                        type="url"
                        prop:value=move || draft.with(|d| d.image_url.clone())
                        on:input=move |ev| {
                            let url = event_target_value(&ev);
                            draft.update(|d| d.image_url = url);
                        }
                    />
                </label>
                <label class="post-listing__field">
                    "Price (₹)"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || draft.with(|d| d.price.clone())
                        on:input=move |ev| {
                            let price = event_target_value(&ev);
                            draft.update(|d| d.price = price);
                        }
                    />
                </label>
                <label class="post-listing__field">
                    "Expiry date"
                    <input
                        type="date"
                        prop:value=move || draft.with(|d| d.expiry_date.clone())
                        on:input=move |ev| {
                            let date = event_target_value(&ev);
                            draft.update(|d| d.expiry_date = date);
                        }
                    />
                </label>
                <label class="post-listing__field">
                    "Your email"
                    <input
                        type="email"
                        prop:value=move || draft.with(|d| d.poster_email.clone())
                        on:input=move |ev| {
                            let email = event_target_value(&ev);
                            draft.update(|d| d.poster_email = email);
                        }
                    />
                </label>

                <button type="submit" class="post-listing__submit" disabled=move || status.with(SubmitStatus::is_submitting)>
                    {move || if status.with(SubmitStatus::is_submitting) { "Posting..." } else { "Post Card" }}
                </button>
            </form>
        </main>
    }
}
