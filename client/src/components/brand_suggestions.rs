//! Dropdown of brand candidates under the title field.

use leptos::prelude::*;

use crate::net::types::BrandSuggestion;

#[component]
pub fn BrandSuggestions(
    #[prop(into)] items: Signal<Vec<BrandSuggestion>>,
    #[prop(into)] loading: Signal<bool>,
    on_select: Callback<BrandSuggestion>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p class="brand-suggestions__loading">"Searching brands..."</p>
        </Show>
        <Show when=move || !items.with(Vec::is_empty)>
            <ul class="brand-suggestions" role="listbox">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|brand| {
                            let icon = brand.preferred_image().map(str::to_owned);
                            let name = brand.name.clone();
                            view! {
                                <li
                                    class="brand-suggestions__item"
                                    role="option"
                                    on:mousedown=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        on_select.run(brand.clone());
                                    }
                                >
                                    {icon.map(|src| view! { <img class="brand-suggestions__icon" src=src alt=""/> })}
                                    <span class="brand-suggestions__name">{name}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}
