//! Launch screen shown once per browser session.

use leptos::prelude::*;

use crate::state::ui::SPLASH_TEXT;

#[component]
pub fn Splash() -> impl IntoView {
    let letters = SPLASH_TEXT
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let text = if c == ' ' { '\u{a0}' } else { c };
            view! {
                <span class="splash__char" style=format!("animation-delay: {}ms", i * 100)>
                    {text.to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="splash" aria-label=SPLASH_TEXT>
            <h1 class="splash__text">{letters}</h1>
        </div>
    }
}
