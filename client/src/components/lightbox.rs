//! Fullscreen viewer for description images.
//!
//! Closes on the close button, a backdrop click or Escape; arrow keys and
//! the side buttons step through the slides with wraparound.

use leptos::prelude::*;

use crate::state::feed::LightboxSlide;

#[component]
pub fn Lightbox(
    #[prop(into)] slides: Signal<Vec<LightboxSlide>>,
    #[prop(into)] index: Signal<usize>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| match ev.key().as_str() {
            "Escape" => on_close.run(()),
            "ArrowLeft" => on_prev.run(()),
            "ArrowRight" => on_next.run(()),
            _ => {}
        });
        on_cleanup(move || handle.remove());
    }

    let current = move || slides.with(|s| s.get(index.get()).cloned());
    let counter = move || {
        let len = slides.with(Vec::len);
        if len == 0 { String::new() } else { format!("{} / {len}", index.get() + 1) }
    };

    view! {
        <div class="lightbox__backdrop" on:click=move |_| on_close.run(())>
            <div class="lightbox" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                <button class="lightbox__close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <button class="lightbox__prev" aria-label="Previous image" on:click=move |_| on_prev.run(())>
                    "‹"
                </button>
                {move || {
                    current()
                        .map(|slide| view! { <img class="lightbox__image" src=slide.src alt=slide.alt/> })
                }}
                <button class="lightbox__next" aria-label="Next image" on:click=move |_| on_next.run(())>
                    "›"
                </button>
                <span class="lightbox__counter">{counter}</span>
            </div>
        </div>
    }
}
