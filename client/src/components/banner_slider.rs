//! Decorative rotating image banner.
//!
//! DESIGN
//! ======
//! A slider either drives itself with an interval timer and reports every
//! step through `on_index_change`, or follows an externally supplied
//! `control_index` and runs no timer at all. The shortlist page pairs one of
//! each so the second banner is always one slide ahead of the first.

use leptos::prelude::*;

use crate::util::rotation::clamp_index;

/// Which way inactive slides are parked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideDirection {
    #[default]
    Left,
    Right,
}

impl SlideDirection {
    fn class(self) -> &'static str {
        match self {
            Self::Left => "banner-slider banner-slider--left",
            Self::Right => "banner-slider banner-slider--right",
        }
    }
}

#[component]
pub fn BannerSlider(
    #[prop(into)] images: Signal<Vec<String>>,
    interval_ms: u32,
    #[prop(optional)] direction: SlideDirection,
    #[prop(optional, into)] control_index: Option<Signal<usize>>,
    #[prop(optional)] on_index_change: Option<Callback<usize>>,
) -> impl IntoView {
    let index = RwSignal::new(0_usize);

    #[cfg(feature = "hydrate")]
    if control_index.is_none() {
        let ticker = gloo_timers::callback::Interval::new(interval_ms, move || {
            let len = images.with_untracked(Vec::len);
            let next = crate::util::rotation::next_index(index.get_untracked(), len);
            index.set(next);
            if let Some(cb) = on_index_change {
                cb.run(next);
            }
        });
        let ticker = StoredValue::new_local(Some(ticker));
        on_cleanup(move || ticker.update_value(|t| drop(t.take())));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (interval_ms, on_index_change);
    }

    let shown = move || {
        let raw = control_index.map_or_else(|| index.get(), |c| c.get());
        clamp_index(raw, images.with(Vec::len))
    };

    view! {
        <section class=direction.class()>
            {move || {
                images
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, src)| {
                        view! {
                            <img
                                src=src
                                alt=format!("Banner {}", i + 1)
                                draggable="false"
                                loading="lazy"
                                class="banner-slider__img"
                                class:banner-slider__img--active=move || shown() == i
                            />
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}
