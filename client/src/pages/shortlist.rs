//! "My List" page (`/mylist`): favourite contacts kept for the browser session.

use leptos::prelude::*;

use crate::components::banner_slider::{BannerSlider, SlideDirection};
use crate::state::shortlist::{EMPTY_MESSAGE, Shortlist};
use crate::util::format::mailto_href;
use crate::util::rotation::follower_index;
use crate::util::storage::BrowserStorage;

pub const SHORTLIST_BANNER_INTERVAL_MS: u32 = 3000;

const SHORTLIST_BANNERS: [&str; 6] = [
    "https://palmonas.com/cdn/shop/files/daily_ware_c32bcc0d-4cd5-41c3-8868-e24936980c93.jpg?v=1752847287&width=1500",
    "https://w0.peakpx.com/wallpaper/211/633/HD-wallpaper-starbucks-coffee-brands-cafe-green-men-simple-women.jpg",
    "https://pbs.twimg.com/media/DENKKAuUQAEEsKN.jpg:large",
    "https://www.trueblueadvisory.com/wp-content/uploads/2022/06/case-study_0012_ajio.jpg",
    "https://palmonas.com/cdn/shop/files/lgd_mob_2_7c31140d-dffe-4b90-b03a-8ff410349811.webp?v=1744178192&width=750",
    "https://variety.com/wp-content/uploads/2019/03/netflix-logo-n-icon.png?w=1000&h=667&crop=1",
];

#[allow(clippy::cast_possible_truncation)]
fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

#[component]
pub fn ShortlistPage() -> impl IntoView {
    let store = expect_context::<BrowserStorage>();
    let list = RwSignal::new(Shortlist::default());
    let loading = RwSignal::new(true);
    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let primary = RwSignal::new(0_usize);

    // Storage only exists in the browser, so load after hydration.
    Effect::new(move || {
        list.set(Shortlist::load(&store));
        loading.set(false);
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let added = list
            .try_update(|l| l.add(&email.get_untracked(), &name.get_untracked(), now_ms()))
            .flatten();
        if added.is_some() {
            list.with_untracked(|l| l.save(&store));
            email.set(String::new());
            name.set(String::new());
        }
    };

    let on_remove = move |id: i64| {
        if list.try_update(|l| l.remove(id)).unwrap_or(false) {
            list.with_untracked(|l| l.save(&store));
        }
    };

    let banners: Vec<String> = SHORTLIST_BANNERS.iter().map(|src| (*src).to_owned()).collect();

    view! {
        <div class="shortlist">
            <BannerSlider
                images=banners.clone()
                interval_ms=SHORTLIST_BANNER_INTERVAL_MS
                direction=SlideDirection::Left
                on_index_change=Callback::new(move |i| primary.set(i))
            />

            <section class="shortlist__card">
                <h2 class="shortlist__title">"My List"</h2>
                <form class="shortlist__form" on:submit=on_add>
                    <input
                        type="email"
                        placeholder="Poster mail"
                        class="shortlist__input"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Card Name"
                        class="shortlist__input"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <button type="submit" class="shortlist__add">"Add Card"</button>
                </form>

                {move || {
                    if loading.get() {
                        return view! { <p class="shortlist__loading">"Loading your list..."</p> }.into_any();
                    }
                    if list.with(Shortlist::is_empty) {
                        return view! { <p class="shortlist__empty">{EMPTY_MESSAGE}</p> }.into_any();
                    }
                    view! {
                        <ul class="shortlist__entries">
                            {list
                                .get()
                                .entries()
                                .iter()
                                .map(|entry| {
                                    let id = entry.id;
                                    view! {
                                        <li class="shortlist__entry">
                                            <div>
                                                <strong class="shortlist__name">{entry.name.clone()}</strong>
                                                " - "
                                                <a
                                                    href=mailto_href(&entry.email)
                                                    class="shortlist__email"
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                >
                                                    {entry.email.clone()}
                                                </a>
                                            </div>
                                            <button class="shortlist__remove" on:click=move |_| on_remove(id)>
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </section>

            <BannerSlider
                images=banners
                interval_ms=SHORTLIST_BANNER_INTERVAL_MS
                direction=SlideDirection::Right
                control_index=Signal::derive(move || follower_index(primary.get(), SHORTLIST_BANNERS.len()))
            />
        </div>
    }
}
