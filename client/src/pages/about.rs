//! About page (`/contact`) with About, Terms and Contact sections.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::ui::AboutSection;
use crate::util::format::mailto_href;

const TERMS: [(&str, &str); 5] = [
    (
        "General Commitment",
        "We are committed to providing a secure, transparent and trustworthy marketplace for buying and \
         selling scratch cards.",
    ),
    (
        "User Responsibility",
        "Users are responsible for verifying the authenticity and validity of any scratch cards purchased on \
         the platform. Exercise due diligence before completing any transaction.",
    ),
    (
        "Limitation of Liability",
        "We accept no liability for losses or disputes arising from miscommunication between users, fraud by \
         any party, payment issues outside our control, or fake scratch cards.",
    ),
    (
        "Dispute Resolution",
        "Support can help with account issues and transaction disputes, but cannot guarantee resolution of \
         disputes about fraudulent cards or external payment failures.",
    ),
    (
        "User Agreement",
        "By using the platform you accept these terms and take full responsibility for your transactions. \
         Please report suspicious listings immediately.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let selected = RwSignal::new(AboutSection::default());
    let contact_email = config.contact_email;

    let body = move || match selected.get() {
        AboutSection::About => view! {
            <p class="about__text">
                "Anvaya is a " <strong>"secure marketplace"</strong>
                " for buying and selling scratch cards. Sellers post their cards and buyers contact them \
                 directly by email to arrange a purchase. The platform stays out of the transaction and \
                 leaves users in control of it."
            </p>
        }
        .into_any(),
        AboutSection::Terms => view! {
            <ul class="about__terms">
                {TERMS
                    .iter()
                    .map(|(title, text)| {
                        view! {
                            <li>
                                <strong>{*title}</strong>
                                <br/>
                                {*text}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        AboutSection::Contact => view! {
            <p class="about__text">
                "Questions, reports or feedback: "
                <a href=mailto_href(&contact_email)>{contact_email.clone()}</a>
            </p>
        }
        .into_any(),
    };

    view! {
        <main class="about">
            <div class="about__tabs" role="tablist">
                {AboutSection::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="about__tab"
                                class:about__tab--active=move || selected.get() == section
                                aria-selected=move || (selected.get() == section).to_string()
                                on:click=move |_| selected.set(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <section class="about__section">
                <h2 class="about__heading">{move || selected.get().heading()}</h2>
                {body}
            </section>
        </main>
    }
}
