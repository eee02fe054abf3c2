//! Signed-out landing panel linking to the provider's hosted auth pages.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::auth::AuthPanel;

#[component]
pub fn AuthPanelView() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let panel = RwSignal::new(AuthPanel::default());
    let sign_in_url = config.auth_sign_in_url();
    let sign_up_url = config.auth_sign_up_url();

    let href = move || match panel.get() {
        AuthPanel::SignIn => sign_in_url.clone(),
        AuthPanel::SignUp => sign_up_url.clone(),
    };
    let action = move || match panel.get() {
        AuthPanel::SignIn => "Sign in",
        AuthPanel::SignUp => "Sign up",
    };

    view! {
        <main class="auth-panel">
            <h2 class="auth-panel__title">{move || panel.get().heading()}</h2>
            <a class="auth-panel__button" href=href>
                {action}
            </a>
            <div class="auth-panel__switch">
                {move || panel.get().switch_prompt().0}
                " "
                <button
                    type="button"
                    class="auth-panel__toggle"
                    on:click=move |_| panel.update(|p| *p = p.toggled())
                >
                    {move || panel.get().switch_prompt().1}
                </button>
            </div>
        </main>
    }
}
