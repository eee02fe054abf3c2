//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth provider is an opaque external service. `App` asks it for the
//! current identity once after hydration; the auth gate and the navigation
//! shell render from this state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Which part of the auth gate is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthGate {
    Loading,
    SignedOut,
    SignedIn,
}

impl AuthState {
    pub fn gate(&self) -> AuthGate {
        match (self.loading, self.user.is_some()) {
            (_, true) => AuthGate::SignedIn,
            (true, false) => AuthGate::Loading,
            (false, false) => AuthGate::SignedOut,
        }
    }

    /// Navigation label for the signed-in identity.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| "User".to_owned(), |u| u.display_name().to_owned())
    }
}

/// Signed-out panel mode: sign in (default) or create an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPanel {
    #[default]
    SignIn,
    SignUp,
}

impl AuthPanel {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Please sign in",
            Self::SignUp => "Create an account",
        }
    }

    /// Prompt and link label for switching to the other mode.
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::SignIn => ("Don't have an account?", "Sign Up"),
            Self::SignUp => ("Already have an account?", "Sign In"),
        }
    }
}
