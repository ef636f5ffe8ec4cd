//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Redirect to the phone entry page whenever the session has loaded and the
/// user is not authenticated. Waiting for `loaded` avoids bouncing users who
/// have a valid persisted token that has not been read yet.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if state.loaded && !state.authenticated {
            navigate("/", NavigateOptions::default());
        }
    });
}
