//! Restaurant inventory state shared by the list and detail pages.

#[cfg(test)]
#[path = "restaurants_test.rs"]
mod restaurants_test;

use leptos::prelude::*;

use crate::net::types::Restaurant;
use crate::state::session::SessionState;

/// Fetched restaurant list plus load status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestaurantsState {
    pub items: Vec<Restaurant>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

impl RestaurantsState {
    /// Look up a restaurant by normalized id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Restaurant> {
        self.items.iter().find(|r| r.id == id).cloned()
    }
}

/// Fetch the restaurant list once per session, no matter which page asks
/// first. A 401 clears the stored credentials so the route guard bounces
/// back to login; other failures land in `error` for a retry button.
pub fn ensure_restaurants_loaded(session: RwSignal<SessionState>, restaurants: RwSignal<RestaurantsState>) {
    let state = restaurants.get_untracked();
    if state.loading || state.loaded {
        return;
    }
    let session_state = session.get_untracked();
    if !session_state.authenticated {
        return;
    }
    let Some(token) = session_state.token else {
        return;
    };
    restaurants.update(|s| {
        s.loading = true;
        s.error = None;
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_restaurants(&token).await {
            Ok(items) => restaurants.update(|s| {
                s.items = items;
                s.loading = false;
                s.loaded = true;
            }),
            Err(crate::net::api::ApiError::Unauthorized) => {
                log::warn!("restaurant fetch rejected; clearing stored session");
                restaurants.update(|s| {
                    s.loading = false;
                    s.error = Some("Session expired. Redirecting to login...".to_owned());
                });
                // Leave the message on screen briefly before the route guard
                // bounces back to the phone page.
                gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                crate::state::session::clear_persisted_credentials();
                session.update(SessionState::clear_credentials);
            }
            Err(err) => restaurants.update(|s| {
                s.loading = false;
                s.error = Some(err.to_string());
            }),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        restaurants.update(|s| s.loading = false);
    }
}
