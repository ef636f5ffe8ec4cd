//! Restaurant list page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests the restaurant inventory once the session is confirmed and
//! renders it as a card grid. Fetch failures keep the page usable: auth
//! failures bounce to login via the route guard, everything else gets a
//! retry button.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::restaurant_card::RestaurantCard;
use crate::state::restaurants::{RestaurantsState, ensure_restaurants_loaded};
use crate::state::session::{self, SessionState};
use crate::util::guard::install_unauth_redirect;

#[component]
pub fn RestaurantsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let restaurants = expect_context::<RwSignal<RestaurantsState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    Effect::new(move || {
        let state = session.get();
        if state.loaded && state.authenticated {
            ensure_restaurants_loaded(session, restaurants);
        }
    });

    let on_retry = move |_| {
        restaurants.update(|s| {
            s.error = None;
            s.loaded = false;
        });
        ensure_restaurants_loaded(session, restaurants);
    };

    let on_logout = move |_| {
        session::clear_persisted_credentials();
        session.update(SessionState::clear_credentials);
        restaurants.set(RestaurantsState::default());
    };

    view! {
        <div class="restaurants-page">
            <header class="restaurants-page__header">
                <h1>"Restaurants"</h1>
                <button class="restaurants-page__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <Show when=move || restaurants.get().error.is_some()>
                <div class="restaurants-page__error">
                    <p>{move || restaurants.get().error.unwrap_or_default()}</p>
                    <button class="restaurants-page__retry" on:click=on_retry>
                        "Retry"
                    </button>
                </div>
            </Show>

            <Show
                when=move || !restaurants.get().loading
                fallback=move || view! { <p class="restaurants-page__loading">"Loading restaurants..."</p> }
            >
                <div class="restaurants-page__cards">
                    {move || {
                        restaurants
                            .get()
                            .items
                            .into_iter()
                            .map(|restaurant| view! { <RestaurantCard restaurant=restaurant/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <Show when=move || restaurants.get().loaded && restaurants.get().items.is_empty()>
                    <p class="restaurants-page__empty">"No restaurants found."</p>
                </Show>
            </Show>
        </div>
    }
}
