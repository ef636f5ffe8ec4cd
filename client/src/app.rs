//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    otp::OtpPage, phone::PhonePage, restaurant_detail::RestaurantDetailPage, restaurants::RestaurantsPage,
};
use crate::state::restaurants::RestaurantsState;
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and restaurant contexts and sets up client-side
/// routing. The persisted session is loaded in an effect so it only runs in
/// the browser; until then `SessionState::loaded` stays false and route
/// guards hold off.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let restaurants = RwSignal::new(RestaurantsState::default());

    provide_context(session);
    provide_context(restaurants);

    Effect::new(move || {
        if session.get_untracked().loaded {
            return;
        }
        session.set(session::load_from_storage());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/savora.css"/>
        <Title text="Savora"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PhonePage/>
                <Route path=StaticSegment("otp") view=OtpPage/>
                <Route path=StaticSegment("restaurants") view=RestaurantsPage/>
                <Route path=(StaticSegment("restaurant"), ParamSegment("id")) view=RestaurantDetailPage/>
            </Routes>
        </Router>
    }
}
