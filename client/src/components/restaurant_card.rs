//! Reusable card component for restaurant list items.
//!
//! DESIGN
//! ======
//! Keeps list presentation consistent while centralizing the image fallback
//! and the metadata line so the list page stays declarative.

#[cfg(test)]
#[path = "restaurant_card_test.rs"]
mod restaurant_card_test;

use leptos::prelude::*;

use crate::net::types::{PLACEHOLDER_IMAGE_URL, Restaurant};

/// One " · "-joined line of cuisine, rating, and cost-for-two, skipping
/// whatever the payload did not provide.
fn card_meta(restaurant: &Restaurant) -> String {
    let mut parts = Vec::new();
    if let Some(cuisine) = &restaurant.cuisine {
        parts.push(cuisine.clone());
    }
    if let Some(rating) = &restaurant.rating {
        parts.push(format!("★ {rating}"));
    }
    if let Some(cost) = &restaurant.cost_for_two {
        parts.push(format!("₹{cost} for two"));
    }
    parts.join(" · ")
}

/// A clickable card linking to a restaurant's detail page.
#[component]
pub fn RestaurantCard(restaurant: Restaurant) -> impl IntoView {
    let href = format!("/restaurant/{}", restaurant.id);
    let meta = card_meta(&restaurant);
    let offers_label = restaurant.offers.as_ref().map(|o| format!("{o} offers"));
    let address = restaurant.address.clone();
    let alt = restaurant.name.clone();

    // Broken image URLs degrade to the placeholder instead of a torn layout.
    let image_failed = RwSignal::new(false);
    let image_url = restaurant.image_url.clone();
    let shown_image = move || {
        if image_failed.get() {
            PLACEHOLDER_IMAGE_URL.to_owned()
        } else {
            image_url.clone()
        }
    };

    view! {
        <a class="restaurant-card" href=href>
            <span class="restaurant-card__media">
                <img
                    class="restaurant-card__photo"
                    src=shown_image
                    alt=alt
                    loading="lazy"
                    on:error=move |_| image_failed.set(true)
                />
                {offers_label.map(|label| view! { <span class="restaurant-card__offers">{label}</span> })}
            </span>
            <span class="restaurant-card__body">
                <span class="restaurant-card__name">{restaurant.name.clone()}</span>
                {address.map(|addr| view! { <span class="restaurant-card__address">{addr}</span> })}
                {(!meta.is_empty()).then(|| view! { <span class="restaurant-card__meta">{meta.clone()}</span> })}
            </span>
        </a>
    }
}
