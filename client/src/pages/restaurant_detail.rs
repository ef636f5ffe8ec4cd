//! Restaurant detail page hosting the logo compositor.
//!
//! ARCHITECTURE
//! ============
//! The visible layer is plain DOM: the restaurant photo with the brand logo
//! absolutely positioned over it, driven by [`PointerTracker`]. A hidden
//! canvas holds the full-resolution composite; anchor changes schedule a
//! debounced redraw through [`Compositor`], and the share button exports
//! whatever the canvas currently holds.
//!
//! Pointer events with capture on the photo container cover mouse and touch
//! with one set of handlers. Touch presses anywhere in the container grab
//! the logo; mouse presses must land on the logo itself.

#[cfg(test)]
#[path = "restaurant_detail_test.rs"]
mod restaurant_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

#[cfg(any(test, feature = "hydrate"))]
use compositor::anchor::ContainerBounds;
use compositor::anchor::LogoAnchor;
use compositor::consts::LOGO_ASSET_URL;
use compositor::tracker::PointerTracker;

use crate::net::types::PLACEHOLDER_IMAGE_URL;
use crate::state::restaurants::{RestaurantsState, ensure_restaurants_loaded};
use crate::state::session::SessionState;
use crate::util::guard::install_unauth_redirect;

/// Inline style placing the logo overlay. The translate makes the
/// percentages center-addressed, matching the canvas composite.
fn overlay_style(anchor: LogoAnchor) -> String {
    format!("left: {}%; top: {}%; transform: translate(-50%, -50%);", anchor.x, anchor.y)
}

/// A touch press anywhere on the photo container grabs the logo: the drag
/// starts immediately and the anchor snaps to the press position. Mouse
/// presses only count when they land on the logo itself, which has its own
/// pointerdown handler.
#[cfg(any(test, feature = "hydrate"))]
fn begin_container_press(
    tracker: &mut PointerTracker,
    pointer_type: &str,
    pointer_x: f64,
    pointer_y: f64,
    bounds: Option<ContainerBounds>,
) -> bool {
    if pointer_type != "touch" {
        return false;
    }
    tracker.press_start();
    tracker.pointer_move(pointer_x, pointer_y, bounds);
    true
}

#[cfg(feature = "hydrate")]
fn container_bounds(container: &web_sys::HtmlDivElement) -> ContainerBounds {
    let rect = container.get_bounding_client_rect();
    ContainerBounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

#[component]
pub fn RestaurantDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let restaurants = expect_context::<RwSignal<RestaurantsState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let params = use_params_map();
    let restaurant_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    // Deep links land here before the list has loaded; fetch on demand.
    Effect::new(move || {
        let state = session.get();
        if state.loaded && state.authenticated {
            ensure_restaurants_loaded(session, restaurants);
        }
    });

    let restaurant = Memo::new(move |_| restaurants.get().find(&restaurant_id.get()));

    let tracker = RwSignal::new(PointerTracker::new());
    let photo_failed = RwSignal::new(false);
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Fresh drag state and image fallback whenever the route id changes.
    Effect::new(move || {
        let _ = restaurant_id.get();
        tracker.set(PointerTracker::new());
        photo_failed.set(false);
    });

    let photo_url = Memo::new(move |_| {
        if photo_failed.get() {
            return PLACEHOLDER_IMAGE_URL.to_owned();
        }
        restaurant
            .get()
            .map(|r| r.image_url)
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_owned())
    });

    let on_logo_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(container) = container_ref.get() {
                    let _ = container.set_pointer_capture(ev.pointer_id());
                }
                tracker.update(PointerTracker::press_start);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_container_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let pointer_type = ev.pointer_type();
                if pointer_type != "touch" {
                    return;
                }
                ev.prevent_default();
                if let Some(container) = container_ref.get() {
                    let _ = container.set_pointer_capture(ev.pointer_id());
                }
                let bounds = container_ref.get().map(|el| container_bounds(&el));
                tracker.update(|t| {
                    begin_container_press(
                        t,
                        &pointer_type,
                        f64::from(ev.client_x()),
                        f64::from(ev.client_y()),
                        bounds,
                    );
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_container_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if !tracker.get_untracked().dragging {
                    return;
                }
                let bounds = container_ref.get().map(|el| container_bounds(&el));
                tracker.update(|t| {
                    t.pointer_move(f64::from(ev.client_x()), f64::from(ev.client_y()), bounds);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_container_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if let Some(container) = container_ref.get() {
                    let _ = container.release_pointer_capture(ev.pointer_id());
                }
                tracker.update(PointerTracker::release);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use compositor::consts::REDRAW_DEBOUNCE_MS;
        use compositor::pipeline::Compositor;
        use gloo_timers::callback::Timeout;

        let compositor = Rc::new(RefCell::new(None::<Compositor>));
        let redraw_debounce = Rc::new(RefCell::new(None::<Timeout>));

        let compositor_mount = Rc::clone(&compositor);
        Effect::new(move || {
            if compositor_mount.borrow().is_some() {
                return;
            }
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            *compositor_mount.borrow_mut() = Some(Compositor::new(canvas));
        });

        let compositor_redraw = Rc::clone(&compositor);
        Effect::new(move || {
            let anchor = tracker.get().anchor;
            let photo = photo_url.get();
            let compositor_timer = Rc::clone(&compositor_redraw);
            // Replacing the previous timeout drops and cancels it, so only
            // the last change inside the debounce window draws.
            let timer = Timeout::new(REDRAW_DEBOUNCE_MS, move || {
                if let Some(compositor) = compositor_timer.borrow().as_ref() {
                    compositor.redraw(&photo, LOGO_ASSET_URL, anchor);
                }
            });
            *redraw_debounce.borrow_mut() = Some(timer);
        });
    }

    let on_share = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                let name = restaurant.get_untracked().map(|r| r.name).unwrap_or_default();
                if let Err(err) = compositor::export::export_composite(&canvas, &name) {
                    log::error!("composite export failed: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="detail-page">
            <header class="detail-page__header">
                <a class="detail-page__back" href="/restaurants">
                    "Back"
                </a>
                <h1>{move || restaurant.get().map(|r| r.name).unwrap_or_default()}</h1>
            </header>

            <Show
                when=move || restaurant.get().is_some()
                fallback=move || {
                    view! {
                        <p class="detail-page__loading">
                            {move || {
                                if restaurants.get().loading { "Loading..." } else { "Restaurant not found." }
                            }}
                        </p>
                    }
                }
            >
                <div
                    class="detail-page__composite"
                    node_ref=container_ref
                    on:pointerdown=on_container_pointer_down
                    on:pointermove=on_container_pointer_move
                    on:pointerup=on_container_pointer_up
                >
                    <img
                        class="detail-page__photo"
                        src=move || photo_url.get()
                        alt=move || restaurant.get().map(|r| r.name).unwrap_or_default()
                        draggable="false"
                        on:error=move |_| photo_failed.set(true)
                    />
                    <img
                        class="detail-page__logo"
                        class:detail-page__logo--dragging=move || tracker.get().dragging
                        src=LOGO_ASSET_URL
                        alt="Savora logo"
                        draggable="false"
                        style=move || overlay_style(tracker.get().anchor)
                        on:pointerdown=on_logo_pointer_down
                    />
                </div>
                <p class="detail-page__hint">"Drag the logo to position it, then share."</p>

                <div class="detail-page__info">
                    {move || {
                        restaurant
                            .get()
                            .map(|r| {
                                view! {
                                    {r.address.map(|addr| view! { <p class="detail-page__address">{addr}</p> })}
                                    {r.description.map(|text| view! { <p class="detail-page__description">{text}</p> })}
                                }
                            })
                    }}
                </div>

                <button class="detail-page__share" on:click=on_share>
                    "Share with logo"
                </button>
            </Show>

            // Offscreen export target; sized to the photo's natural pixels
            // by the compositor.
            <canvas class="detail-page__export-canvas" node_ref=canvas_ref aria-hidden="true"></canvas>
        </div>
    }
}
