//! Phone entry page: first step of the OTP login flow.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Keep only digits, drop a leading country code, and cap at the Indian
/// mobile number length.
fn sanitize_phone_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    strip_country_code(&digits).chars().take(10).collect()
}

/// Drop a leading `91` when more digits follow than a plain number holds, so
/// numbers pasted as `+91XXXXXXXXXX` survive. A 10-digit number that happens
/// to start with 91 is left alone.
fn strip_country_code(digits: &str) -> &str {
    if digits.len() > 10 && digits.starts_with("91") { &digits[2..] } else { digits }
}

/// Validate a phone number for submission.
fn validate_phone_input(raw: &str) -> Result<String, &'static str> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let digits = strip_country_code(&digits);
    if digits.len() == 10 {
        Ok(digits.to_owned())
    } else {
        Err("Enter a valid 10-digit mobile number.")
    }
}

/// Phone entry page. Requests an OTP and moves on to verification.
/// Redirects to the restaurant list if a session is already active.
#[component]
pub fn PhonePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let phone = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the flow entirely.
    let navigate_restaurants = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if state.loaded && state.authenticated {
            navigate_restaurants("/restaurants", NavigateOptions::default());
        }
    });

    let on_request_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let phone_value = match validate_phone_input(&phone.get()) {
            Ok(digits) => digits,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending OTP...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_otp(&phone_value).await {
                Ok(()) => {
                    crate::state::session::persist_pending_phone(&phone_value);
                    session.update(|s| s.begin_login(phone_value));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/otp");
                    }
                }
                Err(e) => {
                    info.set(format!("Could not send OTP: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = phone_value;
        }
    };

    view! {
        <div class="phone-page">
            <div class="phone-card">
                <h1>"Savora"</h1>
                <p class="phone-card__subtitle">"Sign in with your mobile number"</p>
                <form class="phone-form" on:submit=on_request_otp>
                    <div class="phone-form__field">
                        <span class="phone-form__dial-code">"+91"</span>
                        <input
                            class="phone-form__input"
                            type="tel"
                            inputmode="numeric"
                            placeholder="10-digit mobile number"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(sanitize_phone_input(&event_target_value(&ev)))
                        />
                    </div>
                    <button class="phone-form__submit" type="submit" disabled=move || busy.get()>
                        "Send OTP"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="phone-card__message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
