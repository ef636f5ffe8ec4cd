//! OTP verification page: six digit boxes with focus management and a
//! resend countdown.

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Number of OTP digit boxes.
pub const OTP_LENGTH: usize = 6;

/// Seconds before the resend button unlocks again.
pub const RESEND_INTERVAL_SECS: u32 = 60;

/// Most recent digit typed into a box, if any. Mobile keyboards can report
/// the whole box value on input, so the last digit wins.
fn sanitize_digit(raw: &str) -> Option<char> {
    raw.chars().rev().find(char::is_ascii_digit)
}

/// Digits distributed across the boxes when a code is pasted.
fn paste_digits(text: &str) -> Vec<char> {
    text.chars().filter(char::is_ascii_digit).take(OTP_LENGTH).collect()
}

fn combined_code(digits: &[String]) -> String {
    digits.concat()
}

fn code_complete(code: &str) -> bool {
    code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

/// Whether the resend button may fire: the countdown must have run out and
/// no verification may be in flight.
fn can_resend(remaining_secs: u32, busy: bool) -> bool {
    remaining_secs == 0 && !busy
}

/// OTP verification page. Verifies the code for the pending phone number and
/// establishes the session on success.
#[component]
pub fn OtpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let digits: [RwSignal<String>; OTP_LENGTH] = std::array::from_fn(|_| RwSignal::new(String::new()));
    let inputs: [NodeRef<leptos::html::Input>; OTP_LENGTH] = std::array::from_fn(|_| NodeRef::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let resend_remaining = RwSignal::new(RESEND_INTERVAL_SECS);

    // Nothing to verify without a pending phone; already-verified sessions
    // skip ahead.
    Effect::new(move || {
        let state = session.get();
        if !state.loaded {
            return;
        }
        if state.authenticated {
            navigate("/restaurants", NavigateOptions::default());
        } else if state.pending_phone.is_none() {
            navigate("/", NavigateOptions::default());
        }
    });

    // Resend countdown, one tick per second while the page is mounted.
    #[cfg(feature = "hydrate")]
    {
        let tick_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let tick_alive_task = tick_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !tick_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if resend_remaining.get_untracked() > 0 {
                    resend_remaining.update(|r| *r -= 1);
                }
            }
        });
        on_cleanup(move || tick_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let verify = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let code = combined_code(&digits.map(|d| d.get_untracked()));
        if !code_complete(&code) {
            info.set("Enter the 6-digit OTP.".to_owned());
            return;
        }
        let Some(phone_value) = session.get_untracked().pending_phone else {
            return;
        };
        busy.set(true);
        info.set("Verifying...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_otp(&phone_value, &code).await {
                Ok(token) => {
                    crate::state::session::persist_login(&token);
                    session.update(|s| s.complete_login(token));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/restaurants");
                    }
                }
                Err(e) => {
                    info.set(format!("Verification failed: {e}"));
                    busy.set(false);
                    // Wrong code: start the entry over.
                    for signal in digits {
                        signal.set(String::new());
                    }
                    if let Some(first) = inputs[0].get() {
                        let _ = first.focus();
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (phone_value, code);
        }
    });

    let on_resend = move |_| {
        if !can_resend(resend_remaining.get(), busy.get()) {
            return;
        }
        let Some(phone_value) = session.get_untracked().pending_phone else {
            return;
        };
        resend_remaining.set(RESEND_INTERVAL_SECS);
        info.set("Resending OTP...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_otp(&phone_value).await {
                Ok(()) => info.set("OTP sent again.".to_owned()),
                Err(e) => info.set(format!("Could not resend OTP: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = phone_value;
        }
    };

    let boxes = (0..OTP_LENGTH)
        .map(|index| {
            let digit = digits[index];
            view! {
                <input
                    class="otp-form__box"
                    type="text"
                    inputmode="numeric"
                    maxlength="1"
                    node_ref=inputs[index]
                    prop:value=move || digit.get()
                    on:input=move |ev| {
                        match sanitize_digit(&event_target_value(&ev)) {
                            Some(d) => {
                                digit.set(d.to_string());
                                if index + 1 < OTP_LENGTH {
                                    if let Some(next) = inputs[index + 1].get() {
                                        let _ = next.focus();
                                    }
                                } else {
                                    verify.run(());
                                }
                            }
                            None => digit.set(String::new()),
                        }
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Backspace" && digit.get_untracked().is_empty() && index > 0 {
                            ev.prevent_default();
                            digits[index - 1].set(String::new());
                            if let Some(prev) = inputs[index - 1].get() {
                                let _ = prev.focus();
                            }
                        }
                    }
                    on:paste=move |ev: leptos::ev::ClipboardEvent| {
                        ev.prevent_default();
                        let Some(data) = ev.clipboard_data() else {
                            return;
                        };
                        let Ok(text) = data.get_data("text") else {
                            return;
                        };
                        let pasted = paste_digits(&text);
                        if pasted.is_empty() {
                            return;
                        }
                        for (i, signal) in digits.iter().enumerate() {
                            signal.set(pasted.get(i).map(ToString::to_string).unwrap_or_default());
                        }
                        if let Some(last) = inputs[pasted.len().min(OTP_LENGTH - 1)].get() {
                            let _ = last.focus();
                        }
                        if pasted.len() == OTP_LENGTH {
                            verify.run(());
                        }
                    }
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="otp-page">
            <div class="otp-card">
                <h1>"Verify OTP"</h1>
                <p class="otp-card__subtitle">
                    "Sent to +91 "
                    <span>{move || session.get().pending_phone.unwrap_or_default()}</span>
                </p>
                <form
                    class="otp-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        verify.run(());
                    }
                >
                    <div class="otp-form__boxes">{boxes}</div>
                    <button class="otp-form__submit" type="submit" disabled=move || busy.get()>
                        "Verify"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="otp-card__message">{move || info.get()}</p>
                </Show>
                <button
                    class="otp-card__resend"
                    on:click=on_resend
                    disabled=move || resend_remaining.get() > 0
                >
                    {move || {
                        let remaining = resend_remaining.get();
                        if remaining > 0 {
                            format!("Resend OTP in {remaining}s")
                        } else {
                            "Resend OTP".to_owned()
                        }
                    }}
                </button>
                <a class="otp-card__change" href="/">"Change number"</a>
            </div>
        </div>
    }
}
