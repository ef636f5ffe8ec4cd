use super::*;

// --- Digit sanitizing ---

#[test]
fn sanitize_digit_takes_last_typed_digit() {
    assert_eq!(sanitize_digit("7"), Some('7'));
    assert_eq!(sanitize_digit("79"), Some('9'));
}

#[test]
fn sanitize_digit_ignores_non_digits() {
    assert_eq!(sanitize_digit("a"), None);
    assert_eq!(sanitize_digit(""), None);
    assert_eq!(sanitize_digit("7a"), Some('7'));
}

// --- Paste distribution ---

#[test]
fn paste_digits_extracts_up_to_six() {
    assert_eq!(paste_digits("123456"), vec!['1', '2', '3', '4', '5', '6']);
    assert_eq!(paste_digits("12345678"), vec!['1', '2', '3', '4', '5', '6']);
}

#[test]
fn paste_digits_skips_separators() {
    assert_eq!(paste_digits("12-34 56"), vec!['1', '2', '3', '4', '5', '6']);
}

#[test]
fn paste_digits_of_plain_text_is_empty() {
    assert!(paste_digits("hello").is_empty());
}

// --- Code assembly ---

#[test]
fn combined_code_joins_boxes_in_order() {
    let boxes: Vec<String> = ["1", "2", "3", "4", "5", "6"].iter().map(|s| (*s).to_owned()).collect();
    assert_eq!(combined_code(&boxes), "123456");
}

#[test]
fn code_complete_requires_six_digits() {
    assert!(code_complete("123456"));
    assert!(!code_complete("12345"));
    assert!(!code_complete("12345a"));
    assert!(!code_complete(""));
}

// --- Resend gating ---

#[test]
fn resend_locks_until_countdown_runs_out() {
    assert!(!can_resend(RESEND_INTERVAL_SECS, false));
    assert!(!can_resend(1, false));
    assert!(can_resend(0, false));
}

#[test]
fn resend_locks_while_verification_is_in_flight() {
    assert!(!can_resend(0, true));
}

#[test]
fn resend_countdown_restarts_from_sixty_seconds() {
    // The reset value the resend handler arms the countdown with.
    assert_eq!(RESEND_INTERVAL_SECS, 60);
    assert!(!can_resend(RESEND_INTERVAL_SECS, false));
}
