use super::*;

#[test]
fn register_endpoint_formats_expected_path() {
    assert_eq!(register_endpoint(), "https://staging.fastor.ai/v1/pwa/user/register");
}

#[test]
fn login_endpoint_formats_expected_path() {
    assert_eq!(login_endpoint(), "https://staging.fastor.ai/v1/pwa/user/login");
}

#[test]
fn restaurants_endpoint_carries_city_id() {
    assert_eq!(
        restaurants_endpoint(118),
        "https://staging.fastor.ai/v1/m/restaurant?city_id=118"
    );
}

#[test]
fn form_encode_escapes_dial_code_plus() {
    assert_eq!(
        form_encode(&[("phone", "9876543210"), ("dial_code", "+91")]),
        "phone=9876543210&dial_code=%2B91"
    );
}

#[test]
fn form_encode_handles_spaces_and_reserved_bytes() {
    assert_eq!(form_encode(&[("q", "a b&c=d")]), "q=a+b%26c%3Dd");
}

#[test]
fn form_encode_escapes_asterisk() {
    assert_eq!(form_encode(&[("q", "a*b")]), "q=a%2Ab");
}

#[test]
fn form_encode_empty_pairs_is_empty() {
    assert_eq!(form_encode(&[]), "");
}

#[test]
fn api_errors_render_actionable_messages() {
    assert_eq!(ApiError::Unauthorized.to_string(), "session expired");
    assert_eq!(
        ApiError::Http { status: 503, message: None }.to_string(),
        "request failed with status 503"
    );
}

#[test]
fn http_error_includes_server_message_when_present() {
    let err = ApiError::Http { status: 400, message: Some("OTP expired".to_owned()) };
    assert_eq!(err.to_string(), "request failed with status 400: OTP expired");
}
