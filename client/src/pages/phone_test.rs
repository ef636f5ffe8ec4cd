use super::*;

#[test]
fn sanitize_strips_non_digits() {
    assert_eq!(sanitize_phone_input("98-76 54x321a0"), "9876543210");
}

#[test]
fn sanitize_caps_at_ten_digits() {
    assert_eq!(sanitize_phone_input("987654321098"), "9876543210");
}

#[test]
fn sanitize_strips_pasted_country_code() {
    assert_eq!(sanitize_phone_input("+919876543210"), "9876543210");
    assert_eq!(sanitize_phone_input("91 98765 43210"), "9876543210");
}

#[test]
fn ten_digit_number_starting_with_91_is_kept() {
    assert_eq!(sanitize_phone_input("9198765432"), "9198765432");
    assert_eq!(validate_phone_input("9198765432"), Ok("9198765432".to_owned()));
}

#[test]
fn validate_accepts_exactly_ten_digits() {
    assert_eq!(validate_phone_input("9876543210"), Ok("9876543210".to_owned()));
    assert_eq!(validate_phone_input("98765 43210"), Ok("9876543210".to_owned()));
    assert_eq!(validate_phone_input("+91 98765-43210"), Ok("9876543210".to_owned()));
}

#[test]
fn validate_rejects_short_and_long_numbers() {
    assert_eq!(validate_phone_input("987654321"), Err("Enter a valid 10-digit mobile number."));
    assert_eq!(
        validate_phone_input("98765432100"),
        Err("Enter a valid 10-digit mobile number.")
    );
    assert_eq!(validate_phone_input(""), Err("Enter a valid 10-digit mobile number."));
}
