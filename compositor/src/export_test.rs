use super::*;

// --- Filenames ---

#[test]
fn filename_appends_suffix_to_name() {
    assert_eq!(composite_filename("Spice Route"), "Spice Route-with-logo.png");
}

#[test]
fn filename_for_blank_name_uses_fallback() {
    assert_eq!(composite_filename(""), "restaurant-with-logo.png");
    assert_eq!(composite_filename("   "), "restaurant-with-logo.png");
}

#[test]
fn filename_sanitizes_path_separators() {
    assert_eq!(composite_filename("Fish / Chips"), "Fish - Chips-with-logo.png");
    assert_eq!(composite_filename(r"back\slash"), "back-slash-with-logo.png");
}

#[test]
fn filename_trims_surrounding_whitespace() {
    assert_eq!(composite_filename("  Cafe Blue  "), "Cafe Blue-with-logo.png");
}

// --- Share metadata ---

#[test]
fn share_title_brands_the_restaurant() {
    assert_eq!(share_title("Cafe Blue"), "Cafe Blue - Savora");
}

#[test]
fn share_text_mentions_the_restaurant() {
    assert_eq!(share_text("Cafe Blue"), "Check out Cafe Blue on Savora!");
}
