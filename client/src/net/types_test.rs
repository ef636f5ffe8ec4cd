use super::*;
use serde_json::json;

// --- Field priority ---

#[test]
fn name_prefers_restaurant_name_over_name() {
    let entry = json!({ "restaurant_name": "Spice Route", "name": "wrong" });
    assert_eq!(normalize_restaurant(&entry, 0).name, "Spice Route");
}

#[test]
fn blank_values_fall_through_to_next_key() {
    let entry = json!({ "restaurant_name": "   ", "name": "Cafe Blue" });
    assert_eq!(normalize_restaurant(&entry, 0).name, "Cafe Blue");
}

#[test]
fn missing_name_defaults_to_generic_label() {
    let entry = json!({ "id": 7 });
    assert_eq!(normalize_restaurant(&entry, 0).name, "Restaurant");
}

#[test]
fn numeric_fields_render_as_text() {
    let entry = json!({ "rating_value": 4.2, "cost_for_two": 800 });
    let restaurant = normalize_restaurant(&entry, 0);
    assert_eq!(restaurant.rating.as_deref(), Some("4.2"));
    assert_eq!(restaurant.cost_for_two.as_deref(), Some("800"));
}

#[test]
fn id_prefers_restaurant_id_then_id_then_index() {
    assert_eq!(normalize_restaurant(&json!({ "restaurant_id": 12, "id": 3 }), 9).id, "12");
    assert_eq!(normalize_restaurant(&json!({ "id": 3 }), 9).id, "3");
    assert_eq!(normalize_restaurant(&json!({}), 9).id, "9");
}

// --- Images ---

#[test]
fn logo_wins_when_present() {
    let entry = json!({ "logo": "https://cdn/logo.png", "banner_image": "https://cdn/banner.png" });
    assert_eq!(normalize_restaurant(&entry, 0).image_url, "https://cdn/logo.png");
}

#[test]
fn string_null_logo_is_skipped() {
    let entry = json!({ "logo": "null", "banner_image": "https://cdn/banner.png" });
    assert_eq!(normalize_restaurant(&entry, 0).image_url, "https://cdn/banner.png");
}

#[test]
fn image_falls_back_to_placeholder() {
    let entry = json!({ "name": "No Pics" });
    assert_eq!(normalize_restaurant(&entry, 0).image_url, PLACEHOLDER_IMAGE_URL);
}

// --- List shapes ---

#[test]
fn entries_found_under_data_results() {
    let payload = json!({ "data": { "results": [{ "id": 1 }, { "id": 2 }] } });
    assert_eq!(restaurant_entries(&payload).len(), 2);
}

#[test]
fn entries_found_under_data_array() {
    let payload = json!({ "data": [{ "id": 1 }] });
    assert_eq!(restaurant_entries(&payload).len(), 1);
}

#[test]
fn entries_found_at_top_level_array() {
    let payload = json!([{ "id": 1 }, { "id": 2 }, { "id": 3 }]);
    assert_eq!(restaurant_entries(&payload).len(), 3);
}

#[test]
fn entries_found_under_restaurants_key() {
    let payload = json!({ "restaurants": [{ "id": 1 }] });
    assert_eq!(restaurant_entries(&payload).len(), 1);
}

#[test]
fn single_restaurant_object_is_wrapped() {
    let payload = json!({ "restaurant": { "id": 1 } });
    assert_eq!(restaurant_entries(&payload).len(), 1);
}

#[test]
fn unrecognized_shape_yields_empty_list() {
    assert!(restaurant_entries(&json!({ "status": "ok" })).is_empty());
    assert!(restaurant_entries(&json!(null)).is_empty());
}

#[test]
fn normalize_restaurants_assigns_index_ids() {
    let payload = json!({ "data": { "results": [{ "name": "A" }, { "name": "B" }] } });
    let list = normalize_restaurants(&payload);
    assert_eq!(list[0].id, "0");
    assert_eq!(list[1].id, "1");
}

// --- Tokens ---

#[test]
fn token_prefers_nested_data_token() {
    let payload = json!({ "data": { "token": "t1", "access_token": "t2" }, "token": "t3" });
    assert_eq!(extract_token(&payload).as_deref(), Some("t1"));
}

#[test]
fn token_falls_back_through_paths() {
    assert_eq!(
        extract_token(&json!({ "data": { "access_token": "t2" } })).as_deref(),
        Some("t2")
    );
    assert_eq!(extract_token(&json!({ "token": "t3" })).as_deref(), Some("t3"));
    assert_eq!(extract_token(&json!({ "access_token": "t4" })).as_deref(), Some("t4"));
}

#[test]
fn blank_or_missing_token_is_none() {
    assert_eq!(extract_token(&json!({ "data": { "token": "  " } })), None);
    assert_eq!(extract_token(&json!({ "status": "ok" })), None);
}
