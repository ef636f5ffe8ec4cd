//! Payload normalization for the restaurant API.
//!
//! DESIGN
//! ======
//! The backend's restaurant schema drifts across deployments: display fields
//! appear under several alternative keys, list payloads arrive in at least
//! four nesting shapes, and numeric fields come back as numbers or strings.
//! Normalization is table-driven: each display field has an ordered
//! key-priority list and the first usable value wins, so schema drift stays
//! confined to this module.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde_json::Value;

/// Shown when a restaurant payload carries no usable image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/800x600?text=Restaurant";

const ID_FIELDS: &[&str] = &["restaurant_id", "id"];
const NAME_FIELDS: &[&str] = &["restaurant_name", "name"];
const ADDRESS_FIELDS: &[&str] = &["address_complete", "location", "address"];
const IMAGE_FIELDS: &[&str] = &["banner_image", "image_url", "image"];
const CUISINE_FIELDS: &[&str] = &["cuisine_type", "cuisine", "category"];
const RATING_FIELDS: &[&str] = &["rating_value", "rating"];
const OFFER_FIELDS: &[&str] = &["offers_count", "offers"];
const COST_FIELDS: &[&str] = &["cost_for_two", "costForTwo", "price_range"];
const DESCRIPTION_FIELDS: &[&str] = &["description", "about"];

/// Token locations tried in order on a successful OTP verification.
const TOKEN_PATHS: &[&[&str]] = &[
    &["data", "token"],
    &["data", "access_token"],
    &["token"],
    &["access_token"],
];

/// A restaurant normalized for display.
#[derive(Clone, Debug, PartialEq)]
pub struct Restaurant {
    /// Stable identifier; falls back to the list index when the payload
    /// carries no id field.
    pub id: String,
    pub name: String,
    /// Always usable: falls back to [`PLACEHOLDER_IMAGE_URL`].
    pub image_url: String,
    pub address: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<String>,
    pub offers: Option<String>,
    pub cost_for_two: Option<String>,
    pub description: Option<String>,
}

/// First usable value among `keys`, as display text.
///
/// Strings must be non-blank and not the literal `"null"` (the backend
/// serializes missing logos that way). Numbers are rendered as-is.
fn field_text(entry: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        match entry.get(key) {
            Some(Value::String(raw)) => {
                let trimmed = raw.trim();
                if !trimmed.is_empty() && trimmed != "null" {
                    return Some(trimmed.to_owned());
                }
            }
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// Image priority: an explicit `logo` wins, then the banner/image table,
/// then the placeholder.
fn image_url(entry: &Value) -> String {
    if let Some(logo) = field_text(entry, &["logo"]) {
        return logo;
    }
    field_text(entry, IMAGE_FIELDS).unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_owned())
}

/// Normalize a single restaurant entry. `fallback_index` becomes the id when
/// no id field is present so list rendering and detail routing stay stable.
#[must_use]
pub fn normalize_restaurant(entry: &Value, fallback_index: usize) -> Restaurant {
    Restaurant {
        id: field_text(entry, ID_FIELDS).unwrap_or_else(|| fallback_index.to_string()),
        name: field_text(entry, NAME_FIELDS).unwrap_or_else(|| "Restaurant".to_owned()),
        image_url: image_url(entry),
        address: field_text(entry, ADDRESS_FIELDS),
        cuisine: field_text(entry, CUISINE_FIELDS),
        rating: field_text(entry, RATING_FIELDS),
        offers: field_text(entry, OFFER_FIELDS),
        cost_for_two: field_text(entry, COST_FIELDS),
        description: field_text(entry, DESCRIPTION_FIELDS),
    }
}

/// Locate the restaurant array inside a list payload.
///
/// Probes, in order: `data.results`, `data` as an array, the payload itself
/// as an array, `restaurants`, and finally `restaurant` (array or single
/// object). Unrecognized shapes yield an empty list rather than an error.
#[must_use]
pub fn restaurant_entries(payload: &Value) -> Vec<Value> {
    if let Some(Value::Array(items)) = payload.pointer("/data/results") {
        return items.clone();
    }
    if let Some(Value::Array(items)) = payload.get("data") {
        return items.clone();
    }
    if let Value::Array(items) = payload {
        return items.clone();
    }
    if let Some(Value::Array(items)) = payload.get("restaurants") {
        return items.clone();
    }
    match payload.get("restaurant") {
        Some(Value::Array(items)) => items.clone(),
        Some(entry @ Value::Object(_)) => vec![entry.clone()],
        _ => Vec::new(),
    }
}

/// Normalize a full list payload into display models.
#[must_use]
pub fn normalize_restaurants(payload: &Value) -> Vec<Restaurant> {
    restaurant_entries(payload)
        .iter()
        .enumerate()
        .map(|(index, entry)| normalize_restaurant(entry, index))
        .collect()
}

/// Pull the session token out of a verification response, trying each of
/// [`TOKEN_PATHS`] in order.
#[must_use]
pub fn extract_token(payload: &Value) -> Option<String> {
    for path in TOKEN_PATHS {
        let mut cursor = payload;
        let mut matched = true;
        for key in *path {
            match cursor.get(key) {
                Some(next) => cursor = next,
                None => {
                    matched = false;
                    break;
                }
            }
        }
        if !matched {
            continue;
        }
        if let Value::String(token) = cursor {
            if !token.trim().is_empty() {
                return Some(token.clone());
            }
        }
    }
    None
}
