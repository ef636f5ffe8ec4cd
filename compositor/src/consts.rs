//! Shared numeric and naming constants for the compositor.

/// Application name used in share titles and descriptive text.
pub const APP_NAME: &str = "Savora";

/// Path to the brand logo asset served with the app.
pub const LOGO_ASSET_URL: &str = "/savora-logo.svg";

/// Logo render size as a fraction of the canvas's smaller dimension.
pub const LOGO_SCALE: f64 = 0.2;

/// Lower clamp for the logo anchor, in percent of the photo container.
pub const ANCHOR_MIN_PCT: f64 = 10.0;

/// Upper clamp for the logo anchor, in percent of the photo container.
pub const ANCHOR_MAX_PCT: f64 = 90.0;

/// Initial anchor position: the photo center.
pub const ANCHOR_DEFAULT_PCT: f64 = 50.0;

/// Debounce window coalescing rapid anchor changes into one redraw.
pub const REDRAW_DEBOUNCE_MS: u32 = 100;

/// Filename used when the restaurant name is blank.
pub const FALLBACK_EXPORT_FILENAME: &str = "restaurant-with-logo.png";
