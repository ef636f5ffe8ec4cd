//! Composite-image engine for the restaurant detail screen.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the branded composite: translating raw pointer input into
//! a clamped logo anchor, loading the restaurant photo and logo assets,
//! drawing both onto an offscreen canvas at the photo's native resolution,
//! and exporting the result as a shareable/downloadable PNG. The host UI
//! layer is responsible only for wiring DOM events to the tracker and
//! scheduling redraws.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`anchor`] | Logo anchor position model and layout math |
//! | [`tracker`] | Pointer-drag state machine shared by mouse and touch |
//! | [`pipeline`] | Redraw pipeline with generation-token staleness checks |
//! | [`render`] | Canvas drawing (the only module touching the 2D context) |
//! | [`export`] | PNG export via native share with download fallback |
//! | [`consts`] | Shared constants (clamp bounds, logo scale, app name) |

pub mod anchor;
pub mod consts;
pub mod export;
pub mod pipeline;
pub mod render;
pub mod tracker;
