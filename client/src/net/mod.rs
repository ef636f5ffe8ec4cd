//! Networking modules for the Savora REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the OTP and restaurant endpoints, `types` normalizes the
//! backend's loosely-schemaed payloads into display models.

pub mod api;
pub mod types;
