//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `restaurants`) so individual pages
//! can depend on small focused models provided via context.

pub mod restaurants;
pub mod session;
