//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The auth flow runs phone -> otp -> restaurants; the
//! detail page hosts the logo compositor.

pub mod otp;
pub mod phone;
pub mod restaurant_detail;
pub mod restaurants;
