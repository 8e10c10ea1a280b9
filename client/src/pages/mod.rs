//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state container and refresh counters and delegates
//! rendering details to `components`.

pub mod bots;
pub mod home;
pub mod whitepapers;
