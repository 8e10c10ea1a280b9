//! Data models and display-shaping helpers for the token research dashboard.
//!
//! This crate is UI-framework agnostic so the axum host and the Leptos client
//! consume the same wire types and the same rendering rules.
//!
//! LAYOUT
//! ======
//! `wire` holds the envelopes shared by every upstream call, `bots`,
//! `whitepapers` and `tokens` hold one resource each, and `format` holds the
//! number/date presentation used across views.

pub mod bots;
pub mod format;
pub mod tokens;
pub mod whitepapers;
pub mod wire;
