//! Per-view state containers.
//!
//! DESIGN
//! ======
//! Each page owns its container inside an `RwSignal`; nothing here is a
//! process-wide store. Only `notify` is shared, through context, because the
//! Snackbar is a single slot for the whole app.

pub mod bots;
pub mod notify;
pub mod search;
pub mod whitepapers;
