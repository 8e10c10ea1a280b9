//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one resource each and report changes upward through
//! callbacks; the owning page decides when to reload.

pub mod alert_dialog;
pub mod bot_item;
pub mod snackbar;
pub mod token_data_view;
pub mod token_details_dialog;
pub mod whitepaper_table;
