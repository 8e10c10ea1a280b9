//! Networking for the same-origin REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every `/api/*` call the pages make. Wire types are shared with
//! the server through the `research` crate.

pub mod api;
