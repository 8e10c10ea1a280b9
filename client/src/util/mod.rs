//! Browser helpers shared by pages and components.

pub mod download;
pub mod lifecycle;
