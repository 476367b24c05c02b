//! Server API access.

pub mod api;
pub mod types;
