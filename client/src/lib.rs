//! TouristBuddy web client.
//!
//! ARCHITECTURE
//! ============
//! A client-side-rendered Leptos app served by the relay server as static
//! files. `pages` own route-level orchestration, `components` render the
//! search surfaces, `net` wraps the server's JSON API, and `util` isolates
//! browser concerns (geolocation) plus the pure helpers the pages share.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;
