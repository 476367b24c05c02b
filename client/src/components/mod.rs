//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the search surfaces shared by the chat page while the
//! page keeps location and transcript state.

pub mod greeting_panel;
pub mod location_status;
pub mod search_bar;
pub mod search_results;
pub mod search_suggestions;
