//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the collaboration surfaces while reading/writing shared
//! state from Leptos context providers.

pub mod cursor_chat;
pub mod design_panel;
pub mod flying_reaction;
pub mod live_cursors;
pub mod live_surface;
pub mod reaction_selector;
