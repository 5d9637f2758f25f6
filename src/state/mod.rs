//! Reactive application state shared through Leptos context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules are plain data types; components wrap them in `RwSignal`s.
//! Keeping them signal-free makes every transition natively testable.

pub mod cursor;
pub mod reactions;
pub mod room;
pub mod ui;
