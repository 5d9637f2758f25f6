//! Networking modules for the realtime room protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `room_client` manages the websocket lifecycle and `types` defines the
//! shared wire schema mirrored into local state.

pub mod room_client;
pub mod types;
