//! Room-session state for the active whiteboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model stores the local projection of one joined room: peer presence
//! and the resolved shared shape map. The service owns conflict resolution;
//! this mirror only ever reflects resolved state.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use std::collections::HashMap;

use crate::net::types::{Presence, ShapeObject};

/// Room-level state: connection, identity, peer presence, and the shape map.
#[derive(Clone, Debug, Default)]
pub struct RoomState {
    /// ID of the currently joined room.
    pub room_id: Option<String>,
    /// Websocket client ID assigned to this local session.
    pub self_client_id: Option<String>,
    /// Current websocket connection lifecycle state.
    pub connection_status: ConnectionStatus,
    /// Peer presence keyed by client ID; never contains the local client.
    pub presence: HashMap<String, Presence>,
    /// Timestamp of the last cursor update received per client ID.
    pub cursor_updated_at: HashMap<String, i64>,
    /// Shared shape map mirror keyed by object ID.
    pub objects: HashMap<String, ShapeObject>,
    /// True while the initial `room:join` object stream is still in flight.
    pub join_streaming: bool,
    /// Monotonic counter bumped whenever `objects` changes, so the scene
    /// bridge can resync without diffing the whole map.
    pub scene_rev: u64,
}

impl RoomState {
    /// Mark the shape map as changed for the scene bridge.
    pub fn bump_scene_rev(&mut self) {
        self.scene_rev = self.scene_rev.wrapping_add(1);
    }

    /// Drop everything scoped to the joined room, keeping the websocket
    /// session identity (`self_client_id`) intact.
    pub fn reset_room_scope(&mut self) {
        self.room_id = None;
        self.presence.clear();
        self.cursor_updated_at.clear();
        self.objects.clear();
        self.join_streaming = false;
        self.bump_scene_rev();
    }
}

/// Websocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// Websocket handshake is in progress.
    Connecting,
    /// Websocket is open and the service sent `session:connected`.
    Connected,
}
