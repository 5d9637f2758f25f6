//! Presence, storage, and event frame handlers extracted from `room_client`.
//!
//! These are pure functions over plain state so the dispatch layer stays a
//! thin browser-only shim.

#[cfg(test)]
#[path = "room_client_apply_test.rs"]
mod room_client_apply_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::consts::DEFAULT_PEER_COLOR;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Point, Presence, ReactionEvent, ShapeObject};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::reactions::ReactionState;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::room::{ConnectionStatus, RoomState};

/// Cursors silent for longer than this are hidden even without an explicit
/// null-cursor update, so a dropped peer doesn't leave a frozen cursor.
#[cfg(any(test, feature = "hydrate"))]
const CURSOR_STALE_MS: i64 = 3000;

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_session_connected(room: &mut RoomState, data: &serde_json::Value) {
    room.connection_status = ConnectionStatus::Connected;
    room.self_client_id = data
        .get("client_id")
        .and_then(|v| v.as_str())
        .map(str::to_owned);
}

/// First streamed shape clears the stale snapshot; each item upserts.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_join_item(room: &mut RoomState, data: &serde_json::Value) {
    if !room.join_streaming {
        room.objects.clear();
        room.join_streaming = true;
    }
    if apply_object_upsert(room, data) {
        room.bump_scene_rev();
    }
}

/// Terminal join frame: adopt the inline snapshot when present, otherwise
/// finish the item stream (clearing stale state if nothing streamed).
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_join_done(room: &mut RoomState, data: &serde_json::Value) {
    if let Some(objects) = data.get("objects").and_then(|v| v.as_array()) {
        room.objects.clear();
        for value in objects {
            if let Ok(shape) = serde_json::from_value::<ShapeObject>(value.clone()) {
                room.objects.insert(shape.id.clone(), shape);
            }
        }
    } else if !room.join_streaming {
        // Empty stream: clear stale data from a prior room snapshot.
        room.objects.clear();
    }
    room.join_streaming = false;
    room.bump_scene_rev();
}

/// Merge a partial presence update: only the keys present in the payload
/// are touched, matching the service's partial-update semantics.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_presence_update(
    room: &mut RoomState,
    from: Option<&str>,
    data: &serde_json::Value,
    ts: i64,
) {
    let Some(client_id) = from.or_else(|| data.get("client_id").and_then(|v| v.as_str())) else {
        return;
    };

    let entry = room
        .presence
        .entry(client_id.to_owned())
        .or_insert_with(|| Presence {
            client_id: client_id.to_owned(),
            name: "Guest".to_owned(),
            color: DEFAULT_PEER_COLOR.to_owned(),
            cursor: None,
            message: None,
        });

    if let Some(name) = data.get("name").and_then(|v| v.as_str()) {
        entry.name = name.to_owned();
    }
    if let Some(color) = data.get("color").and_then(|v| v.as_str()) {
        entry.color = color.to_owned();
    }
    if let Some(cursor) = data.get("cursor") {
        match (cursor.get("x").and_then(|v| v.as_f64()), cursor.get("y").and_then(|v| v.as_f64())) {
            (Some(x), Some(y)) => {
                entry.cursor = Some(Point { x, y });
                room.cursor_updated_at.insert(client_id.to_owned(), ts);
            }
            _ => {
                entry.cursor = None;
                room.cursor_updated_at.remove(client_id);
            }
        }
    }
    if let Some(message) = data.get("message") {
        entry.message = message.as_str().map(str::to_owned);
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_room_part(room: &mut RoomState, data: &serde_json::Value) {
    let Some(client_id) = data.get("client_id").and_then(|v| v.as_str()) else {
        return;
    };
    room.presence.remove(client_id);
    room.cursor_updated_at.remove(client_id);
}

/// Upsert a shape from a storage frame payload. Returns whether the mirror
/// changed.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_object_upsert(room: &mut RoomState, data: &serde_json::Value) -> bool {
    let Ok(shape) = serde_json::from_value::<ShapeObject>(data.clone()) else {
        return false;
    };
    if shape.id.is_empty() {
        return false;
    }
    room.objects.insert(shape.id.clone(), shape);
    true
}

/// Remove a shape from the mirror. Returns whether anything was removed.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_object_delete(room: &mut RoomState, data: &serde_json::Value) -> bool {
    let Some(id) = data.get("id").and_then(|v| v.as_str()) else {
        return false;
    };
    room.objects.remove(id).is_some()
}

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn parse_reaction_event(data: &serde_json::Value) -> Option<ReactionEvent> {
    serde_json::from_value(data.clone()).ok()
}

/// Append a peer broadcast to the reaction buffer, stamped at receipt time.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn spawn_peer_reaction(reactions: &mut ReactionState, event: ReactionEvent, now_ms: f64) {
    reactions.spawn(event.value, Point { x: event.x, y: event.y }, now_ms);
}

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn cleanup_stale_cursors(room: &mut RoomState, now_ts: i64) {
    if now_ts <= 0 {
        return;
    }
    let stale = room
        .cursor_updated_at
        .iter()
        .filter_map(|(id, ts)| (now_ts - *ts > CURSOR_STALE_MS).then_some(id.clone()))
        .collect::<Vec<_>>();
    for id in stale {
        room.cursor_updated_at.remove(&id);
        if let Some(p) = room.presence.get_mut(&id) {
            p.cursor = None;
        }
    }
}
