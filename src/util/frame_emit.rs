//! Shared frame emission helpers.
//!
//! Everything the client publishes travels as one of three frame families,
//! kept narrow so the service can partially apply them:
//!
//! - **presence** — partial updates to the local user's ephemeral state
//!   (cursor point, chat message); peers merge only the keys present.
//! - **event broadcast** — fire-and-forget reaction bursts, never stored
//!   and never replayed to late joiners.
//! - **object upsert** — the serialized shape record persisted into shared
//!   storage after a design-panel mutation.

#[cfg(test)]
#[path = "frame_emit_test.rs"]
mod frame_emit_test;

use leptos::prelude::{GetUntracked, RwSignal};

use crate::app::FrameSender;
use crate::net::types::{Frame, FrameStatus, Point, ShapeObject};

fn presence_update_frame(room_id: &str, data: serde_json::Value) -> Frame {
    Frame {
        id: uuid::Uuid::new_v4().to_string(),
        ts: 0,
        room_id: Some(room_id.to_owned()),
        from: None,
        op: "presence:update".to_owned(),
        status: FrameStatus::Request,
        data,
    }
}

/// Build a partial presence update carrying only the cursor point.
fn cursor_presence_frame(room_id: &str, point: &Point) -> Frame {
    presence_update_frame(
        room_id,
        serde_json::json!({
            "cursor": { "x": point.x, "y": point.y },
        }),
    )
}

/// Build the pointer-leave presence update: cursor and message both null so
/// peers drop the cursor and its chat bubble together.
fn presence_clear_frame(room_id: &str) -> Frame {
    presence_update_frame(
        room_id,
        serde_json::json!({
            "cursor": null,
            "message": null,
        }),
    )
}

/// Build a partial presence update carrying only the chat message.
fn presence_message_frame(room_id: &str, message: &str) -> Frame {
    presence_update_frame(room_id, serde_json::json!({ "message": message }))
}

/// Build an ephemeral reaction broadcast.
fn reaction_broadcast_frame(room_id: &str, x: f64, y: f64, value: &str) -> Frame {
    Frame {
        id: uuid::Uuid::new_v4().to_string(),
        ts: 0,
        room_id: Some(room_id.to_owned()),
        from: None,
        op: "event:broadcast".to_owned(),
        status: FrameStatus::Request,
        data: serde_json::json!({ "x": x, "y": y, "value": value }),
    }
}

/// Build a storage upsert carrying the full serialized shape record.
fn object_upsert_frame(room_id: &str, shape: &ShapeObject) -> Frame {
    Frame {
        id: uuid::Uuid::new_v4().to_string(),
        ts: 0,
        room_id: Some(room_id.to_owned()),
        from: None,
        op: "object:upsert".to_owned(),
        status: FrameStatus::Request,
        data: serde_json::json!({
            "id": shape.id,
            "kind": shape.kind,
            "attrs": shape.attrs,
        }),
    }
}

/// Publish the local cursor position.
pub fn send_cursor_presence(sender: RwSignal<FrameSender>, room_id: &str, point: &Point) {
    let frame = cursor_presence_frame(room_id, point);
    let _ = sender.get_untracked().send(&frame);
}

/// Publish the pointer-leave clear (cursor and message to null).
pub fn send_presence_clear(sender: RwSignal<FrameSender>, room_id: &str) {
    let frame = presence_clear_frame(room_id);
    let _ = sender.get_untracked().send(&frame);
}

/// Publish the current chat message (empty string clears the bubble text
/// without hiding the cursor).
pub fn send_presence_message(sender: RwSignal<FrameSender>, room_id: &str, message: &str) {
    let frame = presence_message_frame(room_id, message);
    let _ = sender.get_untracked().send(&frame);
}

/// Broadcast one reaction burst to all connected peers.
pub fn send_reaction_broadcast(sender: RwSignal<FrameSender>, room_id: &str, x: f64, y: f64, value: &str) {
    let frame = reaction_broadcast_frame(room_id, x, y, value);
    let _ = sender.get_untracked().send(&frame);
}

/// Persist a serialized shape record into shared storage.
pub fn send_object_upsert(sender: RwSignal<FrameSender>, room_id: &str, shape: &ShapeObject) {
    let frame = object_upsert_frame(room_id, shape);
    let _ = sender.get_untracked().send(&frame);
}
