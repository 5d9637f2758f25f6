//! Shared wire-protocol DTOs for the client/service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the room service payloads so serde round-trips stay
//! lossless and websocket dispatch code can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use wire::Frame;
pub use wire::Status as FrameStatus;

/// A 2D point in surface coordinates (pixels relative to the live surface).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Presence information for a connected peer in the room.
///
/// Every field except `client_id` is ephemeral and partially updated: a
/// `presence:update` frame may carry any subset of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    /// Websocket client identifier assigned by the service.
    pub client_id: String,
    /// Display name.
    pub name: String,
    /// Assigned presence color (hex).
    pub color: String,
    /// Last known cursor position on the surface, if visible.
    pub cursor: Option<Point>,
    /// Cursor chat message currently shown next to the cursor, if any.
    pub message: Option<String>,
}

/// A shape as serialized by the rendering library for shared storage.
///
/// The attribute record is owned by the rendering library; this client
/// relays it opaquely and only reads individual attributes to seed the
/// design panel drafts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeObject {
    /// Unique object identifier (UUID string).
    pub id: String,
    /// Shape type (e.g. `"rectangle"`, `"text"`).
    pub kind: String,
    /// Open-ended attribute record (dimensions, fill, stroke, font, ...).
    #[serde(default)]
    pub attrs: serde_json::Value,
}

impl ShapeObject {
    /// Read a string attribute from the serialized record.
    #[must_use]
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(serde_json::Value::as_str)
    }

    /// Read a numeric attribute from the serialized record.
    #[must_use]
    pub fn attr_f64(&self, key: &str) -> Option<f64> {
        self.attrs.get(key).and_then(serde_json::Value::as_f64)
    }
}

/// Payload of an ephemeral reaction broadcast: a point plus the emoji symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReactionEvent {
    /// Horizontal coordinate on the sender's surface.
    pub x: f64,
    /// Vertical coordinate on the sender's surface.
    pub y: f64,
    /// Emoji symbol.
    pub value: String,
}
