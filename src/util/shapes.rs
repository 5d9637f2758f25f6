//! Shape mutation relay between the design panel, the rendering library,
//! and shared storage.
//!
//! ARCHITECTURE
//! ============
//! A panel edit flows one way: mark editing → apply via the rendering
//! library → mirror the serialized result locally → persist to storage so
//! peers converge. No property/value validation happens here; the rendering
//! library rejects or clamps invalid values.

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::app::FrameSender;
use crate::net::types::ShapeObject;
use crate::scene::SceneHandle;
use crate::state::room::RoomState;
use crate::state::ui::UiState;
use crate::util::frame_emit::send_object_upsert;

/// Mark a panel edit in progress and update the backing draft, so remote
/// storage echoes don't overwrite what the user is typing.
pub fn begin_edit(ui: &mut UiState, property: &str, value: &str) {
    ui.is_editing = true;
    ui.attributes.set_property(property, value);
}

/// Mirror a freshly mutated shape into the local storage view.
///
/// The scene already reflects the mutation (it produced the record), so the
/// scene revision is deliberately not bumped; peers converge through the
/// service echo instead.
pub fn mirror_updated_shape(room: &mut RoomState, updated: &ShapeObject) {
    room.objects.insert(updated.id.clone(), updated.clone());
}

/// Relay one `(property, value)` edit from a design-panel control.
pub fn relay_shape_edit(
    scene: &SceneHandle,
    room: RwSignal<RoomState>,
    ui: RwSignal<UiState>,
    sender: RwSignal<FrameSender>,
    property: &str,
    value: &str,
) {
    ui.update(|u| begin_edit(u, property, value));

    let Some(updated) = scene.with(|s| s.modify_active(property, value)).flatten() else {
        return;
    };

    room.update(|r| mirror_updated_shape(r, &updated));

    let Some(room_id) = room.get_untracked().room_id else {
        return;
    };
    send_object_upsert(sender, &room_id, &updated);
}

/// Refresh the active-shape pointer from the rendering library's selection.
pub fn sync_active_shape(scene: &SceneHandle, ui: RwSignal<UiState>) {
    let active = scene.with(|s| s.active_shape_id()).flatten();
    ui.update(|u| {
        if u.active_shape_id != active {
            u.active_shape_id = active;
            // A fresh selection always reseeds the drafts.
            u.is_editing = false;
        }
    });
}
