//! Room page — the collaborative whiteboard workspace shell.
//!
//! ARCHITECTURE
//! ============
//! This component is the coordinator between websocket room membership
//! (`room:join`/`room:part`) and local `RoomState` cache lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The room client owns websocket connection/session identity. `RoomPage`
//! translates mount/unmount into room membership transitions without
//! requiring websocket reconnects.

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::components::design_panel::DesignPanel;
use crate::components::live_surface::LiveSurface;
use crate::consts::ROOM_ID;
use crate::net::types::{Frame, FrameStatus};
use crate::state::room::{ConnectionStatus, RoomState};

fn build_room_membership_frame(op: &str, room_id: String) -> Frame {
    Frame {
        id: uuid::Uuid::new_v4().to_string(),
        ts: 0,
        room_id: Some(room_id),
        from: None,
        op: op.to_owned(),
        status: FrameStatus::Request,
        // Joining starts from a blank presence; the service merges partial
        // updates from here on.
        data: serde_json::json!({
            "presence": { "cursor": null, "message": null },
        }),
    }
}

/// Room page — composes the live surface and design panel and drives room
/// membership for the static room this shell serves.
#[component]
pub fn RoomPage() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();
    let last_join_key = RwSignal::new(None::<(String, String)>);

    // Adopt the static room identity on mount.
    Effect::new(move || {
        if room.with(|r| r.room_id.is_none()) {
            room.update(|r| r.room_id = Some(ROOM_ID.to_owned()));
        }
    });

    // Send room:join once per (room_id, websocket client_id), including
    // reconnects: a new connection assigns a new client ID, changing the key.
    Effect::new(move || {
        let state = room.get();
        if state.connection_status != ConnectionStatus::Connected {
            return;
        }
        let Some(room_id) = state.room_id.clone() else {
            return;
        };
        let Some(client_id) = state.self_client_id.clone() else {
            return;
        };
        let key = (room_id.clone(), client_id);
        if last_join_key.get().as_ref() == Some(&key) {
            return;
        }

        sender
            .get()
            .send(&build_room_membership_frame("room:join", room_id));
        last_join_key.set(Some(key));
    });

    on_cleanup(move || {
        let room_id = room.get().room_id;
        if let Some(room_id) = room_id {
            sender
                .get()
                .send(&build_room_membership_frame("room:part", room_id));
        }

        room.update(RoomState::reset_room_scope);
    });

    view! {
        <main class="room-page">
            <LiveSurface/>
            <DesignPanel/>
        </main>
    }
}
