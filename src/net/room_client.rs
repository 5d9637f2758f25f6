//! Websocket room client for real-time communication with the presence and
//! storage service.
//!
//! The client manages the websocket lifecycle: connection, reconnection
//! with exponential backoff, frame dispatch, and signal updates. It is the
//! only bridge between the service's frame protocol and the Leptos UI state.
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]` since
//! it requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Parse/transport failures are handled defensively and translated into
//! state updates/logging so realtime UX can recover through reconnect loops.

#[path = "room_client_apply.rs"]
mod room_client_apply;

#[cfg(feature = "hydrate")]
use self::room_client_apply::{
    apply_join_done, apply_join_item, apply_object_delete, apply_object_upsert, apply_presence_update,
    apply_room_part, apply_session_connected, cleanup_stale_cursors, parse_reaction_event, spawn_peer_reaction,
};
#[cfg(feature = "hydrate")]
use crate::net::types::{Frame, FrameStatus};
#[cfg(feature = "hydrate")]
use crate::state::reactions::ReactionState;
#[cfg(feature = "hydrate")]
use crate::state::room::{ConnectionStatus, RoomState};
#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked, RwSignal, Update};

/// Spawn the websocket room client lifecycle as a local async task.
///
/// This connects to the service, handles incoming frames, and reconnects
/// on disconnect with exponential backoff.
#[cfg(feature = "hydrate")]
pub fn spawn_room_client(
    room: RwSignal<RoomState>,
    reactions: RwSignal<ReactionState>,
) -> futures::channel::mpsc::UnboundedSender<Vec<u8>> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<Vec<u8>>();

    leptos::task::spawn_local(room_client_loop(room, reactions, rx));

    tx
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn room_client_loop(
    room: RwSignal<RoomState>,
    reactions: RwSignal<ReactionState>,
    rx: futures::channel::mpsc::UnboundedReceiver<Vec<u8>>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        room.update(|r| r.connection_status = ConnectionStatus::Connecting);

        // Determine websocket URL from the page location.
        let location = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let ws_url = format!("{ws_proto}://{host}/api/ws");

        match connect_and_run(&ws_url, room, reactions, &rx).await {
            Ok(()) => {
                leptos::logging::log!("WS disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("WS error: {e}");
            }
        }

        room.update(|r| r.connection_status = ConnectionStatus::Disconnected);

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect to the websocket and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    room: RwSignal<RoomState>,
    reactions: RwSignal<ReactionState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<Vec<u8>>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Forward outgoing messages from the shared channel to the websocket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Bytes(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: process incoming frames.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Bytes(bytes)) => {
                    if let Ok(frame) = wire::decode_frame(&bytes) {
                        dispatch_frame(&frame, room, reactions);
                    }
                }
                Ok(Message::Text(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Dispatch an incoming frame to the appropriate state handler.
#[cfg(feature = "hydrate")]
fn dispatch_frame(frame: &Frame, room: RwSignal<RoomState>, reactions: RwSignal<ReactionState>) {
    match frame.op.as_str() {
        "session:connected" => {
            room.update(|r| apply_session_connected(r, &frame.data));
        }
        "room:join" if frame.status == FrameStatus::Item => {
            room.update(|r| apply_join_item(r, &frame.data));
        }
        "room:join" if frame.status == FrameStatus::Done => {
            room.update(|r| apply_join_done(r, &frame.data));
        }
        "presence:update" => {
            // The local cursor renders directly; only peer presence is mirrored.
            if is_self_frame(frame, room) {
                return;
            }
            room.update(|r| {
                cleanup_stale_cursors(r, frame.ts);
                apply_presence_update(r, frame.from.as_deref(), &frame.data, frame.ts);
            });
        }
        "event:broadcast" => {
            // Deliberately no self-echo filtering: the local copy was already
            // buffered at emit time and duplicates are visual-only.
            if let Some(event) = parse_reaction_event(&frame.data) {
                let now_ms = js_sys::Date::now();
                reactions.update(|r| spawn_peer_reaction(r, event, now_ms));
            }
        }
        "object:upsert" if frame.status == FrameStatus::Done => {
            if is_self_frame(frame, room) {
                return;
            }
            room.update(|r| {
                if apply_object_upsert(r, &frame.data) {
                    r.bump_scene_rev();
                }
            });
        }
        "object:delete" if frame.status == FrameStatus::Done => {
            room.update(|r| {
                if apply_object_delete(r, &frame.data) {
                    r.bump_scene_rev();
                }
            });
        }
        "room:part" => {
            room.update(|r| apply_room_part(r, &frame.data));
        }
        "gateway:error" => {
            leptos::logging::warn!("gateway:error frame: {}", frame.data);
        }
        _ => {}
    }
}

#[cfg(feature = "hydrate")]
fn is_self_frame(frame: &Frame, room: RwSignal<RoomState>) -> bool {
    let self_id = room.get_untracked().self_client_id;
    frame.from.is_some() && frame.from == self_id
}
