//! Peer cursor overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders room presence state populated by websocket `presence:update` and
//! `room:part` frames. The local cursor is never in this map.

use leptos::prelude::*;

use crate::state::room::RoomState;

/// All visible peer cursors, each in the peer's color with its chat message
/// (or name) as the label.
#[component]
pub fn LiveCursors() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();

    let peers = move || {
        let state = room.get();
        let mut items = state
            .presence
            .values()
            .filter_map(|p| p.cursor.clone().map(|cursor| (p.clone(), cursor)))
            .collect::<Vec<_>>();
        items.sort_by(|(a, _), (b, _)| a.client_id.cmp(&b.client_id));
        items
    };

    view! {
        <div class="live-cursors">
            {move || {
                peers()
                    .into_iter()
                    .map(|(peer, cursor)| {
                        let label = peer
                            .message
                            .clone()
                            .filter(|m| !m.is_empty())
                            .unwrap_or_else(|| peer.name.clone());
                        let label_style = format!("background:{};", peer.color);
                        view! {
                            <div
                                class="live-cursors__peer"
                                style=format!("transform: translate({}px, {}px);", cursor.x, cursor.y)
                            >
                                <svg viewBox="0 0 24 24" aria-hidden="true" fill=peer.color.clone()>
                                    <path d="M3 2 L21 12 L13 14 L9 22 Z"></path>
                                </svg>
                                <span class="live-cursors__label" style=label_style>{label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
