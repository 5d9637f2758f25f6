//! Chat bubble that follows the local cursor while chat mode is active.

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::net::types::Point;
use crate::state::cursor::CursorState;
use crate::state::room::RoomState;
use crate::util::frame_emit::send_presence_message;

/// Cursor-following chat input.
///
/// Typing publishes the message into presence on every keystroke so peers
/// watch it live; Enter commits the text to `previous_message` and clears
/// the input while the committed line stays visible above it.
#[component]
pub fn CursorChat(
    cursor_state: RwSignal<CursorState>,
    my_cursor: RwSignal<Option<Point>>,
) -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();

    let chat_fields = move || match cursor_state.get() {
        CursorState::Chat { previous_message, message } => Some((previous_message, message)),
        _ => None,
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if let Some(room_id) = room.get_untracked().room_id {
            send_presence_message(sender, &room_id, &value);
        }
        cursor_state.update(|state| {
            if let CursorState::Chat { message, .. } = state {
                *message = value;
            }
        });
    };

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            cursor_state.update(|state| {
                if let CursorState::Chat { previous_message, message } = state {
                    *previous_message = Some(std::mem::take(message));
                }
            });
        }
    };

    view! {
        <Show when=move || chat_fields().is_some() && my_cursor.with(Option::is_some)>
            <div
                class="cursor-chat"
                style=move || {
                    my_cursor
                        .get()
                        .map_or_else(String::new, |p| {
                            format!("transform: translate({}px, {}px);", p.x, p.y)
                        })
                }
            >
                {move || {
                    chat_fields()
                        .and_then(|(previous, _)| previous)
                        .map(|previous| view! { <div class="cursor-chat__previous">{previous}</div> })
                }}
                <input
                    class="cursor-chat__input"
                    autofocus=true
                    placeholder=move || {
                        let has_previous = chat_fields().is_some_and(|(previous, _)| previous.is_some());
                        if has_previous { "" } else { "Say something…" }
                    }
                    prop:value=move || chat_fields().map(|(_, message)| message).unwrap_or_default()
                    on:input=on_input
                    on:keydown=on_key_down
                    // Keep bound keys ("/", "e") from re-triggering the global
                    // mode shortcuts while typing.
                    on:keyup=|ev: leptos::ev::KeyboardEvent| ev.stop_propagation()
                />
            </div>
        </Show>
    }
}
