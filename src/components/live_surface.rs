//! Live collaboration surface over the canvas.
//!
//! ARCHITECTURE
//! ============
//! This component owns the realtime interaction loop: it publishes local
//! pointer input into presence, streams reaction bursts while the pointer
//! is pressed, prunes the reaction buffer on a fixed tick, and drives the
//! cursor mode machine from keyboard and context-menu input. The canvas
//! element itself belongs to the rendering library installed into the
//! [`SceneHandle`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Two timers run while the surface is mounted (reaction pruning and
//! reaction emission); both are cancelled on cleanup together with the
//! window key listeners, so no work outlives the surface.

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::components::cursor_chat::CursorChat;
use crate::components::flying_reaction::FlyingReaction;
use crate::components::live_cursors::LiveCursors;
use crate::components::reaction_selector::ReactionSelector;
use crate::consts::CONTEXT_MENU_COMMANDS;
use crate::net::types::Point;
use crate::scene::SceneHandle;
use crate::state::cursor::{ContextCommand, CursorState, context_command_transition};
#[cfg(feature = "hydrate")]
use crate::state::cursor::{key_up_transition, pointer_down_transition, pointer_up_transition};
use crate::state::reactions::ReactionState;
#[cfg(feature = "hydrate")]
use crate::state::reactions::{REACTION_EMIT_INTERVAL_MS, REACTION_PRUNE_INTERVAL_MS};
use crate::state::room::RoomState;
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::frame_emit::{send_cursor_presence, send_presence_clear, send_presence_message, send_reaction_broadcast};
#[cfg(feature = "hydrate")]
use crate::util::pointer::{relative_point, should_prevent_default_key, surface_point};
#[cfg(feature = "hydrate")]
use crate::util::shapes::sync_active_shape;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use js_sys::Date;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use send_wrapper::SendWrapper;

/// Dispatch a context-menu command: history commands go to the rendering
/// library, mode commands to the cursor machine; the menu always closes.
fn run_menu_command(
    scene: &SceneHandle,
    cursor_state: RwSignal<CursorState>,
    menu_position: RwSignal<Option<Point>>,
    name: &str,
) {
    if let Some(command) = ContextCommand::from_name(name) {
        match command {
            ContextCommand::Undo => {
                scene.with(|s| s.undo());
            }
            ContextCommand::Redo => {
                scene.with(|s| s.redo());
            }
            ContextCommand::Chat | ContextCommand::Reactions => {}
        }
        if let Some(next) = context_command_transition(command) {
            cursor_state.set(next);
        }
    }
    menu_position.set(None);
}

/// Interactive surface component.
///
/// Composes the canvas mount point, flying reactions, the cursor chat
/// bubble, the emoji selector, peer cursors, and the right-click menu.
#[component]
pub fn LiveSurface() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    let reactions = expect_context::<RwSignal<ReactionState>>();
    let _ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();
    let scene = expect_context::<SceneHandle>();

    let cursor_state = RwSignal::new(CursorState::default());
    let my_cursor = RwSignal::new(None::<Point>);
    let menu_position = RwSignal::new(None::<Point>);
    let surface_ref = NodeRef::<leptos::html::Div>::new();

    // Reaction timers: a fixed prune sweep plus the emit stream while the
    // pointer is pressed in reaction mode. Dropping an `Interval` cancels it.
    #[cfg(feature = "hydrate")]
    {
        let prune_tick = Rc::new(RefCell::new(None::<Interval>));
        let emit_tick = Rc::new(RefCell::new(None::<Interval>));

        *prune_tick.borrow_mut() = Some(Interval::new(REACTION_PRUNE_INTERVAL_MS, move || {
            reactions.update(|r| r.prune_expired(Date::now()));
        }));

        *emit_tick.borrow_mut() = Some(Interval::new(REACTION_EMIT_INTERVAL_MS, move || {
            let Some(point) = my_cursor.get_untracked() else {
                return;
            };
            let Some(value) = cursor_state.with_untracked(|s| s.emitting_reaction().map(str::to_owned)) else {
                return;
            };
            // Local echo first so the burst renders immediately; the
            // broadcast may come back as a duplicate, which is accepted.
            reactions.update(|r| r.spawn(value.clone(), point.clone(), Date::now()));
            if let Some(room_id) = room.get_untracked().room_id {
                send_reaction_broadcast(sender, &room_id, point.x, point.y, &value);
            }
        }));

        on_cleanup({
            let prune_tick = SendWrapper::new(Rc::clone(&prune_tick));
            let emit_tick = SendWrapper::new(Rc::clone(&emit_tick));
            move || {
                prune_tick.borrow_mut().take();
                emit_tick.borrow_mut().take();
            }
        });
    }

    // Global key bindings. Registered on the window so they work without
    // canvas focus; removed on cleanup.
    #[cfg(feature = "hydrate")]
    {
        let keyup_handle = window_event_listener(leptos::ev::keyup, move |ev| {
            let key = ev.key();
            if key == "Escape" {
                // Clear the published chat message alongside hiding the overlay.
                if let Some(room_id) = room.get_untracked().room_id {
                    send_presence_message(sender, &room_id, "");
                }
            }
            if let Some(next) = key_up_transition(&key) {
                cursor_state.set(next);
            }
        });
        let keydown_handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if should_prevent_default_key(&ev.key()) {
                ev.prevent_default();
            }
        });
        on_cleanup(move || {
            keyup_handle.remove();
            keydown_handle.remove();
        });
    }

    // Push resolved storage snapshots into the rendering library whenever
    // the mirror changes under it.
    #[cfg(feature = "hydrate")]
    {
        let scene_sync = scene.clone();
        let last_scene_rev = RwSignal::new(None::<u64>);
        Effect::new(move || {
            let state = room.get();
            if state.join_streaming {
                return;
            }
            if last_scene_rev.get_untracked() == Some(state.scene_rev) {
                return;
            }
            let snapshot = state.objects.values().cloned().collect::<Vec<_>>();
            if scene_sync.with(|s| s.load_snapshot(snapshot)).is_some() {
                last_scene_rev.set(Some(state.scene_rev));
            }
        });
    }

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let surface_ref = surface_ref.clone();
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                let Some(surface) = surface_ref.get() else {
                    return;
                };
                // Publishing is suppressed while the selector is open and a
                // cursor is already shown, so the picker doesn't jitter away.
                if my_cursor.get_untracked().is_none()
                    || !cursor_state.with_untracked(CursorState::is_reaction_selector)
                {
                    let point = surface_point(&ev, &surface);
                    if let Some(room_id) = room.get_untracked().room_id {
                        send_cursor_presence(sender, &room_id, &point);
                    }
                    my_cursor.set(Some(point));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::PointerEvent| {
                cursor_state.set(CursorState::Hidden);
                my_cursor.set(None);
                if let Some(room_id) = room.get_untracked().room_id {
                    send_presence_clear(sender, &room_id);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let surface_ref = surface_ref.clone();
            let scene = scene.clone();
            move |ev: leptos::ev::PointerEvent| {
                let Some(surface) = surface_ref.get() else {
                    return;
                };
                let point = surface_point(&ev, &surface);
                if let Some(room_id) = room.get_untracked().room_id {
                    send_cursor_presence(sender, &room_id, &point);
                }
                my_cursor.set(Some(point));
                cursor_state.update(|s| *s = pointer_down_transition(std::mem::take(s)));
                sync_active_shape(&scene, _ui);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let scene = scene.clone();
            move |_ev: leptos::ev::PointerEvent| {
                cursor_state.update(|s| *s = pointer_up_transition(std::mem::take(s)));
                sync_active_shape(&scene, _ui);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_context_menu = {
        #[cfg(feature = "hydrate")]
        {
            let surface_ref = surface_ref.clone();
            move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                let Some(surface) = surface_ref.get() else {
                    return;
                };
                let rect = surface.get_bounding_client_rect();
                let point =
                    relative_point(f64::from(ev.client_x()), f64::from(ev.client_y()), rect.x(), rect.y());
                menu_position.set(Some(point));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let set_reaction = Callback::new(move |value: String| {
        cursor_state.set(CursorState::arm_reaction(value));
    });

    // Arena-keyed handle so the menu's render closure stays `Send` even
    // though the scene itself is thread-local.
    let scene_for_menu = StoredValue::new_local(scene.clone());

    view! {
        <div
            class="live-surface"
            node_ref=surface_ref
            on:pointermove=on_pointer_move
            on:pointerleave=on_pointer_leave
            on:pointerdown=on_pointer_down
            on:pointerup=on_pointer_up
            on:contextmenu=on_context_menu
        >
            <canvas id="board-canvas" class="live-surface__canvas"></canvas>

            <For
                each=move || reactions.get().reactions
                key=|r| r.id.clone()
                children=move |r| {
                    view! {
                        <FlyingReaction
                            x=r.point.x
                            y=r.point.y
                            value=r.value.clone()
                            variant=r.animation_variant()
                        />
                    }
                }
            />

            <CursorChat cursor_state=cursor_state my_cursor=my_cursor/>

            <Show when=move || cursor_state.with(CursorState::is_reaction_selector)>
                <ReactionSelector on_select=set_reaction/>
            </Show>

            <LiveCursors/>

            {move || {
                menu_position
                    .get()
                    .map(|point| {
                        view! {
                            <div
                                class="live-surface__menu"
                                style=format!("left: {}px; top: {}px;", point.x, point.y)
                            >
                                {CONTEXT_MENU_COMMANDS
                                    .iter()
                                    .map(|entry| {
                                        let name = entry.name;
                                        view! {
                                            <button
                                                class="live-surface__menu-item"
                                                on:click=move |_| {
                                                    scene_for_menu.with_value(|scene| {
                                                        run_menu_command(scene, cursor_state, menu_position, name);
                                                    });
                                                }
                                            >
                                                <span>{entry.name}</span>
                                                <span class="live-surface__menu-shortcut">
                                                    {entry.shortcut}
                                                </span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
