//! Design panel for the active shape's visual properties.
//!
//! ARCHITECTURE
//! ============
//! Every control routes through the shape mutation relay: the rendering
//! library applies the change, the serialized result is persisted to shared
//! storage, and the `is_editing` flag keeps remote echoes from overwriting
//! the drafts mid-keystroke.

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::scene::SceneHandle;
use crate::state::room::RoomState;
use crate::state::ui::UiState;
use crate::util::shapes::relay_shape_edit;

const FONT_FAMILIES: [&str; 3] = ["Helvetica", "Times New Roman", "Comic Sans MS"];
const FONT_SIZES: [&str; 8] = ["10", "12", "14", "16", "18", "24", "30", "36"];
const FONT_WEIGHTS: [(&str, &str); 3] = [("400", "Normal"), ("600", "Semibold"), ("800", "Bold")];

/// Sidebar with editable fields for the active shape.
#[component]
pub fn DesignPanel() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();
    let scene = expect_context::<SceneHandle>();

    // Reseed drafts from the resolved storage mirror whenever the active
    // shape changes remotely, unless the local user is mid-edit.
    Effect::new(move || {
        let room_state = room.get();
        let ui_state = ui.get();
        if ui_state.is_editing {
            return;
        }
        let Some(active_id) = ui_state.active_shape_id else {
            return;
        };
        let Some(shape) = room_state.objects.get(&active_id) else {
            return;
        };
        let mut next = ui_state.attributes.clone();
        next.sync_from_shape(shape);
        if next != ui_state.attributes {
            ui.update(|u| u.attributes = next);
        }
    });

    let on_width = {
        let scene = scene.clone();
        move |ev: leptos::ev::Event| relay_shape_edit(&scene, room, ui, sender, "width", &event_target_value(&ev))
    };
    let on_height = {
        let scene = scene.clone();
        move |ev: leptos::ev::Event| relay_shape_edit(&scene, room, ui, sender, "height", &event_target_value(&ev))
    };
    let on_font_family = {
        let scene = scene.clone();
        move |ev: leptos::ev::Event| relay_shape_edit(&scene, room, ui, sender, "fontFamily", &event_target_value(&ev))
    };
    let on_font_size = {
        let scene = scene.clone();
        move |ev: leptos::ev::Event| relay_shape_edit(&scene, room, ui, sender, "fontSize", &event_target_value(&ev))
    };
    let on_font_weight = {
        let scene = scene.clone();
        move |ev: leptos::ev::Event| relay_shape_edit(&scene, room, ui, sender, "fontWeight", &event_target_value(&ev))
    };
    let on_fill = {
        let scene = scene.clone();
        move |ev: leptos::ev::Event| relay_shape_edit(&scene, room, ui, sender, "fill", &event_target_value(&ev))
    };
    let on_stroke = {
        let scene = scene.clone();
        move |ev: leptos::ev::Event| relay_shape_edit(&scene, room, ui, sender, "stroke", &event_target_value(&ev))
    };

    let end_edit = move |_ev: leptos::ev::FocusEvent| ui.update(|u| u.is_editing = false);

    let attrs = move || ui.get().attributes;

    view! {
        <section class="design-panel">
            <h3 class="design-panel__title">"Design"</h3>
            <span class="design-panel__hint">"Make changes to the canvas as you like"</span>

            <div class="design-panel__group">
                <label class="design-panel__label">"Dimensions"</label>
                <div class="design-panel__row">
                    <input
                        class="design-panel__field"
                        placeholder="W"
                        prop:value=move || attrs().width
                        on:input=on_width
                        on:blur=end_edit
                    />
                    <input
                        class="design-panel__field"
                        placeholder="H"
                        prop:value=move || attrs().height
                        on:input=on_height
                        on:blur=end_edit
                    />
                </div>
            </div>

            <div class="design-panel__group">
                <label class="design-panel__label">"Text"</label>
                <select
                    class="design-panel__field"
                    prop:value=move || attrs().font_family
                    on:change=on_font_family
                >
                    {FONT_FAMILIES
                        .iter()
                        .map(|family| view! { <option value=*family>{*family}</option> })
                        .collect_view()}
                </select>
                <div class="design-panel__row">
                    <select
                        class="design-panel__field"
                        prop:value=move || attrs().font_size
                        on:change=on_font_size
                    >
                        {FONT_SIZES
                            .iter()
                            .map(|size| view! { <option value=*size>{*size}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class="design-panel__field"
                        prop:value=move || attrs().font_weight
                        on:change=on_font_weight
                    >
                        {FONT_WEIGHTS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="design-panel__group">
                <label class="design-panel__label">"Fill"</label>
                <input
                    type="color"
                    class="design-panel__swatch"
                    prop:value=move || attrs().fill
                    on:input=on_fill
                    on:blur=end_edit
                />
            </div>

            <div class="design-panel__group">
                <label class="design-panel__label">"Stroke"</label>
                <input
                    type="color"
                    class="design-panel__swatch"
                    prop:value=move || attrs().stroke
                    on:input=on_stroke
                    on:blur=end_edit
                />
            </div>
        </section>
    }
}
