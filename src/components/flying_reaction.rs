//! Timed emoji burst rendered at a surface point.

use leptos::prelude::*;

/// One reaction burst. The element floats up and fades via CSS; the variant
/// index picks one of three float paths so simultaneous bursts spread out.
#[component]
pub fn FlyingReaction(x: f64, y: f64, value: String, variant: i64) -> impl IntoView {
    view! {
        <div
            class=format!("flying-reaction flying-reaction--rise-{variant}")
            style=format!("left: {x}px; top: {y}px;")
        >
            <span class="flying-reaction__symbol">{value}</span>
        </div>
    }
}
