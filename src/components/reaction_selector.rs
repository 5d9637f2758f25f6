//! Emoji picker shown while the cursor is in selector mode.

use leptos::prelude::*;

use crate::consts::REACTIONS;

/// Horizontal emoji strip; clicking an emoji arms it for the reaction
/// stream.
#[component]
pub fn ReactionSelector(on_select: Callback<String>) -> impl IntoView {
    view! {
        <div class="reaction-selector">
            {REACTIONS
                .iter()
                .map(|symbol| {
                    let value = (*symbol).to_owned();
                    view! {
                        <button
                            class="reaction-selector__option"
                            on:click=move |_| on_select.run(value.clone())
                        >
                            {*symbol}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
