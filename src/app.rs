//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::room::RoomPage;
use crate::scene::SceneHandle;
use crate::state::reactions::ReactionState;
use crate::state::room::RoomState;
use crate::state::ui::UiState;

/// Channel handle components use to push frames onto the websocket.
///
/// Starts detached; the room client task attaches the outbound channel once
/// it is spawned during hydration.
#[derive(Clone, Default)]
pub struct FrameSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<Vec<u8>>>,
}

impl FrameSender {
    /// Wrap the room client's outbound channel.
    #[cfg(feature = "hydrate")]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<Vec<u8>>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Send a frame to the service.
    ///
    /// Returns `false` when no connection task is attached or the channel
    /// is closed (no active connection).
    pub fn send(&self, frame: &wire::Frame) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(wire::encode_frame(frame)).is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = frame;
            false
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, spawns the room client, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let room = RwSignal::new(RoomState::default());
    let reactions = RwSignal::new(ReactionState::default());
    let ui = RwSignal::new(UiState::default());
    let scene = SceneHandle::default();
    let sender = RwSignal::new(FrameSender::default());

    provide_context(room);
    provide_context(reactions);
    provide_context(ui);
    provide_context(scene);
    provide_context(sender);

    #[cfg(feature = "hydrate")]
    {
        let tx = crate::net::room_client::spawn_room_client(room, reactions);
        sender.set(FrameSender::new(tx));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/liveboard.css"/>
        <Title text="Liveboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RoomPage/>
            </Routes>
        </Router>
    }
}
