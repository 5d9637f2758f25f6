//! Static configuration shared across the client UI.

/// Room joined by the single-room application shell.
pub const ROOM_ID: &str = "main";

/// Emoji offered by the reaction selector.
pub const REACTIONS: [&str; 6] = ["👍", "🔥", "😍", "👀", "😱", "🙁"];

/// A context-menu command with its keyboard shortcut label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Command name dispatched on click.
    pub name: &'static str,
    /// Shortcut label shown next to the command.
    pub shortcut: &'static str,
}

/// Commands offered by the right-click menu on the live surface.
pub const CONTEXT_MENU_COMMANDS: [MenuEntry; 4] = [
    MenuEntry { name: "Chat", shortcut: "/" },
    MenuEntry { name: "Reactions", shortcut: "E" },
    MenuEntry { name: "Undo", shortcut: "⌘ + Z" },
    MenuEntry { name: "Redo", shortcut: "⌘ + Y" },
];

/// Fallback presence color when the service has not assigned one.
pub const DEFAULT_PEER_COLOR: &str = "#8a8178";
