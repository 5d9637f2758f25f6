//! Cursor interaction mode state machine for the live surface.
//!
//! DESIGN
//! ======
//! Exactly one mode is active at a time. Transitions are pure functions so
//! keyboard, pointer, and context-menu wiring stays thin and testable; the
//! surface component owns the side effects (presence publishing).

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// Interaction mode of the local cursor overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CursorState {
    /// No overlay; plain cursor presence only.
    #[default]
    Hidden,
    /// Chat bubble following the cursor.
    Chat {
        /// Last committed message, still shown above the input.
        previous_message: Option<String>,
        /// Message currently being typed.
        message: String,
    },
    /// Emoji picker is open; cursor publishing is suppressed.
    ReactionSelector,
    /// An emoji is armed; pressing the pointer streams reaction bursts.
    Reaction {
        /// The armed emoji symbol.
        value: String,
        /// Whether the pointer is currently pressed.
        is_pressed: bool,
    },
}

impl CursorState {
    /// Fresh chat mode with a cleared input.
    #[must_use]
    pub fn open_chat() -> Self {
        Self::Chat { previous_message: None, message: String::new() }
    }

    /// Reaction mode with `value` armed and the pointer released.
    #[must_use]
    pub fn arm_reaction(value: String) -> Self {
        Self::Reaction { value, is_pressed: false }
    }

    /// True while the emoji picker is open.
    #[must_use]
    pub fn is_reaction_selector(&self) -> bool {
        matches!(self, Self::ReactionSelector)
    }

    /// The armed emoji while the reaction stream should be emitting,
    /// i.e. reaction mode with the pointer pressed.
    #[must_use]
    pub fn emitting_reaction(&self) -> Option<&str> {
        match self {
            Self::Reaction { value, is_pressed: true } => Some(value),
            _ => None,
        }
    }
}

/// Commands reachable from the live surface context menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextCommand {
    Chat,
    Reactions,
    Undo,
    Redo,
}

impl ContextCommand {
    /// Parse a menu entry name into a command.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Chat" => Some(Self::Chat),
            "Reactions" => Some(Self::Reactions),
            "Undo" => Some(Self::Undo),
            "Redo" => Some(Self::Redo),
            _ => None,
        }
    }
}

/// Next mode for a global key release, if the key is bound.
///
/// `Escape` additionally clears the published presence message; the caller
/// owns that publish.
#[must_use]
pub fn key_up_transition(key: &str) -> Option<CursorState> {
    match key {
        "/" => Some(CursorState::open_chat()),
        "Escape" => Some(CursorState::Hidden),
        "e" => Some(CursorState::ReactionSelector),
        _ => None,
    }
}

/// Next mode for a context-menu command. `None` means the mode is unchanged
/// (`Undo`/`Redo` act on the scene history, not the cursor).
#[must_use]
pub fn context_command_transition(command: ContextCommand) -> Option<CursorState> {
    match command {
        ContextCommand::Chat => Some(CursorState::open_chat()),
        ContextCommand::Reactions => Some(CursorState::ReactionSelector),
        ContextCommand::Undo | ContextCommand::Redo => None,
    }
}

/// Pointer press: latch `is_pressed` while an emoji is armed.
#[must_use]
pub fn pointer_down_transition(state: CursorState) -> CursorState {
    match state {
        CursorState::Reaction { value, .. } => CursorState::Reaction { value, is_pressed: true },
        other => other,
    }
}

/// Pointer release.
///
/// TODO: release currently latches `is_pressed` exactly like a press, so the
/// reaction stream never stops until the mode changes; confirm with design
/// whether release should clear the flag before changing this.
#[must_use]
pub fn pointer_up_transition(state: CursorState) -> CursorState {
    match state {
        CursorState::Reaction { value, .. } => CursorState::Reaction { value, is_pressed: true },
        other => other,
    }
}
