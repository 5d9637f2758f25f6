use super::*;

// =============================================================
// Key transitions
// =============================================================

#[test]
fn slash_opens_chat_with_cleared_message() {
    let next = key_up_transition("/").expect("bound key");
    assert_eq!(
        next,
        CursorState::Chat { previous_message: None, message: String::new() }
    );
}

#[test]
fn escape_hides_the_cursor_overlay() {
    assert_eq!(key_up_transition("Escape"), Some(CursorState::Hidden));
}

#[test]
fn e_opens_the_reaction_selector() {
    assert_eq!(key_up_transition("e"), Some(CursorState::ReactionSelector));
}

#[test]
fn unbound_keys_leave_the_mode_alone() {
    assert_eq!(key_up_transition("a"), None);
    assert_eq!(key_up_transition("Enter"), None);
    assert_eq!(key_up_transition("E"), None);
}

// =============================================================
// Context-menu transitions
// =============================================================

#[test]
fn menu_chat_opens_chat() {
    assert_eq!(
        context_command_transition(ContextCommand::Chat),
        Some(CursorState::open_chat())
    );
}

#[test]
fn menu_reactions_opens_the_selector() {
    assert_eq!(
        context_command_transition(ContextCommand::Reactions),
        Some(CursorState::ReactionSelector)
    );
}

#[test]
fn undo_redo_do_not_change_the_mode() {
    assert_eq!(context_command_transition(ContextCommand::Undo), None);
    assert_eq!(context_command_transition(ContextCommand::Redo), None);
}

#[test]
fn commands_parse_from_menu_entry_names() {
    assert_eq!(ContextCommand::from_name("Chat"), Some(ContextCommand::Chat));
    assert_eq!(ContextCommand::from_name("Reactions"), Some(ContextCommand::Reactions));
    assert_eq!(ContextCommand::from_name("Undo"), Some(ContextCommand::Undo));
    assert_eq!(ContextCommand::from_name("Redo"), Some(ContextCommand::Redo));
    assert_eq!(ContextCommand::from_name("Export"), None);
}

// =============================================================
// Pointer transitions
// =============================================================

#[test]
fn pointer_down_latches_is_pressed_in_reaction_mode() {
    let next = pointer_down_transition(CursorState::arm_reaction("👍".to_owned()));
    assert_eq!(
        next,
        CursorState::Reaction { value: "👍".to_owned(), is_pressed: true }
    );
}

#[test]
fn pointer_down_outside_reaction_mode_is_a_no_op() {
    assert_eq!(pointer_down_transition(CursorState::Hidden), CursorState::Hidden);
    assert_eq!(
        pointer_down_transition(CursorState::ReactionSelector),
        CursorState::ReactionSelector
    );
}

#[test]
fn pointer_up_also_latches_is_pressed() {
    // Mirrors the observed behavior: release does not clear the flag.
    let pressed = pointer_down_transition(CursorState::arm_reaction("🔥".to_owned()));
    let released = pointer_up_transition(pressed);
    assert_eq!(
        released,
        CursorState::Reaction { value: "🔥".to_owned(), is_pressed: true }
    );
}

#[test]
fn pointer_up_outside_reaction_mode_is_a_no_op() {
    let chat = CursorState::open_chat();
    assert_eq!(pointer_up_transition(chat.clone()), chat);
}

// =============================================================
// Emission gating
// =============================================================

#[test]
fn emitting_reaction_requires_pressed_reaction_mode() {
    assert_eq!(CursorState::Hidden.emitting_reaction(), None);
    assert_eq!(CursorState::ReactionSelector.emitting_reaction(), None);
    assert_eq!(CursorState::open_chat().emitting_reaction(), None);
    assert_eq!(CursorState::arm_reaction("👀".to_owned()).emitting_reaction(), None);

    let pressed = CursorState::Reaction { value: "👀".to_owned(), is_pressed: true };
    assert_eq!(pressed.emitting_reaction(), Some("👀"));
}

#[test]
fn only_the_selector_suppresses_cursor_publishing() {
    assert!(CursorState::ReactionSelector.is_reaction_selector());
    assert!(!CursorState::Hidden.is_reaction_selector());
    assert!(!CursorState::open_chat().is_reaction_selector());
    assert!(!CursorState::arm_reaction("🙁".to_owned()).is_reaction_selector());
}

#[test]
fn default_mode_is_hidden() {
    assert_eq!(CursorState::default(), CursorState::Hidden);
}
