use super::*;

fn connected_room() -> RoomState {
    let mut room = RoomState::default();
    apply_session_connected(&mut room, &serde_json::json!({"client_id": "c-self"}));
    room
}

// =============================================================
// session:connected
// =============================================================

#[test]
fn session_connected_records_identity_and_status() {
    let room = connected_room();
    assert_eq!(room.connection_status, ConnectionStatus::Connected);
    assert_eq!(room.self_client_id.as_deref(), Some("c-self"));
}

#[test]
fn session_connected_without_client_id_clears_identity() {
    let mut room = connected_room();
    apply_session_connected(&mut room, &serde_json::json!({}));
    assert_eq!(room.self_client_id, None);
}

// =============================================================
// presence:update
// =============================================================

#[test]
fn presence_update_creates_a_peer_with_cursor() {
    let mut room = connected_room();
    apply_presence_update(
        &mut room,
        Some("c-1"),
        &serde_json::json!({"cursor": {"x": 50.0, "y": 80.0}, "name": "Ada", "color": "#d94b4b"}),
        1_000,
    );

    let peer = &room.presence["c-1"];
    assert_eq!(peer.cursor, Some(Point { x: 50.0, y: 80.0 }));
    assert_eq!(peer.name, "Ada");
    assert_eq!(peer.color, "#d94b4b");
    assert_eq!(room.cursor_updated_at.get("c-1"), Some(&1_000));
}

#[test]
fn presence_update_is_partial_and_keeps_untouched_fields() {
    let mut room = connected_room();
    apply_presence_update(
        &mut room,
        Some("c-1"),
        &serde_json::json!({"cursor": {"x": 1.0, "y": 2.0}, "message": "hi"}),
        1_000,
    );

    // A message-only update must not move the cursor.
    apply_presence_update(&mut room, Some("c-1"), &serde_json::json!({"message": "there"}), 1_100);

    let peer = &room.presence["c-1"];
    assert_eq!(peer.cursor, Some(Point { x: 1.0, y: 2.0 }));
    assert_eq!(peer.message.as_deref(), Some("there"));
}

#[test]
fn presence_update_with_null_cursor_hides_the_cursor() {
    let mut room = connected_room();
    apply_presence_update(
        &mut room,
        Some("c-1"),
        &serde_json::json!({"cursor": {"x": 1.0, "y": 2.0}}),
        1_000,
    );

    apply_presence_update(
        &mut room,
        Some("c-1"),
        &serde_json::json!({"cursor": null, "message": null}),
        1_200,
    );

    let peer = &room.presence["c-1"];
    assert_eq!(peer.cursor, None);
    assert_eq!(peer.message, None);
    assert!(!room.cursor_updated_at.contains_key("c-1"));
}

#[test]
fn presence_update_with_null_message_clears_only_the_message() {
    let mut room = connected_room();
    apply_presence_update(
        &mut room,
        Some("c-1"),
        &serde_json::json!({"cursor": {"x": 3.0, "y": 4.0}, "message": "typing"}),
        1_000,
    );

    apply_presence_update(&mut room, Some("c-1"), &serde_json::json!({"message": null}), 1_100);

    let peer = &room.presence["c-1"];
    assert_eq!(peer.message, None);
    assert_eq!(peer.cursor, Some(Point { x: 3.0, y: 4.0 }));
}

#[test]
fn presence_update_without_identity_is_ignored() {
    let mut room = connected_room();
    apply_presence_update(&mut room, None, &serde_json::json!({"cursor": {"x": 1.0, "y": 1.0}}), 1_000);
    assert!(room.presence.is_empty());
}

#[test]
fn presence_update_falls_back_to_payload_client_id() {
    let mut room = connected_room();
    apply_presence_update(
        &mut room,
        None,
        &serde_json::json!({"client_id": "c-2", "cursor": {"x": 9.0, "y": 9.0}}),
        1_000,
    );
    assert!(room.presence.contains_key("c-2"));
}

#[test]
fn unknown_peers_get_default_name_and_color() {
    let mut room = connected_room();
    apply_presence_update(&mut room, Some("c-3"), &serde_json::json!({"cursor": {"x": 0.0, "y": 0.0}}), 1_000);

    let peer = &room.presence["c-3"];
    assert_eq!(peer.name, "Guest");
    assert_eq!(peer.color, DEFAULT_PEER_COLOR);
}

// =============================================================
// room:part
// =============================================================

#[test]
fn room_part_removes_the_peer_entirely() {
    let mut room = connected_room();
    apply_presence_update(&mut room, Some("c-1"), &serde_json::json!({"cursor": {"x": 1.0, "y": 1.0}}), 1_000);

    apply_room_part(&mut room, &serde_json::json!({"client_id": "c-1"}));

    assert!(room.presence.is_empty());
    assert!(room.cursor_updated_at.is_empty());
}

#[test]
fn room_part_for_unknown_peer_is_a_no_op() {
    let mut room = connected_room();
    apply_room_part(&mut room, &serde_json::json!({"client_id": "c-404"}));
    assert!(room.presence.is_empty());
}

// =============================================================
// Stale cursor cleanup
// =============================================================

#[test]
fn stale_cursors_are_hidden_after_the_silence_window() {
    let mut room = connected_room();
    apply_presence_update(&mut room, Some("c-1"), &serde_json::json!({"cursor": {"x": 1.0, "y": 1.0}}), 1_000);
    apply_presence_update(&mut room, Some("c-2"), &serde_json::json!({"cursor": {"x": 2.0, "y": 2.0}}), 4_500);

    cleanup_stale_cursors(&mut room, 5_000);

    assert_eq!(room.presence["c-1"].cursor, None);
    assert!(room.presence["c-2"].cursor.is_some());
}

#[test]
fn cleanup_ignores_non_positive_clock() {
    let mut room = connected_room();
    apply_presence_update(&mut room, Some("c-1"), &serde_json::json!({"cursor": {"x": 1.0, "y": 1.0}}), 1_000);
    cleanup_stale_cursors(&mut room, 0);
    assert!(room.presence["c-1"].cursor.is_some());
}

// =============================================================
// Storage mirror
// =============================================================

#[test]
fn object_upsert_inserts_and_reports_change() {
    let mut room = connected_room();
    let changed = apply_object_upsert(
        &mut room,
        &serde_json::json!({"id": "s-1", "kind": "rectangle", "attrs": {"fill": "#123456"}}),
    );
    assert!(changed);
    assert_eq!(room.objects["s-1"].attr_str("fill"), Some("#123456"));
}

#[test]
fn object_upsert_replaces_existing_records() {
    let mut room = connected_room();
    apply_object_upsert(&mut room, &serde_json::json!({"id": "s-1", "kind": "rectangle", "attrs": {"fill": "#111111"}}));
    apply_object_upsert(&mut room, &serde_json::json!({"id": "s-1", "kind": "rectangle", "attrs": {"fill": "#222222"}}));

    assert_eq!(room.objects.len(), 1);
    assert_eq!(room.objects["s-1"].attr_str("fill"), Some("#222222"));
}

#[test]
fn object_upsert_rejects_malformed_payloads() {
    let mut room = connected_room();
    assert!(!apply_object_upsert(&mut room, &serde_json::json!({"kind": "rectangle"})));
    assert!(!apply_object_upsert(&mut room, &serde_json::json!({"id": "", "kind": "rectangle"})));
    assert!(room.objects.is_empty());
}

#[test]
fn object_delete_removes_and_reports_change() {
    let mut room = connected_room();
    apply_object_upsert(&mut room, &serde_json::json!({"id": "s-1", "kind": "rectangle", "attrs": {}}));

    assert!(apply_object_delete(&mut room, &serde_json::json!({"id": "s-1"})));
    assert!(room.objects.is_empty());
    assert!(!apply_object_delete(&mut room, &serde_json::json!({"id": "s-1"})));
}

// =============================================================
// room:join stream
// =============================================================

#[test]
fn first_join_item_clears_the_stale_snapshot() {
    let mut room = connected_room();
    apply_object_upsert(&mut room, &serde_json::json!({"id": "stale", "kind": "rectangle", "attrs": {}}));

    apply_join_item(&mut room, &serde_json::json!({"id": "s-1", "kind": "ellipse", "attrs": {}}));

    assert!(room.join_streaming);
    assert_eq!(room.objects.len(), 1);
    assert!(room.objects.contains_key("s-1"));
}

#[test]
fn later_join_items_accumulate() {
    let mut room = connected_room();
    apply_join_item(&mut room, &serde_json::json!({"id": "s-1", "kind": "ellipse", "attrs": {}}));
    apply_join_item(&mut room, &serde_json::json!({"id": "s-2", "kind": "text", "attrs": {}}));

    assert_eq!(room.objects.len(), 2);
}

#[test]
fn join_done_with_inline_snapshot_replaces_the_mirror() {
    let mut room = connected_room();
    apply_object_upsert(&mut room, &serde_json::json!({"id": "stale", "kind": "rectangle", "attrs": {}}));

    apply_join_done(
        &mut room,
        &serde_json::json!({"objects": [
            {"id": "s-1", "kind": "rectangle", "attrs": {"fill": "#aabbcc"}},
            {"id": "s-2", "kind": "text", "attrs": {}}
        ]}),
    );

    assert!(!room.join_streaming);
    assert_eq!(room.objects.len(), 2);
    assert!(!room.objects.contains_key("stale"));
}

#[test]
fn join_done_after_streaming_keeps_streamed_objects() {
    let mut room = connected_room();
    apply_join_item(&mut room, &serde_json::json!({"id": "s-1", "kind": "ellipse", "attrs": {}}));

    apply_join_done(&mut room, &serde_json::json!({}));

    assert!(!room.join_streaming);
    assert_eq!(room.objects.len(), 1);
}

#[test]
fn empty_join_done_clears_a_stale_snapshot() {
    let mut room = connected_room();
    apply_object_upsert(&mut room, &serde_json::json!({"id": "stale", "kind": "rectangle", "attrs": {}}));

    apply_join_done(&mut room, &serde_json::json!({}));

    assert!(room.objects.is_empty());
}

// =============================================================
// event:broadcast
// =============================================================

#[test]
fn reaction_event_parses_from_broadcast_payload() {
    let event = parse_reaction_event(&serde_json::json!({"x": 10.0, "y": 20.0, "value": "🔥"}))
        .expect("valid payload");
    assert_eq!(event, ReactionEvent { x: 10.0, y: 20.0, value: "🔥".to_owned() });
}

#[test]
fn reaction_event_rejects_incomplete_payloads() {
    assert_eq!(parse_reaction_event(&serde_json::json!({"x": 10.0, "y": 20.0})), None);
    assert_eq!(parse_reaction_event(&serde_json::json!({})), None);
}

#[test]
fn peer_reaction_lands_in_the_buffer_at_receipt_time() {
    let mut reactions = ReactionState::default();
    let event = parse_reaction_event(&serde_json::json!({"x": 10.0, "y": 20.0, "value": "🔥"}))
        .expect("valid payload");

    spawn_peer_reaction(&mut reactions, event, 9_000.0);

    assert_eq!(reactions.reactions.len(), 1);
    let entry = &reactions.reactions[0];
    assert_eq!(entry.point, Point { x: 10.0, y: 20.0 });
    assert_eq!(entry.value, "🔥");
    assert_eq!(entry.timestamp_ms, 9_000.0);
}
