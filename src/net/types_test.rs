use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_round_trips_through_json() {
    let point = Point { x: 50.0, y: 80.0 };
    let json = serde_json::to_value(&point).expect("serialize");
    assert_eq!(json, serde_json::json!({"x": 50.0, "y": 80.0}));
    let back: Point = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, point);
}

// =============================================================
// Presence
// =============================================================

#[test]
fn presence_round_trips_with_nullable_fields() {
    let presence = Presence {
        client_id: "c-1".to_owned(),
        name: "Ada".to_owned(),
        color: "#d94b4b".to_owned(),
        cursor: None,
        message: None,
    };
    let json = serde_json::to_value(&presence).expect("serialize");
    assert_eq!(json.get("cursor"), Some(&serde_json::Value::Null));
    let back: Presence = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, presence);
}

#[test]
fn presence_cursor_deserializes_from_nested_object() {
    let presence: Presence = serde_json::from_value(serde_json::json!({
        "client_id": "c-2",
        "name": "Lin",
        "color": "#3b82f6",
        "cursor": {"x": 10.0, "y": 20.0},
        "message": "hey"
    }))
    .expect("deserialize");
    assert_eq!(presence.cursor, Some(Point { x: 10.0, y: 20.0 }));
    assert_eq!(presence.message.as_deref(), Some("hey"));
}

// =============================================================
// ShapeObject
// =============================================================

#[test]
fn shape_object_defaults_missing_attrs_to_null() {
    let shape: ShapeObject =
        serde_json::from_value(serde_json::json!({"id": "s-1", "kind": "rectangle"}))
            .expect("deserialize");
    assert_eq!(shape.attrs, serde_json::Value::Null);
    assert_eq!(shape.attr_str("fill"), None);
}

#[test]
fn shape_object_attr_readers_pick_typed_values() {
    let shape = ShapeObject {
        id: "s-2".to_owned(),
        kind: "text".to_owned(),
        attrs: serde_json::json!({
            "fill": "#aabbcc",
            "width": 120.0,
            "fontSize": 36.0
        }),
    };
    assert_eq!(shape.attr_str("fill"), Some("#aabbcc"));
    assert_eq!(shape.attr_f64("width"), Some(120.0));
    assert_eq!(shape.attr_f64("fontSize"), Some(36.0));
    assert_eq!(shape.attr_str("width"), None);
    assert_eq!(shape.attr_f64("missing"), None);
}

// =============================================================
// ReactionEvent
// =============================================================

#[test]
fn reaction_event_round_trips_through_json() {
    let event = ReactionEvent { x: 10.0, y: 20.0, value: "🔥".to_owned() };
    let json = serde_json::to_value(&event).expect("serialize");
    assert_eq!(json, serde_json::json!({"x": 10.0, "y": 20.0, "value": "🔥"}));
    let back: ReactionEvent = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, event);
}
