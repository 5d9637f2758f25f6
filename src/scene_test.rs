use super::*;

/// Minimal recording scene used to exercise the handle plumbing.
#[derive(Default)]
struct RecordingScene {
    active: Option<String>,
    applied: Vec<(String, String)>,
    snapshots: usize,
    history: Vec<&'static str>,
}

impl ShapeScene for RecordingScene {
    fn active_shape_id(&self) -> Option<String> {
        self.active.clone()
    }

    fn modify_active(&mut self, property: &str, value: &str) -> Option<ShapeObject> {
        let id = self.active.clone()?;
        self.applied.push((property.to_owned(), value.to_owned()));
        Some(ShapeObject {
            id,
            kind: "rectangle".to_owned(),
            attrs: serde_json::json!({ property: value }),
        })
    }

    fn load_snapshot(&mut self, _objects: Vec<ShapeObject>) {
        self.snapshots += 1;
    }

    fn undo(&mut self) {
        self.history.push("undo");
    }

    fn redo(&mut self) {
        self.history.push("redo");
    }
}

#[test]
fn handle_starts_uninstalled_and_with_returns_none() {
    let handle = SceneHandle::default();
    assert!(!handle.is_installed());
    assert_eq!(handle.with(|s| s.active_shape_id()), None);
}

#[test]
fn install_makes_the_scene_reachable() {
    let handle = SceneHandle::default();
    handle.install(Box::new(RecordingScene {
        active: Some("s-1".to_owned()),
        ..RecordingScene::default()
    }));

    assert!(handle.is_installed());
    assert_eq!(handle.with(|s| s.active_shape_id()), Some(Some("s-1".to_owned())));
}

#[test]
fn clones_share_the_same_installed_scene() {
    let handle = SceneHandle::default();
    let alias = handle.clone();
    handle.install(Box::new(RecordingScene::default()));

    assert!(alias.is_installed());
    alias.with(|s| s.undo());
    let undone = handle.with(|s| {
        s.redo();
        true
    });
    assert_eq!(undone, Some(true));
}

#[test]
fn modify_active_without_selection_returns_none() {
    let handle = SceneHandle::default();
    handle.install(Box::new(RecordingScene::default()));

    let result = handle.with(|s| s.modify_active("fill", "#ff0000"));
    assert_eq!(result, Some(None));
}

#[test]
fn modify_active_returns_the_updated_record() {
    let handle = SceneHandle::default();
    handle.install(Box::new(RecordingScene {
        active: Some("s-9".to_owned()),
        ..RecordingScene::default()
    }));

    let shape = handle
        .with(|s| s.modify_active("fill", "#00ff00"))
        .flatten()
        .expect("active shape");
    assert_eq!(shape.id, "s-9");
    assert_eq!(shape.attr_str("fill"), Some("#00ff00"));
}
