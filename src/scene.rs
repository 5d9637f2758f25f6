//! Boundary to the canvas rendering library.
//!
//! ARCHITECTURE
//! ============
//! The rendering library owns shape geometry, hit-testing, selection, and
//! undo/redo history. This client reaches it only through [`ShapeScene`]:
//! apply a `(property, value)` mutation to the active shape, load resolved
//! storage snapshots, and drive history. The library is installed into the
//! [`SceneHandle`] once the canvas element is mounted.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::cell::RefCell;
use std::rc::Rc;

use send_wrapper::SendWrapper;

use crate::net::types::ShapeObject;

/// Capability interface of the rendering library's object model.
pub trait ShapeScene {
    /// ID of the shape currently active (selected) in the scene, if any.
    fn active_shape_id(&self) -> Option<String>;

    /// Apply a visual mutation to the active shape and return its updated
    /// serialized record, or `None` when no shape is active. Invalid
    /// property/value pairs are the library's to reject or clamp.
    fn modify_active(&mut self, property: &str, value: &str) -> Option<ShapeObject>;

    /// Replace the scene contents with a resolved storage snapshot.
    fn load_snapshot(&mut self, objects: Vec<ShapeObject>);

    /// Step the scene history back.
    fn undo(&mut self);

    /// Step the scene history forward.
    fn redo(&mut self);
}

/// Shared, late-installed handle to the rendering library.
///
/// Provided through Leptos context before the library exists (it mounts with
/// the canvas element); callers degrade to no-ops until installation.
#[derive(Clone)]
pub struct SceneHandle(SendWrapper<Rc<RefCell<Option<Box<dyn ShapeScene>>>>>);

impl Default for SceneHandle {
    fn default() -> Self {
        Self(SendWrapper::new(Rc::new(RefCell::new(None))))
    }
}

impl SceneHandle {
    /// Install the mounted rendering library into the handle.
    pub fn install(&self, scene: Box<dyn ShapeScene>) {
        *self.0.borrow_mut() = Some(scene);
    }

    /// Run `f` against the installed scene; `None` before installation.
    pub fn with<R>(&self, f: impl FnOnce(&mut dyn ShapeScene) -> R) -> Option<R> {
        let mut slot = self.0.borrow_mut();
        slot.as_mut().map(|scene| f(scene.as_mut()))
    }

    /// True once a rendering library has been installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.0.borrow().is_some()
    }
}
