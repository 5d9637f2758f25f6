//! Pointer coordinate helpers for the live surface.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::net::types::Point;

/// Translate viewport-relative client coordinates into surface coordinates
/// using the surface's bounding-box origin.
#[must_use]
pub fn relative_point(client_x: f64, client_y: f64, rect_x: f64, rect_y: f64) -> Point {
    Point { x: client_x - rect_x, y: client_y - rect_y }
}

/// Surface-relative point for a pointer event on `surface`.
#[cfg(feature = "hydrate")]
pub fn surface_point(ev: &leptos::ev::PointerEvent, surface: &web_sys::HtmlDivElement) -> Point {
    let rect = surface.get_bounding_client_rect();
    relative_point(f64::from(ev.client_x()), f64::from(ev.client_y()), rect.x(), rect.y())
}

/// Keys whose browser default must be suppressed on keydown so they don't
/// leak into the chat input they are about to open.
#[must_use]
pub fn should_prevent_default_key(key: &str) -> bool {
    key == "/"
}
