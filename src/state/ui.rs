//! Local UI state for the design panel.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (attribute drafts, the editing
//! flag) out of room state so remote echoes and local typing can't race.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::ShapeObject;

/// UI state for the design panel and active-shape tracking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Shape currently active in the rendering library, if any.
    pub active_shape_id: Option<String>,
    /// Draft values shown in the design panel inputs.
    pub attributes: ElementAttributes,
    /// True while the local user is actively typing in a panel input.
    /// Remote storage echoes must not overwrite drafts while set.
    pub is_editing: bool,
}

/// Editable attribute drafts, kept as strings for direct input binding.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementAttributes {
    pub width: String,
    pub height: String,
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
    pub fill: String,
    pub stroke: String,
}

impl Default for ElementAttributes {
    fn default() -> Self {
        Self {
            width: String::new(),
            height: String::new(),
            font_family: "Helvetica".to_owned(),
            font_size: "36".to_owned(),
            font_weight: "400".to_owned(),
            fill: "#aabbcc".to_owned(),
            stroke: "#aabbcc".to_owned(),
        }
    }
}

impl ElementAttributes {
    /// Seed the drafts from a serialized shape record, falling back to the
    /// current draft when the record omits an attribute.
    pub fn sync_from_shape(&mut self, shape: &ShapeObject) {
        if let Some(width) = shape.attr_f64("width") {
            self.width = format_dimension(width);
        }
        if let Some(height) = shape.attr_f64("height") {
            self.height = format_dimension(height);
        }
        if let Some(family) = shape.attr_str("fontFamily") {
            self.font_family = family.to_owned();
        }
        if let Some(size) = shape.attr_f64("fontSize") {
            self.font_size = format_dimension(size);
        }
        if let Some(weight) = shape.attr_f64("fontWeight") {
            self.font_weight = format_dimension(weight);
        }
        if let Some(fill) = shape.attr_str("fill") {
            self.fill = fill.to_owned();
        }
        if let Some(stroke) = shape.attr_str("stroke") {
            self.stroke = stroke.to_owned();
        }
    }

    /// Set the draft backing a design-panel property by its wire name.
    /// Unknown properties are ignored; the rendering library is the
    /// authority on what is applicable.
    pub fn set_property(&mut self, property: &str, value: &str) {
        match property {
            "width" => self.width = value.to_owned(),
            "height" => self.height = value.to_owned(),
            "fontFamily" => self.font_family = value.to_owned(),
            "fontSize" => self.font_size = value.to_owned(),
            "fontWeight" => self.font_weight = value.to_owned(),
            "fill" => self.fill = value.to_owned(),
            "stroke" => self.stroke = value.to_owned(),
            _ => {}
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_dimension(value: f64) -> String {
    (value.round() as i64).to_string()
}
