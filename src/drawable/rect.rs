use crate::{
    drawable::model::{DEFAULT_STROKE_WIDTH, Drawable, Field},
    foundation::core::{COLOR_BLANK, Color, Vec2},
    identity::allocator::{IdAllocator, ObjectId},
};

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Rect {
    id: ObjectId,
    /// Top-left corner.
    pub position: Vec2,
    /// `(width, height)`. Negative extents are kept as-is.
    pub size: Vec2,
    /// Fill color.
    pub color: Color,
    /// Outline width.
    pub stroke_width: f64,
    /// Outline color.
    pub stroke_color: Color,
}

impl Rect {
    /// Rectangle with the default outline (width `1.0`, blank color).
    pub fn new(ids: &IdAllocator, position: Vec2, size: Vec2, color: Color) -> Self {
        Self::with_style(ids, position, size, color, DEFAULT_STROKE_WIDTH, COLOR_BLANK)
    }

    /// Rectangle with an explicit outline.
    pub fn with_style(
        ids: &IdAllocator,
        position: Vec2,
        size: Vec2,
        color: Color,
        stroke_width: f64,
        stroke_color: Color,
    ) -> Self {
        Self {
            id: ids.next_id(),
            position,
            size,
            color,
            stroke_width,
            stroke_color,
        }
    }
}

impl Drawable for Rect {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind_name(&self) -> &'static str {
        "Rect"
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::vec2("position", self.position),
            Field::vec2("size", self.size),
            Field::color("color", self.color),
            Field::float("stroke_width", self.stroke_width),
            Field::color("stroke_color", self.stroke_color),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drawable/rect.rs"]
mod tests;
