use crate::{
    drawable::model::{DEFAULT_STROKE_WIDTH, Drawable, Field},
    foundation::core::{COLOR_BLANK, Color, Vec2},
    identity::allocator::{IdAllocator, ObjectId},
};

/// Filled circle with an optional outline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Circle {
    id: ObjectId,
    /// Center point.
    pub center: Vec2,
    /// Radius. Not validated.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
    /// Outline width.
    pub stroke_width: f64,
    /// Outline color.
    pub stroke_color: Color,
}

impl Circle {
    /// Circle with the default outline (width `1.0`, blank color).
    pub fn new(ids: &IdAllocator, center: Vec2, radius: f64, color: Color) -> Self {
        Self::with_style(ids, center, radius, color, DEFAULT_STROKE_WIDTH, COLOR_BLANK)
    }

    /// Circle with an explicit outline.
    pub fn with_style(
        ids: &IdAllocator,
        center: Vec2,
        radius: f64,
        color: Color,
        stroke_width: f64,
        stroke_color: Color,
    ) -> Self {
        Self {
            id: ids.next_id(),
            center,
            radius,
            color,
            stroke_width,
            stroke_color,
        }
    }
}

impl Drawable for Circle {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind_name(&self) -> &'static str {
        "Circle"
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::vec2("center", self.center),
            Field::float("radius", self.radius),
            Field::color("color", self.color),
            Field::float("stroke_width", self.stroke_width),
            Field::color("stroke_color", self.stroke_color),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drawable/circle.rs"]
mod tests;
