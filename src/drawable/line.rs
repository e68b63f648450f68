use crate::{
    drawable::model::{DEFAULT_STROKE_WIDTH, Drawable, Field},
    foundation::core::{COLOR_BLANK, Color, Vec2},
    identity::allocator::{IdAllocator, ObjectId},
};

/// Straight segment from `start` to `end`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Line {
    id: ObjectId,
    /// Start point.
    pub start: Vec2,
    /// End point.
    pub end: Vec2,
    /// Stroke width. Negative values are kept as-is.
    pub stroke_width: f64,
    /// Stroke color.
    pub stroke_color: Color,
}

impl Line {
    /// Line with a stroke width of `1.0` and a blank stroke color.
    pub fn new(ids: &IdAllocator, start: Vec2, end: Vec2) -> Self {
        Self::with_style(ids, start, end, DEFAULT_STROKE_WIDTH, COLOR_BLANK)
    }

    /// Line with an explicit stroke.
    pub fn with_style(
        ids: &IdAllocator,
        start: Vec2,
        end: Vec2,
        stroke_width: f64,
        stroke_color: Color,
    ) -> Self {
        Self {
            id: ids.next_id(),
            start,
            end,
            stroke_width,
            stroke_color,
        }
    }
}

impl Drawable for Line {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind_name(&self) -> &'static str {
        "Line"
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::vec2("start", self.start),
            Field::vec2("end", self.end),
            Field::float("stroke_width", self.stroke_width),
            Field::color("stroke_color", self.stroke_color),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drawable/line.rs"]
mod tests;
