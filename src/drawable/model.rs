use std::fmt;

use crate::{
    foundation::core::{Color, Vec2},
    identity::allocator::ObjectId,
};

/// Default stroke width shared by every drawable kind.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// A visual primitive that can be placed in a [`crate::Scene`] and written to a scene file.
///
/// Implementors expose their attributes as an ordered list of [`Field`]s; the serializer
/// owns everything else about the block layout. Field order is part of the file format and
/// must not change once a kind has shipped.
pub trait Drawable: fmt::Debug + Send + Sync {
    /// Id assigned at construction.
    fn id(&self) -> ObjectId;

    /// Name written before the opening brace, e.g. `Line`.
    fn kind_name(&self) -> &'static str;

    /// Attributes in declaration order, excluding the id (which is always written first).
    fn fields(&self) -> Vec<Field>;
}

/// One named attribute of a drawable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    /// Attribute name as written to the file.
    pub name: &'static str,
    /// Attribute value.
    pub value: FieldValue,
}

impl Field {
    /// Scalar attribute.
    pub fn float(name: &'static str, value: f64) -> Self {
        Self {
            name,
            value: FieldValue::Float(value),
        }
    }

    /// Point or size attribute.
    pub fn vec2(name: &'static str, value: Vec2) -> Self {
        Self {
            name,
            value: FieldValue::Vec2(value),
        }
    }

    /// Color attribute.
    pub fn color(name: &'static str, value: Color) -> Self {
        Self {
            name,
            value: FieldValue::Color(value),
        }
    }
}

/// Typed attribute value.
///
/// `Display` is the canonical textual form: floats use the shortest round-trippable
/// representation that always carries a decimal point or exponent (`1.0`, `0.25`, `1e20`),
/// tuples are parenthesized and separated by `", "`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue {
    /// Single scalar.
    Float(f64),
    /// `(x, y)` pair.
    Vec2(Vec2),
    /// `(r, g, b, a)` quadruple.
    Color(Color),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Vec2(v) => write!(f, "({:?}, {:?})", v.x, v.y),
            Self::Color(c) => write!(f, "({:?}, {:?}, {:?}, {:?})", c.r, c.g, c.b, c.a),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drawable/model.rs"]
mod tests;
