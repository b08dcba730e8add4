use crate::operand::Operand;
use std::fmt;

///
/// Shape
///
/// Stable operand-shape tag used by resolution and diagnostics.
/// One tag per [`Operand`] variant.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    Int,
    Text,
    List,
    Map,
    Queue,
    Custom,
    Null,
}

impl Shape {
    /// Stable human-readable shape label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Text => "text",
            Self::List => "list",
            Self::Map => "map",
            Self::Queue => "queue",
            Self::Custom => "custom",
            Self::Null => "null",
        }
    }

    /// Returns true for the container shapes whose magnitude is a count.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::List | Self::Map | Self::Queue)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Stable shape tag for an operand.
#[must_use]
pub(crate) const fn shape_of(operand: &Operand) -> Shape {
    match operand {
        Operand::Int(_) => Shape::Int,
        Operand::Text(_) => Shape::Text,
        Operand::List(_) => Shape::List,
        Operand::Map(_) => Shape::Map,
        Operand::Queue(_) => Shape::Queue,
        Operand::Custom(_) => Shape::Custom,
        Operand::Null => Shape::Null,
    }
}
