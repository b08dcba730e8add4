mod resolve;
mod shape;


use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    fmt,
};

// re-exports
pub use resolve::{Magnitude, TextPolicy};
pub use shape::Shape;

///
/// Comparable
///
/// The single extension point for custom types: a one-method capability
/// reporting the value's own 64-bit magnitude. Object safe; implementors
/// are carried inside [`Operand::Custom`].
///

pub trait Comparable: fmt::Debug {
    /// Report this value's magnitude.
    fn magnitude(&self) -> i64;
}

///
/// Operand
///
/// Closed set of operand shapes accepted by the comparison dispatcher.
/// Shapes are fixed at construction; there is no runtime type inspection.
///
/// Null → the operand carries no value (e.g. `Option::None`) and has no
/// magnitude; resolving it fails with `UnsupportedShape`.
///

#[derive(Debug)]
pub enum Operand {
    Int(i64),
    Text(String),
    /// Ordered sequence; magnitude is the element count.
    List(Vec<Self>),
    /// Key-value entries; magnitude is the entry count.
    /// Entry order is preserved as constructed.
    Map(Vec<(Self, Self)>),
    /// Queue/buffer shape; magnitude is the queued element count.
    Queue(VecDeque<Self>),
    /// Capability-bearing custom value; magnitude comes from its
    /// [`Comparable`] accessor.
    Custom(Box<dyn Comparable>),
    Null,
}

impl Operand {
    ///
    /// CONSTRUCTION
    ///

    /// Build an `Operand::List` from a list literal.
    ///
    /// Intended for tests and inline construction.
    /// Requires `Clone` because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    /// Build an `Operand::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build an `Operand::Map` from owned key/value entries.
    pub fn from_map<K, V>(entries: Vec<(K, V)>) -> Self
    where
        K: Into<Self>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Wrap a capability-bearing custom value.
    pub fn custom<C>(value: C) -> Self
    where
        C: Comparable + 'static,
    {
        Self::Custom(Box::new(value))
    }

    ///
    /// TYPES
    ///

    /// Returns true if the operand is an integer.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns true if the operand is Text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns true for the container shapes whose magnitude is a count.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.shape().is_container()
    }

    /// Returns true if the operand resolves through its capability accessor.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Returns true if the operand carries no value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stable shape tag used by resolution and diagnostics.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        shape::shape_of(self)
    }
}

// Custom values have no structural identity; they compare by accessor
// result, same as resolution sees them.
impl PartialEq for Operand {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Queue(a), Self::Queue(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => a.magnitude() == b.magnitude(),
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

macro_rules! impl_operand_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Operand {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

// u64 and beyond are intentionally absent: they cannot be widened into a
// signed 64-bit magnitude.
impl_operand_from! {
    i8     => Int,
    i16    => Int,
    i32    => Int,
    i64    => Int,
    u8     => Int,
    u16    => Int,
    u32    => Int,
    &str   => Text,
    String => Text,
}

// isize is at most 64 bits on supported targets.
impl From<isize> for Operand {
    #[expect(clippy::cast_possible_truncation)]
    fn from(v: isize) -> Self {
        Self::Int(v as i64)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Operand {
    fn from(items: Vec<T>) -> Self {
        Self::from_list(items)
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Operand {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<VecDeque<T>> for Operand {
    fn from(items: VecDeque<T>) -> Self {
        Self::Queue(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Self>, V: Into<Self>> From<BTreeMap<K, V>> for Operand {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<Self>, V: Into<Self>> From<HashMap<K, V>> for Operand {
    fn from(entries: HashMap<K, V>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<T: Into<Self>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
