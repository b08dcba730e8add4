use crate::{error::MagnitudeError, operand::Operand};
use derive_more::Display;

///
/// Magnitude
///
/// The signed 64-bit representative derived from an operand; the sole
/// unit of comparison.
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Magnitude(i64);

impl Magnitude {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Magnitude of a container with `len` elements.
    ///
    /// Counts wrap per native signed 64-bit semantics; there is no overflow
    /// handling beyond that.
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub const fn from_len(len: usize) -> Self {
        Self(len as i64)
    }
}

impl From<i64> for Magnitude {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Magnitude> for i64 {
    fn from(magnitude: Magnitude) -> Self {
        magnitude.0
    }
}

///
/// TextPolicy
///
/// How text operands that fail base-10 parsing resolve.
///
/// `Lenient` preserves the historical behavior of defaulting to zero; note
/// the hazard that any two unparsable texts then compare equal. `Strict`
/// surfaces the failure as [`MagnitudeError::TextParseFailure`].
///
/// Out-of-range text counts as a parse failure here; historically it was
/// clamped to the nearest representable value instead.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextPolicy {
    /// Parse failure resolves to magnitude zero.
    #[default]
    Lenient,
    /// Parse failure is an error.
    Strict,
}

impl Operand {
    /// Resolve this operand's magnitude under the default (lenient) policy.
    pub fn magnitude(&self) -> Result<Magnitude, MagnitudeError> {
        self.magnitude_with(TextPolicy::default())
    }

    /// Resolve this operand's magnitude.
    ///
    /// Resolution policy, by shape:
    /// - containers resolve to their element/entry count
    /// - integers resolve to themselves
    /// - text resolves to its base-10 parse, per `policy` on failure
    /// - custom values resolve through their [`Comparable`] accessor
    /// - null has no magnitude and fails
    ///
    /// [`Comparable`]: crate::operand::Comparable
    pub fn magnitude_with(&self, policy: TextPolicy) -> Result<Magnitude, MagnitudeError> {
        match self {
            Self::Int(value) => Ok(Magnitude::new(*value)),
            Self::Text(text) => parse_text(text, policy),
            Self::List(items) => Ok(Magnitude::from_len(items.len())),
            Self::Map(entries) => Ok(Magnitude::from_len(entries.len())),
            Self::Queue(items) => Ok(Magnitude::from_len(items.len())),
            Self::Custom(value) => Ok(Magnitude::new(value.magnitude())),
            Self::Null => Err(MagnitudeError::UnsupportedShape {
                shape: self.shape(),
            }),
        }
    }
}

// Text outside the i64 range counts as a parse failure.
fn parse_text(text: &str, policy: TextPolicy) -> Result<Magnitude, MagnitudeError> {
    match text.parse::<i64>() {
        Ok(value) => Ok(Magnitude::new(value)),
        Err(_) => match policy {
            TextPolicy::Lenient => Ok(Magnitude::default()),
            TextPolicy::Strict => Err(MagnitudeError::TextParseFailure {
                text: text.to_string(),
            }),
        },
    }
}
