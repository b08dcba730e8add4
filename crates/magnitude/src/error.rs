use crate::operand::Shape;
use thiserror::Error as ThisError;

///
/// MagnitudeError
///
/// Resolution failures surfaced by the magnitude resolver. Errors are
/// returned as values; resolution never terminates the process.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MagnitudeError {
    #[error("unsupported operand shape: {shape}")]
    UnsupportedShape { shape: Shape },

    #[error("text operand is not a base-10 integer: {text:?}")]
    TextParseFailure { text: String },
}
