//! Magnitude comparison: every operand reduces to a single signed 64-bit
//! magnitude, and the five relational operators compare those magnitudes.
//!
//! Containers reduce to their element count, integers to themselves, text to
//! its base-10 parse, and custom types to whatever their [`Comparable`]
//! accessor reports. Resolution failures are ordinary [`Result`] values;
//! nothing panics and nothing is shared across calls.
//!
//! [`Comparable`]: operand::Comparable

// public exports are one module level down
pub mod compare;
pub mod error;
pub mod operand;

///
/// Prelude
///
/// Prelude contains only domain vocabulary plus the five comparison
/// entry points.
///

pub mod prelude {
    pub use crate::{
        compare::{CompareOp, Comparator, eq, gt, gte, lt, lte},
        error::MagnitudeError,
        operand::{Comparable, Magnitude, Operand, Shape, TextPolicy},
    };
}
