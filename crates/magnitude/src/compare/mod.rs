#[cfg(test)]
mod tests;

use crate::{
    error::MagnitudeError,
    operand::{Operand, TextPolicy},
};
use std::fmt;

///
/// CompareOp
///
/// The five relational operators supported by the dispatcher.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    /// Stable operator label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

///
/// Comparator
///
/// Comparison dispatcher carrying the text-resolution policy applied to
/// both operands. The default comparator is lenient.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Comparator {
    policy: TextPolicy,
}

impl Comparator {
    #[must_use]
    pub const fn new(policy: TextPolicy) -> Self {
        Self { policy }
    }

    /// Comparator that surfaces text parse failures instead of zeroing them.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(TextPolicy::Strict)
    }

    #[must_use]
    pub const fn policy(&self) -> TextPolicy {
        self.policy
    }

    /// Resolve both operands and apply `op` to their magnitudes.
    ///
    /// A resolution failure on either side fails the whole comparison.
    pub fn compare(
        &self,
        op: CompareOp,
        left: &Operand,
        right: &Operand,
    ) -> Result<bool, MagnitudeError> {
        let left = left.magnitude_with(self.policy)?;
        let right = right.magnitude_with(self.policy)?;

        let ord = left.cmp(&right);
        let result = match op {
            CompareOp::Eq => ord.is_eq(),
            CompareOp::Lt => ord.is_lt(),
            CompareOp::Lte => ord.is_le(),
            CompareOp::Gt => ord.is_gt(),
            CompareOp::Gte => ord.is_ge(),
        };

        Ok(result)
    }

    /// Returns true if `left`'s magnitude is greater than `right`'s.
    pub fn gt(&self, left: &Operand, right: &Operand) -> Result<bool, MagnitudeError> {
        self.compare(CompareOp::Gt, left, right)
    }

    /// Returns true if `left`'s magnitude is greater than or equal to `right`'s.
    pub fn gte(&self, left: &Operand, right: &Operand) -> Result<bool, MagnitudeError> {
        self.compare(CompareOp::Gte, left, right)
    }

    /// Returns true if `left`'s magnitude is less than `right`'s.
    pub fn lt(&self, left: &Operand, right: &Operand) -> Result<bool, MagnitudeError> {
        self.compare(CompareOp::Lt, left, right)
    }

    /// Returns true if `left`'s magnitude is less than or equal to `right`'s.
    pub fn lte(&self, left: &Operand, right: &Operand) -> Result<bool, MagnitudeError> {
        self.compare(CompareOp::Lte, left, right)
    }

    /// Returns true if the two magnitudes are equal.
    pub fn eq(&self, left: &Operand, right: &Operand) -> Result<bool, MagnitudeError> {
        self.compare(CompareOp::Eq, left, right)
    }
}

/// Returns true if `left`'s magnitude is greater than `right`'s.
///
/// Containers compare by element count, integers by value, text by its
/// base-10 parse (zero on failure), and custom types through their
/// `Comparable` accessor. The other four entry points behave identically
/// apart from the final operator.
pub fn gt<L, R>(left: L, right: R) -> Result<bool, MagnitudeError>
where
    L: Into<Operand>,
    R: Into<Operand>,
{
    Comparator::default().gt(&left.into(), &right.into())
}

/// Returns true if `left`'s magnitude is greater than or equal to `right`'s.
pub fn gte<L, R>(left: L, right: R) -> Result<bool, MagnitudeError>
where
    L: Into<Operand>,
    R: Into<Operand>,
{
    Comparator::default().gte(&left.into(), &right.into())
}

/// Returns true if `left`'s magnitude is less than `right`'s.
pub fn lt<L, R>(left: L, right: R) -> Result<bool, MagnitudeError>
where
    L: Into<Operand>,
    R: Into<Operand>,
{
    Comparator::default().lt(&left.into(), &right.into())
}

/// Returns true if `left`'s magnitude is less than or equal to `right`'s.
pub fn lte<L, R>(left: L, right: R) -> Result<bool, MagnitudeError>
where
    L: Into<Operand>,
    R: Into<Operand>,
{
    Comparator::default().lte(&left.into(), &right.into())
}

/// Returns true if the two magnitudes are equal.
pub fn eq<L, R>(left: L, right: R) -> Result<bool, MagnitudeError>
where
    L: Into<Operand>,
    R: Into<Operand>,
{
    Comparator::default().eq(&left.into(), &right.into())
}
