/*!
The tagged union of relations a [Fact](super::fact::Fact) may assert between
two principles.
*/

use crate::lattice::{form::Form, reducibility::Reducibility};

/// A binary relation between two principles, or the pseudo-relation used for
/// form attribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `a r-> b`: `a` `r`-reduces to `b`.
    Implies(Reducibility),

    /// `a r-|> b`: `a` does not `r`-reduce to `b`.
    NotImplies(Reducibility),

    /// `a r<-> b`: `a` and `b` `r`-reduce to each other.
    Equiv(Reducibility),

    /// `a f-c b`: `a` is `f`-conservative over `b`.
    Conservative(Form),

    /// `a f-nc b`: `a` is not `f`-conservative over `b`.
    NonConservative(Form),
}

impl Operator {
    /// The opposite operator used for contradiction detection: `Implies` against
    /// `NotImplies` at the same reducibility, `Conservative` against
    /// `NonConservative` at the same form. [Equiv] has no direct opposite operator
    /// (its negation is expressed as a pair of `NotImplies` facts).
    pub fn opposite(self) -> Option<Operator> {
        match self {
            Operator::Implies(r) => Some(Operator::NotImplies(r)),
            Operator::NotImplies(r) => Some(Operator::Implies(r)),
            Operator::Conservative(f) => Some(Operator::NonConservative(f)),
            Operator::NonConservative(f) => Some(Operator::Conservative(f)),
            Operator::Equiv(_) => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Implies(r) => write!(f, "{r}->"),
            Operator::NotImplies(r) => write!(f, "{r}-|>"),
            Operator::Equiv(r) => write!(f, "{r}<->"),
            Operator::Conservative(form) => write!(f, "{form}c"),
            Operator::NonConservative(form) => write!(f, "n{form}c"),
        }
    }
}
