/*!
[Fact], the unit interned into a [FactId](crate::db::keys::FactId) and given a
[justification](super::justification::Justification).
*/

use crate::db::keys::PrincipleId;
use crate::lattice::form::Form;

use super::operator::Operator;

/// A single established (or to-be-established) fact: either a binary relation
/// between two principles, or an attribution of syntactic form to one.
///
/// Unlike the relation store's bitmasks, a `Fact` names one specific
/// reducibility or form, matching the granularity at which justifications are
/// tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fact {
    /// `(a, op, b)`.
    Relation {
        a: PrincipleId,
        op: Operator,
        b: PrincipleId,
    },

    /// `(a, form, f)`.
    HasForm { a: PrincipleId, f: Form },
}

impl Fact {
    /// Shorthand for a [Relation](Fact::Relation) fact.
    pub fn relation(a: PrincipleId, op: Operator, b: PrincipleId) -> Self {
        Fact::Relation { a, op, b }
    }

    /// Shorthand for a [HasForm](Fact::HasForm) fact.
    pub fn has_form(a: PrincipleId, f: Form) -> Self {
        Fact::HasForm { a, f }
    }

    /// The opposite fact used for contradiction detection, if any.
    ///
    /// `Equiv` facts have no opposite at the fact level (their negation is a
    /// pair of `NotImplies` facts, checked separately by the kernel).
    pub fn opposite(&self) -> Option<Fact> {
        match self {
            Fact::Relation { a, op, b } => op.opposite().map(|op| Fact::Relation { a: *a, op, b: *b }),
            Fact::HasForm { .. } => None,
        }
    }
}
