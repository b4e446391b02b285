/*!
[QueryOutcome]: the result handed back by the [query resolver](crate::query).
*/

use crate::db::FactId;

/// The outcome of resolving a single query (§4.5).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The fact holds; `proof` is its rendered justification tree (§4.6).
    Holds { fact_id: FactId, proof: String },

    /// The fact does not hold, for the given `reason` (not found, or found to
    /// conflict with the opposite operator).
    Fails { reason: String },
}

impl QueryOutcome {
    /// Whether the query resolved positively.
    pub fn holds(&self) -> bool {
        matches!(self, QueryOutcome::Holds { .. })
    }

    /// The rendered proof, if the query held.
    pub fn proof(&self) -> Option<&str> {
        match self {
            QueryOutcome::Holds { proof, .. } => Some(proof),
            QueryOutcome::Fails { .. } => None,
        }
    }
}
