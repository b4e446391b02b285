/*!
Error types used in the library.

A single flat [ErrorKind] covers every fallible site in the crate: the
assertion kernel, the builder, the derivation driver, the query resolver and
the corpus reader all return it directly rather than through a per-concern
error type. See `DESIGN.md` for why this crate uses one enum where its
ambient stack convention would otherwise suggest one per concern.
*/

use crate::db::keys::{FactId, PrincipleId};
use crate::structures::fact::Fact;

/// A union of varied error kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An assertion was submitted with no justification text.
    UnjustifiedFact,

    /// The kernel tried to add a fact whose opposite is already present.
    /// Carries both facts, together with the (possibly composite) justification
    /// already on file for the opposing fact.
    Contradiction {
        attempted: Fact,
        attempted_justification: crate::structures::justification::Justification,
        existing: Fact,
        existing_id: FactId,
    },

    /// A query referenced a principle not present in the registry.
    UnknownPrinciple(String),

    /// A query referenced a principle which is an unregistered conjunction of
    /// known atomic principles; registering it requires `force`.
    UnregisteredConjunction(String),

    /// A snapshot's version did not match the engine's.
    Version { expected: u32, found: u32 },

    /// The corpus reader encountered a line it could not parse.
    MalformedInput { line: usize, reason: String },

    /// An attempt to join two principles produced a conjunction which does not
    /// already appear in the registry, and `force` was not requested.
    UnregisteredJoin(String),

    /// An internal consistency error: an implication/non-implication (or
    /// conservation/non-conservation) pair both held for the same pair of
    /// principles, which the monotonicity invariants should have prevented.
    InvariantViolation(String),

    /// A principle id was used which does not exist in the registry it is
    /// paired with.
    DanglingPrincipleId(PrincipleId),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::UnjustifiedFact => write!(f, "fact submitted with no justification"),
            ErrorKind::Contradiction { attempted, existing, .. } => {
                write!(f, "contradiction: {attempted:?} conflicts with established {existing:?}")
            }
            ErrorKind::UnknownPrinciple(name) => write!(f, "unknown principle: {name}"),
            ErrorKind::UnregisteredConjunction(name) => {
                write!(f, "unregistered conjunction: {name} (retry with force)")
            }
            ErrorKind::Version { expected, found } => {
                write!(f, "snapshot version mismatch: expected {expected}, found {found}")
            }
            ErrorKind::MalformedInput { line, reason } => {
                write!(f, "malformed input at line {line}: {reason}")
            }
            ErrorKind::UnregisteredJoin(name) => {
                write!(f, "join produced unregistered conjunction: {name} (retry with force)")
            }
            ErrorKind::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
            ErrorKind::DanglingPrincipleId(id) => write!(f, "dangling principle id: {id:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
