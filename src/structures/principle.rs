/*!
Principle names and conjunction canonicalization.

A principle is either atomic (an opaque name) or a conjunction of atomic
names, written `A+B+C`. This module works purely at the string level; the
[registry](crate::db::registry) is responsible for interning canonical forms
and assigning [PrincipleId](crate::db::keys::PrincipleId)s.
*/

/// The distinguished minimal atomic principle.
pub const RCA: &str = "RCA";

/// Splits a principle name on `+`, returning its atomic conjuncts in the
/// order they appeared (not yet sorted or deduplicated).
pub fn conjuncts(name: &str) -> Vec<&str> {
    name.split('+').collect()
}

/// Canonicalizes a principle name: splits on `+`, deduplicates, sorts, and
/// rejoins with `+`. A single atomic name canonicalizes to itself.
pub fn canonicalize(name: &str) -> String {
    let mut parts: Vec<&str> = conjuncts(name);
    parts.sort_unstable();
    parts.dedup();
    parts.join("+")
}

/// Canonicalizes the union of two (possibly already canonical) principle names.
pub fn canonicalize_join(a: &str, b: &str) -> String {
    let mut parts: Vec<&str> = conjuncts(a).into_iter().chain(conjuncts(b)).collect();
    parts.sort_unstable();
    parts.dedup();
    parts.join("+")
}

/// Returns `true` if the conjunct set of `sub` is a strict subset of the conjunct set of `sup`,
/// i.e. `sup` is a strictly larger conjunction than `sub` (used for conjunction weakening).
pub fn strict_subset(sub: &str, sup: &str) -> bool {
    let sub_set: std::collections::BTreeSet<&str> = conjuncts(sub).into_iter().collect();
    let sup_set: std::collections::BTreeSet<&str> = conjuncts(sup).into_iter().collect();
    sub_set.len() < sup_set.len() && sub_set.is_subset(&sup_set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_sorts_and_dedups() {
        assert_eq!(canonicalize("B+A+B"), "A+B");
        assert_eq!(canonicalize("A"), "A");
    }

    #[test]
    fn join_is_canonical() {
        assert_eq!(canonicalize_join("A", "B"), "A+B");
        assert_eq!(canonicalize_join("A+B", "B+C"), "A+B+C");
    }

    #[test]
    fn strict_subset_detects_proper_containment() {
        assert!(strict_subset("A", "A+B"));
        assert!(!strict_subset("A+B", "A+B"));
        assert!(!strict_subset("A+C", "A+B"));
    }
}
