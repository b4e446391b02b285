/*!
The principle [Registry]: interns principle names and normalizes
conjunctions.
*/

use std::collections::HashMap;

use crate::structures::principle;

use super::keys::PrincipleId;

/// Interns principle names, keeping every registered conjunction's atomic
/// conjuncts registered alongside it (§3 invariant).
#[derive(Default)]
pub struct Registry {
    /// Canonical name of each principle, indexed by [PrincipleId].
    names: Vec<String>,

    /// Sorted atomic conjuncts of each principle (a singleton for an atomic principle).
    conjuncts: Vec<Vec<String>>,

    by_name: HashMap<String, PrincipleId>,

    /// Ids in sorted-canonical-name order, recomputed lazily on insertion.
    sorted: Vec<PrincipleId>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `name`, canonicalizing it first (sorted, deduplicated conjunct
    /// list). Every atomic conjunct of a conjunction is interned alongside it.
    /// Returns the id of the canonical form.
    pub fn add_principle(&mut self, name: &str) -> PrincipleId {
        let canonical = principle::canonicalize(name);
        let conjuncts: Vec<String> = principle::conjuncts(&canonical)
            .into_iter()
            .map(str::to_owned)
            .collect();

        for atom in &conjuncts {
            if !self.by_name.contains_key(atom) {
                self.intern(atom.clone(), vec![atom.clone()]);
            }
        }

        self.intern(canonical, conjuncts)
    }

    fn intern(&mut self, canonical: String, conjuncts: Vec<String>) -> PrincipleId {
        if let Some(id) = self.by_name.get(&canonical) {
            return *id;
        }
        let id = PrincipleId(self.names.len() as u32);
        self.by_name.insert(canonical.clone(), id);
        self.names.push(canonical);
        self.conjuncts.push(conjuncts);

        let pos = self
            .sorted
            .partition_point(|other| self.names[other.index()] < self.names[id.index()]);
        self.sorted.insert(pos, id);

        id
    }

    /// Looks up a principle by (possibly non-canonical) name, without registering it.
    pub fn get(&self, name: &str) -> Option<PrincipleId> {
        let canonical = principle::canonicalize(name);
        self.by_name.get(&canonical).copied()
    }

    /// The canonical name of a registered principle.
    pub fn name(&self, id: PrincipleId) -> &str {
        &self.names[id.index()]
    }

    /// The sorted, deduplicated atomic conjuncts of a registered principle.
    pub fn conjuncts(&self, id: PrincipleId) -> &[String] {
        &self.conjuncts[id.index()]
    }

    /// Canonicalizes the union of two registered principles, returning its id
    /// only if that canonical conjunction is already registered.
    pub fn join(&self, a: PrincipleId, b: PrincipleId) -> Option<PrincipleId> {
        let joined = principle::canonicalize_join(self.name(a), self.name(b));
        self.by_name.get(&joined).copied()
    }

    /// Registers the canonical join of two principles regardless of whether it
    /// was already present (used for `force`).
    pub fn force_join(&mut self, a: PrincipleId, b: PrincipleId) -> PrincipleId {
        let joined = principle::canonicalize_join(self.name(a), self.name(b));
        self.add_principle(&joined)
    }

    /// Ensures the distinguished minimal principle `RCA` is registered, returning its id.
    pub fn rca(&mut self) -> PrincipleId {
        self.add_principle(principle::RCA)
    }

    /// Iterates over every registered principle in sorted-canonical-name order,
    /// the fixed, reproducible order the derivation driver uses.
    pub fn iter_sorted(&self) -> impl Iterator<Item = PrincipleId> + '_ {
        self.sorted.iter().copied()
    }

    /// The number of registered principles (atomic and conjunctive).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry holds no principles.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunction_registers_its_conjuncts() {
        let mut r = Registry::new();
        let ab = r.add_principle("B+A");
        assert_eq!(r.name(ab), "A+B");
        assert!(r.get("A").is_some());
        assert!(r.get("B").is_some());
    }

    #[test]
    fn join_only_hits_when_registered() {
        let mut r = Registry::new();
        let a = r.add_principle("A");
        let b = r.add_principle("B");
        assert!(r.join(a, b).is_none());
        r.add_principle("A+B");
        assert!(r.join(a, b).is_some());
    }

    #[test]
    fn sorted_order_is_stable_by_name() {
        let mut r = Registry::new();
        r.add_principle("C");
        r.add_principle("A");
        r.add_principle("B");
        let names: Vec<_> = r.iter_sorted().map(|id| r.name(id).to_string()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
