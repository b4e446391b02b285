/*!
The [JustificationStore]: interns [Fact]s into a dense id space and tracks
each fact's [Justification] and proof complexity.
*/

use std::collections::HashMap;

use crate::structures::{fact::Fact, justification::Justification};

use super::keys::FactId;

/// Interns facts into a dense [FactId] space, and holds the current best
/// (minimum-complexity) justification for each.
#[derive(Default)]
pub struct JustificationStore {
    facts: Vec<Fact>,
    by_fact: HashMap<Fact, FactId>,
    justifications: Vec<Justification>,
    complexity: Vec<u32>,
}

impl JustificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of `fact`, if it has been established.
    pub fn id_of(&self, fact: &Fact) -> Option<FactId> {
        self.by_fact.get(fact).copied()
    }

    /// The fact behind `id`.
    pub fn fact(&self, id: FactId) -> Fact {
        self.facts[id.index()]
    }

    /// The current justification for `id`.
    pub fn justification(&self, id: FactId) -> &Justification {
        &self.justifications[id.index()]
    }

    /// The current proof complexity for `id`.
    pub fn complexity(&self, id: FactId) -> u32 {
        self.complexity[id.index()]
    }

    /// Installs `justification` for `fact` with complexity `cplx` if `fact` is new,
    /// or if `cplx` is strictly less than the complexity already on file.
    ///
    /// Returns `Some(id)` if the fact was newly installed or its justification was
    /// replaced by a shorter one, `None` if the existing justification was kept.
    pub fn install(&mut self, fact: Fact, justification: Justification, cplx: u32) -> Option<FactId> {
        if let Some(&id) = self.by_fact.get(&fact) {
            if cplx < self.complexity[id.index()] {
                self.justifications[id.index()] = justification;
                self.complexity[id.index()] = cplx;
                Some(id)
            } else {
                None
            }
        } else {
            let id = FactId(self.facts.len() as u32);
            self.facts.push(fact);
            self.by_fact.insert(fact, id);
            self.justifications.push(justification);
            self.complexity.push(cplx);
            Some(id)
        }
    }

    /// The number of distinct facts interned.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether no fact has been established yet.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterates over every interned `(id, fact)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (FactId, Fact)> + '_ {
        self.facts.iter().enumerate().map(|(i, f)| (FactId(i as u32), *f))
    }

    /// Checks that the support graph of composite justifications is acyclic and that every
    /// cited fact is present, per the §3 justification-store invariant. Returns the first
    /// offending [FactId] found, if any.
    pub fn check_acyclic(&self) -> Result<(), FactId> {
        let mut state = vec![0u8; self.facts.len()]; // 0 = unvisited, 1 = in progress, 2 = done
        for i in 0..self.facts.len() {
            self.visit(FactId(i as u32), &mut state)?;
        }
        Ok(())
    }

    fn visit(&self, id: FactId, state: &mut [u8]) -> Result<(), FactId> {
        match state[id.index()] {
            2 => return Ok(()),
            1 => return Err(id),
            _ => {}
        }
        state[id.index()] = 1;
        if let Justification::Composite(supports) = &self.justifications[id.index()] {
            for support in supports {
                self.visit(*support, state)?;
            }
        }
        state[id.index()] = 2;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::keys::PrincipleId;
    use crate::lattice::reducibility::Reducibility;
    use crate::structures::operator::Operator;

    fn fact(a: u32, b: u32) -> Fact {
        Fact::relation(PrincipleId(a), Operator::Implies(Reducibility::Rca), PrincipleId(b))
    }

    #[test]
    fn new_fact_installs() {
        let mut store = JustificationStore::new();
        let id = store.install(fact(0, 1), Justification::Leaf("x".into()), 1);
        assert!(id.is_some());
        assert_eq!(store.complexity(id.unwrap()), 1);
    }

    #[test]
    fn shorter_justification_replaces() {
        let mut store = JustificationStore::new();
        let id = store.install(fact(0, 1), Justification::Leaf("x".into()), 5).unwrap();
        let replace = store.install(fact(0, 1), Justification::Leaf("y".into()), 2);
        assert_eq!(replace, Some(id));
        assert_eq!(store.complexity(id), 2);
    }

    #[test]
    fn longer_justification_is_kept_out() {
        let mut store = JustificationStore::new();
        let id = store.install(fact(0, 1), Justification::Leaf("x".into()), 2).unwrap();
        let replace = store.install(fact(0, 1), Justification::Leaf("y".into()), 5);
        assert_eq!(replace, None);
        assert_eq!(store.complexity(id), 2);
    }

    #[test]
    fn acyclic_check_passes_for_dag() {
        let mut store = JustificationStore::new();
        let leaf = store.install(fact(0, 1), Justification::Leaf("x".into()), 1).unwrap();
        store.install(fact(1, 2), Justification::Composite(vec![leaf]), 2).unwrap();
        assert!(store.check_acyclic().is_ok());
    }
}
