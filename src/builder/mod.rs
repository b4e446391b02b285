/*!
The ingestion-facing surface: [Builder] wraps a [Database] and exposes
operand canonicalization plus one assertion method per operator, handing off
every fact to the [assertion kernel](crate::context) (§4.2).

This is the layer a corpus reader (or a hand-written demo) is expected to
drive; nothing here computes closure itself --- that is
[run_derivation](crate::procedures::run_derivation)'s job, run once ingestion
is finished.
*/

use crate::context::add_fact;
use crate::db::{Database, PrincipleId};
use crate::lattice::{form::Form, reducibility::Reducibility};
use crate::structures::{fact::Fact, justification::Justification, operator::Operator};
use crate::types::err::ErrorKind;

/// Wraps a [Database] during ingestion.
pub struct Builder<'a> {
    db: &'a mut Database,
}

impl<'a> Builder<'a> {
    pub fn new(db: &'a mut Database) -> Self {
        Builder { db }
    }

    /// Interns `name`, registering a conjunction's atomic conjuncts alongside
    /// it. If the database is configured with `primary_by_default`, the
    /// principle is also declared primary.
    pub fn add_principle(&mut self, name: &str) -> PrincipleId {
        let id = self.db.registry.add_principle(name);
        if self.db.config.primary_by_default {
            self.db.primary.declare(id);
        }
        id
    }

    /// The registered canonical join of `a` and `b`, if any (§4.2). Derivation
    /// never creates new conjunctions; only ingestion (here) or `force_join` does.
    pub fn join_principles(&mut self, a: &PrincipleId, b: &PrincipleId) -> Option<PrincipleId> {
        self.db.registry.join(*a, *b)
    }

    /// Registers the canonical join of `a` and `b` regardless of whether it
    /// already exists, for use by the query resolver's `force` path.
    pub fn force_join(&mut self, a: &PrincipleId, b: &PrincipleId) -> PrincipleId {
        self.db.registry.force_join(*a, *b)
    }

    /// Canonicalizes two raw principle names, registering them if new, and
    /// swaps operands for the `<=`/`</=` corpus aliases (§4.2, §6): those
    /// tokens denote a reversed-direction `→`/`-|>`, so the reader passes
    /// `reversed = true` rather than modelling them as distinct operators.
    pub fn standardize(&mut self, a: &str, reversed: bool, b: &str) -> (PrincipleId, PrincipleId) {
        let id_a = self.add_principle(a);
        let id_b = self.add_principle(b);
        if reversed {
            (id_b, id_a)
        } else {
            (id_a, id_b)
        }
    }

    /// Declares `a` primary (§3).
    pub fn assert_primary(&mut self, a: &PrincipleId) {
        self.db.primary.declare(*a);
    }

    fn leaf(justification: String) -> Result<Justification, ErrorKind> {
        if justification.is_empty() {
            return Err(ErrorKind::UnjustifiedFact);
        }
        Ok(Justification::Leaf(justification))
    }

    pub fn assert_implies(
        &mut self,
        a: &PrincipleId,
        r: Reducibility,
        b: &PrincipleId,
        justification: String,
    ) -> Result<bool, ErrorKind> {
        let jst = Self::leaf(justification)?;
        add_fact(self.db, Fact::relation(*a, Operator::Implies(r), *b), jst, 1)
    }

    pub fn assert_not_implies(
        &mut self,
        a: &PrincipleId,
        r: Reducibility,
        b: &PrincipleId,
        justification: String,
    ) -> Result<bool, ErrorKind> {
        let jst = Self::leaf(justification)?;
        add_fact(self.db, Fact::relation(*a, Operator::NotImplies(r), *b), jst, 1)
    }

    pub fn assert_equiv(
        &mut self,
        a: &PrincipleId,
        r: Reducibility,
        b: &PrincipleId,
        justification: String,
    ) -> Result<bool, ErrorKind> {
        let jst = Self::leaf(justification)?;
        add_fact(self.db, Fact::relation(*a, Operator::Equiv(r), *b), jst, 1)
    }

    pub fn assert_conservative(
        &mut self,
        a: &PrincipleId,
        f: Form,
        b: &PrincipleId,
        justification: String,
    ) -> Result<bool, ErrorKind> {
        let jst = Self::leaf(justification)?;
        add_fact(self.db, Fact::relation(*a, Operator::Conservative(f), *b), jst, 1)
    }

    pub fn assert_non_conservative(
        &mut self,
        a: &PrincipleId,
        f: Form,
        b: &PrincipleId,
        justification: String,
    ) -> Result<bool, ErrorKind> {
        let jst = Self::leaf(justification)?;
        add_fact(self.db, Fact::relation(*a, Operator::NonConservative(f), *b), jst, 1)
    }

    /// `a form f` is an attribution, not an asserted relation between two
    /// principles; it carries its own (possibly empty) justification.
    pub fn assert_form(&mut self, a: &PrincipleId, f: Form, justification: String) -> Result<bool, ErrorKind> {
        let jst = if justification.is_empty() {
            Justification::Leaf(String::new())
        } else {
            Justification::Leaf(justification)
        };
        add_fact(self.db, Fact::has_form(*a, f), jst, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn assert_implies_rejects_empty_justification() {
        let mut db = Database::new();
        let mut b = Builder::new(&mut db);
        let a = b.add_principle("A");
        let c = b.add_principle("C");
        let err = b.assert_implies(&a, Reducibility::Rca, &c, String::new()).unwrap_err();
        assert!(matches!(err, ErrorKind::UnjustifiedFact));
    }

    #[test]
    fn primary_by_default_declares_on_registration() {
        let mut db = Database::from_config(Config {
            force: false,
            primary_by_default: true,
        });
        let mut b = Builder::new(&mut db);
        let a = b.add_principle("A");
        assert!(db.primary.is_primary(a));
    }

    #[test]
    fn standardize_swaps_for_reversed_token() {
        let mut db = Database::new();
        let mut b = Builder::new(&mut db);
        let (x, y) = b.standardize("A", true, "B");
        assert_eq!(db.registry.name(x), "B");
        assert_eq!(db.registry.name(y), "A");
    }
}
