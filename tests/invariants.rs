use rm_zoo::builder::Builder;
use rm_zoo::db::{Database, PrincipleId};
use rm_zoo::lattice::{self, form::Form, reducibility::Reducibility, LatticeElement};
use rm_zoo::procedures::run_derivation;
use rm_zoo::structures::fact::Fact;
use rm_zoo::structures::justification::Justification;

mod invariants {
    use super::*;

    /// Builds a modestly interconnected database to exercise closure across
    /// several principles, conjunctions and operators at once.
    fn sample_database() -> Database {
        let mut db = Database::new();
        let mut b = Builder::new(&mut db);
        let a = b.add_principle("A");
        let bb = b.add_principle("B");
        let c = b.add_principle("C");
        let d = b.add_principle("D");
        b.add_principle("A+B");

        b.assert_implies(&a, Reducibility::StrongWeihrauch, &bb, "a-sw-b".into()).unwrap();
        b.assert_implies(&bb, Reducibility::Weihrauch, &c, "b-w-c".into()).unwrap();
        b.assert_equiv(&c, Reducibility::Rca, &d, "c-rca-d".into()).unwrap();
        b.assert_not_implies(&d, Reducibility::StrongWeihrauch, &a, "d-not-sw-a".into()).unwrap();
        b.assert_form(&c, Form::Pi03, String::new()).unwrap();

        drop(b);
        run_derivation(&mut db).unwrap();
        db
    }

    fn all_pairs(db: &Database) -> Vec<(PrincipleId, PrincipleId)> {
        let ids: Vec<PrincipleId> = db.registry.iter_sorted().collect();
        let mut pairs = Vec::new();
        for &a in &ids {
            for &b in &ids {
                pairs.push((a, b));
            }
        }
        pairs
    }

    /// 1. Downward/upward closures: `implies` closed under `weaker`, `not_implies`
    /// under `stronger`, `conservative` under `F.stronger` (downward), `non_conservative`
    /// under `F.weaker` (upward).
    #[test]
    fn relation_masks_are_closed() {
        let db = sample_database();
        for (a, b) in all_pairs(&db) {
            let cell = db.relations.cell(a, b);
            for r in lattice::list::<Reducibility>(cell.implies) {
                assert_eq!(cell.implies & r.weaker(), r.weaker(), "implies[{a:?},{b:?}] not closed under weaker({r})");
            }
            for r in lattice::list::<Reducibility>(cell.not_implies) {
                assert_eq!(
                    cell.not_implies & r.stronger(),
                    r.stronger(),
                    "not_implies[{a:?},{b:?}] not closed under stronger({r})"
                );
            }
            for f in lattice::list::<Form>(cell.conservative) {
                assert_eq!(
                    cell.conservative & f.stronger(),
                    f.stronger(),
                    "conservative[{a:?},{b:?}] not closed under F.stronger({f})"
                );
            }
            for f in lattice::list::<Form>(cell.non_conservative) {
                assert_eq!(
                    cell.non_conservative & f.weaker(),
                    f.weaker(),
                    "non_conservative[{a:?},{b:?}] not closed under F.weaker({f})"
                );
            }
        }
    }

    /// 2. `implies` and `not_implies` never overlap; neither do `conservative`
    /// and `non_conservative`.
    #[test]
    fn implies_and_conservation_masks_are_disjoint() {
        let db = sample_database();
        for (a, b) in all_pairs(&db) {
            let cell = db.relations.cell(a, b);
            assert_eq!(cell.implies & cell.not_implies, 0, "{a:?},{b:?} implies/not_implies overlap");
            assert_eq!(
                cell.conservative & cell.non_conservative,
                0,
                "{a:?},{b:?} conservative/non_conservative overlap"
            );
        }
    }

    /// 3. Every fact with a composite justification has every referenced fact
    /// also present in the justification store.
    #[test]
    fn composite_justifications_reference_present_facts() {
        let db = sample_database();
        for (id, _fact) in db.justifications.iter() {
            if let Justification::Composite(supports) = db.justifications.justification(id) {
                for &support in supports {
                    let support_fact = db.justifications.fact(support);
                    assert!(
                        db.justifications.id_of(&support_fact).is_some(),
                        "composite justification of {id:?} cites missing support {support:?}"
                    );
                }
            }
        }
    }

    /// 4. Reflexivity: every principle `r->`s and `r<->`s itself for every
    /// reducibility, and is `f-c` itself for every form.
    #[test]
    fn reflexivity_holds_for_every_principle() {
        let db = sample_database();
        let rca = db.registry.get("RCA").unwrap();
        for p in db.registry.iter_sorted() {
            let self_cell = db.relations.cell(p, p);
            for r in Reducibility::all().iter().copied() {
                assert!(lattice::is_present(r, self_cell.implies), "{p:?} r-> itself missing for {r}");
                assert!(lattice::is_present(r, self_cell.equivalent), "{p:?} r<-> itself missing for {r}");
            }
            for f in Form::all().iter().copied() {
                assert!(lattice::is_present(f, self_cell.conservative), "{p:?} f-c itself missing for {f}");
            }
            if p != rca {
                for r in Reducibility::all().iter().copied() {
                    assert!(
                        lattice::is_present(r, db.relations.cell(p, rca).implies),
                        "{p:?} r-> RCA missing for {r}"
                    );
                }
            }
        }
    }

    /// 5. Idempotence: re-running derivation over an already-closed database
    /// changes no relation mask, and no fact's justification grows more
    /// complex (the kernel only ever replaces a justification with a
    /// strictly cheaper one, so a fixpoint re-run must leave complexity
    /// unchanged or lower, never higher).
    #[test]
    fn rerunning_derivation_is_idempotent() {
        let mut db = sample_database();
        let before: Vec<_> = db.relations.pairs().collect();
        let complexity_before: Vec<(Fact, u32)> = db
            .justifications
            .iter()
            .map(|(id, fact)| (fact, db.justifications.complexity(id)))
            .collect();

        run_derivation(&mut db).unwrap();

        let mut after: Vec<_> = db.relations.pairs().collect();
        let mut before_sorted = before;
        before_sorted.sort_by_key(|(a, b, _)| (a.index(), b.index()));
        after.sort_by_key(|(a, b, _)| (a.index(), b.index()));
        assert_eq!(before_sorted, after, "relation masks changed on a second derivation run");

        for (fact, complexity) in complexity_before {
            if let Some(id) = db.justifications.id_of(&fact) {
                assert!(
                    db.justifications.complexity(id) <= complexity,
                    "complexity of {fact:?} increased on a second derivation run"
                );
            }
        }
    }

    /// 6. Symmetry: `equivalent[a,b] = equivalent[b,a]`, and for every `r` in
    /// it both directed `implies` facts are present.
    #[test]
    fn equivalence_is_symmetric() {
        let db = sample_database();
        for (a, b) in all_pairs(&db) {
            let forward = db.relations.cell(a, b).equivalent;
            let backward = db.relations.cell(b, a).equivalent;
            assert_eq!(forward, backward, "equivalent[{a:?},{b:?}] != equivalent[{b:?},{a:?}]");
            for r in lattice::list::<Reducibility>(forward) {
                assert!(lattice::is_present(r, db.relations.cell(a, b).implies));
                assert!(lattice::is_present(r, db.relations.cell(b, a).implies));
            }
        }
    }

    /// 7. Conjunction coherence: a registered conjunction implies each of its
    /// atomic conjuncts, for every reducibility.
    #[test]
    fn registered_conjunction_implies_its_conjuncts() {
        let db = sample_database();
        let ab = db.registry.get("A+B").unwrap();
        for conjunct_name in db.registry.conjuncts(ab).to_vec() {
            let conjunct = db.registry.get(&conjunct_name).unwrap();
            for r in Reducibility::all().iter().copied() {
                assert!(
                    lattice::is_present(r, db.relations.cell(ab, conjunct).implies),
                    "A+B should {r}-> {conjunct_name}"
                );
            }
        }
    }
}
