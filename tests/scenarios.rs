use rm_zoo::builder::Builder;
use rm_zoo::db::Database;
use rm_zoo::lattice::{form::Form, reducibility::Reducibility};
use rm_zoo::procedures::run_derivation;
use rm_zoo::query::resolve;
use rm_zoo::types::err::ErrorKind;

mod scenarios {
    use super::*;

    /// S1: a chain of strong-Weihrauch reductions closes transitively, and
    /// weakens to every reducibility strictly weaker than `sW` (not `RCA`,
    /// which sits outside the `sW..w` chain).
    #[test]
    fn s1_transitive_closure_and_weakening() {
        let mut db = Database::new();
        let mut b = Builder::new(&mut db);
        let a = b.add_principle("A");
        let bb = b.add_principle("B");
        let c = b.add_principle("C");
        b.assert_implies(&a, Reducibility::StrongWeihrauch, &bb, "lemma1".into()).unwrap();
        b.assert_implies(&bb, Reducibility::StrongWeihrauch, &c, "lemma2".into()).unwrap();
        run_derivation(&mut db).unwrap();

        let direct = resolve::resolve_implies(&db, &a, Reducibility::StrongWeihrauch, &c).unwrap();
        assert!(direct.holds());
        assert_eq!(direct.proof().unwrap().matches("lemma1").count(), 1);
        assert_eq!(direct.proof().unwrap().matches("lemma2").count(), 1);

        for r in [
            Reducibility::Weihrauch,
            Reducibility::StrongComputable,
            Reducibility::GeneralizedWeihrauch,
            Reducibility::Computable,
            Reducibility::Weak,
        ] {
            assert!(resolve::resolve_implies(&db, &a, r, &c).unwrap().holds(), "{r} should hold");
        }
        assert!(!resolve::resolve_implies(&db, &a, Reducibility::Rca, &c).unwrap().holds());
    }

    /// S2: `A RCA-> B` licenses `B f-c A` for every form, unconditionally
    /// (§4.3's trivial-conservation clause), regardless of `B`'s declared form.
    #[test]
    fn s2_trivial_conservation_from_implication() {
        let mut db = Database::new();
        let mut b = Builder::new(&mut db);
        let a = b.add_principle("A");
        let bb = b.add_principle("B");
        b.assert_implies(&a, Reducibility::Rca, &bb, "x".into()).unwrap();
        b.assert_form(&bb, Form::Pi02, String::new()).unwrap();
        run_derivation(&mut db).unwrap();

        for f in [Form::Pi02, Form::Pi03, Form::Pi04, Form::Pi11, Form::RPi12, Form::Pi12, Form::Pi13] {
            assert!(
                resolve::resolve_conservative(&db, &bb, f, &a).unwrap().holds(),
                "B should be {f}-conservative over A"
            );
        }
    }

    /// S3: `A RCA-> C`, `B RCA-|> C`, `C form Pi11` together license
    /// `A Pi11-nc B` via `definition_of_non_conservation`; NonConservative's
    /// own propagation (the contrapositive of trivial conservation) then
    /// licenses `B RCA-|> A`.
    ///
    /// Note: this is the mirror direction of the established NonConservative
    /// fact, not `A RCA-|> B` -- neither this engine's literal §4.3 rule nor
    /// the original rmzoo's `conservativeClosure`/`rcClosure` derives
    /// `A RCA-|> B` from this seed; tracking `A RCA-|> B` here would assert
    /// something this implementation (faithfully) never produces.
    #[test]
    fn s3_non_conservation_from_non_implication() {
        let mut db = Database::new();
        let mut b = Builder::new(&mut db);
        let a = b.add_principle("A");
        let bb = b.add_principle("B");
        let c = b.add_principle("C");
        b.assert_implies(&a, Reducibility::Rca, &c, "x".into()).unwrap();
        b.assert_not_implies(&bb, Reducibility::Rca, &c, "y".into()).unwrap();
        b.assert_form(&c, Form::Pi11, String::new()).unwrap();
        run_derivation(&mut db).unwrap();

        assert!(resolve::resolve_non_conservative(&db, &a, Form::Pi11, &bb).unwrap().holds());
        for f in [Form::RPi12, Form::Pi12, Form::Pi13] {
            assert!(resolve::resolve_non_conservative(&db, &a, f, &bb).unwrap().holds(), "{f} should be upward-closed");
        }
        assert!(resolve::resolve_not_implies(&db, &bb, Reducibility::Rca, &a).unwrap().holds());
    }

    /// S4: directly contradictory facts fail immediately, carrying both
    /// justifications.
    #[test]
    fn s4_contradiction_surfaces_both_justifications() {
        let mut db = Database::new();
        let mut b = Builder::new(&mut db);
        let a = b.add_principle("A");
        let bb = b.add_principle("B");
        b.assert_implies(&a, Reducibility::StrongWeihrauch, &bb, "x".into()).unwrap();
        let err = b.assert_not_implies(&a, Reducibility::StrongWeihrauch, &bb, "y".into()).unwrap_err();
        match err {
            ErrorKind::Contradiction { attempted_justification, .. } => {
                assert!(matches!(
                    attempted_justification,
                    rm_zoo::structures::justification::Justification::Leaf(text) if text == "y"
                ));
            }
            other => panic!("expected Contradiction, got {other:?}"),
        }
    }

    /// S5: an RCA-equivalence is symmetric and weakens to every weaker reducibility.
    #[test]
    fn s5_equivalence_symmetric_and_weakens() {
        let mut db = Database::new();
        let mut b = Builder::new(&mut db);
        let a = b.add_principle("A");
        let bb = b.add_principle("B");
        b.assert_equiv(&a, Reducibility::Rca, &bb, "x".into()).unwrap();
        run_derivation(&mut db).unwrap();

        assert!(resolve::resolve_implies(&db, &a, Reducibility::Rca, &bb).unwrap().holds());
        assert!(resolve::resolve_implies(&db, &bb, Reducibility::Rca, &a).unwrap().holds());
        assert!(resolve::resolve_equiv(&db, &bb, Reducibility::Rca, &a).unwrap().holds());
        assert!(resolve::resolve_equiv(&db, &a, Reducibility::Weak, &bb).unwrap().holds());
        assert!(resolve::resolve_equiv(&db, &bb, Reducibility::Weak, &a).unwrap().holds());
    }

    /// S6: a registered conjunction `A+B` is automatically weaker than each of
    /// its conjuncts, so a query against the unregistered `A+B sW-> C` is
    /// answered by composing `A+B sW-> A` with the seeded `A sW-> C`.
    #[test]
    fn s6_conjunction_weakening_answers_query() {
        let mut db = Database::new();
        db.registry.add_principle("A");
        db.registry.add_principle("B");
        db.registry.add_principle("A+B");
        {
            let mut b = Builder::new(&mut db);
            let a = b.add_principle("A");
            let c = b.add_principle("C");
            b.assert_implies(&a, Reducibility::StrongWeihrauch, &c, "x".into()).unwrap();
        }
        run_derivation(&mut db).unwrap();

        let outcome = resolve::resolve_named(
            &mut db,
            "A+B",
            rm_zoo::structures::operator::Operator::Implies(Reducibility::StrongWeihrauch),
            "C",
            false,
        )
        .unwrap();
        assert!(outcome.holds());
    }
}
