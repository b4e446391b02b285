/*!
Phase 2: the negative-closure rules (§4.4). These are the contrapositives of
the phase 1 rules, propagating `not_implies`/`non_conservative` facts; they
only run once phase 1 has reached its own fixpoint, since they depend on a
stable `implies`/`conservative` picture.
*/

use crate::context::add_fact;
use crate::db::{Database, FactId, PrincipleId};
use crate::lattice::{self, form::Form, reducibility::Reducibility, LatticeElement};
use crate::structures::{fact::Fact, justification::Justification, operator::Operator};
use crate::types::err::ErrorKind;

fn combine(db: &Database, a: FactId, b: FactId) -> u32 {
    1 + db.justifications.complexity(a) + db.justifications.complexity(b)
}

/// `a r-> b ∧ a r-|> c ⇒ b r-|> c`, and `b r-> c ∧ a r-|> c ⇒ a r-|> b`.
pub fn contrapositive_transitivity_implies(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for r in Reducibility::all().iter().copied() {
        for &a in ids {
            for &b in ids {
                for &c in ids {
                    if a == b || b == c || a == c {
                        continue;
                    }

                    if lattice::is_present(r, db.relations.cell(a, b).implies)
                        && lattice::is_present(r, db.relations.cell(a, c).not_implies)
                        && !lattice::is_present(r, db.relations.cell(b, c).not_implies)
                    {
                        let f1 = db.justifications.id_of(&Fact::relation(a, Operator::Implies(r), b));
                        let f2 = db.justifications.id_of(&Fact::relation(a, Operator::NotImplies(r), c));
                        if let (Some(f1), Some(f2)) = (f1, f2) {
                            let cplx = combine(db, f1, f2);
                            if add_fact(
                                db,
                                Fact::relation(b, Operator::NotImplies(r), c),
                                Justification::Composite(vec![f1, f2]),
                                cplx,
                            )? {
                                changed = true;
                            }
                        }
                    }

                    if lattice::is_present(r, db.relations.cell(b, c).implies)
                        && lattice::is_present(r, db.relations.cell(a, c).not_implies)
                        && !lattice::is_present(r, db.relations.cell(a, b).not_implies)
                    {
                        let f1 = db.justifications.id_of(&Fact::relation(b, Operator::Implies(r), c));
                        let f2 = db.justifications.id_of(&Fact::relation(a, Operator::NotImplies(r), c));
                        if let (Some(f1), Some(f2)) = (f1, f2) {
                            let cplx = combine(db, f1, f2);
                            if add_fact(
                                db,
                                Fact::relation(a, Operator::NotImplies(r), b),
                                Justification::Composite(vec![f1, f2]),
                                cplx,
                            )? {
                                changed = true;
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(changed)
}

/// `a r-> c ∧ a r-|> (b+c) ⇒ a r-|> b`, for every registered conjunction `b+c`.
pub fn contrapositive_conjunction(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for &b in ids {
        for &c in ids {
            if b == c {
                continue;
            }
            let Some(bc) = db.registry.join(b, c) else {
                continue;
            };
            for &a in ids {
                for r in Reducibility::all().iter().copied() {
                    if lattice::is_present(r, db.relations.cell(a, b).not_implies) {
                        continue;
                    }
                    if !lattice::is_present(r, db.relations.cell(a, c).implies) {
                        continue;
                    }
                    if !lattice::is_present(r, db.relations.cell(a, bc).not_implies) {
                        continue;
                    }
                    let f1 = db.justifications.id_of(&Fact::relation(a, Operator::Implies(r), c));
                    let f2 = db.justifications.id_of(&Fact::relation(a, Operator::NotImplies(r), bc));
                    if let (Some(f1), Some(f2)) = (f1, f2) {
                        let cplx = combine(db, f1, f2);
                        if add_fact(
                            db,
                            Fact::relation(a, Operator::NotImplies(r), b),
                            Justification::Composite(vec![f1, f2]),
                            cplx,
                        )? {
                            changed = true;
                        }
                    }
                }
            }
        }
    }
    Ok(changed)
}

/// `a f-c c ∧ c RCA-|> b ∧ b:form f ⇒ a RCA-|> b`.
pub fn contrapositive_conservation(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for &a in ids {
        for &c in ids {
            let fmask = db.relations.cell(a, c).conservative;
            if fmask == 0 {
                continue;
            }
            for &b in ids {
                if !lattice::is_present(Reducibility::Rca, db.relations.cell(c, b).not_implies) {
                    continue;
                }
                let bform = db.relations.form(b);
                for f in lattice::list::<Form>(fmask & bform) {
                    if lattice::is_present(Reducibility::Rca, db.relations.cell(a, b).not_implies) {
                        continue;
                    }
                    let f1 = db.justifications.id_of(&Fact::relation(a, Operator::Conservative(f), c));
                    let f2 =
                        db.justifications.id_of(&Fact::relation(c, Operator::NotImplies(Reducibility::Rca), b));
                    let f3 = db.justifications.id_of(&Fact::has_form(b, f));
                    if let (Some(f1), Some(f2), Some(f3)) = (f1, f2, f3) {
                        let cplx = 1
                            + db.justifications.complexity(f1)
                            + db.justifications.complexity(f2)
                            + db.justifications.complexity(f3);
                        if add_fact(
                            db,
                            Fact::relation(a, Operator::NotImplies(Reducibility::Rca), b),
                            Justification::Composite(vec![f1, f2, f3]),
                            cplx,
                        )? {
                            changed = true;
                        }
                    }
                }
            }
        }
    }
    Ok(changed)
}

/// `a f-c b ∧ a f-nc c ⇒ b f-nc c`, and `b f-c c ∧ a f-nc c ⇒ a f-nc b`.
pub fn contrapositive_transitivity_conservative(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for f in Form::all().iter().copied() {
        for &a in ids {
            for &b in ids {
                for &c in ids {
                    if a == b || b == c || a == c {
                        continue;
                    }

                    if lattice::is_present(f, db.relations.cell(a, b).conservative)
                        && lattice::is_present(f, db.relations.cell(a, c).non_conservative)
                        && !lattice::is_present(f, db.relations.cell(b, c).non_conservative)
                    {
                        let f1 = db.justifications.id_of(&Fact::relation(a, Operator::Conservative(f), b));
                        let f2 = db.justifications.id_of(&Fact::relation(a, Operator::NonConservative(f), c));
                        if let (Some(f1), Some(f2)) = (f1, f2) {
                            let cplx = combine(db, f1, f2);
                            if add_fact(
                                db,
                                Fact::relation(b, Operator::NonConservative(f), c),
                                Justification::Composite(vec![f1, f2]),
                                cplx,
                            )? {
                                changed = true;
                            }
                        }
                    }

                    if lattice::is_present(f, db.relations.cell(b, c).conservative)
                        && lattice::is_present(f, db.relations.cell(a, c).non_conservative)
                        && !lattice::is_present(f, db.relations.cell(a, b).non_conservative)
                    {
                        let f1 = db.justifications.id_of(&Fact::relation(b, Operator::Conservative(f), c));
                        let f2 = db.justifications.id_of(&Fact::relation(a, Operator::NonConservative(f), c));
                        if let (Some(f1), Some(f2)) = (f1, f2) {
                            let cplx = combine(db, f1, f2);
                            if add_fact(
                                db,
                                Fact::relation(a, Operator::NonConservative(f), b),
                                Justification::Composite(vec![f1, f2]),
                                cplx,
                            )? {
                                changed = true;
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(changed)
}

/// `a RCA-> c ∧ b RCA-|> c ∧ c:form f ⇒ a f-nc b`.
pub fn definition_of_non_conservation(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for &c in ids {
        let cform = db.relations.form(c);
        if cform == 0 {
            continue;
        }
        for &a in ids {
            if !lattice::is_present(Reducibility::Rca, db.relations.cell(a, c).implies) {
                continue;
            }
            for &b in ids {
                if !lattice::is_present(Reducibility::Rca, db.relations.cell(b, c).not_implies) {
                    continue;
                }
                for f in lattice::list::<Form>(cform) {
                    if lattice::is_present(f, db.relations.cell(a, b).non_conservative) {
                        continue;
                    }
                    let f1 = db.justifications.id_of(&Fact::relation(a, Operator::Implies(Reducibility::Rca), c));
                    let f2 =
                        db.justifications.id_of(&Fact::relation(b, Operator::NotImplies(Reducibility::Rca), c));
                    let f3 = db.justifications.id_of(&Fact::has_form(c, f));
                    if let (Some(f1), Some(f2), Some(f3)) = (f1, f2, f3) {
                        let cplx = 1
                            + db.justifications.complexity(f1)
                            + db.justifications.complexity(f2)
                            + db.justifications.complexity(f3);
                        if add_fact(
                            db,
                            Fact::relation(a, Operator::NonConservative(f), b),
                            Justification::Composite(vec![f1, f2, f3]),
                            cplx,
                        )? {
                            changed = true;
                        }
                    }
                }
            }
        }
    }
    Ok(changed)
}

/// Stronger LHS extends non-conservation: `a RCA-> a2 ∧ a f-nc b ⇒ a2 f-nc b`.
/// Weaker RHS extends non-conservation: `a2 RCA-> b ∧ a f-nc b ⇒ a f-nc a2`.
pub fn lift_non_conservation(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for &a in ids {
        for &b in ids {
            let fmask = db.relations.cell(a, b).non_conservative;
            if fmask == 0 {
                continue;
            }
            for f in lattice::list::<Form>(fmask) {
                let nc_id = db.justifications.id_of(&Fact::relation(a, Operator::NonConservative(f), b));
                let Some(nc_id) = nc_id else { continue };

                for &a2 in ids {
                    if a2 == a || lattice::is_present(f, db.relations.cell(a2, b).non_conservative) {
                        continue;
                    }
                    if !lattice::is_present(Reducibility::Rca, db.relations.cell(a, a2).implies) {
                        continue;
                    }
                    let imp_id = db
                        .justifications
                        .id_of(&Fact::relation(a, Operator::Implies(Reducibility::Rca), a2));
                    if let Some(imp_id) = imp_id {
                        let cplx = combine(db, nc_id, imp_id);
                        if add_fact(
                            db,
                            Fact::relation(a2, Operator::NonConservative(f), b),
                            Justification::Composite(vec![nc_id, imp_id]),
                            cplx,
                        )? {
                            changed = true;
                        }
                    }
                }

                for &a2 in ids {
                    if a2 == b || lattice::is_present(f, db.relations.cell(a, a2).non_conservative) {
                        continue;
                    }
                    if !lattice::is_present(Reducibility::Rca, db.relations.cell(a2, b).implies) {
                        continue;
                    }
                    let imp_id = db
                        .justifications
                        .id_of(&Fact::relation(a2, Operator::Implies(Reducibility::Rca), b));
                    if let Some(imp_id) = imp_id {
                        let cplx = combine(db, nc_id, imp_id);
                        if add_fact(
                            db,
                            Fact::relation(a, Operator::NonConservative(f), a2),
                            Justification::Composite(vec![nc_id, imp_id]),
                            cplx,
                        )? {
                            changed = true;
                        }
                    }
                }
            }
        }
    }
    Ok(changed)
}
