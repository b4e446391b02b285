/*!
Phase 1: the positive-closure rules (§4.4). Each rule scans every relevant
tuple of registered principles and calls [add_fact], which itself handles
deduplication (a strictly-shorter proof is the only thing that counts as a
change) and the immediate lattice-closure consequences of whatever it installs.
Each function returns whether it installed anything, so the driver's fixpoint
loop knows when to stop.
*/

use crate::context::add_fact;
use crate::db::{Database, PrincipleId};
use crate::lattice::{self, form::Form, reducibility::Reducibility, LatticeElement};
use crate::structures::{fact::Fact, justification::Justification, operator::Operator};
use crate::types::err::ErrorKind;

fn combine(db: &Database, a: crate::db::FactId, b: crate::db::FactId) -> u32 {
    1 + db.justifications.complexity(a) + db.justifications.complexity(b)
}

/// `a r-> b ∧ b r-> a ⇒ a r<-> b`.
pub fn extract_equivalences(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for &a in ids {
        for &b in ids {
            if a == b {
                continue;
            }
            let mask = db.relations.cell(a, b).implies & db.relations.cell(b, a).implies;
            for r in lattice::list::<Reducibility>(mask) {
                if lattice::is_present(r, db.relations.cell(a, b).equivalent) {
                    continue;
                }
                let f1 = db.justifications.id_of(&Fact::relation(a, Operator::Implies(r), b));
                let f2 = db.justifications.id_of(&Fact::relation(b, Operator::Implies(r), a));
                if let (Some(f1), Some(f2)) = (f1, f2) {
                    let cplx = combine(db, f1, f2);
                    if add_fact(
                        db,
                        Fact::relation(a, Operator::Equiv(r), b),
                        Justification::Composite(vec![f1, f2]),
                        cplx,
                    )? {
                        changed = true;
                    }
                }
            }
        }
    }
    Ok(changed)
}

/// `a r<-> b ∧ b r<-> c ⇒ a r<-> c`.
pub fn transitive_closure_equivalent(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for r in Reducibility::all().iter().copied() {
        for &a in ids {
            for &b in ids {
                if a == b || !lattice::is_present(r, db.relations.cell(a, b).equivalent) {
                    continue;
                }
                for &c in ids {
                    if b == c || a == c || lattice::is_present(r, db.relations.cell(a, c).equivalent) {
                        continue;
                    }
                    if !lattice::is_present(r, db.relations.cell(b, c).equivalent) {
                        continue;
                    }
                    let f1 = db.justifications.id_of(&Fact::relation(a, Operator::Equiv(r), b));
                    let f2 = db.justifications.id_of(&Fact::relation(b, Operator::Equiv(r), c));
                    if let (Some(f1), Some(f2)) = (f1, f2) {
                        let cplx = combine(db, f1, f2);
                        if add_fact(
                            db,
                            Fact::relation(a, Operator::Equiv(r), c),
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

/// `a r-> b ∧ b r-> c ⇒ a r-> c`.
pub fn transitive_closure_implies(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for r in Reducibility::all().iter().copied() {
        for &a in ids {
            for &b in ids {
                if a == b || !lattice::is_present(r, db.relations.cell(a, b).implies) {
                    continue;
                }
                for &c in ids {
                    if b == c || a == c || lattice::is_present(r, db.relations.cell(a, c).implies) {
                        continue;
                    }
                    if !lattice::is_present(r, db.relations.cell(b, c).implies) {
                        continue;
                    }
                    let f1 = db.justifications.id_of(&Fact::relation(a, Operator::Implies(r), b));
                    let f2 = db.justifications.id_of(&Fact::relation(b, Operator::Implies(r), c));
                    if let (Some(f1), Some(f2)) = (f1, f2) {
                        let cplx = combine(db, f1, f2);
                        if add_fact(
                            db,
                            Fact::relation(a, Operator::Implies(r), c),
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

/// `a r-> p_1 ∧ ... ∧ a r-> p_n ⇒ a r-> (p_1+...+p_n)`, for every registered conjunction.
pub fn unify_over_conjunctions(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for &b in ids {
        let conjuncts = db.registry.conjuncts(b).to_vec();
        if conjuncts.len() < 2 {
            continue;
        }
        let conjunct_ids: Option<Vec<PrincipleId>> = conjuncts.iter().map(|name| db.registry.get(name)).collect();
        let Some(conjunct_ids) = conjunct_ids else {
            continue;
        };

        for &a in ids {
            if a == b {
                continue;
            }
            for r in Reducibility::all().iter().copied() {
                if lattice::is_present(r, db.relations.cell(a, b).implies) {
                    continue;
                }
                let supports: Option<Vec<_>> = conjunct_ids
                    .iter()
                    .map(|&c| db.justifications.id_of(&Fact::relation(a, Operator::Implies(r), c)))
                    .collect();
                let Some(supports) = supports else {
                    continue;
                };
                let cplx = 1 + supports.iter().map(|&f| db.justifications.complexity(f)).sum::<u32>();
                if add_fact(
                    db,
                    Fact::relation(a, Operator::Implies(r), b),
                    Justification::Composite(supports),
                    cplx,
                )? {
                    changed = true;
                }
            }
        }
    }
    Ok(changed)
}

/// `c f-c a ∧ c RCA-> b ∧ b:form f ⇒ a RCA-> b`.
pub fn definition_of_conservation(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for &c in ids {
        for &a in ids {
            let fmask = db.relations.cell(c, a).conservative;
            if fmask == 0 {
                continue;
            }
            for &b in ids {
                if !lattice::is_present(Reducibility::Rca, db.relations.cell(c, b).implies) {
                    continue;
                }
                let bform = db.relations.form(b);
                for f in lattice::list::<Form>(fmask & bform) {
                    if lattice::is_present(Reducibility::Rca, db.relations.cell(a, b).implies) {
                        continue;
                    }
                    let f1 = db.justifications.id_of(&Fact::relation(c, Operator::Conservative(f), a));
                    let f2 =
                        db.justifications.id_of(&Fact::relation(c, Operator::Implies(Reducibility::Rca), b));
                    let f3 = db.justifications.id_of(&Fact::has_form(b, f));
                    if let (Some(f1), Some(f2), Some(f3)) = (f1, f2, f3) {
                        let cplx = 1
                            + db.justifications.complexity(f1)
                            + db.justifications.complexity(f2)
                            + db.justifications.complexity(f3);
                        if add_fact(
                            db,
                            Fact::relation(a, Operator::Implies(Reducibility::Rca), b),
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

/// `a f-c b ∧ b f-c c ⇒ a f-c c`.
pub fn transitive_closure_conservative(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for f in Form::all().iter().copied() {
        for &a in ids {
            for &b in ids {
                if a == b || !lattice::is_present(f, db.relations.cell(a, b).conservative) {
                    continue;
                }
                for &c in ids {
                    if b == c || a == c || lattice::is_present(f, db.relations.cell(a, c).conservative) {
                        continue;
                    }
                    if !lattice::is_present(f, db.relations.cell(b, c).conservative) {
                        continue;
                    }
                    let f1 = db.justifications.id_of(&Fact::relation(a, Operator::Conservative(f), b));
                    let f2 = db.justifications.id_of(&Fact::relation(b, Operator::Conservative(f), c));
                    if let (Some(f1), Some(f2)) = (f1, f2) {
                        let cplx = combine(db, f1, f2);
                        if add_fact(
                            db,
                            Fact::relation(a, Operator::Conservative(f), c),
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

/// Stronger LHS preserves conservation: `a2 RCA-> a ∧ a f-c b ⇒ a2 f-c b`.
/// Weaker RHS preserves conservation: `a f-c b ∧ b RCA-> b2 ⇒ a f-c b2`.
pub fn lift_conservation(db: &mut Database, ids: &[PrincipleId]) -> Result<bool, ErrorKind> {
    let mut changed = false;
    for &a in ids {
        for &b in ids {
            let fmask = db.relations.cell(a, b).conservative;
            if fmask == 0 {
                continue;
            }
            for f in lattice::list::<Form>(fmask) {
                let cons_id = db.justifications.id_of(&Fact::relation(a, Operator::Conservative(f), b));
                let Some(cons_id) = cons_id else { continue };

                for &a2 in ids {
                    if a2 == a || lattice::is_present(f, db.relations.cell(a2, b).conservative) {
                        continue;
                    }
                    if !lattice::is_present(Reducibility::Rca, db.relations.cell(a2, a).implies) {
                        continue;
                    }
                    let imp_id = db
                        .justifications
                        .id_of(&Fact::relation(a2, Operator::Implies(Reducibility::Rca), a));
                    if let Some(imp_id) = imp_id {
                        let cplx = combine(db, cons_id, imp_id);
                        if add_fact(
                            db,
                            Fact::relation(a2, Operator::Conservative(f), b),
                            Justification::Composite(vec![cons_id, imp_id]),
                            cplx,
                        )? {
                            changed = true;
                        }
                    }
                }

                for &b2 in ids {
                    if b2 == b || lattice::is_present(f, db.relations.cell(a, b2).conservative) {
                        continue;
                    }
                    if !lattice::is_present(Reducibility::Rca, db.relations.cell(b, b2).implies) {
                        continue;
                    }
                    let imp_id = db
                        .justifications
                        .id_of(&Fact::relation(b, Operator::Implies(Reducibility::Rca), b2));
                    if let Some(imp_id) = imp_id {
                        let cplx = combine(db, cons_id, imp_id);
                        if add_fact(
                            db,
                            Fact::relation(a, Operator::Conservative(f), b2),
                            Justification::Composite(vec![cons_id, imp_id]),
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
