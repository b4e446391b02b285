use crate::db::{Database, FactId, PrincipleId};
use crate::lattice::{self, form::Form, reducibility::Reducibility, LatticeElement};
use crate::misc::log::targets;
use crate::structures::{fact::Fact, justification::Justification, operator::Operator};
use crate::types::err::ErrorKind;

/// Adds `fact` to `db`, justified by `justification` with proof complexity `cplx`.
///
/// Returns `Ok(true)` if the fact was new, or replaced a longer proof of the
/// same fact; `Ok(false)` if an equally-short-or-shorter proof of the fact was
/// already on file, in which case nothing further happens. Fails with
/// [ErrorKind::Contradiction] if the opposite of `fact` is already established.
pub fn add_fact(
    db: &mut Database,
    fact: Fact,
    justification: Justification,
    cplx: u32,
) -> Result<bool, ErrorKind> {
    let Some(id) = db.justifications.install(fact, justification.clone(), cplx) else {
        return Ok(false);
    };

    if let Some(opposite) = fact.opposite() {
        if let Some(existing_id) = db.justifications.id_of(&opposite) {
            log::error!(target: targets::KERNEL, "contradiction: {fact:?} vs {opposite:?}");
            return Err(ErrorKind::Contradiction {
                attempted: fact,
                attempted_justification: justification,
                existing: opposite,
                existing_id,
            });
        }
    }

    log::trace!(target: targets::KERNEL, "installed {fact:?} (complexity {cplx})");

    propagate(db, fact, id, cplx)
}

fn propagate(db: &mut Database, fact: Fact, id: FactId, cplx: u32) -> Result<bool, ErrorKind> {
    match fact {
        Fact::Relation { a, op, b } => match op {
            Operator::Implies(r) => propagate_implies(db, a, r, b, id, cplx),
            Operator::NotImplies(r) => propagate_not_implies(db, a, r, b, id, cplx),
            Operator::Equiv(r) => propagate_equiv(db, a, r, b, id, cplx),
            Operator::Conservative(f) => propagate_conservative(db, a, f, b, id, cplx),
            Operator::NonConservative(f) => propagate_non_conservative(db, a, f, b, id, cplx),
        },
        Fact::HasForm { a, f } => propagate_has_form(db, a, f, id, cplx),
    }?;
    Ok(true)
}

fn propagate_implies(
    db: &mut Database,
    a: PrincipleId,
    r: Reducibility,
    b: PrincipleId,
    id: FactId,
    cplx: u32,
) -> Result<(), ErrorKind> {
    db.relations.add_implies(a, b, r.bit());

    for r2 in lattice::list::<Reducibility>(r.weaker()) {
        if r2 == r {
            continue;
        }
        add_fact(
            db,
            Fact::relation(a, Operator::Implies(r2), b),
            Justification::Composite(vec![id]),
            1 + cplx,
        )?;
    }

    if r == Reducibility::Rca {
        for f in Form::all().iter().copied() {
            add_fact(
                db,
                Fact::relation(b, Operator::Conservative(f), a),
                Justification::Composite(vec![id]),
                1 + cplx,
            )?;
        }
    }

    Ok(())
}

fn propagate_not_implies(
    db: &mut Database,
    a: PrincipleId,
    r: Reducibility,
    b: PrincipleId,
    id: FactId,
    cplx: u32,
) -> Result<(), ErrorKind> {
    db.relations.add_not_implies(a, b, r.bit());

    for r2 in lattice::list::<Reducibility>(r.stronger()) {
        if r2 == r {
            continue;
        }
        add_fact(
            db,
            Fact::relation(a, Operator::NotImplies(r2), b),
            Justification::Composite(vec![id]),
            1 + cplx,
        )?;
    }

    if r == Reducibility::Rca {
        for f in lattice::list::<Form>(db.relations.form(b)) {
            add_fact(
                db,
                Fact::relation(b, Operator::NonConservative(f), a),
                Justification::Composite(vec![id]),
                1 + cplx,
            )?;
        }
    }

    Ok(())
}

fn propagate_equiv(
    db: &mut Database,
    a: PrincipleId,
    r: Reducibility,
    b: PrincipleId,
    id: FactId,
    cplx: u32,
) -> Result<(), ErrorKind> {
    db.relations.add_equivalent(a, b, r.bit());

    let existing_justification = db.justifications.justification(id).clone();
    add_fact(db, Fact::relation(b, Operator::Equiv(r), a), existing_justification, cplx)?;

    for r2 in lattice::list::<Reducibility>(r.weaker()) {
        if r2 == r {
            continue;
        }
        add_fact(
            db,
            Fact::relation(a, Operator::Equiv(r2), b),
            Justification::Composite(vec![id]),
            1 + cplx,
        )?;
        add_fact(
            db,
            Fact::relation(b, Operator::Equiv(r2), a),
            Justification::Composite(vec![id]),
            1 + cplx,
        )?;
    }

    add_fact(
        db,
        Fact::relation(a, Operator::Implies(r), b),
        Justification::Composite(vec![id]),
        1 + cplx,
    )?;
    add_fact(
        db,
        Fact::relation(b, Operator::Implies(r), a),
        Justification::Composite(vec![id]),
        1 + cplx,
    )?;

    Ok(())
}

fn propagate_conservative(
    db: &mut Database,
    a: PrincipleId,
    f: Form,
    b: PrincipleId,
    id: FactId,
    cplx: u32,
) -> Result<(), ErrorKind> {
    db.relations.add_conservative(a, b, f.bit());

    for f2 in lattice::list::<Form>(f.stronger()) {
        if f2 == f {
            continue;
        }
        add_fact(
            db,
            Fact::relation(a, Operator::Conservative(f2), b),
            Justification::Composite(vec![id]),
            1 + cplx,
        )?;
    }

    if lattice::is_present(f, db.relations.form(a)) {
        add_fact(
            db,
            Fact::relation(b, Operator::Implies(Reducibility::Rca), a),
            Justification::Composite(vec![id]),
            1 + cplx,
        )?;
    }

    Ok(())
}

fn propagate_non_conservative(
    db: &mut Database,
    a: PrincipleId,
    f: Form,
    b: PrincipleId,
    id: FactId,
    cplx: u32,
) -> Result<(), ErrorKind> {
    db.relations.add_non_conservative(a, b, f.bit());

    for f2 in lattice::list::<Form>(f.weaker()) {
        if f2 == f {
            continue;
        }
        add_fact(
            db,
            Fact::relation(a, Operator::NonConservative(f2), b),
            Justification::Composite(vec![id]),
            1 + cplx,
        )?;
    }

    add_fact(
        db,
        Fact::relation(b, Operator::NotImplies(Reducibility::Rca), a),
        Justification::Composite(vec![id]),
        1 + cplx,
    )?;

    Ok(())
}

fn propagate_has_form(
    db: &mut Database,
    a: PrincipleId,
    f: Form,
    id: FactId,
    cplx: u32,
) -> Result<(), ErrorKind> {
    db.relations.add_form(a, f.bit());

    for f2 in lattice::list::<Form>(f.weaker()) {
        if f2 == f {
            continue;
        }
        add_fact(db, Fact::has_form(a, f2), Justification::Composite(vec![id]), 1 + cplx)?;
    }

    Ok(())
}
