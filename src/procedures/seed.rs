use crate::context::add_fact;
use crate::db::{Database, PrincipleId};
use crate::lattice::{form::Form, reducibility::Reducibility, LatticeElement};
use crate::structures::{fact::Fact, justification::Justification, operator::Operator, principle};
use crate::types::err::ErrorKind;

/// Installs the one-shot facts every derivation starts from: reflexivity of
/// `implies`/`equiv`/`conservative`, RCA as the global bottom of `implies`,
/// and conjunction weakening (§4.4, "seed").
pub fn seed(db: &mut Database) -> Result<(), ErrorKind> {
    let rca = db.registry.rca();
    let ids: Vec<PrincipleId> = db.registry.iter_sorted().collect();

    for &p in &ids {
        for r in Reducibility::all().iter().copied() {
            add_fact(
                db,
                Fact::relation(p, Operator::Equiv(r), p),
                Justification::Leaf(String::new()),
                1,
            )?;
            add_fact(
                db,
                Fact::relation(p, Operator::Implies(r), p),
                Justification::Leaf(String::new()),
                1,
            )?;
        }
        for f in Form::all().iter().copied() {
            add_fact(
                db,
                Fact::relation(p, Operator::Conservative(f), p),
                Justification::Leaf(String::new()),
                1,
            )?;
        }
        if p != rca {
            for r in Reducibility::all().iter().copied() {
                add_fact(
                    db,
                    Fact::relation(p, Operator::Implies(r), rca),
                    Justification::Leaf("RCA is minimal".into()),
                    1,
                )?;
            }
        }
    }

    let names: Vec<String> = ids.iter().map(|&id| db.registry.name(id).to_string()).collect();
    for (i, &a) in ids.iter().enumerate() {
        for (j, &b) in ids.iter().enumerate() {
            if i == j {
                continue;
            }
            if principle::strict_subset(&names[j], &names[i]) {
                for r in Reducibility::all().iter().copied() {
                    add_fact(
                        db,
                        Fact::relation(a, Operator::Implies(r), b),
                        Justification::Leaf("conjunction weakening".into()),
                        1,
                    )?;
                }
            }
        }
    }

    Ok(())
}
