/*!
The derivation driver: seeds reflexivity, bottom and conjunction-weakening
facts, then repeatedly applies the positive- and negative-closure inference
rules until no relation bitmask changes (§4.4).

Unlike the [assertion kernel](crate::context), which only ever touches the
two principles of the fact it was given, the rules here range over every
registered principle (a Floyd-Warshall-style transitive closure), which is
why they live in their own pass rather than inside `add_fact` itself.
*/

mod negative;
mod positive;
mod seed;

use crate::db::{Database, PrincipleId};
use crate::misc::log::targets;
use crate::types::err::ErrorKind;

/// Runs a full derivation over `db`: seeds the one-shot facts, then alternates
/// the positive and negative closure phases to a fixpoint.
///
/// On success, `db`'s relation store holds the full deductive closure of
/// whatever facts had already been asserted. On failure (a contradiction was
/// found), the caller should discard `db`: per §7, a database which failed
/// derivation is considered poisoned.
pub fn run_derivation(db: &mut Database) -> Result<(), ErrorKind> {
    log::info!(target: targets::DERIVATION, "seeding");
    seed::seed(db)?;

    log::info!(target: targets::DERIVATION, "phase 1: positive closure");
    positive_closure(db)?;

    log::info!(target: targets::DERIVATION, "phase 2: negative closure");
    negative_closure(db)?;

    Ok(())
}

fn principle_ids(db: &Database) -> Vec<PrincipleId> {
    db.registry.iter_sorted().collect()
}

fn positive_closure(db: &mut Database) -> Result<(), ErrorKind> {
    loop {
        let ids = principle_ids(db);
        let mut changed = false;

        changed |= positive::extract_equivalences(db, &ids)?;
        changed |= positive::transitive_closure_equivalent(db, &ids)?;
        changed |= positive::transitive_closure_implies(db, &ids)?;
        changed |= positive::unify_over_conjunctions(db, &ids)?;
        changed |= positive::definition_of_conservation(db, &ids)?;
        changed |= positive::transitive_closure_conservative(db, &ids)?;
        changed |= positive::lift_conservation(db, &ids)?;

        if !changed {
            break;
        }
    }
    Ok(())
}

fn negative_closure(db: &mut Database) -> Result<(), ErrorKind> {
    loop {
        let ids = principle_ids(db);
        let mut changed = false;

        changed |= negative::contrapositive_transitivity_implies(db, &ids)?;
        changed |= negative::contrapositive_conjunction(db, &ids)?;
        changed |= negative::contrapositive_conservation(db, &ids)?;
        changed |= negative::contrapositive_transitivity_conservative(db, &ids)?;
        changed |= negative::definition_of_non_conservation(db, &ids)?;
        changed |= negative::lift_non_conservation(db, &ids)?;

        if !changed {
            break;
        }
    }
    Ok(())
}
