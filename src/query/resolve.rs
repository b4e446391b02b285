/*!
Query resolution (§4.5): direct lookup, conjunction-substitution search for
otherwise-unregistered principles, and the `force` path that registers a new
conjunction and reruns derivation.
*/

use crate::db::{Database, PrincipleId};
use crate::lattice::{self, form::Form, reducibility::Reducibility};
use crate::procedures::run_derivation;
use crate::reports::QueryOutcome;
use crate::structures::{fact::Fact, operator::Operator, principle};
use crate::types::err::ErrorKind;

use super::proof;

/// Resolves `a r-> b` for two already-registered principles.
pub fn resolve_implies(db: &Database, a: &PrincipleId, r: Reducibility, b: &PrincipleId) -> Result<QueryOutcome, ErrorKind> {
    resolve(db, *a, Operator::Implies(r), *b)
}

/// Resolves `a r-|> b` for two already-registered principles.
pub fn resolve_not_implies(
    db: &Database,
    a: &PrincipleId,
    r: Reducibility,
    b: &PrincipleId,
) -> Result<QueryOutcome, ErrorKind> {
    resolve(db, *a, Operator::NotImplies(r), *b)
}

/// Resolves `a r<-> b` for two already-registered principles.
pub fn resolve_equiv(db: &Database, a: &PrincipleId, r: Reducibility, b: &PrincipleId) -> Result<QueryOutcome, ErrorKind> {
    resolve(db, *a, Operator::Equiv(r), *b)
}

/// Resolves `a f-c b` for two already-registered principles.
pub fn resolve_conservative(db: &Database, a: &PrincipleId, f: Form, b: &PrincipleId) -> Result<QueryOutcome, ErrorKind> {
    resolve(db, *a, Operator::Conservative(f), *b)
}

/// Resolves `a f-nc b` for two already-registered principles.
pub fn resolve_non_conservative(
    db: &Database,
    a: &PrincipleId,
    f: Form,
    b: &PrincipleId,
) -> Result<QueryOutcome, ErrorKind> {
    resolve(db, *a, Operator::NonConservative(f), *b)
}

/// Resolves `(a, op, b)` by direct lookup, probing the opposite operator
/// (§4.5 step 4) when the fact is not on file so a contradiction between an
/// otherwise-inconsistent database surfaces rather than reading as a plain miss.
fn resolve(db: &Database, a: PrincipleId, op: Operator, b: PrincipleId) -> Result<QueryOutcome, ErrorKind> {
    let fact = Fact::relation(a, op, b);
    if let Some(id) = db.justifications.id_of(&fact) {
        return Ok(QueryOutcome::Holds { fact_id: id, proof: proof::render(db, id) });
    }

    if let Some(opposite) = fact.opposite() {
        if let Some(opp_id) = db.justifications.id_of(&opposite) {
            log::warn!(
                target: crate::misc::log::targets::QUERY,
                "query for {fact:?} missed, but opposite {opposite:?} is established"
            );
            return Ok(QueryOutcome::Fails {
                reason: format!("{fact:?} does not hold ({opposite:?} is established instead)"),
            });
        }
    }

    Ok(QueryOutcome::Fails {
        reason: format!("{fact:?} is not known"),
    })
}

/// The reducibility a substitution search should use for `op`, if any: only
/// the three reducibility-indexed operators support conjunction substitution
/// (§4.5 step 1 speaks of "the operator's reducibility").
fn substitution_reducibility(op: Operator) -> Option<Reducibility> {
    match op {
        Operator::Implies(r) | Operator::NotImplies(r) | Operator::Equiv(r) => Some(r),
        Operator::Conservative(_) | Operator::NonConservative(_) => None,
    }
}

/// Resolves a query given raw, possibly-unregistered principle names: the
/// full §4.5 algorithm. `force` permits registering a new conjunction (and
/// rerunning derivation) when no substitution is found but both sides name
/// conjunctions of otherwise-known principles.
pub fn resolve_named(
    db: &mut Database,
    a_name: &str,
    op: Operator,
    b_name: &str,
    force: bool,
) -> Result<QueryOutcome, ErrorKind> {
    let r = substitution_reducibility(op);

    let a = match resolve_operand(db, a_name, r, force)? {
        Resolved::Direct(id) => id,
        Resolved::Substituted(id, _) => id,
    };
    let b = match resolve_operand(db, b_name, r, force)? {
        Resolved::Direct(id) => id,
        Resolved::Substituted(id, _) => id,
    };

    resolve(db, a, op, b)
}

enum Resolved {
    Direct(PrincipleId),
    Substituted(PrincipleId, String),
}

fn resolve_operand(
    db: &mut Database,
    name: &str,
    r: Option<Reducibility>,
    force: bool,
) -> Result<Resolved, ErrorKind> {
    let canonical = principle::canonicalize(name);
    if let Some(id) = db.registry.get(&canonical) {
        return Ok(Resolved::Direct(id));
    }

    let conjuncts = principle::conjuncts(&canonical);
    let conjunct_ids: Option<Vec<PrincipleId>> = conjuncts.iter().map(|c| db.registry.get(c)).collect();
    let Some(conjunct_ids) = conjunct_ids else {
        return Err(ErrorKind::UnknownPrinciple(name.to_string()));
    };

    if conjuncts.len() > 1 {
        if let Some(r) = r {
            if let Some((joined, note)) = substitute_conjunction(db, &conjunct_ids, r) {
                log::info!(target: crate::misc::log::targets::QUERY, "{note}");
                return Ok(Resolved::Substituted(joined, note));
            }
        }

        if force {
            let joined = db.registry.add_principle(&canonical);
            run_derivation(db)?;
            return Ok(Resolved::Direct(joined));
        }
    }

    Err(ErrorKind::UnregisteredConjunction(canonical))
}

/// Searches for a registered conjunction equivalent to `conjunct_ids`' join under `r`: for each
/// conjunct, every principle equivalent to it at `r` (including itself) is a candidate
/// substitute; the first combination whose canonical join is registered wins (§4.5 step 1).
fn substitute_conjunction(db: &Database, conjunct_ids: &[PrincipleId], r: Reducibility) -> Option<(PrincipleId, String)> {
    let candidates: Vec<Vec<PrincipleId>> = conjunct_ids
        .iter()
        .map(|&id| {
            let mut equivs = vec![id];
            for (pair_a, pair_b, cell) in db.relations.pairs() {
                if pair_a == id && lattice::is_present(r, cell.equivalent) {
                    equivs.push(pair_b);
                }
            }
            equivs
        })
        .collect();

    let mut combo = vec![0usize; candidates.len()];
    loop {
        let names: Vec<&str> = combo
            .iter()
            .enumerate()
            .map(|(i, &choice)| db.registry.name(candidates[i][choice]))
            .collect();
        let joined_name = {
            let mut parts: Vec<&str> = names.clone();
            parts.sort_unstable();
            parts.dedup();
            parts.join("+")
        };

        if let Some(joined) = db.registry.get(&joined_name) {
            let original: Vec<&str> = conjunct_ids.iter().map(|&id| db.registry.name(id)).collect();
            return Some((
                joined,
                format!("substituted {} ~{r}~ {} via per-conjunct equivalence", original.join("+"), joined_name),
            ));
        }

        let mut i = 0;
        loop {
            if i == combo.len() {
                return None;
            }
            combo[i] += 1;
            if combo[i] < candidates[i].len() {
                break;
            }
            combo[i] = 0;
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;

    #[test]
    fn direct_hit_renders_proof() {
        let mut db = Database::new();
        let mut b = Builder::new(&mut db);
        let x = b.add_principle("X");
        let y = b.add_principle("Y");
        b.assert_implies(&x, Reducibility::Rca, &y, "axiom".into()).unwrap();

        let outcome = resolve_implies(&db, &x, Reducibility::Rca, &y).unwrap();
        assert!(outcome.holds());
        assert!(outcome.proof().unwrap().contains("axiom"));
    }

    #[test]
    fn miss_reports_failure_without_established_opposite() {
        let mut db = Database::new();
        let mut b = Builder::new(&mut db);
        let x = b.add_principle("X");
        let y = b.add_principle("Y");

        let outcome = resolve_implies(&db, &x, Reducibility::Rca, &y).unwrap();
        assert!(!outcome.holds());
    }

    #[test]
    fn unregistered_atomic_principle_is_unknown() {
        let mut db = Database::new();
        db.registry.add_principle("X");
        let err = resolve_named(
            &mut db,
            "X",
            Operator::Implies(Reducibility::Rca),
            "Ghost",
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ErrorKind::UnknownPrinciple(_)));
    }

    #[test]
    fn force_registers_conjunction_and_reruns_derivation() {
        let mut db = Database::new();
        db.registry.add_principle("A");
        db.registry.add_principle("B");
        db.registry.add_principle("C");

        let outcome = resolve_named(
            &mut db,
            "A+B",
            Operator::Implies(Reducibility::Rca),
            "C",
            true,
        )
        .unwrap();
        assert!(!outcome.holds());
        assert!(db.registry.get("A+B").is_some());
    }
}
