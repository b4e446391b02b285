use std::io::Cursor;

use rm_zoo::builder::Builder;
use rm_zoo::corpus;
use rm_zoo::db::Database;
use rm_zoo::lattice::reducibility::Reducibility;
use rm_zoo::procedures::run_derivation;
use rm_zoo::query::resolve;

/// A tiny excerpt in the §6 corpus grammar: two reductions and a form
/// declaration, with one justification spanning two physical lines.
const CORPUS: &str = r#"
# excerpt: a short chain of reductions
WKL0 sW-> RCA0 "WKL0 is provable in RCA0"
ACA0 sW-> WKL0 """
ACA0 proves WKL0
via the standard tree argument
"""
RCA0 form Pi02
"#;

fn main() {
    env_logger::init();

    let mut db = Database::new();
    let mut builder = Builder::new(&mut db);

    corpus::ingest(&mut builder, Cursor::new(CORPUS.as_bytes())).expect("corpus should parse cleanly");

    drop(builder);
    run_derivation(&mut db).expect("this corpus excerpt is consistent");

    let aca0 = db.registry.get("ACA0").unwrap();
    let rca0 = db.registry.get("RCA0").unwrap();

    let outcome = resolve::resolve_implies(&db, &aca0, Reducibility::StrongWeihrauch, &rca0).unwrap();
    println!("ACA0 sW-> RCA0 holds: {}", outcome.holds());
    println!("{}", outcome.proof().unwrap());
}
