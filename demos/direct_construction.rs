use rm_zoo::builder::Builder;
use rm_zoo::db::Database;
use rm_zoo::lattice::reducibility::Reducibility;
use rm_zoo::procedures::run_derivation;
use rm_zoo::query::resolve;

fn main() {
    env_logger::init();

    let mut db = Database::new();
    let mut builder = Builder::new(&mut db);

    let wkl0 = builder.add_principle("WKL0");
    let rca0 = builder.add_principle("RCA0");
    let acat0 = builder.add_principle("ACA0");

    builder
        .assert_implies(&wkl0, Reducibility::Rca, &rca0, "WKL0 implies RCA0 over RCA0".into())
        .expect("failed to assert WKL0 RCA-> RCA0");
    builder
        .assert_implies(&acat0, Reducibility::Rca, &wkl0, "ACA0 proves WKL0".into())
        .expect("failed to assert ACA0 RCA-> WKL0");

    drop(builder);

    println!("Before closure, ACA0 RCA-> RCA0 is:");
    println!("  {:?}", resolve::resolve_implies(&db, &acat0, Reducibility::Rca, &rca0).unwrap().holds());

    run_derivation(&mut db).expect("derivation should not find a contradiction in this database");

    let outcome = resolve::resolve_implies(&db, &acat0, Reducibility::Rca, &rca0).unwrap();
    println!("After closure, ACA0 RCA-> RCA0 is: {}", outcome.holds());
    if let Some(proof) = outcome.proof() {
        println!("Proof:\n{proof}");
    }

    // A query for a relation which does not hold reports why not, rather than panicking.
    let absent = resolve::resolve_implies(&db, &rca0, Reducibility::Rca, &acat0).unwrap();
    assert!(!absent.holds());
    println!("\nRCA0 RCA-> ACA0 does not hold: {absent:?}");
}
