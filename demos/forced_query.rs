use rm_zoo::builder::Builder;
use rm_zoo::db::Database;
use rm_zoo::procedures::run_derivation;
use rm_zoo::query::resolve;
use rm_zoo::structures::operator::Operator;

fn main() {
    env_logger::init();

    let mut db = Database::new();
    let mut builder = Builder::new(&mut db);
    let a = builder.add_principle("A");
    let bb = builder.add_principle("B");
    let c = builder.add_principle("C");
    builder
        .assert_implies(&a, rm_zoo::lattice::reducibility::Reducibility::StrongWeihrauch, &c, "x".into())
        .unwrap();
    drop(builder);
    run_derivation(&mut db).unwrap();

    // "A+B" was never registered, and derivation never invents conjunctions
    // on its own. A plain query against it fails...
    let op = Operator::Implies(rm_zoo::lattice::reducibility::Reducibility::StrongWeihrauch);
    let unforced = resolve::resolve_named(&mut db, "A+B", op, "C", false);
    println!("without force: {unforced:?}");
    assert!(unforced.is_err());

    // ...but with `force`, the caller opts in to registering "A+B" and
    // rerunning derivation, after which it weakens to each conjunct (and so,
    // transitively, to C).
    let forced = resolve::resolve_named(&mut db, "A+B", op, "C", true).unwrap();
    println!("with force: holds = {}", forced.holds());
    assert!(forced.holds());

    let _ = (a, bb, c);
}
