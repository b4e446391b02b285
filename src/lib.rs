/*!
A knowledge base of reverse mathematics principles.

rm_zoo records known relationships between mathematical principles (axioms of
second-order arithmetic) and derives every relationship implied by a fixed set
of inference rules, over two ordered lattices: a lattice of reducibility
strengths and a lattice of syntactic complexity classes ("forms").

Facts are asserted through a [database](crate::db::Database) by way of the
[assertion kernel](crate::context), which installs a fact, propagates the
lattice-closure consequences of doing so, and fails with a
[contradiction](crate::types::err::ErrorKind::Contradiction) if the opposite
fact is already present. A full knowledge base is built by running the
[derivation driver](crate::procedures) to a fixpoint over a collection of seed
facts, after which the [query resolver](crate::query) can be asked whether a
given fact is known, and, if so, for a human-readable reconstruction of its
proof.

# Orientation

The library is built around [Database], a single value holding the
[principle registry](crate::db::registry), the
[relation store](crate::db::relation) and the
[justification store](crate::db::justification). A solve of sorts proceeds as:

- Principles and facts are added via the [builder](crate::builder), which
  canonicalizes operands and hands off to the assertion kernel.
- [run_derivation](crate::procedures::run_derivation) repeatedly applies the
  inference rules of the positive and negative closure phases until no
  relation bitmask changes.
- [resolve](crate::query::resolve) answers whether a fact holds, substituting
  registered conjunctions for unregistered ones where possible.

# Example

```rust
use rm_zoo::{builder::Builder, db::Database, lattice::reducibility::Reducibility};

let mut db = Database::new();
let mut builder = Builder::new(&mut db);

let a = builder.add_principle("A");
let b = builder.add_principle("B");
let c = builder.add_principle("C");

builder.assert_implies(&a, Reducibility::StrongWeihrauch, &b, "lemma1".into()).unwrap();
builder.assert_implies(&b, Reducibility::StrongWeihrauch, &c, "lemma2".into()).unwrap();

rm_zoo::procedures::run_derivation(&mut db).unwrap();

let outcome = rm_zoo::query::resolve::resolve_implies(&db, &a, Reducibility::StrongWeihrauch, &c).unwrap();
assert!(outcome.holds());
```

# Logs

Calls to the [log] macro are made throughout the kernel, derivation driver and
query resolver. As with other uses of [log], no logger implementation is
bundled; see [misc::log] for the targets used.
*/

#![allow(clippy::too_many_arguments)]

pub mod config;
pub mod corpus;
pub mod misc;
pub mod types;

pub mod lattice;
pub mod structures;

pub mod db;

pub mod context;

pub mod builder;
pub mod procedures;

pub mod query;

pub mod reports;

pub use db::Database;
