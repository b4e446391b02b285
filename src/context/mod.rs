/*!
The assertion kernel: `add_fact`, the single entry point through which every
fact --- asserted or derived --- enters a [Database](crate::db::Database).

`add_fact` installs a fact only if it is new or strictly shortens an existing
proof, propagates the lattice-closure consequences of doing so (§4.3), and
fails with [ErrorKind::Contradiction](crate::types::err::ErrorKind::Contradiction)
the moment the opposite fact is found to already hold.
*/

mod kernel;

pub use kernel::add_fact;
