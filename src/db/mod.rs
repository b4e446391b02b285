/*!
Databases for holding information relevant to a run: the
[principle registry](registry), the [relation store](relation), the
[justification store](justification), and the [primary set](primary).

From an external perspective these four are bundled into a single
[Database] value, owned exclusively by whichever derivation or query is
currently active (§5).
*/

pub mod justification;
pub mod keys;
pub mod primary;
pub mod registry;
pub mod relation;
pub mod snapshot;

pub use keys::{FactId, PrincipleId};

use crate::config::Config;
use justification::JustificationStore;
use primary::PrimarySet;
use registry::Registry;
use relation::RelationStore;
use snapshot::{Snapshot, SnapshotJustification, SNAPSHOT_VERSION};

use crate::structures::justification::Justification;

/// The single process-wide mutable state of a run: the registry, the relation
/// store, the justification store, the primary set, and the configuration
/// governing how the kernel and query resolver behave.
#[derive(Default)]
pub struct Database {
    pub config: Config,
    pub registry: Registry,
    pub relations: RelationStore,
    pub justifications: JustificationStore,
    pub primary: PrimarySet,
}

impl Database {
    /// An empty database with the default [Config].
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty database with the given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Renders the database's current state into a serializable [Snapshot].
    ///
    /// This only builds the in-memory shape; writing it to disk (with
    /// whatever compression is desired) is left to a persistence layer built
    /// on top of this crate (see spec §6, §6A).
    pub fn to_snapshot(&self) -> Snapshot {
        let principles = self
            .registry
            .iter_sorted()
            .map(|id| self.registry.name(id).to_string())
            .collect();

        let mut implies = Vec::new();
        let mut not_implies = Vec::new();
        let mut equivalent = Vec::new();
        let mut conservative = Vec::new();
        let mut non_conservative = Vec::new();

        for (a, b, cell) in self.relations.pairs() {
            if cell.implies != 0 {
                implies.push(((a.index() as u32, b.index() as u32), cell.implies));
            }
            if cell.not_implies != 0 {
                not_implies.push(((a.index() as u32, b.index() as u32), cell.not_implies));
            }
            if cell.equivalent != 0 {
                equivalent.push(((a.index() as u32, b.index() as u32), cell.equivalent));
            }
            if cell.conservative != 0 {
                conservative.push(((a.index() as u32, b.index() as u32), cell.conservative));
            }
            if cell.non_conservative != 0 {
                non_conservative.push(((a.index() as u32, b.index() as u32), cell.non_conservative));
            }
        }

        let form = self
            .relations
            .form_entries()
            .map(|(a, mask)| (a.index() as u32, mask))
            .collect();

        let primary = self
            .primary
            .in_order()
            .iter()
            .map(|id| id.index() as u32)
            .collect();

        let justify = self
            .justifications
            .iter()
            .map(|(id, _fact)| match self.justifications.justification(id) {
                Justification::Leaf(text) => SnapshotJustification::Leaf(text.clone()),
                Justification::Composite(supports) => {
                    SnapshotJustification::Composite(supports.iter().map(|s| s.index() as u32).collect())
                }
            })
            .collect();

        Snapshot {
            version: SNAPSHOT_VERSION,
            principles,
            implies,
            not_implies,
            equivalent,
            conservative,
            non_conservative,
            form,
            primary,
            justify,
        }
    }
}
