/*!
The opaque, serializable shape of a finished [Database], for an external
persistence layer to write and read. This module defines the data shape and
version check only; no file I/O or compression is implemented here (see
spec §6, §6A).
*/

use serde::{Deserialize, Serialize};

use crate::types::err::ErrorKind;

/// The current snapshot format version. Bumped whenever the shape of
/// [Snapshot] changes in a way that is not backward compatible.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A versioned, serializable view of a [Database](super::Database)'s principle
/// names, relation masks, form masks, primary set, and justifications.
///
/// Reconstructing a live [Database] from a `Snapshot` (re-populating the
/// registry's internal indices, etc.) is left to a persistence layer built on
/// top of this crate; here the shape exists so such a layer has something
/// concrete to serialize opaquely.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub principles: Vec<String>,
    pub implies: Vec<((u32, u32), u16)>,
    pub not_implies: Vec<((u32, u32), u16)>,
    pub equivalent: Vec<((u32, u32), u16)>,
    pub conservative: Vec<((u32, u32), u16)>,
    pub non_conservative: Vec<((u32, u32), u16)>,
    pub form: Vec<(u32, u16)>,
    pub primary: Vec<u32>,
    pub justify: Vec<SnapshotJustification>,
}

/// A serializable [Justification](crate::structures::justification::Justification).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SnapshotJustification {
    Leaf(String),
    Composite(Vec<u32>),
}

impl Snapshot {
    /// Checks the snapshot's version against [SNAPSHOT_VERSION], failing with
    /// [ErrorKind::Version] on a mismatch.
    pub fn check_version(&self) -> Result<(), ErrorKind> {
        if self.version != SNAPSHOT_VERSION {
            Err(ErrorKind::Version {
                expected: SNAPSHOT_VERSION,
                found: self.version,
            })
        } else {
            Ok(())
        }
    }
}
