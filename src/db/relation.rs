/*!
The [RelationStore]: bitmasks of established relations keyed by ordered pairs
of principles, plus per-principle form assignments.
*/

use std::collections::HashMap;

use super::keys::PrincipleId;

/// The five relation masks tracked for an ordered pair `(a, b)`.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelationCell {
    /// Mask of reductions `r` with `a r-> b` established.
    pub implies: u16,

    /// Mask of reductions `r` with `a r-|> b` established.
    pub not_implies: u16,

    /// Mask of reductions `r` with `a r<-> b` established.
    pub equivalent: u16,

    /// Mask of forms `f` with `a f-c b` established.
    pub conservative: u16,

    /// Mask of forms `f` with `a f-nc b` established.
    pub non_conservative: u16,
}

/// Holds every relation bitmask established so far, keyed by ordered pairs of
/// principles, and per-principle form assignments.
#[derive(Default)]
pub struct RelationStore {
    cells: HashMap<(PrincipleId, PrincipleId), RelationCell>,
    forms: HashMap<PrincipleId, u16>,
}

impl RelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The relation cell for `(a, b)`, or the all-zero cell if nothing is established.
    pub fn cell(&self, a: PrincipleId, b: PrincipleId) -> RelationCell {
        self.cells.get(&(a, b)).copied().unwrap_or_default()
    }

    /// The known syntactic forms of `a`.
    pub fn form(&self, a: PrincipleId) -> u16 {
        self.forms.get(&a).copied().unwrap_or(0)
    }

    /// Sets bits of `mask` in the `implies[a,b]` cell. Returns `true` if any new bit was set.
    pub fn add_implies(&mut self, a: PrincipleId, b: PrincipleId, mask: u16) -> bool {
        self.add_bit(a, b, mask, |cell| &mut cell.implies)
    }

    /// Sets bits of `mask` in the `not_implies[a,b]` cell. Returns `true` if any new bit was set.
    pub fn add_not_implies(&mut self, a: PrincipleId, b: PrincipleId, mask: u16) -> bool {
        self.add_bit(a, b, mask, |cell| &mut cell.not_implies)
    }

    /// Sets bits of `mask` in the `equivalent[a,b]` cell. Returns `true` if any new bit was set.
    pub fn add_equivalent(&mut self, a: PrincipleId, b: PrincipleId, mask: u16) -> bool {
        self.add_bit(a, b, mask, |cell| &mut cell.equivalent)
    }

    /// Sets bits of `mask` in the `conservative[a,b]` cell. Returns `true` if any new bit was set.
    pub fn add_conservative(&mut self, a: PrincipleId, b: PrincipleId, mask: u16) -> bool {
        self.add_bit(a, b, mask, |cell| &mut cell.conservative)
    }

    /// Sets bits of `mask` in the `non_conservative[a,b]` cell. Returns `true` if any new bit was set.
    pub fn add_non_conservative(&mut self, a: PrincipleId, b: PrincipleId, mask: u16) -> bool {
        self.add_bit(a, b, mask, |cell| &mut cell.non_conservative)
    }

    /// Sets bits of `mask` in `form[a]`. Returns `true` if any new bit was set.
    pub fn add_form(&mut self, a: PrincipleId, mask: u16) -> bool {
        let entry = self.forms.entry(a).or_insert(0);
        let before = *entry;
        *entry |= mask;
        *entry != before
    }

    fn add_bit(
        &mut self,
        a: PrincipleId,
        b: PrincipleId,
        mask: u16,
        field: impl Fn(&mut RelationCell) -> &mut u16,
    ) -> bool {
        let cell = self.cells.entry((a, b)).or_default();
        let slot = field(cell);
        let before = *slot;
        *slot |= mask;
        *slot != before
    }

    /// Iterates over every pair with a non-default cell. Used by invariant checks and proof search.
    pub fn pairs(&self) -> impl Iterator<Item = (PrincipleId, PrincipleId, RelationCell)> + '_ {
        self.cells.iter().map(|(&(a, b), &cell)| (a, b, cell))
    }

    /// Iterates over every principle with a non-zero form mask.
    pub fn form_entries(&self) -> impl Iterator<Item = (PrincipleId, u16)> + '_ {
        self.forms.iter().map(|(&a, &m)| (a, m))
    }
}
