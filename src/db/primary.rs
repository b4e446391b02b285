/*!
The [PrimarySet]: a designated subset of principles for presentation,
mutated only by explicit "is primary" declarations.
*/

use std::collections::HashSet;

use super::keys::PrincipleId;

/// Tracks which principles have been declared primary, together with the
/// order in which they were declared.
#[derive(Default)]
pub struct PrimarySet {
    members: HashSet<PrincipleId>,
    order: Vec<PrincipleId>,
}

impl PrimarySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `id` primary. Idempotent: redeclaring an existing primary does
    /// not change its insertion-order position.
    pub fn declare(&mut self, id: PrincipleId) {
        if self.members.insert(id) {
            self.order.push(id);
        }
    }

    /// Whether `id` has been declared primary.
    pub fn is_primary(&self, id: PrincipleId) -> bool {
        self.members.contains(&id)
    }

    /// The primary principles in declaration order.
    pub fn in_order(&self) -> &[PrincipleId] {
        &self.order
    }
}
