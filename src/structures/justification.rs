/*!
[Justification], the proof record attached to an established
[Fact](super::fact::Fact).
*/

use crate::db::keys::FactId;

/// A proof record for a single fact: either a leaf (the user-supplied text,
/// possibly empty) or a composite citing the facts it was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Justification {
    /// A directly-asserted fact, with its (possibly empty) justification text.
    Leaf(String),

    /// A derived fact, citing the facts used to derive it.
    Composite(Vec<FactId>),
}

impl Justification {
    /// The complexity of a justification given the complexity of its children:
    /// `1` for a leaf, `1 + sum(children)` for a composite.
    pub fn complexity(&self, complexity_of: impl Fn(FactId) -> u32) -> u32 {
        match self {
            Justification::Leaf(_) => 1,
            Justification::Composite(supports) => {
                1 + supports.iter().map(|f| complexity_of(*f)).sum::<u32>()
            }
        }
    }
}
