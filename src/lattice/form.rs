/*!
The form lattice `F`: syntactic complexity classes of the arithmetical and
analytical hierarchy relevant to conservation results.

# Open question

The source disagrees with itself across versions on exactly which Hasse
edges the form lattice has (see spec Open Questions, item (a)): one version
embeds `Sigma` classes, one does not. This module follows the v5.1 shape,
which keeps both: each arithmetical level `n` includes into level `n+1` of
both kinds (`Sigma0_n -> Sigma0_{n+1}`, `Sigma0_n -> Pi0_{n+1}`, and
symmetrically for `Pi0_n`), `uPi03` sits strictly between `Pi03` and `Pi04`,
every arithmetical class includes into `Pi11` (an arithmetical formula is
trivially `Pi^1_1` after a vacuous second-order universal quantifier), and the
analytical hierarchy chains `Pi11 -> rPi12 -> Pi12 -> Pi13`.
*/

use std::sync::OnceLock;

use super::LatticeElement;

/// A syntactic complexity class in the arithmetical/analytical hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Form {
    Sig02,
    Pi02,
    Sig03,
    Pi03,
    UPi03,
    Sig04,
    Pi04,
    Pi11,
    RPi12,
    Pi12,
    Pi13,
}

use Form::*;

const ALL: [Form; 11] = [Sig02, Pi02, Sig03, Pi03, UPi03, Sig04, Pi04, Pi11, RPi12, Pi12, Pi13];

const EDGES: [(Form, Form); 15] = [
    (Sig02, Sig03),
    (Sig02, Pi03),
    (Pi02, Pi03),
    (Pi02, Sig03),
    (Sig03, Sig04),
    (Sig03, Pi04),
    (Pi03, Pi04),
    (Pi03, Sig04),
    (Pi03, UPi03),
    (UPi03, Pi04),
    (Sig04, Pi11),
    (Pi04, Pi11),
    (UPi03, Pi11),
    (Pi11, RPi12),
    (RPi12, Pi12),
];

const EDGES_EXTRA: [(Form, Form); 1] = [(Pi12, Pi13)];

impl LatticeElement for Form {
    fn all() -> &'static [Self] {
        &ALL
    }

    fn index(self) -> usize {
        match self {
            Sig02 => 0,
            Pi02 => 1,
            Sig03 => 2,
            Pi03 => 3,
            UPi03 => 4,
            Sig04 => 5,
            Pi04 => 6,
            Pi11 => 7,
            RPi12 => 8,
            Pi12 => 9,
            Pi13 => 10,
        }
    }

    fn edges() -> &'static [(Self, Self)] {
        static ALL_EDGES: OnceLock<Vec<(Form, Form)>> = OnceLock::new();
        ALL_EDGES
            .get_or_init(|| EDGES.iter().chain(EDGES_EXTRA.iter()).copied().collect())
            .as_slice()
    }
}

fn weaker_table() -> &'static Vec<u16> {
    static TABLE: OnceLock<Vec<u16>> = OnceLock::new();
    TABLE.get_or_init(super::close_weaker::<Form>)
}

fn stronger_table() -> &'static Vec<u16> {
    static TABLE: OnceLock<Vec<u16>> = OnceLock::new();
    TABLE.get_or_init(|| super::invert::<Form>(weaker_table()))
}

impl Form {
    /// The mask of forms `self` syntactically includes into, including `self`.
    ///
    /// Named `weaker` for symmetry with [Reducibility](super::reducibility::Reducibility);
    /// here "weaker" means "syntactically simpler or equal".
    pub fn weaker(self) -> u16 {
        weaker_table()[self.index()]
    }

    /// The mask of forms which include into `self`, including `self`.
    pub fn stronger(self) -> u16 {
        stronger_table()[self.index()]
    }

    /// Parses a form name as it appears in the corpus grammar (`<name> form <Form>`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Sig02" => Some(Sig02),
            "Pi02" => Some(Pi02),
            "Sig03" => Some(Sig03),
            "Pi03" => Some(Pi03),
            "uPi03" => Some(UPi03),
            "Sig04" => Some(Sig04),
            "Pi04" => Some(Pi04),
            "Pi11" => Some(Pi11),
            "rPi12" => Some(RPi12),
            "Pi12" => Some(Pi12),
            "Pi13" => Some(Pi13),
            _ => None,
        }
    }
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sig02 => "Sig02",
            Pi02 => "Pi02",
            Sig03 => "Sig03",
            Pi03 => "Pi03",
            UPi03 => "uPi03",
            Sig04 => "Sig04",
            Pi04 => "Pi04",
            Pi11 => "Pi11",
            RPi12 => "rPi12",
            Pi12 => "Pi12",
            Pi13 => "Pi13",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi02_included_implies_pi03_included() {
        assert!(super::super::is_present(Pi03, Pi02.weaker()));
    }

    #[test]
    fn sig02_included_implies_pi03_included() {
        assert!(super::super::is_present(Pi03, Sig02.weaker()));
    }

    #[test]
    fn pi11_included_implies_rpi12_included() {
        assert!(super::super::is_present(RPi12, Pi11.weaker()));
    }

    #[test]
    fn downward_closure_chain_reaches_pi13() {
        // Everything in the arithmetical hierarchy eventually includes into Pi13.
        for f in ALL {
            assert!(super::super::is_present(Pi13, f.weaker()));
        }
    }

    #[test]
    fn stronger_is_inverse_of_weaker() {
        for x in ALL {
            for y in ALL {
                assert_eq!(
                    super::super::is_present(y, x.weaker()),
                    super::super::is_present(x, y.stronger()),
                );
            }
        }
    }
}
