/*!
The reducibility lattice `R`.

`R` is the finite ordered set `{w, RCA, c, sc, gW, W, sW}` together with a
bottom `none` (never a member of any mask, and not a [Reducibility] value).
The order is "weaker than"; the Hasse edges are:

```text
RCA -> w; sc -> c -> w; sW -> W; sW -> sc; W -> gW; W -> c; gW -> w
```

`sW` ("strong Weihrauch") is the strongest reducibility in the set, `w`
("weak") the weakest.
*/

use std::sync::OnceLock;

use super::LatticeElement;

/// A notion of relative reductive strength between two principles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reducibility {
    /// `w` --- weak reducibility, the weakest element of `R`.
    Weak,

    /// `RCA` --- provability over RCA₀.
    Rca,

    /// `c` --- computable reducibility.
    Computable,

    /// `sc` --- strong computable reducibility.
    StrongComputable,

    /// `gW` --- generalized Weihrauch reducibility.
    GeneralizedWeihrauch,

    /// `W` --- Weihrauch reducibility.
    Weihrauch,

    /// `sW` --- strong Weihrauch reducibility, the strongest element of `R`.
    StrongWeihrauch,
}

use Reducibility::*;

const ALL: [Reducibility; 7] = [Weak, Rca, Computable, StrongComputable, GeneralizedWeihrauch, Weihrauch, StrongWeihrauch];

const EDGES: [(Reducibility, Reducibility); 8] = [
    (Rca, Weak),
    (StrongComputable, Computable),
    (Computable, Weak),
    (StrongWeihrauch, Weihrauch),
    (StrongWeihrauch, StrongComputable),
    (Weihrauch, GeneralizedWeihrauch),
    (Weihrauch, Computable),
    (GeneralizedWeihrauch, Weak),
];

impl LatticeElement for Reducibility {
    fn all() -> &'static [Self] {
        &ALL
    }

    fn index(self) -> usize {
        match self {
            Weak => 0,
            Rca => 1,
            Computable => 2,
            StrongComputable => 3,
            GeneralizedWeihrauch => 4,
            Weihrauch => 5,
            StrongWeihrauch => 6,
        }
    }

    fn edges() -> &'static [(Self, Self)] {
        &EDGES
    }
}

fn weaker_table() -> &'static Vec<u16> {
    static TABLE: OnceLock<Vec<u16>> = OnceLock::new();
    TABLE.get_or_init(super::close_weaker::<Reducibility>)
}

fn stronger_table() -> &'static Vec<u16> {
    static TABLE: OnceLock<Vec<u16>> = OnceLock::new();
    TABLE.get_or_init(|| super::invert::<Reducibility>(weaker_table()))
}

impl Reducibility {
    /// The mask of reductions `self` implies, including `self`.
    pub fn weaker(self) -> u16 {
        weaker_table()[self.index()]
    }

    /// The mask of reductions which imply `self`, including `self`.
    pub fn stronger(self) -> u16 {
        stronger_table()[self.index()]
    }

    /// Parses an element name, accepting the aliases noted in the corpus grammar:
    /// an empty string denotes [Rca](Reducibility::Rca), and `gc` is an alias for
    /// [Weak](Reducibility::Weak).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "" => Some(Rca),
            "gc" => Some(Weak),
            "w" => Some(Weak),
            "RCA" => Some(Rca),
            "c" => Some(Computable),
            "sc" => Some(StrongComputable),
            "gW" => Some(GeneralizedWeihrauch),
            "W" => Some(Weihrauch),
            "sW" => Some(StrongWeihrauch),
            _ => None,
        }
    }
}

impl std::fmt::Display for Reducibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Weak => "w",
            Rca => "RCA",
            Computable => "c",
            StrongComputable => "sc",
            GeneralizedWeihrauch => "gW",
            Weihrauch => "W",
            StrongWeihrauch => "sW",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sw_weaker_matches_s1_scenario() {
        // A sW-> C should license A r-> C for every r weaker than sW except RCA,
        // i.e. {W, sc, gW, c, w}.
        let mask = StrongWeihrauch.weaker();
        for r in [Weihrauch, StrongComputable, GeneralizedWeihrauch, Computable, Weak] {
            assert!(super::super::is_present(r, mask), "{r} missing from weaker(sW)");
        }
        assert!(!super::super::is_present(Rca, mask), "RCA should not be weaker than sW");
    }

    #[test]
    fn weak_has_no_strict_weaker() {
        assert_eq!(Weak.weaker(), Weak.bit());
    }

    #[test]
    fn rca_has_no_strict_stronger() {
        assert_eq!(Rca.stronger(), Rca.bit());
    }

    #[test]
    fn stronger_is_inverse_of_weaker() {
        for r in ALL {
            for s in ALL {
                assert_eq!(
                    super::super::is_present(s, r.weaker()),
                    super::super::is_present(r, s.stronger()),
                );
            }
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(Reducibility::from_str(""), Some(Rca));
        assert_eq!(Reducibility::from_str("gc"), Some(Weak));
    }
}
