use core::fmt;
use core::ops::Add;
use itertools::iproduct;
use smallvec::SmallVec;

use crate::{C, D, N_SMALLVEC_SIZE};

/// Integer grid position. Signed so that neighbour offsets can step off the grid; validity is
/// checked by [Grid](crate::grid::Grid), not here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    /// The 8 surrounding positions, rows top to bottom and left to right within a row. Expansion
    /// relies on this order being fixed.
    pub fn moore_neighborhood(&self) -> SmallVec<[Coord; N_SMALLVEC_SIZE]> {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dy, dx)| dx != 0 || dy != 0)
            .map(|(dy, dx)| *self + Coord::new(dx, dy))
            .collect()
    }

    /// Whether `other` is one king move away.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Coord {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Continuous position in the world space the grid is drawn in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub const fn new(x: f32, y: f32) -> WorldPos {
        WorldPos { x, y }
    }
}

/// Cost of moving between two positions taking as many diagonal steps as possible before going
/// straight. Uses C for cardinal (straight) moves and D for diagonal moves, which makes it the
/// octile distance scaled by 10.
pub fn step_cost(p1: &Coord, p2: &Coord) -> i32 {
    let delta_x = (p1.x - p2.x).abs();
    let delta_y = (p1.y - p2.y).abs();
    delta_x.min(delta_y) * D + (delta_x - delta_y).abs() * C
}

/// Sums [step_cost] over consecutive positions of a path.
pub fn path_cost(path: &[Coord]) -> i32 {
    path.windows(2).map(|w| step_cost(&w[0], &w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_steps() {
        let o = Coord::new(3, 3);
        assert_eq!(step_cost(&o, &o), 0);
        assert_eq!(step_cost(&o, &Coord::new(4, 3)), 10);
        assert_eq!(step_cost(&o, &Coord::new(3, 2)), 10);
        assert_eq!(step_cost(&o, &Coord::new(2, 2)), 14);
        assert_eq!(step_cost(&o, &Coord::new(4, 4)), 14);
    }

    #[test]
    fn cost_is_symmetric() {
        for (a, b) in [((0, 0), (5, 2)), ((-3, 7), (4, -1)), ((2, 9), (2, 0))] {
            let (a, b) = (Coord::from(a), Coord::from(b));
            assert_eq!(step_cost(&a, &b), step_cost(&b, &a));
        }
        // Two diagonal steps and three straight ones
        assert_eq!(step_cost(&Coord::new(0, 0), &Coord::new(5, 2)), 2 * 14 + 3 * 10);
    }

    #[test]
    fn neighborhood_order() {
        let n = Coord::new(1, 1).moore_neighborhood();
        let expected = [
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (2, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ]
        .map(Coord::from);
        assert_eq!(n.as_slice(), &expected);
        assert!(n.iter().all(|p| p.is_adjacent(&Coord::new(1, 1))));
    }

    #[test]
    fn path_cost_sums_steps() {
        let path = [(0, 0), (1, 1), (2, 1), (3, 1)].map(Coord::from);
        assert_eq!(path_cost(&path), 14 + 10 + 10);
        assert_eq!(path_cost(&path[..1]), 0);
        assert_eq!(path_cost(&[]), 0);
    }
}
