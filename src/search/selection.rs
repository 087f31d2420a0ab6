use core::cmp::Ordering;

use crate::coord::{step_cost, Coord};
use crate::grid::Grid;
use crate::FxIndexSet;

/// Secondary key used when several frontier cells share the smallest weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Prefer the candidate whose remaining cost to the end is larger.
    #[default]
    FartherFromEnd,
    /// Prefer the candidate whose remaining cost to the end is smaller.
    NearerToEnd,
}

struct SelectionKey {
    weight: i32,
    distance_to_end: i32,
    tie_break: TieBreak,
}

impl PartialEq for SelectionKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SelectionKey {}

impl PartialOrd for SelectionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SelectionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lighter cells first, then the tie-break on the distance to the end
        match self.weight.cmp(&other.weight) {
            Ordering::Equal => match self.tie_break {
                TieBreak::FartherFromEnd => other.distance_to_end.cmp(&self.distance_to_end),
                TieBreak::NearerToEnd => self.distance_to_end.cmp(&other.distance_to_end),
            },
            s => s,
        }
    }
}

/// Position within `frontier` of the cell to expand next. Remaining ties go to the earliest entry
/// in scan order.
///
/// This is a linear scan per step, which is fine for grids drawn cell by cell. A heap keyed on
/// the same [SelectionKey] would scale better but has to keep the scan-order tie rule.
pub(crate) fn select_lightest(
    grid: &Grid,
    frontier: &FxIndexSet<usize>,
    end: Coord,
    tie_break: TieBreak,
) -> Option<usize> {
    frontier
        .iter()
        .enumerate()
        .min_by_key(|&(_, &ix)| SelectionKey {
            weight: grid.cell(ix).weight,
            distance_to_end: step_cost(&grid.coord_of(ix), &end),
            tie_break,
        })
        .map(|(position, _)| position)
}
