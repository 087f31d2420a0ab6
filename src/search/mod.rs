//! The incremental A* engine. Each [SearchState::advance] call performs exactly one expansion and
//! leaves the grid in a consistent, renderable state.

use log::{debug, info, trace, warn};

use crate::cell::{CellState, UNSET};
use crate::coord::{path_cost, step_cost, Coord};
use crate::grid::Grid;
use crate::FxIndexSet;

mod selection;

pub use selection::TieBreak;

/// Coarse lifecycle of a search. `Succeeded` and `Failed` are only left through a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }
}

/// What a single [SearchState::advance] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The search had already finished, nothing changed.
    Finished,
    /// Start or end is not designated, the search stays unstarted.
    EndpointsMissing,
    /// The start was expanded.
    Started,
    /// The given cell was selected and expanded.
    Expanded(Coord),
    PathFound,
    /// The frontier ran dry without reaching the end.
    Exhausted,
}

/// Open and closed sets of the search plus its phase. Cell data lives in the [Grid]; cells are
/// referred to by linear index.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    frontier: FxIndexSet<usize>,
    expanded: Vec<usize>,
    path: Vec<Coord>,
    phase: Phase,
    tie_break: TieBreak,
}

impl SearchState {
    pub fn new(tie_break: TieBreak) -> SearchState {
        SearchState {
            tie_break,
            ..SearchState::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Weighted cells not yet expanded, in scan order.
    pub fn frontier<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = Coord> + 'a {
        self.frontier.iter().map(move |&ix| grid.coord_of(ix))
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Expanded cells in the order they were selected.
    pub fn expanded<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = Coord> + 'a {
        self.expanded.iter().map(move |&ix| grid.coord_of(ix))
    }

    pub fn expanded_len(&self) -> usize {
        self.expanded.len()
    }

    /// Final path from start to end. Empty unless the search succeeded.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn path_cost(&self) -> Option<i32> {
        (self.phase == Phase::Succeeded).then(|| path_cost(&self.path))
    }

    /// Forgets all search progress. The cells themselves are cleared by the grid.
    pub fn reset(&mut self) {
        self.frontier.clear();
        self.expanded.clear();
        self.path.clear();
        self.phase = Phase::NotStarted;
    }

    /// Performs one step of the search on `grid`.
    pub fn advance(&mut self, grid: &mut Grid) -> Step {
        if self.phase.is_terminal() {
            return Step::Finished;
        }
        let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
            return Step::EndpointsMissing;
        };
        match self.phase {
            Phase::NotStarted => self.begin(grid, start, end),
            _ => self.select_and_expand(grid, start, end),
        }
    }

    fn begin(&mut self, grid: &mut Grid, start: Coord, end: Coord) -> Step {
        info!("Searching a path from {} to {}", start, end);
        self.phase = Phase::InProgress;
        if self.weight_surrounding_cells(grid, start, end) {
            self.select_final_path(grid, start, end);
            Step::PathFound
        } else if self.frontier.is_empty() {
            self.exhaust()
        } else {
            Step::Started
        }
    }

    fn select_and_expand(&mut self, grid: &mut Grid, start: Coord, end: Coord) -> Step {
        let lightest = selection::select_lightest(grid, &self.frontier, end, self.tie_break)
            .and_then(|position| self.frontier.shift_remove_index(position));
        let Some(ix) = lightest else {
            return self.exhaust();
        };
        self.expanded.push(ix);
        grid.cell_mut(ix).state = CellState::Selected;
        let coord = grid.coord_of(ix);
        debug!("Selected {} with weight {}", coord, grid.cell(ix).weight);

        if self.weight_surrounding_cells(grid, coord, end) {
            self.select_final_path(grid, start, end);
            Step::PathFound
        } else if self.frontier.is_empty() {
            self.exhaust()
        } else {
            Step::Expanded(coord)
        }
    }

    fn exhaust(&mut self) -> Step {
        warn!(
            "Frontier exhausted after expanding {} cells, no path exists",
            self.expanded.len()
        );
        self.phase = Phase::Failed;
        Step::Exhausted
    }

    /// Weights the open neighbours of `center` and adds them to the frontier. Returns [true] as
    /// soon as the end is among the neighbours, leaving later neighbours untouched.
    fn weight_surrounding_cells(&mut self, grid: &mut Grid, center: Coord, end: Coord) -> bool {
        let Some(center_ix) = grid.index_of(center) else {
            return false;
        };
        for neighbour in center.moore_neighborhood() {
            let Some(ix) = grid.index_of(neighbour) else {
                continue;
            };
            if neighbour == end {
                return true;
            }
            // Skips walls, expanded cells and the start
            if !grid.cell(ix).state.is_open() {
                continue;
            }
            Self::evaluate_weight(grid, center_ix, ix, end);
            self.frontier.insert(ix);
        }
        false
    }

    /// Relaxes the cell at `evaluated` through `evaluator`. Only a strictly shorter start distance
    /// is adopted, so equal alternatives keep their first parent.
    fn evaluate_weight(grid: &mut Grid, evaluator: usize, evaluated: usize, end: Coord) {
        let evaluator_coord = grid.coord_of(evaluator);
        let evaluated_coord = grid.coord_of(evaluated);
        let new_start_distance =
            grid.cell(evaluator).start_distance + step_cost(&evaluator_coord, &evaluated_coord);

        let cell = grid.cell_mut(evaluated);
        if cell.start_distance == UNSET || new_start_distance < cell.start_distance {
            debug_assert!(
                cell.start_distance == UNSET || new_start_distance <= cell.start_distance,
                "start distance of {} grew",
                evaluated_coord
            );
            cell.start_distance = new_start_distance;
            cell.weight = new_start_distance + step_cost(&evaluated_coord, &end);
            cell.parent = Some(evaluator);
            cell.state = CellState::Weighted;
            trace!(
                "{} weighted {} via {}",
                evaluated_coord,
                cell.weight,
                evaluator_coord
            );
        }
    }

    /// Walks the parent links back from the last expanded cell, marking each cell as part of the
    /// path. When the end neighbours the start nothing was expanded and the walk starts there.
    fn select_final_path(&mut self, grid: &mut Grid, start: Coord, end: Coord) {
        let last = self
            .expanded
            .last()
            .copied()
            .or_else(|| grid.index_of(start));
        let indices: Vec<usize> =
            std::iter::successors(last, |&ix| grid.cell(ix).parent).collect();
        for &ix in &indices {
            grid.cell_mut(ix).state = CellState::Endpoint;
        }
        self.path = indices
            .into_iter()
            .rev()
            .map(|ix| grid.coord_of(ix))
            .chain(std::iter::once(end))
            .collect();
        self.phase = Phase::Succeeded;
        info!(
            "Path found: {} cells, cost {}",
            self.path.len(),
            path_cost(&self.path)
        );
    }
}
