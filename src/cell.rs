use crate::coord::Coord;

/// Sentinel for a weight or start distance that has not been assigned yet.
pub const UNSET: i32 = -1;

/// Display and search state of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    /// On the frontier: weighted but not expanded yet.
    Weighted,
    /// Expanded.
    Selected,
    /// Start, end, or a cell of the final path.
    Endpoint,
}

impl CellState {
    /// Character used by the text rendering of a grid.
    pub fn symbol(&self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Weighted => 'o',
            CellState::Selected => 'x',
            CellState::Endpoint => '*',
        }
    }

    /// Whether the search may still (re)weight a cell in this state.
    pub fn is_open(&self) -> bool {
        matches!(self, CellState::Empty | CellState::Weighted)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Estimated total cost through this cell, `start_distance` plus the cost left to the end.
    pub weight: i32,
    pub start_distance: i32,
    pub state: CellState,
    /// Linear index of the predecessor on the best known path. Never owning.
    pub parent: Option<usize>,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            weight: UNSET,
            start_distance: UNSET,
            state: CellState::Empty,
            parent: None,
        }
    }
}

impl Cell {
    pub fn reset(&mut self) {
        *self = Cell::default();
    }

    pub fn is_reached(&self) -> bool {
        self.start_distance != UNSET
    }
}

/// Read-only copy of a cell with everything a renderer needs to draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    pub coord: Coord,
    pub state: CellState,
    pub weight: i32,
    pub start_distance: i32,
    pub parent: Option<Coord>,
    pub is_start: bool,
    pub is_end: bool,
}

impl CellView {
    /// Text drawn on top of the cell: `A` and `B` for the endpoints, the weight for anything the
    /// search has touched.
    pub fn label(&self) -> Option<String> {
        if self.is_start {
            Some("A".to_owned())
        } else if self.is_end {
            Some("B".to_owned())
        } else {
            match self.state {
                CellState::Empty | CellState::Wall => None,
                _ => Some(self.weight.to_string()),
            }
        }
    }
}
