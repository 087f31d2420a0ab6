use core::fmt;
use itertools::Itertools;
use log::{debug, info};
use petgraph::unionfind::UnionFind;

use crate::cell::{Cell, CellState, CellView, UNSET};
use crate::config::{ConfigError, GridConfig};
use crate::coord::{Coord, WorldPos};

/// [Grid] owns the row-major cell storage together with the start and end designations. It also
/// maintains connected components of the non-wall cells in a [UnionFind] structure so that
/// reachability can be queried without searching.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: f32,
    cells: Vec<Cell>,
    start: Option<Coord>,
    end: Option<Coord>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    pub fn new(config: &GridConfig) -> Result<Grid, ConfigError> {
        config.validate()?;
        let cell_count = config.cell_count();
        let mut grid = Grid {
            width: config.horizontal_cells,
            height: config.vertical_cells,
            cell_size: config.cell_size,
            cells: vec![Cell::default(); cell_count],
            start: None,
            end: None,
            components: UnionFind::new(cell_count),
            components_dirty: false,
        };
        grid.generate_components();
        info!("There are {} cells", cell_count);
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }
    pub fn start(&self) -> Option<Coord> {
        self.start
    }
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Linear index of a coordinate, [None] outside the grid.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.y as usize * self.width + coord.x as usize)
    }

    /// Inverse of [index_of](Self::index_of).
    pub fn coord_of(&self, index: usize) -> Coord {
        let x = index % self.width;
        let y = (index - x) / self.width;
        Coord::new(x as i32, y as i32)
    }

    /// Bounds-checked lookup. Absence is the normal answer at the grid edges.
    pub fn get_cell(&self, coord: Coord) -> Option<&Cell> {
        self.index_of(coord).map(|ix| &self.cells[ix])
    }

    pub fn get_cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index_of(coord).map(move |ix| &mut self.cells[ix])
    }

    pub(crate) fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    /// Maps a world position to the cell whose centre is nearest. Rows grow towards negative world
    /// y. The result may lie outside the grid.
    pub fn world_to_coord(&self, world: WorldPos) -> Coord {
        let half = self.cell_size / 2.0;
        Coord::new(
            ((world.x + half) / self.cell_size).floor() as i32,
            ((-world.y + half) / self.cell_size).floor() as i32,
        )
    }

    /// World position of the centre of a cell.
    pub fn coord_to_world(&self, coord: Coord) -> WorldPos {
        WorldPos::new(
            coord.x as f32 * self.cell_size,
            -(coord.y as f32) * self.cell_size,
        )
    }

    pub fn view(&self, coord: Coord) -> Option<CellView> {
        self.index_of(coord).map(|ix| self.view_index(ix))
    }

    fn view_index(&self, index: usize) -> CellView {
        let cell = &self.cells[index];
        let coord = self.coord_of(index);
        CellView {
            coord,
            state: cell.state,
            weight: cell.weight,
            start_distance: cell.start_distance,
            parent: cell.parent.map(|p| self.coord_of(p)),
            is_start: self.start == Some(coord),
            is_end: self.end == Some(coord),
        }
    }

    /// Views of all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        (0..self.cells.len()).map(move |ix| self.view_index(ix))
    }

    /// Flips a cell between empty and wall. Endpoints, cells touched by a search and coordinates
    /// outside the grid are left alone.
    pub fn toggle_wall(&mut self, coord: Coord) -> bool {
        if self.start == Some(coord) || self.end == Some(coord) {
            return false;
        }
        let Some(ix) = self.index_of(coord) else {
            return false;
        };
        match self.cells[ix].state {
            CellState::Wall => {
                self.cells[ix].state = CellState::Empty;
                self.join_open_neighbours(coord, ix);
                true
            }
            CellState::Empty => {
                self.cells[ix].state = CellState::Wall;
                // Adding a wall can split a component, which a union-find cannot undo
                self.components_dirty = true;
                true
            }
            _ => false,
        }
    }

    /// Designates or clears the start and end. Exactly one of these fires, checked in order: set
    /// the start, set the end, clear the start, clear the end. Walls are never eligible.
    pub fn toggle_endpoint(&mut self, coord: Coord) -> bool {
        let Some(ix) = self.index_of(coord) else {
            return false;
        };
        if self.cells[ix].state == CellState::Wall {
            return false;
        }
        let is_start = self.start == Some(coord);
        let is_end = self.end == Some(coord);
        let cell = &mut self.cells[ix];
        if self.start.is_none() && !is_end {
            debug!("Start set to {}", coord);
            self.start = Some(coord);
            cell.state = CellState::Endpoint;
            cell.start_distance = 0;
        } else if self.end.is_none() && !is_start {
            debug!("End set to {}", coord);
            self.end = Some(coord);
            cell.state = CellState::Endpoint;
        } else if is_start {
            debug!("Start cleared at {}", coord);
            self.start = None;
            cell.state = CellState::Empty;
            cell.start_distance = UNSET;
        } else if is_end {
            debug!("End cleared at {}", coord);
            self.end = None;
            cell.state = CellState::Empty;
        } else {
            return false;
        }
        true
    }

    /// Returns every cell to its initial state and drops the endpoint designations.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
        self.start = None;
        self.end = None;
        self.generate_components();
    }

    fn is_open(&self, coord: Coord) -> bool {
        self.get_cell(coord)
            .is_some_and(|cell| cell.state != CellState::Wall)
    }

    fn join_open_neighbours(&mut self, coord: Coord, ix: usize) {
        for n in coord.moore_neighborhood() {
            if self.is_open(n) {
                if let Some(n_ix) = self.index_of(n) {
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    /// Retrieves the component id a given [Coord] belongs to.
    pub fn get_component(&self, coord: Coord) -> Option<usize> {
        self.index_of(coord).map(|ix| self.components.find(ix))
    }

    /// Checks if both coordinates are open and on the same component. Call
    /// [update](Self::update) first if walls were added since the last generation.
    pub fn reachable(&self, start: Coord, goal: Coord) -> bool {
        match (self.index_of(start), self.index_of(goal)) {
            (Some(start_ix), Some(goal_ix)) => {
                self.is_open(start) && self.is_open(goal) && self.components.equiv(start_ix, goal_ix)
            }
            _ => false,
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for ix in 0..self.cells.len() {
            let point = self.coord_of(ix);
            if !self.is_open(point) {
                continue;
            }
            // Half of the Moore neighbourhood suffices as every pair is visited from one side
            [
                Coord::new(point.x + 1, point.y - 1),
                Coord::new(point.x + 1, point.y),
                Coord::new(point.x + 1, point.y + 1),
                Coord::new(point.x, point.y + 1),
            ]
            .into_iter()
            .filter(|p| self.is_open(*p))
            .filter_map(|p| self.index_of(p))
            .collect::<Vec<_>>()
            .into_iter()
            .for_each(|n_ix| {
                self.components.union(ix, n_ix);
            });
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self.cells().chunks(self.width);
        for row in &rows {
            let line = row
                .map(|view| {
                    if view.is_start {
                        'A'
                    } else if view.is_end {
                        'B'
                    } else {
                        view.state.symbol()
                    }
                })
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
