use core::fmt;
use log::debug;

use crate::cell::CellView;
use crate::config::{ConfigError, GridConfig};
use crate::coord::{Coord, WorldPos};
use crate::events::{LogSink, NotificationSink, SearchEvent};
use crate::grid::Grid;
use crate::search::{Phase, SearchState, Step};

/// Facade tying a [Grid] and a [SearchState] together. Editing intents are only honoured before
/// the search starts; anything else is ignored without an error.
///
/// All mutation happens inside single method calls, so a renderer reading [cells](Self::cells)
/// between calls always sees a consistent grid. Callers driving it from several threads can wrap
/// it in an `Arc<Mutex<PathFinder>>`.
pub struct PathFinder {
    config: GridConfig,
    grid: Grid,
    search: SearchState,
    sink: Box<dyn NotificationSink + Send>,
}

impl PathFinder {
    /// Creates a path finder reporting to the [log] facade.
    pub fn new(config: GridConfig) -> Result<PathFinder, ConfigError> {
        PathFinder::with_sink(config, Box::new(LogSink))
    }

    pub fn with_sink(
        config: GridConfig,
        sink: Box<dyn NotificationSink + Send>,
    ) -> Result<PathFinder, ConfigError> {
        let grid = Grid::new(&config)?;
        Ok(PathFinder {
            search: SearchState::new(config.tie_break),
            config,
            grid,
            sink,
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn search(&self) -> &SearchState {
        &self.search
    }
    pub fn phase(&self) -> Phase {
        self.search.phase()
    }

    fn editable(&self, action: &str, coord: Coord) -> bool {
        let editable = self.phase() == Phase::NotStarted;
        if !editable {
            debug!("Ignoring {} at {} during {:?}", action, coord, self.phase());
        }
        editable
    }

    pub fn toggle_wall(&mut self, world: WorldPos) -> bool {
        self.toggle_wall_at(self.grid.world_to_coord(world))
    }

    pub fn toggle_wall_at(&mut self, coord: Coord) -> bool {
        self.editable("wall toggle", coord) && self.grid.toggle_wall(coord)
    }

    pub fn toggle_endpoint(&mut self, world: WorldPos) -> bool {
        self.toggle_endpoint_at(self.grid.world_to_coord(world))
    }

    pub fn toggle_endpoint_at(&mut self, coord: Coord) -> bool {
        self.editable("endpoint toggle", coord) && self.grid.toggle_endpoint(coord)
    }

    /// Runs one search step and reports its outcome to the sink.
    pub fn advance(&mut self) -> Step {
        let step = self.search.advance(&mut self.grid);
        let event = match step {
            Step::EndpointsMissing => Some(SearchEvent::EndpointsMissing),
            Step::PathFound => Some(SearchEvent::PathFound {
                length: self.search.path().len(),
                cost: self.search.path_cost().unwrap_or_default(),
            }),
            Step::Exhausted => Some(SearchEvent::NoPathFound),
            _ => None,
        };
        if let Some(event) = event {
            self.sink.notify(&event);
        }
        step
    }

    /// Advances until the search finishes or `max_steps` steps were taken, returning the phase
    /// reached. Stops early if the endpoints are missing.
    pub fn run_to_end(&mut self, max_steps: usize) -> Phase {
        for _ in 0..max_steps {
            match self.advance() {
                Step::Finished | Step::EndpointsMissing => break,
                _ if self.phase().is_terminal() => break,
                _ => {}
            }
        }
        self.phase()
    }

    /// Returns everything to the freshly initialised state. Safe in any phase.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.search.reset();
    }

    /// Rebuilds the grid with new dimensions. On error the current grid is kept untouched.
    pub fn reconfigure(&mut self, config: GridConfig) -> Result<(), ConfigError> {
        self.grid = Grid::new(&config)?;
        self.search = SearchState::new(config.tie_break);
        self.config = config;
        Ok(())
    }

    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.grid.cells()
    }

    /// Owned copy of all cells for a renderer that cannot borrow the path finder.
    pub fn snapshot(&self) -> Vec<CellView> {
        self.cells().collect()
    }

    pub fn frontier(&self) -> Vec<Coord> {
        self.search.frontier(&self.grid).collect()
    }

    pub fn expanded(&self) -> Vec<Coord> {
        self.search.expanded(&self.grid).collect()
    }

    pub fn path(&self) -> &[Coord] {
        self.search.path()
    }

    /// Whether the end can be reached from the start at all, judged from the connected
    /// components. [None] until both endpoints are placed.
    pub fn is_reachable(&mut self) -> Option<bool> {
        let (start, end) = (self.grid.start()?, self.grid.end()?);
        self.grid.update();
        Some(self.grid.reachable(start, end))
    }
}

impl fmt::Display for PathFinder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
