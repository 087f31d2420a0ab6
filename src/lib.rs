//! # grid_stepper
//!
//! An interactive, step-by-step [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! pathfinder on a rectangular grid. Walls and a start/end pair are placed on the grid, after
//! which the search is advanced one expansion at a time. Every cell exposes its live weight,
//! start distance, parent and state so that a renderer can show the search as it unfolds.
//!
//! Moves go to all 8 neighbours (diagonals may cut corners). Costs are integers: 10 for a
//! straight step and 14 for a diagonal one, and the same octile distance serves as heuristic.
//!
//! ```
//! use grid_stepper::{Coord, GridConfig, PathFinder, Phase};
//!
//! let mut finder = PathFinder::new(GridConfig::new(3, 3, 100.0)).unwrap();
//! finder.toggle_endpoint_at(Coord::new(0, 0));
//! finder.toggle_endpoint_at(Coord::new(2, 2));
//! while !finder.phase().is_terminal() {
//!     finder.advance();
//! }
//! assert_eq!(finder.phase(), Phase::Succeeded);
//! assert_eq!(finder.path(), &[Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]);
//! ```
pub mod cell;
pub mod config;
pub mod coord;
pub mod events;
pub mod grid;
pub mod pathfinder;
pub mod search;

use fxhash::FxBuildHasher;
use indexmap::IndexSet;

pub use cell::{Cell, CellState, CellView, UNSET};
pub use config::{ConfigError, GridConfig, MAX_CELLS};
pub use coord::{path_cost, step_cost, Coord, WorldPos};
pub use events::{LogSink, NotificationSink, SearchEvent};
pub use grid::Grid;
pub use pathfinder::PathFinder;
pub use search::{Phase, SearchState, Step, TieBreak};

pub(crate) type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Cost of a straight (cardinal) move.
pub const C: i32 = 10;
/// Cost of a diagonal move, roughly `C * sqrt(2)`.
pub const D: i32 = 14;

const N_SMALLVEC_SIZE: usize = 8;
