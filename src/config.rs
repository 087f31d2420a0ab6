//! Construction parameters of a [PathFinder](crate::PathFinder).

use core::fmt;

use crate::search::TieBreak;

/// Upper bound on either dimension and on the total number of cells.
pub const MAX_CELLS: usize = i32::MAX as usize;

/// Grid dimensions and search settings. These are fixed for the lifetime of a search session;
/// changing them means rebuilding the grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of cells along x.
    pub horizontal_cells: usize,
    /// Number of cells along y.
    pub vertical_cells: usize,
    /// World-space side length of a square cell.
    pub cell_size: f32,
    pub tie_break: TieBreak,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            horizontal_cells: 10,
            vertical_cells: 10,
            cell_size: 100.0,
            tie_break: TieBreak::default(),
        }
    }
}

impl GridConfig {
    pub fn new(horizontal_cells: usize, vertical_cells: usize, cell_size: f32) -> GridConfig {
        GridConfig {
            horizontal_cells,
            vertical_cells,
            cell_size,
            ..GridConfig::default()
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> GridConfig {
        self.tie_break = tie_break;
        self
    }

    /// Saturates for dimensions that [validate](Self::validate) rejects.
    pub fn cell_count(&self) -> usize {
        self.horizontal_cells.saturating_mul(self.vertical_cells)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizontal_cells == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.vertical_cells == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        // Coordinates are i32 and cells are indexed by a single usize
        let too_large = self.horizontal_cells > MAX_CELLS
            || self.vertical_cells > MAX_CELLS
            || self
                .horizontal_cells
                .checked_mul(self.vertical_cells)
                .map_or(true, |count| count > MAX_CELLS);
        if too_large {
            return Err(ConfigError::TooLarge(
                self.horizontal_cells,
                self.vertical_cells,
            ));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }

    /// Parses a TOML table, falling back to defaults for missing keys, and validates the result.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(contents: &str) -> Result<GridConfig, ConfigError> {
        let config: GridConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    /// Horizontal and vertical cell counts whose grid exceeds [MAX_CELLS].
    TooLarge(usize, usize),
    InvalidCellSize(f32),
    /// The configuration text could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWidth => write!(f, "grid needs at least one horizontal cell"),
            ConfigError::ZeroHeight => write!(f, "grid needs at least one vertical cell"),
            ConfigError::TooLarge(w, h) => {
                write!(f, "a {}x{} grid exceeds {} cells", w, h, MAX_CELLS)
            }
            ConfigError::InvalidCellSize(size) => {
                write!(f, "cell size must be a positive number, got {}", size)
            }
            ConfigError::Parse(msg) => write!(f, "could not parse grid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
