use thiserror::Error;

/// Logical grid dimensions passed through the game as a named type.
///
/// Rows count cells on the y-axis, columns on the x-axis, so width vs.
/// height stays unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    rows: u16,
    columns: u16,
}

impl Grid {
    /// Creates a grid, rejecting degenerate dimensions.
    ///
    /// A zero-sized axis would turn every coordinate into a wall hit, so
    /// it is refused here instead of producing undefined collision
    /// behavior downstream.
    pub fn new(rows: u16, columns: u16) -> Result<Self, ConfigError> {
        if rows == 0 || columns == 0 {
            return Err(ConfigError::InvalidGrid { rows, columns });
        }

        Ok(Self { rows, columns })
    }

    /// Number of cells on the y-axis.
    #[must_use]
    pub fn rows(self) -> u16 {
        self.rows
    }

    /// Number of cells on the x-axis.
    #[must_use]
    pub fn columns(self) -> u16 {
        self.columns
    }
}

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {rows} rows x {columns} columns")]
    InvalidGrid { rows: u16, columns: u16 },
}

/// Default number of grid rows.
pub const DEFAULT_ROWS: u16 = 20;

/// Default number of grid columns.
pub const DEFAULT_COLUMNS: u16 = 30;

/// Simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;
