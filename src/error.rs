use thiserror::Error;

/// Errors surfaced by the maze engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A vertex index outside `[0, vertex_count)` was passed in.
    /// Indicates a caller bug such as stale grid dimensions.
    #[error("vertex index {index} is out of range for {count} vertices")]
    IndexOutOfRange { index: usize, count: usize },
    /// Grid dimensions must both be positive.
    #[error("invalid maze dimensions: {rows} rows x {cols} columns")]
    InvalidDimensions { rows: usize, cols: usize },
}
