pub mod cell;

pub use cell::{Direction, OpenSides};

use crate::error::MazeError;
use crate::generators::generate_graph;
use crate::graph::PassageGraph;
use crate::solvers::{Solver, solve_maze};

/// A generated maze over a `rows` x `cols` grid.
///
/// Cells are addressed by a linear index in `[0, rows*cols)` with
/// `row = index / cols` and `col = index % cols`. The maze is a spanning
/// tree of the grid graph: exactly one path exists between any two cells.
/// The entrance is cell 0 and the exit is cell `rows*cols - 1`.
#[derive(Debug)]
pub struct Maze {
    rows: usize,
    cols: usize,
    graph: PassageGraph,
}

impl Maze {
    /// Generates a random maze with the given dimensions. Pass a seed for
    /// a reproducible maze, or `None` to draw one from the OS.
    pub fn generate(rows: usize, cols: usize, seed: Option<u64>) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let graph = generate_graph(rows, cols, seed)?;
        Ok(Maze { rows, cols, graph })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells in the maze.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Number of open passages between cells. A complete maze over `n`
    /// cells has exactly `n - 1`.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The entrance cell, by convention the top-left corner.
    pub fn entrance(&self) -> usize {
        0
    }

    /// The exit cell, by convention the bottom-right corner.
    pub fn exit(&self) -> usize {
        self.vertex_count() - 1
    }

    /// Read access to the underlying passage graph.
    pub fn graph(&self) -> &PassageGraph {
        &self.graph
    }

    /// Which sides of `vertex` are open passages.
    ///
    /// On top of the graph-derived passages, the entrance reports its north
    /// side open and the exit its south side, so the renderer draws a way
    /// in and out of the grid. These openings are not graph edges.
    pub fn open_sides(&self, vertex: usize) -> Result<OpenSides, MazeError> {
        let mut sides = self.graph.open_sides(vertex, self.cols)?;
        if vertex == self.entrance() {
            sides.north = true;
        }
        if vertex == self.exit() {
            sides.south = true;
        }
        Ok(sides)
    }

    /// Finds a path of cell indices from the entrance to the exit.
    ///
    /// Returns an empty path when the maze has fewer than `n - 1`
    /// passages, i.e. generation did not complete.
    pub fn solve(&self, solver: Solver) -> Vec<usize> {
        solve_maze(&self.graph, solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Maze::generate(0, 5, Some(0)).unwrap_err(),
            MazeError::InvalidDimensions { rows: 0, cols: 5 }
        );
        assert!(Maze::generate(5, 0, Some(0)).is_err());
        assert!(Maze::generate(0, 0, Some(0)).is_err());
    }

    #[test]
    fn test_two_by_two_maze() {
        let maze = Maze::generate(2, 2, Some(7)).unwrap();
        assert_eq!(maze.vertex_count(), 4);
        assert_eq!(maze.edge_count(), 3);
        for vertex in 0..4 {
            assert!(maze.open_sides(vertex).unwrap().any());
        }
        let path = maze.solve(Solver::Bfs);
        assert!(path.len() <= 4);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&3));
    }

    #[test]
    fn test_entrance_and_exit_openings() {
        let maze = Maze::generate(3, 4, Some(11)).unwrap();
        assert!(maze.open_sides(maze.entrance()).unwrap().north);
        assert!(maze.open_sides(maze.exit()).unwrap().south);
        // The openings are presentation only, not graph edges
        assert_eq!(maze.edge_count(), maze.vertex_count() - 1);
    }

    #[test]
    fn test_open_sides_out_of_range() {
        let maze = Maze::generate(2, 2, Some(0)).unwrap();
        assert_eq!(
            maze.open_sides(4),
            Err(MazeError::IndexOutOfRange { index: 4, count: 4 })
        );
    }

    #[test]
    fn test_single_cell_maze() {
        let maze = Maze::generate(1, 1, Some(0)).unwrap();
        assert_eq!(maze.edge_count(), 0);
        assert_eq!(maze.entrance(), maze.exit());
        let sides = maze.open_sides(0).unwrap();
        assert!(sides.north && sides.south);
        assert_eq!(maze.solve(Solver::Dfs), vec![0]);
        assert_eq!(maze.solve(Solver::Bfs), vec![0]);
    }
}
