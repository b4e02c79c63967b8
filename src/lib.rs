//! Random perfect maze generation and solving.
//!
//! A maze is a random spanning tree over a rectangular grid: a
//! disjoint-set forest tracks which cells are already connected while
//! passages are carved between randomly chosen neighbors, so every maze
//! is fully connected and cycle-free. The finished maze is an undirected
//! passage graph, queried per cell for its open sides and solved with
//! depth-first or breadth-first search.
//!
//! ```
//! use mazecore::{Maze, Solver};
//!
//! let maze = Maze::generate(10, 10, Some(42))?;
//! assert_eq!(maze.edge_count(), maze.vertex_count() - 1);
//! let path = maze.solve(Solver::Bfs);
//! assert_eq!(path.first(), Some(&maze.entrance()));
//! assert_eq!(path.last(), Some(&maze.exit()));
//! # Ok::<(), mazecore::MazeError>(())
//! ```

pub mod error;
pub mod generators;
pub mod graph;
pub mod maze;
pub mod sets;
pub mod solvers;

pub use error::MazeError;
pub use graph::PassageGraph;
pub use maze::{Maze, OpenSides};
pub use sets::DisjointSets;
pub use solvers::Solver;
