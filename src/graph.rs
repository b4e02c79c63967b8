use crate::error::MazeError;
use crate::maze::cell::OpenSides;

/// Undirected, unweighted graph over cell indices, stored as adjacency
/// lists. An edge between two grid-adjacent cells is an open passage in
/// the maze.
///
/// Adjacency lists keep most-recently-added neighbors first, so traversal
/// order mirrors edge insertion order. The graph is a spanning tree (and
/// the maze complete) once `edge_count == vertex_count - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageGraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl PassageGraph {
    /// Creates a graph of `vertex_count` isolated vertices and zero edges.
    pub fn new(vertex_count: usize) -> Self {
        PassageGraph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges currently in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True once the graph is a spanning tree over all vertices.
    pub fn is_complete(&self) -> bool {
        self.edge_count + 1 == self.adjacency.len()
    }

    fn check_bounds(&self, vertex: usize) -> Result<(), MazeError> {
        if vertex >= self.adjacency.len() {
            return Err(MazeError::IndexOutOfRange {
                index: vertex,
                count: self.adjacency.len(),
            });
        }
        Ok(())
    }

    /// Adds an undirected edge between `first` and `second`.
    ///
    /// Edges form a set: adding an edge that already exists is a benign
    /// no-op returning `false`. Each vertex is inserted at the head of the
    /// other's adjacency list.
    pub fn add_edge(&mut self, first: usize, second: usize) -> Result<bool, MazeError> {
        self.check_bounds(first)?;
        self.check_bounds(second)?;

        if self.adjacency[first].contains(&second) {
            return Ok(false);
        }
        self.adjacency[first].insert(0, second);
        self.adjacency[second].insert(0, first);
        self.edge_count += 1;
        Ok(true)
    }

    /// The neighbors of `vertex`, most recently connected first.
    pub fn neighbors(&self, vertex: usize) -> Result<&[usize], MazeError> {
        self.check_bounds(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Neighbor access for traversals whose indices come from the graph
    /// itself and are known to be in range.
    pub(crate) fn adjacent(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// Derives which sides of `vertex` are open passages, purely from
    /// index arithmetic against the row stride `cols`: `vertex - cols` is
    /// the north neighbor, `vertex + cols` south, `vertex - 1` west and
    /// `vertex + 1` east.
    ///
    /// Assumes every edge connects grid-adjacent cells, which the
    /// generator upholds by construction.
    pub fn open_sides(&self, vertex: usize, cols: usize) -> Result<OpenSides, MazeError> {
        self.check_bounds(vertex)?;
        let mut sides = OpenSides::default();
        for &neighbor in &self.adjacency[vertex] {
            if neighbor + cols == vertex {
                sides.north = true;
            } else if vertex + cols == neighbor {
                sides.south = true;
            } else if neighbor + 1 == vertex {
                sides.west = true;
            } else if vertex + 1 == neighbor {
                sides.east = true;
            }
        }
        Ok(sides)
    }
}
