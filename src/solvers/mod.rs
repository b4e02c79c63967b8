mod bfs;
mod dfs;

use crate::graph::PassageGraph;
use bfs::solve_bfs;
use dfs::solve_dfs;

/// Largest vertex count still solved with the recursive DFS; bigger
/// graphs switch to the explicit-stack variant to stay clear of stack
/// exhaustion.
pub(crate) const MAX_RECURSIVE_SEARCH: usize = 700;

/// Entrance cell of every maze.
pub(crate) const SOURCE: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Traverses the passage graph from the entrance (vertex 0) to the exit
/// (vertex `n - 1`) and returns the path, entrance first.
///
/// A graph with fewer than `n - 1` edges is not a complete maze; solving
/// it is a defined no-op returning an empty path, so callers can tell
/// "not generated yet" apart from a real failure by checking the edge
/// count.
pub fn solve_maze(graph: &PassageGraph, solver: Solver) -> Vec<usize> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 || graph.edge_count() < vertex_count - 1 {
        tracing::debug!(
            "[solve] graph incomplete ({} edges for {} vertices), refusing traversal",
            graph.edge_count(),
            vertex_count
        );
        return Vec::new();
    }

    let path = match solver {
        Solver::Dfs => solve_dfs(graph),
        Solver::Bfs => solve_bfs(graph),
    };
    tracing::debug!("[solve] {solver} found a path of {} cells", path.len());
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_graph;

    // 2x2 grid as a path 0-1-3-2
    fn small_tree() -> PassageGraph {
        let mut graph = PassageGraph::new(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(3, 2).unwrap();
        graph
    }

    #[test]
    fn test_incomplete_graph_is_a_noop() {
        let mut graph = PassageGraph::new(4);
        graph.add_edge(0, 1).unwrap();
        assert!(solve_maze(&graph, Solver::Dfs).is_empty());
        assert!(solve_maze(&graph, Solver::Bfs).is_empty());
    }

    #[test]
    fn test_empty_graph_is_a_noop() {
        let graph = PassageGraph::new(0);
        assert!(solve_maze(&graph, Solver::Dfs).is_empty());
        assert!(solve_maze(&graph, Solver::Bfs).is_empty());
    }

    #[test]
    fn test_both_solvers_on_known_tree() {
        let graph = small_tree();
        // The maze is a tree, so there is only one path and both solvers
        // must agree on it
        assert_eq!(solve_maze(&graph, Solver::Dfs), vec![0, 1, 3]);
        assert_eq!(solve_maze(&graph, Solver::Bfs), vec![0, 1, 3]);
    }

    fn assert_valid_path(graph: &PassageGraph, path: &[usize]) {
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&(graph.vertex_count() - 1)));
        for pair in path.windows(2) {
            assert!(
                graph.neighbors(pair[0]).unwrap().contains(&pair[1]),
                "no passage between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_solvers_on_generated_maze() {
        let graph = generate_graph(12, 9, Some(21)).unwrap();
        let dfs_path = solve_maze(&graph, Solver::Dfs);
        let bfs_path = solve_maze(&graph, Solver::Bfs);
        assert_valid_path(&graph, &dfs_path);
        assert_valid_path(&graph, &bfs_path);
        assert!(bfs_path.len() <= dfs_path.len());
    }

    #[test]
    fn test_iterative_dfs_above_recursion_threshold() {
        // 30x30 = 900 vertices, past MAX_RECURSIVE_SEARCH
        let graph = generate_graph(30, 30, Some(5)).unwrap();
        assert!(graph.vertex_count() > MAX_RECURSIVE_SEARCH);
        let dfs_path = solve_maze(&graph, Solver::Dfs);
        let bfs_path = solve_maze(&graph, Solver::Bfs);
        assert_valid_path(&graph, &dfs_path);
        assert_valid_path(&graph, &bfs_path);
        // In a tree the unique path is the shortest one, so both solvers
        // visit the same cells
        assert_eq!(dfs_path, bfs_path);
    }
}
