use std::collections::HashSet;

use super::{MAX_RECURSIVE_SEARCH, SOURCE};
use crate::graph::PassageGraph;

/// Depth-first traversal from the entrance to the exit.
///
/// Small graphs use the recursive version; anything larger than
/// `MAX_RECURSIVE_SEARCH` vertices uses the explicit-stack version so the
/// call depth never tracks the maze size. Neighbors are tried in
/// adjacency-list order, so which of several dead ends gets explored
/// first depends on edge insertion order.
pub(super) fn solve_dfs(graph: &PassageGraph) -> Vec<usize> {
    let target = graph.vertex_count() - 1;
    let mut visited = HashSet::new();

    if graph.vertex_count() <= MAX_RECURSIVE_SEARCH {
        let mut traversal = Vec::new();
        dfs_recursive(graph, SOURCE, target, &mut traversal, &mut visited);
        // The path was appended while unwinding, exit first
        traversal.reverse();
        traversal
    } else {
        dfs_iterative(graph, target, &mut visited)
    }
}

// Appends the successful path in reverse order while the call stack unwinds.
fn dfs_recursive(
    graph: &PassageGraph,
    current: usize,
    target: usize,
    traversal: &mut Vec<usize>,
    visited: &mut HashSet<usize>,
) -> bool {
    if current == target {
        traversal.push(current);
        return true;
    }
    if !visited.insert(current) {
        return false;
    }
    for &neighbor in graph.adjacent(current) {
        if dfs_recursive(graph, neighbor, target, traversal, visited) {
            traversal.push(current);
            return true;
        }
    }
    false
}

// Explicit-stack equivalent: the stack holds the current path, and a cell
// with no unvisited neighbors is popped to retreat one step.
fn dfs_iterative(
    graph: &PassageGraph,
    target: usize,
    visited: &mut HashSet<usize>,
) -> Vec<usize> {
    let mut traversal = Vec::new();
    let mut current = SOURCE;

    while current != target {
        if visited.insert(current) {
            traversal.push(current);
        }

        match graph
            .adjacent(current)
            .iter()
            .find(|&&neighbor| !visited.contains(&neighbor))
        {
            Some(&next) => current = next,
            None => {
                // Dead end: step back in the traversal
                traversal.pop();
                match traversal.last() {
                    Some(&previous) => current = previous,
                    // Search space exhausted without reaching the exit
                    None => return Vec::new(),
                }
            }
        }
    }
    traversal.push(current);
    traversal
}
