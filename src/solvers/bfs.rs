use std::collections::{HashMap, HashSet, VecDeque};

use super::SOURCE;
use crate::graph::PassageGraph;

/// Breadth-first traversal from the entrance to the exit.
///
/// Returns the shortest path in edge count, which in a spanning tree is
/// also the only path.
pub(super) fn solve_bfs(graph: &PassageGraph) -> Vec<usize> {
    let target = graph.vertex_count() - 1;
    let predecessors = bfs_predecessors(graph, target);
    if target != SOURCE && !predecessors.contains_key(&target) {
        return Vec::new();
    }

    // Walk back from the exit and flip into entrance-first order
    let mut path = vec![target];
    let mut current = target;
    while let Some(&previous) = predecessors.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Maps every discovered vertex to the vertex it was discovered from.
/// Stops as soon as the target turns up instead of draining the queue.
fn bfs_predecessors(graph: &PassageGraph, target: usize) -> HashMap<usize, usize> {
    let mut queue = VecDeque::from([SOURCE]);
    let mut visited = HashSet::from([SOURCE]);
    let mut predecessors = HashMap::new();

    while let Some(current) = queue.pop_front() {
        for &neighbor in graph.adjacent(current) {
            if visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                if neighbor == target {
                    return predecessors;
                }
                queue.push_back(neighbor);
            }
        }
    }
    predecessors
}
