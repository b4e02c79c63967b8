use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::error::MazeError;
use crate::graph::PassageGraph;
use crate::maze::cell::Direction;
use crate::sets::DisjointSets;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carves a random spanning tree over a `rows` x `cols` grid and returns
/// the resulting passage graph.
///
/// A disjoint-set forest tracks which cells are already connected.
/// Candidate cells are drawn from a shuffled working list, reshuffled
/// after each full pass so every cell is revisited before any repeats; for
/// each candidate the four directions are tried in a fresh random order,
/// and the first in-bounds neighbor in a different component gets a union
/// plus a graph edge. Every successful union reduces the component count
/// by one, so the loop terminates once `edge_count == rows*cols - 1`.
///
/// Only grid-adjacent pairs are ever connected, which is the contract
/// [`PassageGraph::open_sides`] relies on.
pub fn generate_graph(
    rows: usize,
    cols: usize,
    seed: Option<u64>,
) -> Result<PassageGraph, MazeError> {
    let cell_count = rows * cols;
    let mut graph = PassageGraph::new(cell_count);
    if cell_count <= 1 {
        // A single cell is already a spanning tree
        return Ok(graph);
    }

    let mut sets = DisjointSets::new(cell_count);
    let mut rng = get_rng(seed);

    let mut candidates: Vec<usize> = (0..cell_count).collect();
    candidates.shuffle(&mut rng);
    let mut cursor = 0;

    let mut directions = Direction::ALL;
    while graph.edge_count() < cell_count - 1 {
        if cursor == candidates.len() {
            candidates.shuffle(&mut rng);
            cursor = 0;
        }
        let cell = candidates[cursor];
        cursor += 1;

        directions.shuffle(&mut rng);
        for direction in directions {
            let Some(neighbor) = direction.neighbor(cell, rows, cols) else {
                continue;
            };
            if !sets.same_set(cell, neighbor)? {
                sets.union(cell, neighbor)?;
                graph.add_edge(cell, neighbor)?;
                tracing::trace!("[generate] opened passage {cell} <-> {neighbor}");
                break;
            }
        }
    }

    tracing::debug!(
        "[generate] spanning tree complete: {} cells, {} passages",
        cell_count,
        graph.edge_count()
    );
    Ok(graph)
}
