use crate::error::MazeError;

/// Disjoint-set forest (union-find) with path compression and union by height.
///
/// The forest is stored as a single array: a negative entry at index `i`
/// marks `i` as a set root and encodes the tree height as `-(height)`,
/// while a non-negative entry is a parent pointer. All operations are
/// amortized near-O(1).
#[derive(Debug, Clone)]
pub struct DisjointSets {
    sets: Vec<isize>,
}

impl DisjointSets {
    /// Creates a new forest of `num_sets` singleton sets.
    pub fn new(num_sets: usize) -> Self {
        // Each tree starts as a root of height 1 (-1)
        DisjointSets {
            sets: vec![-1; num_sets],
        }
    }

    /// Returns the number of elements in the forest.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    fn check_bounds(&self, element: usize) -> Result<(), MazeError> {
        if element >= self.sets.len() {
            return Err(MazeError::IndexOutOfRange {
                index: element,
                count: self.sets.len(),
            });
        }
        Ok(())
    }

    /// Finds the representative element of the set `element` belongs to,
    /// re-pointing every node on the walk directly at the root.
    pub fn find(&mut self, element: usize) -> Result<usize, MazeError> {
        self.check_bounds(element)?;
        Ok(self.find_compress(element))
    }

    fn find_compress(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.sets[root] >= 0 {
            root = self.sets[root] as usize;
        }
        // Second pass: compress the walked path onto the root
        let mut current = element;
        while current != root {
            let parent = self.sets[current] as usize;
            self.sets[current] = root as isize;
            current = parent;
        }
        root
    }

    /// Joins together the sets containing `first` and `second`.
    ///
    /// Returns `false` without changing the forest when both elements
    /// already belong to the same set. Otherwise the shorter tree is
    /// attached under the taller tree's root; on a height tie one root is
    /// picked and its height incremented.
    pub fn union(&mut self, first: usize, second: usize) -> Result<bool, MazeError> {
        let first_root = self.find(first)?;
        let second_root = self.find(second)?;

        if first_root == second_root {
            return Ok(false);
        }

        // More negative means taller
        match self.sets[first_root].cmp(&self.sets[second_root]) {
            std::cmp::Ordering::Less => {
                self.sets[second_root] = first_root as isize;
            }
            std::cmp::Ordering::Greater => {
                self.sets[first_root] = second_root as isize;
            }
            std::cmp::Ordering::Equal => {
                self.sets[second_root] = first_root as isize;
                self.sets[first_root] -= 1;
            }
        }
        Ok(true)
    }

    /// Returns true if the given elements belong to the same set.
    pub fn same_set(&mut self, first: usize, second: usize) -> Result<bool, MazeError> {
        Ok(self.find(first)? == self.find(second)?)
    }
}
