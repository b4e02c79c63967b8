/// The four cardinal directions a passage can leave a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the cell one step in this direction on a `rows` x `cols`
    /// grid, or `None` when the step would leave the grid.
    ///
    /// All arithmetic is done on the linear cell index with the `cols`
    /// stride: north/south are invalid on row underflow/overflow, east/west
    /// on column wraparound. The result is never the source cell itself.
    pub fn neighbor(self, cell: usize, rows: usize, cols: usize) -> Option<usize> {
        match self {
            Direction::North => cell.checked_sub(cols),
            Direction::South => {
                let south = cell + cols;
                (south < rows * cols).then_some(south)
            }
            Direction::East => ((cell + 1) % cols != 0).then_some(cell + 1),
            Direction::West => (cell % cols != 0).then(|| cell - 1),
        }
    }
}

/// Which of a cell's four sides are open passages rather than walls.
///
/// A derived view over the passage graph, handed to the rendering
/// collaborator to draw walls; never stored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpenSides {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl OpenSides {
    /// True when at least one side is open.
    pub fn any(&self) -> bool {
        self.north || self.east || self.south || self.west
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_in_center() {
        // 3x3 grid:  0 1 2
        //            3 4 5
        //            6 7 8
        assert_eq!(Direction::North.neighbor(4, 3, 3), Some(1));
        assert_eq!(Direction::East.neighbor(4, 3, 3), Some(5));
        assert_eq!(Direction::South.neighbor(4, 3, 3), Some(7));
        assert_eq!(Direction::West.neighbor(4, 3, 3), Some(3));
    }

    #[test]
    fn test_neighbor_at_grid_boundary() {
        // Top row has no north, bottom row no south
        assert_eq!(Direction::North.neighbor(1, 3, 3), None);
        assert_eq!(Direction::South.neighbor(7, 3, 3), None);
        // East/west must not wrap across rows
        assert_eq!(Direction::East.neighbor(2, 3, 3), None);
        assert_eq!(Direction::West.neighbor(3, 3, 3), None);
        // Corner cell
        assert_eq!(Direction::North.neighbor(0, 3, 3), None);
        assert_eq!(Direction::West.neighbor(0, 3, 3), None);
        assert_eq!(Direction::East.neighbor(0, 3, 3), Some(1));
        assert_eq!(Direction::South.neighbor(0, 3, 3), Some(3));
    }
}
