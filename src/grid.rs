#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub cell: u16,
    pub row: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delta {
    pub cell: i32,
    pub row: i32,
}

impl From<Direction> for Delta {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Delta { cell: -1, row: 0 },
            Direction::Up => Delta { cell: 0, row: -1 },
            Direction::Right => Delta { cell: 1, row: 0 },
            Direction::Down => Delta { cell: 0, row: 1 },
        }
    }
}

/// A square board of `count` x `count` cells, indexed from the top left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    count: u16,
}

impl Grid {
    pub fn new(count: u16) -> Self {
        assert!(count > 0, "grid must have at least one cell per side");
        Grid { count }
    }

    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn area(&self) -> usize {
        usize::from(self.count) * usize::from(self.count)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.cell < self.count && coord.row < self.count
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let count = self.count;
        (0..count).flat_map(move |row| (0..count).map(move |cell| Coord { cell, row }))
    }

    /// One step in `direction`, re-entering from the opposite edge when the
    /// step would leave the grid.
    pub fn wrapped_step(&self, from: Coord, direction: Direction) -> Coord {
        let delta = Delta::from(direction);
        let count = i32::from(self.count);
        Coord {
            cell: (i32::from(from.cell) + delta.cell).rem_euclid(count) as u16,
            row: (i32::from(from.row) + delta.row).rem_euclid(count) as u16,
        }
    }

    /// One step in `direction`, or `None` when the step would leave the grid.
    pub fn bounded_step(&self, from: Coord, direction: Direction) -> Option<Coord> {
        let delta = Delta::from(direction);
        let count = i32::from(self.count);
        let cell = i32::from(from.cell) + delta.cell;
        let row = i32::from(from.row) + delta.row;
        if (0..count).contains(&cell) && (0..count).contains(&row) {
            Some(Coord {
                cell: cell as u16,
                row: row as u16,
            })
        } else {
            None
        }
    }
}
