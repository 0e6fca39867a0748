use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Coord, Grid};

const MAX_RANDOM_DRAWS: u32 = 64;

/// Picks a free cell for the next piece of food.
#[derive(Clone, Copy, Debug)]
pub struct FoodPlacer {
    max_draws: u32,
}

impl Default for FoodPlacer {
    fn default() -> Self {
        FoodPlacer {
            max_draws: MAX_RANDOM_DRAWS,
        }
    }
}

impl FoodPlacer {
    /// Returns a cell that is on the grid and not in `occupied`, or `None`
    /// when every cell is occupied. Draws random cells up to a fixed number
    /// of times, then scans the remaining free cells instead.
    pub fn place(
        &self,
        rng: &mut impl Rng,
        grid: &Grid,
        occupied: &HashSet<Coord>,
    ) -> Option<Coord> {
        for _ in 0..self.max_draws {
            let candidate = Coord {
                cell: rng.gen_range(0..grid.count()),
                row: rng.gen_range(0..grid.count()),
            };
            if !occupied.contains(&candidate) {
                return Some(candidate);
            }
        }
        let free: Vec<Coord> = grid.coords().filter(|c| !occupied.contains(c)).collect();
        if free.is_empty() {
            None
        } else {
            Some(free[rng.gen_range(0..free.len())])
        }
    }
}
