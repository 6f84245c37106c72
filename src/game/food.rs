use super::grid::{Bounds, Cell};
use rand::Rng;
use std::collections::HashSet;

/// Chooses where the next piece of food goes
pub(crate) trait FoodPlacer {
    /// Return a cell within `bounds` that is not in `occupied`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if every cell in `bounds` is occupied.
    fn place(&mut self, bounds: Bounds, occupied: &HashSet<Cell>) -> Cell;
}

/// Places food uniformly at random on a free cell by rejection sampling
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RandomFoodPlacer<R = rand::rngs::ThreadRng> {
    rng: R,
}

impl RandomFoodPlacer<rand::rngs::ThreadRng> {
    pub(crate) fn new() -> Self {
        RandomFoodPlacer::with_rng(rand::rng())
    }
}

impl Default for RandomFoodPlacer<rand::rngs::ThreadRng> {
    fn default() -> Self {
        RandomFoodPlacer::new()
    }
}

impl<R> RandomFoodPlacer<R> {
    pub(crate) fn with_rng(rng: R) -> Self {
        RandomFoodPlacer { rng }
    }
}

impl<R: Rng> FoodPlacer for RandomFoodPlacer<R> {
    /// # Panics
    ///
    /// Panics if there are no free cells in `bounds`.
    fn place(&mut self, bounds: Bounds, occupied: &HashSet<Cell>) -> Cell {
        let taken = occupied.iter().filter(|&&c| bounds.contains(c)).count();
        assert!(
            taken < bounds.cell_count(),
            "no free cell left on a {}x{} grid to place food on",
            bounds.width,
            bounds.height
        );
        loop {
            let cell = Cell::new(
                self.rng.random_range(0..bounds.width),
                self.rng.random_range(0..bounds.height),
            );
            if !occupied.contains(&cell) {
                return cell;
            }
        }
    }
}

/// Hands out food positions from a fixed list, skipping occupied entries and
/// falling back to the first free cell in row-major order once the list runs
/// out
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ScriptedPlacer {
    queue: std::collections::VecDeque<Cell>,
}

#[cfg(test)]
impl ScriptedPlacer {
    pub(crate) fn new<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        ScriptedPlacer {
            queue: cells.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl FoodPlacer for ScriptedPlacer {
    fn place(&mut self, bounds: Bounds, occupied: &HashSet<Cell>) -> Cell {
        while let Some(cell) = self.queue.pop_front() {
            if bounds.contains(cell) && !occupied.contains(&cell) {
                return cell;
            }
        }
        bounds
            .cells()
            .find(|c| !occupied.contains(c))
            .expect("scripted placer ran out of free cells")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn never_lands_on_occupied() {
        let mut placer = RandomFoodPlacer::with_rng(ChaCha12Rng::seed_from_u64(RNG_SEED));
        let bounds = Bounds::new(4, 4);
        let occupied = bounds
            .cells()
            .filter(|&c| c != Cell::new(3, 1))
            .collect::<HashSet<_>>();
        for _ in 0..20 {
            assert_eq!(placer.place(bounds, &occupied), Cell::new(3, 1));
        }
    }

    #[test]
    fn stays_in_bounds() {
        let mut placer = RandomFoodPlacer::with_rng(ChaCha12Rng::seed_from_u64(RNG_SEED));
        let bounds = Bounds::new(7, 3);
        for _ in 0..100 {
            assert!(bounds.contains(placer.place(bounds, &HashSet::new())));
        }
    }

    #[test]
    fn out_of_bounds_cells_do_not_count_as_taken() {
        let mut placer = RandomFoodPlacer::with_rng(ChaCha12Rng::seed_from_u64(RNG_SEED));
        let bounds = Bounds::new(1, 1);
        let occupied = HashSet::from([Cell::new(0, 1), Cell::new(0, 2)]);
        assert_eq!(placer.place(bounds, &occupied), Cell::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "no free cell left")]
    fn full_grid_fails_fast() {
        let mut placer = RandomFoodPlacer::with_rng(ChaCha12Rng::seed_from_u64(RNG_SEED));
        let bounds = Bounds::new(2, 2);
        let occupied = bounds.cells().collect::<HashSet<_>>();
        let _ = placer.place(bounds, &occupied);
    }

    #[test]
    fn scripted_skips_occupied() {
        let mut placer = ScriptedPlacer::new([Cell::new(0, 0), Cell::new(2, 2)]);
        let occupied = HashSet::from([Cell::new(0, 0)]);
        assert_eq!(placer.place(Bounds::new(5, 5), &occupied), Cell::new(2, 2));
        assert_eq!(placer.place(Bounds::new(5, 5), &occupied), Cell::new(1, 0));
    }
}
