use super::*;
use ndarray::Array2;

/// Places holes uniformly at random without replacement, reproducible for
/// a given seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> HoleLayout {
        use rand::prelude::*;

        let mut holes: Array2<bool> = Array2::default(config.nd_dim());
        let mut free_cells = config.total_cells();
        let mut placed = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let cells = holes.as_slice_mut().expect("layout should be standard");
            while placed < config.holes {
                if free_cells == 0 {
                    break;
                }
                let mut place: CellCount = rng.random_range(0..free_cells);
                for (i, cell) in cells.iter_mut().enumerate() {
                    let i = i as CellCount;
                    if *cell {
                        place += 1;
                    }
                    if i == place {
                        *cell = true;
                        placed += 1;
                        free_cells -= 1;
                        break;
                    }
                }
            }
        }

        // double check hole count
        let count = holes.iter().filter(|&&cell| cell).count() as CellCount;
        if count != config.holes {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                count,
                config.holes
            );
        }

        HoleLayout::from_hole_mask(holes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_hole_count() {
        for seed in 0..32 {
            let config = GameConfig::new(8, 12).unwrap();
            let layout = RandomLayoutGenerator::new(seed).generate(config);
            assert_eq!(layout.hole_count(), 12, "seed {seed}");
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_layout() {
        let config = GameConfig::new(10, 25).unwrap();
        let first = RandomLayoutGenerator::new(42).generate(config);
        let second = RandomLayoutGenerator::new(42).generate(config);
        assert_eq!(first, second);
    }

    #[test]
    fn near_full_board_still_places_all_holes() {
        let config = GameConfig::new(3, 8).unwrap();
        let layout = RandomLayoutGenerator::new(3).generate(config);
        assert_eq!(layout.hole_count(), 8);
        assert_eq!(layout.safe_cell_count(), 1);
    }
}
