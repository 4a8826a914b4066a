use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::*;

/// Seed used by the built-in scatter layout so every run deals the same board.
pub const DEFAULT_SCATTER_SEED: u64 = 0x6272_6963_6b66_616c;

/// Random but reproducible layout: roughly `density` of the cells get a block
/// whose durability is picked uniformly from `1..=difficulty`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterLayout {
    seed: u64,
    density: f64,
}

impl ScatterLayout {
    pub fn new(seed: u64, density: f64) -> Self {
        Self {
            seed,
            density: density.clamp(0.0, 1.0),
        }
    }
}

impl Default for ScatterLayout {
    fn default() -> Self {
        Self::new(DEFAULT_SCATTER_SEED, 0.5)
    }
}

impl BlockLayoutGenerator for ScatterLayout {
    fn place_blocks(self, area: Coord2, difficulty: Durability) -> BlockField {
        let difficulty = effective_difficulty(difficulty);
        let mut rng = Pcg32::seed_from_u64(self.seed);

        let mut durability: Array2<Durability> = Array2::default(area.to_nd_index());
        for cell in durability.iter_mut() {
            if rng.random_bool(self.density) {
                *cell = rng.random_range(1..=difficulty);
            }
        }

        // an empty board would be won before the first hit
        if durability.iter().all(|&d| d == 0) && !durability.is_empty() {
            log::warn!("Scatter layout came out empty, placing a single block");
            let (width, height) = area;
            durability[(width / 2, height / 2).to_nd_index()] = difficulty;
        }

        let field = BlockField::from_durability(durability);
        log::debug!(
            "Scatter layout (seed {:#x}) placed {} blocks worth {} hits",
            self.seed,
            field.block_count(),
            field.total()
        );
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let first = ScatterLayout::new(7, 0.5).place_blocks((12, 6), 3);
        let second = ScatterLayout::new(7, 0.5).place_blocks((12, 6), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn durability_stays_within_difficulty() {
        let field = ScatterLayout::default().place_blocks((20, 10), 4);
        let (width, height) = field.size();
        for x in 0..width {
            for y in 0..height {
                assert!(field.durability_at((x, y)) <= 4);
            }
        }
        assert!(field.block_count() > 0);
    }

    #[test]
    fn zero_density_still_places_one_block() {
        let field = ScatterLayout::new(1, 0.0).place_blocks((5, 3), 2);
        assert_eq!(field.block_count(), 1);
        assert_eq!(field.durability_at((2, 1)), 2);
        assert_eq!(field.total(), 2);
    }
}
