use super::*;

/// Fixed geometric block arrangements.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PatternLayout {
    /// Every cell holds a block.
    Rows,
    /// Blocks on cells where `x + y` is even.
    Checkerboard,
    /// Triangle hanging from the top row, widening by one cell per row on each side.
    Pyramid,
    /// Every other row, with stripes nearer the top one point tougher each.
    Stripes,
}

impl BlockLayoutGenerator for PatternLayout {
    fn place_blocks(self, area: Coord2, difficulty: Durability) -> BlockField {
        use PatternLayout::*;

        let difficulty = effective_difficulty(difficulty);
        let (width, height) = area;
        let center = i16::from(width / 2);

        let field = BlockField::from_fn(area, |(x, y)| match self {
            Rows => difficulty,
            Checkerboard if (u16::from(x) + u16::from(y)) % 2 == 0 => difficulty,
            Checkerboard => 0,
            Pyramid if (i16::from(x) - center).abs() <= i16::from(y) => difficulty,
            Pyramid => 0,
            Stripes if y % 2 == 0 => {
                let stripes_below = (height.saturating_sub(1) - y) / 2;
                difficulty.saturating_add(Durability::from(stripes_below))
            }
            Stripes => 0,
        });

        log::debug!(
            "{:?} layout placed {} blocks worth {} hits",
            self,
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
    fn rows_fill_everything() {
        let field = PatternLayout::Rows.place_blocks((4, 3), 2);
        assert_eq!(field.block_count(), 12);
        assert_eq!(field.total(), 24);
    }

    #[test]
    fn checkerboard_alternates() {
        let field = PatternLayout::Checkerboard.place_blocks((4, 2), 1);
        assert_eq!(field.durability_at((0, 0)), 1);
        assert_eq!(field.durability_at((1, 0)), 0);
        assert_eq!(field.durability_at((1, 1)), 1);
        assert_eq!(field.total(), 4);
    }

    #[test]
    fn pyramid_widens_downwards() {
        let field = PatternLayout::Pyramid.place_blocks((5, 3), 1);
        assert_eq!(field.durability_at((2, 0)), 1);
        assert_eq!(field.durability_at((1, 0)), 0);
        assert_eq!(field.durability_at((1, 1)), 1);
        assert_eq!(field.durability_at((0, 2)), 1);
        assert_eq!(field.total(), 1 + 3 + 5);
    }

    #[test]
    fn stripes_get_tougher_towards_the_top() {
        let field = PatternLayout::Stripes.place_blocks((2, 5), 1);
        assert_eq!(field.durability_at((0, 4)), 1);
        assert_eq!(field.durability_at((0, 3)), 0);
        assert_eq!(field.durability_at((0, 2)), 2);
        assert_eq!(field.durability_at((1, 0)), 3);
    }

    #[test]
    fn zero_difficulty_still_places_blocks() {
        let field = PatternLayout::Rows.place_blocks((2, 2), 0);
        assert_eq!(field.total(), 4);
    }
}
