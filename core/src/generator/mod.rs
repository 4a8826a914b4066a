use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
pub use pattern::*;
pub use scatter::*;

mod pattern;
mod scatter;

/// Produces the breakable blocks for the interior of a board.
pub trait BlockLayoutGenerator {
    fn place_blocks(self, area: Coord2, difficulty: Durability) -> BlockField;
}

/// Block durabilities for a play area, zero meaning "no block", plus their sum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockField {
    durability: Array2<Durability>,
    total: u32,
}

impl BlockField {
    pub fn from_durability(durability: Array2<Durability>) -> Self {
        let total = durability.iter().map(|&d| u32::from(d)).sum();
        Self { durability, total }
    }

    /// Builds a field by asking `place` for the durability of every cell.
    pub fn from_fn(area: Coord2, mut place: impl FnMut(Coord2) -> Durability) -> Self {
        let durability =
            Array2::from_shape_fn(area.to_nd_index(), |(x, y)| place((x as Coord, y as Coord)));
        Self::from_durability(durability)
    }

    pub fn size(&self) -> Coord2 {
        let (width, height) = self.durability.dim();
        (width as Coord, height as Coord)
    }

    pub fn durability_at(&self, coords: Coord2) -> Durability {
        self.durability[coords.to_nd_index()]
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn block_count(&self) -> usize {
        self.durability.iter().filter(|&&d| d > 0).count()
    }
}

/// The built-in layouts, addressed by the ids 1 to 5 used in menus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutKind {
    Rows,
    Checkerboard,
    Pyramid,
    Stripes,
    Scatter,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 5] = [
        Self::Rows,
        Self::Checkerboard,
        Self::Pyramid,
        Self::Stripes,
        Self::Scatter,
    ];

    pub const fn from_id(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Self::Rows),
            2 => Ok(Self::Checkerboard),
            3 => Ok(Self::Pyramid),
            4 => Ok(Self::Stripes),
            5 => Ok(Self::Scatter),
            _ => Err(GameError::UnknownLayout(id)),
        }
    }

    pub const fn id(self) -> u8 {
        match self {
            Self::Rows => 1,
            Self::Checkerboard => 2,
            Self::Pyramid => 3,
            Self::Stripes => 4,
            Self::Scatter => 5,
        }
    }
}

impl BlockLayoutGenerator for LayoutKind {
    fn place_blocks(self, area: Coord2, difficulty: Durability) -> BlockField {
        match self {
            Self::Rows => PatternLayout::Rows.place_blocks(area, difficulty),
            Self::Checkerboard => PatternLayout::Checkerboard.place_blocks(area, difficulty),
            Self::Pyramid => PatternLayout::Pyramid.place_blocks(area, difficulty),
            Self::Stripes => PatternLayout::Stripes.place_blocks(area, difficulty),
            Self::Scatter => ScatterLayout::default().place_blocks(area, difficulty),
        }
    }
}

/// Difficulty zero would place no blocks at all, so treat it as the easiest level.
fn effective_difficulty(difficulty: Durability) -> Durability {
    if difficulty == 0 {
        log::warn!("Difficulty 0 requested, using 1");
        1
    } else {
        difficulty
    }
}
