use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::apply_delta;
use crate::*;

/// Tile store of a board, indexed by `(x, y)` with `y` growing downwards.
///
/// Construction carves the permanent border: the top row and both side
/// columns are walls. The bottom row is left open so the paddle can reach
/// the corners.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    tiles: Array2<Tile>,
}

impl Grid {
    pub fn new(size: Coord2) -> Self {
        let (width, height) = size;
        let mut tiles: Array2<Tile> = Array2::default(size.to_nd_index());

        for x in 0..width {
            tiles[(x, 0).to_nd_index()] = Tile::Wall;
        }
        for y in 1..height.saturating_sub(1) {
            tiles[(0, y).to_nd_index()] = Tile::Wall;
            tiles[(width - 1, y).to_nd_index()] = Tile::Wall;
        }

        Self { tiles }
    }

    pub fn size(&self) -> Coord2 {
        let (width, height) = self.tiles.dim();
        // dimensions always come from a Coord2
        (width as Coord, height as Coord)
    }

    pub fn get(&self, coords: Coord2) -> Option<Tile> {
        self.tiles.get(coords.to_nd_index()).copied()
    }

    /// Coordinates one step away from `coords`, if they are still on the board.
    pub fn offset(&self, coords: Coord2, delta: (Step, Step)) -> Option<Coord2> {
        apply_delta(coords, delta, self.size())
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Sum of the durability of every block on the board.
    pub fn block_durability(&self) -> u32 {
        self.tiles
            .iter()
            .map(|tile| u32::from(tile.durability()))
            .sum()
    }

    /// Integer view of the board using [`Tile::code`].
    pub fn to_codes(&self) -> Array2<i32> {
        self.tiles.map(|tile| tile.code())
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.tiles[coords.to_nd_index()]
    }
}
