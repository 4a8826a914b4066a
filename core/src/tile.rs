use serde::{Deserialize, Serialize};

use crate::Durability;

/// Contents of a single board cell.
///
/// Every variant has a fixed integer code (see [`Tile::code`]) so that
/// renderers working on plain integer boards agree with the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Ball,
    PaddleLeft,
    PaddleCenter,
    PaddleRight,
    /// Short-lived marker drawn while the ball is destroyed.
    Debris,
    /// Breakable block, never holds zero.
    Block(Durability),
}

impl Tile {
    pub const EMPTY_CODE: i32 = 0;
    pub const WALL_CODE: i32 = -1;
    pub const BALL_CODE: i32 = -2;
    pub const PADDLE_LEFT_CODE: i32 = -3;
    pub const PADDLE_CENTER_CODE: i32 = -4;
    pub const PADDLE_RIGHT_CODE: i32 = -5;
    pub const DEBRIS_CODE: i32 = -6;

    /// Block with `durability` hit points, or `Empty` when nothing is left.
    pub const fn block(durability: Durability) -> Self {
        if durability == 0 {
            Self::Empty
        } else {
            Self::Block(durability)
        }
    }

    pub const fn code(self) -> i32 {
        match self {
            Self::Empty => Self::EMPTY_CODE,
            Self::Wall => Self::WALL_CODE,
            Self::Ball => Self::BALL_CODE,
            Self::PaddleLeft => Self::PADDLE_LEFT_CODE,
            Self::PaddleCenter => Self::PADDLE_CENTER_CODE,
            Self::PaddleRight => Self::PADDLE_RIGHT_CODE,
            Self::Debris => Self::DEBRIS_CODE,
            Self::Block(durability) => durability as i32,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_block(self) -> bool {
        matches!(self, Self::Block(_))
    }

    pub const fn is_paddle(self) -> bool {
        matches!(
            self,
            Self::PaddleLeft | Self::PaddleCenter | Self::PaddleRight
        )
    }

    pub const fn durability(self) -> Durability {
        match self {
            Self::Block(durability) => durability,
            _ => 0,
        }
    }

    /// Tile left behind after one hit; only blocks change.
    pub const fn after_hit(self) -> Self {
        match self {
            Self::Block(durability) => Self::block(durability.saturating_sub(1)),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_board_contract() {
        assert_eq!(Tile::Empty.code(), 0);
        assert_eq!(Tile::Wall.code(), -1);
        assert_eq!(Tile::Ball.code(), -2);
        assert_eq!(Tile::PaddleLeft.code(), -3);
        assert_eq!(Tile::PaddleCenter.code(), -4);
        assert_eq!(Tile::PaddleRight.code(), -5);
        assert_eq!(Tile::Debris.code(), -6);
        assert_eq!(Tile::Block(7).code(), 7);
    }

    #[test]
    fn last_hit_empties_block() {
        assert_eq!(Tile::Block(2).after_hit(), Tile::Block(1));
        assert_eq!(Tile::Block(1).after_hit(), Tile::Empty);
        assert_eq!(Tile::Wall.after_hit(), Tile::Wall);
        assert_eq!(Tile::block(0), Tile::Empty);
    }
}
