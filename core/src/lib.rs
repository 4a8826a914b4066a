#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use render::*;
pub use tile::*;
pub use types::*;

mod collision;
mod engine;
mod error;
mod generator;
mod grid;
mod render;
mod tile;
mod types;

/// Narrowest board that still fits both side walls and a full paddle.
pub const MIN_WIDTH: Coord = 5;

/// Shortest board that leaves at least one row of blocks above the paddle lanes.
pub const MIN_HEIGHT: Coord = 6;

/// Points awarded for every durability point knocked off a block.
pub const SCORE_PER_HIT: Score = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size }
    }

    pub fn new((size_x, size_y): Coord2) -> Self {
        let clamped = (size_x.max(MIN_WIDTH), size_y.max(MIN_HEIGHT));
        if clamped != (size_x, size_y) {
            log::warn!(
                "Board {}x{} is too small, using {}x{}",
                size_x,
                size_y,
                clamped.0,
                clamped.1
            );
        }
        Self::new_unchecked(clamped)
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    /// Interior rectangle handed to block layout generators.
    pub const fn play_area(&self) -> Coord2 {
        (self.size.0 - 2, self.size.1 - 5)
    }

    /// Bottom row, where the paddle lives.
    pub const fn paddle_row(&self) -> Coord {
        self.size.1 - 1
    }

    /// Row directly above the paddle, where a resting ball sits.
    pub const fn rest_row(&self) -> Coord {
        self.size.1 - 2
    }

    pub const fn center_x(&self) -> Coord {
        self.size.0 / 2
    }

    /// Rightmost legal paddle centre; the leftmost is always 1.
    pub const fn max_paddle(&self) -> Coord {
        self.size.0 - 2
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    NoChange,
    Changed,
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game already ended, only the paddle was redrawn.
    NoChange,
    /// Ball rides on the paddle.
    Resting,
    Moved,
    /// Ball bounced but its next cell was occupied, so it kept its place.
    Held,
    Lost,
    Won,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            Resting => true,
            Moved => true,
            Held => true,
            Lost => true,
            Won => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}
