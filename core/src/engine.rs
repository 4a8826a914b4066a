use serde::{Deserialize, Serialize};

use crate::collision::Resolution;
use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Alive,
    Dead,
    Victory,
}

impl GameStatus {
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Dead | Self::Victory)
    }
}

/// Trajectory steepness of a moving ball.
///
/// `Normal` is a plain diagonal, `None` is straight up and down. `Low` and
/// `High` advance one axis only on every other tick, giving shallow and
/// steep slopes without leaving the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallAngle {
    #[default]
    None,
    Low,
    Normal,
    High,
}

impl BallAngle {
    /// Which axes `(x, y)` advance on a tick at flight time `time`.
    pub const fn advancing_axes(self, time: u32) -> (bool, bool) {
        let odd_tick = time % 2 == 1;
        match self {
            Self::None => (false, true),
            Self::Low => (true, odd_tick),
            Self::Normal => (true, true),
            Self::High => (odd_tick, true),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Coord2,
    pub x_direction: Step,
    pub y_direction: Step,
    pub angle: BallAngle,
    /// `false` while the ball rides on the paddle.
    pub in_motion: bool,
    /// Ticks since launch.
    pub time: u32,
}

impl Ball {
    pub const fn resting(position: Coord2) -> Self {
        Self {
            position,
            x_direction: 0,
            y_direction: 0,
            angle: BallAngle::None,
            in_motion: false,
            time: 0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaddleMove {
    Left,
    Right,
}

impl PaddleMove {
    pub const fn delta(self) -> Step {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationEngine {
    pub(crate) config: BoardConfig,
    pub(crate) grid: Grid,
    pub(crate) paddle: Coord,
    pub(crate) ball: Ball,
    pub(crate) total_blocks: u32,
    pub(crate) score: Score,
    pub(crate) status: GameStatus,
}

impl SimulationEngine {
    /// Walled board without blocks, ball resting on a centred paddle.
    pub fn new(config: BoardConfig) -> Self {
        let mut engine = Self {
            config,
            grid: Grid::new(config.size),
            paddle: config.center_x(),
            ball: Ball::resting((config.center_x(), config.rest_row())),
            total_blocks: 0,
            score: 0,
            status: GameStatus::Alive,
        };
        engine.refresh(&mut ());
        engine
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tile_at(&self, coords: Coord2) -> Option<Tile> {
        self.grid.get(coords)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Hits still needed to clear the board.
    pub fn total_blocks(&self) -> u32 {
        self.total_blocks
    }

    /// X coordinate of the paddle centre.
    pub fn paddle(&self) -> Coord {
        self.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Places one of the built-in layouts. Unknown ids leave the board as it is.
    pub fn build_board(&mut self, layout_id: u8, difficulty: Durability) -> ActionOutcome {
        let kind = match LayoutKind::from_id(layout_id) {
            Ok(kind) => kind,
            Err(err) => {
                log::debug!("{}, no blocks placed", err);
                return ActionOutcome::NoChange;
            }
        };

        match self.build_board_with(kind, difficulty) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("{:?} layout rejected: {}", kind, err);
                ActionOutcome::NoChange
            }
        }
    }

    /// Copies the blocks produced by `generator` into the play area and
    /// replaces the block total with theirs.
    pub fn build_board_with(
        &mut self,
        generator: impl BlockLayoutGenerator,
        difficulty: Durability,
    ) -> Result<ActionOutcome> {
        let area = self.config.play_area();
        let field = generator.place_blocks(area, difficulty);
        if field.size() != area {
            return Err(GameError::InvalidBoardShape);
        }

        let mut total = field.total();
        let (area_x, area_y) = area;
        for y in 0..area_y {
            for x in 0..area_x {
                let coords = (x + 1, y + 1);
                let durability = field.durability_at((x, y));
                if self.grid[coords] == Tile::Ball {
                    log::debug!("Skipping block under the ball at {:?}", coords);
                    total -= u32::from(durability);
                    continue;
                }
                self.grid[coords] = Tile::block(durability);
            }
        }

        self.total_blocks = total;
        log::debug!("Board built, {} hits to clear", total);
        Ok(ActionOutcome::Changed)
    }

    pub fn move_paddle(&mut self, direction: PaddleMove) -> Result<TickOutcome> {
        self.move_paddle_with(direction, &mut ())
    }

    /// Shifts the paddle one cell and refreshes the board, which also advances
    /// a ball in flight.
    pub fn move_paddle_with(
        &mut self,
        direction: PaddleMove,
        sink: &mut impl RenderSink,
    ) -> Result<TickOutcome> {
        let target = self
            .paddle
            .checked_add_signed(direction.delta())
            .filter(|&x| (1..=self.config.max_paddle()).contains(&x))
            .ok_or(GameError::PaddleOutOfRange)?;

        self.paddle = target;
        Ok(self.refresh(sink))
    }

    /// Sends a resting ball upwards. Does nothing while the ball is in flight.
    pub fn launch(&mut self) -> ActionOutcome {
        if self.ball.in_motion {
            return ActionOutcome::NoChange;
        }

        self.clear_ball();
        let position = (self.paddle, self.config.rest_row() - 1);
        self.ball = Ball {
            position,
            x_direction: 0,
            y_direction: -1,
            angle: BallAngle::None,
            in_motion: true,
            time: 0,
        };
        self.grid[position] = Tile::Ball;
        log::debug!("Ball launched from {:?}", position);
        ActionOutcome::Changed
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.tick_with(&mut ())
    }

    /// Advances the simulation one step. Frames the engine shows on its own,
    /// such as the ball being destroyed, go to `sink`.
    pub fn tick_with(&mut self, sink: &mut impl RenderSink) -> TickOutcome {
        self.refresh(sink)
    }

    /// Puts ball and paddle back to their starting places and revives the game.
    /// Blocks and score are kept.
    pub fn reset(&mut self) {
        self.clear_ball();
        self.clear_paddle();

        let center = self.config.center_x();
        self.status = GameStatus::Alive;
        self.paddle = center;
        self.ball = Ball::resting((center, self.config.rest_row()));
        self.refresh(&mut ());
        log::debug!("Board reset, score {}", self.score);
    }

    fn refresh(&mut self, sink: &mut impl RenderSink) -> TickOutcome {
        let outcome = if self.status.is_finished() {
            TickOutcome::NoChange
        } else {
            self.clear_ball();

            let outcome = if self.ball.in_motion {
                self.resolve_flight(sink)
            } else {
                self.ball.position = (self.paddle, self.config.rest_row());
                Resolution::Resting
            };

            if outcome.keeps_ball() {
                self.grid[self.ball.position] = Tile::Ball;
            }
            outcome.into()
        };

        self.draw_paddle();
        outcome
    }

    fn clear_ball(&mut self) {
        let position = self.ball.position;
        if self.grid[position] == Tile::Ball {
            self.grid[position] = Tile::Empty;
        }
    }

    fn clear_paddle(&mut self) {
        let row = self.config.paddle_row();
        for x in self.paddle - 1..=self.paddle + 1 {
            self.grid[(x, row)] = Tile::Empty;
        }
    }

    fn draw_paddle(&mut self) {
        let row = self.config.paddle_row();
        let x = self.paddle;

        if x > 1 {
            self.grid[(x - 2, row)] = Tile::Empty;
        }
        self.grid[(x - 1, row)] = Tile::PaddleLeft;
        self.grid[(x, row)] = Tile::PaddleCenter;
        self.grid[(x + 1, row)] = Tile::PaddleRight;
        if x < self.config.max_paddle() {
            self.grid[(x + 2, row)] = Tile::Empty;
        }
    }
}
