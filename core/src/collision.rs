use crate::types::apply_delta;
use crate::*;

/// Cells around the ball that light up when it falls past the paddle.
const DEBRIS_OFFSETS: [(Step, Step); 5] = [(0, 0), (0, -1), (0, 1), (-1, 1), (1, 1)];

/// How a single refresh treated the ball.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Resolution {
    Resting,
    Moved,
    Held,
    Won,
    /// Fell past the paddle and was destroyed.
    Missed,
    /// Ended up in the paddle lane above something that is not a paddle.
    Crashed,
}

impl Resolution {
    /// Whether the ball marker should be drawn after this step.
    pub(crate) const fn keeps_ball(self) -> bool {
        !matches!(self, Self::Missed)
    }
}

impl From<Resolution> for TickOutcome {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Resting => Self::Resting,
            Resolution::Moved => Self::Moved,
            Resolution::Held => Self::Held,
            Resolution::Won => Self::Won,
            Resolution::Missed | Resolution::Crashed => Self::Lost,
        }
    }
}

impl SimulationEngine {
    /// Bounces the ball off whatever it is about to touch, then moves it one
    /// step along its angle. The ball's own cell must already be cleared.
    pub(crate) fn resolve_flight(&mut self, sink: &mut impl RenderSink) -> Resolution {
        let hit_block = if self.ball.position.1 == self.config.rest_row() {
            if let Some(ended) = self.bounce_off_paddle(sink) {
                return ended;
            }
            false
        } else {
            self.bounce_off_obstacles()
        };

        if hit_block && self.total_blocks == 0 {
            self.status = GameStatus::Victory;
            log::debug!("Last block cleared, final score {}", self.score);
            return Resolution::Won;
        }

        self.advance_ball()
    }

    /// Returns the terminal resolution when the paddle is not there to catch the ball.
    fn bounce_off_paddle(&mut self, sink: &mut impl RenderSink) -> Option<Resolution> {
        let (x, y) = self.ball.position;
        let below = (x, y + 1);

        match self.grid[below] {
            Tile::PaddleLeft => {
                self.ball.x_direction = -1;
                self.ball.angle = BallAngle::Normal;
            }
            Tile::PaddleCenter => {
                self.ball.angle = BallAngle::None;
            }
            Tile::PaddleRight => {
                self.ball.x_direction = 1;
                self.ball.angle = BallAngle::Normal;
            }
            Tile::Empty => {
                self.play_destruction(sink);
                self.status = GameStatus::Dead;
                log::debug!("Ball missed the paddle at x={}", x);
                return Some(Resolution::Missed);
            }
            other => {
                log::warn!("Ball in the paddle lane above {:?} at {:?}", other, below);
                self.status = GameStatus::Dead;
                return Some(Resolution::Crashed);
            }
        }

        // only ever reached while falling, so this is the vertical bounce
        self.ball.y_direction = -1;

        let x_direction = self.ball.x_direction;
        if x_direction != 0 && self.probe((x_direction, 0)).1 == Tile::Wall {
            self.ball.x_direction = -x_direction;
        }
        None
    }

    /// Resolves walls and blocks next to the ball, returning whether a block was hit.
    fn bounce_off_obstacles(&mut self) -> bool {
        let (x_direction, y_direction) = (self.ball.x_direction, self.ball.y_direction);
        let side = self.probe((x_direction, 0));
        let vertical = self.probe((0, y_direction));

        let mut hit_block = false;
        if !side.1.is_empty() || !vertical.1.is_empty() {
            let (flip_x, hit_side) = self.strike(side);
            let (flip_y, hit_vertical) = self.strike(vertical);
            if flip_x {
                self.ball.x_direction = -x_direction;
            }
            if flip_y {
                self.ball.y_direction = -y_direction;
            }
            hit_block = hit_side || hit_vertical;
        } else {
            // a diagonal wall is never next to the ball here, the border keeps
            // one of the axis neighbours solid whenever the corner is a wall
            let diagonal = self.probe((x_direction, y_direction));
            if let (Some(coords), Tile::Block(_)) = diagonal {
                self.hit_block(coords);
                self.ball.x_direction = -x_direction;
                self.ball.y_direction = -y_direction;
                hit_block = true;
            }
        }
        hit_block
    }

    /// Returns `(reflects, was_block)` for an axis neighbour.
    fn strike(&mut self, (coords, tile): (Option<Coord2>, Tile)) -> (bool, bool) {
        match (coords, tile) {
            (_, Tile::Wall) => (true, false),
            (Some(coords), Tile::Block(_)) => {
                self.hit_block(coords);
                (true, true)
            }
            _ => (false, false),
        }
    }

    fn hit_block(&mut self, coords: Coord2) {
        let tile = self.grid[coords];
        self.grid[coords] = tile.after_hit();
        self.score = self.score.saturating_add(SCORE_PER_HIT);
        self.total_blocks = self.total_blocks.saturating_sub(1);
        log::trace!(
            "Hit block at {:?}, {} hits left on the board",
            coords,
            self.total_blocks
        );
    }

    fn advance_ball(&mut self) -> Resolution {
        let ball = self.ball;
        let (move_x, move_y) = ball.angle.advancing_axes(ball.time);
        let delta = (
            if move_x { ball.x_direction } else { 0 },
            if move_y { ball.y_direction } else { 0 },
        );
        self.ball.time = ball.time.wrapping_add(1);

        match self.grid.offset(ball.position, delta) {
            Some(target) if self.grid[target].is_empty() => {
                self.ball.position = target;
                Resolution::Moved
            }
            target => {
                // never step into a solid cell, turn back along the blocked axes instead
                log::trace!(
                    "Ball at {:?} held, {:?} is occupied",
                    ball.position,
                    target
                );
                if delta.0 != 0 {
                    self.ball.x_direction = -ball.x_direction;
                }
                if delta.1 != 0 {
                    self.ball.y_direction = -ball.y_direction;
                }
                Resolution::Held
            }
        }
    }

    /// Tile one step away from the ball; off-board cells read as walls.
    fn probe(&self, delta: (Step, Step)) -> (Option<Coord2>, Tile) {
        let position = self.ball.position;
        let coords = self.grid.offset(position, delta);
        debug_assert!(
            coords.is_some(),
            "ball at {:?} probed {:?} past the board edge",
            position,
            delta
        );
        match coords {
            Some(coords) => (Some(coords), self.grid[coords]),
            None => (None, Tile::Wall),
        }
    }

    fn play_destruction(&mut self, sink: &mut impl RenderSink) {
        let position = self.ball.position;

        for coords in self.debris_cells(position) {
            self.grid[coords] = Tile::Debris;
        }
        sink.render(&self.grid, self.score);

        for coords in self.debris_cells(position) {
            self.grid[coords] = Tile::Empty;
        }
        sink.render(&self.grid, self.score);
    }

    fn debris_cells(&self, position: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        let grid_size = self.grid.size();
        DEBRIS_OFFSETS
            .into_iter()
            .filter_map(move |delta| apply_delta(position, delta, grid_size))
    }
}
