use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Receives board frames the engine wants shown immediately, outside the
/// caller's regular draw after each command.
pub trait RenderSink {
    fn render(&mut self, grid: &Grid, score: Score);
}

/// Discards every frame.
impl RenderSink for () {
    fn render(&mut self, _grid: &Grid, _score: Score) {}
}

/// Owned snapshot of a rendered frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub grid: Grid,
    pub score: Score,
}

/// Records frames for later playback.
impl RenderSink for Vec<Frame> {
    fn render(&mut self, grid: &Grid, score: Score) {
        self.push(Frame {
            grid: grid.clone(),
            score,
        });
    }
}
