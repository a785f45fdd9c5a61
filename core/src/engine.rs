use serde::{Deserialize, Serialize};

use crate::*;

/// Derived game state. Never stored: always recomputed from the live board,
/// so there is no lock-out after a win and no stale flag to keep in sync.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Solved,
}

impl GameState {
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// Owns one [`Board`] and provides the only legal mutation path.
///
/// The presentation layer calls [`toggle`](Self::toggle) once per click,
/// then reads back [`is_solved`](Self::is_solved) and
/// [`cell_at`](Self::cell_at) to render. The engine pushes nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleEngine {
    board: Board,
}

impl PuzzleEngine {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Builds an engine around a freshly scrambled board.
    pub fn generate(config: GameConfig, generator: impl BoardGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    /// Replaces the board wholesale with a new scramble of the same config.
    pub fn restart(&mut self, generator: impl BoardGenerator) {
        let config = self.board.game_config();
        self.board = generator.generate(config);
        log::debug!("restarted {0}x{0} board", config.size);
    }

    pub fn state(&self) -> GameState {
        if self.is_solved() {
            GameState::Solved
        } else {
            GameState::Playing
        }
    }

    /// True iff every cell is unlit. Pure query, recomputed on every call.
    pub fn is_solved(&self) -> bool {
        self.board.is_clear()
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn lit_count(&self) -> CellCount {
        self.board.lit_count()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<bool> {
        self.board.is_lit(coords)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Flips the cell at `coords` and its in-bounds orthogonal neighbors.
    ///
    /// Out-of-bounds coordinates are a caller error and are rejected with
    /// [`GameError::OutOfBounds`] without touching the board. Toggling is
    /// legal in every state, including after a win.
    pub fn toggle(&mut self, coords: Coord2) -> Result<()> {
        self.board.click(coords)?;
        log::debug!(
            "toggled at {:?}, {} cells lit",
            coords,
            self.board.lit_count()
        );
        Ok(())
    }
}
