#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord) -> Self {
        Self { size }
    }

    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self::new_unchecked(size))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

/// Square board of lit/unlit cells. `true` is lit, `false` is unlit.
///
/// The only mutation path is [`Board::click`], which applies the full flip
/// rule (cell plus in-bounds orthogonal neighbors). Dimensions are fixed at
/// construction; a restart swaps in a whole new board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<bool>,
}

impl Board {
    /// All-unlit board, which is also the solved position.
    pub fn empty(config: GameConfig) -> Self {
        let size = usize::from(config.size);
        Self {
            cells: Array2::default((size, size)),
        }
    }

    /// Replays `clicks` on an empty board through the flip rule.
    ///
    /// Every board built this way is solvable: replaying the same sequence
    /// again cancels it back to all-unlit.
    pub fn from_clicks(config: GameConfig, clicks: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(config);
        for &coords in clicks {
            board.click(coords)?;
        }
        Ok(board)
    }

    /// Builds a board with exactly the given cells lit.
    pub fn from_lit_cells(config: GameConfig, lit: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(config);
        for &coords in lit {
            board.validate_coords(coords)?;
            board.cells[coords.to_nd_index()] = true;
        }
        Ok(board)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&lit| lit)
            .count()
            .try_into()
            .unwrap()
    }

    /// True iff every cell is unlit.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    pub fn is_lit(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// Flips the cell at `coords` and its in-bounds orthogonal neighbors.
    ///
    /// Out-of-bounds `coords` fail with [`GameError::OutOfBounds`] and leave
    /// the board untouched. Out-of-bounds *neighbors* are skipped silently:
    /// a corner click flips 3 cells, an edge click 4, an interior click 5.
    pub fn click(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.apply_click(coords);
        Ok(())
    }

    /// Flip rule without the bounds check. `coords` must be in bounds.
    pub(crate) fn apply_click(&mut self, coords: Coord2) {
        self.flip(coords);
        for neighbor_coords in self.cells.iter_neighbors(coords) {
            self.flip(neighbor_coords);
        }
    }

    fn flip(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        *cell = !*cell;
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: Coord) -> GameConfig {
        GameConfig::new(size).unwrap()
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(GameConfig::new(0), Err(GameError::InvalidSize));
    }

    #[test]
    fn empty_board_is_clear() {
        let board = Board::empty(config(5));
        assert!(board.is_clear());
        assert_eq!(board.lit_count(), 0);
        assert_eq!(board.total_cells(), 25);
    }

    #[test]
    fn corner_click_flips_three_cells() {
        let mut board = Board::empty(config(5));
        board.click((0, 0)).unwrap();

        assert_eq!(board.lit_count(), 3);
        assert!(board[(0, 0)]);
        assert!(board[(0, 1)]);
        assert!(board[(1, 0)]);
    }

    #[test]
    fn edge_click_flips_four_cells() {
        let mut board = Board::empty(config(5));
        board.click((0, 2)).unwrap();

        assert_eq!(board.lit_count(), 4);
        assert!(board[(0, 2)]);
        assert!(board[(0, 1)]);
        assert!(board[(0, 3)]);
        assert!(board[(1, 2)]);
    }

    #[test]
    fn interior_click_flips_five_cells() {
        let mut board = Board::empty(config(5));
        board.click((2, 2)).unwrap();

        assert_eq!(board.lit_count(), 5);
        assert!(board[(2, 2)]);
        assert!(board[(1, 2)]);
        assert!(board[(3, 2)]);
        assert!(board[(2, 1)]);
        assert!(board[(2, 3)]);
    }

    #[test]
    fn click_is_its_own_inverse() {
        let reference = Board::from_lit_cells(config(4), &[(0, 3), (1, 1), (2, 0)]).unwrap();

        for row in 0..4 {
            for col in 0..4 {
                let mut board = reference.clone();
                board.click((row, col)).unwrap();
                board.click((row, col)).unwrap();
                assert_eq!(board, reference);
            }
        }
    }

    #[test]
    fn clicks_commute() {
        let reference = Board::from_lit_cells(config(4), &[(3, 3), (0, 1)]).unwrap();

        let mut forward = reference.clone();
        forward.click((1, 2)).unwrap();
        forward.click((3, 0)).unwrap();

        let mut backward = reference.clone();
        backward.click((3, 0)).unwrap();
        backward.click((1, 2)).unwrap();

        assert_eq!(forward, backward);
    }

    #[test]
    fn out_of_bounds_click_leaves_board_unchanged() {
        let reference = Board::from_lit_cells(config(3), &[(1, 1)]).unwrap();
        let mut board = reference.clone();

        assert_eq!(board.click((3, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.click((0, 3)), Err(GameError::OutOfBounds));
        assert_eq!(board, reference);
    }

    #[test]
    fn replaying_click_sequence_cancels_it() {
        let clicks = [(0, 0), (2, 1), (1, 1), (0, 0)];
        let mut board = Board::from_clicks(config(3), &clicks).unwrap();

        for &coords in &clicks {
            board.click(coords).unwrap();
        }
        assert!(board.is_clear());
    }

    #[test]
    fn double_click_same_cell_cancels() {
        let board = Board::from_clicks(config(5), &[(0, 0), (0, 0)]).unwrap();
        assert!(board.is_clear());
    }
}
