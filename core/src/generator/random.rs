use alloc::vec::Vec;

use super::*;

/// Scrambles an empty board with a random number of random clicks, each one
/// applied through the normal flip rule.
///
/// Clicks may repeat and partially cancel each other, so the result can be
/// solvable in fewer moves than were drawn. That is accepted: the guarantee
/// is solvability, not a minimum move count.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomScrambleGenerator {
    seed: u64,
    min_clicks: u16,
    max_clicks: u16,
}

impl RandomScrambleGenerator {
    /// Default click-count range, inclusive on both ends.
    pub const DEFAULT_CLICK_RANGE: (u16, u16) = (5, 15);

    pub fn new(seed: u64) -> Self {
        let (min_clicks, max_clicks) = Self::DEFAULT_CLICK_RANGE;
        Self {
            seed,
            min_clicks,
            max_clicks,
        }
    }

    pub fn with_click_range(seed: u64, min_clicks: u16, max_clicks: u16) -> Self {
        let (min_clicks, max_clicks) = if min_clicks <= max_clicks {
            (min_clicks, max_clicks)
        } else {
            log::warn!(
                "Reversed click range {}..={}, swapping ends",
                min_clicks,
                max_clicks
            );
            (max_clicks, min_clicks)
        };
        Self {
            seed,
            min_clicks,
            max_clicks,
        }
    }

    /// The exact click sequence `generate` will apply for `config`.
    ///
    /// Deterministic given the seed. Replaying the returned sequence on the
    /// generated board cancels it back to all-unlit.
    pub fn click_sequence(&self, config: GameConfig) -> Vec<Coord2> {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let click_count = rng.random_range(self.min_clicks..=self.max_clicks);

        (0..click_count)
            .map(|_| {
                let row = rng.random_range(0..config.size);
                let col = rng.random_range(0..config.size);
                (row, col)
            })
            .collect()
    }
}

impl BoardGenerator for RandomScrambleGenerator {
    fn generate(self, config: GameConfig) -> Board {
        let clicks = self.click_sequence(config);
        let mut board = Board::empty(config);
        for coords in &clicks {
            board.apply_click(*coords);
        }
        log::debug!(
            "scrambled {0}x{0} board with {1} clicks, {2} cells lit",
            config.size,
            clicks.len(),
            board.lit_count()
        );
        board
    }
}
