use crate::*;
pub use random::*;

mod random;

/// Produces a new starting board for the given config.
///
/// Implementations must only emit solvable boards. The one shipped here
/// guarantees that by construction: it scrambles via the flip rule itself,
/// and every click sequence is its own undo.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}
