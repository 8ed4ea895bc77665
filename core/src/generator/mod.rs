use crate::*;
pub use random::*;

mod random;

/// Source of hole placements. The only place randomness enters the
/// engine; callers inject a generator so board construction stays
/// deterministic under test.
pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> HoleLayout;
}
