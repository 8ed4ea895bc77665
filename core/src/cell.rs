use serde::{Deserialize, Serialize};

/// Read-only per-cell projection handed to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub is_hole: bool,
    /// Holes among the up-to-8 neighbors, in `0..=8`.
    pub adjacent_holes: u8,
    pub is_open: bool,
    /// Set on every hole once the game is lost, so renderers can show the
    /// full layout. Opening semantics apply to safe cells only; a hole is
    /// never `is_open`.
    pub exposed: bool,
}

impl CellView {
    pub const fn is_blank(self) -> bool {
        !self.is_hole && self.adjacent_holes == 0
    }
}
