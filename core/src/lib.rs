#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Side,
    pub holes: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Side, holes: CellCount) -> Self {
        Self { size, holes }
    }

    /// Validated constructor: the grid must be non-empty and at least one
    /// cell must stay safe, so `holes == size * size` is rejected.
    pub fn new(size: Side, holes: CellCount) -> Result<Self> {
        if size < 1 || holes >= total_cells(size) {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self::new_unchecked(size, holes))
    }

    pub const fn total_cells(&self) -> CellCount {
        total_cells(self.size)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.holes
    }

    pub(crate) fn nd_dim(&self) -> (usize, usize) {
        (self.size as usize, self.size as usize)
    }
}

/// Hole placement plus the adjacency table derived from it.
///
/// Both are fixed at construction; nothing here changes during play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoleLayout {
    holes: Array2<bool>,
    adjacency: Array2<u8>,
    hole_count: CellCount,
}

impl HoleLayout {
    /// Builds a layout from a square hole mask, counting the holes and
    /// computing every cell's adjacency exactly once.
    pub fn from_hole_mask(holes: Array2<bool>) -> Self {
        let (rows, cols) = holes.dim();
        debug_assert_eq!(rows, cols, "hole mask must be square");
        let size: Side = rows.try_into().expect("side length fits the side type");

        let hole_count = holes
            .iter()
            .filter(|&&is_hole| is_hole)
            .count()
            .try_into()
            .unwrap();

        let mut adjacency: Array2<u8> = Array2::default(holes.raw_dim());
        for index in 0..total_cells(size) {
            let count = neighbors_of(index, size)
                .filter(|&neighbor| holes[neighbor.to_nd_index(size)])
                .count();
            adjacency[index.to_nd_index(size)] = count.try_into().unwrap();
        }

        Self {
            holes,
            adjacency,
            hole_count,
        }
    }

    /// Deterministic constructor from explicit hole addresses.
    pub fn from_hole_indices(size: Side, hole_indices: &[CellIndex]) -> Result<Self> {
        let config = GameConfig::new(size, hole_indices.len() as CellCount)?;

        let mut mask: Array2<bool> = Array2::default(config.nd_dim());
        for &index in hole_indices {
            if index >= config.total_cells() {
                return Err(GameError::IndexOutOfRange);
            }
            mask[index.to_nd_index(size)] = true;
        }

        Ok(Self::from_hole_mask(mask))
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            holes: self.hole_count,
        }
    }

    pub fn size(&self) -> Side {
        self.holes.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.holes.len().try_into().unwrap()
    }

    pub fn hole_count(&self) -> CellCount {
        self.hole_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.hole_count
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.total_cells() {
            Ok(index)
        } else {
            Err(GameError::IndexOutOfRange)
        }
    }

    pub fn contains_hole(&self, index: CellIndex) -> bool {
        self[index]
    }

    pub fn adjacent_holes(&self, index: CellIndex) -> u8 {
        self.adjacency[index.to_nd_index(self.size())]
    }

    /// Render-ready projection of the whole board: adjacency counts with
    /// `-1` marking the holes themselves.
    pub fn adjacency_matrix(&self) -> Array2<i8> {
        let size = self.size();
        let mut matrix: Array2<i8> = Array2::default(self.holes.raw_dim());
        for index in 0..self.total_cells() {
            let nd_index = index.to_nd_index(size);
            matrix[nd_index] = if self.holes[nd_index] {
                -1
            } else {
                self.adjacency[nd_index] as i8
            };
        }
        matrix
    }

    pub fn hole_indices(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..self.total_cells()).filter(|&index| self[index])
    }
}

impl Index<CellIndex> for HoleLayout {
    type Output = bool;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.holes[index.to_nd_index(self.size())]
    }
}
