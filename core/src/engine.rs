use alloc::collections::BTreeSet;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Ongoing,
    Lost,
    Won,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Ongoing
    }
}

/// What one `click` did: the state it left the game in, the safe cells it
/// newly opened, and the hole that ended the game if one was hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealResult {
    pub outcome: GameState,
    pub opened: BTreeSet<CellIndex>,
    pub hit_hole: Option<CellIndex>,
}

/// One game session: a fixed [`HoleLayout`] plus the open-cell state that
/// play mutates. Built fresh for every game, discarded on "play again".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    layout: HoleLayout,
    opened: Array2<bool>,
    opened_count: Saturating<CellCount>,
    state: GameState,
    hit_hole: Option<CellIndex>,
}

impl Game {
    pub fn new(layout: HoleLayout) -> Self {
        let dim = layout.config().nd_dim();
        Self {
            layout,
            opened: Array2::default(dim),
            opened_count: Saturating(0),
            state: Default::default(),
            hit_hole: None,
        }
    }

    /// Builds a board with `holes` cells drawn uniformly without
    /// replacement, deterministic for a given `seed`.
    pub fn generate(size: Side, holes: CellCount, seed: u64) -> Result<Self> {
        let config = GameConfig::new(size, holes)?;
        let layout = RandomLayoutGenerator::new(seed).generate(config);
        Ok(Self::new(layout))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Side {
        self.layout.size()
    }

    pub fn total_holes(&self) -> CellCount {
        self.layout.hole_count()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.layout.safe_cell_count()
    }

    pub fn layout(&self) -> &HoleLayout {
        &self.layout
    }

    /// Cells opened so far; the caller drives its progress display from
    /// this against [`Game::safe_cell_count`].
    pub fn open_count(&self) -> CellCount {
        self.opened_count.0
    }

    pub fn hit_hole(&self) -> Option<CellIndex> {
        self.hit_hole
    }

    pub fn cell_view(&self, index: CellIndex) -> Result<CellView> {
        let index = self.layout.validate_index(index)?;
        let is_hole = self.layout.contains_hole(index);
        Ok(CellView {
            is_hole,
            adjacent_holes: self.layout.adjacent_holes(index),
            is_open: self.is_open(index),
            exposed: is_hole && self.state == GameState::Lost,
        })
    }

    /// Opens a cell. Clicking a hole loses the game; clicking a blank cell
    /// opens its whole connected blank region plus the numbered border.
    ///
    /// Clicks on an already-open cell or after the game has finished are
    /// no-ops that report the current state and an empty opened set.
    pub fn click(&mut self, index: CellIndex) -> Result<RevealResult> {
        let index = self.layout.validate_index(index)?;

        if self.state.is_finished() || self.is_open(index) {
            return Ok(self.snapshot());
        }

        if self.layout.contains_hole(index) {
            self.state = GameState::Lost;
            self.hit_hole = Some(index);
            return Ok(self.snapshot());
        }

        let region = if self.layout.adjacent_holes(index) == 0 {
            self.blank_region(index)
        } else {
            BTreeSet::from([index])
        };

        let size = self.size();
        let mut opened = BTreeSet::new();
        for &cell in &region {
            let nd_index = cell.to_nd_index(size);
            if !self.opened[nd_index] {
                self.opened[nd_index] = true;
                self.opened_count += 1;
                opened.insert(cell);
            }
        }

        if self.opened_count == Saturating(self.layout.safe_cell_count()) {
            self.state = GameState::Won;
        }

        Ok(RevealResult {
            outcome: self.state,
            opened,
            hit_hole: None,
        })
    }

    /// Frontier expansion from a blank cell: each pass folds the frontier's
    /// full neighbor set into the region, and only newly discovered blank
    /// cells form the next frontier. Runs at most k+1 passes for k blank
    /// cells, and holes never enter the region because no neighbor of a
    /// blank cell is a hole.
    fn blank_region(&self, start: CellIndex) -> BTreeSet<CellIndex> {
        let size = self.size();
        let mut region = BTreeSet::from([start]);
        let mut frontier = BTreeSet::from([start]);

        while !frontier.is_empty() {
            let mut next_frontier = BTreeSet::new();
            for &cell in &frontier {
                for neighbor in neighbors_of(cell, size) {
                    if self.layout.adjacent_holes(neighbor) == 0 && !region.contains(&neighbor) {
                        next_frontier.insert(neighbor);
                    }
                    region.insert(neighbor);
                }
            }
            frontier = next_frontier;
        }

        region
    }

    fn is_open(&self, index: CellIndex) -> bool {
        self.opened[index.to_nd_index(self.size())]
    }

    fn snapshot(&self) -> RevealResult {
        RevealResult {
            outcome: self.state,
            opened: BTreeSet::new(),
            hit_hole: self.hit_hole,
        }
    }
}
