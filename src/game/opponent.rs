//! Uniform-random opponent move selection.
//!
//! The computer has no lookahead and no positional bias: it picks one of
//! the currently empty cells uniformly at random. The randomness source is
//! injected through [`Chooser`] so tests can substitute a deterministic one
//! and assert exactly which cell gets played.

use super::types::Board;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Uniform choice over a finite set.
pub trait Chooser {
    /// Picks an index in `0..len` uniformly, or `None` when `len` is zero.
    fn choose(&mut self, len: usize) -> Option<usize>;
}

/// [`Chooser`] backed by a seedable RNG.
#[derive(Debug)]
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    /// Creates a chooser seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a chooser with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl Chooser for RandomChooser {
    fn choose(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.random_range(0..len))
        }
    }
}

/// Picks an empty cell uniformly at random.
///
/// Returns `None` when the board is already full; selection only, the
/// caller places the mark.
pub fn pick_open_cell(board: &Board, chooser: &mut impl Chooser) -> Option<(usize, usize)> {
    let open = board.empty_cells();
    let index = chooser.choose(open.len())?;
    let (row, col) = open[index];
    debug!(row, col, candidates = open.len(), "computer chose cell");
    Some((row, col))
}
