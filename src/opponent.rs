//! Random computer opponent.
//!
//! The opponent picks a uniformly random legal cell. It first rolls
//! independent coordinates per axis and retries on rejection, which is cheap
//! while the board is mostly empty. Expected retries grow as
//! `max_cells / empty_cells`, so after [`MAX_RANDOM_TRIES`] failed rolls it
//! scans the remaining empty cells and picks one of those instead.

use tracing::debug;

use crate::board::Coord;
use crate::constants::MAX_RANDOM_TRIES;
use crate::game::Game;

/// Source of random coordinates for the computer opponent.
pub trait CoordSource {
    /// A uniformly random integer in `[1, n]`. `n` is always at least 1.
    fn roll(&mut self, n: usize) -> usize;
}

impl CoordSource for fastrand::Rng {
    fn roll(&mut self, n: usize) -> usize {
        self.usize(1..=n)
    }
}

/// Choose a move for the current player, play it, and return where it went.
///
/// Returns `None` only when the board has no empty cell left.
pub fn computer_move<R: CoordSource + ?Sized>(game: &mut Game, rng: &mut R) -> Option<Coord> {
    let n = game.dimension();

    for _ in 0..MAX_RANDOM_TRIES {
        let coord = Coord::new(rng.roll(n), rng.roll(n), rng.roll(n));
        if game.play(coord).is_ok() {
            return Some(coord);
        }
    }

    let empty = game.board().empty_coords();
    debug!(
        tries = MAX_RANDOM_TRIES,
        empty = empty.len(),
        "random rolls exhausted, scanning empty cells"
    );
    if empty.is_empty() {
        return None;
    }
    let coord = empty[rng.roll(empty.len()) - 1];
    game.play(coord).ok()?;
    Some(coord)
}
