//! Game state and rules for 3D tic-tac-toe.
//!
//! This module owns the turn order and terminal-state bookkeeping:
//! - Move validation and application (all-or-nothing)
//! - Win detection over the three families of axis-aligned slices
//! - Tie detection once every playable cell is filled
//!
//! The engine does not refuse moves after the game has ended. Callers are
//! expected to stop once [`Game::is_game_over`] returns true.

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Axis, Board, Coord, Grid, MoveError, Player, has_2d_won};
use crate::constants::MAX_DIMENSION;

/// Result of a finished game, or `Undecided` while play continues.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Winner {
    #[default]
    Undecided,
    Tie,
    Player(Player),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board dimension must be between 1 and {max} (got {0})", max = MAX_DIMENSION)]
    InvalidDimension(usize),
}

/// A 3D tic-tac-toe game.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    /// Non-empty cells, the reserved center included
    filled_cells: usize,
    current_player: Player,
    winner: Winner,
}

fn check_dimension(dimension: usize) -> Result<(), GameError> {
    if (1..=MAX_DIMENSION).contains(&dimension) {
        Ok(())
    } else {
        Err(GameError::InvalidDimension(dimension))
    }
}

impl Game {
    /// Start a game on an empty n×n×n board.
    ///
    /// Player one moves first when `player_one_first` is set, otherwise player two.
    pub fn new(dimension: usize, player_one_first: bool) -> Result<Self, GameError> {
        check_dimension(dimension)?;
        let first = if player_one_first {
            Player::One
        } else {
            Player::Two
        };
        info!(dimension, ?first, "new game");
        Ok(Self {
            board: Board::new(dimension),
            filled_cells: 1,
            current_player: first,
            winner: Winner::Undecided,
        })
    }

    /// Resume from an arbitrary board with `to_move` on turn.
    ///
    /// Useful for setting up positions without alternating turns.
    pub fn from_board(board: Board, to_move: Player) -> Result<Self, GameError> {
        check_dimension(board.size())?;
        Ok(Self {
            filled_cells: board.filled(),
            board,
            current_player: to_move,
            winner: Winner::Undecided,
        })
    }

    /// Play the current player's mark at a 1-based coordinate.
    ///
    /// On success the turn passes to the other player. On failure nothing changes.
    pub fn play(&mut self, coord: Coord) -> Result<(), MoveError> {
        match self.board.place(coord, self.current_player) {
            Ok(()) => {
                debug!(player = ?self.current_player, %coord, "move");
                self.filled_cells += 1;
                self.current_player = self.current_player.other();
                Ok(())
            }
            Err(e) => {
                debug!(player = ?self.current_player, %coord, error = %e, "move rejected");
                Err(e)
            }
        }
    }

    /// Decide whether the game has ended, recording the result.
    ///
    /// A win is credited to the player who just moved. Otherwise a full
    /// board is a tie. Call once after every move, before [`Game::winner`].
    pub fn is_game_over(&mut self) -> bool {
        if self.has_won() {
            self.winner = Winner::Player(self.current_player.other());
        } else if self.filled_cells >= self.max_cells() {
            self.winner = Winner::Tie;
        } else {
            return false;
        }
        info!(winner = ?self.winner, "game over");
        true
    }

    /// True if any layer, row, or column slice contains a complete line.
    ///
    /// Lines that cross all three axes (the cube's space diagonals) and
    /// diagonals of tilted planes are not checked.
    pub fn has_won(&self) -> bool {
        let n = self.board.size();
        Axis::ALL.iter().any(|&axis| {
            (0..n).any(|i| {
                let slice = self.board.slice(axis, i);
                let won = has_2d_won(&slice);
                if won {
                    debug!(axis = ?slice.axis(), index = slice.index(), size = slice.size(), "line found");
                }
                won
            })
        })
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    pub fn dimension(&self) -> usize {
        self.board.size()
    }

    pub fn filled_cells(&self) -> usize {
        self.filled_cells
    }

    pub fn max_cells(&self) -> usize {
        let n = self.board.size();
        n * n * n
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}
