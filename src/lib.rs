//! Tic-Tac-Tix: tic-tac-toe on an n×n×n cube.
//!
//! Two players take turns marking cells; the first to complete a line of
//! `n` marks along a row, column, or main diagonal of any layer, row, or
//! column slice wins. The center cell is reserved and never playable.
//!
//! ## Modules
//!
//! - [`constants`] - Default dimension, limits, and glyphs
//! - [`board`] - Cells, coordinates, the 3D board, and 2D slice win checks
//! - [`game`] - Turn order, move application, and win/tie detection
//! - [`opponent`] - Random computer opponent with an injectable random source
//! - [`render`] - Text rendering of the board and status banner
//! - [`history`] - Newline-delimited winners file
//! - [`console`] - Interactive human-vs-computer session
//!
//! ## Example
//!
//! ```
//! use tictactix::board::Coord;
//! use tictactix::game::{Game, Winner};
//! use tictactix::opponent::computer_move;
//!
//! let mut game = Game::new(3, true).unwrap();
//! game.play(Coord::new(1, 1, 1)).unwrap();
//!
//! let mut rng = fastrand::Rng::with_seed(1);
//! let reply = computer_move(&mut game, &mut rng).unwrap();
//! println!("Computer replied at {reply}");
//!
//! assert!(!game.is_game_over());
//! assert_eq!(game.winner(), Winner::Undecided);
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod game;
pub mod history;
pub mod opponent;
pub mod render;
