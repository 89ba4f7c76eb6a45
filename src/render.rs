//! Text rendering of a game for the console.
//!
//! Only the public accessors of [`Game`] are used; nothing here affects play.

use crate::board::Player;
use crate::game::{Game, Winner};

/// Display names for the two players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerNames {
    pub one: String,
    pub two: String,
}

impl PlayerNames {
    pub fn new(one: impl Into<String>, two: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            two: two.into(),
        }
    }

    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("Player", "Computer")
    }
}

/// The one-line banner shown above the board.
pub fn status_header(game: &Game, names: &PlayerNames) -> String {
    let text = match game.winner() {
        Winner::Player(p) => format!("GAME OVER: {} WINS", names.name(p).to_uppercase()),
        Winner::Tie => "GAME OVER: TIE".to_string(),
        // Only the reserved center is filled
        Winner::Undecided if game.filled_cells() <= 1 => "TIC-TAC-TIX".to_string(),
        Winner::Undecided => format!(
            "{}'S MOVE ({})",
            names.name(game.current_player()).to_uppercase(),
            game.current_player().glyph()
        ),
    };
    format!("====== {text} ======")
}

/// Banner followed by the board dump.
pub fn render(game: &Game, names: &PlayerNames) -> String {
    format!("\n{}\n{}", status_header(game, names), game.board())
}
