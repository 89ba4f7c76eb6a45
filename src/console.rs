//! Interactive console game: a human against the random computer opponent.
//!
//! The session reads one move per line as `layer row column` (1-based,
//! separated by spaces or commas). Malformed input and rejected moves are
//! reported and the prompt is repeated. `quit` abandons the game.
//!
//! ## Example
//!
//! ```ignore
//! use tictactix::console::Session;
//! let game = tictactix::game::Game::new(3, true)?;
//! let mut session = Session::new(game, std::io::stdin().lock(), std::io::stdout(), fastrand::Rng::new());
//! session.run()?;
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::warn;

use crate::board::{Coord, Player};
use crate::game::{Game, Winner};
use crate::history::WinnerLog;
use crate::opponent::{CoordSource, computer_move};
use crate::render::{PlayerNames, render};

/// The human always plays as player one.
pub const HUMAN: Player = Player::One;

/// Parse a `layer row column` line into a coordinate.
///
/// Only the shape is checked here. Range and occupancy are left to [`Game::play`].
pub fn parse_coord(line: &str) -> Result<Coord> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() != 3 {
        bail!("expected three numbers: layer row column");
    }
    let mut values = [0usize; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("\"{part}\" is not a positive whole number"))?;
    }
    Ok(Coord::new(values[0], values[1], values[2]))
}

/// One human-vs-computer game over arbitrary input and output streams.
pub struct Session<R, W, C> {
    game: Game,
    input: R,
    output: W,
    rng: C,
    names: PlayerNames,
    log: Option<WinnerLog>,
}

impl<R: BufRead, W: Write, C: CoordSource> Session<R, W, C> {
    pub fn new(game: Game, input: R, output: W, rng: C) -> Self {
        Self {
            game,
            input,
            output,
            rng,
            names: PlayerNames::default(),
            log: None,
        }
    }

    pub fn with_names(mut self, names: PlayerNames) -> Self {
        self.names = names;
        self
    }

    /// Record the human's name here after a win.
    pub fn with_log(mut self, log: WinnerLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until the game ends, the human quits, or input runs out.
    ///
    /// Returns the final result; `Winner::Undecided` means the game was abandoned.
    pub fn run(&mut self) -> Result<Winner> {
        while !self.game.is_game_over() {
            writeln!(self.output, "{}", render(&self.game, &self.names))?;

            if self.game.current_player() == HUMAN {
                let Some(coord) = self.read_move()? else {
                    writeln!(self.output, "Game abandoned.")?;
                    return Ok(Winner::Undecided);
                };
                if let Err(e) = self.game.play(coord) {
                    writeln!(self.output, "\nInvalid move at {coord}: {e}")?;
                    writeln!(self.output, "Please try again.")?;
                }
            } else {
                match computer_move(&mut self.game, &mut self.rng) {
                    Some(coord) => writeln!(
                        self.output,
                        "{} plays {coord}",
                        self.names.name(HUMAN.other())
                    )?,
                    // A non-terminal game always has an empty cell
                    None => bail!("no legal move left for the computer"),
                }
            }
        }

        writeln!(self.output, "{}", render(&self.game, &self.names))?;
        let winner = self.game.winner();
        if winner == Winner::Player(HUMAN) {
            self.record_win();
        }
        Ok(winner)
    }

    /// Prompt until a well-formed coordinate is entered. `None` on quit or EOF.
    fn read_move(&mut self) -> Result<Option<Coord>> {
        loop {
            write!(self.output, "Enter layer row column: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }
            match parse_coord(line) {
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => writeln!(self.output, "\nInvalid input: {e:#}\n")?,
            }
        }
    }

    fn record_win(&mut self) {
        let Some(log) = &self.log else {
            return;
        };
        let name = self.names.name(HUMAN).to_string();
        if let Err(e) = log.record(&name) {
            warn!(error = %e, "could not save winner");
            let _ = writeln!(self.output, "Warning: could not save winner: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always rolls the same value.
    struct Fixed(usize);

    impl CoordSource for Fixed {
        fn roll(&mut self, n: usize) -> usize {
            self.0.min(n)
        }
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("1 2 3").unwrap(), Coord::new(1, 2, 3));
        assert_eq!(parse_coord(" 3,1 , 2 ").unwrap(), Coord::new(3, 1, 2));
        assert!(parse_coord("1 2").is_err());
        assert!(parse_coord("1 2 3 4").is_err());
        assert!(parse_coord("a b c").is_err());
        assert!(parse_coord("-1 2 3").is_err());
    }

    #[test]
    fn test_quit_abandons() {
        let game = Game::new(3, true).unwrap();
        let mut out = Vec::new();
        let winner = Session::new(game, "quit\n".as_bytes(), &mut out, Fixed(3))
            .run()
            .unwrap();
        assert_eq!(winner, Winner::Undecided);
        assert!(String::from_utf8(out).unwrap().contains("Game abandoned."));
    }

    #[test]
    fn test_human_wins_first_layer_row() {
        // The computer takes (3,3,3), then (1,2,2) from its fallback scan
        let game = Game::new(3, true).unwrap();
        let input = "1 1 1\n\
                     oops\n\
                     2 2 2\n\
                     1 1 2\n\
                     1 1 3\n";
        let mut out = Vec::new();
        let mut session = Session::new(game, input.as_bytes(), &mut out, Fixed(3))
            .with_names(PlayerNames::new("Ada", "Computer"));
        let winner = session.run().unwrap();
        assert_eq!(winner, Winner::Player(HUMAN));
        assert_eq!(session.game().winner(), Winner::Player(HUMAN));
        drop(session);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid input"));
        assert!(text.contains("Invalid move at (2, 2, 2): cell is reserved"));
        assert!(text.contains("GAME OVER: ADA WINS"));
    }

    #[test]
    fn test_win_is_recorded() {
        let path = std::env::temp_dir().join(format!(
            "tictactix-console-{}.txt",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let game = Game::new(3, true).unwrap();
        let input = "1 1 1\n1 1 2\n1 1 3\n";
        let mut out = Vec::new();
        let winner = Session::new(game, input.as_bytes(), &mut out, Fixed(3))
            .with_names(PlayerNames::new("Ada", "Computer"))
            .with_log(WinnerLog::new(&path))
            .run()
            .unwrap();
        assert_eq!(winner, Winner::Player(HUMAN));
        assert_eq!(WinnerLog::new(&path).load().unwrap(), vec!["Ada"]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_computer_first_on_single_cell_board() {
        let game = Game::new(1, false).unwrap();
        let mut out = Vec::new();
        let winner = Session::new(game, "".as_bytes(), &mut out, Fixed(1))
            .run()
            .unwrap();
        assert_eq!(winner, Winner::Tie);
    }
}
