//! Human player that types moves at a terminal.
//!
//! `HumanPlayer` reads one line at a time from any `BufRead` and writes
//! prompts and feedback to any `Write`, so tests can script a whole game.
//! A line is either a coordinate move (`e2e4`, `e2-e4`, `e7e8q`) or one of
//! the commands below. Illegal or malformed moves are reported and the
//! prompt repeats; the board is never touched by a rejected move.
//!
//! ```text
//! moves [square]   list legal moves, optionally only those from one square
//! undo             take back your last move and the computer's reply
//! board            print the board again
//! fen              print the position as FEN
//! help             show this list
//! quit             resign the game
//! ```

use std::io::{self, BufRead, Write};

use crate::agent::player::{GameResult, Player};
use crate::game::Game;
use crate::game_repr::{Move, Rules, Square};

const HELP: &str = "\
Enter moves as from-square and to-square, e.g. e2e4 (e7e8q promotes).
Commands:
  moves [square]  list legal moves
  undo            take back the last move pair
  board           show the board
  fen             show the position as FEN
  help            show this help
  quit            resign";

pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl HumanPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player reading standard input and writing standard output
    pub fn stdio(name: String) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), name)
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: String) -> Self {
        Self { input, output, name }
    }

    /// Consumes the player, returning whatever was written to it
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts until a legal move or a resignation arrives
    fn read_move(&mut self, game: &mut Game) -> io::Result<Option<Move>> {
        loop {
            write!(self.output, "{}> ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            let mut words = line.split_whitespace();

            match words.next() {
                None => continue,
                Some("quit" | "resign") => return Ok(None),
                Some("help") => writeln!(self.output, "{}", HELP)?,
                Some("board") => write!(self.output, "{}", game.render())?,
                Some("fen") => writeln!(self.output, "{}", game.position().to_fen())?,
                Some("moves") => self.list_moves(game, words.next())?,
                Some("undo") => {
                    if game.undo_move_pair() {
                        log::debug!("{} took back a move pair", self.name);
                        write!(self.output, "{}", game.render())?;
                    } else {
                        writeln!(self.output, "Nothing to undo")?;
                    }
                }
                Some(_) => match game.find_move(line) {
                    Ok(mv) => return Ok(Some(mv)),
                    Err(err) => writeln!(self.output, "{}", err)?,
                },
            }
        }
    }

    fn list_moves(&mut self, game: &Game, square: Option<&str>) -> io::Result<()> {
        let moves = match square {
            Some(text) => match text.parse::<Square>() {
                Ok(from) => game.position().legal_moves_from(from),
                Err(err) => return writeln!(self.output, "{}", err),
            },
            None => game.legal_moves(),
        };

        if moves.is_empty() {
            return writeln!(self.output, "No legal moves");
        }
        let listed: Vec<String> = moves.iter().map(|mv| game.position().san(*mv)).collect();
        writeln!(self.output, "{}", listed.join(" "))
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, game: &mut Game) -> Option<Move> {
        match self.read_move(game) {
            Ok(mv) => mv,
            Err(err) => {
                log::warn!("{} input failed: {}", self.name, err);
                None
            }
        }
    }

    fn game_ended(&mut self, result: GameResult) {
        let message = match result.winner() {
            Some(winner) => format!("{} wins", winner),
            None => "Draw".to_string(),
        };
        if let Err(err) = writeln!(self.output, "{}", message) {
            log::warn!("{} output failed: {}", self.name, err);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
