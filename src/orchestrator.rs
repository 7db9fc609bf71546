//! Game loop and turn coordination.
//!
//! The [`Orchestrator`] owns the [`Game`] and both players. Each turn it
//! shows the board and status, asks the side to move for a move, validates
//! and executes it, tells the other player, and checks whether the game is
//! over.
//!
//! ```text
//! [Draw board] -> [Request move] -> [Validate + execute] -> [Notify opponent]
//!   -> [Check end] -> [Draw board] -> [Request move] ...
//! ```

use std::io::{self, Write};

use crate::agent::player::{GameResult, Player};
use crate::game::Game;
use crate::game_repr::{Color, Move};

pub struct Orchestrator<W: Write> {
    game: Game,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    /// Where the board and status lines are written
    out: W,
    game_active: bool,
    game_result: Option<GameResult>,
}

impl<W: Write> Orchestrator<W> {
    pub fn new(game: Game, white: Box<dyn Player>, black: Box<dyn Player>, out: W) -> Self {
        Self {
            game,
            white,
            black,
            out,
            game_active: false,
            game_result: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_result(&self) -> Option<GameResult> {
        self.game_result
    }

    pub fn is_game_active(&self) -> bool {
        self.game_active
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays until the game ends or a player resigns
    pub fn run(&mut self) -> io::Result<GameResult> {
        self.game_active = true;
        self.game_result = None;
        log::info!("New game: {} (white) vs {} (black)", self.white.name(), self.black.name());

        self.check_game_end()?;
        while self.game_active {
            self.draw()?;

            let turn = self.game.side_to_move();
            let player = match turn {
                Color::White => self.white.as_mut(),
                Color::Black => self.black.as_mut(),
            };

            match player.get_move(&mut self.game) {
                Some(mv) => {
                    self.process_move(mv)?;
                }
                None => {
                    log::info!("{} resigns", player.name());
                    writeln!(self.out, "{} resigned", player.name())?;
                    self.handle_game_end(GameResult::from_winner(turn.opposite()))?;
                }
            }
        }

        self.draw()?;
        Ok(self.game_result.unwrap_or(GameResult::Draw))
    }

    /// Executes `mv` for the side to move. Returns `false` and leaves the game
    /// unchanged if the move is not legal.
    pub fn process_move(&mut self, mv: Move) -> io::Result<bool> {
        let turn = self.game.side_to_move();
        let san = self.game.position().san(mv);

        let Some(played) = self.game.make_move(mv) else {
            log::warn!("rejected illegal move {} for {}", mv, turn);
            writeln!(self.out, "Illegal move: {}", mv)?;
            return Ok(false);
        };

        let (mover, opponent) = match turn {
            Color::White => (&self.white, &mut self.black),
            Color::Black => (&self.black, &mut self.white),
        };
        writeln!(self.out, "{} played {}", mover.name(), san)?;
        opponent.opponent_moved(played);

        self.check_game_end()?;
        Ok(true)
    }

    pub fn check_game_end(&mut self) -> io::Result<()> {
        if let Some(result) = self.game.result() {
            match result {
                GameResult::WhiteWins | GameResult::BlackWins => {
                    log::info!("Checkmate! {:?}", result)
                }
                GameResult::Stalemate => log::info!("Stalemate! Game is a draw"),
                GameResult::Draw => log::info!("Draw"),
            }
            self.handle_game_end(result)?;
        }
        Ok(())
    }

    fn handle_game_end(&mut self, result: GameResult) -> io::Result<()> {
        self.game_active = false;
        self.game_result = Some(result);

        self.white.game_ended(result);
        self.black.game_ended(result);

        let message = match result {
            GameResult::WhiteWins => "White wins",
            GameResult::BlackWins => "Black wins",
            GameResult::Stalemate => "Draw by stalemate",
            GameResult::Draw => "Draw",
        };
        writeln!(self.out, "{}", message)
    }

    /// Back to the starting position for another game
    pub fn new_game(&mut self) {
        self.game.reset();
        self.game_active = false;
        self.game_result = None;
    }

    fn draw(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        write!(self.out, "{}", self.game.render())?;
        writeln!(self.out, "Last move: {}", self.game.last_move_text())?;
        writeln!(self.out, "{}", self.game.captured_pieces())?;
        writeln!(self.out, "{}", self.game.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays a fixed list of coordinate moves, then resigns
    struct Scripted {
        moves: Vec<&'static str>,
        seen: Vec<Move>,
        result: Option<GameResult>,
    }

    impl Scripted {
        fn new(moves: &[&'static str]) -> Box<Self> {
            Box::new(Self {
                moves: moves.iter().rev().copied().collect(),
                seen: Vec::new(),
                result: None,
            })
        }
    }

    impl Player for Scripted {
        fn get_move(&mut self, game: &mut Game) -> Option<Move> {
            let text = self.moves.pop()?;
            game.find_move(text).ok()
        }

        fn opponent_moved(&mut self, mv: Move) {
            self.seen.push(mv);
        }

        fn game_ended(&mut self, result: GameResult) {
            self.result = Some(result);
        }
    }

    #[test]
    fn test_fools_mate() {
        let white = Scripted::new(&["f2f3", "g2g4"]);
        let black = Scripted::new(&["e7e5", "d8h4"]);
        let mut orchestrator = Orchestrator::new(Game::new(), white, black, Vec::new());

        let result = orchestrator.run().unwrap();
        assert_eq!(result, GameResult::BlackWins);
        assert!(!orchestrator.is_game_active());

        let text = String::from_utf8(orchestrator.into_output()).unwrap();
        assert!(text.contains("Player played Qh4#"));
        assert!(text.contains("Game over, black wins by checkmate!"));
        assert!(text.contains("Black wins"));
    }

    #[test]
    fn test_resignation() {
        let white = Scripted::new(&["e2e4"]);
        let black = Scripted::new(&[]);
        let mut orchestrator = Orchestrator::new(Game::new(), white, black, Vec::new());

        assert_eq!(orchestrator.run().unwrap(), GameResult::WhiteWins);
        assert_eq!(orchestrator.game().last_move_text(), "e2 to e4");
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let mut orchestrator =
            Orchestrator::new(Game::new(), Scripted::new(&[]), Scripted::new(&[]), Vec::new());
        let bogus = Move::new("e2".parse().unwrap(), "e5".parse().unwrap(), crate::game_repr::MoveType::Normal);

        assert!(!orchestrator.process_move(bogus).unwrap());
        assert_eq!(orchestrator.game().position().ply_count(), 0);
    }

    #[test]
    fn test_game_already_over() {
        let game = Game::from_fen("k7/8/1Q6/8/8/8/8/K7 b - - 0 1").unwrap();
        let mut orchestrator = Orchestrator::new(game, Scripted::new(&[]), Scripted::new(&[]), Vec::new());
        assert_eq!(orchestrator.run().unwrap(), GameResult::Stalemate);
    }

    #[test]
    fn test_new_game_resets_position() {
        let white = Scripted::new(&["e2e4"]);
        let mut orchestrator = Orchestrator::new(Game::new(), white, Scripted::new(&[]), Vec::new());
        orchestrator.run().unwrap();

        orchestrator.new_game();
        assert_eq!(orchestrator.game().position().ply_count(), 0);
        assert_eq!(orchestrator.game_result(), None);
    }
}
