//! The outer loop around a game: pick a difficulty, play, offer a retry.

use std::thread::sleep;
use std::time::Duration;

use log::{info, warn};
use rand::Rng;

use crate::config::{Difficulty, Settings};
use crate::controls::{Action, InputSource, Key};
use crate::error::Error;
use crate::game::{Game, GameState};
use crate::render::Renderer;

/// Where the session is between screens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingDifficulty,
    Playing(Difficulty),
    Finished { difficulty: Difficulty, state: GameState, score: u32 },
    Terminated,
}

/// How a session ended, for the log.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    pub games: u32,
    pub last_score: u32,
    pub won: bool,
}

pub struct Session<R: Rng> {
    settings: Settings,
    rng: R,
    pace: fn(Duration),
    games: u32,
}

enum Round {
    Over(GameState, u32),
    Quit,
}

impl<R: Rng> Session<R> {
    pub fn new(settings: Settings, rng: R) -> Self {
        Session { settings, rng, pace: sleep, games: 0 }
    }

    /// Replaces the blocking sleep between ticks.
    #[cfg(test)]
    pub fn with_pace(mut self, pace: fn(Duration)) -> Self {
        self.pace = pace;
        self
    }

    pub fn run<T: Renderer + InputSource>(&mut self, term: &mut T) -> Result<Summary, Error> {
        let mut phase = match self.settings.difficulty {
            Some(difficulty) => Phase::Playing(difficulty),
            None => Phase::AwaitingDifficulty,
        };
        let mut summary = Summary { games: 0, last_score: 0, won: false };

        loop {
            phase = match phase {
                Phase::AwaitingDifficulty => self.choose_difficulty(term)?,
                Phase::Playing(difficulty) => match self.play(term, difficulty)? {
                    Round::Over(state, score) => Phase::Finished { difficulty, state, score },
                    Round::Quit => Phase::Terminated,
                },
                Phase::Finished { difficulty, state, score } => {
                    summary = Summary { games: self.games, last_score: score, won: state == GameState::Won };
                    self.game_over(term, difficulty, state, score)?
                }
                Phase::Terminated => {
                    info!("session over after {} game(s)", self.games);
                    summary.games = self.games;
                    return Ok(summary);
                }
            };
        }
    }

    fn choose_difficulty<T: Renderer + InputSource>(&mut self, term: &mut T) -> Result<Phase, Error> {
        term.show_message(&[
            "Choose Difficulty Level:",
            "1. Easy",
            "2. Medium",
            "3. Hard",
            "",
            "Arrow keys or WASD to move",
            "Esc to pause, CTRL+C to quit",
        ])?;

        let key = term.wait_key()?;
        if key == Key::Interrupt {
            return Ok(Phase::Terminated);
        }

        let difficulty = match key {
            Key::Char(ch) => Difficulty::from_choice(ch),
            _ => None,
        };

        let difficulty = match difficulty {
            Some(difficulty) => difficulty,
            None => {
                warn!("invalid difficulty choice {:?}, defaulting to medium", key);
                term.show_message(&["Invalid choice. Defaulting to Medium.", "", "Press any key to start"])?;
                if term.wait_key()? == Key::Interrupt {
                    return Ok(Phase::Terminated);
                }
                Difficulty::default()
            }
        };
        info!("difficulty {:?}", difficulty);

        Ok(Phase::Playing(difficulty))
    }

    fn play<T: Renderer + InputSource>(&mut self, term: &mut T, difficulty: Difficulty) -> Result<Round, Error> {
        let mut game = match Game::new(self.settings.grid, self.settings.max_score, &mut self.rng) {
            Ok(game) => game,
            Err(full) => {
                warn!("cannot start a game: {}", full);
                return Ok(Round::Over(GameState::Won, 0));
            }
        };
        self.games += 1;

        loop {
            term.draw(&game.frame())?;

            let mut turn = None;
            match term.poll_key()?.and_then(Key::action) {
                Some(Action::Turn(dir)) => turn = Some(dir),
                Some(Action::Pause) => {
                    if !self.pause(term)? {
                        return Ok(Round::Quit);
                    }
                }
                Some(Action::Quit) => return Ok(Round::Quit),
                None => {}
            }

            let state = game.tick(turn, &mut self.rng);
            if state != GameState::Playing {
                term.draw(&game.frame())?;
                return Ok(Round::Over(state, game.score()));
            }

            (self.pace)(difficulty.tick_delay());
        }
    }

    /// Blocks until the player resumes. Returns false if they quit instead.
    fn pause<T: Renderer + InputSource>(&mut self, term: &mut T) -> Result<bool, Error> {
        term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;

        loop {
            match term.wait_key()?.action() {
                Some(Action::Pause) => return Ok(true),
                Some(Action::Quit) => return Ok(false),
                _ => {}
            }
        }
    }

    fn game_over<T: Renderer + InputSource>(
        &mut self,
        term: &mut T,
        difficulty: Difficulty,
        state: GameState,
        score: u32,
    ) -> Result<Phase, Error> {
        let score_line = format!("Your score: {}", score);
        // Steering keys still queued from play must not answer the prompt
        term.discard_pending()?;

        if state == GameState::Won {
            term.show_message(&[
                "Congratulations!",
                "You've reached the maximum score!",
                &score_line,
                "",
                "Press any key to exit.",
            ])?;
            term.wait_key()?;
            return Ok(Phase::Terminated);
        }

        term.show_message(&["Game Over!", &score_line, "", "Is this all you got?", "Play again? (y/n)"])?;

        loop {
            let key = term.wait_key()?;
            if key.is_yes() {
                info!("retrying at {:?}", difficulty);
                return Ok(Phase::Playing(difficulty));
            }
            if key.is_no() {
                return Ok(Phase::Terminated);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Frame;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    /// Replays scripted keys. `polls` feeds the in-game poll one entry per
    /// tick; `waits` answers the blocking prompts.
    #[derive(Default)]
    struct Script {
        polls: VecDeque<Option<Key>>,
        waits: VecDeque<Key>,
        frames: Vec<Frame>,
        messages: Vec<Vec<String>>,
    }

    impl Script {
        fn new(polls: &[Option<Key>], waits: &[Key]) -> Self {
            Script {
                polls: polls.iter().copied().collect(),
                waits: waits.iter().copied().collect(),
                ..Script::default()
            }
        }

        fn saw_message(&self, text: &str) -> bool {
            self.messages.iter().any(|m| m.iter().any(|line| line.contains(text)))
        }
    }

    impl Renderer for Script {
        fn draw(&mut self, frame: &Frame) -> Result<(), Error> {
            self.frames.push(frame.clone());
            Ok(())
        }

        fn show_message(&mut self, lines: &[&str]) -> Result<(), Error> {
            self.messages.push(lines.iter().map(|l| l.to_string()).collect());
            Ok(())
        }
    }

    impl InputSource for Script {
        fn poll_key(&mut self) -> Result<Option<Key>, Error> {
            Ok(self.polls.pop_front().flatten())
        }

        fn wait_key(&mut self) -> Result<Key, Error> {
            Ok(self.waits.pop_front().unwrap_or(Key::Interrupt))
        }
    }

    fn session(settings: Settings) -> Session<StdRng> {
        Session::new(settings, StdRng::seed_from_u64(11)).with_pace(|_| {})
    }

    #[test]
    fn invalid_difficulty_defaults_and_decline_terminates() {
        // straight right from the centre of a 20x20 board hits the wall on tick 9
        let mut term = Script::new(&[], &[Key::Char('x'), Key::Char(' '), Key::Char('n')]);
        let summary = session(Settings::default()).run(&mut term).unwrap();

        assert!(term.saw_message("Invalid choice. Defaulting to Medium."));
        assert_eq!(summary.games, 1);
        assert!(!summary.won);
        assert!(term.saw_message("Game Over!"));
        assert_eq!(term.frames.last().unwrap().rows()[10].chars().nth(19), Some('O'));
    }

    #[test]
    fn retry_starts_a_fresh_game() {
        let mut term = Script::new(&[], &[Key::Char('3'), Key::Char('?'), Key::Char('y'), Key::Char('n')]);
        let summary = session(Settings::default()).run(&mut term).unwrap();

        assert_eq!(summary.games, 2);
        let fresh = term.frames.iter().filter(|f| f.rows()[10].chars().nth(10) == Some('O')).count();
        assert!(fresh >= 2);
    }

    #[test]
    fn ctrl_c_at_the_menu_quits() {
        let mut term = Script::new(&[], &[Key::Interrupt]);
        let summary = session(Settings::default()).run(&mut term).unwrap();

        assert_eq!(summary.games, 0);
        assert!(term.frames.is_empty());
    }

    #[test]
    fn ctrl_c_during_play_quits() {
        let settings = Settings { difficulty: Some(Difficulty::Easy), ..Settings::default() };
        let mut term = Script::new(&[None, None, Some(Key::Interrupt)], &[]);
        let summary = session(settings).run(&mut term).unwrap();

        assert_eq!(summary.games, 1);
        assert_eq!(term.frames.len(), 3);
        assert!(!term.saw_message("Game Over!"));
    }

    #[test]
    fn steering_keys_reach_the_snake() {
        // turning up from the centre hits the top wall instead of the right one
        let settings = Settings { difficulty: Some(Difficulty::Medium), ..Settings::default() };
        let mut term = Script::new(&[Some(Key::Up)], &[Key::Char('n')]);
        session(settings).run(&mut term).unwrap();

        assert_eq!(term.frames.last().unwrap().rows()[0].chars().nth(10), Some('O'));
    }

    #[test]
    fn pause_waits_for_resume() {
        let settings = Settings { difficulty: Some(Difficulty::Hard), ..Settings::default() };
        let mut term = Script::new(&[Some(Key::Esc)], &[Key::Char('w'), Key::Esc, Key::Char('n')]);
        let summary = session(settings).run(&mut term).unwrap();

        assert!(term.saw_message("Paused"));
        assert!(term.saw_message("Game Over!"));
        assert_eq!(summary.games, 1);
    }

    #[test]
    fn winning_exits_without_retry() {
        let mut term = Script::new(&[], &[Key::Char('y')]);
        let mut session = session(Settings::default());
        let next = session.game_over(&mut term, Difficulty::Easy, GameState::Won, 10).unwrap();

        assert_eq!(next, Phase::Terminated);
        assert!(term.saw_message("Congratulations!"));
        assert!(term.saw_message("Your score: 10"));
    }

    #[test]
    fn ctrl_c_at_the_invalid_choice_notice_quits() {
        let mut term = Script::new(&[], &[Key::Char('9'), Key::Interrupt]);
        let summary = session(Settings::default()).run(&mut term).unwrap();

        assert!(term.saw_message("Invalid choice. Defaulting to Medium."));
        assert_eq!(summary.games, 0);
    }

    #[test]
    fn keys_queued_during_play_do_not_dismiss_the_win() {
        let mut term = Script::new(&[Some(Key::Up), Some(Key::Left)], &[Key::Char('y')]);
        let mut session = session(Settings::default());
        let next = session.game_over(&mut term, Difficulty::Medium, GameState::Won, 10).unwrap();

        assert_eq!(next, Phase::Terminated);
        assert!(term.polls.is_empty());
        assert!(term.waits.is_empty());
    }

    #[test]
    fn losing_offers_a_retry_at_the_same_difficulty() {
        let mut term = Script::new(&[], &[Key::Char('k'), Key::Char('Y')]);
        let mut session = session(Settings::default());
        let lost = GameState::Lost(crate::collision::Collision::Itself);
        let next = session.game_over(&mut term, Difficulty::Hard, lost, 4).unwrap();

        assert_eq!(next, Phase::Playing(Difficulty::Hard));
        assert!(term.waits.is_empty());
    }
}
