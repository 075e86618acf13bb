use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::grid::Grid;

pub const WIDTH: u16 = 20;
pub const HEIGHT: u16 = 20;
pub const MAX_SCORE: u32 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Time between two ticks. Longer is easier.
    pub fn tick_delay(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(100),
            Difficulty::Medium => Duration::from_millis(75),
            Difficulty::Hard => Duration::from_millis(50),
        }
    }

    /// Menu choice '1'..'3'. Anything else is not a valid choice.
    pub fn from_choice(ch: char) -> Option<Difficulty> {
        match ch {
            '1' => Some(Difficulty::Easy),
            '2' => Some(Difficulty::Medium),
            '3' => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// Terminal snake: eat, grow, stay off the walls.
#[derive(Debug, Parser)]
#[command(name = "snake", version)]
pub struct Args {
    /// Skip the menu and play at this difficulty
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Board width, wall included
    #[arg(long, default_value_t = WIDTH, value_parser = clap::value_parser!(u16).range(5..=200))]
    pub width: u16,

    /// Board height, wall included
    #[arg(long, default_value_t = HEIGHT, value_parser = clap::value_parser!(u16).range(5..=200))]
    pub height: u16,

    /// Score that wins the game
    #[arg(long, default_value_t = MAX_SCORE, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_score: u32,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Everything a session needs to know before it starts.
#[derive(Debug, Clone)]
pub struct Settings {
    pub grid: Grid,
    pub max_score: u32,
    pub difficulty: Option<Difficulty>,
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Settings {
            grid: Grid::new(args.width, args.height),
            max_score: args.max_score,
            difficulty: args.difficulty,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings { grid: Grid::new(WIDTH, HEIGHT), max_score: MAX_SCORE, difficulty: None }
    }
}
