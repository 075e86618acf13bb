use log::{debug, info};
use rand::Rng;

use crate::collision::{self, Collision};
use crate::food::{self, BoardFull};
use crate::grid::{Cell, Grid};
use crate::render::Frame;
use crate::snake::{Direction, Snake};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost(Collision),
}

/// One round of play: the board, the snake, the food and the score.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    snake: Snake,
    food: Cell,
    score: u32,
    max_score: u32,
    state: GameState,
}

impl Game {
    /// A fresh round with a centred one-segment snake. Fails only when the
    /// board has no room for the first piece of food.
    pub fn new<R: Rng>(grid: Grid, max_score: u32, rng: &mut R) -> Result<Self, BoardFull> {
        let snake = Snake::spawn(&grid);
        let food = food::place(&grid, &snake, rng)?;
        info!("new game on a {}x{} board, first food at {:?}", grid.width(), grid.height(), food);

        Ok(Game { grid, snake, food, score: 0, max_score, state: GameState::Playing })
    }

    #[cfg(test)]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame(&self) -> Frame {
        Frame::new(&self.grid, &self.snake, self.food, self.score)
    }

    /// Runs one step: steer, move, judge, feed. Once the game is decided
    /// further ticks change nothing.
    pub fn tick<R: Rng>(&mut self, turn: Option<Direction>, rng: &mut R) -> GameState {
        if self.state != GameState::Playing {
            return self.state;
        }

        if let Some(dir) = turn {
            self.snake.set_direction(dir);
        }

        self.snake.advance();

        if let Some(hit) = collision::check(&self.grid, &self.snake) {
            info!(
                "snake {} at {:?} heading {:?} with score {}",
                hit, self.snake.head(), self.snake.direction(), self.score
            );
            self.state = GameState::Lost(hit);
            return self.state;
        }

        if self.snake.head() == self.food {
            self.score += 1;
            self.snake.grow();
            debug!("food eaten, score {} length {}", self.score, self.snake.len());

            match food::place(&self.grid, &self.snake, rng) {
                Ok(cell) => self.food = cell,
                Err(BoardFull) => {
                    info!("board filled with score {}", self.score);
                    self.state = GameState::Won;
                    return self.state;
                }
            }
        }

        if self.score >= self.max_score {
            info!("maximum score {} reached", self.max_score);
            self.state = GameState::Won;
        }

        self.state
    }

    #[cfg(test)]
    fn with(grid: Grid, snake: Snake, food: Cell, max_score: u32) -> Self {
        Game { grid, snake, food, score: 0, max_score, state: GameState::Playing }
    }
}
