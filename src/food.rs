use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Random draws before falling back to scanning the whole interior.
const SAMPLE_ATTEMPTS: usize = 64;

/// Every interior cell is covered by the snake.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
#[error("no free interior cell left for food")]
pub struct BoardFull;

/// Picks an interior cell not covered by the snake, uniformly at random.
pub fn place<R: Rng>(grid: &Grid, snake: &Snake, rng: &mut R) -> Result<Cell, BoardFull> {
    let (w, h) = (grid.width() as i32, grid.height() as i32);

    if grid.interior_size() > snake.len() {
        for _ in 0..SAMPLE_ATTEMPTS {
            let cell = Cell::new(rng.gen_range(1..w - 1), rng.gen_range(1..h - 1));
            if !snake.occupies(cell) {
                debug!("food placed at {:?}", cell);
                return Ok(cell);
            }
        }
    }

    let choices: Vec<Cell> = grid.interior_cells().filter(|cell| !snake.occupies(*cell)).collect();
    let cell = choices.choose(rng).copied().ok_or(BoardFull)?;
    debug!("food placed at {:?} from {} free cells", cell, choices.len());

    Ok(cell)
}
