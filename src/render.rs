use crate::error::Error;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;

pub const WALL_CHAR: char = 'x';
pub const FOOD_CHAR: char = '*';
pub const HEAD_CHAR: char = 'O';
pub const BODY_CHARS: [char; 2] = ['/', '\\'];
const EMPTY_CHAR: char = ' ';

/// Something that can put a frame or a message in front of the player.
pub trait Renderer {
    /// Replaces whatever is on screen with `frame`.
    fn draw(&mut self, frame: &Frame) -> Result<(), Error>;

    /// Shows a short boxed message on top of the current screen.
    fn show_message(&mut self, lines: &[&str]) -> Result<(), Error>;
}

/// A complete picture of the board for one tick, row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<String>,
    score: u32,
}

impl Frame {
    pub fn new(grid: &Grid, snake: &Snake, food: Cell, score: u32) -> Self {
        let (w, h) = (grid.width() as usize, grid.height() as usize);
        let mut cells = vec![EMPTY_CHAR; w * h];
        let index = |cell: Cell| cell.y as usize * w + cell.x as usize;

        // Nearer segments win where the body overlaps itself
        for (i, seg) in snake.body().iter().enumerate().skip(1).rev() {
            if grid.contains(*seg) {
                cells[index(*seg)] = BODY_CHARS[(i - 1) % 2];
            }
        }

        for y in 0..h {
            for x in 0..w {
                let cell = Cell::new(x as i32, y as i32);
                if grid.is_wall(cell) {
                    cells[index(cell)] = WALL_CHAR;
                }
            }
        }

        if grid.contains(snake.head()) {
            cells[index(snake.head())] = HEAD_CHAR;
        }

        if grid.contains(food) {
            cells[index(food)] = FOOD_CHAR;
        }

        let rows = cells.chunks(w.max(1)).map(|row| row.iter().collect()).collect();
        Frame { rows, score }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn status_line(&self) -> String {
        format!("Score: {}", self.score)
    }
}
