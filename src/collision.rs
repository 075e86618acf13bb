use std::fmt;

use crate::grid::Grid;
use crate::snake::Snake;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Itself,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => write!(f, "hit the wall"),
            Collision::Itself => write!(f, "bit itself"),
        }
    }
}

/// Judges the snake's current head position. Wall hits are reported ahead
/// of self hits; either one ends the game.
pub fn check(grid: &Grid, snake: &Snake) -> Option<Collision> {
    let head = snake.head();

    if grid.is_wall(head) {
        Some(Collision::Wall)
    } else if snake.body()[1..].contains(&head) {
        Some(Collision::Itself)
    } else {
        None
    }
}
