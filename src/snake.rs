use crate::grid::{Cell, Grid};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    fn offset(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// The snake's body, head first. Never empty.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
    // Direction of the last advance; turns are judged against it
    heading: Direction,
    // Cell given up by the tail on the last advance, where growth lands
    vacated: Option<Cell>,
}

impl Snake {
    /// A one-segment snake in the middle of the board, heading right.
    pub fn spawn(grid: &Grid) -> Self {
        Snake { body: vec![grid.center()], direction: Right, heading: Right, vacated: None }
    }

    /// Builds a snake from explicit segments, head first. Returns `None` for
    /// an empty body.
    #[cfg(test)]
    pub fn from_segments(body: Vec<Cell>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }

        Some(Snake { body, direction, heading: direction, vacated: None })
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Reversing the direction of the last move is ignored; anything else
    /// replaces the pending direction.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction != self.heading.opposite() {
            self.direction = new_direction;
        }
    }

    /// Moves the head one cell along the current direction and drags every
    /// other segment into the cell its predecessor just left. No bounds
    /// checks: the collision detector judges the result.
    pub fn advance(&mut self) {
        let old_head = self.head();
        let (dx, dy) = self.direction.offset();
        let new_head = Cell::new(old_head.x + dx, old_head.y + dy);

        self.heading = self.direction;
        self.vacated = Some(self.tail());
        self.body.rotate_right(1);
        self.body[0] = new_head;
    }

    /// Adds a segment on the cell the tail occupied before the last advance.
    /// Before any advance the current tail cell is duplicated instead.
    pub fn grow(&mut self) {
        let segment = self.vacated.take().unwrap_or_else(|| self.tail());
        self.body.push(segment);
    }
}
