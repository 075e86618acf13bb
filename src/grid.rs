/// A single board position. Signed so a head that steps past the wall is
/// still representable and can be reported as a collision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

/// Board dimensions. The outermost ring of cells is the wall; everything
/// inside it is the playable interior.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        Grid { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width as i32 && cell.y < self.height as i32
    }

    /// True for cells on the wall ring or outside the board altogether.
    pub fn is_wall(&self, cell: Cell) -> bool {
        cell.x <= 0
            || cell.y <= 0
            || cell.x >= self.width as i32 - 1
            || cell.y >= self.height as i32 - 1
    }

    #[cfg(test)]
    pub fn is_interior(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> {
        let (w, h) = (self.width as i32, self.height as i32);
        (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| Cell::new(x, y)))
    }

    pub fn interior_size(&self) -> usize {
        (self.width as usize).saturating_sub(2) * (self.height as usize).saturating_sub(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_ring_is_wall() {
        let grid = Grid::new(20, 20);

        for i in 0..20 {
            assert!(grid.is_wall(Cell::new(0, i)));
            assert!(grid.is_wall(Cell::new(19, i)));
            assert!(grid.is_wall(Cell::new(i, 0)));
            assert!(grid.is_wall(Cell::new(i, 19)));
        }

        assert!(grid.is_wall(Cell::new(-1, 5)));
        assert!(grid.is_interior(Cell::new(1, 1)));
        assert!(grid.is_interior(Cell::new(18, 18)));
    }

    #[test]
    fn interior_cells_excludes_the_ring() {
        let grid = Grid::new(6, 5);
        let cells: Vec<Cell> = grid.interior_cells().collect();

        assert_eq!(cells.len(), grid.interior_size());
        assert_eq!(cells.len(), 4 * 3);
        assert!(cells.iter().all(|c| grid.is_interior(*c)));
    }

    #[test]
    fn center_of_default_board() {
        assert_eq!(Grid::new(20, 20).center(), Cell::new(10, 10));
    }
}
