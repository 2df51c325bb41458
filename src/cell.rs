/// One grid position. Coordinates are fixed at construction, only the life
/// state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    alive: bool,
}

impl Cell {

    /// New cells are dead.
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col, alive: false }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    #[inline]
    pub fn die(&mut self) {
        self.alive = false;
    }

    #[inline]
    pub fn come_to_life(&mut self) {
        self.alive = true;
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.col
    }
}
