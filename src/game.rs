use tracing::{debug, info, info_span};

use crate::{board::Board, outcome::Outcome};

/// What the B3/S23 rule does to a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Dies,
    ComesToLife,
    Unchanged,
}

impl Transition {

    pub fn of(alive: bool, population: usize) -> Self {
        match (alive, population) {
            (true, p) if p < 2 || p > 3 => Transition::Dies,
            (false, 3) => Transition::ComesToLife,
            _ => Transition::Unchanged,
        }
    }
}

/// Cells that change in the next generation, as row-major `(row, col)` lists.
///
/// Built entirely from the current board before anything is written back,
/// so every cell sees its neighbours' pre-step state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub dying: Vec<(usize, usize)>,
    pub reviving: Vec<(usize, usize)>,
}

impl Schedule {

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dying.is_empty() && self.reviving.is_empty()
    }
}

/// Drives the simulation of the one board it owns.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
}

impl Game {

    #[inline]
    pub fn new(board: Board) -> Self {
        Game { board }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn into_board(self) -> Board {
        self.board
    }

    #[inline]
    pub fn is_cell_alive(&self, row: usize, col: usize) -> bool {
        self.board.is_cell_alive(row, col)
    }

    #[inline]
    pub fn is_cell_dead(&self, row: usize, col: usize) -> bool {
        self.board.is_cell_dead(row, col)
    }

    /// Scan phase: classifies every cell against the current board. Reads only.
    pub fn schedule(&self) -> Schedule {
        let mut s = Schedule::default();

        for cell in self.board.cells() {
            let (row, col) = (cell.row(), cell.column());
            let population = self.board.population_size_of_cell(row as isize, col as isize);
            match Transition::of(cell.is_alive(), population) {
                Transition::Dies => s.dying.push((row, col)),
                Transition::ComesToLife => s.reviving.push((row, col)),
                Transition::Unchanged => {},
            }
        }
        s
    }

    /// Advances the board by one generation.
    pub fn iterate(&mut self) -> Outcome {
        let s = self.schedule();

        for &(row, col) in &s.dying {
            self.board.cell_mut(row, col).die();
        }
        for &(row, col) in &s.reviving {
            self.board.cell_mut(row, col).come_to_life();
        }

        let mut outcome = Outcome::new();
        outcome.inc_number_of_cells_killed(s.dying.len() as u64);
        outcome.inc_number_of_cells_revived(s.reviving.len() as u64);
        debug!(killed = outcome.cells_killed(), revived = outcome.cells_revived(), "generation");
        outcome
    }

    /// Runs exactly `iteration_count` generations and returns their sum.
    pub fn start(&mut self, iteration_count: u64) -> Outcome {
        let _span = info_span!("start", iteration_count).entered();

        let mut total = Outcome::new();
        for _ in 0..iteration_count {
            let step = self.iterate();
            total.inc_as_much_as(&step);
        }

        info!(
            killed = total.cells_killed(),
            revived = total.cells_revived(),
            alive = self.board.count_of_alive_cells(),
            "run finished"
        );
        total
    }
}
