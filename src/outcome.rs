use std::ops::AddAssign;

/// How many cells a generation (or a run of generations) killed and revived.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    killed: u64,
    revived: u64,
}

impl Outcome {

    #[inline]
    pub fn new() -> Self {
        Outcome::default()
    }

    #[inline]
    pub fn inc_number_of_cells_killed(&mut self, count: u64) {
        self.killed += count;
    }

    #[inline]
    pub fn inc_number_of_cells_revived(&mut self, count: u64) {
        self.revived += count;
    }

    /// Folds `other` into `self`, counter by counter.
    pub fn inc_as_much_as(&mut self, other: &Outcome) {
        self.inc_number_of_cells_killed(other.cells_killed());
        self.inc_number_of_cells_revived(other.cells_revived());
    }

    #[inline]
    pub fn cells_killed(&self) -> u64 {
        self.killed
    }

    #[inline]
    pub fn cells_revived(&self) -> u64 {
        self.revived
    }
}

impl AddAssign for Outcome {
    fn add_assign(&mut self, other: Outcome) {
        self.inc_as_much_as(&other);
    }
}
