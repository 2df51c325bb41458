//! Property-based tests for the board and the generation step.

use proptest::prelude::*;

use life_board::{Board, FrozenBoardError, Game};

/// Strategy: a board up to 8x8 with an arbitrary seed.
fn board_strategy() -> impl Strategy<Value = Board> {
    (1..=8usize, 1..=8usize)
        .prop_flat_map(|(rows, cols)| prop::collection::vec(any::<bool>(), rows * cols)
            .prop_map(move |alive| {
                let mut b = Board::new(rows, cols);
                for (i, a) in alive.into_iter().enumerate() {
                    if a {
                        b.sign_cell_as_alive(i / cols, i % cols).unwrap();
                    }
                }
                b
            }))
}

/// Strategy: mostly near the board, sometimes at the ends of `isize`.
fn coord_strategy() -> impl Strategy<Value = isize> {
    prop_oneof![
        4 => -2..10isize,
        1 => any::<isize>(),
        1 => Just(isize::MIN),
        1 => Just(isize::MAX),
    ]
}

proptest! {
    // 1. Dead and alive cells always add up to the board size
    #[test]
    fn counts_are_conserved(b in board_strategy(), steps in 0..5u64) {
        let mut g = Game::new(b);
        g.start(steps);
        let b = g.board();
        prop_assert_eq!(b.count_of_dead_cells() + b.count_of_alive_cells(), b.count_of_cells());
    }

    // 2. A frozen board rejects every mutation and stays as it was
    #[test]
    fn frozen_rejects_all(mut b in board_strategy(), r in 0..8usize, c in 0..8usize) {
        let (r, c) = (r % b.row_count(), c % b.column_count());
        b.freeze();
        let before = b.clone();
        prop_assert_eq!(b.sign_cell_as_alive(r, c), Err(FrozenBoardError));
        prop_assert_eq!(b.sign_cell_as_dead(r, c), Err(FrozenBoardError));
        prop_assert_eq!(b, before);
    }

    // 3. Population never exceeds the in-bounds neighbour candidates
    #[test]
    fn population_bounded_by_candidates(b in board_strategy(), r in coord_strategy(), c in coord_strategy()) {
        let candidates = (-1..=1isize)
            .flat_map(|dr| (-1..=1isize).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .filter(|&(dr, dc)| match (r.checked_add(dr), c.checked_add(dc)) {
                (Some(nr), Some(nc)) => !b.is_out_of_bounds(nr, nc),
                _ => false,
            })
            .count();
        prop_assert!(b.population_size_of_cell(r, c) <= candidates);
        prop_assert!(candidates <= 8);
    }

    // 4. The scan phase does not depend on being run twice
    #[test]
    fn schedule_is_idempotent(b in board_strategy()) {
        let g = Game::new(b);
        let before = g.board().clone();
        prop_assert_eq!(g.schedule(), g.schedule());
        prop_assert_eq!(g.board(), &before);
    }

    // 5. iterate reports exactly the scheduled changes
    #[test]
    fn outcome_matches_schedule(b in board_strategy()) {
        let mut g = Game::new(b);
        let s = g.schedule();
        let alive_before = g.board().count_of_alive_cells() as u64;
        let o = g.iterate();
        prop_assert_eq!(o.cells_killed(), s.dying.len() as u64);
        prop_assert_eq!(o.cells_revived(), s.reviving.len() as u64);
        prop_assert_eq!(
            g.board().count_of_alive_cells() as u64,
            alive_before - o.cells_killed() + o.cells_revived()
        );
    }

    // 6. start(0) is the identity
    #[test]
    fn start_zero_is_identity(b in board_strategy()) {
        let mut g = Game::new(b.clone());
        let o = g.start(0);
        prop_assert_eq!((o.cells_killed(), o.cells_revived()), (0, 0));
        prop_assert_eq!(g.board(), &b);
    }
}
