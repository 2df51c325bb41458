//! Generation rules and multi-step runs.

use life_board::{Board, Game};

fn game_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Game {
    let mut b = Board::new(rows, cols);
    for &(r, c) in alive {
        b.sign_cell_as_alive(r, c).unwrap();
    }
    b.freeze();
    Game::new(b)
}

#[test]
fn lonely_cell_dies() {
    let mut g = game_with(3, 3, &[(1, 1)]);
    let o = g.iterate();
    assert!(g.is_cell_dead(1, 1));
    assert_eq!((o.cells_killed(), o.cells_revived()), (1, 0));
}

#[test]
fn cell_with_one_neighbour_dies() {
    let mut g = game_with(3, 3, &[(0, 0), (1, 1)]);
    g.iterate();
    assert!(g.is_cell_dead(0, 0));
    assert!(g.is_cell_dead(1, 1));
}

#[test]
fn overcrowded_cell_dies() {
    let mut g = game_with(3, 3, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)]);
    g.iterate();
    assert!(g.is_cell_dead(0, 1));
    assert!(g.is_cell_dead(1, 1));
}

#[test]
fn dead_cell_with_three_neighbours_comes_to_life() {
    let mut g = game_with(3, 3, &[(0, 0), (0, 1), (1, 1)]);
    g.iterate();
    assert!(g.is_cell_alive(1, 0));
}

#[test]
fn blinker_oscillates() {
    let mut g = game_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
    let before = g.board().clone();

    g.iterate();
    assert!(g.is_cell_dead(1, 0));
    assert!(g.is_cell_dead(1, 2));
    assert!(g.is_cell_alive(0, 1));
    assert!(g.is_cell_alive(2, 1));

    g.iterate();
    assert!(g.is_cell_dead(0, 1));
    assert!(g.is_cell_dead(2, 1));
    assert!(g.is_cell_alive(1, 0));
    assert!(g.is_cell_alive(1, 2));
    assert_eq!(g.board(), &before);
}

#[test]
fn start_sums_every_generation() {
    let mut g = game_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
    let o = g.start(3);
    assert_eq!(o.cells_killed(), 6);
    assert_eq!(o.cells_revived(), 6);
}

#[test]
fn start_zero_changes_nothing() {
    let mut g = game_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
    let before = g.board().clone();
    let o = g.start(0);
    assert_eq!((o.cells_killed(), o.cells_revived()), (0, 0));
    assert_eq!(g.board(), &before);
}

#[test]
fn block_is_still() {
    let mut g = game_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
    let before = g.board().clone();
    let o = g.start(5);
    assert_eq!((o.cells_killed(), o.cells_revived()), (0, 0));
    assert_eq!(g.board(), &before);
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    let start: Board = "\
        .#....\n\
        ..#...\n\
        ###...\n\
        ......\n\
        ......\n\
        ......\n"
        .parse()
        .unwrap();
    let moved: Board = "\
        ......\n\
        ..#...\n\
        ...#..\n\
        .###..\n\
        ......\n\
        ......\n"
        .parse()
        .unwrap();

    let mut g = Game::new(start);
    g.start(4);
    assert_eq!(g.board().to_string(), moved.to_string());
}

#[test]
fn into_board_returns_the_evolved_board() {
    let mut g = game_with(3, 3, &[(1, 1)]);
    g.iterate();
    let b = g.into_board();
    assert_eq!(b.count_of_alive_cells(), 0);
    assert!(b.is_frozen());
}
