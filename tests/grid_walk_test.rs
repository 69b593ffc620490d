//! Tests for grid mechanics: legal-walk round trips and boundary sizes.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use slider_core::{EMPTY_LABEL, Grid, Position, PuzzleError};

#[test]
fn test_legal_walk_and_reverse_returns_to_solved() {
    let mut rng = StdRng::seed_from_u64(21);
    for size in [2, 3, 4, 6, 8] {
        let mut grid = Grid::solved(size).unwrap();
        let mut empty = Position::new(size - 1, size - 1);

        // Walk: record where the empty cell came from at each step.
        let mut trail = Vec::new();
        for _ in 0..64 {
            let next = *empty.neighbors(size).choose(&mut rng).unwrap();
            grid.swap(empty, next);
            trail.push(empty);
            empty = next;
        }

        // Reverse the exact sequence.
        for prev in trail.into_iter().rev() {
            grid.swap(empty, prev);
            empty = prev;
        }
        assert!(grid.is_solved(), "size {size} walk did not round-trip");
    }
}

#[test]
fn test_solved_grid_flattening_across_sizes() {
    for size in 3..=8 {
        let grid = Grid::solved(size).unwrap();
        let flat = grid.flatten();
        assert_eq!(flat.len(), size * size);
        assert_eq!(flat[flat.len() - 1], EMPTY_LABEL);
        for (index, &label) in flat[..flat.len() - 1].iter().enumerate() {
            assert_eq!(label as usize, index + 1);
        }
    }
}

#[test]
fn test_minimum_grid_adjacency_and_moves() {
    // [[1, _], [2, 3]] with the empty cell at (0, 1).
    let mut grid = Grid::from_labels(2, &[1, 0, 2, 3]).unwrap();
    let empty = grid.locate_empty().unwrap();
    assert_eq!(empty, Position::new(0, 1));

    // Both orthogonal neighbors can slide; the diagonal cannot.
    assert!(Position::new(0, 0).is_adjacent(empty));
    assert!(Position::new(1, 1).is_adjacent(empty));
    assert!(!Position::new(1, 0).is_adjacent(empty));

    grid.swap(empty, Position::new(1, 1));
    assert_eq!(grid.flatten(), vec![1, 3, 2, 0]);
    assert_eq!(grid.locate_empty(), Ok(Position::new(1, 1)));
}

#[test]
fn test_corrupt_grids_are_rejected_defensively() {
    assert!(matches!(
        Grid::from_labels(3, &[1, 2, 3, 4, 5, 6, 7, 8, 8]),
        Err(PuzzleError::CorruptState(_))
    ));
    assert!(matches!(
        Grid::from_labels(3, &[0, 2, 3, 4, 5, 0, 7, 8, 6]),
        Err(PuzzleError::CorruptState(_))
    ));
}
