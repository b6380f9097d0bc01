use lights_out::{create_board, flip_around, has_won, BoardConfig, Coord, Grid};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_grid(seed: u64, rows: usize, cols: usize) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    create_board(&BoardConfig::new(rows, cols, 0.5), &mut rng).unwrap()
}

/// Coordinates where the two grids disagree.
fn diff(a: &Grid, b: &Grid) -> Vec<Coord> {
    let mut out = Vec::new();
    for row in 0..a.rows() {
        for col in 0..a.cols() {
            if a.is_lit(row, col) != b.is_lit(row, col) {
                out.push(Coord::new(row, col));
            }
        }
    }
    out
}

fn grid_and_coord() -> impl Strategy<Value = (u64, usize, usize, Coord)> {
    (any::<u64>(), 1usize..9, 1usize..9).prop_flat_map(|(seed, rows, cols)| {
        (0..rows, 0..cols).prop_map(move |(r, c)| (seed, rows, cols, Coord::new(r, c)))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn flip_preserves_shape((seed, rows, cols, coord) in grid_and_coord()) {
        let g = random_grid(seed, rows, cols);
        let next = flip_around(&g, coord);
        prop_assert_eq!(next.dimensions(), g.dimensions());
    }

    #[test]
    fn interior_flip_changes_exactly_five(seed in any::<u64>(), rows in 3usize..9, cols in 3usize..9, r in 1usize..8, c in 1usize..8) {
        prop_assume!(r < rows - 1 && c < cols - 1);
        let g = random_grid(seed, rows, cols);
        let next = flip_around(&g, Coord::new(r, c));
        let mut expected = vec![
            Coord::new(r - 1, c),
            Coord::new(r, c - 1),
            Coord::new(r, c),
            Coord::new(r, c + 1),
            Coord::new(r + 1, c),
        ];
        expected.sort();
        prop_assert_eq!(diff(&g, &next), expected);
    }

    #[test]
    fn corner_flip_changes_exactly_three(seed in any::<u64>(), rows in 2usize..9, cols in 2usize..9) {
        let g = random_grid(seed, rows, cols);
        let next = flip_around(&g, Coord::new(0, 0));
        prop_assert_eq!(
            diff(&g, &next),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0)]
        );
    }

    #[test]
    fn flip_twice_is_identity((seed, rows, cols, coord) in grid_and_coord()) {
        let g = random_grid(seed, rows, cols);
        prop_assert_eq!(flip_around(&flip_around(&g, coord), coord), g);
    }

    #[test]
    fn won_iff_no_lit_cells(seed in any::<u64>(), rows in 1usize..9, cols in 1usize..9) {
        let g = random_grid(seed, rows, cols);
        prop_assert_eq!(has_won(&g), g.lit_count() == 0);
    }

    #[test]
    fn any_single_lit_cell_is_not_won((_seed, rows, cols, coord) in grid_and_coord()) {
        let g = Grid::from_fn(rows, cols, |c| c == coord);
        prop_assert!(!has_won(&g));
    }

    #[test]
    fn chance_zero_and_one_are_deterministic(seed in any::<u64>(), rows in 1usize..9, cols in 1usize..9) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let off = create_board(&BoardConfig::new(rows, cols, 0.0), &mut rng).unwrap();
        let on = create_board(&BoardConfig::new(rows, cols, 1.0), &mut rng).unwrap();
        prop_assert_eq!(off.lit_count(), 0);
        prop_assert_eq!(on.lit_count(), rows * cols);
    }

    #[test]
    fn off_board_flip_never_panics(seed in any::<u64>(), r in 0usize..20, c in 0usize..20) {
        let g = random_grid(seed, 4, 4);
        let next = flip_around(&g, Coord::new(r, c));
        prop_assert_eq!(next.dimensions(), (4, 4));
        prop_assert!(diff(&g, &next).len() <= 5);
    }
}
