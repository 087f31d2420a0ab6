/// Fuzzes the stepper by checking for many random grids that a path is found exactly when the end
/// is reachable by being part of the same connected component, and that found paths are valid.
use grid_stepper::*;
use rand::prelude::*;

fn random_finder(n: usize, rng: &mut StdRng, tie_break: TieBreak) -> PathFinder {
    let config = GridConfig::new(n, n, 1.0).with_tie_break(tie_break);
    let mut finder = PathFinder::new(config).unwrap();
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            if rng.gen_bool(0.4) {
                finder.toggle_wall_at(Coord::new(x, y));
            }
        }
    }
    finder
}

fn visualize_grid(finder: &PathFinder) {
    println!("{}", finder);
}

fn check_path(finder: &PathFinder, start: Coord, end: Coord) {
    let path = finder.path();
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(&pair[1]));
    }
    for p in path {
        let cell = finder.grid().get_cell(*p).unwrap();
        assert_eq!(cell.state, CellState::Endpoint);
    }
    // Parent links carry consistent start distances up to the cell before the end
    let before_end = path[path.len() - 2];
    let recorded = finder.grid().get_cell(before_end).unwrap().start_distance;
    assert_eq!(recorded, path_cost(&path[..path.len() - 1]));
    assert_eq!(
        finder.search().path_cost(),
        Some(recorded + step_cost(&before_end, &end))
    );
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coord::new(0, 0);
    let end = Coord::new(N as i32 - 1, N as i32 - 1);
    for tie_break in [TieBreak::FartherFromEnd, TieBreak::NearerToEnd] {
        for _ in 0..N_GRIDS {
            let mut finder = random_finder(N, &mut rng, tie_break);
            // Walls can't be endpoints, so clear them first
            for p in [start, end] {
                if finder.grid().get_cell(p).unwrap().state == CellState::Wall {
                    finder.toggle_wall_at(p);
                }
            }
            assert!(finder.toggle_endpoint_at(start));
            assert!(finder.toggle_endpoint_at(end));
            let reachable = finder.is_reachable().unwrap();
            let phase = finder.run_to_end(N * N + 2);
            assert!(phase.is_terminal());
            // Show the grid if the outcome disagrees with the components
            if (phase == Phase::Succeeded) != reachable {
                visualize_grid(&finder);
            }
            assert_eq!(phase == Phase::Succeeded, reachable);
            if reachable {
                check_path(&finder, start, end);
            } else {
                assert!(finder.path().is_empty());
            }
        }
    }
}
