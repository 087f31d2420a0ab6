use grid_stepper::*;

fn finder(w: usize, h: usize) -> PathFinder {
    PathFinder::new(GridConfig::new(w, h, 100.0)).unwrap()
}

/// World position of the centre of a cell, the way a click on it would arrive.
fn click(finder: &PathFinder, x: i32, y: i32) -> WorldPos {
    finder.grid().coord_to_world(Coord::new(x, y))
}

#[test]
fn open_three_by_three() {
    let mut finder = finder(3, 3);
    let (a, b) = (click(&finder, 0, 0), click(&finder, 2, 2));
    finder.toggle_endpoint(a);
    finder.toggle_endpoint(b);

    assert_eq!(finder.advance(), Step::Started);
    assert_eq!(finder.phase(), Phase::InProgress);
    let diagonal = finder.grid().view(Coord::new(1, 1)).unwrap();
    assert_eq!(diagonal.start_distance, 14);
    assert_eq!(diagonal.weight, 28);
    assert_eq!(diagonal.parent, Some(Coord::new(0, 0)));
    assert_eq!(diagonal.label().as_deref(), Some("28"));
    // Every reachable neighbour of the start got weighted, the end did not
    assert_eq!(
        finder.frontier(),
        vec![Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)]
    );
    assert_eq!(finder.grid().view(Coord::new(2, 2)).unwrap().weight, UNSET);

    assert_eq!(finder.run_to_end(10), Phase::Succeeded);
    assert_eq!(
        finder.path(),
        &[Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]
    );
    let path_states: Vec<CellState> = finder
        .path()
        .iter()
        .map(|p| finder.grid().view(*p).unwrap().state)
        .collect();
    assert_eq!(path_states, vec![CellState::Endpoint; 3]);
}

#[test]
fn walled_corridor_fails() {
    let mut finder = finder(3, 1);
    finder.toggle_endpoint_at(Coord::new(0, 0));
    finder.toggle_endpoint_at(Coord::new(2, 0));
    assert!(finder.toggle_wall_at(Coord::new(1, 0)));
    let mut steps = 0;
    while !finder.phase().is_terminal() && steps < 10 {
        finder.advance();
        steps += 1;
    }
    assert_eq!(finder.phase(), Phase::Failed);
    assert!(finder.path().is_empty());
}

#[test]
fn finished_search_is_frozen() {
    for walled in [false, true] {
        let mut finder = finder(5, 5);
        finder.toggle_endpoint_at(Coord::new(0, 2));
        finder.toggle_endpoint_at(Coord::new(4, 2));
        if walled {
            for y in 0..5 {
                finder.toggle_wall_at(Coord::new(2, y));
            }
        }
        let phase = finder.run_to_end(100);
        assert_eq!(phase == Phase::Failed, walled);
        let cells = finder.snapshot();
        let frontier = finder.frontier();
        let expanded = finder.expanded();
        for _ in 0..3 {
            assert_eq!(finder.advance(), Step::Finished);
        }
        assert_eq!(finder.snapshot(), cells);
        assert_eq!(finder.frontier(), frontier);
        assert_eq!(finder.expanded(), expanded);
        assert_eq!(finder.phase(), phase);
    }
}

#[test]
fn endpoint_toggle_is_reversible() {
    let mut finder = finder(4, 4);
    let p = Coord::new(2, 1);
    assert!(finder.toggle_endpoint_at(p));
    assert_eq!(finder.grid().start(), Some(p));
    assert!(finder.toggle_endpoint_at(p));
    assert_eq!(finder.grid().start(), None);
    assert_eq!(finder.snapshot(), self::finder(4, 4).snapshot());
    assert!(finder.toggle_endpoint_at(p));
    assert_eq!(finder.grid().start(), Some(p));
}

#[test]
fn walls_around_endpoints() {
    let mut finder = finder(4, 4);
    let start = Coord::new(0, 0);
    let end = Coord::new(3, 3);
    finder.toggle_endpoint_at(start);
    finder.toggle_endpoint_at(end);
    assert!(!finder.toggle_wall_at(start));
    assert!(!finder.toggle_wall_at(end));
    assert_eq!(finder.grid().view(start).unwrap().state, CellState::Endpoint);
    assert_eq!(finder.grid().view(end).unwrap().state, CellState::Endpoint);
}

#[test]
fn tie_break_changes_expansion_order() {
    let run = |tie_break| {
        let config = GridConfig::new(5, 5, 1.0).with_tie_break(tie_break);
        let mut finder = PathFinder::new(config).unwrap();
        finder.toggle_endpoint_at(Coord::new(0, 3));
        finder.toggle_endpoint_at(Coord::new(1, 0));
        assert_eq!(finder.run_to_end(100), Phase::Succeeded);
        (finder.expanded(), finder.path().to_vec())
    };
    // (0, 2) and (1, 2) both weigh 40 after the first step; (0, 2) is 24 away from the end and
    // (1, 2) only 20
    let (expanded, path) = run(TieBreak::FartherFromEnd);
    assert_eq!(expanded, [(0, 2), (1, 2), (0, 1)].map(Coord::from));
    assert_eq!(path, [(0, 3), (0, 2), (0, 1), (1, 0)].map(Coord::from));

    let (expanded, path) = run(TieBreak::NearerToEnd);
    assert_eq!(expanded, [(1, 2), (1, 1)].map(Coord::from));
    assert_eq!(path, [(0, 3), (1, 2), (1, 1), (1, 0)].map(Coord::from));
}

#[test]
fn reset_after_any_phase() {
    let fresh = finder(6, 4).snapshot();
    for steps in [0, 1, 3, 100] {
        let mut finder = finder(6, 4);
        finder.toggle_endpoint_at(Coord::new(0, 0));
        finder.toggle_endpoint_at(Coord::new(5, 3));
        finder.toggle_wall_at(Coord::new(3, 1));
        finder.toggle_wall_at(Coord::new(3, 2));
        finder.run_to_end(steps);
        finder.reset();
        assert_eq!(finder.phase(), Phase::NotStarted);
        assert_eq!(finder.snapshot(), fresh);
        assert_eq!(finder.advance(), Step::EndpointsMissing);
    }
}
