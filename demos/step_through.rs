use grid_stepper::{Coord, GridConfig, PathFinder, Step};

// Steps a search on a 6x4 grid with shape
//  ______
// |A  #  |
// |   #  |
// |   # B|
// |      |
//  ______
// where
// - # marks a wall
// - A marks the start
// - B marks the end
//
// and prints the grid after every step. Weighted cells show their weight.

fn main() {
    let mut finder = PathFinder::new(GridConfig::new(6, 4, 1.0)).unwrap();
    for y in 0..3 {
        finder.toggle_wall_at(Coord::new(3, y));
    }
    finder.toggle_endpoint_at(Coord::new(0, 0));
    finder.toggle_endpoint_at(Coord::new(5, 2));
    println!("{}", finder);
    loop {
        let step = finder.advance();
        if step == Step::Finished {
            break;
        }
        println!("{:?}", step);
        for row in finder.snapshot().chunks(finder.grid().width()) {
            let labels: Vec<String> = row
                .iter()
                .map(|c| {
                    let label = c.label().unwrap_or_else(|| c.state.symbol().to_string());
                    format!("{:>4}", label)
                })
                .collect();
            println!("{}", labels.join(""));
        }
        println!();
    }
    println!("Path:");
    for p in finder.path() {
        println!("{}", p);
    }
}
