//! Run each search variant on a random grid and print the result.
//!
//! Run: cargo run --bin wayfind [seed]

use wayfind_demo::{Scenario, summary};
use wayfind_paths::Variant;

fn main() {
    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        None => 42,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Error: invalid seed: {e}");
            std::process::exit(1);
        }
    };

    let scenario = Scenario::generate(seed);
    println!("seed {seed}\n{}\n", scenario.grid.render());

    for (variant, diagonal) in [
        (Variant::Weighted, false),
        (Variant::Weighted, true),
        (Variant::Dijkstra, false),
        (Variant::Greedy, false),
        (Variant::Unweighted, false),
    ] {
        let (grid, report) = scenario.run(variant, diagonal);
        let moves = if diagonal { "8-way" } else { "4-way" };
        println!("{variant:?} ({moves}): {}", summary(&report));
        println!("{}\n", grid.render());
    }
}
