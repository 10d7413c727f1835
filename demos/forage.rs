use colony_engine::{create_reporter, Scenario, Simulation};
use std::path::Path;

fn main() {
    let scenario_file = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/maps/meadow.map");
    let scenario = match Scenario::load(scenario_file) {
        Ok(scenario) => scenario,
        Err(e) => panic!("Error reading scenario file: {}", e),
    };
    let tribe = scenario
        .tribe
        .clone()
        .unwrap_or_else(|| "nameless".to_string());

    let mut simulation = Simulation::with_reporter(scenario, 7, create_reporter(true));
    let state = simulation.run();

    println!(
        "\nThe {} tribe finished after {} ticks due to: {:?}",
        tribe,
        state.tick,
        state.finished_reason.unwrap()
    );
    println!("Food stored in nests: {}", state.food_stored);

    for ant in &state.ants {
        println!(
            "{} Ant-{} at ({}, {}). {}",
            tribe, ant.id, ant.row, ant.col, ant.status
        );
    }

    println!("\n{}", simulation.grid());
}
