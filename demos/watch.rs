use colony_engine::{Scenario, Simulation};
use std::path::Path;
use std::thread;
use std::time::Duration;

fn main() {
    let scenario_file = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/maps/crossing.map");
    let scenario = match Scenario::load(scenario_file) {
        Ok(scenario) => scenario,
        Err(e) => panic!("Error reading scenario file: {}", e),
    };

    let mut simulation = Simulation::new(scenario, 42);
    let mut state = simulation.start();
    simulation.draw();

    while !state.finished {
        thread::sleep(Duration::from_millis(60));
        state = simulation.step();
        simulation.draw();
    }

    println!(
        "\nRun finished due to: {:?}",
        state.finished_reason.unwrap()
    );
}
