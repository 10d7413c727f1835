use crate::ant::{Ant, AntStatus};
use crate::grid::Grid;
use crate::render;
use crate::report::{create_reporter, Reporter};
use crate::scenario::Scenario;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// An ant colony foraging run.
/// Main entry point for driving the simulation.
pub struct Simulation {
    scenario: Scenario,
    grid: Grid,
    ants: Vec<Ant>,
    tick: usize,
    started: bool,
    finished: bool,
    finished_reason: Option<FinishedReason>,
    reporter: Box<dyn Reporter>,
    rng: StdRng,
}

/// Represents the state of the run.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SimulationState {
    /// The current tick.
    pub tick: usize,
    /// One snapshot per ant, in id order.
    pub ants: Vec<AntSnapshot>,
    /// Food units still waiting for collection in the field.
    pub food_remaining: usize,
    /// Food units delivered to nests so far.
    pub food_stored: usize,
    /// Whether the run has finished.
    pub finished: bool,
    /// The reason the run finished. `None` if the run has not finished.
    pub finished_reason: Option<FinishedReason>,
}

/// Represents one ant in the run state.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AntSnapshot {
    /// The unique identifier for the ant.
    pub id: usize,
    /// The row of the location of the ant.
    pub row: usize,
    /// The column of the location of the ant.
    pub col: usize,
    /// Whether the ant is carrying a food unit.
    pub carrying_food: bool,
    /// Whether the ant is standing on its home nest.
    pub at_nest: bool,
    /// The ant's current activity.
    pub status: AntStatus,
}

/// Represents the reason the run finished.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum FinishedReason {
    /// The run ended because every food unit outside a nest was collected.
    AllFoodCollected,
    /// The run ended because the tick budget was used up first.
    TickBudgetExhausted,
}

impl Simulation {
    /// Creates a new simulation that reports nothing.
    ///
    /// # Arguments
    /// * `scenario` - The setup to run.
    /// * `seed` - The seed for the random number generator.
    pub fn new(scenario: Scenario, seed: u64) -> Simulation {
        Simulation::with_reporter(scenario, seed, create_reporter(false))
    }

    /// Creates a new simulation with a custom event reporter.
    ///
    /// # Arguments
    /// * `scenario` - The setup to run.
    /// * `seed` - The seed for the random number generator.
    /// * `reporter` - The sink for pickup, delivery and finish events.
    pub fn with_reporter(scenario: Scenario, seed: u64, reporter: Box<dyn Reporter>) -> Simulation {
        Simulation {
            grid: Grid::new(scenario.size),
            ants: Vec::new(),
            scenario,
            tick: 0,
            started: false,
            finished: false,
            finished_reason: None,
            reporter,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Builds the grid and the colony from the scenario and resets the clock.
    ///
    /// Must be called once before stepping. Calling it again restarts the
    /// run from the scenario. The random number generator keeps its
    /// sequence across restarts; create a new simulation to reproduce a run
    /// exactly.
    pub fn start(&mut self) -> SimulationState {
        if self.scenario.ants > 0 && self.scenario.nests.is_empty() {
            panic!("Scenario places ants but defines no nest!");
        }

        self.tick = 0;
        self.started = true;
        self.finished = false;
        self.finished_reason = None;
        self.grid = Grid::new(self.scenario.size);

        let ants = self.scenario.ants;
        let nests = self.scenario.nests.clone();

        // Ants are homed round-robin across the nests in layout order.
        self.ants = (0..ants)
            .map(|id| Ant::new(id, nests[id % nests.len()]))
            .collect();

        for (index, &nest) in nests.iter().enumerate() {
            let homed: Vec<usize> = (0..ants).filter(|id| id % nests.len() == index).collect();
            self.grid.put_nest(nest, &homed);
        }

        for &(position, amount) in &self.scenario.food {
            self.grid.put_food(position, amount);
        }

        // Compute the initial run state
        self.state()
    }

    /// Advances the run by one tick.
    ///
    /// Every ant takes one turn in ascending id order, then scent decays
    /// across the whole grid, then the end conditions are checked.
    pub fn step(&mut self) -> SimulationState {
        if !self.started {
            panic!("Simulation has not started! Call `start` to start the simulation.");
        }

        if self.finished {
            panic!("Simulation is finished! Call `start` to start a new run.");
        }

        self.tick += 1;

        for ant in &mut self.ants {
            let was_carrying = ant.carries_food();
            let was_at = ant.position();

            ant.step(self.tick, &mut self.grid, &mut self.rng);

            if !was_carrying && ant.carries_food() {
                self.reporter.report_pickup(self.tick, ant.id(), was_at);
            } else if was_carrying && !ant.carries_food() {
                let (row, col) = ant.home();
                let stored = self.grid.cell(row, col).food_amount();
                self.reporter
                    .report_delivery(self.tick, ant.id(), ant.home(), stored);
            }
        }

        self.grid.update_scent(self.tick, self.scenario.scent_ttl);

        // Collecting the last food unit on the final budgeted tick still
        // counts as a complete run.
        if self.grid.all_food_collected() {
            self.finished = true;
            self.finished_reason = Some(FinishedReason::AllFoodCollected);
        } else if self.tick >= self.scenario.tick_budget {
            self.finished = true;
            self.finished_reason = Some(FinishedReason::TickBudgetExhausted);
        }

        if self.finished {
            self.reporter.report_finished(
                self.tick,
                format!("{:?}", self.finished_reason.as_ref().unwrap()),
            );
        }

        self.state()
    }

    /// Runs from `start` until the run finishes and returns the final state.
    pub fn run(&mut self) -> SimulationState {
        let mut state = self.start();

        while !state.finished {
            state = self.step();
        }

        state
    }

    /// Computes the state of the run as of the last tick.
    pub fn state(&self) -> SimulationState {
        let ants = self
            .ants
            .iter()
            .map(|ant| AntSnapshot {
                id: ant.id(),
                row: ant.position().0,
                col: ant.position().1,
                carrying_food: ant.carries_food(),
                at_nest: ant.is_at_nest(),
                status: ant.status(&self.grid),
            })
            .collect();

        SimulationState {
            tick: self.tick,
            ants,
            food_remaining: self.grid.food_outside_nests(),
            food_stored: self.grid.food_in_nests(),
            finished: self.finished,
            finished_reason: self.finished_reason.clone(),
        }
    }

    /// Draws the run to the console.
    pub fn draw(&self) {
        render::draw(&self.grid, &self.ants, self.tick);
    }

    /// The grid as of the last tick.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The colony, in id order.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// The current tick.
    pub fn tick(&self) -> usize {
        self.tick
    }
}
