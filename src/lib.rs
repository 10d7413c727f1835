//! # colony_engine
//!
//! A tick-based simulation of an ant colony foraging on a square grid.
//! Ants fan out from their nests, carry the food they find back home and
//! mark the trail with decaying scent that steers the rest of the colony.

pub mod simulation;
pub use simulation::AntSnapshot;
pub use simulation::FinishedReason;
pub use simulation::Simulation;
pub use simulation::SimulationState;

pub mod ant;
pub use ant::Ant;
pub use ant::AntStatus;
pub use ant::Direction;

pub mod cell;
pub use cell::Cell;

pub mod grid;
pub use grid::Grid;

pub mod scenario;
pub use scenario::Scenario;

pub mod report;
pub use report::create_reporter;
pub use report::ConsoleReporter;
pub use report::Reporter;

pub mod error;
pub use error::ParseError;
pub use error::Result;

mod render;
