/// Creates a reporter for simulation events.
///
/// # Arguments
///
/// * `verbose` - Whether events should be printed to the console. When
///   `false` the reporter swallows everything.
pub fn create_reporter(verbose: bool) -> Box<dyn Reporter> {
    if verbose {
        Box::new(ConsoleReporter {})
    } else {
        Box::new(NoOpReporter {})
    }
}

/// Observer for the notable events of a run.
///
/// Every method defaults to a no-op so implementations only handle what
/// they care about. Reporters are a live sink; nothing is retained between
/// calls.
pub trait Reporter: Send + Sync {
    /// Called when an ant picks up a food unit.
    #[allow(unused_variables)]
    fn report_pickup(&mut self, tick: usize, ant: usize, location: (usize, usize)) {}

    /// Called when an ant delivers a food unit to its nest. `stored` is the
    /// nest's stock after the delivery.
    #[allow(unused_variables)]
    fn report_delivery(&mut self, tick: usize, ant: usize, nest: (usize, usize), stored: usize) {}

    /// Called once when the run finishes.
    #[allow(unused_variables)]
    fn report_finished(&mut self, tick: usize, reason: String) {}
}

struct NoOpReporter {}

impl Reporter for NoOpReporter {}

/// Prints one line per event to stdout.
pub struct ConsoleReporter {}

impl Reporter for ConsoleReporter {
    fn report_pickup(&mut self, tick: usize, ant: usize, location: (usize, usize)) {
        println!(
            "[tick {}] Ant-{} picked up food at ({}, {})",
            tick, ant, location.0, location.1
        );
    }

    fn report_delivery(&mut self, tick: usize, ant: usize, nest: (usize, usize), stored: usize) {
        println!(
            "[tick {}] Ant-{} delivered food to the nest at ({}, {}), {} stored",
            tick, ant, nest.0, nest.1, stored
        );
    }

    fn report_finished(&mut self, tick: usize, reason: String) {
        println!("[tick {}] Run finished: {}", tick, reason);
    }
}
