use std::time::Duration;

pub trait ProgressCallback: Send {
    fn on_run_start(&mut self, restart_budget: usize);
    fn on_restart_complete(&mut self, restart: usize, restart_budget: usize, accepted: usize);
    fn on_run_complete(&mut self, restarts_run: usize, accepted: usize, elapsed: Duration);
}

/// Discards all progress events
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_run_start(&mut self, _restart_budget: usize) {}
    fn on_restart_complete(&mut self, _restart: usize, _restart_budget: usize, _accepted: usize) {}
    fn on_run_complete(&mut self, _restarts_run: usize, _accepted: usize, _elapsed: Duration) {}
}

pub struct ConsoleProgressCallback {
    every: usize,
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self { every: 25 }
    }
}

impl ConsoleProgressCallback {
    pub fn new(every: usize) -> Self {
        Self { every: every.max(1) }
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_run_start(&mut self, restart_budget: usize) {
        println!("Searching for low-payout combinations ({} restarts max)...", restart_budget);
    }

    fn on_restart_complete(&mut self, restart: usize, restart_budget: usize, accepted: usize) {
        let done = restart + 1;
        if done % self.every == 0 || done == restart_budget {
            println!("  Restart {}/{} - accepted so far: {}", done, restart_budget, accepted);
        }
    }

    fn on_run_complete(&mut self, restarts_run: usize, accepted: usize, elapsed: Duration) {
        println!(
            "Search complete: {} restarts, {} accepted, {:.2}s",
            restarts_run,
            accepted,
            elapsed.as_secs_f64()
        );
    }
}
