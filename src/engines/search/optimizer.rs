use crate::config::AppConfig;
use crate::engines::evaluation::{PayoutEvaluator, TicketIndex};
use crate::engines::search::{
    hill_climber::{ClimbOutcome, HillClimber},
    progress::ProgressCallback,
    result_set::{AcceptanceFilter, ResultSet},
};
use crate::error::Result;
use crate::types::{Combo, TicketPool, NUMBER_MAX, NUMBER_MIN, PICK_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Why the restart loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    RestartBudget,
    TimeBudget,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub results: ResultSet,
    pub restarts_run: usize,
    /// Local optima that passed the acceptance filter, before top-K trimming
    pub accepted: usize,
    pub total_ticket_price: u64,
    pub elapsed: Duration,
    pub stop_reason: StopReason,
}

/// Uniform 7-subset of 1..=37, sorted
pub fn random_combo<R: Rng + ?Sized>(rng: &mut R) -> Combo {
    let span = (NUMBER_MAX - NUMBER_MIN + 1) as usize;
    let picks = rand::seq::index::sample(rng, span, PICK_COUNT);
    let mut numbers = [0u8; PICK_COUNT];
    for (slot, i) in numbers.iter_mut().zip(picks.iter()) {
        *slot = i as u8 + NUMBER_MIN;
    }
    Combo::from_distinct(numbers)
}

/// Randomized-restart driver around `HillClimber`
pub struct Optimizer {
    config: AppConfig,
    evaluator: PayoutEvaluator,
}

impl Optimizer {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let evaluator = PayoutEvaluator::new(config.payout.table);
        Ok(Self { config, evaluator })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run with an RNG seeded from the configured seed, or from entropy
    pub fn run<C: ProgressCallback>(&self, pool: &TicketPool, callback: C) -> RunSummary {
        let mut rng = match self.config.search.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(pool, &mut rng, callback)
    }

    pub fn run_with_rng<R: Rng, C: ProgressCallback>(
        &self,
        pool: &TicketPool,
        rng: &mut R,
        mut callback: C,
    ) -> RunSummary {
        let search = &self.config.search;
        let total_ticket_price = pool.total_price(self.config.payout.unit_price);
        let filter = AcceptanceFilter {
            price_ceiling: total_ticket_price,
            min_four: search.min_four,
            max_four: search.max_four,
        };
        let mut results = if search.dedupe {
            ResultSet::new_deduplicated(search.top_k)
        } else {
            ResultSet::new(search.top_k)
        };

        log::info!(
            "Optimizing over {} tickets, total ticket price {}",
            pool.len(),
            total_ticket_price
        );

        let index = TicketIndex::build(pool);
        let climber = HillClimber::new(&index, &self.evaluator);
        let time_budget = search.time_budget();
        let batch_size = if search.parallel {
            rayon::current_num_threads().max(1)
        } else {
            1
        };

        callback.on_run_start(search.restart_budget);

        let start = Instant::now();
        let mut restarts_run = 0;
        let mut accepted = 0;
        let mut stop_reason = StopReason::RestartBudget;

        while restarts_run < search.restart_budget {
            let batch = batch_size.min(search.restart_budget - restarts_run);
            let starts: Vec<Combo> = (0..batch).map(|_| random_combo(rng)).collect();

            let batch_start = Instant::now();
            let outcomes: Vec<ClimbOutcome> = if search.parallel {
                starts.par_iter().map(|s| climber.climb(*s)).collect()
            } else {
                starts.iter().map(|s| climber.climb(*s)).collect()
            };
            if batch_start.elapsed() > time_budget {
                log::warn!(
                    "A single restart batch took {:.2}s, over the {}s time budget",
                    batch_start.elapsed().as_secs_f64(),
                    search.time_budget_secs
                );
            }

            for (start_combo, outcome) in starts.iter().zip(outcomes) {
                let result = outcome.result;
                log::debug!(
                    "restart {}: {} -> {} total={} fours={} moves={}",
                    restarts_run,
                    start_combo,
                    result.combo,
                    result.total_payout,
                    result.fours(),
                    outcome.moves
                );

                if filter.accepts(&result) {
                    accepted += 1;
                    results.try_add(result);
                }
                callback.on_restart_complete(restarts_run, search.restart_budget, accepted);
                restarts_run += 1;
            }

            if start.elapsed() > time_budget && restarts_run < search.restart_budget {
                stop_reason = StopReason::TimeBudget;
                break;
            }
        }

        let elapsed = start.elapsed();
        callback.on_run_complete(restarts_run, accepted, elapsed);
        log::info!(
            "Ran {} restarts in {:.2}s ({:?}); {} accepted, {} kept",
            restarts_run,
            elapsed.as_secs_f64(),
            stop_reason,
            accepted,
            results.len()
        );

        RunSummary {
            results,
            restarts_run,
            accepted,
            total_ticket_price,
            elapsed,
            stop_reason,
        }
    }
}
