//! Parallel search coordinator that manages worker threads.
//!
//! Worker `w` of `n` checks every program whose rank in the enumeration is
//! congruent to `w` modulo `n`. The coordinator keeps the accepted program
//! with the lowest rank, which is the one the sequential search returns.

use crate::ir::Program;
use crate::search::config::{Algorithm, Config};
use crate::search::enumerator::ProgramIterator;
use crate::search::parallel::channel::{WorkerChannels, WorkerMessage, create_channels};
use crate::search::parallel::config::ParallelConfig;
use crate::search::result::{SearchResult, SearchStatistics};
use crate::semantics::check::check_detailed;
use crate::semantics::cost::program_cost;
use crate::semantics::node::Node;
use crossbeam_channel::Receiver;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;
use tracing::{debug, error, info};

/// Result from parallel search execution.
#[derive(Debug)]
pub struct ParallelResult {
    /// The lowest-rank accepted program and aggregated statistics.
    pub result: SearchResult,
    /// Per-worker statistics.
    pub worker_statistics: Vec<(usize, SearchStatistics)>,
    /// Workers that panicked. Their ranks were not all checked, so a found
    /// program may not be the shortest.
    pub failed_workers: Vec<usize>,
}

impl ParallelResult {
    /// True when every worker checked its whole share
    pub fn is_complete(&self) -> bool {
        self.failed_workers.is_empty()
    }
}

/// Run parallel search with the given configuration.
pub fn run_parallel_search(
    node: &Node,
    expected: &[i32],
    config: &Config,
    parallel_config: &ParallelConfig,
) -> ParallelResult {
    let start_time = Instant::now();
    let num_workers = parallel_config.num_workers.max(1);
    debug!(workers = num_workers, "starting parallel search");

    let (from_workers, worker_channels) = create_channels(num_workers);

    // Clone data for workers
    let template = Arc::new(node.fresh());
    let expected = Arc::new(expected.to_vec());
    let config = Arc::new(config.clone());

    let worker_handles: Vec<_> = worker_channels
        .into_iter()
        .enumerate()
        .map(|(worker_id, channels)| {
            let template = Arc::clone(&template);
            let expected = Arc::clone(&expected);
            let config = Arc::clone(&config);

            std::thread::spawn(move || {
                run_worker(
                    worker_id,
                    num_workers,
                    &template,
                    &expected,
                    &config,
                    channels,
                )
            })
        })
        .collect();

    let mut parallel_result = run_coordinator(from_workers, &config);
    parallel_result.failed_workers = join_workers(worker_handles);

    parallel_result.result.statistics.elapsed_time = start_time.elapsed();
    parallel_result
}

/// Coordinator loop that receives messages until every worker hung up.
fn run_coordinator(from_workers: Receiver<WorkerMessage>, config: &Config) -> ParallelResult {
    let mut best: Option<(u64, Program)> = None;
    let mut worker_statistics: Vec<(usize, SearchStatistics)> = Vec::new();
    let mut total = SearchStatistics::new(Algorithm::Parallel);

    for message in from_workers.iter() {
        match message {
            WorkerMessage::Found {
                worker_id,
                rank,
                program,
            } => {
                debug!(worker_id, rank, "worker accepted a program");
                if best.as_ref().is_none_or(|(best_rank, _)| rank < *best_rank) {
                    best = Some((rank, program));
                }
            }
            WorkerMessage::Finished {
                worker_id,
                statistics,
            } => {
                total.merge(&statistics);
                worker_statistics.push((worker_id, statistics));
            }
        }
    }
    worker_statistics.sort_by_key(|(worker_id, _)| *worker_id);

    let result = match best {
        Some((rank, program)) => {
            total.best_cost_found = Some(program_cost(&program, &config.cost_metric));
            info!(rank, length = program.len(), "found program");
            SearchResult::found(program, total)
        }
        None => {
            info!(
                candidates = total.candidates_evaluated,
                "search space exhausted"
            );
            SearchResult::not_found(total)
        }
    };

    ParallelResult {
        result,
        worker_statistics,
        failed_workers: Vec::new(),
    }
}

/// Wait for every worker and return the ids of those that panicked
fn join_workers(worker_handles: Vec<JoinHandle<()>>) -> Vec<usize> {
    let mut failed = Vec::new();
    for (worker_id, handle) in worker_handles.into_iter().enumerate() {
        if handle.join().is_err() {
            error!(worker_id, "worker panicked, its share of the search is incomplete");
            failed.push(worker_id);
        }
    }
    failed
}

/// Worker function that checks its share of the enumeration in rank order.
fn run_worker(
    worker_id: usize,
    num_workers: usize,
    template: &Node,
    expected: &[i32],
    config: &Config,
    channels: WorkerChannels,
) {
    let mut statistics = SearchStatistics::new(Algorithm::Parallel);
    let start_time = Instant::now();

    let mut programs = ProgramIterator::new(config.alphabet());
    programs.skip_ahead(worker_id);

    while programs.length() <= config.maximum_program_length {
        let rank = programs.rank();
        if channels.shared.is_beaten(rank) {
            break;
        }
        let Some(candidate) = programs.next() else {
            break;
        };
        programs.skip_ahead(num_workers - 1);

        let result = check_detailed(template, candidate.clone(), expected, config.maximum_cycle);
        statistics.record(candidate.len(), &result);

        if result.is_accepted() {
            channels.shared.try_update(rank);
            let _ = channels.to_coordinator.send(WorkerMessage::Found {
                worker_id,
                rank,
                program: candidate,
            });
            break;
        }
    }

    statistics.elapsed_time = start_time.elapsed();
    let _ = channels.to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        statistics,
    });
}
