//! Result channel and shared precedence state for parallel search workers.

use crate::ir::Program;
use crate::search::result::SearchStatistics;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Worker found an accepted program at `rank` in the enumeration.
    Found {
        worker_id: usize,
        rank: u64,
        program: Program,
    },
    /// Worker has finished searching.
    Finished {
        worker_id: usize,
        statistics: SearchStatistics,
    },
}

/// Lowest enumeration rank accepted so far, shared by all workers.
#[derive(Debug)]
pub struct SharedBest {
    /// `u64::MAX` means no program accepted yet.
    best_rank: AtomicU64,
}

impl Default for SharedBest {
    fn default() -> Self {
        Self {
            best_rank: AtomicU64::new(u64::MAX),
        }
    }
}

impl SharedBest {
    /// Try to lower the best rank. Returns true if `rank` is the new best.
    pub fn try_update(&self, rank: u64) -> bool {
        let mut current = self.best_rank.load(Ordering::SeqCst);
        loop {
            if rank >= current {
                return false;
            }
            match self.best_rank.compare_exchange_weak(
                current,
                rank,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(c) => current = c,
            }
        }
    }

    /// True if a program earlier in the enumeration than `rank` was accepted,
    /// so checking `rank` can no longer change the answer.
    pub fn is_beaten(&self, rank: u64) -> bool {
        rank > self.best_rank.load(Ordering::SeqCst)
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Shared state for fast precedence checks.
    pub shared: Arc<SharedBest>,
}

/// Create channels for parallel search with the given number of workers.
///
/// The receiver disconnects once every worker has dropped its endpoints.
pub fn create_channels(num_workers: usize) -> (Receiver<WorkerMessage>, Vec<WorkerChannels>) {
    let shared = Arc::new(SharedBest::default());

    // Unbounded channel from workers to coordinator (workers shouldn't block)
    let (worker_tx, coordinator_rx) = unbounded();

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            to_coordinator: worker_tx.clone(),
            shared: Arc::clone(&shared),
        })
        .collect();

    (coordinator_rx, worker_channels)
}
