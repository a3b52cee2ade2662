//! Search algorithms for finding shortest programs
//!
//! - Enumerative: exhaustive search over programs in order of increasing size
//! - Parallel: the same enumeration partitioned across worker threads

pub mod candidate;
pub mod config;
pub mod enumerative;
pub mod enumerator;
pub mod parallel;
pub mod result;

pub use config::{Algorithm, Config, DEFAULT_LITERALS};
pub use enumerative::{EnumerativeSearch, optimize};
pub use enumerator::ProgramIterator;
pub use parallel::{ParallelConfig, ParallelResult, run_parallel_search};
pub use result::{SearchResult, SearchStatistics};

use crate::semantics::node::Node;

/// Trait for search algorithms that find programs producing an expected output
pub trait SearchAlgorithm {
    /// Search for the shortest program that makes `node` write `expected`
    ///
    /// # Arguments
    /// * `node` - The node whose up port holds the input
    /// * `expected` - The exact sequence the down port must receive
    /// * `config` - Search bounds and alphabet
    ///
    /// # Returns
    /// A SearchResult containing the program found (if any) and statistics
    fn search(&mut self, node: &Node, expected: &[i32], config: &Config) -> SearchResult;

    /// Get statistics from the most recent search
    fn statistics(&self) -> SearchStatistics;

    /// Reset the search state for a new search
    fn reset(&mut self);
}
