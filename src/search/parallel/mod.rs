//! Parallel search execution across worker threads.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **coordinator** that manages worker threads and aggregates results
//! - Multiple **workers**, each checking an interleaved share of the program
//!   enumeration on its own copy of the node
//! - A **channel** carrying accepted programs and statistics to the coordinator
//! - **Shared state** holding the lowest accepted rank, so workers stop once
//!   nothing they could still find would win
//!
//! # Example
//!
//! ```
//! use tis_superoptimizer::search::{Config, ParallelConfig, run_parallel_search};
//! use tis_superoptimizer::semantics::{Node, Port};
//!
//! let node = Node::new().set_up(Port::new(vec![7]));
//! let parallel_config = ParallelConfig::default().with_workers(2);
//!
//! let parallel = run_parallel_search(&node, &[7], &Config::new(10, 1), &parallel_config);
//! assert!(parallel.result.is_found());
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::{ParallelResult, run_parallel_search};
