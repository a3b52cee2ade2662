//! Execution semantics for a single TIS-100 node

pub mod check;
pub mod cost;
pub mod node;
pub mod port;
pub mod run;

// Re-export main functionality
pub use check::{CheckResult, check, check_detailed};
pub use cost::{Content, CostMetric, program_cost};
pub use node::Node;
pub use port::Port;
pub use run::{Cycle, RunError, RunOutcome};
