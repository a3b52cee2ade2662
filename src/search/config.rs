//! Configuration types for search algorithms

use crate::ir::Instruction;
use crate::search::candidate::{generate_all_instructions, generate_useful_instructions};
use crate::semantics::cost::CostMetric;

/// Literals available to synthesized programs unless configured otherwise
pub const DEFAULT_LITERALS: [i32; 3] = [0, 1, -1];

/// Search algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Sequential exhaustive enumeration
    #[default]
    Enumerative,
    /// Enumeration partitioned over worker threads
    Parallel,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Enumerative => write!(f, "enumerative"),
            Algorithm::Parallel => write!(f, "parallel"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enumerative" | "enum" | "sequential" => Ok(Algorithm::Enumerative),
            "parallel" | "par" => Ok(Algorithm::Parallel),
            _ => Err(format!(
                "Unknown algorithm: '{}'. Valid options: enumerative, parallel",
                s
            )),
        }
    }
}

/// Optimizer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cycle budget for each candidate run
    pub maximum_cycle: u32,
    /// Longest program the search will consider
    pub maximum_program_length: usize,
    /// Literal operands available to candidates
    pub literals: Vec<i32>,
    /// Leave instructions that never change state out of the alphabet
    pub prune_redundant: bool,
    /// Metric reported for the found program
    pub cost_metric: CostMetric,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maximum_cycle: 10,
            maximum_program_length: 3,
            literals: DEFAULT_LITERALS.to_vec(),
            prune_redundant: false,
            cost_metric: CostMetric::default(),
        }
    }
}

impl Config {
    pub fn new(maximum_cycle: u32, maximum_program_length: usize) -> Self {
        Self {
            maximum_cycle,
            maximum_program_length,
            ..Self::default()
        }
    }

    pub fn with_maximum_cycle(mut self, maximum_cycle: u32) -> Self {
        self.maximum_cycle = maximum_cycle;
        self
    }

    pub fn with_maximum_program_length(mut self, length: usize) -> Self {
        self.maximum_program_length = length;
        self
    }

    pub fn with_literals(mut self, literals: Vec<i32>) -> Self {
        self.literals = literals;
        self
    }

    pub fn with_prune_redundant(mut self, prune: bool) -> Self {
        self.prune_redundant = prune;
        self
    }

    pub fn with_cost_metric(mut self, metric: CostMetric) -> Self {
        self.cost_metric = metric;
        self
    }

    /// Instructions the enumerator builds programs from
    pub fn alphabet(&self) -> Vec<Instruction> {
        if self.prune_redundant {
            generate_useful_instructions(&self.literals)
        } else {
            generate_all_instructions(&self.literals)
        }
    }
}
