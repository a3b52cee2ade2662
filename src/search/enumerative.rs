//! Exhaustive search over programs in order of increasing size
//!
//! Candidates are pulled from a `ProgramIterator` and checked one by one on
//! a fresh copy of the target node. The first accepted candidate is returned;
//! since sizes never decrease it is a shortest program over the alphabet.

use crate::ir::Program;
use crate::search::config::{Algorithm, Config};
use crate::search::enumerator::{ProgramIterator, search_space_size};
use crate::search::result::{SearchResult, SearchStatistics};
use crate::search::SearchAlgorithm;
use crate::semantics::check::check_detailed;
use crate::semantics::cost::program_cost;
use crate::semantics::node::Node;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Sequential brute-force search
#[derive(Debug)]
pub struct EnumerativeSearch {
    statistics: SearchStatistics,
}

impl EnumerativeSearch {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::new(Algorithm::Enumerative),
        }
    }
}

impl Default for EnumerativeSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAlgorithm for EnumerativeSearch {
    fn search(&mut self, node: &Node, expected: &[i32], config: &Config) -> SearchResult {
        self.reset();
        let start_time = Instant::now();

        let template = node.fresh();
        let mut programs = ProgramIterator::new(config.alphabet());
        debug!(
            alphabet = programs.alphabet().len(),
            space = search_space_size(programs.alphabet().len(), config.maximum_program_length),
            "starting enumerative search"
        );

        let mut found: Option<Program> = None;
        let mut explored_length: Option<usize> = None;
        while programs.length() <= config.maximum_program_length {
            let Some(candidate) = programs.next() else {
                break;
            };
            if explored_length != Some(candidate.len()) {
                debug!(length = candidate.len(), "exploring programs");
                explored_length = Some(candidate.len());
            }

            let result =
                check_detailed(&template, candidate.clone(), expected, config.maximum_cycle);
            self.statistics.record(candidate.len(), &result);

            if result.is_accepted() {
                found = Some(candidate);
                break;
            }
            trace!(candidate = %candidate, ?result, "rejected");
        }

        self.statistics.elapsed_time = start_time.elapsed();
        match found {
            Some(program) => {
                let cost = program_cost(&program, &config.cost_metric);
                self.statistics.best_cost_found = Some(cost);
                info!(
                    length = program.len(),
                    cost,
                    candidates = self.statistics.candidates_evaluated,
                    "found program"
                );
                SearchResult::found(program, self.statistics.clone())
            }
            None => {
                info!(
                    candidates = self.statistics.candidates_evaluated,
                    "search space exhausted"
                );
                SearchResult::not_found(self.statistics.clone())
            }
        }
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Algorithm::Enumerative);
    }
}

/// Find the shortest program that makes `node` write `expected` to its down
/// port, or `None` when no program within `config`'s bounds does.
pub fn optimize(node: &Node, expected: &[i32], config: &Config) -> Option<Program> {
    EnumerativeSearch::new().search(node, expected, config).program
}
