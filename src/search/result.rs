//! Search result types and statistics

use crate::ir::Program;
use crate::search::config::Algorithm;
use crate::semantics::check::CheckResult;
use crate::semantics::run::RunError;
use std::time::Duration;

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The first accepted program, `None` when the bounds were exhausted
    pub program: Option<Program>,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchResult {
    pub fn found(program: Program, statistics: SearchStatistics) -> Self {
        Self {
            program: Some(program),
            statistics,
        }
    }

    pub fn not_found(statistics: SearchStatistics) -> Self {
        Self {
            program: None,
            statistics,
        }
    }

    pub fn is_found(&self) -> bool {
        self.program.is_some()
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStatistics {
    /// Algorithm used for the search
    pub algorithm: Algorithm,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of candidates run on the node
    pub candidates_evaluated: u64,
    /// Candidates that halted with the expected output
    pub accepted: u64,
    /// Candidates that blocked on an empty up port
    pub deadlocks: u64,
    /// Candidates that exceeded the cycle budget
    pub timeouts: u64,
    /// Candidates that halted with a different output
    pub wrong_outputs: u64,
    /// Length of the longest candidate evaluated
    pub longest_length: usize,
    /// Cost of the accepted program under the configured metric
    pub best_cost_found: Option<u64>,
}

impl SearchStatistics {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Count one evaluated candidate of `length` instructions
    pub fn record(&mut self, length: usize, result: &CheckResult) {
        self.candidates_evaluated += 1;
        self.longest_length = self.longest_length.max(length);
        match result {
            CheckResult::Accepted => self.accepted += 1,
            CheckResult::WrongOutput { .. } => self.wrong_outputs += 1,
            CheckResult::Rejected(RunError::Deadlock { .. }) => self.deadlocks += 1,
            CheckResult::Rejected(RunError::Timeout { .. }) => self.timeouts += 1,
        }
    }

    /// Fold another worker's counters into these
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.candidates_evaluated += other.candidates_evaluated;
        self.accepted += other.accepted;
        self.deadlocks += other.deadlocks;
        self.timeouts += other.timeouts;
        self.wrong_outputs += other.wrong_outputs;
        self.longest_length = self.longest_length.max(other.longest_length);
    }

    /// Candidates rejected for any reason
    pub fn rejected(&self) -> u64 {
        self.deadlocks + self.timeouts + self.wrong_outputs
    }

    /// Get candidates evaluated per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.candidates_evaluated as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Algorithm: {}\n", self.algorithm));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!(
            "Candidates evaluated: {}\n",
            self.candidates_evaluated
        ));
        s.push_str(&format!(
            "Throughput: {:.0} candidates/sec\n",
            self.throughput()
        ));
        s.push_str(&format!("Longest length explored: {}\n", self.longest_length));
        s.push_str(&format!(
            "Rejected: {} (deadlock {}, timeout {}, wrong output {})\n",
            self.rejected(),
            self.deadlocks,
            self.timeouts,
            self.wrong_outputs
        ));
        if let Some(cost) = self.best_cost_found {
            s.push_str(&format!("Best cost found: {}\n", cost));
        }
        s
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.program {
            Some(ref program) => {
                writeln!(f, "Found program ({} instructions):", program.len())?;
                for instr in program {
                    writeln!(f, "  {}", instr)?;
                }
            }
            None => writeln!(f, "Could not find a program within the bounds")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Destination, Instruction, Source};

    fn copy_program() -> Program {
        Program::new(vec![Instruction::MOV(Source::Port, Destination::Port)])
    }

    #[test]
    fn test_search_result_not_found() {
        let result = SearchResult::not_found(SearchStatistics::default());

        assert!(!result.is_found());
        assert_eq!(
            format!("{}", result),
            "Could not find a program within the bounds\n"
        );
    }

    #[test]
    fn test_search_result_found() {
        let result = SearchResult::found(copy_program(), SearchStatistics::default());

        assert!(result.is_found());
        assert_eq!(
            format!("{}", result),
            "Found program (1 instructions):\n  MOV UP, DOWN\n"
        );
    }

    #[test]
    fn test_statistics_record() {
        let mut stats = SearchStatistics::new(Algorithm::Enumerative);
        stats.record(0, &CheckResult::WrongOutput { actual: vec![] });
        stats.record(
            1,
            &CheckResult::Rejected(RunError::Deadlock {
                pc: 0,
                instruction: Instruction::ADD(Source::Port),
            }),
        );
        stats.record(2, &CheckResult::Rejected(RunError::Timeout { cycles: 1, pc: 1 }));
        stats.record(2, &CheckResult::Accepted);

        assert_eq!(stats.candidates_evaluated, 4);
        assert_eq!(stats.rejected(), 3);
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.longest_length, 2);
    }

    #[test]
    fn test_statistics_merge() {
        let mut total = SearchStatistics::new(Algorithm::Parallel);
        let mut worker = SearchStatistics::default();
        worker.candidates_evaluated = 10;
        worker.timeouts = 4;
        worker.longest_length = 3;

        total.merge(&worker);
        total.merge(&worker);

        assert_eq!(total.candidates_evaluated, 20);
        assert_eq!(total.timeouts, 8);
        assert_eq!(total.longest_length, 3);
        assert_eq!(total.algorithm, Algorithm::Parallel);
    }

    #[test]
    fn test_statistics_throughput() {
        let mut stats = SearchStatistics::default();
        stats.candidates_evaluated = 10000;
        stats.elapsed_time = Duration::from_secs(10);

        assert!((stats.throughput() - 1000.0).abs() < 1e-10);
        assert_eq!(SearchStatistics::default().throughput(), 0.0);
    }

    #[test]
    fn test_format_summary() {
        let mut stats = SearchStatistics::new(Algorithm::Enumerative);
        stats.best_cost_found = Some(1);

        let summary = stats.format_summary();

        assert!(summary.contains("Algorithm: enumerative"));
        assert!(summary.contains("Best cost found: 1"));
    }
}
