//! Verifies that a `Program`, run on a given `Node`, reads its input from the
//! up port and writes exactly the expected sequence to the down port.

use crate::ir::Program;
use crate::semantics::node::Node;
use crate::semantics::run::{Cycle, RunError};

/// Result of checking a program against an expected output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// The run halted and wrote the expected output
    Accepted,
    /// The run halted but wrote something else
    WrongOutput { actual: Vec<i32> },
    /// The run deadlocked or timed out
    Rejected(RunError),
}

impl CheckResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CheckResult::Accepted)
    }
}

/// Checks if `node` running `program` writes `expected` to the down port
/// within `maximum_cycle` cycles.
pub fn check(node: &Node, program: Program, expected: &[i32], maximum_cycle: u32) -> bool {
    check_detailed(node, program, expected, maximum_cycle).is_accepted()
}

/// Like `check`, but reports why a program was rejected
pub fn check_detailed(
    node: &Node,
    program: Program,
    expected: &[i32],
    maximum_cycle: u32,
) -> CheckResult {
    match node.load(program).run(Cycle::Maximum(maximum_cycle)) {
        Ok(halted) if halted.down().output() == expected => CheckResult::Accepted,
        Ok(halted) => CheckResult::WrongOutput {
            actual: halted.down().output().to_vec(),
        },
        Err(error) => CheckResult::Rejected(error),
    }
}
