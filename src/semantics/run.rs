//! Driving a node until it halts

use crate::ir::Instruction;
use crate::semantics::node::Node;
use std::fmt;
use thiserror::Error;

/// Budget for `Node::run`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// Stop with a timeout after this many executed instructions
    Maximum(u32),
    /// Run until the program ends or a read blocks
    Indefinitely,
}

impl Cycle {
    /// Whether another instruction may execute after `executed` cycles
    pub fn allows(&self, executed: u32) -> bool {
        match self {
            Cycle::Maximum(maximum) => executed < *maximum,
            Cycle::Indefinitely => true,
        }
    }
}

/// How a run terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunOutcome {
    Success,
    Deadlock,
    Timeout,
}

impl RunOutcome {
    /// Classify the result of `Node::run` or `Node::execute`
    pub fn of(result: &Result<Node, RunError>) -> Self {
        match result {
            Ok(_) => RunOutcome::Success,
            Err(error) => error.outcome(),
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Success => write!(f, "success"),
            RunOutcome::Deadlock => write!(f, "deadlock"),
            RunOutcome::Timeout => write!(f, "timeout"),
        }
    }
}

/// Abnormal run termination
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// A read from the up port found no input
    #[error("deadlock at line {pc}: `{instruction}` has no input to read")]
    Deadlock { pc: usize, instruction: Instruction },

    /// The cycle budget ran out before the program finished
    #[error("timeout after {cycles} cycles at line {pc}")]
    Timeout { cycles: u32, pc: usize },
}

impl RunError {
    pub fn outcome(&self) -> RunOutcome {
        match self {
            RunError::Deadlock { .. } => RunOutcome::Deadlock,
            RunError::Timeout { .. } => RunOutcome::Timeout,
        }
    }
}

impl Node {
    /// Execute the loaded program from the current program counter.
    ///
    /// Returns the halted node once the program counter passes the last
    /// instruction. A node without a program halts immediately.
    pub fn run(&self, cycle: Cycle) -> Result<Node, RunError> {
        let mut node = self.clone();
        let mut executed: u32 = 0;

        while let Some(instruction) = node.current_instruction() {
            if !cycle.allows(executed) {
                return Err(RunError::Timeout {
                    cycles: executed,
                    pc: node.pc(),
                });
            }
            node = node.execute(instruction)?;
            executed += 1;
        }

        Ok(node)
    }
}
