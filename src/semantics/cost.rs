//! Cost model for programs
//!
//! Besides plain instruction count, programs have a "content": a measure of
//! how complex they are, where large literals weigh more than small ones.

use crate::ir::{Destination, Instruction, Program, Source};

/// Allows one to determine the content of a construct
pub trait Content {
    fn content(&self) -> u64;
}

impl Content for Source {
    fn content(&self) -> u64 {
        match self {
            Source::Literal(value) => 1 + u64::from(value.unsigned_abs()),
            Source::Port | Source::Register(_) => 1,
        }
    }
}

impl Content for Destination {
    fn content(&self) -> u64 {
        1
    }
}

impl Content for Instruction {
    fn content(&self) -> u64 {
        match self {
            Instruction::NOP | Instruction::SWP | Instruction::SAV => 1,
            Instruction::MOV(source, destination) => 1 + source.content() + destination.content(),
            Instruction::ADD(source) | Instruction::SUB(source) => 1 + source.content(),
        }
    }
}

impl Content for Program {
    fn content(&self) -> u64 {
        self.iter().map(Content::content).sum()
    }
}

/// Cost metric for evaluating programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostMetric {
    /// Count the number of instructions (default)
    #[default]
    InstructionCount,
    /// Sum of instruction contents
    Content,
}

/// Get the cost of a single instruction
pub fn instruction_cost(instruction: &Instruction, metric: &CostMetric) -> u64 {
    match metric {
        CostMetric::InstructionCount => 1,
        CostMetric::Content => instruction.content(),
    }
}

/// Calculate the total cost of a program
pub fn program_cost(program: &Program, metric: &CostMetric) -> u64 {
    program
        .iter()
        .map(|instruction| instruction_cost(instruction, metric))
        .sum()
}

impl std::fmt::Display for CostMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostMetric::InstructionCount => write!(f, "instruction-count"),
            CostMetric::Content => write!(f, "content"),
        }
    }
}

impl std::str::FromStr for CostMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "instruction-count" | "count" | "instructions" => Ok(CostMetric::InstructionCount),
            "content" => Ok(CostMetric::Content),
            _ => Err(format!(
                "Unknown cost metric: '{}'. Valid options: instruction-count, content",
                s
            )),
        }
    }
}
