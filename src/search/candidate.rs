//! Instruction generation utilities for search algorithms

use crate::ir::{Destination, Instruction, Register, Source};
use crate::semantics::cost::Content;

/// Every source operand: the up port, both registers, then one literal per
/// distinct configured value.
pub fn generate_sources(literals: &[i32]) -> Vec<Source> {
    let mut sources = vec![
        Source::Port,
        Source::Register(Register::NIL),
        Source::Register(Register::ACC),
    ];
    for &value in literals {
        let literal = Source::Literal(value);
        if !sources.contains(&literal) {
            sources.push(literal);
        }
    }
    sources
}

/// Every destination operand
pub fn generate_destinations() -> [Destination; 3] {
    [
        Destination::Port,
        Destination::Register(Register::NIL),
        Destination::Register(Register::ACC),
    ]
}

/// Generate all possible instructions using the given literals, ordered by
/// content (ties keep generation order).
pub fn generate_all_instructions(literals: &[i32]) -> Vec<Instruction> {
    let sources = generate_sources(literals);
    let mut instrs = vec![Instruction::NOP, Instruction::SWP, Instruction::SAV];

    for &source in &sources {
        instrs.push(Instruction::ADD(source));
    }
    for &source in &sources {
        instrs.push(Instruction::SUB(source));
    }
    for &source in &sources {
        for destination in generate_destinations() {
            instrs.push(Instruction::MOV(source, destination));
        }
    }

    instrs.sort_by_key(|instr| instr.content());
    instrs
}

/// Generate all instructions that can change node state.
///
/// Dropping the rest never loses a shortest program: removing a redundant
/// instruction from a program leaves its output unchanged.
pub fn generate_useful_instructions(literals: &[i32]) -> Vec<Instruction> {
    generate_all_instructions(literals)
        .into_iter()
        .filter(|instr| !instr.is_redundant())
        .collect()
}
