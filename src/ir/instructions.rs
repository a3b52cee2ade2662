//! TIS-100 instruction definitions for the IR

use crate::ir::types::{Destination, Register, Source};
use std::fmt;

/// Instructions executed by a `Node`
///
/// The subset has no jumps, so a program always runs straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    NOP,
    MOV(Source, Destination),
    /// Exchange ACC and BAK
    SWP,
    /// Copy ACC into BAK
    SAV,
    ADD(Source),
    SUB(Source),
}

impl Instruction {
    /// Source operand read by this instruction, if any
    pub fn source(&self) -> Option<Source> {
        match self {
            Instruction::MOV(source, _) | Instruction::ADD(source) | Instruction::SUB(source) => {
                Some(*source)
            }
            Instruction::NOP | Instruction::SWP | Instruction::SAV => None,
        }
    }

    /// Destination operand written by this instruction, if any
    pub fn destination(&self) -> Option<Destination> {
        match self {
            Instruction::MOV(_, destination) => Some(*destination),
            _ => None,
        }
    }

    /// Returns true if this instruction consumes a value from the up port
    pub fn reads_port(&self) -> bool {
        self.source().is_some_and(|source| source.is_port())
    }

    /// Returns true if this instruction appends to the down port
    pub fn writes_port(&self) -> bool {
        self.destination().is_some_and(|destination| destination.is_port())
    }

    /// Returns true if executing this instruction can never change node state
    /// other than the program counter.
    pub fn is_redundant(&self) -> bool {
        const NIL: Source = Source::Register(Register::NIL);
        const ACC: Source = Source::Register(Register::ACC);

        match self {
            Instruction::NOP => true,
            Instruction::MOV(Source::Port, _) => false,
            Instruction::MOV(_, Destination::Register(Register::NIL)) => true,
            Instruction::MOV(ACC, Destination::Register(Register::ACC)) => true,
            Instruction::MOV(_, _) => false,
            Instruction::ADD(NIL | Source::Literal(0)) => true,
            Instruction::SUB(NIL | Source::Literal(0)) => true,
            Instruction::ADD(_) | Instruction::SUB(_) => false,
            Instruction::SWP | Instruction::SAV => false,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::NOP => write!(f, "NOP"),
            Instruction::MOV(source, destination) => write!(f, "MOV {}, {}", source, destination),
            Instruction::SWP => write!(f, "SWP"),
            Instruction::SAV => write!(f, "SAV"),
            Instruction::ADD(source) => write!(f, "ADD {}", source),
            Instruction::SUB(source) => write!(f, "SUB {}", source),
        }
    }
}
