//! Operand types for the TIS-100 node IR

use std::fmt;

/// Registers addressable by an instruction operand
///
/// `BAK` is deliberately absent: the backup register is only reachable
/// through `SWP` and `SAV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Register {
    /// Reads as zero, writes are discarded
    NIL,
    /// The accumulator
    ACC,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::NIL => write!(f, "NIL"),
            Register::ACC => write!(f, "ACC"),
        }
    }
}

/// Value-producing operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The node's up port
    Port,
    Register(Register),
    Literal(i32),
}

impl Source {
    /// True if reading this source can block
    pub fn is_port(&self) -> bool {
        matches!(self, Source::Port)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Port => write!(f, "UP"),
            Source::Register(reg) => write!(f, "{}", reg),
            Source::Literal(value) => write!(f, "{}", value),
        }
    }
}

/// Value-consuming operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The node's down port
    Port,
    Register(Register),
}

impl Destination {
    pub fn is_port(&self) -> bool {
        matches!(self, Destination::Port)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Port => write!(f, "DOWN"),
            Destination::Register(reg) => write!(f, "{}", reg),
        }
    }
}
