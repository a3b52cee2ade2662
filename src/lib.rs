//! Emulator and brute-force superoptimizer for a single TIS-100 node
//!
//! A node reads integers from its up port, writes integers to its down port,
//! and holds two registers (`ACC` and the backup `BAK`). The optimizer
//! enumerates straight-line programs shortest first and returns the first
//! one whose output matches the expected sequence.

pub mod ir;
pub mod parser;
pub mod problem;
pub mod search;
pub mod semantics;

pub use ir::{Destination, Instruction, Program, Register, Source};
pub use problem::Problem;
pub use search::{Config, optimize};
pub use semantics::{Node, Port, check};
