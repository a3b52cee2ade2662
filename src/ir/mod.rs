//! Intermediate Representation (IR) for TIS-100 node programs

pub mod instructions;
pub mod program;
pub mod types;

// Re-export commonly used types
pub use instructions::Instruction;
pub use program::Program;
pub use types::{Destination, Register, Source};
