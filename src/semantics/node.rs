//! The TIS-100 execution node
//!
//! A `Node` holds the accumulator (ACC), the backup register (BAK), a
//! program counter and two ports. Executing an instruction never mutates the
//! node; it returns the next state.
//!
//! ```
//! use tis_superoptimizer::ir::{Destination, Instruction, Register, Source};
//! use tis_superoptimizer::semantics::Node;
//!
//! let last = Node::new()
//!     .execute(Instruction::MOV(Source::Literal(1), Destination::Register(Register::ACC)))
//!     .and_then(|node| node.execute(Instruction::ADD(Source::Register(Register::ACC))))
//!     .unwrap();
//! assert_eq!(last.acc(), 2);
//! ```

use crate::ir::{Destination, Instruction, Program, Register, Source};
use crate::semantics::port::Port;
use crate::semantics::run::RunError;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    acc: i32,
    bac: i32,
    pc: usize,
    up: Port,
    down: Port,
    program: Option<Arc<Program>>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node with preset registers
    pub fn with(acc: i32, bac: i32) -> Self {
        Self {
            acc,
            bac,
            ..Self::default()
        }
    }

    /// Attach `program` and reset the program counter
    pub fn load(&self, program: Program) -> Node {
        Node {
            pc: 0,
            program: Some(Arc::new(program)),
            ..self.clone()
        }
    }

    pub fn set_up(&self, up: Port) -> Node {
        Node {
            up,
            ..self.clone()
        }
    }

    pub fn set_down(&self, down: Port) -> Node {
        Node {
            down,
            ..self.clone()
        }
    }

    /// A pristine node reading the same pending input: registers and program
    /// counter zeroed, no program, empty down port log.
    pub fn fresh(&self) -> Node {
        Node {
            up: self.up.clone(),
            down: self.down.cleared(),
            ..Node::default()
        }
    }

    pub fn acc(&self) -> i32 {
        self.acc
    }

    pub fn bac(&self) -> i32 {
        self.bac
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn up(&self) -> &Port {
        &self.up
    }

    pub fn down(&self) -> &Port {
        &self.down
    }

    pub fn program(&self) -> Option<&Program> {
        self.program.as_deref()
    }

    /// The instruction at the program counter, `None` once the program ended
    pub fn current_instruction(&self) -> Option<Instruction> {
        self.program
            .as_ref()
            .and_then(|program| program.get(self.pc))
            .copied()
    }

    /// Execute a single instruction and advance the program counter.
    ///
    /// Fails with `RunError::Deadlock` when the instruction reads the up port
    /// and no input is available.
    pub fn execute(&self, instruction: Instruction) -> Result<Node, RunError> {
        let next = match instruction {
            Instruction::NOP => self.clone(),
            Instruction::MOV(source, destination) => {
                let (node, value) = self.read(source, instruction)?;
                node.write(destination, value)
            }
            Instruction::SWP => Node {
                acc: self.bac,
                bac: self.acc,
                ..self.clone()
            },
            Instruction::SAV => Node {
                bac: self.acc,
                ..self.clone()
            },
            Instruction::ADD(source) => {
                let (mut node, value) = self.read(source, instruction)?;
                node.acc = node.acc.saturating_add(value);
                node
            }
            Instruction::SUB(source) => {
                let (mut node, value) = self.read(source, instruction)?;
                node.acc = node.acc.saturating_sub(value);
                node
            }
        };

        Ok(Node {
            pc: next.pc + 1,
            ..next
        })
    }

    /// Evaluate a source operand. Reading the port yields the node with
    /// that value consumed.
    fn read(&self, source: Source, instruction: Instruction) -> Result<(Node, i32), RunError> {
        match source {
            Source::Port => match self.up.read() {
                Some((up, value)) => Ok((self.set_up(up), value)),
                None => Err(RunError::Deadlock {
                    pc: self.pc,
                    instruction,
                }),
            },
            Source::Register(Register::NIL) => Ok((self.clone(), 0)),
            Source::Register(Register::ACC) => Ok((self.clone(), self.acc)),
            Source::Literal(value) => Ok((self.clone(), value)),
        }
    }

    fn write(self, destination: Destination, value: i32) -> Node {
        match destination {
            Destination::Port => Node {
                down: self.down.write(value),
                ..self
            },
            Destination::Register(Register::NIL) => self,
            Destination::Register(Register::ACC) => Node { acc: value, ..self },
        }
    }
}
