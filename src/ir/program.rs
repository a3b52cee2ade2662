//! Straight-line programs

use crate::ir::Instruction;
use std::fmt;
use std::ops::Index;

/// An immutable, ordered sequence of instructions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Program(Vec<Instruction>);

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Program(instructions)
    }

    /// The empty program, which halts immediately
    pub fn empty() -> Self {
        Program(Vec::new())
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.0.iter()
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Instruction {
        &self.0[index]
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Program(instructions)
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Program(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One instruction per line, in the syntax accepted by the parser
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, instruction) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}
