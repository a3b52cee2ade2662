//! Iteration over `Program`s in order of increasing size
//!
//! Programs come out shortest first. Programs of equal length are ordered
//! lexicographically by the position of their instructions in the alphabet,
//! so the first accepted program is always a shortest one.

use crate::ir::{Instruction, Program};
use crate::search::candidate::generate_all_instructions;
use crate::search::config::DEFAULT_LITERALS;

/// Infinite iterator over every program built from an instruction alphabet.
///
/// The empty program comes first. With an empty alphabet that is also the
/// only program.
#[derive(Debug, Clone)]
pub struct ProgramIterator {
    alphabet: Vec<Instruction>,
    digits: Vec<usize>,
    rank: u64,
    finished: bool,
}

impl ProgramIterator {
    pub fn new(alphabet: Vec<Instruction>) -> Self {
        Self {
            alphabet,
            digits: Vec::new(),
            rank: 0,
            finished: false,
        }
    }

    pub fn alphabet(&self) -> &[Instruction] {
        &self.alphabet
    }

    /// Length of the program the next call to `next` returns
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Position of the next program in the full enumeration
    pub fn rank(&self) -> u64 {
        self.rank
    }

    /// Pass over the next `count` programs without building them
    pub fn skip_ahead(&mut self, count: usize) {
        for _ in 0..count {
            if self.finished {
                return;
            }
            self.advance();
            self.rank += 1;
        }
    }

    /// Step the odometer: rightmost digit first, growing by one instruction
    /// once every digit wrapped.
    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.alphabet.len() {
                return;
            }
            *digit = 0;
        }

        if self.alphabet.is_empty() {
            self.finished = true;
        } else {
            self.digits.push(0);
        }
    }
}

impl Default for ProgramIterator {
    fn default() -> Self {
        Self::new(generate_all_instructions(&DEFAULT_LITERALS))
    }
}

impl Iterator for ProgramIterator {
    type Item = Program;

    fn next(&mut self) -> Option<Program> {
        if self.finished {
            return None;
        }

        let program = self
            .digits
            .iter()
            .map(|&digit| self.alphabet[digit])
            .collect();
        self.advance();
        self.rank += 1;
        Some(program)
    }
}

/// Number of programs with at most `maximum_length` instructions over an
/// alphabet of `alphabet_size`, saturating at `u64::MAX`.
pub fn search_space_size(alphabet_size: usize, maximum_length: usize) -> u64 {
    let base = alphabet_size as u64;
    let mut total: u64 = 0;
    let mut of_length: u64 = 1;
    for _ in 0..=maximum_length {
        total = total.saturating_add(of_length);
        of_length = of_length.saturating_mul(base);
    }
    total
}
