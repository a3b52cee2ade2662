//! Node IO channels
//!
//! A `Port` pairs the values still waiting to be read with the log of values
//! written so far. All operations return a new `Port`, which keeps node
//! snapshots independent of each other.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Port {
    input: VecDeque<i32>,
    output: Vec<i32>,
}

impl Port {
    /// Create a port with a number of readable values
    pub fn new(input: Vec<i32>) -> Self {
        Self {
            input: input.into(),
            output: Vec::new(),
        }
    }

    /// Create a port with prescribed input and output
    pub fn with(input: Vec<i32>, output: Vec<i32>) -> Self {
        Self {
            input: input.into(),
            output,
        }
    }

    /// Whether a `read` would currently succeed
    pub fn available(&self) -> bool {
        !self.input.is_empty()
    }

    /// Read the next value. Returns the port without that value, or `None`
    /// when no input is left.
    pub fn read(&self) -> Option<(Port, i32)> {
        let value = *self.input.front()?;
        let mut next = self.clone();
        next.input.pop_front();
        Some((next, value))
    }

    /// Write to this port. Always succeeds.
    pub fn write(&self, value: i32) -> Port {
        let mut next = self.clone();
        next.output.push(value);
        next
    }

    /// Values not yet read, front first
    pub fn input(&self) -> Vec<i32> {
        self.input.iter().copied().collect()
    }

    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Values written so far, oldest first
    pub fn output(&self) -> &[i32] {
        &self.output
    }

    /// Same pending input, empty output log
    pub fn cleared(&self) -> Port {
        Self {
            input: self.input.clone(),
            output: Vec::new(),
        }
    }
}
