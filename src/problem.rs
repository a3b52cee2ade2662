//! Problem definitions and loading.
//!
//! A problem pairs the values placed on a node's up port with the exact
//! sequence its down port must receive. Bounds for the search are optional
//! and fall back to `Config::default()`.
//!
//! ```yaml
//! input: [0, 1, 2, 3]
//! output: [1, 5]
//! maximum_program_length: 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::config::Config;
use crate::semantics::node::Node;
use crate::semantics::port::Port;

/// Errors that can occur when loading a problem.
#[derive(Debug, Error)]
pub enum ProblemError {
    /// Failed to read the problem file.
    #[error("failed to read problem file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse the problem YAML.
    #[error("failed to parse problem YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Result type for problem operations.
pub type ProblemResult<T> = Result<T, ProblemError>;

/// Target behavior for the optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Values available on the up port.
    #[serde(default)]
    pub input: Vec<i32>,

    /// Exact sequence expected on the down port.
    pub output: Vec<i32>,

    /// Cycle budget per candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_cycle: Option<u32>,

    /// Longest program to consider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_program_length: Option<usize>,

    /// Literal operands available to candidates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literals: Option<Vec<i32>>,
}

impl Problem {
    pub fn new(input: Vec<i32>, output: Vec<i32>) -> Self {
        Self {
            input,
            output,
            maximum_cycle: None,
            maximum_program_length: None,
            literals: None,
        }
    }

    /// Load a problem from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> ProblemResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a problem from a YAML string.
    pub fn from_yaml(yaml: &str) -> ProblemResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// A fresh node with the problem input on its up port.
    pub fn node(&self) -> Node {
        Node::new().set_up(Port::new(self.input.clone()))
    }

    /// Search configuration with the bounds this problem sets.
    pub fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            maximum_cycle: self.maximum_cycle.unwrap_or(defaults.maximum_cycle),
            maximum_program_length: self
                .maximum_program_length
                .unwrap_or(defaults.maximum_program_length),
            literals: self.literals.clone().unwrap_or(defaults.literals),
            ..defaults
        }
    }
}
