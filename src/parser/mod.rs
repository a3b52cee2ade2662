//! Assembly text parser for TIS-100 node programs
//!
//! One instruction per line, mnemonics and operands case-insensitive,
//! operands separated by commas or whitespace. `#` starts a comment.
//!
//! ```text
//! MOV UP, ACC   # read
//! ADD ACC
//! MOV ACC, DOWN
//! ```

use std::fmt;
use std::path::Path;

use crate::ir::{Destination, Instruction, Program, Register, Source};

/// Parse error with location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line_number: usize,
    pub message: String,
    pub line_content: String,
}

impl ParseError {
    pub fn new(
        line_number: usize,
        message: impl Into<String>,
        line_content: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            message: message.into(),
            line_content: line_content.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {}\n  | {}",
            self.line_number, self.message, self.line_content
        )
    }
}

impl std::error::Error for ParseError {}

/// Result of parsing a single line
#[derive(Debug, PartialEq, Eq)]
pub enum LineResult {
    /// An instruction was parsed
    Instruction(Instruction),
    /// Line was empty or a comment (skip it)
    Skip,
}

/// Parse a register name (case-insensitive)
pub fn parse_register(s: &str) -> Result<Register, String> {
    match s.to_uppercase().as_str() {
        "NIL" => Ok(Register::NIL),
        "ACC" => Ok(Register::ACC),
        _ => Err(format!("unknown register: {}", s)),
    }
}

/// Parse a literal value (decimal, optionally signed)
pub fn parse_literal(s: &str) -> Result<i32, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty literal value".to_string());
    }
    s.parse::<i32>()
        .map_err(|e| format!("invalid literal '{}': {}", s, e))
}

/// Parse a source operand: `UP`, a register or a literal
pub fn parse_source(s: &str) -> Result<Source, String> {
    match s.to_uppercase().as_str() {
        "UP" => Ok(Source::Port),
        "DOWN" => Err("cannot read from DOWN, the node only reads UP".to_string()),
        _ => match parse_register(s) {
            Ok(reg) => Ok(Source::Register(reg)),
            Err(_) => parse_literal(s)
                .map(Source::Literal)
                .map_err(|_| format!("invalid source: {}", s)),
        },
    }
}

/// Parse a destination operand: `DOWN` or a register
pub fn parse_destination(s: &str) -> Result<Destination, String> {
    match s.to_uppercase().as_str() {
        "DOWN" => Ok(Destination::Port),
        "UP" => Err("cannot write to UP, the node only writes DOWN".to_string()),
        _ => parse_register(s)
            .map(Destination::Register)
            .map_err(|_| format!("invalid destination: {}", s)),
    }
}

/// Strip a trailing `#` comment
fn strip_comments(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Check if a line is a label definition
fn is_label(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.ends_with(':') && !trimmed.is_empty()
}

/// Split operands by commas and whitespace
fn split_operands(operands_str: &str) -> Vec<&str> {
    operands_str
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}

fn expect_operands(mnemonic: &str, operands: &[&str], count: usize) -> Result<(), String> {
    if operands.len() != count {
        return Err(format!(
            "{} requires {} operand{}, got {}",
            mnemonic,
            count,
            if count == 1 { "" } else { "s" },
            operands.len()
        ));
    }
    Ok(())
}

/// Parse one line of assembly
pub fn parse_line(line: &str) -> Result<LineResult, String> {
    let trimmed = strip_comments(line).trim();

    if trimmed.is_empty() {
        return Ok(LineResult::Skip);
    }

    if is_label(trimmed) {
        return Err("labels are not supported: programs run straight through".to_string());
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let mnemonic = parts.next().unwrap_or("").to_uppercase();
    let operands = split_operands(parts.next().unwrap_or(""));

    let instruction = match mnemonic.as_str() {
        "NOP" => {
            expect_operands("NOP", &operands, 0)?;
            Instruction::NOP
        }
        "SWP" => {
            expect_operands("SWP", &operands, 0)?;
            Instruction::SWP
        }
        "SAV" => {
            expect_operands("SAV", &operands, 0)?;
            Instruction::SAV
        }
        "MOV" => {
            expect_operands("MOV", &operands, 2)?;
            Instruction::MOV(parse_source(operands[0])?, parse_destination(operands[1])?)
        }
        "ADD" => {
            expect_operands("ADD", &operands, 1)?;
            Instruction::ADD(parse_source(operands[0])?)
        }
        "SUB" => {
            expect_operands("SUB", &operands, 1)?;
            Instruction::SUB(parse_source(operands[0])?)
        }
        _ => return Err(format!("unknown instruction: {}", mnemonic)),
    };

    Ok(LineResult::Instruction(instruction))
}

/// Parse a program file
pub fn parse_program_file(path: &Path) -> Result<Program, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ParseError::new(
            0,
            format!("failed to read file: {}", e),
            path.display().to_string(),
        )
    })?;

    parse_program(&content)
}

/// Parse program text. Text without instructions is the empty program.
pub fn parse_program(content: &str) -> Result<Program, ParseError> {
    let mut instructions = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_number = line_num + 1; // 1-indexed

        match parse_line(line) {
            Ok(LineResult::Instruction(instr)) => instructions.push(instr),
            Ok(LineResult::Skip) => {}
            Err(msg) => return Err(ParseError::new(line_number, msg, line)),
        }
    }

    Ok(Program::new(instructions))
}
