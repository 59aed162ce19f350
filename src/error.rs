//! Fatal, user-facing errors.
//!
//! Per-combination failures (degenerate, infeasible, over tolerance) are never
//! errors; they are filtering outcomes inside `fit::search`. Everything here
//! aborts the run and maps to a process exit code:
//!
//! - 1: input file missing or unreadable
//! - 2: invalid arguments or malformed input
//! - 3: capacity limit exceeded
//! - 4: export failure

use crate::io::ingest::ParseError;

pub const EXIT_INPUT: u8 = 1;
pub const EXIT_INVALID: u8 = 2;
pub const EXIT_CAPACITY: u8 = 3;
pub const EXIT_EXPORT: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        let exit_code = if err.is_capacity() {
            EXIT_CAPACITY
        } else {
            EXIT_INVALID
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
