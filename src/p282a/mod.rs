use std::fmt;

use crate::{error::Result, output::Answer, scanner::Scanner};

/// Printed in place of the value of x when the programme is invalid.
pub const SENTINEL: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    UnknownStatement(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownStatement(s) => write!(f, "unknown statement {:?}", s),
        }
    }
}

impl std::error::Error for ScriptError {}

pub fn main(scanner: &mut Scanner) -> Result<Answer> {
    let n = scanner.count("statement count")?;
    let statements: Vec<String> = scanner.values(n, "statement")?;
    match solve(&statements) {
        Ok(x) => Ok(Answer::Int(x)),
        Err(e) => {
            tracing::warn!(error = %e, "rejecting Bit++ programme");
            Ok(Answer::Rejected {
                message: "Invalid statement",
                sentinel: SENTINEL,
            })
        }
    }
}

/// Runs a Bit++ programme starting from x = 0.
pub fn solve<S: AsRef<str>>(statements: &[S]) -> std::result::Result<i64, ScriptError> {
    statements.iter().try_fold(0, |x, statement| {
        match statement.as_ref() {
            "++X" | "X++" => Ok(x + 1),
            "--X" | "X--" => Ok(x - 1),
            other => Err(ScriptError::UnknownStatement(other.to_owned())),
        }
    })
}
