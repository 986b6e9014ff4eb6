use std::fmt;

/// Everything that can go wrong between reading stdin and producing an answer.
#[derive(Debug)]
pub enum Error {
    /// Input ended before `expected` could be read.
    UnexpectedEof { expected: &'static str },
    /// A token was present but did not describe a valid `expected`.
    Malformed {
        expected: &'static str,
        token: String,
    },
    /// A declared record count above [`crate::scanner::MAX_COUNT`].
    CountTooLarge { expected: &'static str, count: usize },
    /// The 5x5 grid contains no cell equal to 1.
    NoMarkedCell,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnexpectedEof { expected } => {
                write!(f, "input ended while reading {}", expected)
            }
            Error::Malformed { expected, token } => {
                write!(f, "expected {}, found {:?}", expected, token)
            }
            Error::CountTooLarge { expected, count } => write!(
                f,
                "{} of {} is above the limit of {}",
                expected,
                count,
                crate::scanner::MAX_COUNT
            ),
            Error::NoMarkedCell => f.write_str("grid has no cell marked with 1"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
