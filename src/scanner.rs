use std::str::{FromStr, SplitAsciiWhitespace};

use crate::error::{Error, Result};

/// Upper bound on any record count read from the input.
pub const MAX_COUNT: usize = 1000;

/// How to treat input that ends before the declared number of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Running out of tokens is an error.
    #[default]
    Strict,
    /// Missing values read as `T::default()`.
    Lenient,
}

/// Whitespace-delimited token reader over the whole of stdin.
pub struct Scanner<'a> {
    tokens: SplitAsciiWhitespace<'a>,
    mode: Mode,
    missing: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, mode: Mode) -> Self {
        Self {
            tokens: input.split_ascii_whitespace(),
            mode,
            missing: 0,
        }
    }

    pub fn token(&mut self, expected: &'static str) -> Result<&'a str> {
        self.tokens.next().ok_or(Error::UnexpectedEof { expected })
    }

    /// Next token, or `""` once the input is exhausted.
    pub fn token_or_empty(&mut self) -> &'a str {
        self.tokens.next().unwrap_or("")
    }

    pub fn value<T>(&mut self, expected: &'static str) -> Result<T>
    where
        T: FromStr + Default,
    {
        let token = match (self.tokens.next(), self.mode) {
            (Some(token), _) => token,
            (None, Mode::Lenient) => {
                if self.missing == 0 {
                    tracing::warn!(expected, "input exhausted, using default values");
                }
                self.missing += 1;
                return Ok(T::default());
            }
            (None, Mode::Strict) => return Err(Error::UnexpectedEof { expected }),
        };
        token.parse().map_err(|_| Error::Malformed {
            expected,
            token: token.to_owned(),
        })
    }

    /// Reads a declared record count, at most [`MAX_COUNT`].
    pub fn count(&mut self, expected: &'static str) -> Result<usize> {
        let count = self.value(expected)?;
        if count > MAX_COUNT {
            return Err(Error::CountTooLarge { expected, count });
        }
        Ok(count)
    }

    /// Reads a bounded sequence of `count` values.
    pub fn values<T>(&mut self, count: usize, expected: &'static str) -> Result<Vec<T>>
    where
        T: FromStr + Default,
    {
        (0..count).map(|_| self.value(expected)).collect()
    }

    /// Number of values that were filled in with defaults.
    pub fn missing(&self) -> usize {
        self.missing
    }

    pub fn finish(self) {
        let left = self.tokens.count();
        if left > 0 {
            tracing::debug!(left, "ignoring trailing input tokens");
        }
    }
}
