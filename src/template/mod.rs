//! Skeleton for problems with several test cases per input.

use crate::{error::Result, output::Answer, scanner::Scanner};

pub fn main(scanner: &mut Scanner) -> Result<Answer> {
    let cases = scanner.count("test case count")?;
    for case in 0..cases {
        solve(case, scanner)?;
    }
    Ok(Answer::Empty)
}

/// Handles a single test case. Does nothing yet.
pub fn solve(case: usize, _scanner: &mut Scanner) -> Result<()> {
    tracing::trace!(case, "test case");
    Ok(())
}
