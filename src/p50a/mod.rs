use crate::{error::Result, output::Answer, scanner::Scanner};

pub fn main(scanner: &mut Scanner) -> Result<Answer> {
    let m: u32 = scanner.value("board width")?;
    let n: u32 = scanner.value("board height")?;
    Ok(Answer::Int(solve(m, n) as i64))
}

/// Maximum number of 2x1 dominoes that fit on an `m` x `n` board.
pub fn solve(m: u32, n: u32) -> u64 {
    u64::from(m) * u64::from(n) / 2
}
