use crate::{
    error::{Error, Result},
    output::Answer,
    scanner::Scanner,
};

pub fn main(scanner: &mut Scanner) -> Result<Answer> {
    let n = scanner.count("participant count")?;
    let k: usize = scanner.value("place k")?;
    let scores: Vec<i64> = scanner.values(n, "score")?;
    if k == 0 || k > n {
        return Err(Error::Malformed {
            expected: "place k between 1 and n",
            token: k.to_string(),
        });
    }
    Ok(Answer::Int(solve(&scores, k) as i64))
}

/// Counts participants scoring at least the k-th place score and more than zero.
///
/// `k` is 1-based and must be within `1..=scores.len()`.
pub fn solve(scores: &[i64], k: usize) -> usize {
    let mut sorted = scores.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let threshold = sorted[k - 1];
    sorted
        .iter()
        .filter(|&&score| score >= threshold && score > 0)
        .count()
}
