use std::cmp::Ordering;

use crate::{error::Result, output::Answer, scanner::Scanner};

pub fn main(scanner: &mut Scanner) -> Result<Answer> {
    let first = scanner.token("first string")?;
    let second = scanner.token("second string")?;
    Ok(Answer::Int(solve(first, second)))
}

/// Case-insensitive lexicographic comparison, as -1, 0 or 1.
pub fn solve(first: &str, second: &str) -> i64 {
    let lower = |s: &str| s.to_ascii_lowercase();
    match lower(first).cmp(&lower(second)) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples() {
        assert_eq!(solve("aaaa", "aaaA"), 0);
        assert_eq!(solve("abs", "Abz"), -1);
        assert_eq!(solve("abcdefg", "AbCdEfF"), 1);
    }

    #[test]
    fn ignores_case() {
        assert_eq!(solve("AbC", "aBc"), 0);
    }

    #[test]
    fn antisymmetric_and_reflexive() {
        let words = ["a", "B", "ab", "AB", "abc", "zz", "Zy", ""];
        for a in words {
            assert_eq!(solve(a, a), 0);
            for b in words {
                assert_eq!(solve(a, b), -solve(b, a), "{:?} vs {:?}", a, b);
            }
        }
    }
}
