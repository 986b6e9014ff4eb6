use crate::{error::Result, output::Answer, scanner::Scanner};

pub fn main(scanner: &mut Scanner) -> Result<Answer> {
    let sum = scanner.token("sum")?;
    Ok(Answer::Text(solve(sum)))
}

/// Rewrites the digits of `sum` in non-decreasing order joined by `+`.
pub fn solve(sum: &str) -> String {
    let mut digits: Vec<char> = sum.chars().filter(char::is_ascii_digit).collect();
    digits.sort_unstable();
    let mut out = String::with_capacity(digits.len() * 2);
    for (i, digit) in digits.into_iter().enumerate() {
        if i > 0 {
            out.push('+');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples() {
        assert_eq!(solve("3+2+1"), "1+2+3");
        assert_eq!(solve("1+1+3+1+3"), "1+1+1+3+3");
        assert_eq!(solve("2"), "2");
    }

    #[test]
    fn digits_anywhere_in_token() {
        assert_eq!(solve("3a1b2"), "1+2+3");
        assert_eq!(solve("x5y"), "5");
        assert_eq!(solve("abc"), "");
    }
}
