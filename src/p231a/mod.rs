use crate::{error::Result, output::Answer, scanner::Scanner};

/// Confidence of Petya, Vasya and Tonya in one problem.
pub type Confidences = (i64, i64, i64);

pub fn main(scanner: &mut Scanner) -> Result<Answer> {
    let n = scanner.count("problem count")?;
    let mut problems = Vec::new();
    for _ in 0..n {
        let a = scanner.value("confidence")?;
        let b = scanner.value("confidence")?;
        let c = scanner.value("confidence")?;
        problems.push((a, b, c));
    }
    Ok(Answer::Int(solve(&problems) as i64))
}

/// Number of problems at least two of the friends are sure about.
pub fn solve(problems: &[Confidences]) -> usize {
    problems
        .iter()
        .filter(|(a, b, c)| a + b + c >= 2)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn samples() {
        assert_eq!(solve(&[(1, 1, 0), (1, 1, 1), (1, 0, 0)]), 2);
        assert_eq!(solve(&[(1, 0, 0), (0, 1, 1)]), 1);
    }

    #[test]
    fn declared_count_beyond_input() {
        let mut scanner = Scanner::new("5\n1 1 0\n", Default::default());
        assert!(matches!(
            main(&mut scanner),
            Err(Error::UnexpectedEof { .. })
        ));

        let mut scanner = Scanner::new("18446744073709551615\n1 1 0\n", Default::default());
        assert!(matches!(
            main(&mut scanner),
            Err(Error::CountTooLarge { .. })
        ));
    }

    #[test]
    fn threshold() {
        assert_eq!(solve(&[(0, 0, 0)]), 0);
        assert_eq!(solve(&[(1, 0, 1), (0, 1, 1), (1, 1, 0)]), 3);
        assert_eq!(solve(&[]), 0);
    }
}
