use crate::{error::Result, output::Answer, scanner::Scanner};

pub fn main(scanner: &mut Scanner) -> Result<Answer> {
    Ok(Answer::Text(solve(scanner.token_or_empty())))
}

pub fn solve(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
