use std::io::{self, Write};

use serde::Serialize;
use serde_json::json;

/// The result of one run of a problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Int(i64),
    Text(String),
    /// The input was rejected; `sentinel` is printed in place of an answer.
    Rejected {
        message: &'static str,
        sentinel: i64,
    },
    /// The problem produces no output.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// One bare line per answer.
    #[default]
    Plain,
    /// One JSON object per run.
    Json,
}

pub fn write_answer<W: Write>(
    out: &mut W,
    problem: &str,
    answer: &Answer,
    format: Format,
) -> io::Result<()> {
    match format {
        Format::Plain => write_plain(out, answer),
        Format::Json => {
            let report = match answer {
                Answer::Rejected { message, sentinel } => json!({
                    "problem": problem,
                    "answer": sentinel,
                    "error": message,
                }),
                answer => json!({
                    "problem": problem,
                    "answer": answer,
                }),
            };
            serde_json::to_writer(&mut *out, &report)?;
            out.write_all(b"\n")
        }
    }
}

fn write_plain<W: Write>(out: &mut W, answer: &Answer) -> io::Result<()> {
    match answer {
        Answer::Int(n) => writeln!(out, "{}", n),
        Answer::Text(s) => writeln!(out, "{}", s),
        Answer::Rejected { message, sentinel } => writeln!(out, "{}\n{}", message, sentinel),
        Answer::Empty => Ok(()),
    }
}
