use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

mod error;
mod output;
mod scanner;

mod p112a;
mod p158a;
mod p231a;
mod p263a;
mod p281a;
mod p282a;
mod p339a;
mod p50a;
mod template;

use output::{Answer, Format};
use scanner::{Mode, Scanner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Problem {
    #[value(name = "50a")]
    P50A,
    #[value(name = "112a")]
    P112A,
    #[value(name = "158a")]
    P158A,
    #[value(name = "231a")]
    P231A,
    #[value(name = "263a")]
    P263A,
    #[value(name = "281a")]
    P281A,
    #[value(name = "282a")]
    P282A,
    #[value(name = "339a")]
    P339A,
    Template,
}

impl Problem {
    fn id(self) -> &'static str {
        match self {
            Problem::P50A => "50A",
            Problem::P112A => "112A",
            Problem::P158A => "158A",
            Problem::P231A => "231A",
            Problem::P263A => "263A",
            Problem::P281A => "281A",
            Problem::P282A => "282A",
            Problem::P339A => "339A",
            Problem::Template => "template",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Problem::P50A => "Domino piling",
            Problem::P112A => "Petya and Strings",
            Problem::P158A => "Next Round",
            Problem::P231A => "Team",
            Problem::P263A => "Beautiful Matrix",
            Problem::P281A => "Word Capitalization",
            Problem::P282A => "Bit++",
            Problem::P339A => "Helpful Maths",
            Problem::Template => "Multi-test template",
        }
    }

    fn run(self, scanner: &mut Scanner) -> error::Result<Answer> {
        match self {
            Problem::P50A => p50a::main(scanner),
            Problem::P112A => p112a::main(scanner),
            Problem::P158A => p158a::main(scanner),
            Problem::P231A => p231a::main(scanner),
            Problem::P263A => p263a::main(scanner),
            Problem::P281A => p281a::main(scanner),
            Problem::P282A => p282a::main(scanner),
            Problem::P339A => p339a::main(scanner),
            Problem::Template => template::main(scanner),
        }
    }
}

/// Solutions to Codeforces problems, reading stdin and writing the answer to stdout.
#[derive(Parser)]
#[command(name = "codeforces", version, long_about = None)]
struct Cli {
    /// Problem to solve, e.g. 263A
    #[arg(ignore_case = true, required_unless_present = "list")]
    problem: Option<Problem>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Read missing input values as zero / empty instead of failing.
    /// A 263A grid still needs a cell marked with 1
    #[arg(long)]
    lenient: bool,

    /// List the available problems and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let Some(problem) = cli.problem.filter(|_| !cli.list) else {
        for problem in Problem::value_variants() {
            writeln!(out, "{:<9} {}", problem.id(), problem.title())?;
        }
        out.flush()?;
        return Ok(());
    };

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let mode = if cli.lenient { Mode::Lenient } else { Mode::Strict };
    let mut scanner = Scanner::new(&input, mode);
    let answer = problem
        .run(&mut scanner)
        .with_context(|| format!("cannot solve {} ({})", problem.id(), problem.title()))?;
    let missing = scanner.missing();
    scanner.finish();
    tracing::debug!(problem = problem.id(), missing, ?answer, "solved");

    output::write_answer(&mut out, problem.id(), &answer, cli.format)?;
    out.flush()?;
    Ok(())
}
