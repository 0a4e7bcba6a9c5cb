use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use textpat::{Matcher, parse};

/// Search text with human-readable `[type:range:length]` patterns.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to search with
    pattern: String,

    /// Text to search; read from stdin when omitted
    text: Option<String>,

    /// Require the pattern to match the whole text
    #[arg(short, long)]
    full: bool,

    /// Stop after the first match
    #[arg(short = '1', long)]
    first: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let ast = parse(&args.pattern).context("invalid pattern")?;
    let matcher = Matcher::new(&ast);

    if args.full {
        if matcher.match_full(&text) {
            println!("match");
            return Ok(ExitCode::SUCCESS);
        }
        println!("no match");
        return Ok(ExitCode::FAILURE);
    }

    let matches = if args.first {
        matcher.find_first(&text).into_iter().collect()
    } else {
        matcher.find_all(&text)
    };

    if matches.is_empty() {
        println!("no match");
        return Ok(ExitCode::FAILURE);
    }
    for m in &matches {
        println!("{}..{}: {}", m.start, m.end, m.text);
    }
    Ok(ExitCode::SUCCESS)
}
