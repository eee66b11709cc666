// tr-normalize: Normalize Turkish text from stdin or a file.
//
// Reads lines of text and prints each line after the full normalization
// pipeline: numbers, ordinals, times, symbols, units, suffix merging,
// lowercasing and punctuation stripping.
//
// Usage:
//   tr-normalize [OPTIONS] [FILE]
//
// Options:
//   -c, --context FILE   Context file, paired line by line (suffix merging
//                        then only runs when both sides disagree)
//   -h, --help           Print help
//
// With no FILE (or with `-`), reads from stdin.

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (context_path, args) = trnorm_cli::parse_option(&args, "--context", "-c");

    if trnorm_cli::wants_help(&args) {
        println!("tr-normalize: Normalize Turkish text from stdin or a file.");
        println!();
        println!("Usage: tr-normalize [OPTIONS] [FILE]");
        println!();
        println!("Reads lines of text and prints each normalized line.");
        println!("With no FILE (or with `-`), reads from stdin.");
        println!();
        println!("Options:");
        println!("  -c, --context FILE   Context file, paired line by line");
        println!("  -h, --help           Print this help");
        return;
    }

    let input_path = args.first().map(String::as_str).unwrap_or("-");
    let lines = trnorm_cli::read_lines(input_path).unwrap_or_else(|e| trnorm_cli::fatal(&e));

    let contexts = match context_path {
        Some(path) => {
            let context_lines =
                trnorm_cli::read_lines(&path).unwrap_or_else(|e| trnorm_cli::fatal(&e));
            if context_lines.len() != lines.len() {
                trnorm_cli::fatal(&format!(
                    "context line count ({}) does not match input line count ({})",
                    context_lines.len(),
                    lines.len()
                ));
            }
            Some(context_lines)
        }
        None => None,
    };

    let normalized = trnorm::normalize_batch(&lines, contexts.as_deref());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in &normalized {
        let _ = writeln!(out, "{line}");
    }
}
