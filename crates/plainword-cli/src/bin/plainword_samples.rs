// plainword-samples: split a passage into sentences and append them to a
// samples file for later pipeline runs.
//
// Usage:
//   plainword-samples INPUT [--to PATH]
//
// Options:
//   --to PATH    samples file to append to (default: samples.txt)
//   -h, --help   print help

use std::fs::OpenOptions;
use std::io::Write;

fn print_help() {
    println!("plainword-samples: extract sentences from a passage into a samples file.");
    println!();
    println!("Usage: plainword-samples INPUT [--to PATH]");
    println!();
    println!("Options:");
    println!("  --to PATH    samples file to append to (default: samples.txt)");
    println!("  -h, --help   print this help");
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if plainword_cli::wants_help(&args) {
        print_help();
        return;
    }

    let to_path = plainword_cli::take_value_flag(&mut args, "--to")
        .unwrap_or_else(|| "samples.txt".to_string());
    let input = match args.first() {
        Some(path) => path.clone(),
        None => plainword_cli::fatal("an input passage file is required"),
    };

    let text = std::fs::read_to_string(&input)
        .unwrap_or_else(|e| plainword_cli::fatal(&format!("passage file {input}: {e}")));
    let sentences = plainword_cli::split_sentences(&text);
    if sentences.is_empty() {
        plainword_cli::fatal(&format!("passage file {input}: no sentences found"));
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&to_path)
        .unwrap_or_else(|e| plainword_cli::fatal(&format!("samples file {to_path}: {e}")));
    let mut out = std::io::BufWriter::new(file);
    for sentence in &sentences {
        writeln!(out, "{sentence}")
            .unwrap_or_else(|e| plainword_cli::fatal(&format!("samples file {to_path}: {e}")));
    }

    println!("{} sentences appended to {to_path}", sentences.len());
}
