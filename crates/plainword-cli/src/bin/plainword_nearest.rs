// plainword-nearest: explore the embedding neighborhood of words.
//
// Reads words from the command line or stdin (one per line) and prints
// their nearest neighbors with Euclidean distances, plus whether the word
// is listed as common when a frequency table is available.
//
// Usage:
//   plainword-nearest [OPTIONS] [WORD...]
//
// Options:
//   --vectors PATH  embedding vector file (or PLAINWORD_VECTORS_PATH)
//   --freq PATH     frequency CSV (or PLAINWORD_FREQ_PATH), optional
//   -n N            number of neighbors to print (default: 10)
//   -h, --help      print help

use std::io::{self, BufRead, Write};

use plainword_embed::EmbeddingStore;
use plainword_engine::frequency::FrequencyTable;
use plainword_engine::scorer::round3;

fn print_help() {
    println!("plainword-nearest: print the nearest embedding neighbors of words.");
    println!();
    println!("Usage: plainword-nearest [OPTIONS] [WORD...]");
    println!();
    println!("If WORD arguments are given, looks up each word.");
    println!("Otherwise reads words from stdin (one per line).");
    println!();
    println!("Options:");
    println!("  --vectors PATH  embedding vector file (or {})", plainword_cli::VECTORS_ENV);
    println!("  --freq PATH     frequency CSV (or {}), optional", plainword_cli::FREQ_ENV);
    println!("  -n N            number of neighbors to print (default: 10)");
    println!("  -h, --help      print this help");
}

fn lookup(
    word: &str,
    store: &EmbeddingStore,
    frequency: Option<&FrequencyTable>,
    k: usize,
    out: &mut impl Write,
) {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return;
    }

    let commonness = match frequency {
        Some(table) if table.contains(&word) => " (common)",
        Some(_) => " (uncommon)",
        None => "",
    };

    let neighbors = store.nearest(&word, k);
    if neighbors.is_empty() {
        let _ = writeln!(out, "{word}{commonness}: not in vocabulary");
        return;
    }
    let _ = writeln!(out, "{word}{commonness}:");
    for neighbor in &neighbors {
        match store.distance_between(&word, neighbor) {
            Some(distance) => {
                let _ = writeln!(out, "  {neighbor} || {}", round3(distance));
            }
            None => {
                let _ = writeln!(out, "  {neighbor}");
            }
        }
    }
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if plainword_cli::wants_help(&args) {
        print_help();
        return;
    }

    let vectors_flag = plainword_cli::take_value_flag(&mut args, "--vectors");
    let freq_flag = plainword_cli::take_value_flag(&mut args, "--freq");
    let k: usize = plainword_cli::take_value_flag(&mut args, "-n")
        .map(|v| {
            v.parse()
                .unwrap_or_else(|_| plainword_cli::fatal("invalid number for -n"))
        })
        .unwrap_or(10);
    let words: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();

    let vectors_path = plainword_cli::resolve_path(vectors_flag, plainword_cli::VECTORS_ENV)
        .unwrap_or_else(|| {
            plainword_cli::fatal(&format!(
                "no embedding vectors: pass --vectors or set {}",
                plainword_cli::VECTORS_ENV
            ))
        });
    let store =
        plainword_cli::load_embeddings(&vectors_path).unwrap_or_else(|e| plainword_cli::fatal(&e));

    let frequency = plainword_cli::resolve_path(freq_flag, plainword_cli::FREQ_ENV)
        .map(|path| plainword_cli::load_frequency(&path).unwrap_or_else(|e| plainword_cli::fatal(&e)));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            lookup(&line, &store, frequency.as_ref(), k, &mut out);
        }
    } else {
        for word in &words {
            lookup(word, &store, frequency.as_ref(), k, &mut out);
        }
    }
}
