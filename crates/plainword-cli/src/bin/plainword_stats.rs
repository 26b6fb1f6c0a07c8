// plainword-stats: aggregate quality statistics over an annotated result
// CSV and append them to a stats log.
//
// The input is a `WORD,SUGGESTIONS` file produced by plainword-suggest in
// which a reviewer has appended a quality letter to each suggestion
// (I invalid / V valid / G good) and optionally marked words with a
// trailing ` M` (multi-word phrase) or ` N` (no replacement exists).
//
// Usage:
//   plainword-stats FILE [--out PATH]
//
// Options:
//   --out PATH   stats log to append to (default: output/stats.txt)
//   -h, --help   print help

use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;

use plainword_engine::stats;

fn print_help() {
    println!("plainword-stats: aggregate statistics over an annotated result CSV.");
    println!();
    println!("Usage: plainword-stats FILE [--out PATH]");
    println!();
    println!("Options:");
    println!("  --out PATH   stats log to append to (default: output/stats.txt)");
    println!("  -h, --help   print this help");
}

/// Derive the search-method label from a result filename:
/// `VECTOR-NONE-20250301-120000.csv` -> `VECTOR-NONE`.
fn method_from_filename(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN");
    let parts: Vec<&str> = stem.split('-').collect();
    if parts.len() >= 2 {
        format!("{}-{}", parts[0], parts[1])
    } else {
        stem.to_string()
    }
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if plainword_cli::wants_help(&args) {
        print_help();
        return;
    }

    let out_path = plainword_cli::take_value_flag(&mut args, "--out")
        .unwrap_or_else(|| "output/stats.txt".to_string());
    let input = match args.first() {
        Some(path) => path.clone(),
        None => plainword_cli::fatal("an annotated result CSV is required"),
    };

    let file = File::open(&input)
        .unwrap_or_else(|e| plainword_cli::fatal(&format!("annotated results {input}: {e}")));
    let records = stats::parse_records(file)
        .unwrap_or_else(|e| plainword_cli::fatal(&format!("annotated results {input}: {e}")));
    if records.is_empty() {
        plainword_cli::fatal(&format!("annotated results {input}: no records found"));
    }

    let overall = stats::analyze(&records);
    let method = method_from_filename(Path::new(&input));

    if let Some(parent) = Path::new(&out_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|e| plainword_cli::fatal(&format!("{}: {e}", parent.display())));
        }
    }
    let log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&out_path)
        .unwrap_or_else(|e| plainword_cli::fatal(&format!("stats log {out_path}: {e}")));
    let mut out = BufWriter::new(log);
    stats::write_stats(&mut out, &method, &overall)
        .unwrap_or_else(|e| plainword_cli::fatal(&format!("stats log {out_path}: {e}")));

    println!(
        "{} annotated words analyzed; statistics appended to {out_path}",
        overall.total
    );
}
