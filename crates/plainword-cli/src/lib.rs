// plainword-cli: shared utilities for the CLI tools.
//
// Argument handling is deliberately minimal: each bin scans its own flags
// with the helpers below. Resource files resolve from an explicit flag
// first, then an environment variable.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use plainword_embed::EmbeddingStore;
use plainword_engine::frequency::FrequencyTable;
use plainword_engine::thesaurus::FileThesaurus;

/// Environment variable naming the frequency CSV.
pub const FREQ_ENV: &str = "PLAINWORD_FREQ_PATH";

/// Environment variable naming the embedding vector file.
pub const VECTORS_ENV: &str = "PLAINWORD_VECTORS_PATH";

/// Environment variable naming the thesaurus sense file.
pub const THESAURUS_ENV: &str = "PLAINWORD_THESAURUS_PATH";

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Remove a presence flag (e.g. `--json`) from `args`, returning whether
/// it was present.
pub fn take_flag(args: &mut Vec<String>, name: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != name);
    args.len() != before
}

/// Remove a `--name VALUE` or `--name=VALUE` flag from `args`, returning
/// its value. Exits with an error when the flag is present without a
/// value.
pub fn take_value_flag(args: &mut Vec<String>, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    let mut value = None;
    let mut remaining = Vec::with_capacity(args.len());
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&prefix) {
            value = Some(v.to_string());
        } else if arg == name {
            match args.get(i + 1) {
                Some(v) => {
                    value = Some(v.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{name} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }
    *args = remaining;
    value
}

/// Install the stderr log subscriber. Log verbosity follows `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve a resource path: explicit flag value first, then the
/// environment variable.
pub fn resolve_path(flag: Option<String>, env_var: &str) -> Option<PathBuf> {
    flag.map(PathBuf::from)
        .or_else(|| std::env::var(env_var).ok().map(PathBuf::from))
}

/// Load the frequency table, naming the file in any error.
pub fn load_frequency(path: &Path) -> Result<FrequencyTable, String> {
    FrequencyTable::from_path(path)
        .map_err(|e| format!("frequency table {}: {e}", path.display()))
}

/// Load the embedding store, naming the file in any error.
pub fn load_embeddings(path: &Path) -> Result<EmbeddingStore, String> {
    EmbeddingStore::from_path(path)
        .map_err(|e| format!("embedding vectors {}: {e}", path.display()))
}

/// Load the thesaurus, naming the file in any error.
pub fn load_thesaurus(path: &Path) -> Result<FileThesaurus, String> {
    FileThesaurus::from_path(path).map_err(|e| format!("thesaurus {}: {e}", path.display()))
}

/// Load sample sentences: the non-empty trimmed lines of the file.
pub fn load_samples(path: &Path) -> Result<Vec<String>, String> {
    let file = std::fs::File::open(path)
        .map_err(|e| format!("samples file {}: {e}", path.display()))?;
    let mut sentences = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| format!("samples file {}: {e}", path.display()))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }
    }
    Ok(sentences)
}

/// Split a passage into sentences at `.` boundaries: a period ends a
/// sentence when it closes the line or is followed by whitespace, unless
/// it sits inside a parenthesized abbreviation like `(i.e. ...)`.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();

    for line in text.lines() {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }
        let chars: Vec<char> = stripped.chars().collect();
        let mut start = 0;

        for i in 0..chars.len() {
            if chars[i] != '.' {
                continue;
            }
            if i + 1 == chars.len() {
                // Period closes the line; keep it.
                let sentence: String = chars[start..].iter().collect();
                let sentence = sentence.trim().to_string();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = chars.len();
            } else if chars[i + 1].is_whitespace() {
                // Abbreviation guard: "(i.e. ..." keeps its period.
                if i >= 4 && chars[i - 4] == '(' {
                    continue;
                }
                let segment: String = chars[start..i].iter().collect();
                let segment = segment.trim();
                if !segment.is_empty() {
                    sentences.push(format!("{segment}."));
                }
                start = i + 1;
            }
        }
    }

    sentences
}
