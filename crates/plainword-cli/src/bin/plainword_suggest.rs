// plainword-suggest: run the suggestion pipeline over a samples file and
// record the ranked shortlists.
//
// Usage:
//   plainword-suggest --samples FILE [OPTIONS]
//
// Options:
//   --samples PATH    sentence file, one sentence per line (required)
//   --freq PATH       frequency CSV (or PLAINWORD_FREQ_PATH)
//   --thesaurus PATH  thesaurus sense file (or PLAINWORD_THESAURUS_PATH)
//   --vectors PATH    embedding vector file (or PLAINWORD_VECTORS_PATH)
//   --first NAME      vector | thesaurus | infill        (default: vector)
//   --second NAME     none | vector | thesaurus | infill (default: none)
//   --sort NAME       distance | similarity              (default: distance)
//   --top-k N         shortlist length                   (default: 15)
//   --out DIR         output directory                   (default: output)
//   --json            also write a JSON report
//   -h, --help        print help

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use plainword_engine::pipeline::{PipelineOptions, SuggestionPipeline};
use plainword_engine::report::{self, ReportMeta};
use plainword_engine::tag::LexiconTagger;
use plainword_engine::tokenize::SimpleTokenizer;

fn print_help() {
    println!("plainword-suggest: find simpler replacement words for a sentence corpus.");
    println!();
    println!("Usage: plainword-suggest --samples FILE [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --samples PATH    sentence file, one sentence per line (required)");
    println!("  --freq PATH       frequency CSV (or {})", plainword_cli::FREQ_ENV);
    println!("  --thesaurus PATH  thesaurus sense file (or {})", plainword_cli::THESAURUS_ENV);
    println!("  --vectors PATH    embedding vector file (or {})", plainword_cli::VECTORS_ENV);
    println!("  --first NAME      vector | thesaurus | infill        (default: vector)");
    println!("  --second NAME     none | vector | thesaurus | infill (default: none)");
    println!("  --sort NAME       distance | similarity              (default: distance)");
    println!("  --top-k N         shortlist length                   (default: 15)");
    println!("  --out DIR         output directory                   (default: output)");
    println!("  --json            also write a JSON report");
    println!("  -h, --help        print this help");
}

fn main() {
    plainword_cli::init_tracing();
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if plainword_cli::wants_help(&args) {
        print_help();
        return;
    }

    let samples_flag = plainword_cli::take_value_flag(&mut args, "--samples");
    let freq_flag = plainword_cli::take_value_flag(&mut args, "--freq");
    let thesaurus_flag = plainword_cli::take_value_flag(&mut args, "--thesaurus");
    let vectors_flag = plainword_cli::take_value_flag(&mut args, "--vectors");

    let first = plainword_cli::take_value_flag(&mut args, "--first")
        .unwrap_or_else(|| "vector".to_string())
        .parse::<plainword_engine::pipeline::SourceKind>()
        .unwrap_or_else(|e| plainword_cli::fatal(&e.to_string()));
    let second = plainword_cli::take_value_flag(&mut args, "--second")
        .unwrap_or_else(|| "none".to_string())
        .parse::<plainword_engine::pipeline::SecondStage>()
        .unwrap_or_else(|e| plainword_cli::fatal(&e.to_string()));
    let sort_by = plainword_cli::take_value_flag(&mut args, "--sort")
        .unwrap_or_else(|| "distance".to_string())
        .parse::<plainword_engine::pipeline::RankMetric>()
        .unwrap_or_else(|e| plainword_cli::fatal(&e.to_string()));
    let top_k: usize = plainword_cli::take_value_flag(&mut args, "--top-k")
        .map(|v| {
            v.parse()
                .unwrap_or_else(|_| plainword_cli::fatal("invalid number for --top-k"))
        })
        .unwrap_or(15);
    let out_dir =
        plainword_cli::take_value_flag(&mut args, "--out").unwrap_or_else(|| "output".to_string());
    let json = plainword_cli::take_flag(&mut args, "--json");

    if let Some(unexpected) = args.first() {
        plainword_cli::fatal(&format!("unexpected argument: {unexpected}"));
    }

    let samples_path =
        samples_flag.unwrap_or_else(|| plainword_cli::fatal("--samples is required"));
    let sentences = plainword_cli::load_samples(Path::new(&samples_path))
        .unwrap_or_else(|e| plainword_cli::fatal(&e));
    if sentences.is_empty() {
        plainword_cli::fatal(&format!("samples file {samples_path} contains no sentences"));
    }

    let freq_path = plainword_cli::resolve_path(freq_flag, plainword_cli::FREQ_ENV)
        .unwrap_or_else(|| {
            plainword_cli::fatal(&format!(
                "no frequency table: pass --freq or set {}",
                plainword_cli::FREQ_ENV
            ))
        });
    let frequency =
        plainword_cli::load_frequency(&freq_path).unwrap_or_else(|e| plainword_cli::fatal(&e));

    let thesaurus_path = plainword_cli::resolve_path(thesaurus_flag, plainword_cli::THESAURUS_ENV)
        .unwrap_or_else(|| {
            plainword_cli::fatal(&format!(
                "no thesaurus: pass --thesaurus or set {}",
                plainword_cli::THESAURUS_ENV
            ))
        });
    let thesaurus =
        plainword_cli::load_thesaurus(&thesaurus_path).unwrap_or_else(|e| plainword_cli::fatal(&e));

    // Embeddings are optional: thesaurus-only runs don't need them. The
    // pipeline fails fast if the selected configuration does.
    let embeddings = plainword_cli::resolve_path(vectors_flag, plainword_cli::VECTORS_ENV)
        .map(|path| plainword_cli::load_embeddings(&path).unwrap_or_else(|e| plainword_cli::fatal(&e)));

    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);
    let options = PipelineOptions {
        first,
        second,
        sort_by,
        top_k,
    };
    let mut pipeline =
        SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options);
    if let Some(store) = embeddings.as_ref() {
        pipeline = pipeline.with_embeddings(store);
    }
    // No masked-infill or similarity model is bundled with the CLI;
    // selecting a configuration that needs one fails in validate().

    let table = pipeline
        .run(&sentences)
        .unwrap_or_else(|e| plainword_cli::fatal(&e.to_string()));

    let now = chrono::Local::now();
    let timestamp = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let stamp = now.format("%Y%m%d-%H%M%S").to_string();
    let meta = ReportMeta {
        timestamp: &timestamp,
        options: pipeline.options(),
    };

    std::fs::create_dir_all(&out_dir)
        .unwrap_or_else(|e| plainword_cli::fatal(&format!("output directory {out_dir}: {e}")));
    let base = format!("{out_dir}/{first}-{second}-{stamp}");

    let txt_path = format!("{base}.txt");
    let mut txt = BufWriter::new(
        File::create(&txt_path)
            .unwrap_or_else(|e| plainword_cli::fatal(&format!("{txt_path}: {e}"))),
    );
    let summary = report::write_text(&mut txt, &meta, &table)
        .unwrap_or_else(|e| plainword_cli::fatal(&format!("{txt_path}: {e}")));

    let csv_path = format!("{base}.csv");
    let mut csv = BufWriter::new(
        File::create(&csv_path)
            .unwrap_or_else(|e| plainword_cli::fatal(&format!("{csv_path}: {e}"))),
    );
    report::write_csv(&mut csv, &table, top_k)
        .unwrap_or_else(|e| plainword_cli::fatal(&format!("{csv_path}: {e}")));

    if json {
        let json_path = format!("{base}.json");
        let mut out = BufWriter::new(
            File::create(&json_path)
                .unwrap_or_else(|e| plainword_cli::fatal(&format!("{json_path}: {e}"))),
        );
        report::write_json(&mut out, &meta, &table)
            .unwrap_or_else(|e| plainword_cli::fatal(&format!("{json_path}: {e}")));
    }

    println!(
        "{} words identified as complex; alternatives found for {}.",
        summary.complex_words, summary.words_with_suggestions
    );
    println!("results saved to {base}.txt and {base}.csv");
}
