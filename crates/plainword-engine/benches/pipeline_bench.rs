// Criterion benchmarks for plainword-engine.
//
// All resources are synthesized in memory; no data files are required.
//
// Run:
//   cargo bench -p plainword-engine

use criterion::{Criterion, criterion_group, criterion_main};

use plainword_core::word::Word;
use plainword_embed::EmbeddingStore;
use plainword_engine::filter::SimplicityFilter;
use plainword_engine::frequency::FrequencyTable;
use plainword_engine::source::{CandidateSource, VectorSource};
use plainword_engine::tag::PosTagger;
use plainword_engine::thesaurus::{Sense, Thesaurus};

struct EmptyThesaurus;

impl Thesaurus for EmptyThesaurus {
    fn senses(&self, _word: &str) -> Vec<Sense> {
        Vec::new()
    }
}

struct NounTagger;

impl PosTagger for NounTagger {
    fn tag(&self, _word: &str) -> String {
        "NOUN".to_string()
    }
}

/// Deterministic synthetic embedding table: `n` words of dimension `dim`.
fn synthetic_store(n: usize, dim: usize) -> EmbeddingStore {
    let mut text = String::new();
    for i in 0..n {
        text.push_str(&format!("w{i}"));
        for d in 0..dim {
            let v = ((i * 31 + d * 7) % 97) as f32 / 97.0;
            text.push_str(&format!(" {v}"));
        }
        text.push('\n');
    }
    EmbeddingStore::from_reader(text.as_bytes()).expect("synthetic store")
}

fn bench_nearest_neighbors(c: &mut Criterion) {
    let store = synthetic_store(2000, 50);
    c.bench_function("nearest_k50_of_2000", |b| {
        b.iter(|| std::hint::black_box(store.nearest("w1000", 50)));
    });
}

fn bench_vector_first_search(c: &mut Criterion) {
    let store = synthetic_store(2000, 50);
    let frequency = FrequencyTable::from_words((0..200).map(|i| format!("w{i}")));
    let thesaurus = EmptyThesaurus;
    let tagger = NounTagger;
    let filter = SimplicityFilter::new(&frequency, &thesaurus, &tagger);
    let source = VectorSource::new(&store, &filter);
    let original = Word::new("w1000", "NOUN");

    c.bench_function("vector_first_search", |b| {
        b.iter(|| std::hint::black_box(source.first_search(&original, "")));
    });
}

fn bench_partition(c: &mut Criterion) {
    let frequency = FrequencyTable::from_words(["scratch", "scrape", "mark", "cut"]);
    let thesaurus = EmptyThesaurus;
    let tagger = NounTagger;
    let filter = SimplicityFilter::new(&frequency, &thesaurus, &tagger);
    let original = Word::new("abrasion", "NOUN");
    let candidates: Vec<String> = (0..50)
        .map(|i| match i % 4 {
            0 => "scratch".to_string(),
            1 => "excoriation".to_string(),
            2 => format!("word{i}"), // format-invalid (digits)
            _ => "graze".to_string(),
        })
        .collect();

    c.bench_function("partition_50_candidates", |b| {
        b.iter(|| std::hint::black_box(filter.partition(&candidates, &original)));
    });
}

criterion_group!(
    benches,
    bench_nearest_neighbors,
    bench_vector_first_search,
    bench_partition,
);
criterion_main!(benches);
