// Sentence tokenization collaborator.
//
// The pipeline consumes tokenization through the `Tokenizer` trait so a
// real tagger/tokenizer can be injected. `SimpleTokenizer` is the built-in
// implementation: character-class segmentation (word characters vs
// punctuation, whitespace discarded) with per-token tags from a
// `PosTagger`.

use crate::tag::PosTagger;
use crate::text::is_word_char;

/// Splits a sentence into ordered `(surface, category)` tokens.
pub trait Tokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<(String, String)>;
}

/// Character-class tokenizer with lexicon-based tagging.
pub struct SimpleTokenizer<'a> {
    tagger: &'a dyn PosTagger,
}

impl<'a> SimpleTokenizer<'a> {
    pub fn new(tagger: &'a dyn PosTagger) -> Self {
        Self { tagger }
    }
}

impl Tokenizer for SimpleTokenizer<'_> {
    fn tokenize(&self, sentence: &str) -> Vec<(String, String)> {
        let mut tokens = Vec::new();
        let mut word = String::new();

        let flush = |word: &mut String, tokens: &mut Vec<(String, String)>| {
            if !word.is_empty() {
                let surface = std::mem::take(word);
                let tag = self.tagger.tag(&surface);
                tokens.push((surface, tag));
            }
        };

        for c in sentence.chars() {
            if is_word_char(c) {
                word.push(c);
            } else if c.is_whitespace() {
                flush(&mut word, &mut tokens);
            } else {
                flush(&mut word, &mut tokens);
                let punct = c.to_string();
                let tag = self.tagger.tag(&punct);
                tokens.push((punct, tag));
            }
        }
        flush(&mut word, &mut tokens);
        tokens
    }
}
