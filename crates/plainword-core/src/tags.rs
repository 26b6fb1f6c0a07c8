// Coarse grammatical tag vocabulary shared by the tokenizer, the thesaurus
// mapping, and the simplicity filter.
//
// Tags are strings, not a closed enum: they originate in an external tagger
// whose tag set is open-ended, and the filter only ever compares them
// case-insensitively.

pub const NOUN: &str = "NOUN";
pub const VERB: &str = "VERB";
pub const ADJ: &str = "ADJ";
pub const ADV: &str = "ADV";
pub const PRON: &str = "PRON";
pub const AUX: &str = "AUX";
pub const PART: &str = "PART";
pub const ADP: &str = "ADP";
pub const PUNCT: &str = "PUNCT";
pub const DET: &str = "DET";
pub const NUM: &str = "NUM";

/// Catch-all tag for words whose category is unknown or unmapped.
pub const UNKNOWN: &str = "X";

/// Sentinel category carried by candidates that failed the acceptance gate.
pub const REJECTED: &str = "-";

/// Function-word categories that never need simplifying; words tagged with
/// any of these bypass the candidate search entirely.
pub const SKIP_CATEGORIES: &[&str] = &[PRON, AUX, PART, ADP, PUNCT, DET, NUM];

/// Upper-case a raw tag for comparison and storage.
pub fn normalize(tag: &str) -> String {
    tag.trim().to_uppercase()
}

/// True if `category` names one of the function-word categories.
/// Comparison is case-insensitive.
pub fn is_function_category(category: &str) -> bool {
    let normalized = normalize(category);
    SKIP_CATEGORIES.contains(&normalized.as_str())
}
