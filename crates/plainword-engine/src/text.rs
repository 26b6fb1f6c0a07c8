// Sentence text helpers: whole-word location, first-occurrence
// substitution, and preceding-token extraction. Used by the masked-infill
// source and the sentence-similarity scorer.

/// Characters that belong to a word token: letters, digits, hyphen and
/// apostrophe (so "long-term" and "don't" stay single words).
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '\''
}

/// Byte span of the first whole-word, case-insensitive occurrence of
/// `word` in `sentence`.
pub fn find_word_span(sentence: &str, word: &str) -> Option<(usize, usize)> {
    let target: Vec<char> = word.to_lowercase().chars().collect();
    if target.is_empty() {
        return None;
    }
    let chars: Vec<(usize, char)> = sentence.char_indices().collect();
    let n = chars.len();
    let m = target.len();
    if n < m {
        return None;
    }

    for start in 0..=n - m {
        if start > 0 && is_word_char(chars[start - 1].1) {
            continue; // not at a word boundary
        }
        let matches = (0..m).all(|j| {
            let mut lowered = chars[start + j].1.to_lowercase();
            lowered.next() == Some(target[j]) && lowered.next().is_none()
        });
        if !matches {
            continue;
        }
        if start + m < n && is_word_char(chars[start + m].1) {
            continue; // word continues past the match
        }
        let begin = chars[start].0;
        let end = if start + m < n {
            chars[start + m].0
        } else {
            sentence.len()
        };
        return Some((begin, end));
    }
    None
}

/// Replace the first whole-word occurrence of `word` with `replacement`.
/// Returns `None` when the word does not occur.
pub fn replace_first_word(sentence: &str, word: &str, replacement: &str) -> Option<String> {
    let (begin, end) = find_word_span(sentence, word)?;
    let mut result = String::with_capacity(sentence.len() + replacement.len());
    result.push_str(&sentence[..begin]);
    result.push_str(replacement);
    result.push_str(&sentence[end..]);
    Some(result)
}

/// The whitespace-delimited token immediately before the first occurrence
/// of `word`, stripped of edge punctuation. `None` when the word is
/// sentence-initial or absent.
pub fn token_before(sentence: &str, word: &str) -> Option<String> {
    let (begin, _) = find_word_span(sentence, word)?;
    let before = sentence[..begin].trim_end();
    let token = before.split_whitespace().next_back()?;
    let stripped: &str = token.trim_matches(|c: char| !is_word_char(c));
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}
