// Heuristic syllable estimation.
//
// Counts vowel-letter groups with a silent-final-e correction. The result
// is always at least 1. The filter only asks two questions of this number:
// "is it exactly 1" (skip test) and "is it at most 2" (simplicity test), so
// the usual heuristic edge cases have limited blast radius.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Estimate the syllable count of a word. Returns at least 1 for any
/// non-empty input (and 1 for empty input, honoring the >= 1 contract).
pub fn estimate(word: &str) -> usize {
    let chars: Vec<char> = word.to_lowercase().chars().collect();

    let mut count = 0;
    let mut prev_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    // A final `e` after a consonant is normally silent ("scrape", "plate"),
    // unless the word ends in consonant + `le` ("simple", "table") where it
    // carries the last syllable.
    let n = chars.len();
    if n >= 2 && chars[n - 1] == 'e' && !is_vowel(chars[n - 2]) && count > 1 {
        let consonant_le = n >= 3 && chars[n - 2] == 'l' && !is_vowel(chars[n - 3]);
        if !consonant_le {
            count -= 1;
        }
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_syllable_words() {
        assert_eq!(estimate("the"), 1);
        assert_eq!(estimate("knee"), 1);
        assert_eq!(estimate("scratch"), 1);
        assert_eq!(estimate("scrape"), 1);
        assert_eq!(estimate("graze"), 1);
    }

    #[test]
    fn two_syllable_words() {
        assert_eq!(estimate("happy"), 2);
        assert_eq!(estimate("simple"), 2);
        assert_eq!(estimate("table"), 2);
    }

    #[test]
    fn multi_syllable_words() {
        assert_eq!(estimate("abrasion"), 3);
        assert_eq!(estimate("laceration"), 4);
    }

    #[test]
    fn case_does_not_matter() {
        assert_eq!(estimate("Abrasion"), estimate("abrasion"));
    }

    #[test]
    fn never_below_one() {
        assert_eq!(estimate(""), 1);
        assert_eq!(estimate("tsk"), 1);
    }
}
