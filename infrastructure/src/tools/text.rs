//! Text tools: count_vowels, count_letters, count_consonants, analyze_string
//!
//! Letter classes are Unicode-aware; the vowel set is ASCII `aeiou` in
//! either case, with `y` optional.

use reasoner_domain::StringAnalysis;

const VOWELS: &str = "aeiouAEIOU";

fn is_vowel(c: char, include_y: bool) -> bool {
    VOWELS.contains(c) || (include_y && matches!(c, 'y' | 'Y'))
}

/// Count vowels; `y` counts only when `include_y` is set
pub fn count_vowels(text: &str, include_y: bool) -> usize {
    text.chars().filter(|c| is_vowel(*c, include_y)).count()
}

/// Count alphabetic characters
pub fn count_letters(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

/// Count alphabetic non-vowels; `y` is a consonant unless `include_y` is false
pub fn count_consonants(text: &str, include_y: bool) -> usize {
    text.chars()
        .filter(|c| c.is_alphabetic() && !is_vowel(*c, !include_y))
        .count()
}

/// Character-class breakdown of `text`
pub fn analyze_string(text: &str) -> StringAnalysis {
    let chars = || text.chars();

    StringAnalysis {
        total_chars: chars().count(),
        letters: count_letters(text),
        vowels: count_vowels(text, false),
        consonants: count_consonants(text, true),
        words: text.split_whitespace().count(),
        uppercase: chars().filter(|c| c.is_uppercase()).count(),
        lowercase: chars().filter(|c| c.is_lowercase()).count(),
        digits: chars().filter(|c| c.is_numeric()).count(),
        spaces: chars().filter(|c| *c == ' ').count(),
        punctuation: chars()
            .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
            .count(),
    }
}
