use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Words that carry no useful signal for FAQ matching: articles,
/// prepositions, pronouns, and the politeness filler common in support
/// chats. Removing them keeps the score focused on keywords like "refund".
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "to", "of", "and", "or", "in", "on", "for", "with", "is", "are", "i",
        "me", "you", "my", "we", "it", "this", "that", "please", "can", "could", "help",
    ]
    .into_iter()
    .collect()
});

/// Tokens shorter than this are dropped along with stopwords.
const MIN_TOKEN_CHARS: usize = 2;

/// Normalizes free text into a set of comparable terms.
///
/// Every character is lowercased; anything that is not a letter or digit
/// becomes a separator, and the text is split on separator runs. Stopwords
/// and words shorter than two characters are dropped. The result is a set:
/// duplicates collapse and carry no extra weight.
///
/// Deterministic and total. Any input, including empty or punctuation-only
/// text, yields a (possibly empty) set without panicking.
pub fn tokenize(text: &str) -> HashSet<String> {
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                cleaned.push(lower);
            }
        } else {
            cleaned.push(' ');
        }
    }

    cleaned
        .split_whitespace()
        .filter(|w| !STOPWORDS.contains(w) && w.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}
