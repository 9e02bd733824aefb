//! Whitespace word counting and truncation shared by the normalizer and expander.

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Returns the first `limit` words joined by single spaces, and whether any were dropped.
pub fn truncate_words(text: &str, limit: usize) -> (String, bool) {
    let mut words = text.split_whitespace();
    let kept: Vec<&str> = words.by_ref().take(limit).collect();
    let truncated = words.next().is_some();
    (kept.join(" "), truncated)
}

/// Pads `text` with `filler` until it holds at least `min_words` words.
pub fn ensure_word_count(text: &str, min_words: usize, filler: &str) -> String {
    let count = word_count(text);
    if count >= min_words {
        return text.to_string();
    }

    let extra = vec![filler; min_words - count].join(" ");
    if text.trim().is_empty() {
        extra
    } else {
        format!("{} {}", text, extra)
    }
}
