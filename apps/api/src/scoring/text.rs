//! Text helpers shared by the category scorers.

/// Lower-cased copy of `text` used for every case-insensitive substring check.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Length in UTF-16 code units. Astral-plane glyphs (emoji, math letters) count twice.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Blank for parsing purposes: Unicode `White_Space` plus the byte-order mark, minus NEL (U+0085).
pub fn is_blank_char(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// `str::trim` using `is_blank_char`.
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank_char)
}

/// True if any needle appears in the already-folded haystack.
pub fn contains_any(folded: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| folded.contains(needle))
}

/// Number of distinct needles present in the already-folded haystack.
pub fn count_present(folded: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|needle| folded.contains(*needle)).count()
}

/// True if at least one needle is absent from the already-folded haystack.
pub fn missing_any(folded: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| !folded.contains(needle))
}

/// First `max_chars` characters of `text`, cut on a char boundary.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
