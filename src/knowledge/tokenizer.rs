//! Text normalization into filtered search tokens.

/// English and German stop words. Only entries longer than two characters
/// matter, since shorter tokens are dropped before this check.
const STOP_WORDS: &[&str] = &[
    // English
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "has", "his", "how", "its", "may", "now", "see", "who", "did", "get",
    "him", "let", "say", "she", "too", "use", "this", "that", "with", "have", "from", "they",
    "been", "will", "were", "what", "when", "which", "their", "there", "would", "could",
    "should", "these", "those", "then", "than", "them", "into", "also", "only", "some", "such",
    "very", "just", "about", "where", "while", "your", "each", "does", "being", "here",
    // German
    "der", "die", "das", "und", "ist", "ein", "eine", "einer", "eines", "einem", "einen",
    "nicht", "mit", "von", "den", "dem", "des", "auf", "für", "sich", "auch", "als", "wie",
    "bei", "aus", "nach", "noch", "wird", "werden", "sind", "war", "hat", "haben", "kann",
    "oder", "aber", "wenn", "dass", "zum", "zur", "über", "unter", "nur", "sein", "ich", "wir",
    "ihr", "sie", "mir", "mich", "dich", "uns", "euch", "diese", "dieser", "dieses", "durch",
    "vor", "bis", "schon", "dann", "hier", "wurde", "soll", "muss",
];

/// Normalize `text` into a sequence of search tokens.
///
/// Lower-cases, replaces everything except `a-z`, digits, whitespace, `-` and
/// `ä ö ü ß` with spaces, splits on whitespace, then drops tokens of two
/// characters or fewer and stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_token_char(c) { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Whether `token` is in the built-in stop-word list.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '-' | 'ä' | 'ö' | 'ü' | 'ß')
}
