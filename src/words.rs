use crate::error::GameError;
use std::fs;
use std::path::Path;

/// The default vocabulary a round cycles through.
pub const CANONICAL_WORDS: [&str; 21] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

pub fn canonical_words() -> Vec<String>
{
    CANONICAL_WORDS.iter().map(|word| word.to_string()).collect()
}

/// One word per line. Blank lines and `#` comments are skipped.
pub fn parse_word_list(text: &str) -> Vec<String>
{
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

pub fn load_word_file(path: &Path) -> Result<Vec<String>, GameError>
{
    let text = fs::read_to_string(path).map_err(|source| GameError::WordFile {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&text);
    if words.is_empty() {
        return Err(GameError::EmptyWordList);
    }
    Ok(words)
}
