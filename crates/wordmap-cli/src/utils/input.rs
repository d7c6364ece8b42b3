use crate::cli::WordSource;
use crate::config::models::DictionaryConfig;
use crate::error::{CliError, Result};
use tracing::{debug, info, warn};
use wordmap::core::io::dictionary::DictionaryTrie;

/// Lower-cases `token` and keeps only letters, digits and apostrophes.
pub fn normalize_word(token: &str) -> String {
    token
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits `text` on whitespace and normalizes every token, dropping the ones
/// left empty.
pub fn normalize_text(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Gathers the words to lay out from whichever source was given.
pub fn collect_words(source: &WordSource) -> Result<Vec<String>> {
    let words = if let Some(text) = &source.text {
        normalize_text(text)
    } else if let Some(path) = &source.input {
        debug!("Reading words from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        normalize_text(&text)
    } else {
        source
            .words
            .iter()
            .flat_map(|word| normalize_text(word))
            .collect()
    };

    if words.is_empty() {
        return Err(CliError::Argument(
            "No words to lay out. Pass words, --text or --input.".to_string(),
        ));
    }
    debug!("Collected {} word(s): {:?}", words.len(), words);
    Ok(words)
}

/// Splits `words` into those present in `dictionary` and those missing from it,
/// keeping the input order in both lists.
pub fn partition_known(words: &[String], dictionary: &DictionaryTrie) -> (Vec<String>, Vec<String>) {
    words
        .iter()
        .cloned()
        .partition(|word| dictionary.contains_word(word))
}

/// Warns about words missing from the configured dictionary and drops them
/// when `skip_unknown` is set.
pub fn apply_dictionary(
    words: Vec<String>,
    dictionary: Option<&DictionaryConfig>,
) -> Result<Vec<String>> {
    let Some(config) = dictionary else {
        return Ok(words);
    };

    info!("Loading dictionary from {:?}", &config.path);
    let trie = DictionaryTrie::load_cached(&config.path)?;
    filter_unknown(words, trie, config.skip_unknown)
}

fn filter_unknown(
    words: Vec<String>,
    dictionary: &DictionaryTrie,
    skip_unknown: bool,
) -> Result<Vec<String>> {
    let (known, unknown) = partition_known(&words, dictionary);
    if unknown.is_empty() {
        return Ok(words);
    }

    if !skip_unknown {
        warn!("Words not in dictionary: {}", unknown.join(", "));
        return Ok(words);
    }

    warn!("Skipping words not in dictionary: {}", unknown.join(", "));
    if known.is_empty() {
        return Err(CliError::Argument(
            "Every word was missing from the dictionary; nothing left to lay out.".to_string(),
        ));
    }
    Ok(known)
}
