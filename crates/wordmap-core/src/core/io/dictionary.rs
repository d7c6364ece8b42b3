use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("I/O error while reading word list: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

/// Character trie answering word-list membership queries.
///
/// Used only to validate input; layout never consults it.
#[derive(Debug, Default, Clone)]
pub struct DictionaryTrie {
    root: TrieNode,
    len: usize,
}

static CACHED: OnceLock<(PathBuf, DictionaryTrie)> = OnceLock::new();

impl DictionaryTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    fn walk(&self, text: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in text.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// True only for complete words, not for prefixes of longer ones.
    pub fn contains_word(&self, word: &str) -> bool {
        !word.is_empty() && self.walk(word).is_some_and(|n| n.terminal)
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads one word per line. Lines are trimmed and lower-cased; blank lines
    /// are skipped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, DictionaryError> {
        let mut trie = Self::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            trie.insert(&word.to_lowercase());
        }
        Ok(trie)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        debug!("Loading word list from {:?}", path);
        let trie = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(words = trie.len(), "Word list loaded from {:?}.", path);
        Ok(trie)
    }

    /// Loads the word list once per process and hands out the cached trie on
    /// every later call.
    ///
    /// The first successful path wins; asking for a different path afterwards
    /// returns the cached trie and logs a warning.
    pub fn load_cached<P: AsRef<Path>>(path: P) -> Result<&'static Self, DictionaryError> {
        let path = path.as_ref();
        if let Some((cached_path, trie)) = CACHED.get() {
            if cached_path != path {
                warn!(
                    "Word list already loaded from {:?}; ignoring request for {:?}.",
                    cached_path, path
                );
            }
            return Ok(trie);
        }

        let trie = Self::load(path)?;
        let (_, trie) = CACHED.get_or_init(|| (path.to_path_buf(), trie));
        Ok(trie)
    }
}
