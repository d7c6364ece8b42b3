use crate::cli::OutputFormat;
use wordmap::engine::config::{DEFAULT_BATCH_SIZE, DEFAULT_MAX_PERMUTATIONS};

pub struct DefaultsConfig {
    pub max_permutations: u64,
    pub batch_size: usize,
    pub skip_unknown: bool,
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_permutations: DEFAULT_MAX_PERMUTATIONS,
            batch_size: DEFAULT_BATCH_SIZE,
            skip_unknown: false,
            format: OutputFormat::Text,
        }
    }
}
