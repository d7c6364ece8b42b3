use crate::cli::OutputFormat;
use std::path::PathBuf;
use wordmap::engine::config as core_config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryConfig {
    pub path: PathBuf,
    pub skip_unknown: bool,
}

/// Fully resolved settings for one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub optimization: core_config::OptimizationConfig,
    pub dictionary: Option<DictionaryConfig>,
    pub format: OutputFormat,
}
