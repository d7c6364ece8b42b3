pub mod defaults;
pub mod models;

use crate::cli::{CheckArgs, MapArgs, OptimizeArgs, OutputFormat};
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use models::{AppConfig, DictionaryConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use wordmap::engine::config as core_config;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOptimizationConfig {
    #[serde(rename = "max-permutations")]
    max_permutations: Option<u64>,
    #[serde(rename = "batch-size")]
    batch_size: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDictionaryConfig {
    path: Option<PathBuf>,
    #[serde(rename = "skip-unknown")]
    skip_unknown: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    format: Option<OutputFormat>,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub max_permutations: Option<u64>,
    pub batch_size: Option<usize>,
    pub dictionary: Option<PathBuf>,
    pub skip_unknown: bool,
    pub format: Option<OutputFormat>,
    pub set_values: Vec<String>,
}

impl From<&MapArgs> for CliOverrides {
    fn from(args: &MapArgs) -> Self {
        Self {
            dictionary: args.dictionary.dictionary.clone(),
            skip_unknown: args.dictionary.skip_unknown,
            format: args.output.format,
            ..Default::default()
        }
    }
}

impl From<&OptimizeArgs> for CliOverrides {
    fn from(args: &OptimizeArgs) -> Self {
        Self {
            max_permutations: args.max_permutations,
            batch_size: args.batch_size,
            dictionary: args.dictionary.dictionary.clone(),
            skip_unknown: args.dictionary.skip_unknown,
            format: args.output.format,
            set_values: args.set_values.clone(),
        }
    }
}

impl From<&CheckArgs> for CliOverrides {
    fn from(args: &CheckArgs) -> Self {
        Self {
            dictionary: args.dictionary.clone(),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    optimization: Option<PartialOptimizationConfig>,
    dictionary: Option<PartialDictionaryConfig>,
    output: Option<PartialOutputConfig>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` if one was given; otherwise every value comes from the
    /// command line or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, overrides: &CliOverrides) -> Result<AppConfig> {
        self.apply_set_values(&overrides.set_values)?;
        let defaults = DefaultsConfig::default();

        let opt_config = self.optimization.take().unwrap_or_default();
        let dict_config = self.dictionary.take().unwrap_or_default();
        let output_config = self.output.take().unwrap_or_default();

        let optimization = core_config::OptimizationConfigBuilder::new()
            .max_permutations(
                overrides
                    .max_permutations
                    .or(opt_config.max_permutations)
                    .unwrap_or(defaults.max_permutations),
            )
            .batch_size(
                overrides
                    .batch_size
                    .or(opt_config.batch_size)
                    .unwrap_or(defaults.batch_size),
            )
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let dictionary = Self::merge_dictionary(overrides, dict_config, &defaults)?;

        let format = overrides
            .format
            .or(output_config.format)
            .unwrap_or(defaults.format);

        Ok(AppConfig {
            optimization,
            dictionary,
            format,
        })
    }

    fn merge_dictionary(
        overrides: &CliOverrides,
        partial: PartialDictionaryConfig,
        defaults: &DefaultsConfig,
    ) -> Result<Option<DictionaryConfig>> {
        let Some(path) = overrides.dictionary.clone().or(partial.path) else {
            if partial.skip_unknown == Some(true) {
                return Err(CliError::Config(
                    "`dictionary.skip-unknown` requires `dictionary.path`.".to_string(),
                ));
            }
            return Ok(None);
        };

        if !path.exists() {
            return Err(CliError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Dictionary file does not exist: {}", path.display()),
            )));
        }

        let skip_unknown = overrides.skip_unknown
            || partial.skip_unknown.unwrap_or(defaults.skip_unknown);
        Ok(Some(DictionaryConfig { path, skip_unknown }))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "optimization.max-permutations" => {
                    self.optimization
                        .get_or_insert_with(Default::default)
                        .max_permutations = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                "optimization.batch-size" => {
                    self.optimization
                        .get_or_insert_with(Default::default)
                        .batch_size = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                "dictionary.path" => {
                    self.dictionary.get_or_insert_with(Default::default).path =
                        Some(PathBuf::from(value_str));
                }
                "dictionary.skip-unknown" => {
                    self.dictionary
                        .get_or_insert_with(Default::default)
                        .skip_unknown = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                "output.format" => {
                    let format = match value_str {
                        "text" => OutputFormat::Text,
                        "json" => OutputFormat::Json,
                        _ => {
                            return Err(CliError::Config(format!(
                                "Invalid output format for {}: {} (expected 'text' or 'json')",
                                key, value_str
                            )));
                        }
                    };
                    self.output.get_or_insert_with(Default::default).format = Some(format);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
