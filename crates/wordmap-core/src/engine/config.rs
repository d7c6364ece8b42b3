use thiserror::Error;

pub const DEFAULT_MAX_PERMUTATIONS: u64 = 200_000;
pub const DEFAULT_BATCH_SIZE: usize = 1024;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationConfig {
    /// Hard cap on the number of word orders evaluated.
    pub max_permutations: u64,
    /// Permutations scored per batch by the parallel search.
    pub batch_size: usize,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            max_permutations: DEFAULT_MAX_PERMUTATIONS,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

#[derive(Default)]
pub struct OptimizationConfigBuilder {
    max_permutations: Option<u64>,
    batch_size: Option<usize>,
}

impl OptimizationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_permutations(mut self, max: u64) -> Self {
        self.max_permutations = Some(max);
        self
    }
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }

    pub fn build(self) -> Result<OptimizationConfig, ConfigError> {
        let max_permutations = self.max_permutations.unwrap_or(DEFAULT_MAX_PERMUTATIONS);
        if max_permutations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_permutations",
                reason: "at least one permutation must be evaluated".to_string(),
            });
        }
        let batch_size = self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE);
        if batch_size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "batch_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(OptimizationConfig {
            max_permutations,
            batch_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let config = OptimizationConfigBuilder::new().build().unwrap();
        assert_eq!(config, OptimizationConfig::default());
        assert_eq!(config.max_permutations, 200_000);
    }

    #[test]
    fn builder_accepts_explicit_values() {
        let config = OptimizationConfigBuilder::new()
            .max_permutations(1)
            .batch_size(16)
            .build()
            .unwrap();
        assert_eq!(config.max_permutations, 1);
        assert_eq!(config.batch_size, 16);
    }

    #[test]
    fn zero_cap_is_rejected() {
        let result = OptimizationConfigBuilder::new().max_permutations(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "max_permutations",
                ..
            })
        ));
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let result = OptimizationConfigBuilder::new().batch_size(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "batch_size",
                ..
            })
        ));
    }
}
