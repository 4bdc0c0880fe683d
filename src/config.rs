// ⚙️ Kata Configuration - every tunable in one JSON document
// Missing fields fall back to defaults, so `{}` is a valid config

use crate::error::Result;
use crate::generator::GeneratorPipeline;
use crate::people::DuplicateKeyPolicy;
use crate::rounding::RoundingRule;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "STREAM_KATAS_CONFIG";

// ============================================================================
// SECTIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// First value of the ascending sequence (k)
    pub start: i64,

    /// Number of accepted elements to sum (n)
    pub count: usize,

    #[serde(flatten)]
    pub pipeline: GeneratorPipeline,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            start: 1,
            count: 3,
            pipeline: GeneratorPipeline::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelSettings {
    /// Fixed pool size; None uses rayon's global pool
    pub workers: Option<usize>,

    /// Sleep per element before doubling, in milliseconds
    pub simulated_cost_ms: u64,
}

impl ParallelSettings {
    pub fn simulated_cost(&self) -> Duration {
        Duration::from_millis(self.simulated_cost_ms)
    }
}

impl Default for ParallelSettings {
    fn default() -> Self {
        ParallelSettings {
            workers: None,
            simulated_cost_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// ============================================================================
// KATA CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KataConfig {
    pub rounding: RoundingRule,
    pub generator: GeneratorSettings,
    pub parallel: ParallelSettings,
    pub duplicate_keys: DuplicateKeyPolicy,
    pub output: OutputFormat,

    /// CSV (`name,gender,age`) replacing the sample people for group-by and to-map
    pub people_csv: Option<PathBuf>,

    /// CSV (`name,population`) replacing the sample cities for rounding
    pub cities_csv: Option<PathBuf>,

    /// Used when RUST_LOG is not set (default: "warn")
    pub log_level: String,
}

impl Default for KataConfig {
    fn default() -> Self {
        KataConfig {
            rounding: RoundingRule::default(),
            generator: GeneratorSettings::default(),
            parallel: ParallelSettings::default(),
            duplicate_keys: DuplicateKeyPolicy::default(),
            output: OutputFormat::default(),
            people_csv: None,
            cities_csv: None,
            log_level: "warn".to_string(),
        }
    }
}

impl KataConfig {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: KataConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// File named by `STREAM_KATAS_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KataError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = KataConfig::default();

        assert_eq!(config.rounding.cutoff, 500_000);
        assert_eq!(config.rounding.unit, 1_000_000);
        assert_eq!(config.generator.start, 1);
        assert_eq!(config.generator.count, 3);
        assert_eq!(config.generator.pipeline.sqrt_threshold, 20.0);
        assert_eq!(config.parallel.workers, None);
        assert_eq!(config.duplicate_keys, DuplicateKeyPolicy::Reject);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.people_csv, None);
        assert_eq!(config.cities_csv, None);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_empty_object_is_default() {
        let file = write_config("{}");
        let config = KataConfig::from_file(file.path()).unwrap();

        assert_eq!(config, KataConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let file = write_config(
            r#"{
                "rounding": { "cutoff": 100 },
                "generator": { "count": 5, "sqrt_threshold": 2.5 },
                "parallel": { "workers": 4, "simulated_cost_ms": 10 },
                "duplicate_keys": "keep_last",
                "output": "json",
                "people_csv": "/data/people.csv"
            }"#,
        );

        let config = KataConfig::from_file(file.path()).unwrap();

        assert_eq!(config.rounding.cutoff, 100);
        assert_eq!(config.rounding.unit, 1_000_000);
        assert_eq!(config.generator.start, 1);
        assert_eq!(config.generator.count, 5);
        assert_eq!(config.generator.pipeline.sqrt_threshold, 2.5);
        assert_eq!(config.parallel.workers, Some(4));
        assert_eq!(config.parallel.simulated_cost(), Duration::from_millis(10));
        assert_eq!(config.duplicate_keys, DuplicateKeyPolicy::KeepLast);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.people_csv, Some(PathBuf::from("/data/people.csv")));
        assert_eq!(config.cities_csv, None);
    }

    #[test]
    fn test_invalid_json() {
        let file = write_config("{ not json");

        match KataConfig::from_file(file.path()) {
            Err(KataError::Config(_)) => {}
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        match KataConfig::from_file("/definitely/not/here.json") {
            Err(KataError::Io(_)) => {}
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
