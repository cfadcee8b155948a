use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_not_directory, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "year-filter")]
#[command(about = "Keep the CSV rows whose year is 2002 or later")]
pub struct CliConfig {
    /// CSV file to read; its header must name a `year` column
    pub source_path: PathBuf,

    /// CSV file to create or overwrite with the kept rows
    pub destination_path: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn source_path(&self) -> &Path {
        &self.source_path
    }

    fn destination_path(&self) -> &Path {
        &self.destination_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source_path", &self.source_path)?;
        validate_path("destination_path", &self.destination_path)?;
        validate_not_directory(&self.destination_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_paths() {
        let config = CliConfig::parse_from(["year-filter", "raw.csv", "out/filtered.csv"]);
        assert_eq!(config.source_path, PathBuf::from("raw.csv"));
        assert_eq!(config.destination_path, PathBuf::from("out/filtered.csv"));
        assert!(!config.verbose);
        assert!(!config.monitor);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config =
            CliConfig::parse_from(["year-filter", "--verbose", "--monitor", "a.csv", "b.csv"]);
        assert!(config.verbose);
        assert!(config.monitor);
    }

    #[test]
    fn test_requires_both_paths() {
        assert!(CliConfig::try_parse_from(["year-filter", "only.csv"]).is_err());
        assert!(CliConfig::try_parse_from(["year-filter", "a.csv", "b.csv", "c.csv"]).is_err());
    }

    #[test]
    fn test_empty_path_is_invalid() {
        // clap 已拒絕空字串，這裡直接建構
        let config = CliConfig {
            source_path: PathBuf::new(),
            destination_path: PathBuf::from("b.csv"),
            verbose: false,
            monitor: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serializes_for_debug_logging() {
        let config = CliConfig::parse_from(["year-filter", "a.csv", "b.csv"]);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["source_path"], "a.csv");
        assert_eq!(json["verbose"], false);
    }
}
