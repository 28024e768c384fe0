//! Show subcommand for bridge-config CLI
//!
//! Resolves property files and `--set` assignments into a configuration and
//! prints it.

use crate::config::{BridgeConfig, Properties, PropertiesLoader, merge_properties, parse_assignment};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the show subcommand
#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Property file(s) to merge, lowest precedence first
    #[arg(short, long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Individual override, applied after all files
    #[arg(short, long, value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Output format: text (default) or json
    #[arg(short = 'o', long, default_value = "text", value_name = "FORMAT")]
    pub format: ShowFormat,
}

/// Output format for the resolved configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ShowFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ShowFormat::Text),
            "json" => Ok(ShowFormat::Json),
            _ => Err(format!("Invalid format '{}'. Valid options: text, json", s)),
        }
    }
}

impl std::fmt::Display for ShowFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShowFormat::Text => write!(f, "text"),
            ShowFormat::Json => write!(f, "json"),
        }
    }
}

impl ShowArgs {
    /// Merge files and `--set` assignments into one override map.
    pub fn collect_overrides(&self) -> Result<Properties> {
        let loader = self
            .files
            .iter()
            .fold(PropertiesLoader::new(), |loader, path| loader.with_file(path));
        let from_files = loader.load()?;

        let mut assignments = Properties::new();
        for text in &self.set {
            let (key, value) = parse_assignment(text)?;
            assignments.insert(key, value);
        }

        Ok(merge_properties(from_files, assignments))
    }
}

/// Resolve the configuration and render it in the requested format.
pub fn run_show(args: &ShowArgs) -> Result<String> {
    let overrides = args.collect_overrides()?;
    let config = BridgeConfig::from_properties(&overrides)?;

    match args.format {
        ShowFormat::Text => Ok(config.describe()),
        ShowFormat::Json => {
            let mut json = serde_json::to_string_pretty(&config.to_properties())?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_show_format_parse() {
        assert_eq!("text".parse::<ShowFormat>().unwrap(), ShowFormat::Text);
        assert_eq!("JSON".parse::<ShowFormat>().unwrap(), ShowFormat::Json);
        assert!("yaml".parse::<ShowFormat>().is_err());
    }

    #[test]
    fn test_set_overrides_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("bridge.yaml");
        std::fs::write(&file, "BridgePort: 1000\nBridgeHost: from-file\n").unwrap();

        let args = ShowArgs {
            files: vec![file],
            set: vec!["BridgePort=2000".to_string()],
            format: ShowFormat::Text,
        };
        let overrides = args.collect_overrides().unwrap();
        assert_eq!(overrides["BridgePort"], "2000");
        assert_eq!(overrides["BridgeHost"], "from-file");
    }

    #[test]
    fn test_run_show_text_defaults() {
        let output = run_show(&ShowArgs::default()).unwrap();
        assert_eq!(output, BridgeConfig::default().describe());
    }

    #[test]
    fn test_run_show_json() {
        let args = ShowArgs {
            set: vec!["UseFiddlerUrl=true".to_string()],
            format: ShowFormat::Json,
            ..Default::default()
        };
        let output = run_show(&args).unwrap();
        let parsed: Properties = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["UseFiddlerUrl"], "True");
        assert_eq!(parsed["BridgePort"], "44283");
    }

    #[test]
    fn test_run_show_reports_invalid_override() {
        let args = ShowArgs {
            set: vec!["BridgeHttpPort=eighty".to_string()],
            ..Default::default()
        };
        let err = run_show(&args).unwrap_err();
        assert!(err.to_string().contains("BridgeHttpPort"));
        assert!(err.to_string().contains("eighty"));
    }
}
