//! `prefixnet.toml` settings
//!
//! Every key is optional; command line flags take precedence.
//!
//! ```toml
//! width = 16
//! policy = "priority"
//! format = "json"
//! stats = true
//! parallel = false
//! ```

use anyhow::{Context, Result};
use prefixnet_core::OverlapPolicy;
use prefixnet_render::OutputFormat;
use serde::Deserialize;
use std::path::Path;

/// Settings read from a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Width used when no positional argument is given
    #[serde(default)]
    pub width: Option<usize>,

    #[serde(default)]
    pub policy: Option<OverlapPolicy>,

    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Append cell counts to the report
    #[serde(default)]
    pub stats: bool,

    /// Classify stages in parallel
    #[serde(default)]
    pub parallel: bool,
}

/// Load settings from a file path
pub fn from_path(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    from_str(&contents).with_context(|| format!("Invalid config file {}", path.display()))
}

/// Parse settings from TOML text
pub fn from_str(s: &str) -> Result<Settings> {
    toml::from_str(s).context("Failed to parse settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_settings() {
        assert_eq!(from_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_full_settings() {
        let toml = r#"
            width = 16
            policy = "priority"
            format = "json"
            stats = true
            parallel = true
        "#;

        let settings = from_str(toml).unwrap();
        assert_eq!(settings.width, Some(16));
        assert_eq!(settings.policy, Some(OverlapPolicy::Priority));
        assert_eq!(settings.format, Some(OutputFormat::Json));
        assert!(settings.stats);
        assert!(settings.parallel);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(from_str("colour = \"red\"").is_err());
    }

    #[test]
    fn test_bad_policy_rejected() {
        assert!(from_str("policy = \"first\"").is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "width = 4").unwrap();
        writeln!(file, "policy = \"all\"").unwrap();

        let settings = from_path(file.path()).unwrap();
        assert_eq!(settings.width, Some(4));
        assert_eq!(settings.policy, Some(OverlapPolicy::All));
        assert_eq!(settings.format, None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = from_path(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
