//! Report rendering for classified prefix networks
//!
//! The classifier only produces structured stages; this crate turns them
//! into the text table or a JSON document.

pub mod error;
pub mod text;

pub use error::{RenderError, Result};
pub use text::{banner, render_stage, render_text, render_token, LEGEND};

use prefixnet_core::{NetworkStats, PrefixNetwork};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Stage table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Rendering options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Append cell counts
    pub stats: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    network: &'a PrefixNetwork,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<NetworkStats>,
}

/// Render a complete report: banner, legend and stage table, or JSON
pub fn render_report(network: &PrefixNetwork, options: RenderOptions) -> Result<String> {
    debug!(
        "Rendering {}-bit network as {}",
        network.width, options.format
    );

    match options.format {
        OutputFormat::Text => {
            let mut out = format!("{}\n{}\n", banner(network), LEGEND);
            out.push_str(&render_text(network));
            if options.stats {
                out.push_str(&format!("Cells: {}\n", network.stats().summary()));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let report = JsonReport {
                network,
                stats: options.stats.then(|| network.stats()),
            };
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            Ok(out)
        }
    }
}
