//! Command-line and environment configuration for `weft report`.
//!
//! Every option can also be set through the environment:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `WEFT_HANDLE` | `Note,Image` | Comma-separated type names the resolver gets a callback for |
//! | `WEFT_MAX_DEPTH` | `4` | How many levels of embedded nodes to descend into |
//! | `WEFT_FORMAT` | `text` | `text` or `json` |
//! | `WEFT_LOG` | `weftstreams=info,weft=info` | `tracing` filter directives |

use std::fmt;
use std::str::FromStr;

use clap::Args;

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!(
                "unknown format {other:?}; expected one of: text, json"
            )),
        }
    }
}

/// Settings for one `weft report` run.
#[derive(Debug, Clone, Args)]
pub struct CliConfig {
    /// Type names to register a callback for, e.g. `Note,Image`.
    ///
    /// `Drone`, the sample's extension type, is declared in the resolver's
    /// type universe when named here.
    #[arg(
        long = "handle",
        env = "WEFT_HANDLE",
        value_name = "TYPE,...",
        value_delimiter = ',',
        default_values = ["Note", "Image"]
    )]
    pub handle: Vec<String>,

    /// Levels of embedded nodes to descend into (0 = the root's own
    /// properties only).
    #[arg(long, env = "WEFT_MAX_DEPTH", value_name = "N", default_value_t = 4)]
    pub max_depth: usize,

    /// Output format: text | json
    #[arg(long, env = "WEFT_FORMAT", value_name = "FORMAT", default_value_t = Format::Text)]
    pub format: Format,
}

// --- tests -------------------------------------------------------------------
