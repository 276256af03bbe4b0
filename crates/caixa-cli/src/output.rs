//! Text/JSON output selection shared by every handler.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// How handlers render their result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One pretty-printed JSON document.
    Json,
}

impl OutputFormat {
    /// Pick the format from the global `--json` flag.
    pub fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }

    /// Write `text` in text mode, or `value` serialized in JSON mode.
    pub fn emit<T: Serialize>(self, out: &mut dyn Write, text: &str, value: &T) -> Result<()> {
        match self {
            Self::Text => writeln!(out, "{text}").context("failed to write output")?,
            Self::Json => {
                let rendered =
                    serde_json::to_string_pretty(value).context("failed to serialize output")?;
                writeln!(out, "{rendered}").context("failed to write output")?;
            }
        }
        Ok(())
    }
}
