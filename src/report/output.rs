// SPDX-License-Identifier: PMPL-1.0-or-later

//! Output format selection for CLI results

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Machine-readable rendering; `None` for `Text`, which the formatter
    /// prints itself.
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Option<String>> {
        match self {
            OutputFormat::Text => Ok(None),
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
            OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
        }
    }

    /// Print `value` in this format, delegating `Text` to `text`.
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, text: impl FnOnce(&T)) -> Result<()> {
        match self.serialize(value)? {
            Some(rendered) => println!("{}", rendered.trim_end()),
            None => text(value),
        }
        Ok(())
    }
}
