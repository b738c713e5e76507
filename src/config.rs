// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration
//!
//! Layers, later wins: built-in defaults, a YAML file (`--config` or
//! `CAMPUS_ASSIST_CONFIG`), then environment variables:
//!
//! - `CAMPUS_ASSIST_LANG`: default reply language code
//! - `CAMPUS_ASSIST_FAQ`: FAQ table file replacing the built-in entries
//! - `CAMPUS_ASSIST_LOG`: tracing filter directive (`RUST_LOG` still wins)

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssistError, Result};
use crate::faq::FaqTable;
use crate::i18n::Lang;
use crate::responder::Responder;

pub const ENV_CONFIG: &str = "CAMPUS_ASSIST_CONFIG";
pub const ENV_LANG: &str = "CAMPUS_ASSIST_LANG";
pub const ENV_FAQ: &str = "CAMPUS_ASSIST_FAQ";
pub const ENV_LOG: &str = "CAMPUS_ASSIST_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub default_language: Lang,
    pub faq_path: Option<PathBuf>,
    pub log_filter: String,
    pub popular_query_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: Lang::En,
            faq_path: None,
            log_filter: "info".to_string(),
            popular_query_limit: 10,
        }
    }
}

impl Config {
    /// Resolve the configuration from file and process environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(explicit, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an injectable environment.
    pub fn load_with(explicit: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file = explicit
            .map(Path::to_path_buf)
            .or_else(|| env(ENV_CONFIG).filter(|v| !v.trim().is_empty()).map(PathBuf::from));

        let mut config = match file {
            Some(path) => {
                let source = fs::read_to_string(&path).map_err(|e| {
                    AssistError::Config(format!("cannot read {}: {}", path.display(), e))
                })?;
                Self::from_yaml_str(&source)?
            }
            None => Self::default(),
        };
        config.apply_env(env)?;
        Ok(config)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|e| AssistError::Config(e.to_string()))
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(code) = env(ENV_LANG).filter(|v| !v.trim().is_empty()) {
            self.default_language = code
                .parse::<Lang>()
                .map_err(|e: AssistError| AssistError::Config(format!("{}: {}", ENV_LANG, e)))?;
        }
        if let Some(path) = env(ENV_FAQ).filter(|v| !v.trim().is_empty()) {
            self.faq_path = Some(PathBuf::from(path));
        }
        if let Some(filter) = env(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_filter = filter;
        }
        Ok(())
    }

    /// FAQ table from `faq_path`, or the built-in one.
    pub fn faq_table(&self) -> anyhow::Result<FaqTable> {
        match &self.faq_path {
            Some(path) => FaqTable::load(path)
                .with_context(|| format!("loading FAQ table configured as {}", path.display())),
            None => Ok(FaqTable::builtin()),
        }
    }

    pub fn responder(&self) -> anyhow::Result<Responder> {
        Ok(Responder::new(self.faq_table()?))
    }
}
