// SPDX-License-Identifier: PMPL-1.0-or-later

//! Transcript files and the conversation log filter
//!
//! A transcript file holds either one conversation or a list of them, as
//! JSON (`.json`) or YAML (`.yaml`/`.yml`). Directories are walked
//! recursively and unreadable files are skipped with a warning.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::i18n::Lang;
use crate::types::Conversation;

#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Many(Vec<Conversation>),
    One(Box<Conversation>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Json,
    Yaml,
}

impl FileKind {
    fn of(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Some(FileKind::Json),
            Some("yaml") | Some("yml") => Some(FileKind::Yaml),
            _ => None,
        }
    }
}

/// Load every conversation under `path`, oldest first.
pub fn load_transcripts(path: &Path) -> Result<Vec<Conversation>> {
    if !path.exists() {
        return Err(anyhow!("transcript path not found: {}", path.display()));
    }

    if path.is_file() {
        let mut conversations = parse_file(path)?;
        conversations.sort_by_key(|c| c.created_at);
        return Ok(conversations);
    }

    let files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| FileKind::of(p).is_some())
        .collect();

    let mut conversations: Vec<Conversation> = files
        .par_iter()
        .filter_map(|file| match parse_file(file) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(file = %file.display(), error = %err, "skipping transcript");
                None
            }
        })
        .flatten()
        .collect();

    conversations.sort_by_key(|c| c.created_at);
    info!(
        directory = %path.display(),
        files = files.len(),
        conversations = conversations.len(),
        "transcripts loaded"
    );
    Ok(conversations)
}

fn parse_file(path: &Path) -> Result<Vec<Conversation>> {
    let kind = FileKind::of(path)
        .ok_or_else(|| anyhow!("unsupported transcript format: {}", path.display()))?;
    let source = fs::read_to_string(path)
        .with_context(|| format!("reading transcript {}", path.display()))?;
    let parsed: TranscriptFile = match kind {
        FileKind::Json => serde_json::from_str(&source)
            .with_context(|| format!("parsing {}", path.display()))?,
        FileKind::Yaml => serde_yaml::from_str(&source)
            .with_context(|| format!("parsing {}", path.display()))?,
    };
    Ok(match parsed {
        TranscriptFile::Many(list) => list,
        TranscriptFile::One(one) => vec![*one],
    })
}

/// Write one conversation; YAML for `.yaml`/`.yml`, pretty JSON otherwise.
pub fn save_transcript(conversation: &Conversation, path: &Path) -> Result<()> {
    let content = match FileKind::of(path) {
        Some(FileKind::Yaml) => serde_yaml::to_string(conversation)?,
        _ => serde_json::to_string_pretty(conversation)?,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Conversation log viewer filter; unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ConversationFilter {
    /// Case-insensitive text that some message must contain
    pub search: Option<String>,
    pub language: Option<Lang>,
    pub rating: Option<u8>,
    pub since: Option<DateTime<Utc>>,
}

impl ConversationFilter {
    pub fn matches(&self, conversation: &Conversation) -> bool {
        if self.language.is_some_and(|l| l != conversation.language) {
            return false;
        }
        if self.rating.is_some() && self.rating != conversation.user_satisfaction {
            return false;
        }
        if self.since.is_some_and(|s| conversation.created_at < s) {
            return false;
        }
        match self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                conversation
                    .messages
                    .iter()
                    .any(|m| m.content.to_lowercase().contains(&term))
            }
        }
    }

    pub fn apply<'a>(&self, conversations: &'a [Conversation]) -> Vec<&'a Conversation> {
        conversations.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::Responder;

    #[test]
    fn filter_by_language_rating_and_text() {
        let responder = Responder::default();
        let mut en = Conversation::start("a", Lang::En);
        en.send(&responder, "library timings");
        en.rate(5).unwrap();
        let mut hi = Conversation::start("b", Lang::Hi);
        hi.send(&responder, "फीस");
        let all = vec![en, hi];

        let by_lang = ConversationFilter {
            language: Some(Lang::Hi),
            ..Default::default()
        };
        assert_eq!(by_lang.apply(&all).len(), 1);

        let by_rating = ConversationFilter {
            rating: Some(5),
            ..Default::default()
        };
        assert_eq!(by_rating.apply(&all)[0].session_id, "a");

        let by_text = ConversationFilter {
            search: Some("LIBRARY".to_string()),
            ..Default::default()
        };
        assert_eq!(by_text.apply(&all).len(), 1);

        assert_eq!(ConversationFilter::default().apply(&all).len(), 2);
    }

    #[test]
    fn file_kind_by_extension() {
        assert_eq!(FileKind::of(Path::new("a/b.JSON")), Some(FileKind::Json));
        assert_eq!(FileKind::of(Path::new("b.yml")), Some(FileKind::Yaml));
        assert_eq!(FileKind::of(Path::new("notes.txt")), None);
    }
}
