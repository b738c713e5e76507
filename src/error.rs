// SPDX-License-Identifier: PMPL-1.0-or-later

//! Library error type

#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("language '{0}' is not supported (expected one of en, hi, mr, gu, ta)")]
    UnsupportedLanguage(String),

    #[error("'{0}' is not an ISO 639-1 language code")]
    UnknownLanguageCode(String),

    #[error("invalid FAQ entry '{id}': {reason}")]
    InvalidFaq { id: String, reason: String },

    #[error("satisfaction rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AssistError>;
