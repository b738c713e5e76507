// SPDX-License-Identifier: PMPL-1.0-or-later

//! Request/response boundary around the responder
//!
//! One JSON object per line in, one per line out:
//!
//! ```text
//! {"text": "hello", "language": "hi", "history": []}
//! {"reply": "नमस्ते! ...", "suggestions": [...], "escalate": false}
//! ```
//!
//! A line that cannot be parsed (bad UTF-8, bad JSON, unsupported
//! language) still gets an answer: the English "service unavailable"
//! message with `escalate` set. Language codes are read case-insensitively,
//! as on the command line.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, error};

use crate::i18n::{t, Lang};
use crate::responder::Responder;
use crate::types::Message;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub text: String,
    #[serde(default)]
    pub language: Lang,
    #[serde(default)]
    pub history: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub reply: String,
    pub suggestions: Vec<String>,
    pub escalate: bool,
}

impl ServiceResponse {
    /// Generic escalation reply for failures outside the responder.
    pub fn unavailable(lang: Lang) -> Self {
        Self {
            reply: t(lang, "chat.unavailable").to_string(),
            suggestions: Vec::new(),
            escalate: true,
        }
    }
}

pub fn handle(responder: &Responder, request: &ServiceRequest) -> ServiceResponse {
    let reply = responder.respond(&request.text, request.language, &request.history);
    ServiceResponse {
        reply: reply.content,
        suggestions: reply.suggestions,
        escalate: reply.needs_human_help,
    }
}

/// Parse and answer one request line; malformed input gets the English
/// unavailable reply.
pub fn handle_line(responder: &Responder, line: &str) -> ServiceResponse {
    match serde_json::from_str::<ServiceRequest>(line) {
        Ok(request) => handle(responder, &request),
        Err(err) => {
            error!(error = %err, "malformed service request");
            ServiceResponse::unavailable(Lang::En)
        }
    }
}

/// Answer every non-blank line of `reader` on `writer`, flushing after each.
///
/// A line that is not valid UTF-8 gets the unavailable reply like any other
/// malformed request. Returns the number of requests answered. Stops at end
/// of input or on an I/O error.
pub fn serve<R: BufRead, W: Write>(responder: &Responder, mut reader: R, mut writer: W) -> Result<usize> {
    let mut served = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_line(responder, line),
            Err(err) => {
                error!(error = %err, "service request is not valid UTF-8");
                ServiceResponse::unavailable(Lang::En)
            }
        };
        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        served += 1;
        debug!(served, escalate = response.escalate, "request answered");
    }
    Ok(served)
}
