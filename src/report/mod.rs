// SPDX-License-Identifier: PMPL-1.0-or-later

//! CLI output: colored text or structured formats

pub mod formatter;
pub mod output;

pub use formatter::ReportFormatter;
pub use output::OutputFormat;
