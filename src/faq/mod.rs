// SPDX-License-Identifier: PMPL-1.0-or-later

//! FAQ content: authored entries and the ordered table the responder scans

mod builtin;
pub mod entry;
pub mod table;

pub use entry::{FaqEntry, LocalizedText, TextView};
pub use table::{CategoryCount, FaqFilter, FaqTable, KeywordHit};
