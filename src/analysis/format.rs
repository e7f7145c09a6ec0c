//! Free-text analysis formatter.
//!
//! Splits model output into typed display blocks with a best-effort
//! line classifier. This is an ordered sequence of pattern checks with
//! a paragraph fallback, not a grammar — it never fails, whatever the
//! model produced.

use crate::types::{AnalysisBlock, BlockKind};

/// Prefixes treated as section headings.
///
/// Deliberately narrow: the prompt asks for at most a few structured
/// insights, so only `1.` through `4.` count. A fifth point or
/// two-digit numbering falls through to paragraph.
const HEADING_PREFIXES: [&str; 4] = ["1.", "2.", "3.", "4."];

/// Classify response text into an ordered sequence of display blocks.
///
/// Blank lines are dropped; everything else becomes exactly one block
/// carrying the trimmed line text.
pub fn format_response(text: &str) -> Vec<AnalysisBlock> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let kind = if HEADING_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
                BlockKind::Heading
            } else if trimmed.starts_with('-') {
                BlockKind::Bullet
            } else {
                BlockKind::Paragraph
            };
            Some(AnalysisBlock::new(kind, trimmed))
        })
        .collect()
}
