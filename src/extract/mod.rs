pub mod lexicon;
pub mod patterns;

use std::ops::Range;

use regex::Captures;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use lexicon::{parse_numeral, swedish_number, vague_quantity};
pub use patterns::MatcherKind;

/// A years-of-experience phrase found in a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearsMention {
    pub kind: MatcherKind,
    /// Byte offsets into the scanned description.
    pub span: Range<usize>,
    pub text: String,
    /// `None` when the match carried no usable value (zero, unknown word, overflow).
    pub value: Option<u32>,
}

/// Accepted values in order of appearance. One entry per mention, duplicates kept.
pub fn extract_years(description: &str) -> Vec<u32> {
    extract_mentions(description)
        .into_iter()
        .filter_map(|m| m.value)
        .collect()
}

/// Leftmost-first, non-overlapping scan over every matcher kind.
///
/// Each kind keeps its next match as a lookahead; the one starting first wins and
/// ties go to the kind listed first in [`MatcherKind::ALL`]. This is the same result
/// a single alternation of the four patterns would give with `find_iter`.
pub fn extract_mentions(description: &str) -> Vec<YearsMention> {
    scan(description).mentions
}

struct Scan {
    mentions: Vec<YearsMention>,
    /// Regex searches issued, at most one per kind plus one per mention.
    searches: usize,
}

/// Next known match for one kind. `exhausted` once a search from some cursor found
/// nothing, since no later cursor can find anything either.
struct Lookahead<'h> {
    kind: MatcherKind,
    next: Option<Captures<'h>>,
    exhausted: bool,
}

fn match_start(caps: &Captures<'_>) -> usize {
    caps.get(0).map_or(usize::MAX, |m| m.start())
}

fn scan(description: &str) -> Scan {
    let mut slots = MatcherKind::ALL.map(|kind| Lookahead {
        kind,
        next: None,
        exhausted: false,
    });
    let mut mentions = Vec::new();
    let mut searches = 0;
    let mut pos = 0;

    while pos < description.len() {
        // A stored match starting at or after the cursor is still the leftmost one.
        for slot in slots.iter_mut().filter(|s| !s.exhausted) {
            if slot.next.as_ref().map_or(true, |c| match_start(c) < pos) {
                searches += 1;
                slot.next = slot.kind.regex().captures_at(description, pos);
                slot.exhausted = slot.next.is_none();
            }
        }

        let Some(winner) = slots
            .iter_mut()
            .filter(|s| s.next.is_some())
            .min_by_key(|s| s.next.as_ref().map_or(usize::MAX, match_start))
        else {
            break;
        };
        let kind = winner.kind;
        let Some(caps) = winner.next.take() else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        let value = resolve(kind, &caps);
        match value {
            Some(v) => debug!(kind = ?kind, text = whole.as_str(), years = v, "years mention"),
            None => warn!(kind = ?kind, text = whole.as_str(), "skipping unusable years mention"),
        }

        mentions.push(YearsMention {
            kind,
            span: whole.range(),
            text: whole.as_str().to_string(),
            value,
        });

        pos = if whole.end() > whole.start() {
            whole.end()
        } else {
            next_char_boundary(description, whole.end())
        };
    }

    Scan { mentions, searches }
}

/// Resolve one match to a positive year count.
fn resolve(kind: MatcherKind, caps: &Captures<'_>) -> Option<u32> {
    let value = match kind {
        MatcherKind::VagueQuantity => vague_quantity(caps.name("vague")?.as_str())?,
        MatcherKind::NumeralYears | MatcherKind::QualifierYears | MatcherKind::ReorderedYears => {
            let lower = parse_numeral(caps.name("num")?.as_str())?;
            if caps.name("plus").is_some() {
                lower
            } else if let Some(upper) = caps.name("upper") {
                // An upper bound too large for u32 leaves the lower bound as the minimum.
                parse_numeral(upper.as_str()).map_or(lower, |u| lower.min(u))
            } else {
                lower
            }
        }
    };
    (value > 0).then_some(value)
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    (from + 1..=s.len())
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(s.len())
}
