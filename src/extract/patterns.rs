use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const NUMERAL: &str = r"[0-9]+|(?:en|ett|två|tre|fyra|fem|sex|sju|åtta|nio|tio)\b";
const UNIT: &str = r"(?:years?|yrs?|års?)";
const NOUN: &str = r"(?:experience|erfarenhet|arbetslivserfarenhet)";
const CONNECTIVE: &str = r"(?:(?:of|av)\s*)?";
const QUALIFIER: &str = r"(?:minst|at\s+least)";
const VAGUE: &str = r"några|flera|ett\s+par";

/// `+` suffix, `-M` / `–M` upper bound, or a bare hyphen ("5-years").
fn range() -> String {
    format!(r"(?:\s*(?P<plus>\+)|\s*[-–]\s*(?P<upper>{NUMERAL})|\s*-)?")
}

static NUMERAL_YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b(?:{QUALIFIER}\s*)?(?P<num>{NUMERAL}){}\s*{UNIT}\s*{CONNECTIVE}{NOUN}\b",
        range()
    ))
});

static REORDERED_YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b{NOUN}\s*:?\s*{CONNECTIVE}(?:{QUALIFIER}\s*)?(?P<num>{NUMERAL}){}\s*{UNIT}\b",
        range()
    ))
});

static QUALIFIER_YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b{QUALIFIER}\s+(?P<num>{NUMERAL}){}\s*{UNIT}(?:\s*{CONNECTIVE}{NOUN})?\b",
        range()
    ))
});

static VAGUE_QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b(?P<vague>{VAGUE})\s*{UNIT}\s*{CONNECTIVE}{NOUN}\b"
    ))
});

fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).unwrap()
}

/// One surface form of a years-of-experience mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    /// "5 years of experience", "3 års erfarenhet"
    NumeralYears,
    /// "experience of 5 years", "erfarenhet av minst 3 år"
    ReorderedYears,
    /// "at least 3 years", "minst två år"
    QualifierYears,
    /// "flera års erfarenhet"
    VagueQuantity,
}

impl MatcherKind {
    /// Priority order; earlier kinds win when two matches start at the same offset.
    pub const ALL: [MatcherKind; 4] = [
        MatcherKind::NumeralYears,
        MatcherKind::ReorderedYears,
        MatcherKind::QualifierYears,
        MatcherKind::VagueQuantity,
    ];

    pub fn regex(self) -> &'static Regex {
        match self {
            MatcherKind::NumeralYears => &NUMERAL_YEARS_RE,
            MatcherKind::ReorderedYears => &REORDERED_YEARS_RE,
            MatcherKind::QualifierYears => &QUALIFIER_YEARS_RE,
            MatcherKind::VagueQuantity => &VAGUE_QUANTITY_RE,
        }
    }
}

/// Forces compilation of every pattern. A malformed pattern panics here, at startup.
pub fn warm_up() {
    for kind in MatcherKind::ALL {
        let _ = kind.regex();
    }
}
