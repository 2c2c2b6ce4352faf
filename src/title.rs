use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const SENIOR_KEYWORDS: &[&str] = &["senior", "lead", "principal", "architect", "expert", "staff"];
pub const JUNIOR_KEYWORDS: &[&str] = &["junior", "entry", "graduate", "trainee", "intern"];

static SENIOR_RE: LazyLock<Regex> = LazyLock::new(|| keyword_regex(SENIOR_KEYWORDS));
static JUNIOR_RE: LazyLock<Regex> = LazyLock::new(|| keyword_regex(JUNIOR_KEYWORDS));

fn keyword_regex(words: &[&str]) -> Regex {
    let pattern = format!(r"(?i)\b(?:{})\b", words.join("|"));
    Regex::new(&pattern).unwrap()
}

/// Seniority keywords found in a job title. Both, one, or neither may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TitleFlags {
    pub senior: bool,
    pub junior: bool,
}

/// Case-insensitive whole-word lookup of the senior and junior lexicons.
pub fn classify_title(title: &str) -> TitleFlags {
    TitleFlags {
        senior: SENIOR_RE.is_match(title),
        junior: JUNIOR_RE.is_match(title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senior_keywords() {
        for t in ["Senior Backend Engineer", "Tech LEAD", "Principal SRE", "Solutions Architect", "Staff engineer"] {
            assert!(classify_title(t).senior, "{t}");
        }
    }

    #[test]
    fn junior_keywords() {
        for t in ["Junior Developer", "Entry level analyst", "Graduate programme", "IT-trainee", "Summer Intern"] {
            assert!(classify_title(t).junior, "{t}");
        }
    }

    #[test]
    fn whole_word_only() {
        let f = classify_title("Architectural Designer");
        assert!(!f.senior);
        assert!(!classify_title("Leadership coach").senior);
        assert!(!classify_title("Internal auditor").junior);
        assert!(!classify_title("Entrepreneur in residence").junior);
    }

    #[test]
    fn both_and_neither() {
        assert_eq!(
            classify_title("Senior/Junior Java developer"),
            TitleFlags { senior: true, junior: true }
        );
        assert_eq!(classify_title("Utvecklare"), TitleFlags::default());
        assert_eq!(classify_title(""), TitleFlags::default());
    }
}
