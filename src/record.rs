//! Posting input shape and the analyzed record a caller would store.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::level::ExperienceLevel;

/// A scraped or API-fetched posting. Accepts both the scraper's field names and
/// the JobTech names (`headline`, `employer`, `publication_date`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, alias = "headline", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Plain text, markup already removed upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "employer", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(
        default,
        alias = "publication_date",
        alias = "upload_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub posted_date: Option<String>,
    #[serde(default, alias = "application_deadline", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

/// A posting together with the analysis fields that get persisted alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub experience_level: ExperienceLevel,
    pub years_of_experience: Vec<u32>,
    pub min_years_required: u32,
}

impl JobRecord {
    pub fn new(posting: JobPosting, analysis: AnalysisResult) -> Self {
        JobRecord {
            posting,
            experience_level: analysis.experience_level,
            years_of_experience: analysis.years_of_experience,
            min_years_required: analysis.min_years_required,
        }
    }
}

pub fn filter_by_level(records: &[JobRecord], level: ExperienceLevel) -> Vec<&JobRecord> {
    records
        .iter()
        .filter(|r| r.experience_level == level)
        .collect()
}

/// Count per level, in [`ExperienceLevel::ALL`] order, zeros included.
pub fn level_counts(records: &[JobRecord]) -> Vec<(ExperienceLevel, usize)> {
    ExperienceLevel::ALL
        .iter()
        .map(|&lvl| (lvl, records.iter().filter(|r| r.experience_level == lvl).count()))
        .collect()
}
