use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::extract_years;
use crate::level::ExperienceLevel;
use crate::policy::ResolutionPolicy;
use crate::record::{JobPosting, JobRecord};
use crate::title::classify_title;

/// Seniority signals inferred from one `(title, description)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub experience_level: ExperienceLevel,
    /// Every accepted mention in the description, in order of appearance.
    pub years_of_experience: Vec<u32>,
    pub min_years_required: u32,
    pub has_senior_title: bool,
    pub has_junior_title: bool,
}

/// Stateless engine bound to a resolution policy. Cheap to copy and share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Analyzer {
    policy: ResolutionPolicy,
}

impl Analyzer {
    pub fn new(policy: ResolutionPolicy) -> Self {
        Analyzer { policy }
    }

    pub fn policy(&self) -> &ResolutionPolicy {
        &self.policy
    }

    pub fn analyze(&self, title: &str, description: &str) -> AnalysisResult {
        let flags = classify_title(title);
        let years_of_experience = extract_years(description);
        let resolution = self.policy.resolve(flags, &years_of_experience);

        debug!(
            title,
            level = %resolution.level,
            min_years = resolution.min_years_required,
            mentions = years_of_experience.len(),
            "analyzed posting"
        );

        AnalysisResult {
            experience_level: resolution.level,
            years_of_experience,
            min_years_required: resolution.min_years_required,
            has_senior_title: flags.senior,
            has_junior_title: flags.junior,
        }
    }

    /// Missing title or description count as empty text.
    pub fn analyze_posting(&self, posting: &JobPosting) -> JobRecord {
        let analysis = self.analyze(
            posting.title.as_deref().unwrap_or_default(),
            posting.description.as_deref().unwrap_or_default(),
        );
        JobRecord::new(posting.clone(), analysis)
    }
}

/// Analyze with the default (title decides, minimum raises floor) policy.
pub fn analyze(title: &str, description: &str) -> AnalysisResult {
    Analyzer::default().analyze(title, description)
}
