//! Seniority and years-of-experience signals from English and Swedish job postings.
//!
//! ```
//! use job_signals::{analyze, ExperienceLevel};
//!
//! let r = analyze("Senior Engineer", "Requires 8 years of experience.");
//! assert_eq!(r.experience_level, ExperienceLevel::Senior);
//! assert_eq!(r.min_years_required, 8);
//! ```

pub mod analysis;
pub mod error;
pub mod extract;
pub mod level;
pub mod policy;
pub mod record;
pub mod settings;
pub mod text;
pub mod title;

pub use analysis::{analyze, AnalysisResult, Analyzer};
pub use error::Error;
pub use extract::{extract_mentions, extract_years, MatcherKind, YearsMention};
pub use level::ExperienceLevel;
pub use policy::{LevelSource, ResolutionPolicy, YearsAggregate};
pub use record::{filter_by_level, level_counts, JobPosting, JobRecord};
pub use settings::Settings;
pub use text::normalize_description;
pub use title::{classify_title, TitleFlags};
