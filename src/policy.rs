//! Merging title flags and description years into one classification.

use serde::{Deserialize, Serialize};

use crate::level::ExperienceLevel;
use crate::title::TitleFlags;

/// Where the categorical level comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelSource {
    /// Title keywords only. Years never change the category.
    #[default]
    Title,
    /// Title keywords first; years decide only when no keyword fired.
    TitleThenYears,
    /// Years decide whenever present; the title is the fallback.
    Years,
}

/// Which collected value is compared against the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearsAggregate {
    #[default]
    Min,
    Max,
}

impl YearsAggregate {
    pub fn apply(self, years: &[u32]) -> Option<u32> {
        match self {
            YearsAggregate::Min => years.iter().copied().min(),
            YearsAggregate::Max => years.iter().copied().max(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionPolicy {
    /// Minimum years implied by a senior title.
    pub senior_floor: u32,
    pub level_source: LevelSource,
    pub aggregate: YearsAggregate,
    /// Years-derived levels: at or above this is SENIOR.
    pub senior_min_years: u32,
    /// Years-derived levels: at or below this is JUNIOR. Between the two is MID_LEVEL.
    pub junior_max_years: u32,
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        ResolutionPolicy {
            senior_floor: 5,
            level_source: LevelSource::Title,
            aggregate: YearsAggregate::Min,
            senior_min_years: 5,
            junior_max_years: 2,
        }
    }
}

/// Output of [`ResolutionPolicy::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub level: ExperienceLevel,
    pub min_years_required: u32,
}

impl ResolutionPolicy {
    pub fn resolve(&self, flags: TitleFlags, years: &[u32]) -> Resolution {
        // Senior is checked first, so a title carrying both keywords is SENIOR.
        let (title_level, mut min_years_required) = if flags.senior {
            (ExperienceLevel::Senior, self.senior_floor)
        } else if flags.junior {
            (ExperienceLevel::Junior, 0)
        } else {
            (ExperienceLevel::NotSpecified, 0)
        };

        let found = self.aggregate.apply(years);
        if let Some(found) = found {
            if found > min_years_required {
                min_years_required = found;
            }
        }

        let level = match (self.level_source, found) {
            (LevelSource::TitleThenYears, Some(n)) if title_level == ExperienceLevel::NotSpecified => {
                self.level_for_years(n)
            }
            (LevelSource::Years, Some(n)) => self.level_for_years(n),
            _ => title_level,
        };

        Resolution {
            level,
            min_years_required,
        }
    }

    fn level_for_years(&self, years: u32) -> ExperienceLevel {
        if years >= self.senior_min_years {
            ExperienceLevel::Senior
        } else if years <= self.junior_max_years {
            ExperienceLevel::Junior
        } else {
            ExperienceLevel::MidLevel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: TitleFlags = TitleFlags { senior: false, junior: false };
    const SENIOR: TitleFlags = TitleFlags { senior: true, junior: false };
    const JUNIOR: TitleFlags = TitleFlags { senior: false, junior: true };
    const BOTH: TitleFlags = TitleFlags { senior: true, junior: true };

    fn canonical() -> ResolutionPolicy {
        ResolutionPolicy::default()
    }

    #[test]
    fn title_defaults() {
        let p = canonical();
        assert_eq!(
            p.resolve(SENIOR, &[]),
            Resolution { level: ExperienceLevel::Senior, min_years_required: 5 }
        );
        assert_eq!(
            p.resolve(JUNIOR, &[]),
            Resolution { level: ExperienceLevel::Junior, min_years_required: 0 }
        );
        assert_eq!(
            p.resolve(NONE, &[]),
            Resolution { level: ExperienceLevel::NotSpecified, min_years_required: 0 }
        );
    }

    #[test]
    fn senior_wins_over_junior() {
        assert_eq!(canonical().resolve(BOTH, &[]).level, ExperienceLevel::Senior);
    }

    #[test]
    fn years_only_raise_the_floor() {
        let p = canonical();
        assert_eq!(p.resolve(SENIOR, &[8]).min_years_required, 8);
        assert_eq!(p.resolve(SENIOR, &[2]).min_years_required, 5);
        assert_eq!(p.resolve(SENIOR, &[8, 3]).min_years_required, 5);
        assert_eq!(p.resolve(NONE, &[4, 7]).min_years_required, 4);
    }

    #[test]
    fn canonical_never_changes_category_from_years() {
        let p = canonical();
        assert_eq!(p.resolve(NONE, &[10]).level, ExperienceLevel::NotSpecified);
        assert_eq!(p.resolve(JUNIOR, &[10]).level, ExperienceLevel::Junior);
        assert_eq!(p.resolve(JUNIOR, &[10]).min_years_required, 10);
    }

    #[test]
    fn max_aggregate() {
        let p = ResolutionPolicy { aggregate: YearsAggregate::Max, ..canonical() };
        assert_eq!(p.resolve(SENIOR, &[8, 3]).min_years_required, 8);
        assert_eq!(p.resolve(NONE, &[1, 3]).min_years_required, 3);
    }

    #[test]
    fn title_then_years_fills_unlabeled_titles() {
        let p = ResolutionPolicy { level_source: LevelSource::TitleThenYears, ..canonical() };
        assert_eq!(p.resolve(NONE, &[6]).level, ExperienceLevel::Senior);
        assert_eq!(p.resolve(NONE, &[3]).level, ExperienceLevel::MidLevel);
        assert_eq!(p.resolve(NONE, &[2]).level, ExperienceLevel::Junior);
        assert_eq!(p.resolve(NONE, &[]).level, ExperienceLevel::NotSpecified);
        assert_eq!(p.resolve(JUNIOR, &[9]).level, ExperienceLevel::Junior);
    }

    #[test]
    fn years_source_overrides_title() {
        let p = ResolutionPolicy { level_source: LevelSource::Years, ..canonical() };
        assert_eq!(p.resolve(SENIOR, &[1]).level, ExperienceLevel::Junior);
        assert_eq!(p.resolve(SENIOR, &[1]).min_years_required, 5);
        assert_eq!(p.resolve(JUNIOR, &[7]).level, ExperienceLevel::Senior);
        assert_eq!(p.resolve(SENIOR, &[]).level, ExperienceLevel::Senior);
    }

    #[test]
    fn deserialize_partial_policy() {
        let p: ResolutionPolicy =
            serde_json::from_str(r#"{"level_source":"title_then_years","aggregate":"max"}"#).unwrap();
        assert_eq!(p.level_source, LevelSource::TitleThenYears);
        assert_eq!(p.aggregate, YearsAggregate::Max);
        assert_eq!(p.senior_floor, 5);
    }
}
