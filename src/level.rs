use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Categorical seniority of a posting. Exactly one per analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceLevel {
    Senior,
    Junior,
    MidLevel,
    #[default]
    NotSpecified,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Senior,
        ExperienceLevel::Junior,
        ExperienceLevel::MidLevel,
        ExperienceLevel::NotSpecified,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Senior => "SENIOR",
            ExperienceLevel::Junior => "JUNIOR",
            ExperienceLevel::MidLevel => "MID_LEVEL",
            ExperienceLevel::NotSpecified => "NOT_SPECIFIED",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = Error;

    /// Accepts the wire names plus lowercase / hyphenated spellings ("mid-level").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_uppercase().replace(&['-', ' '][..], "_");
        match norm.as_str() {
            "SENIOR" => Ok(ExperienceLevel::Senior),
            "JUNIOR" => Ok(ExperienceLevel::Junior),
            "MID_LEVEL" | "MID" => Ok(ExperienceLevel::MidLevel),
            "NOT_SPECIFIED" | "NONE" => Ok(ExperienceLevel::NotSpecified),
            _ => Err(Error::UnknownLevel(s.to_string())),
        }
    }
}
