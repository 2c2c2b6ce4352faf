use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::policy::ResolutionPolicy;

pub const ENV_PREFIX: &str = "JOB_SIGNALS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub policy: ResolutionPolicy,
}

impl Settings {
    /// Defaults, then the optional TOML file, then `JOB_SIGNALS__POLICY__*` variables.
    pub fn load(path: Option<&Path>) -> Result<Settings, Error> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    pub(crate) fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Settings, Error> {
        let mut builder = Config::builder();
        if let Some(p) = path {
            builder = builder.add_source(File::from(p).required(true));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{LevelSource, YearsAggregate};

    fn unique_prefix(test: &str) -> String {
        format!("JOB_SIGNALS_TEST_{}_{}", test.to_uppercase(), std::process::id())
    }

    #[test]
    fn defaults_without_sources() {
        let s = Settings::load_with_prefix(None, &unique_prefix("defaults")).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.policy.senior_floor, 5);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("job_signals_settings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("job_signals.toml");
        std::fs::write(
            &path,
            "[policy]\nsenior_floor = 4\nlevel_source = \"years\"\naggregate = \"max\"\n",
        )
        .unwrap();

        let s = Settings::load_with_prefix(Some(&path), &unique_prefix("toml")).unwrap();
        assert_eq!(s.policy.senior_floor, 4);
        assert_eq!(s.policy.level_source, LevelSource::Years);
        assert_eq!(s.policy.aggregate, YearsAggregate::Max);
        assert_eq!(s.policy.junior_max_years, 2);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn environment_overrides_policy() {
        let prefix = unique_prefix("env");
        std::env::set_var(format!("{prefix}__POLICY__LEVEL_SOURCE"), "title_then_years");
        std::env::set_var(format!("{prefix}__POLICY__SENIOR_FLOOR"), "6");

        let s = Settings::load_with_prefix(None, &prefix).unwrap();
        assert_eq!(s.policy.level_source, LevelSource::TitleThenYears);
        assert_eq!(s.policy.senior_floor, 6);
        assert_eq!(s.policy.aggregate, YearsAggregate::Min);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/job_signals.toml")));
        assert!(matches!(err, Err(Error::Config(_))));
    }
}
