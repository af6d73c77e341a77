//! Environment-driven tuning for property-based test suites.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const RETIA_PBT_CASES_ENV_KEY: &str = "RETIA_PBT_CASES";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
}

impl ProptestRunProfile {
    /// Loads the profile, falling back to `default_cases` when the override is
    /// absent or malformed.
    ///
    /// # Examples
    /// ```
    /// use retia_test_support::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        let Ok(raw) = env::var(RETIA_PBT_CASES_ENV_KEY) else {
            return Self {
                cases: default_cases,
            };
        };
        let cases = match parse_cases(&raw) {
            Ok(cases) => cases,
            Err(reason) => {
                tracing::warn!(
                    env = RETIA_PBT_CASES_ENV_KEY,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test case override; using default",
                );
                default_cases
            }
        };
        Self { cases }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}
