//! Provenance attributes from the CI environment

use chrono::{DateTime, SecondsFormat, Utc};
use contracts::{ContractError, ProvenanceAttrs};
use tracing::debug;

pub const ENV_GITHUB_SERVER_URL: &str = "GITHUB_SERVER_URL";
pub const ENV_GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_GITHUB_SHA: &str = "GITHUB_SHA";

/// Build attributes from the process environment and the current time
///
/// # Errors
/// `MissingEnv` if any of the server url, repository or sha is unset.
pub fn build_attrs() -> Result<ProvenanceAttrs, ContractError> {
    build_attrs_with(|var| std::env::var(var).ok(), Utc::now())
}

/// Build attributes from an explicit environment lookup and clock
pub fn build_attrs_with<F>(env: F, now: DateTime<Utc>) -> Result<ProvenanceAttrs, ContractError>
where
    F: Fn(&str) -> Option<String>,
{
    let require = |var: &str| env(var).ok_or_else(|| ContractError::missing_env(var));

    let server_url = require(ENV_GITHUB_SERVER_URL)?;
    let repository = require(ENV_GITHUB_REPOSITORY)?;
    let sha = require(ENV_GITHUB_SHA)?;

    let git_hash_url = format!("{server_url}/{repository}/commit/{sha}");
    let timestamp = format_timestamp(now);
    debug!(git_hash_url = %git_hash_url, timestamp = %timestamp, "provenance attributes built");

    Ok(ProvenanceAttrs::build(git_hash_url, timestamp))
}

/// ISO-8601 UTC with microseconds and an explicit `+00:00` offset
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::{BUILD_GIT_HASH_KEY, BUILD_TIMESTAMP_KEY};
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (ENV_GITHUB_SERVER_URL, "https://github.com".to_string()),
            (ENV_GITHUB_REPOSITORY, "leap-stc/casm_feedstock".to_string()),
            (ENV_GITHUB_SHA, "0123abcd".to_string()),
        ])
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_all_vars_set() {
        let env = full_env();
        let attrs = build_attrs_with(|k| env.get(k).cloned(), fixed_now()).unwrap();

        assert_eq!(attrs.len(), 2);
        assert_eq!(
            attrs.get(BUILD_GIT_HASH_KEY),
            Some("https://github.com/leap-stc/casm_feedstock/commit/0123abcd")
        );
        assert_eq!(
            attrs.get(BUILD_TIMESTAMP_KEY),
            Some("2024-03-01T12:30:00.000000+00:00")
        );
    }

    #[test]
    fn test_url_contains_values_in_order() {
        let env = full_env();
        let attrs = build_attrs_with(|k| env.get(k).cloned(), fixed_now()).unwrap();
        let url = attrs.get(BUILD_GIT_HASH_KEY).unwrap();

        let server = url.find("https://github.com").unwrap();
        let repo = url.find("leap-stc/casm_feedstock").unwrap();
        let sha = url.find("0123abcd").unwrap();
        assert!(server < repo && repo < sha);
    }

    #[test]
    fn test_any_missing_var_fails() {
        for missing in [ENV_GITHUB_SERVER_URL, ENV_GITHUB_REPOSITORY, ENV_GITHUB_SHA] {
            let mut env = full_env();
            env.remove(missing);
            let err = build_attrs_with(|k| env.get(k).cloned(), fixed_now()).unwrap_err();
            match err {
                ContractError::MissingEnv { var } => assert_eq!(var, missing),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_timestamp_keeps_micros() {
        let now = Utc.timestamp_opt(1_700_000_000, 123_456_000).unwrap();
        assert_eq!(format_timestamp(now), "2023-11-14T22:13:20.123456+00:00");
    }
}
