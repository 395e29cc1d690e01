//! Integration tests for environment configuration.

use padel_ranking::{Config, ConfigError, EqualScorePolicy, RosterPolicy, ScoringRules};
use std::collections::HashMap;
use std::path::PathBuf;

fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.data_file, PathBuf::from("data.csv"));
    assert_eq!(config.rules, ScoringRules::default());
    assert_eq!(config.rules.equal_scores, EqualScorePolicy::Reject);
    assert_eq!(config.rules.roster, RosterPolicy::Strict);
    assert_eq!(config.rules.max_score, Some(10));
}

#[test]
fn reads_every_variable() {
    let config = config_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "9000"),
        ("DATA_FILE", "/tmp/padel.csv"),
        ("EQUAL_SCORE_POLICY", "second-team-wins"),
        ("ROSTER_POLICY", "Auto-Register"),
        ("MAX_SCORE", "none"),
    ])
    .unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9000);
    assert_eq!(config.data_file, PathBuf::from("/tmp/padel.csv"));
    assert_eq!(config.rules.equal_scores, EqualScorePolicy::SecondTeamWins);
    assert_eq!(config.rules.roster, RosterPolicy::AutoRegister);
    assert_eq!(config.rules.max_score, None);
}

#[test]
fn rejects_unparseable_values() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err.variable, "PORT");
    assert_eq!(err.value, "eighty");

    let err = config_from(&[("EQUAL_SCORE_POLICY", "draw")]).unwrap_err();
    assert_eq!(err.variable, "EQUAL_SCORE_POLICY");

    let err = config_from(&[("MAX_SCORE", "-3")]).unwrap_err();
    assert_eq!(err.variable, "MAX_SCORE");
}
