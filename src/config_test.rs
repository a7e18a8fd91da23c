use super::*;

#[test]
fn normalize_runtime_value_trims_and_rejects_empty() {
    assert_eq!(normalize_runtime_value(""), None);
    assert_eq!(normalize_runtime_value("   "), None);
    assert_eq!(
        normalize_runtime_value("  https://api.example.com/graphql "),
        Some("https://api.example.com/graphql".to_owned())
    );
}

#[test]
fn parse_timeout_ms_accepts_positive_integers_only() {
    assert_eq!(parse_timeout_ms("2500"), Some(2500));
    assert_eq!(parse_timeout_ms(" 2500 "), Some(2500));
    assert_eq!(parse_timeout_ms("2500.0"), None);
    assert_eq!(parse_timeout_ms("0"), None);
    assert_eq!(parse_timeout_ms("-5"), None);
    assert_eq!(parse_timeout_ms("1.5"), None);
    assert_eq!(parse_timeout_ms("soon"), None);
}

#[test]
fn build_env_falls_back_to_defaults() {
    let config = AppConfig::from_build_env(None, None);
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.graphql_endpoint, "/graphql");
    assert_eq!(config.request_timeout_ms, 10_000);
}

#[test]
fn build_env_ignores_blank_and_invalid_values() {
    let config = AppConfig::from_build_env(Some("  "), Some("never"));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn build_env_uses_provided_values() {
    let config = AppConfig::from_build_env(Some("https://api.example.com/graphql"), Some("3000"));
    assert_eq!(config.graphql_endpoint, "https://api.example.com/graphql");
    assert_eq!(config.request_timeout_ms, 3000);
}

#[test]
fn apply_runtime_overrides_ignores_missing_values() {
    let mut config = AppConfig::default();
    apply_runtime_overrides(&mut config, RuntimeConfig::default());
    assert_eq!(config, AppConfig::default());
}

#[test]
fn apply_runtime_overrides_overwrites_when_present() {
    let mut config = AppConfig::default();
    let runtime = RuntimeConfig {
        graphql_endpoint: normalize_runtime_value("https://staging.example.com/graphql"),
        request_timeout_ms: parse_timeout_ms("1500"),
    };

    apply_runtime_overrides(&mut config, runtime);

    assert_eq!(config.graphql_endpoint, "https://staging.example.com/graphql");
    assert_eq!(config.request_timeout_ms, 1500);
}
