use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_valid_number() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 8081 ")), Ok(8081));
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PORT"));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

// =============================================================================
// env_parse — unique keys avoid races with parallel tests.
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: u32 = env_parse("__TEST_CATALOG_MISSING_5521__", 5);
    assert_eq!(val, 5);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__TEST_CATALOG_EP_VALID__", "12") };
    let val: u32 = env_parse("__TEST_CATALOG_EP_VALID__", 0);
    assert_eq!(val, 12);
    unsafe { std::env::remove_var("__TEST_CATALOG_EP_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__TEST_CATALOG_EP_INVALID__", "lots") };
    let val: u32 = env_parse("__TEST_CATALOG_EP_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__TEST_CATALOG_EP_INVALID__") };
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(
        ConfigError::MissingEnvVar("DATABASE_URL".into()).to_string(),
        "missing required environment variable: DATABASE_URL"
    );
    assert_eq!(
        ConfigError::InvalidEnvVar { var: "PORT".into(), reason: "bad".into() }.to_string(),
        "invalid value for PORT: bad"
    );
}
