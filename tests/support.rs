use reckon::{
    Config, Diagnostics, Location,
    config::{DEFAULT_MAX_NESTING_DEPTH, MAX_NESTING_DEPTH_VAR},
    diagnostics::{Diagnostic, Severity},
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn diagnostics_keep_emission_order() {
    init_logging();
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());

    diagnostics.warning(Location::new(0, 1), "first");
    diagnostics.error(Location::new(2, 0), "second");
    diagnostics.warning(Location::new(0, 1), "first");

    let messages: Vec<_> = diagnostics.entries()
                                      .iter()
                                      .map(|entry| entry.message.as_str())
                                      .collect();
    assert_eq!(messages, ["first", "second", "first"]);
    assert_eq!(diagnostics.len(), 3);
    assert!(diagnostics.has_errors());
}

#[test]
fn warnings_alone_are_not_errors() {
    let mut diagnostics = Diagnostics::default();
    diagnostics.warning(Location::default(), "just a warning");

    assert!(!diagnostics.has_errors());
    assert_eq!((&diagnostics).into_iter().count(), 1);
}

#[test]
fn diagnostic_display() {
    let diagnostic = Diagnostic { severity: Severity::Error,
                                  location: Location::new(4, 2),
                                  message:  "unexpected token".to_string(), };

    assert_eq!(diagnostic.to_string(), "error at 4:2: unexpected token");
}

fn config_with(value: Option<&str>) -> Config {
    Config::from_lookup(|name| {
        assert_eq!(name, MAX_NESTING_DEPTH_VAR);
        value.map(ToString::to_string)
    })
}

#[test]
fn config_reads_nesting_depth() {
    init_logging();
    assert_eq!(config_with(None).max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    assert_eq!(config_with(Some("32")).max_nesting_depth, 32);
    assert_eq!(config_with(Some(" 64\n")).max_nesting_depth, 64);
}

#[test]
fn config_ignores_invalid_nesting_depth() {
    init_logging();
    assert_eq!(config_with(Some("0")), Config::default());
    assert_eq!(config_with(Some("-3")), Config::default());
    assert_eq!(config_with(Some("deep")), Config::default());
}
