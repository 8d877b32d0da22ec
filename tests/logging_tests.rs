#![cfg(feature = "logging")]

use propfile::{init_logging, LogFormat, LoggingConfig, LoggingError, Properties};

// The global subscriber can be installed once per process, so the whole
// lifecycle lives in a single test.
#[test]
fn test_init_logging_lifecycle() {
    let bad = LoggingConfig {
        level: "loud".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        init_logging(bad),
        Err(LoggingError::InvalidDirective { .. })
    ));

    let config = LoggingConfig {
        level: "warn".to_string(),
        format: LogFormat::Compact,
        with_ansi: false,
        directives: vec!["propfile=debug".to_string()],
        respect_rust_log: false,
        ..Default::default()
    };
    init_logging(config.clone()).unwrap();

    // Library events flow through the installed subscriber without panicking.
    let mut props = Properties::new();
    props.load_str("a=1\nb=2\n").unwrap();
    assert!(props.load_str("broken\n").is_err());

    assert!(matches!(
        init_logging(config),
        Err(LoggingError::AlreadyInitialized(_))
    ));
}
