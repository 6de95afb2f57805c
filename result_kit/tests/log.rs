use result_kit::{
    err,
    log::{Level, LogConfig, LogConfigError, LogResult, LogSink, Logger},
    ok, some, Result,
};
use serial_test::serial;
use std::{
    fmt::Debug,
    sync::{Arc, Mutex},
};

type Records = Arc<Mutex<Vec<(Level, String, String)>>>;

fn recording(level: Level) -> (Logger, Records) {
    let records = Records::default();
    let sink = {
        let records = Arc::clone(&records);
        move |level: Level, value: &dyn Debug, message: &str| {
            records.lock().unwrap().push((
                level,
                format!("{value:?}"),
                message.to_owned(),
            ));
        }
    };
    let logger = Logger::new(LogConfig::builder().level(level).build(), sink);
    (logger, records)
}

#[test]
fn writes_at_or_above_configured_level() {
    let (logger, records) = recording(Level::Warn);

    logger.debug(&1, "dropped");
    logger.info(&2, "dropped");
    logger.warn(&3, "kept");
    logger.fatal(&4, "kept");

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], (Level::Warn, "3".into(), "kept".into()));
    assert_eq!(records[1].0, Level::Fatal);
}

#[test]
fn silent_config_suppresses_everything() {
    let (logger, records) = recording(Level::Silent);

    logger.fatal(&"fatal", "still dropped");
    logger.write(Level::Silent, &"silent", "never written");

    assert!(records.lock().unwrap().is_empty());
}

#[test]
fn decorations_return_the_receiver() {
    let (logger, records) = recording(Level::Trace);

    let res: Result<u32, &str> = ok(7)
        .trace(&logger, "loaded")
        .info(&logger, "loaded")
        .log_error(&logger, "loaded");
    assert_eq!(res, ok(7));

    let records = records.lock().unwrap();
    let levels: Vec<_> = records.iter().map(|(level, ..)| *level).collect();
    assert_eq!(levels, [Level::Trace, Level::Info, Level::Error]);
    assert_eq!(records[0].1, "Ok(7)");
}

#[test]
fn ok_and_err_decorations_fire_on_their_variant_only() {
    let (logger, records) = recording(Level::Trace);

    let _ = ok::<_, &str>(1)
        .ok_debug(&logger, "ok branch")
        .err_debug(&logger, "err branch");
    let _ = err::<u8, _>("missing")
        .ok_warn(&logger, "ok branch")
        .err_warn(&logger, "err branch");

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].0, Level::Debug);
    assert_eq!(records[0].2, "ok branch");
    assert_eq!(records[1].0, Level::Warn);
    assert_eq!(records[1].2, "err branch");
}

#[test]
fn gating_applies_to_decorations() {
    let (logger, records) = recording(Level::Error);

    let res = err::<(), _>("boom")
        .err_info(&logger, "below threshold")
        .err_fatal(&logger, "above threshold");

    assert_eq!(res, err("boom"));
    assert_eq!(records.lock().unwrap().len(), 1);
}

struct Counting(Arc<Mutex<usize>>);

impl LogSink for Counting {
    fn write(&self, _: Level, _: &dyn Debug, _: &str) {
        *self.0.lock().unwrap() += 1;
    }
}

#[test]
fn custom_sink_types_are_accepted() {
    let count = Arc::new(Mutex::new(0));
    let logger =
        Logger::new(LogConfig::default(), Counting(Arc::clone(&count)));

    logger.info(&(), "one");
    logger.debug(&(), "below default level");
    let _ = some(3).ok_or("none").fatal(&logger, "two");

    assert_eq!(*count.lock().unwrap(), 2);
}

#[test]
#[serial]
fn config_defaults_without_env() {
    temp_env::with_vars_unset(
        ["RESULT_KIT_LOG_LEVEL", "RESULT_KIT_LOG_PRETTY"],
        || {
            let config = LogConfig::from_env().unwrap();
            assert_eq!(config, LogConfig::default());
            assert_eq!(config.level, Level::Info);
            assert!(!config.pretty);
        },
    );
}

#[test]
#[serial]
fn config_reads_env() {
    temp_env::with_vars(
        [
            ("RESULT_KIT_LOG_LEVEL", Some("warning")),
            ("RESULT_KIT_LOG_PRETTY", Some("true")),
        ],
        || {
            let config = LogConfig::from_env().unwrap();
            assert_eq!(config.level, Level::Warn);
            assert!(config.pretty);

            let logger = Logger::from_env().unwrap();
            assert!(!logger.enabled(Level::Info));
            assert!(logger.enabled(Level::Error));
        },
    );
}

#[test]
#[serial]
fn config_rejects_unknown_level() {
    temp_env::with_var("RESULT_KIT_LOG_LEVEL", Some("verbose"), || {
        let e = LogConfig::from_env().unwrap_err();
        assert!(matches!(e, LogConfigError::ConfigError(_)));
        assert!(e.to_string().contains("verbose"));
    });
}

#[test]
fn config_deserializes_from_json() {
    let config: LogConfig =
        serde_json::from_str(r#"{ "level": "Debug" }"#).unwrap();
    assert_eq!(config.level, Level::Debug);
    assert!(!config.pretty);

    assert!(serde_json::from_str::<LogConfig>(r#"{ "level": 5 }"#).is_err());
}
