//! Tests for single- and paired-channel loggers.

use std::sync::{Arc, Mutex};
use tasklog::{CallbackOutput, ConsoleLogger, Logger, LoggerWithErrors, PairedSink};

fn capture() -> (Arc<Mutex<Vec<String>>>, CallbackOutput<impl Fn(&str) + Send + Sync>) {
    let printed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&printed);
    let output = CallbackOutput::new(move |line: &str| {
        sink.lock().unwrap().push(line.to_string());
    });
    (printed, output)
}

#[test]
fn quiet_records_in_call_order() {
    let mut logger = Logger::quiet();
    logger.write("one");
    logger.write(String::from("two"));
    logger.write("three");

    assert_eq!(logger.result(), ["one", "two", "three"]);
    assert_eq!(logger.len(), 3);
    assert!(!logger.is_mirrored());
}

#[test]
fn quiet_starts_empty() {
    let logger = Logger::quiet();
    assert!(logger.is_empty());
    assert!(logger.result().is_empty());
}

#[test]
fn result_is_idempotent() {
    let mut logger = Logger::quiet();
    logger.write("a");
    let first = logger.result().to_vec();
    let second = logger.result().to_vec();
    assert_eq!(first, second);
}

#[test]
fn result_reflects_later_writes() {
    let mut logger = Logger::quiet();
    logger.write("a");
    assert_eq!(logger.result(), ["a"]);
    logger.write("b");
    assert_eq!(logger.result(), ["a", "b"]);
}

#[test]
fn into_result_hands_over_lines() {
    let mut logger = Logger::quiet();
    logger.write("x");
    assert_eq!(logger.into_result(), vec!["x".to_string()]);
}

#[test]
fn mirrored_prints_and_records_in_same_order() {
    let (printed, output) = capture();
    let mut logger = Logger::also_console(output);
    logger.write("first");
    logger.write("second");

    assert!(logger.is_mirrored());
    assert_eq!(*printed.lock().unwrap(), vec!["first", "second"]);
    assert_eq!(logger.result(), ["first", "second"]);
}

#[test]
fn console_logger_is_mirrored() {
    assert!(Logger::console().is_mirrored());
}

#[test]
fn paired_channels_are_independent() {
    let mut logs = LoggerWithErrors::quiet();
    logs.info("i1");
    logs.error("e1");
    logs.info("i2");

    assert_eq!(logs.infos(), ["i1", "i2"]);
    assert_eq!(logs.errors(), ["e1"]);

    let result = logs.result();
    assert_eq!(result.infos, vec!["i1", "i2"]);
    assert_eq!(result.errors, vec!["e1"]);
    assert!(result.has_errors());
}

#[test]
fn paired_result_matches_into_result() {
    let mut logs = LoggerWithErrors::quiet();
    logs.info("i");
    logs.error("e");
    let snapshot = logs.result();
    assert_eq!(snapshot, logs.into_result());
}

#[test]
fn paired_with_factory_mirrors_both_channels() {
    let printed = Arc::new(Mutex::new(Vec::new()));
    let factory = {
        let printed = Arc::clone(&printed);
        move || {
            let sink = Arc::clone(&printed);
            Logger::also_console(CallbackOutput::new(move |line: &str| {
                sink.lock().unwrap().push(line.to_string());
            }))
        }
    };

    let mut logs = LoggerWithErrors::with(factory);
    logs.info("info line");
    logs.error("error line");

    assert_eq!(*printed.lock().unwrap(), vec!["info line", "error line"]);
    assert_eq!(logs.infos(), ["info line"]);
    assert_eq!(logs.errors(), ["error line"]);
}

#[test]
fn paired_sink_trait_routes_to_channels() {
    let mut logs = LoggerWithErrors::quiet();
    PairedSink::info(&mut logs, "i".to_string());
    PairedSink::error(&mut logs, "e".to_string());
    assert_eq!(logs.infos(), ["i"]);
    assert_eq!(logs.errors(), ["e"]);
}

#[test]
fn console_logger_splits_streams() {
    let (infos, info_output) = capture();
    let (errors, error_output) = capture();
    let mut console = ConsoleLogger::with_outputs(info_output, error_output);

    console.info("ok".to_string());
    console.error("bad".to_string());

    assert_eq!(*infos.lock().unwrap(), vec!["ok"]);
    assert_eq!(*errors.lock().unwrap(), vec!["bad"]);
}

#[test]
fn console_paired_logger_records_both_channels() {
    let mut logs = LoggerWithErrors::console();
    logs.info("visible info");
    logs.error("visible error");
    let result = logs.into_result();
    assert_eq!(result.infos, vec!["visible info"]);
    assert_eq!(result.errors, vec!["visible error"]);
}
