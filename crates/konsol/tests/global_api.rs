//! Process-wide enable/disable behaviour.
//!
//! Tests in this file run in parallel against the same global registry, so
//! each one uses module names no other test touches. None of them depends
//! on the KONSOL environment variable.

mod common;

use std::sync::Arc;

use common::global_logger;
use konsol::{Konsol, Method, RecordingConsole};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn empty_module_name_is_rejected() {
    let err = Konsol::new("").unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn module_name_is_kept() {
    let logger = Konsol::new("construction_name").unwrap();
    assert_eq!(logger.module_name().as_str(), "construction_name");
}

#[test]
fn logger_exposes_the_console_methods() {
    let logger = Konsol::new("construction_methods").unwrap();
    let names: Vec<_> = logger.forwarders().map(|f| f.method().as_str()).collect();
    assert_eq!(
        names,
        ["log", "info", "warn", "error", "trace", "dir", "time", "timeEnd"]
    );
}

// ============================================================================
// enable / disable
// ============================================================================

#[test]
fn enable_and_disable_reject_empty_names() {
    assert!(konsol::enable("").unwrap_err().is_invalid_argument());
    assert!(konsol::disable("").unwrap_err().is_invalid_argument());
    assert!(Konsol::enable("").is_err());
    assert!(Konsol::disable("").is_err());
}

#[test]
fn enable_twice_does_not_fail() {
    Konsol::enable("enable_twice").unwrap();
    Konsol::enable("enable_twice").unwrap();
    assert!(konsol::is_enabled("enable_twice"));

    Konsol::disable("enable_twice").unwrap();
    assert!(!konsol::is_enabled("enable_twice"));
}

#[test]
fn disable_twice_does_not_fail() {
    Konsol::enable("disable_twice").unwrap();
    Konsol::disable("disable_twice").unwrap();
    Konsol::disable("disable_twice").unwrap();
    assert!(!konsol::is_enabled("disable_twice"));
}

#[test]
fn disable_never_enabled_module() {
    assert!(Konsol::disable("disable_never_enabled").is_ok());
    assert!(!konsol::is_enabled("disable_never_enabled"));
}

#[test]
fn free_functions_and_associated_functions_share_registry() {
    konsol::enable("shared_registry").unwrap();
    assert!(Konsol::new("shared_registry").unwrap().is_enabled());
    Konsol::disable("shared_registry").unwrap();
    assert!(!konsol::is_enabled("shared_registry"));
}

// ============================================================================
// Output gating
// ============================================================================

#[test]
fn suppressed_when_not_enabled() {
    let console = Arc::new(RecordingConsole::new());
    let logger = global_logger("gating_default", &console);

    logger.info(format_args!("Should be suppressed"));
    assert!(console.is_empty());
}

#[test]
fn forwarded_when_enabled_after_construction() {
    let console = Arc::new(RecordingConsole::new());
    let logger = global_logger("gating_enabled", &console);

    konsol::enable("gating_enabled").unwrap();
    logger.info(format_args!("Should not be suppressed"));
    konsol::disable("gating_enabled").unwrap();

    assert_eq!(console.count(Method::Info), 1);
}

#[test]
fn only_enabled_module_is_forwarded() {
    let console = Arc::new(RecordingConsole::new());
    let first = global_logger("isolation_a", &console);
    let second = global_logger("isolation_b", &console);

    konsol::enable("isolation_a").unwrap();
    first.info(format_args!("Should not be suppressed"));
    second.info(format_args!("Should be suppressed"));
    konsol::disable("isolation_a").unwrap();

    assert_eq!(console.count(Method::Info), 1);
}

#[test]
fn suppressed_again_after_disable() {
    let console = Arc::new(RecordingConsole::new());
    let logger = global_logger("gating_toggle", &console);

    konsol::enable("gating_toggle").unwrap();
    logger.info(format_args!("Should not be suppressed"));
    assert_eq!(console.count(Method::Info), 1);

    konsol::disable("gating_toggle").unwrap();
    logger.info(format_args!("Should be suppressed"));
    assert_eq!(console.count(Method::Info), 1);
}

#[test]
fn only_non_disabled_module_is_forwarded() {
    let console = Arc::new(RecordingConsole::new());
    let first = global_logger("partial_a", &console);
    let second = global_logger("partial_b", &console);

    konsol::enable("partial_a").unwrap();
    konsol::enable("partial_b").unwrap();
    first.info(format_args!("Should not be suppressed"));
    second.info(format_args!("Should not be suppressed"));
    assert_eq!(console.count(Method::Info), 2);

    konsol::disable("partial_a").unwrap();
    first.info(format_args!("Should be suppressed"));
    second.info(format_args!("Should not be suppressed"));
    assert_eq!(console.count(Method::Info), 3);

    konsol::disable("partial_b").unwrap();
}

#[test]
fn enable_then_disable_never_invokes_console() {
    let console = Arc::new(RecordingConsole::new());
    let logger = global_logger("enable_disable_info", &console);

    konsol::enable("enable_disable_info").unwrap();
    konsol::disable("enable_disable_info").unwrap();
    logger.info(format_args!("x"));

    assert!(console.is_empty());
}

#[test]
fn detached_forwarder_follows_registry() {
    let console = Arc::new(RecordingConsole::new());
    let log = global_logger("detached", &console)
        .forwarder(Method::Log)
        .into_fn();

    log(format_args!("Should be suppressed"));
    konsol::enable("detached").unwrap();
    log(format_args!("Should not be suppressed"));
    konsol::disable("detached").unwrap();

    let events = console.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "Should not be suppressed");
}

#[test]
fn names_are_case_sensitive() {
    let console = Arc::new(RecordingConsole::new());
    let logger = global_logger("CaseSensitive", &console);

    konsol::enable("casesensitive").unwrap();
    logger.warn(format_args!("Should be suppressed"));
    konsol::disable("casesensitive").unwrap();

    assert!(console.is_empty());
}
