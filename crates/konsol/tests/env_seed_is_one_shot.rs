//! KONSOL changes made after the first logger is built are never read.

mod common;

use std::sync::Arc;

use common::{KonsolEnv, global_logger};
use konsol::{Method, RecordingConsole, VerbosityRegistry};

#[test]
fn env_set_after_first_construction_is_ignored() {
    let console = Arc::new(RecordingConsole::new());
    let mut env = KonsolEnv::acquire();

    env.no_modules();
    let logger = global_logger("mymodule", &console);
    assert!(VerbosityRegistry::global().is_seeded());

    env.modules("mymodule");
    logger.info(format_args!("Should be suppressed"));

    // A second construction, even for another module, does not re-read it.
    let other = global_logger("myothermodule", &console);
    logger.info(format_args!("Should be suppressed"));
    other.info(format_args!("Should be suppressed"));
    env.restore();

    assert_eq!(console.count(Method::Info), 0);
    assert!(VerbosityRegistry::global().enabled_modules().is_empty());
}
