//! Process-wide engine start-up and teardown.

use super::{Engine, EngineSettings};
use thiserror::Error;

/// Outcome of [`start_up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartUp {
    /// The engine initialized; the process continues as a normal application.
    Running,
    /// This process is an engine-spawned helper whose work is already done.
    /// The caller must exit with the given code instead of running any
    /// application code.
    HelperExit(i32),
}

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("engine initialization failed")]
    InitializationFailed,
}

/// Initialize the embedded engine. Must be called once, before any widget is
/// created.
///
/// Engine helper sub-processes re-enter the host executable; for those the
/// engine's own entry point consumes the process and this returns
/// [`StartUp::HelperExit`] without initializing anything.
pub fn start_up(engine: &dyn Engine, settings: &EngineSettings) -> Result<StartUp, BootstrapError> {
    if let Some(code) = engine.execute_process() {
        return Ok(StartUp::HelperExit(code));
    }

    log::info!("initializing embedded browser engine");
    if engine.initialize(settings) {
        Ok(StartUp::Running)
    } else {
        Err(BootstrapError::InitializationFailed)
    }
}

/// Tear the engine down. Must be the last engine interaction in the process,
/// after every widget has been destroyed.
pub fn shut_down(engine: &dyn Engine) {
    log::info!("shutting down embedded browser engine");
    engine.shutdown();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mock::MockEngine;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_start_up_initializes_engine() {
        let engine = MockEngine::new();
        let outcome = start_up(&*engine, &EngineSettings::default()).unwrap();
        assert_eq!(outcome, StartUp::Running);
        assert!(engine.initialized.load(Ordering::SeqCst));
    }

    #[test]
    fn test_start_up_short_circuits_helper_process() {
        let engine = MockEngine::helper(7);
        let outcome = start_up(&*engine, &EngineSettings::default()).unwrap();
        assert_eq!(outcome, StartUp::HelperExit(7));
        // The helper path must never reach engine initialization.
        assert!(!engine.initialized.load(Ordering::SeqCst));
    }

    #[test]
    fn test_start_up_reports_initialization_failure() {
        let engine = MockEngine::failing_init();
        let result = start_up(&*engine, &EngineSettings::default());
        assert!(matches!(result, Err(BootstrapError::InitializationFailed)));
    }

    #[test]
    fn test_shut_down_reaches_engine() {
        let engine = MockEngine::new();
        shut_down(&*engine);
        assert!(engine.shutdown_called.load(Ordering::SeqCst));
    }
}
