// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed config environment and a recording
// executor so each test can drive the real task pipeline without spawning
// processes or repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use tuckr::config::Config;
use tuckr::exec::{ExecResult, Executor};
use tuckr::logging::Logger;
use tuckr::tasks::Context;

/// Executor that records every command line instead of spawning.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    commands: Mutex<Vec<String>>,
}

impl RecordingExecutor {
    /// All command lines received so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map_or_else(|_| vec![], |g| g.clone())
    }
}

impl Executor for RecordingExecutor {
    fn shell(&self, command: &str) -> anyhow::Result<ExecResult> {
        if let Ok(mut guard) = self.commands.lock() {
            guard.push(command.to_string());
        }
        Ok(ExecResult {
            success: true,
            code: Some(0),
        })
    }

    fn which(&self, _: &str) -> bool {
        true
    }
}

/// An isolated scratch directory for list files referenced from a config.
///
/// The directory is automatically deleted when dropped (via the underlying
/// [`tempfile::TempDir`]).
pub struct TestEnv {
    dir: tempfile::TempDir,
}

impl TestEnv {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path to the scratch directory.
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Write `content` to `<env>/<name>` and return the absolute path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("write test file");
        path
    }
}

/// Parse `content` into a config and wrap it in a context whose home
/// directory is the fixed `/home/test`.
pub fn make_context<'a>(
    content: &str,
    executor: &'a RecordingExecutor,
    log: &'a Logger,
) -> Context<'a> {
    Context {
        config: Config::parse(content).expect("test config should parse"),
        home: PathBuf::from("/home/test"),
        dry_run: false,
        log,
        executor,
    }
}
