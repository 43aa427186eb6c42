//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use confluent_actions::{ActionRegistry, ConfluentActionsModule, InMemoryConfigSource};

/// Default key names read by the credentials action.
pub const API_KEY_VAR: &str = "CONFLUENT_CLOUD_API_KEY";
pub const API_SECRET_VAR: &str = "CONFLUENT_CLOUD_API_SECRET";

/// Build an in-memory source from optional key and secret values.
pub fn source(api_key: Option<&str>, api_secret: Option<&str>) -> InMemoryConfigSource {
    let mut source = InMemoryConfigSource::new();
    if let Some(key) = api_key {
        source.insert(API_KEY_VAR, key);
    }
    if let Some(secret) = api_secret {
        source.insert(API_SECRET_VAR, secret);
    }
    source
}

/// Registry with the Confluent module installed on top of `source`.
pub fn registry_with(source: InMemoryConfigSource) -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    registry
        .install(&ConfluentActionsModule::new(Arc::new(source)))
        .expect("Confluent module should install");
    registry
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// In-memory log sink for asserting on emitted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
