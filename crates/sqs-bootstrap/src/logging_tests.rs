//! Tests for the logger capability.

use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Logger for CapturingLogger {
    fn println(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

#[test]
fn test_custom_logger_through_trait_object() {
    let capturing = Arc::new(CapturingLogger::default());
    let logger: Arc<dyn Logger> = capturing.clone();

    logger.println("first");
    logger.println("second");

    assert_eq!(*capturing.lines.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn test_tracing_logger_does_not_panic_without_subscriber() {
    TracingLogger.println("no subscriber installed");
}

#[test]
fn test_trait_object_debug_output() {
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
    assert_eq!(format!("{:?}", logger), "Logger");
}
