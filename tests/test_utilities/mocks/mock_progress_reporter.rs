use mvn_debt::prelude::*;
use std::sync::Mutex;

/// Mock implementation of ProgressReporter that records messages
pub struct MockProgressReporter {
    messages: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Default for MockProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Allows tests to keep a handle on the reporter after handing it to a
/// use case
pub struct SharedMockProgressReporter(pub std::sync::Arc<MockProgressReporter>);

impl ProgressReporter for SharedMockProgressReporter {
    fn report(&self, message: &str) {
        self.0.report(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.0.report_progress(current, total, message);
    }

    fn report_error(&self, message: &str) {
        self.0.report_error(message);
    }

    fn report_completion(&self, message: &str) {
        self.0.report_completion(message);
    }
}
