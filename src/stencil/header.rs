use std::sync::{Mutex, MutexGuard, PoisonError};

/// Ordered, de-duplicated set of column headers, filled while a template is
/// evaluated during header discovery.
///
/// The mutex is there because minijinja requires context objects to be `Sync`;
/// a tracker belongs to a single discovery pass and is never shared between renders.
#[derive(Debug, Default)]
pub struct HeaderTracker {
    headers: Mutex<Vec<String>>,
}

impl HeaderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` unless an identical header was already registered.
    pub fn add_header(&self, name: &str) {
        let mut headers = self.lock();
        if !headers.iter().any(|h| h == name) {
            headers.push(name.to_string());
        }
    }

    /// Headers in order of first registration.
    pub fn headers(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.headers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
