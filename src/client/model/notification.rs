use dioxus::prelude::*;

/// Surface for errors that do not belong to a single form field.
///
/// Injected into components instead of reaching for a page-wide global, so
/// tests can record what would have been shown.
pub trait ErrorReporter {
    fn report(&self, message: &str);
}

/// App-wide error banner state, provided as context by `App`.
///
/// Holds only the most recent message, so repeated failures replace each other
/// instead of piling up.
#[derive(Clone, Copy)]
pub struct ErrorAlert {
    inner: Signal<Option<String>>,
}

impl ErrorAlert {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(None),
        }
    }

    pub fn message(&self) -> Option<String> {
        self.inner.read().clone()
    }

    pub fn dismiss(&mut self) {
        self.inner.set(None);
    }
}

impl Default for ErrorAlert {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for ErrorAlert {
    fn report(&self, message: &str) {
        let mut inner = self.inner;
        inner.set(Some(message.to_string()));
    }
}
