use std::{
    cell::{Cell, RefCell},
    fmt::Display,
};

/// Represents a trait responsible for handling diagnostics in the front end.
pub trait Handler<T> {
    /// Receive an error and handles it.
    fn receive(&self, error: T);

    /// Whether any error has been received so far.
    fn has_received(&self) -> bool;
}

/// Prints every received error to stderr.
#[derive(Debug, Default)]
pub struct PrintHandler {
    printed: Cell<bool>,
}

impl PrintHandler {
    /// Creates a new [`PrintHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Display> Handler<T> for PrintHandler {
    fn receive(&self, error: T) {
        eprintln!("{error}");
        self.printed.set(true);
    }

    fn has_received(&self) -> bool {
        self.printed.get()
    }
}

/// Collects every received error without printing it.
#[derive(Debug)]
pub struct SilentHandler<T> {
    received: RefCell<Vec<T>>,
}

impl<T> Default for SilentHandler<T> {
    fn default() -> Self {
        Self {
            received: RefCell::new(Vec::new()),
        }
    }
}

impl<T> SilentHandler<T> {
    /// Creates a new [`SilentHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes all errors received so far, leaving the handler empty.
    pub fn take(&self) -> Vec<T> {
        self.received.take()
    }
}

impl<T> Handler<T> for SilentHandler<T> {
    fn receive(&self, error: T) {
        self.received.borrow_mut().push(error);
    }

    fn has_received(&self) -> bool {
        !self.received.borrow().is_empty()
    }
}

/// Discards every received error.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidHandler;

impl<T> Handler<T> for VoidHandler {
    fn receive(&self, _error: T) {}

    fn has_received(&self) -> bool {
        false
    }
}
