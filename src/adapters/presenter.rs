//! Presenter that keeps the last outcome it was handed.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::error::{AppError, AppResult};
use crate::ports::Presenter;

/// Captures the result populated by a handler
#[derive(Debug)]
pub struct CapturingPresenter<R> {
    outcome: Mutex<Option<AppResult<R>>>,
    calls: AtomicUsize,
}

impl<R> CapturingPresenter<R> {
    pub fn new() -> Self {
        Self {
            outcome: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `populate` has been called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Remove and return the captured outcome
    pub fn take(&self) -> Option<AppResult<R>> {
        self.outcome.lock().take()
    }

    /// The captured error, if the last outcome was a failure
    pub fn error(&self) -> Option<AppError> {
        match self.outcome.lock().as_ref() {
            Some(Err(e)) => Some(e.clone()),
            _ => None,
        }
    }
}

impl<R: Clone> CapturingPresenter<R> {
    /// The captured response, if the last outcome was a success
    pub fn response(&self) -> Option<R> {
        match self.outcome.lock().as_ref() {
            Some(Ok(r)) => Some(r.clone()),
            _ => None,
        }
    }
}

impl<R> Default for CapturingPresenter<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Send> Presenter<R> for CapturingPresenter<R> {
    fn populate(&self, result: AppResult<R>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.outcome.lock() = Some(result);
    }
}
