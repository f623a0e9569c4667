//! Debounced validation scheduling
//!
//! A [`Debouncer`] collapses rapid repeated calls into one: each call
//! schedules its work after a fixed delay and aborts whatever was
//! pending, so only the most recent input is ever evaluated. This is the
//! usual keystroke pattern: validate what the user typed, but only once
//! they stop typing.
//!
//! The scheduler owns its pending task explicitly. Dropping the
//! `Debouncer` aborts any pending call.
//!
//! ```rust,ignore
//! let mut debounced = DebouncedPassword::new();
//! let outcome = debounced.submit("Abcdef1!");
//! // keep typing: the call above is superseded and never evaluated
//! let outcome = debounced.submit("Abcdef1!x");
//! assert!(outcome.await.unwrap().is_ok());
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::trace;

use crate::foundation::ValidationError;
use crate::rules::form;

/// Delay applied by [`DebouncedPassword`].
pub const PASSWORD_DEBOUNCE: Duration = Duration::from_millis(500);

/// Error returned to a caller whose debounced call never ran.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DebounceError {
    /// A newer call replaced this one before its delay elapsed.
    #[error("debounced call superseded by a newer call")]
    Superseded,
}

/// Collapses bursts of calls so only the last one is evaluated.
///
/// Each [`call`](Debouncer::call) aborts the previously pending call (its
/// caller observes [`DebounceError::Superseded`]) and schedules the new
/// one after the configured delay.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with the given delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns the configured delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns true if a call is scheduled and not yet evaluated.
    ///
    /// A completed task still counts as not pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Schedules `f(input)` to run after the delay, superseding any
    /// pending call.
    ///
    /// The returned future resolves to the function's result once the
    /// delay elapses, or to [`DebounceError::Superseded`] if a newer call
    /// arrives (or the debouncer is dropped) first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<F, T, R>(
        &mut self,
        f: F,
        input: T,
    ) -> impl Future<Output = Result<R, DebounceError>> + use<F, T, R>
    where
        F: FnOnce(T) -> R + Send + 'static,
        T: Send + 'static,
        R: Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        let (tx, rx) = oneshot::channel();
        self.pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            // The receiver may have been dropped; nothing to do then.
            let _ = tx.send(f(input));
        }));

        async move { rx.await.map_err(|_| DebounceError::Superseded) }
    }

    /// Aborts the pending call, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                trace!("superseding pending debounced call");
            }
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The password rule behind a 500 ms debounce.
///
/// Wraps [`form::password`] without touching its pass/fail logic: bursts
/// of keystrokes produce exactly one evaluation, of the final text.
#[derive(Debug)]
pub struct DebouncedPassword {
    debouncer: Debouncer,
}

impl DebouncedPassword {
    /// Creates the debounced password validator with its fixed 500 ms
    /// delay.
    #[must_use]
    pub fn new() -> Self {
        Self {
            debouncer: Debouncer::new(PASSWORD_DEBOUNCE),
        }
    }

    /// Submits a password for validation after the debounce delay.
    ///
    /// The outer error reports a superseded call; the inner result is the
    /// password rule's verdict.
    pub fn submit<P: Into<String>>(
        &mut self,
        password: P,
    ) -> impl Future<Output = Result<Result<(), ValidationError>, DebounceError>> + use<P> {
        let password = password.into();
        self.debouncer.call(|p: String| form::password(&p), password)
    }

    /// Cancels any pending evaluation.
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}

impl Default for DebouncedPassword {
    fn default() -> Self {
        Self::new()
    }
}
