//! Cancellable timers and a debouncer built on them.
//!
//! DESIGN
//! ======
//! `Scheduler::schedule(delay, action)` returns a handle; cancelling (or
//! dropping) the handle guarantees the action never runs. `Debouncer` keeps at
//! most one pending handle and replaces it on every call, so a burst of calls
//! inside one delay window runs only the last action.
//!
//! In the browser `BrowserScheduler` is backed by `gloo_timers` timeouts.
//! On the server nothing is ever scheduled.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Cancel handle returned by a `Scheduler`.
pub trait Cancel {
    fn cancel(self);
}

/// Runs an action once after a delay.
pub trait Scheduler {
    type Handle: Cancel;

    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser event-loop scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Pending browser timeout. Dropping it cancels the timeout.
#[must_use = "dropping the handle cancels the timer"]
pub struct TimerHandle {
    #[cfg(feature = "hydrate")]
    timeout: gloo_timers::callback::Timeout,
}

impl Cancel for TimerHandle {
    fn cancel(self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = self.timeout.cancel();
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = TimerHandle;

    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> TimerHandle {
        #[cfg(feature = "hydrate")]
        {
            TimerHandle { timeout: gloo_timers::callback::Timeout::new(delay_ms, action) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, action);
            TimerHandle {}
        }
    }
}

/// Trailing-edge debouncer: only the most recent call within `delay_ms` runs.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self { scheduler, delay_ms, pending: None }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Cancel any pending action and schedule `action` in its place.
    pub fn call(&mut self, action: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(action)));
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}
