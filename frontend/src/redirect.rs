//! Deferred, cancellable one-shot redirect.
//!
//! A [`DeferredRedirect`] owns the single timer it arms. The timer is cleared
//! when the guard is dropped, so a redirect can never fire after the view that
//! requested it has gone away.

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::Callback;

/// Delay before the unauthorized notice sends the user on.
pub const REDIRECT_DELAY_MS: u32 = 3_000;

/// Something that can run a task once after a delay on the event loop.
///
/// Dropping the returned handle must cancel the task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule<F>(&self, millis: u32, task: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

/// Browser timers via `setTimeout` / `clearTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule<F>(&self, millis: u32, task: F) -> Timeout
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(millis, task)
    }
}

/// A pending navigation request that fires at most once.
pub struct DeferredRedirect<H> {
    handle: Option<H>,
    fired: Rc<Cell<bool>>,
}

impl<H> DeferredRedirect<H> {
    /// Arm a timer that emits `target` on `navigate` after `millis`.
    pub fn schedule<S, R>(scheduler: &S, millis: u32, navigate: Callback<R>, target: R) -> Self
    where
        S: Scheduler<Handle = H>,
        R: Debug + 'static,
    {
        log::debug!("Redirect to {:?} scheduled in {} ms", target, millis);

        let fired = Rc::new(Cell::new(false));
        let handle = {
            let fired = fired.clone();
            scheduler.schedule(millis, move || {
                fired.set(true);
                log::debug!("Redirecting to {:?}", target);
                navigate.emit(target);
            })
        };

        Self {
            handle: Some(handle),
            fired,
        }
    }

    /// Whether the redirect is still waiting on its timer.
    pub fn is_pending(&self) -> bool {
        self.handle.is_some() && !self.fired.get()
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }

    /// Cancel the redirect. Same as dropping the guard.
    pub fn cancel(self) {
        drop(self);
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !self.fired.get() {
                log::debug!("Pending redirect cancelled");
            }
            drop(handle);
        }
    }
}

impl<H> Drop for DeferredRedirect<H> {
    fn drop(&mut self) {
        self.disarm();
    }
}
