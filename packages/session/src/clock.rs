//! Session expiry clock: a single-slot cancellable deferred task.
//!
//! The clock owns at most one pending expiry callback at any time. Arming
//! always cancels the previous task first — overlapping timers would either
//! double-fire a logout or leak a timer across re-login/rehydration.
//!
//! On the web the task is a `setTimeout` via `gloo_timers`; on native it is a
//! local tokio task, which lets the tests drive it with paused virtual time.

use crate::state::now_ms;

/// Callback invoked when the session deadline passes.
pub trait ExpireCallback: FnOnce() + 'static {}
impl<F: FnOnce() + 'static> ExpireCallback for F {}

#[derive(Default)]
pub struct SessionClock {
    #[cfg(target_arch = "wasm32")]
    pending: Option<gloo_timers::callback::Timeout>,
    #[cfg(not(target_arch = "wasm32"))]
    pending: Option<tokio::task::JoinHandle<()>>,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a deferred firing is currently scheduled.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule `on_expire` to fire once when `expiry_ms` passes.
    ///
    /// A deadline already in the past fires synchronously. Any previously
    /// armed task is cancelled first, so re-arming is idempotent.
    pub fn arm<F: ExpireCallback>(&mut self, expiry_ms: i64, on_expire: F) {
        self.disarm();

        let remaining = expiry_ms - now_ms();
        if remaining <= 0 {
            on_expire();
            return;
        }

        #[cfg(target_arch = "wasm32")]
        {
            let millis = u32::try_from(remaining).unwrap_or(u32::MAX);
            self.pending = Some(gloo_timers::callback::Timeout::new(millis, on_expire));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            // anchor the deadline to the tokio clock at arm time; a sleep
            // started on the task's first poll would miss any paused-clock
            // advance made before then
            let deadline = tokio::time::Instant::now()
                + std::time::Duration::from_millis(remaining as u64);
            self.pending = Some(tokio::task::spawn_local(async move {
                tokio::time::sleep_until(deadline).await;
                on_expire();
            }));
        }
    }

    /// Cancel any pending firing.
    pub fn disarm(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            // dropping the Timeout clears the underlying setTimeout
            self.pending.take();
        }
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for SessionClock {
    fn drop(&mut self) {
        self.disarm();
    }
}
