//! Periodic fetch loop with explicit cancellation.
//!
//! Every `period` the poller calls `fetch` and hands a successful result to
//! `on_result`. Failures are logged and swallowed; the consumer keeps whatever
//! it had. Once cancelled, no further fetch is started and a fetch that is
//! still running is dropped without delivering its result.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::sync::task::spawn_named_task;

/// Owner side of a running poller. Dropping the handle cancels the poller.
#[derive(Debug)]
pub struct PollerHandle {
    name: &'static str,
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            debug!(poller = self.name, "Cancelling poller");
            self.token.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel and wait for the loop to exit.
    pub async fn shutdown(mut self) {
        self.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(poller = self.name, error = %e, "Poller task ended abnormally");
            }
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Start a poller on the current Tokio runtime.
///
/// The first fetch happens one `period` after spawning.
pub fn spawn_poller<T, Fetch, Fut, OnResult>(
    name: &'static str,
    period: Duration,
    mut fetch: Fetch,
    mut on_result: OnResult,
) -> PollerHandle
where
    T: Send + 'static,
    Fetch: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, AppError>> + Send + 'static,
    OnResult: FnMut(T) + Send + 'static,
{
    let token = CancellationToken::new();
    let loop_token = token.clone();

    let task = spawn_named_task(format!("poller:{name}"), async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut consecutive_failures: u32 = 0;

        loop {
            tokio::select! {
                biased;
                _ = loop_token.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let result = tokio::select! {
                biased;
                _ = loop_token.cancelled() => break,
                result = fetch() => result,
            };

            match result {
                Ok(value) => {
                    if consecutive_failures > 0 {
                        info!(
                            poller = name,
                            failures = consecutive_failures,
                            "Poller recovered"
                        );
                        consecutive_failures = 0;
                    }
                    if loop_token.is_cancelled() {
                        break;
                    }
                    on_result(value);
                }
                Err(e) => {
                    consecutive_failures += 1;
                    warn!(
                        poller = name,
                        failures = consecutive_failures,
                        code = %e.code(),
                        error = %e,
                        "Poll failed; keeping previous state"
                    );
                }
            }
        }
        debug!(poller = name, "Poller stopped");
    });

    PollerHandle {
        name,
        token,
        task: Some(task),
    }
}
