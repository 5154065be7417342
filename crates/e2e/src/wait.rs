//! Poll-with-timeout primitive
//!
//! Every page-object query and action that depends on the remote page
//! reaching a state goes through one bounded polling policy instead of ad hoc
//! sleeps: not-yet-present, present, acted-upon. A condition that never holds
//! within the budget is a hard failure.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::config::SuiteConfig;
use crate::error::{E2eError, E2eResult};

/// Bounded wait policy shared by all page objects of a scenario.
#[derive(Debug, Clone, Copy)]
pub struct WaitPolicy {
    /// Maximum duration to poll before failing
    pub budget: Duration,

    /// Pause between polls
    pub interval: Duration,
}

impl WaitPolicy {
    pub fn new(budget: Duration, interval: Duration) -> Self {
        Self { budget, interval }
    }

    pub fn from_config(config: &SuiteConfig) -> Self {
        Self {
            budget: config.wait_budget(),
            interval: config.poll_interval(),
        }
    }

    /// Poll `probe` until it yields a value or the budget elapses.
    ///
    /// `Ok(None)` means "not yet" and schedules another poll; `Err` aborts
    /// immediately. `what` names the awaited condition in the timeout error.
    pub async fn until<T, F, Fut>(&self, what: &str, mut probe: F) -> E2eResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = E2eResult<Option<T>>>,
    {
        let deadline = Instant::now() + self.budget;
        loop {
            if let Some(value) = probe().await? {
                return Ok(value);
            }
            if Instant::now() >= deadline {
                return Err(E2eError::Timeout(what.to_string()));
            }
            tokio::time::sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn quick() -> WaitPolicy {
        WaitPolicy::new(Duration::from_millis(200), Duration::from_millis(5))
    }

    #[tokio::test]
    async fn until_returns_once_condition_holds() {
        let polls = AtomicUsize::new(0);
        let polls_ref = &polls;
        let value = quick()
            .until("third poll", move || async move {
                if polls_ref.fetch_add(1, Ordering::SeqCst) >= 2 {
                    Ok(Some(42))
                } else {
                    Ok(None)
                }
            })
            .await
            .unwrap();
        assert_eq!(value, 42);
        assert!(polls.load(Ordering::SeqCst) >= 3);
    }

    #[tokio::test]
    async fn until_times_out_when_condition_never_holds() {
        let policy = WaitPolicy::new(Duration::from_millis(30), Duration::from_millis(5));
        let err = policy
            .until::<(), _, _>("unreachable condition", || async { Ok(None) })
            .await
            .unwrap_err();
        match err {
            E2eError::Timeout(what) => assert_eq!(what, "unreachable condition"),
            other => panic!("expected Timeout, got {}", other),
        }
    }

    #[tokio::test]
    async fn until_propagates_hard_failures_immediately() {
        let polls = AtomicUsize::new(0);
        let polls_ref = &polls;
        let err = quick()
            .until::<(), _, _>("failing probe", move || async move {
                polls_ref.fetch_add(1, Ordering::SeqCst);
                Err(E2eError::Assertion("boom".to_string()))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, E2eError::Assertion(_)));
        assert_eq!(polls.load(Ordering::SeqCst), 1);
    }
}
