// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Bounded polling of a condition against freshly fetched state.
//!
//! [`poll_immediate`] evaluates once right away, then at a fixed interval
//! until the condition is satisfied, fails, the timeout elapses or the
//! cancellation token fires.

use crate::error::{IngressError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Result of evaluating a [`Condition`] against one fetched state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Not there yet, keep polling
    Pending,
    /// Done, stop polling
    Satisfied,
}

impl From<bool> for PollOutcome {
    fn from(done: bool) -> Self {
        if done {
            PollOutcome::Satisfied
        } else {
            PollOutcome::Pending
        }
    }
}

/// A predicate evaluated against each freshly fetched state.
///
/// Returning an error ends the poll immediately with that error.
pub trait Condition<S: ?Sized> {
    fn evaluate(&self, state: &S) -> Result<PollOutcome>;
}

/// Interval and timeout of a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSpec {
    interval: Duration,
    timeout: Duration,
}

impl PollSpec {
    /// A zero timeout evaluates exactly once. The interval must be non-zero.
    pub fn new(interval: Duration, timeout: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(IngressError::InvalidPollSpec(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        Ok(Self { interval, timeout })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Poll `condition` against the state returned by `fetch` until it is satisfied.
///
/// `fetch` returning `Ok(None)` means the resource does not exist (yet) and is
/// treated like a pending condition. Any `Err` from `fetch` or from the
/// condition is returned as is, without further attempts.
pub async fn poll_immediate<S, F, Fut, C>(
    spec: PollSpec,
    cancel: &CancellationToken,
    mut fetch: F,
    condition: &C,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<S>>>,
    C: Condition<S> + ?Sized,
{
    // A timeout too large to represent never expires
    let deadline = Instant::now().checked_add(spec.timeout);
    let mut attempt = 0u64;

    loop {
        attempt = attempt.saturating_add(1);

        if cancel.is_cancelled() {
            return Err(IngressError::Cancelled);
        }

        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(IngressError::Cancelled),
            fetched = fetch() => fetched?,
            _ = expire(deadline) => return Err(IngressError::DeadlineExceeded(spec.timeout)),
        };

        match fetched {
            None => debug!(attempt, "Resource not found yet, will retry"),
            Some(state) => match condition.evaluate(&state)? {
                PollOutcome::Satisfied => {
                    debug!(attempt, "Condition satisfied");
                    return Ok(());
                }
                PollOutcome::Pending => trace!(attempt, "Condition not yet satisfied"),
            },
        }

        let delay = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return Err(IngressError::DeadlineExceeded(spec.timeout));
                }
                // Last sleep is clipped so one final check happens at the deadline
                spec.interval.min(deadline - now)
            }
            None => spec.interval,
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(IngressError::Cancelled),
            _ = sleep(delay) => {}
        }
    }
}

/// Resolves once `deadline` has passed, never when there is none
async fn expire(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
