//! Bounded polling
//!
//! Repeats a probe until it reports a terminal state or a wall-clock deadline
//! passes. The deadline is only checked between probes; a probe in flight is
//! never interrupted. Uses tokio's clock so tests can run on paused time.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::config::{OrchestratorConfig, PollStrategy};

/// Shortest wait between two probes.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Result of one probe.
#[derive(Debug)]
pub enum Probe<T, S> {
    /// Terminal state reached.
    Ready(T),
    /// Still running; carries the last observed state.
    Pending(S),
}

/// Result of a whole polling run.
#[derive(Debug)]
pub enum PollOutcome<T, S> {
    Ready(T),
    /// The deadline passed while the probe was still pending.
    TimedOut { last: S, attempts: u32 },
}

/// Wait sequence between probes.
#[derive(Debug, Clone)]
pub struct Backoff {
    next: Duration,
    max: Duration,
    multiplier: f64,
}

impl Backoff {
    pub fn from_config(config: &OrchestratorConfig) -> Self {
        // 间隔为 0 会退化为忙等
        let interval = Duration::from_secs(config.poll_interval_secs).max(MIN_POLL_INTERVAL);
        match config.strategy {
            PollStrategy::Fixed => Self {
                next: interval,
                max: interval,
                multiplier: 1.0,
            },
            PollStrategy::Exponential {
                max_interval_secs,
                multiplier,
            } => Self {
                next: interval,
                max: Duration::from_secs(max_interval_secs).max(interval),
                // 乘数 < 1 或非有限值时退化为固定间隔
                multiplier: if multiplier.is_finite() && multiplier > 1.0 {
                    multiplier
                } else {
                    1.0
                },
            },
        }
    }

    /// Delay before the next probe.
    pub fn next_delay(&mut self) -> Duration {
        let current = self.next;
        let grown = Duration::try_from_secs_f64(current.as_secs_f64() * self.multiplier)
            .unwrap_or(self.max);
        self.next = grown.min(self.max);
        current
    }
}

/// Run `probe` until it is ready or `timeout` has elapsed.
///
/// The first probe runs immediately. After a pending probe the loop returns
/// [`PollOutcome::TimedOut`] if the deadline has passed, otherwise it sleeps
/// for the next backoff delay (never past the deadline) and probes again.
/// Probe errors end the run at once. A timeout too large to be represented
/// as an instant means the run has no deadline.
pub async fn poll_until<T, S, E, F, Fut>(
    config: &OrchestratorConfig,
    timeout: Duration,
    mut probe: F,
) -> Result<PollOutcome<T, S>, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Probe<T, S>, E>>,
{
    let deadline = Instant::now().checked_add(timeout);
    let mut backoff = Backoff::from_config(config);
    let mut attempts = 0_u32;

    loop {
        attempts = attempts.saturating_add(1);
        match probe().await? {
            Probe::Ready(value) => return Ok(PollOutcome::Ready(value)),
            Probe::Pending(state) => {
                let mut delay = backoff.next_delay();
                if let Some(deadline) = deadline {
                    let now = Instant::now();
                    if now >= deadline {
                        return Ok(PollOutcome::TimedOut {
                            last: state,
                            attempts,
                        });
                    }
                    delay = delay.min(deadline - now);
                }
                tokio::time::sleep(delay).await;
            }
        }
    }
}
