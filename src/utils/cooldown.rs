// Per-user rate limiting for the info command
// A cooldown between invocations plus a daily cap, both read from the
// config document's global settings. A value of 0 disables either check.

use std::collections::HashMap;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

/// Why an invocation was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denied {
    /// Seconds until the user may try again
    Cooldown { remaining_secs: u64 },
    /// The configured daily cap
    DailyLimit { limit: u32 },
}

#[derive(Debug, Clone, Copy)]
struct Usage {
    last: Instant,
    day: NaiveDate,
    count_today: u32,
}

/// User ID -> usage bookkeeping, held in shared Data
#[derive(Default)]
pub struct RateLimiter {
    entries: RwLock<HashMap<u64, Usage>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an invocation if allowed, otherwise report why not.
    pub async fn check(&self, user_id: u64, cooldown_secs: u64, daily_limit: u32) -> Result<(), Denied> {
        let now = Instant::now();
        let today = Utc::now().date_naive();
        let mut entries = self.entries.write().await;

        let count_so_far = match entries.get(&user_id) {
            Some(usage) => {
                let count = if usage.day == today { usage.count_today } else { 0 };
                if daily_limit > 0 && count >= daily_limit {
                    return Err(Denied::DailyLimit { limit: daily_limit });
                }
                if cooldown_secs > 0 {
                    let elapsed = now.duration_since(usage.last).as_secs();
                    if elapsed < cooldown_secs {
                        return Err(Denied::Cooldown {
                            remaining_secs: cooldown_secs - elapsed,
                        });
                    }
                }
                count
            }
            None => 0,
        };

        entries.insert(
            user_id,
            Usage {
                last: now,
                day: today,
                count_today: count_so_far + 1,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_call_passes_immediate_repeat_fails() {
        let limiter = RateLimiter::new();
        assert!(limiter.check(1, 30, 0).await.is_ok());
        match limiter.check(1, 30, 0).await {
            Err(Denied::Cooldown { remaining_secs }) => assert!(remaining_secs > 0),
            other => panic!("expected cooldown denial, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_zero_cooldown_always_passes() {
        let limiter = RateLimiter::new();
        for _ in 0..5 {
            assert!(limiter.check(1, 0, 0).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_daily_limit_trips_after_n_calls() {
        let limiter = RateLimiter::new();
        for _ in 0..3 {
            assert!(limiter.check(1, 0, 3).await.is_ok());
        }
        assert_eq!(
            limiter.check(1, 0, 3).await,
            Err(Denied::DailyLimit { limit: 3 })
        );
    }

    #[tokio::test]
    async fn test_users_are_tracked_independently() {
        let limiter = RateLimiter::new();
        assert!(limiter.check(1, 30, 0).await.is_ok());
        assert!(limiter.check(2, 30, 0).await.is_ok());
    }
}
