use std::time::Duration;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    Completed,
    Abandoned, // Owning session was torn down before the delay elapsed
}

/// Fixed artificial latency standing in for a network round trip.
/// Waiting has no side effects; dropping the future abandons it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDelay {
    duration: Duration,
}

impl SimulatedDelay {
    pub fn from_millis(millis: u64) -> Self {
        Self {
            duration: Duration::from_millis(millis),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Wait for the delay unless `teardown` flips to `true` (or its sender is
    /// dropped) first.
    pub async fn wait_or_abandon(self, teardown: &mut watch::Receiver<bool>) -> DelayOutcome {
        tokio::select! {
            _ = tokio::time::sleep(self.duration) => DelayOutcome::Completed,
            _ = torn_down(teardown) => DelayOutcome::Abandoned,
        }
    }
}

async fn torn_down(teardown: &mut watch::Receiver<bool>) {
    loop {
        if *teardown.borrow_and_update() {
            return;
        }
        if teardown.changed().await.is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_delay_completes() {
        let (_tx, mut rx) = watch::channel(false);
        let start = tokio::time::Instant::now();

        let outcome = SimulatedDelay::from_millis(1500).wait_or_abandon(&mut rx).await;

        assert_eq!(outcome, DelayOutcome::Completed);
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_abandons_pending_delay() {
        let (tx, mut rx) = watch::channel(false);

        let pending = tokio::spawn(async move { SimulatedDelay::from_millis(2000).wait_or_abandon(&mut rx).await });
        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send(true).unwrap();

        assert_eq!(pending.await.unwrap(), DelayOutcome::Abandoned);
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_torn_down() {
        let (tx, mut rx) = watch::channel(false);
        tx.send(true).unwrap();
        let outcome = SimulatedDelay::from_millis(800).wait_or_abandon(&mut rx).await;
        assert_eq!(outcome, DelayOutcome::Abandoned);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_sender_abandons() {
        let (tx, mut rx) = watch::channel(false);
        drop(tx);
        let outcome = SimulatedDelay::from_millis(800).wait_or_abandon(&mut rx).await;
        assert_eq!(outcome, DelayOutcome::Abandoned);
    }

    #[test]
    fn test_zero_delay_resolves_immediately() {
        let (_tx, mut rx) = watch::channel(false);
        let delay = SimulatedDelay::from_millis(0);
        assert_eq!(delay.duration(), Duration::ZERO);
        assert_eq!(tokio_test::block_on(delay.wait_or_abandon(&mut rx)), DelayOutcome::Completed);
    }
}
