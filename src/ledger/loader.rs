use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::generator::{generate, mock_rng};
use super::log::TransactionLog;
use crate::config::Config;
use crate::simulation::{DelayOutcome, SimulatedDelay};

/// Parameters for the one-off mock history fetch
#[derive(Debug, Clone)]
pub struct HistorySettings {
    pub count: usize,
    pub max_age_days: u32,
    pub seed: Option<u64>,
    pub fetch_delay: SimulatedDelay,
}

impl HistorySettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            count: config.mock_transaction_count,
            max_age_days: config.mock_max_age_days,
            seed: config.mock_rng_seed,
            fetch_delay: SimulatedDelay::from_millis(config.fetch_delay_ms),
        }
    }
}

/// Fill the log after the simulated fetch delay. The log stays in `Loading`
/// if the session is torn down first.
pub async fn load_mock_history(
    log: Arc<RwLock<TransactionLog>>,
    settings: HistorySettings,
    mut teardown: watch::Receiver<bool>,
) -> bool {
    info!(
        "Fetching {} mock transactions (simulated delay {:?})",
        settings.count,
        settings.fetch_delay.duration()
    );

    if settings.fetch_delay.wait_or_abandon(&mut teardown).await == DelayOutcome::Abandoned {
        warn!("Mock transaction fetch abandoned");
        return false;
    }

    let mut rng = mock_rng(settings.seed);
    let transactions = generate(&mut rng, settings.count, settings.max_age_days);
    log.write().await.load(transactions)
}

pub fn spawn_mock_history_loader(
    log: Arc<RwLock<TransactionLog>>,
    settings: HistorySettings,
    teardown: watch::Receiver<bool>,
) -> JoinHandle<bool> {
    tokio::spawn(load_mock_history(log, settings, teardown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LogState;
    use std::time::Duration;

    fn settings(seed: u64) -> HistorySettings {
        HistorySettings {
            count: 20,
            max_age_days: 14,
            seed: Some(seed),
            fetch_delay: SimulatedDelay::from_millis(800),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_loader_fills_log_after_delay() {
        let log = Arc::new(RwLock::new(TransactionLog::new()));
        let (_tx, rx) = watch::channel(false);

        let handle = spawn_mock_history_loader(log.clone(), settings(1), rx);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(log.read().await.is_loading());

        assert!(handle.await.unwrap());
        let log = log.read().await;
        assert_eq!(log.state(), &LogState::Ready);
        assert_eq!(log.view(5).unwrap().total_items, 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loader_abandoned_keeps_loading() {
        let log = Arc::new(RwLock::new(TransactionLog::new()));
        let (tx, rx) = watch::channel(false);

        let handle = spawn_mock_history_loader(log.clone(), settings(2), rx);
        tx.send(true).unwrap();

        assert!(!handle.await.unwrap());
        assert!(log.read().await.is_loading());
    }

    #[test]
    fn test_settings_from_config() {
        let config = Config::default();
        let settings = HistorySettings::from_config(&config);
        assert_eq!(settings.count, 20);
        assert_eq!(settings.max_age_days, 14);
        assert_eq!(settings.fetch_delay.duration(), Duration::from_millis(800));
    }
}
