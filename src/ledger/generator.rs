//! Mock transaction history generator.
//!
//! Produces a bounded batch of synthetic records. Randomness is always drawn
//! from a caller-supplied generator so a seeded `StdRng` reproduces a batch
//! exactly.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

use crate::models::{Transaction, TransactionType};

const SECONDS_PER_DAY: i64 = 86_400;

/// Amounts are drawn as whole cents below this bound, i.e. [0, 1000)
const AMOUNT_CENTS_UPPER: u32 = 100_000;

/// Entropy-seeded generator, or a deterministic one when a seed is given
pub fn mock_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate `count` records with timestamps up to `max_age_days` before now
pub fn generate<R: Rng>(rng: &mut R, count: usize, max_age_days: u32) -> Vec<Transaction> {
    generate_at(rng, count, max_age_days, Utc::now())
}

/// Same as [`generate`] with an explicit generation instant
pub fn generate_at<R: Rng>(
    rng: &mut R,
    count: usize,
    max_age_days: u32,
    now: DateTime<Utc>,
) -> Vec<Transaction> {
    let max_age_secs = i64::from(max_age_days) * SECONDS_PER_DAY;
    let mut seen_ids = HashSet::with_capacity(count);
    let mut transactions = Vec::with_capacity(count);

    for _ in 0..count {
        let id = loop {
            let candidate = format!("0x{:08x}", rng.gen::<u32>());
            if seen_ids.insert(candidate.clone()) {
                break candidate;
            }
        };

        let tx_type = TransactionType::ALL[rng.gen_range(0..TransactionType::ALL.len())];
        let amount = f64::from(rng.gen_range(0..AMOUNT_CENTS_UPPER)) / 100.0;
        let age_secs = rng.gen_range(0..=max_age_secs);
        let timestamp = now - ChronoDuration::seconds(age_secs);

        transactions.push(Transaction::new(id, tx_type, amount, timestamp));
    }

    debug!("Generated {} mock transactions (max age {} days)", transactions.len(), max_age_days);
    transactions
}
