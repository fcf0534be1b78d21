//! Filtering, ordering and pagination over a transaction log.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Case-insensitive substring filter over id, amount and type label.
/// An empty or absent term returns the log unchanged.
pub fn filter(log: &[Transaction], term: Option<&str>) -> Vec<Transaction> {
    let term = match term {
        Some(term) if !term.is_empty() => term.to_lowercase(),
        _ => return log.to_vec(),
    };

    log.iter().filter(|tx| tx.matches(&term)).cloned().collect()
}

/// Most recent first. `sort_by` is stable, so equal timestamps keep their
/// original relative order.
pub fn sort_descending(mut log: Vec<Transaction>) -> Vec<Transaction> {
    log.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    log
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice out a 1-based page. Returns the page and the total page count.
/// Pages past the end (and page 0) are empty rather than errors.
pub fn paginate<T: Clone>(items: &[T], page_number: usize, page_size: i64) -> LedgerResult<(Vec<T>, usize)> {
    if page_size <= 0 {
        return Err(LedgerError::InvalidPageSize(page_size));
    }
    let page_size = usize::try_from(page_size).map_err(|_| LedgerError::InvalidPageSize(page_size))?;
    let total = total_pages(items.len(), page_size);

    if page_number == 0 || page_number > total {
        return Ok((Vec::new(), total));
    }

    let start = (page_number - 1) * page_size;
    let page = items.iter().skip(start).take(page_size).cloned().collect();
    Ok((page, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::generator::{generate_at, mock_rng};
    use crate::models::TransactionType;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 20, hour, 0, 0).unwrap()
    }

    fn tx(id: &str, tx_type: TransactionType, amount: f64, hour: u32) -> Transaction {
        Transaction::new(id.to_string(), tx_type, amount, at(hour))
    }

    fn fixture() -> Vec<Transaction> {
        vec![
            tx("0x1a2b3c4d", TransactionType::Mint, 120.5, 3),
            tx("0xdeadbeef", TransactionType::Swap, 42.0, 9),
            tx("0x0000swap", TransactionType::Burn, 7.25, 1),
            tx("0xcafe1234", TransactionType::Transfer, 999.99, 9),
            tx("0x99999999", TransactionType::Swap, 512.12, 5),
        ]
    }

    fn sample_log(count: usize) -> Vec<Transaction> {
        generate_at(&mut mock_rng(Some(2024)), count, 14, at(12))
    }

    #[test]
    fn test_empty_term_is_identity() {
        let log = fixture();
        assert_eq!(filter(&log, Some("")), log);
        assert_eq!(filter(&log, None), log);
    }

    #[test]
    fn test_filter_by_id_is_case_insensitive() {
        let log = fixture();
        let results = filter(&log, Some("DEADBEEF"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "0xdeadbeef");
    }

    #[test]
    fn test_filter_by_amount_string() {
        let log = fixture();
        let results = filter(&log, Some("512.1"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "0x99999999");

        // 42.0 renders as "42"
        assert_eq!(filter(&log, Some("42.0")).len(), 0);
        assert_eq!(filter(&log, Some("42")).len(), 1);
    }

    #[test]
    fn test_filter_by_type_label_is_or_across_fields() {
        let log = fixture();
        let results = filter(&log, Some("SWAP"));
        let ids: Vec<&str> = results.iter().map(|t| t.id.as_str()).collect();
        // the burn record matches through its id
        assert_eq!(ids, vec!["0xdeadbeef", "0x0000swap", "0x99999999"]);
    }

    #[test]
    fn test_type_term_selects_exact_subset() {
        let log: Vec<Transaction> = sample_log(200)
            .into_iter()
            .map(|mut t| {
                t.id = format!("0x{}", &t.id[2..].replace(|c: char| c.is_alphabetic(), "1"));
                t
            })
            .collect();

        let results = filter(&log, Some("Swap"));
        let expected: Vec<Transaction> = log.iter().filter(|t| t.tx_type == TransactionType::Swap).cloned().collect();
        assert!(!expected.is_empty());
        assert_eq!(results, expected);
    }

    #[test]
    fn test_sort_descending_is_stable() {
        let sorted = sort_descending(fixture());
        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["0xdeadbeef", "0xcafe1234", "0x99999999", "0x1a2b3c4d", "0x0000swap"]);
    }

    #[test]
    fn test_sort_descending_is_idempotent() {
        let once = sort_descending(sample_log(50));
        let twice = sort_descending(once.clone());
        assert_eq!(once, twice);
        assert!(once.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_paginate_rejects_non_positive_page_size() {
        let log = fixture();
        assert_eq!(paginate(&log, 1, 0), Err(LedgerError::InvalidPageSize(0)));
        assert_eq!(paginate(&log, 1, -5), Err(LedgerError::InvalidPageSize(-5)));
    }

    #[test]
    fn test_paginate_empty_log() {
        let empty: Vec<Transaction> = Vec::new();
        let (page, total) = paginate(&empty, 1, 5).unwrap();
        assert!(page.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let log = fixture();
        let (page, total) = paginate(&log, 3, 2).unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.len(), 1);

        let (page, total) = paginate(&log, 4, 2).unwrap();
        assert_eq!(total, 3);
        assert!(page.is_empty());

        let (page, _) = paginate(&log, 0, 2).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_pages_cover_log_exactly_once() {
        let log = sort_descending(sample_log(23));
        for page_size in 1..=25i64 {
            let (_, total) = paginate(&log, 1, page_size).unwrap();
            let mut collected = Vec::new();
            for page_number in 1..=total {
                let (page, _) = paginate(&log, page_number, page_size).unwrap();
                assert!(!page.is_empty());
                collected.extend(page);
            }
            assert_eq!(collected, log, "page size {}", page_size);
        }
    }

    #[test]
    fn test_pages_cover_filtered_log_exactly_once() {
        let log = sample_log(60);
        for term in ["swap", "MINT", "1", "0x"] {
            let matches = sort_descending(filter(&log, Some(term)));
            assert!(matches.iter().all(|tx| tx.matches(&term.to_lowercase())));

            for page_size in [1i64, 4, 7, 60, 100] {
                let (_, total) = paginate(&matches, 1, page_size).unwrap();
                let mut collected = Vec::new();
                let mut summed = 0;
                for page_number in 1..=total {
                    let (page, _) = paginate(&matches, page_number, page_size).unwrap();
                    summed += page.len();
                    collected.extend(page);
                }
                assert_eq!(summed, matches.len(), "term {:?} page size {}", term, page_size);
                assert_eq!(collected, matches, "term {:?} page size {}", term, page_size);
            }
        }
        assert_eq!(filter(&log, Some("0x")).len(), 60);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(20, 5), 4);
        assert_eq!(total_pages(21, 5), 5);
        assert_eq!(total_pages(3, 5), 1);
    }
}
