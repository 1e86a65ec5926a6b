//! Aggregate counts for one subject address.
//!
//! Computed straight from the records, independent of the graph.
//! `active_chains` counts distinct assets that moved at least once; it is
//! not the same number as the snapshot's `root_count`, which counts
//! addresses nothing was handed to.

use lineage_core::{Asset, Ledger, TransferRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of assets.
    pub total: usize,
    /// Transfers sent by the subject.
    pub sent: usize,
    /// Transfers received by the subject.
    pub received: usize,
    /// Distinct asset ids that appear in any transfer.
    pub active_chains: usize,
}

pub fn compute_stats(assets: &[Asset], transfers: &[TransferRecord], subject: &str) -> Stats {
    let sent = transfers
        .iter()
        .filter(|t| t.from_address == subject)
        .count();
    let received = transfers.iter().filter(|t| t.to_address == subject).count();
    let chain_ids: HashSet<&str> = transfers.iter().map(|t| t.asset_id.as_str()).collect();

    Stats {
        total: assets.len(),
        sent,
        received,
        active_chains: chain_ids.len(),
    }
}

impl Stats {
    pub fn for_ledger(ledger: &Ledger, subject: &str) -> Self {
        compute_stats(&ledger.assets, &ledger.transfers, subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_out_from_subject() {
        let assets = vec![Asset::new("s1", "Notes", "A")];
        let transfers = vec![
            TransferRecord::new("s1", "A", "B"),
            TransferRecord::new("s1", "A", "C"),
            TransferRecord::new("s1", "A", "D"),
        ];

        let stats = compute_stats(&assets, &transfers, "A");
        assert_eq!(
            stats,
            Stats {
                total: 1,
                sent: 3,
                received: 0,
                active_chains: 1
            }
        );
    }

    #[test]
    fn test_received_side() {
        let transfers = vec![
            TransferRecord::new("s1", "A", "B"),
            TransferRecord::new("s2", "C", "B"),
        ];
        let stats = compute_stats(&[], &transfers, "B");
        assert_eq!(stats.sent, 0);
        assert_eq!(stats.received, 2);
        assert_eq!(stats.active_chains, 2);
        assert_eq!(stats.total, 0);
    }

    #[test]
    fn test_sample_ledger() {
        let ledger = Ledger::sample();
        let stats = Stats::for_ledger(&ledger, "0xA1b2...C3d4");
        assert_eq!(stats.total, 5);
        assert_eq!(stats.sent, 3);
        assert_eq!(stats.received, 0);
        assert_eq!(stats.active_chains, 4);
    }

    #[test]
    fn test_unknown_subject() {
        let stats = Stats::for_ledger(&Ledger::sample(), "nobody");
        assert_eq!(stats.sent, 0);
        assert_eq!(stats.received, 0);
    }
}
