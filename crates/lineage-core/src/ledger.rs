//! The input bundle: every asset and transfer known to the caller.

use crate::error::Result;
use crate::record::{Asset, TransferRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const DAY_MS: u64 = 86_400_000;

/// Reference "now" for the sample data, so the fixture is reproducible.
const SAMPLE_NOW_MS: u64 = 1_700_000_000_000;

/// Assets and transfers as supplied by the ingestion collaborator.
///
/// Order matters: the graph layout places addresses in the order they
/// first appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub transfers: Vec<TransferRecord>,
}

impl Ledger {
    pub fn new(assets: Vec<Asset>, transfers: Vec<TransferRecord>) -> Self {
        Self { assets, transfers }
    }

    /// Parses a ledger from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let ledger: Ledger = serde_json::from_str(json)?;
        debug!(
            "Parsed ledger: {} assets, {} transfers",
            ledger.assets.len(),
            ledger.transfers.len()
        );
        Ok(ledger)
    }

    /// Loads a ledger from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Serializes the ledger as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A small pottery-workshop dataset: five assets and eight transfers
    /// fanning out from a single originator over three generations.
    pub fn sample() -> Self {
        let ago = |days: u64| SAMPLE_NOW_MS - DAY_MS * days;

        let assets = vec![
            Asset::new("secret-1", "Traditional Pottery Techniques", "0xA1b2...C3d4")
                .created_at(ago(30)),
            Asset::new("secret-2", "Glazing Methods Manual", "0xE5f6...G7h8").created_at(ago(20)),
            Asset::new("secret-3", "Wheel Throwing Guide", "0x1i9l0...K1l2").created_at(ago(10)),
            Asset::new("secret-4", "Kiln Firing Procedures", "0xM3n4...O5p6").created_at(ago(15)),
            Asset::new("secret-5", "Celadon Glaze Recipe", "0xQ7r8...S9t0").created_at(ago(12)),
        ];

        let transfers = vec![
            TransferRecord::new("secret-1", "0xA1b2...C3d4", "0xE5f6...G7h8").at(ago(25)),
            TransferRecord::new("secret-1", "0xA1b2...C3d4", "0x1i9l0...K1l2").at(ago(24)),
            TransferRecord::new("secret-1", "0xA1b2...C3d4", "0xM3n4...O5p6").at(ago(23)),
            TransferRecord::new("secret-2", "0xE5f6...G7h8", "0xQ7r8...S9t0").at(ago(20)),
            TransferRecord::new("secret-2", "0xE5f6...G7h8", "0xU1v2...W3x4").at(ago(19)),
            TransferRecord::new("secret-3", "0x1i9l0...K1l2", "0xY6z8...A7b5").at(ago(18)),
            TransferRecord::new("secret-4", "0xM3n4...O5p6", "0xC9d0...E1f2").at(ago(17)),
            TransferRecord::new("secret-4", "0xM3n4...O5p6", "0xG3h4...I5j6").at(ago(16)),
        ];

        Self { assets, transfers }
    }
}
