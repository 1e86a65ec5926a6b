//! Asset and transfer records.
//!
//! These mirror what the ingestion collaborator hands us. Field names
//! serialize as camelCase; the short forms used by older payloads
//! (`owner`, `timestamp`, `secretId`, `from`, `to`) are accepted as aliases.

use serde::{Deserialize, Serialize};

/// Opaque identity string. The graph's node key.
pub type Address = String;

/// An item that can be handed off between addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub title: String,
    #[serde(alias = "owner")]
    pub owner_address: Address,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(alias = "timestamp", default)]
    pub created_at: u64,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        owner_address: impl Into<Address>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            owner_address: owner_address.into(),
            created_at: 0,
        }
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, millis: u64) -> Self {
        self.created_at = millis;
        self
    }
}

/// One hand-off of an asset from one address to another.
///
/// `from_address` is always the predecessor in the lineage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    #[serde(alias = "secretId")]
    pub asset_id: String,
    #[serde(alias = "from")]
    pub from_address: Address,
    #[serde(alias = "to")]
    pub to_address: Address,
    #[serde(default)]
    pub timestamp: u64,
}

impl TransferRecord {
    pub fn new(
        asset_id: impl Into<String>,
        from_address: impl Into<Address>,
        to_address: impl Into<Address>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            from_address: from_address.into(),
            to_address: to_address.into(),
            timestamp: 0,
        }
    }

    /// Sets the transfer timestamp.
    pub fn at(mut self, millis: u64) -> Self {
        self.timestamp = millis;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_accepts_short_field_names() {
        let json = r#"{"id":"a1","title":"Kiln Notes","owner":"0xA","timestamp":42}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.owner_address, "0xA");
        assert_eq!(asset.created_at, 42);
    }

    #[test]
    fn test_transfer_accepts_both_spellings() {
        let short = r#"{"secretId":"a1","from":"0xA","to":"0xB","timestamp":7}"#;
        let long = r#"{"assetId":"a1","fromAddress":"0xA","toAddress":"0xB"}"#;

        let a: TransferRecord = serde_json::from_str(short).unwrap();
        let b: TransferRecord = serde_json::from_str(long).unwrap();

        assert_eq!(a.asset_id, b.asset_id);
        assert_eq!(a.from_address, b.from_address);
        assert_eq!(a.to_address, b.to_address);
        assert_eq!(b.timestamp, 0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = TransferRecord::new("a1", "0xA", "0xB").at(5);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["assetId"], "a1");
        assert_eq!(value["fromAddress"], "0xA");
        assert_eq!(value["toAddress"], "0xB");
    }
}
