//! Error types shared by the lineage crates.

use thiserror::Error;

/// Errors raised while loading records or building a lineage graph.
#[derive(Error, Debug)]
pub enum LineageError {
    /// The transfer graph contains a cycle, so no generation level exists.
    ///
    /// Detected when an address would be raised past `bound`, the largest
    /// level an acyclic graph of this size can produce, or when an address
    /// with predecessors is never reached from any root.
    #[error("cyclic lineage detected at address {address} (level bound {bound})")]
    CyclicLineage { address: String, bound: usize },

    /// An address was requested that has no node in the snapshot.
    #[error("unknown address: {0}")]
    UnknownAddress(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for lineage operations.
pub type Result<T> = std::result::Result<T, LineageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_message_names_address() {
        let err = LineageError::CyclicLineage {
            address: "0xabc".to_string(),
            bound: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("0xabc"));
        assert!(msg.contains("3"));
    }
}
