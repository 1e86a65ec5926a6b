//! Lineage Core - Records for ownership hand-off tracking
//!
//! This crate defines the input side of lineage reconstruction: the assets
//! that can be handed off, the transfer records describing each hand-off,
//! and the ledger bundle that groups them.
//!
//! Records are treated as trusted application data. Nothing here talks to
//! a ledger or verifies signatures; a collaborator supplies the records and
//! `lineage-graph` turns them into a renderable snapshot.
//!
//! # Example
//!
//! ```no_run
//! use lineage_core::Ledger;
//!
//! let ledger = Ledger::from_path("ledger.json")?;
//! println!("{} assets, {} transfers", ledger.assets.len(), ledger.transfers.len());
//! # Ok::<(), lineage_core::LineageError>(())
//! ```

mod config;
mod error;
mod ledger;
mod record;

pub use config::{LineageConfig, CONFIG_DIR, CONFIG_FILE, DEFAULT_PLACEHOLDER_TITLE};
pub use error::{LineageError, Result};
pub use ledger::Ledger;
pub use record::{Address, Asset, TransferRecord};
