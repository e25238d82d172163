//! Persistence: the line-oriented wire format and the file-backed store.
//!
//! Split in two layers. [`format`] converts between text and [`Snapshot`]
//! records and knows nothing about files; [`TournamentStore`] owns a path
//! and handles reading, atomic writing and the load fallback policy.

pub mod error;
pub mod format;
pub mod manager;

pub use error::StoreError;
pub use format::{decode, encode, FixtureRecord, PlayerRecord, Snapshot, TeamRecord};
pub use manager::TournamentStore;
