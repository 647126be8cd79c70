//! TTL-backed remote version-check cache
//!
//! This module decides whether a cached "latest version" answer can still be
//! trusted, refreshes it from the remote endpoint when it cannot, and warns
//! the user when the running tool is behind the latest release.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│    Store    │◀────│   Checker   │
//! │  (remote)   │     │ (cache file)│     │ (staleness) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │   Version   │
//!                                         │ (ordering)  │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: staleness policy and check orchestration
//! - [`error`]: error types for parsing, fetching, and storage
//! - [`fetcher`]: remote retrieval of the latest published version
//! - [`record`]: the persisted cache record and its validity rules
//! - [`store`]: defensive read and atomic write of the cache file
//! - [`version`]: dotted-integer version parsing and ordering

pub mod checker;
pub mod error;
pub mod fetcher;
pub mod record;
pub mod store;
pub mod version;
