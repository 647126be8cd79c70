//! update-check: a TTL-cached update check for command line tools
//!
//! Consults a remote endpoint for the latest published version of a tool,
//! compares it against the running version, and warns the user when a newer
//! release exists. A persisted cache record bounds how often the network is
//! consulted; the whole feature is best-effort and never fails the host tool.

pub mod check;
pub mod config;
