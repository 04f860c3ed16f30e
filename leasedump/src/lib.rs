//! Offline inspection of ISC dhcpd lease database files.
//!
//! dhcpd records every binding change by appending a fresh
//! `lease <address> { ... }` block to its leases file, so the file is an
//! append-only log with many blocks per address. `leasefile-core` turns
//! that text into ordered records; this crate supplies everything around
//! the parse:
//!
//! - [`loader`] — whole-file reading under an exclusive advisory lock
//! - [`report`] — terminal rendering of records, warnings, and stats
//! - [`stats`] — aggregate counts over a parsed lease set
//!
//! The `leasedump` binary wires these into `dump` and `stats` subcommands.

pub mod loader;
pub mod report;
pub mod stats;
