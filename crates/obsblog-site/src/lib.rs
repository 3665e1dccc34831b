//! Vault tree mirroring for obsblog.
//!
//! [`SiteBuilder`] walks the input tree, converts markdown files to HTML at
//! mirrored paths and copies every other file byte-for-byte. Per-file I/O
//! failures are logged and collected into the [`BuildReport`] rather than
//! aborting the run.

mod builder;

pub use builder::{BuildError, BuildReport, FileFailure, SiteBuilder};
