// src/lib.rs

//! orgsync
//!
//! Batch metadata synchronization and object-definition cleanup for
//! Salesforce-style declarative-platform orgs.
//!
//! # Architecture
//!
//! - Inventory: enumerate metadata types, retrievable standard objects,
//!   and the fixed standard value-set reference list
//! - Chunking: partition name lists into bounded request selectors
//! - Retrieval: strictly sequential batch pulls with progress reporting
//! - Packages: installed-package diff between orgs plus sequential install
//! - Overrides: idempotent removal of Flexipage action overrides from
//!   retrieved object-definition XML documents
//!
//! All remote operations go through the service traits in [`services`];
//! the concrete backend shells out to the vendor `sf` CLI.

pub mod chunk;
mod error;
pub mod inventory;
pub mod overrides;
pub mod packages;
pub mod progress;
pub mod retrieve;
pub mod services;

pub use chunk::{Category, chunk, chunk_for};
pub use error::{Error, Result};
pub use overrides::{StripSummary, strip_all, strip_overrides};
pub use packages::{PackageRecord, diff, install_all};
pub use progress::{LogProgress, ProgressReporter, SilentProgress};
pub use retrieve::retrieve_batches;
pub use services::{MetadataService, OrgContext, PackageService};
