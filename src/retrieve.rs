// src/retrieve.rs

//! Sequential batch retrieval
//!
//! One retrieval request per batch, strictly one in flight at a time.
//! Batches share the local project tree and the org's request limits, so
//! nothing here runs in parallel; the first failure aborts the rest of
//! the stage. Batches that already completed stay on disk.

use tracing::{debug, info};

use crate::error::Result;
use crate::progress::ProgressReporter;
use crate::services::{MetadataService, OrgContext};

/// Retrieve every batch selector in order, reporting progress after each
/// one completes. Returns how many batches finished.
pub fn retrieve_batches(
    service: &dyn MetadataService,
    org: &OrgContext,
    batches: &[String],
    progress: &dyn ProgressReporter,
) -> Result<usize> {
    info!("retrieving {} batches from {}", batches.len(), org);
    progress.begin(batches.len() as u64);

    for (index, selector) in batches.iter().enumerate() {
        debug!("batch {}: {}", index + 1, selector);
        progress.message(selector);
        service.retrieve(org, selector)?;
        progress.advance((index + 1) as u64);
    }

    progress.finish("retrieval complete");
    Ok(batches.len())
}
