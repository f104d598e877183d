// src/chunk.rs

//! Batch chunking for metadata retrieval selectors
//!
//! The vendor retrieval command accepts a single comma-delimited selector
//! string and degrades badly past a few dozen members, so name lists are
//! partitioned into bounded batches up front. Each batch is serialized by
//! joining its members with the category's join token; prefixed categories
//! additionally get the category qualifier attached once per batch, so
//! every member of the selector ends up qualified:
//!
//! ```text
//! StandardValueSet:AccountType,StandardValueSet:CaseStatus,...
//! ```

use crate::error::{Error, Result};

/// Metadata category being retrieved
///
/// The category determines the join token used between batch members and
/// whether the serialized batch carries a leading qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Whole metadata types (`ApexClass`, `Workflow`, ...)
    MetadataType,
    /// Standard objects, retrieved as qualified `CustomObject` members
    StandardObject,
    /// Standard value sets
    StandardValueSet,
}

impl Category {
    /// Token placed between batch members
    pub const fn join_token(self) -> &'static str {
        match self {
            Self::MetadataType => ",",
            Self::StandardObject => ",CustomObject:",
            Self::StandardValueSet => ",StandardValueSet:",
        }
    }

    /// Whether the serialized batch carries the category qualifier once
    /// at the front
    pub const fn prefixed(self) -> bool {
        !matches!(self, Self::MetadataType)
    }
}

/// Partition `names` into batches of at most `size` members, each
/// serialized into a single selector string.
///
/// Members keep their input order and every name lands in exactly one
/// batch; the last batch may be smaller. When `prefixed` is set, the
/// join token with commas stripped and whitespace trimmed is prepended
/// once per batch as the category qualifier. An empty input produces no
/// batches at all.
pub fn chunk(names: &[String], size: usize, prefixed: bool, join_token: &str) -> Result<Vec<String>> {
    if size == 0 {
        return Err(Error::InvalidChunkSize(size));
    }

    let prefix = join_token.replace(',', "").trim().to_string();

    Ok(names
        .chunks(size)
        .map(|group| {
            let body = group.join(join_token);
            if prefixed {
                format!("{prefix}{body}")
            } else {
                body
            }
        })
        .collect())
}

/// Chunk `names` using the join token and prefixing rule of `category`.
pub fn chunk_for(category: Category, names: &[String], size: usize) -> Result<Vec<String>> {
    chunk(names, size, category.prefixed(), category.join_token())
}
