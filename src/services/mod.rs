// src/services/mod.rs

//! Service boundary for remote org operations
//!
//! The pipeline never talks to the platform directly; everything goes
//! through these traits so the orchestration logic can be exercised with
//! in-memory fakes. The shipped backend is [`sf_cli::SfCli`], which shells
//! out to the vendor `sf` CLI and decodes its `--json` output into the
//! typed records in [`response`].
//!
//! Org identity is an explicit [`OrgContext`] value passed into every
//! call; there is no process-wide "current connection".

pub mod response;
pub mod sf_cli;

use crate::error::Result;
use crate::packages::PackageRecord;
use response::MetadataObject;

pub use sf_cli::SfCli;

/// Credentials/identity selecting which remote org a service call targets.
///
/// The alias must already be authenticated in the vendor CLI's own auth
/// store; orgsync never manages sessions itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgContext {
    alias: String,
}

impl OrgContext {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }
}

impl std::fmt::Display for OrgContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.alias)
    }
}

/// Describe, query, and retrieval operations against an org
pub trait MetadataService {
    /// List every metadata type the org's describe service exposes,
    /// in the service's own order.
    fn describe_metadata(&self, org: &OrgContext) -> Result<Vec<MetadataObject>>;

    /// Run a structured query returning a single name column.
    fn query_entity_names(&self, org: &OrgContext, soql: &str) -> Result<Vec<String>>;

    /// Retrieve one batch selector into the local project tree.
    fn retrieve(&self, org: &OrgContext, selector: &str) -> Result<()>;
}

/// Installed-package listing and installation against an org
pub trait PackageService {
    /// List the add-on package versions installed in the org.
    fn list_installed(&self, org: &OrgContext) -> Result<Vec<PackageRecord>>;

    /// Install a package version into the org.
    fn install(&self, org: &OrgContext, version_id: &str) -> Result<()>;
}
