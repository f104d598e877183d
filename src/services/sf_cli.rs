// src/services/sf_cli.rs

//! Vendor CLI backend for the service traits
//!
//! Shells out to the `sf` CLI with `--json`, captures stdout/stderr, and
//! decodes responses through the typed records in [`super::response`].
//! Invocations run with stdin nulled (the CLI prompts interactively on
//! some failures) and under a timeout so a wedged retrieval cannot hang
//! the whole run.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use wait_timeout::ChildExt;

use super::response::{self, DescribeMetadataResult, InstalledPackage, MetadataObject, QueryResult};
use super::{MetadataService, OrgContext, PackageService};
use crate::error::{Error, Result};
use crate::packages::PackageRecord;

/// Default timeout for a single vendor CLI invocation. Retrieval of a
/// large batch can legitimately take several minutes.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Minutes the install command is told to wait for the platform to
/// finish applying a package.
const INSTALL_WAIT_MINUTES: &str = "30";

/// Subprocess-backed implementation of the org service traits
pub struct SfCli {
    binary: PathBuf,
    timeout: Duration,
}

impl SfCli {
    /// Locate `sf` on PATH.
    pub fn new() -> Result<Self> {
        let binary = which::which("sf")
            .map_err(|_| Error::CommandError("vendor CLI `sf` not found on PATH".to_string()))?;
        Ok(Self::with_binary(binary))
    }

    /// Use an explicit binary path instead of resolving `sf` from PATH.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom per-invocation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run the CLI once, returning (success, stdout, stderr).
    fn run(&self, args: &[&str]) -> Result<(bool, String, String)> {
        debug!("sf {}", args.join(" "));

        let mut child = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null()) // the CLI prompts on some paths; never block on input
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::CommandError(format!("failed to spawn vendor CLI: {e}")))?;

        match child.wait_timeout(self.timeout)? {
            Some(status) => {
                let output = child.wait_with_output()?;
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                Ok((status.success(), stdout, stderr))
            }
            None => {
                let _ = child.kill();
                Err(Error::CommandError(format!(
                    "vendor CLI invocation `{}` timed out after {}s",
                    args.join(" "),
                    self.timeout.as_secs()
                )))
            }
        }
    }

    /// Run the CLI and decode a successful JSON envelope.
    fn run_json<T: DeserializeOwned>(&self, args: &[&str]) -> Result<T> {
        let (ok, stdout, stderr) = self.run(args)?;
        if !ok {
            return Err(Error::QueryError(response::decode_failure(&stdout, &stderr)));
        }
        response::decode(&stdout)
    }
}

impl MetadataService for SfCli {
    fn describe_metadata(&self, org: &OrgContext) -> Result<Vec<MetadataObject>> {
        let result: DescribeMetadataResult = self.run_json(&[
            "org",
            "list",
            "metadata-types",
            "--target-org",
            org.alias(),
            "--json",
        ])?;
        Ok(result.metadata_objects)
    }

    fn query_entity_names(&self, org: &OrgContext, soql: &str) -> Result<Vec<String>> {
        let result: QueryResult = self.run_json(&[
            "data",
            "query",
            "--query",
            soql,
            "--target-org",
            org.alias(),
            "--json",
        ])?;
        Ok(result
            .records
            .into_iter()
            .map(|r| r.qualified_api_name)
            .collect())
    }

    fn retrieve(&self, org: &OrgContext, selector: &str) -> Result<()> {
        let (ok, stdout, stderr) = self.run(&[
            "project",
            "retrieve",
            "start",
            "--metadata",
            selector,
            "--target-org",
            org.alias(),
            "--ignore-conflicts",
            "--json",
        ])?;
        if !ok {
            return Err(Error::RetrieveError(response::decode_failure(
                &stdout, &stderr,
            )));
        }
        Ok(())
    }
}

impl PackageService for SfCli {
    fn list_installed(&self, org: &OrgContext) -> Result<Vec<PackageRecord>> {
        let records: Vec<InstalledPackage> = self.run_json(&[
            "package",
            "installed",
            "list",
            "--target-org",
            org.alias(),
            "--json",
        ])?;
        Ok(records
            .into_iter()
            .map(|r| PackageRecord {
                version_id: r.version_id,
                name: r.name,
            })
            .collect())
    }

    fn install(&self, org: &OrgContext, version_id: &str) -> Result<()> {
        let (ok, stdout, stderr) = self.run(&[
            "package",
            "install",
            "--package",
            version_id,
            "--target-org",
            org.alias(),
            "--wait",
            INSTALL_WAIT_MINUTES,
            "--no-prompt",
            "--json",
        ])?;
        if !ok {
            return Err(Error::InstallError {
                version_id: version_id.to_string(),
                message: response::decode_failure(&stdout, &stderr),
            });
        }
        Ok(())
    }
}
