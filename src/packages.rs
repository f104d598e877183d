// src/packages.rs

//! Installed-package diff and sequential installation
//!
//! Computes which add-on package versions a source org carries that a
//! target org lacks, then installs them into the target one at a time.
//! The platform rejects a second install of the same version with an
//! "already installed" message; that conflict is logged and treated as
//! success so a re-run converges instead of failing halfway.

use std::collections::{BTreeMap, HashSet};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::progress::ProgressReporter;
use crate::services::{OrgContext, PackageService};

/// Marker the platform embeds in the failure message when the package
/// version is already present in the target.
const ALREADY_INSTALLED_MARKER: &str = "already installed";

/// One installed add-on package version in an org
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    /// Unique package version id (the platform's `04t...` key)
    pub version_id: String,
    /// Human-readable package name
    pub name: String,
}

/// Compute the packages installed in `source` but absent from `target`,
/// keyed by version id. Ordering of the result is not significant; a
/// BTreeMap keeps install order deterministic across runs.
pub fn diff(
    service: &dyn PackageService,
    source: &OrgContext,
    target: &OrgContext,
) -> Result<BTreeMap<String, String>> {
    let source_installed = service.list_installed(source)?;
    let target_installed = service.list_installed(target)?;

    let target_ids: HashSet<String> = target_installed
        .into_iter()
        .map(|record| record.version_id)
        .collect();

    let missing: BTreeMap<String, String> = source_installed
        .into_iter()
        .filter(|record| !target_ids.contains(&record.version_id))
        .map(|record| (record.version_id, record.name))
        .collect();

    info!(
        "{} packages installed in {} but not in {}",
        missing.len(),
        source,
        target
    );
    Ok(missing)
}

/// Install every package in `missing` into `target`, sequentially.
///
/// An install failure whose message marks the package as already
/// installed counts as success; any other failure is fatal and aborts
/// the remaining installs. Returns the number of packages actually
/// installed (conflicts excluded).
pub fn install_all(
    service: &dyn PackageService,
    missing: &BTreeMap<String, String>,
    target: &OrgContext,
    progress: &dyn ProgressReporter,
) -> Result<usize> {
    progress.begin(missing.len() as u64);

    let mut installed = 0;
    for (index, (version_id, name)) in missing.iter().enumerate() {
        progress.message(&format!("installing {name} ({version_id})"));
        match service.install(target, version_id) {
            Ok(()) => {
                info!("installed {} ({}) into {}", name, version_id, target);
                installed += 1;
            }
            Err(Error::InstallError { message, .. })
                if message.contains(ALREADY_INSTALLED_MARKER) =>
            {
                warn!("{} ({}) already installed in {}", name, version_id, target);
            }
            Err(e) => return Err(e),
        }
        progress.advance((index + 1) as u64);
    }

    progress.finish("package installs complete");
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SilentProgress;
    use std::sync::Mutex;

    struct FakePackages {
        source: Vec<PackageRecord>,
        target: Vec<PackageRecord>,
        install_calls: Mutex<Vec<String>>,
        fail_with: Option<(String, String)>, // version_id -> message
    }

    impl FakePackages {
        fn new(source: &[(&str, &str)], target: &[(&str, &str)]) -> Self {
            let mk = |v: &[(&str, &str)]| {
                v.iter()
                    .map(|(id, name)| PackageRecord {
                        version_id: id.to_string(),
                        name: name.to_string(),
                    })
                    .collect()
            };
            Self {
                source: mk(source),
                target: mk(target),
                install_calls: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(mut self, version_id: &str, message: &str) -> Self {
            self.fail_with = Some((version_id.to_string(), message.to_string()));
            self
        }
    }

    impl PackageService for FakePackages {
        fn list_installed(&self, org: &OrgContext) -> Result<Vec<PackageRecord>> {
            if org.alias() == "source" {
                Ok(self.source.clone())
            } else {
                Ok(self.target.clone())
            }
        }

        fn install(&self, _org: &OrgContext, version_id: &str) -> Result<()> {
            self.install_calls.lock().unwrap().push(version_id.to_string());
            if let Some((fail_id, message)) = &self.fail_with {
                if fail_id == version_id {
                    return Err(Error::InstallError {
                        version_id: version_id.to_string(),
                        message: message.clone(),
                    });
                }
            }
            Ok(())
        }
    }

    fn orgs() -> (OrgContext, OrgContext) {
        (OrgContext::new("source"), OrgContext::new("target"))
    }

    #[test]
    fn test_diff_is_set_difference_on_version_id() {
        let fake = FakePackages::new(
            &[("04t1", "Alpha"), ("04t2", "Beta")],
            &[("04t1", "Alpha")],
        );
        let (source, target) = orgs();
        let missing = diff(&fake, &source, &target).unwrap();

        assert_eq!(missing.len(), 1);
        assert_eq!(missing.get("04t2").map(String::as_str), Some("Beta"));
    }

    #[test]
    fn test_diff_matches_on_version_id_not_name() {
        // Same name in the target under a different version id still counts
        // as missing.
        let fake = FakePackages::new(&[("04t2", "Alpha")], &[("04t1", "Alpha")]);
        let (source, target) = orgs();
        let missing = diff(&fake, &source, &target).unwrap();
        assert_eq!(missing.get("04t2").map(String::as_str), Some("Alpha"));
    }

    #[test]
    fn test_diff_empty_when_target_is_superset() {
        let fake = FakePackages::new(
            &[("04t1", "Alpha")],
            &[("04t1", "Alpha"), ("04t2", "Beta")],
        );
        let (source, target) = orgs();
        assert!(diff(&fake, &source, &target).unwrap().is_empty());
    }

    #[test]
    fn test_install_all_sequential_and_counted() {
        let fake = FakePackages::new(&[], &[]);
        let (_, target) = orgs();
        let missing: BTreeMap<String, String> = [
            ("04t1".to_string(), "Alpha".to_string()),
            ("04t2".to_string(), "Beta".to_string()),
        ]
        .into();

        let installed = install_all(&fake, &missing, &target, &SilentProgress).unwrap();
        assert_eq!(installed, 2);
        assert_eq!(*fake.install_calls.lock().unwrap(), vec!["04t1", "04t2"]);
    }

    #[test]
    fn test_already_installed_conflict_is_recovered() {
        let fake = FakePackages::new(&[], &[]).failing(
            "04t1",
            "This package is already installed in your organization.",
        );
        let (_, target) = orgs();
        let missing: BTreeMap<String, String> = [
            ("04t1".to_string(), "Alpha".to_string()),
            ("04t2".to_string(), "Beta".to_string()),
        ]
        .into();

        // conflict swallowed, remaining install proceeds
        let installed = install_all(&fake, &missing, &target, &SilentProgress).unwrap();
        assert_eq!(installed, 1);
        assert_eq!(*fake.install_calls.lock().unwrap(), vec!["04t1", "04t2"]);
    }

    #[test]
    fn test_other_install_failures_abort_remaining() {
        let fake =
            FakePackages::new(&[], &[]).failing("04t1", "insufficient access rights on org");
        let (_, target) = orgs();
        let missing: BTreeMap<String, String> = [
            ("04t1".to_string(), "Alpha".to_string()),
            ("04t2".to_string(), "Beta".to_string()),
        ]
        .into();

        let err = install_all(&fake, &missing, &target, &SilentProgress).unwrap_err();
        assert!(matches!(err, Error::InstallError { .. }));
        assert_eq!(*fake.install_calls.lock().unwrap(), vec!["04t1"]);
    }
}
