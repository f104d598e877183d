// tests/common/mod.rs

//! Shared fakes for integration tests
//!
//! In-memory service implementations recording every call, so tests can
//! assert on ordering and arguments without a vendor CLI on PATH.

use std::collections::HashMap;
use std::sync::Mutex;

use orgsync::services::response::MetadataObject;
use orgsync::{Error, MetadataService, OrgContext, PackageRecord, PackageService, Result};

#[derive(Default)]
pub struct FakeOrgService {
    pub metadata_types: Vec<String>,
    pub entity_names: Vec<String>,
    pub installed: Mutex<HashMap<String, Vec<PackageRecord>>>,
    pub retrieved: Mutex<Vec<String>>,
    pub installs: Mutex<Vec<String>>,
    pub fail_install_with: Option<String>,
}

impl FakeOrgService {
    pub fn with_types(types: &[&str]) -> Self {
        Self {
            metadata_types: types.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn entities(mut self, names: &[&str]) -> Self {
        self.entity_names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn installed_in(self, alias: &str, packages: &[(&str, &str)]) -> Self {
        let records = packages
            .iter()
            .map(|(id, name)| PackageRecord {
                version_id: id.to_string(),
                name: name.to_string(),
            })
            .collect();
        self.installed
            .lock()
            .unwrap()
            .insert(alias.to_string(), records);
        self
    }

    pub fn failing_installs(mut self, message: &str) -> Self {
        self.fail_install_with = Some(message.to_string());
        self
    }
}

impl MetadataService for FakeOrgService {
    fn describe_metadata(&self, _org: &OrgContext) -> Result<Vec<MetadataObject>> {
        Ok(self
            .metadata_types
            .iter()
            .map(|name| MetadataObject {
                xml_name: name.clone(),
                directory_name: None,
                suffix: None,
                in_folder: false,
                meta_file: false,
            })
            .collect())
    }

    fn query_entity_names(&self, _org: &OrgContext, _soql: &str) -> Result<Vec<String>> {
        Ok(self.entity_names.clone())
    }

    fn retrieve(&self, _org: &OrgContext, selector: &str) -> Result<()> {
        self.retrieved.lock().unwrap().push(selector.to_string());
        Ok(())
    }
}

impl PackageService for FakeOrgService {
    fn list_installed(&self, org: &OrgContext) -> Result<Vec<PackageRecord>> {
        Ok(self
            .installed
            .lock()
            .unwrap()
            .get(org.alias())
            .cloned()
            .unwrap_or_default())
    }

    fn install(&self, _org: &OrgContext, version_id: &str) -> Result<()> {
        self.installs.lock().unwrap().push(version_id.to_string());
        if let Some(message) = &self.fail_install_with {
            return Err(Error::InstallError {
                version_id: version_id.to_string(),
                message: message.clone(),
            });
        }
        Ok(())
    }
}
