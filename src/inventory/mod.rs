// src/inventory/mod.rs

//! Candidate name sets for each retrieval stage
//!
//! Three sources feed the chunker: the org's describe service (metadata
//! type names), an entity-definition query (retrievable standard
//! objects), and the fixed standard value-set list in [`value_sets`].

mod value_sets;

pub use value_sets::STANDARD_VALUE_SETS;

use tracing::debug;

use crate::error::Result;
use crate::services::{MetadataService, OrgContext};

/// Metadata types the describe service reports but the retrieval command
/// rejects. Exact, case-sensitive matches; everything else passes.
const UNRETRIEVABLE_TYPES: &[&str] = &[
    "AIApplication",
    "AIApplicationConfig",
    "EventRelayConfig",
    "IPAddressRange",
    "MLDataDefinition",
    "MLPredictionDefinition",
    "ManagedEventSubscription",
    "MktCalcInsightObjectDef",
    "MktDataTranObject",
    "SearchCustomization",
    "SearchOrgWideObjectConfig",
    "SvcCatalogFilterCriteria",
];

/// Suffix marking custom objects; standard-object retrieval skips these.
const CUSTOM_OBJECT_SUFFIX: &str = "__c";

/// Entity definitions the platform will hand back through retrieval.
const RETRIEVABLE_ENTITY_QUERY: &str = "SELECT QualifiedApiName FROM EntityDefinition \
     WHERE IsRetrieveable = true AND IsCustomizable = true \
     ORDER BY QualifiedApiName";

/// List every metadata type name the org exposes, minus the fixed
/// deny-list of types the retrieval command cannot handle. Describe
/// ordering is preserved.
pub fn list_metadata_type_names(
    service: &dyn MetadataService,
    org: &OrgContext,
) -> Result<Vec<String>> {
    let described = service.describe_metadata(org)?;
    let names: Vec<String> = described
        .into_iter()
        .map(|m| m.xml_name)
        .filter(|name| !UNRETRIEVABLE_TYPES.contains(&name.as_str()))
        .collect();
    debug!("{} metadata types after deny-list filtering", names.len());
    Ok(names)
}

/// List the API names of retrievable, customizable standard objects.
/// Custom objects carry the `__c` suffix and are excluded; they arrive
/// through the project's own source tracking instead.
pub fn list_retrievable_object_names(
    service: &dyn MetadataService,
    org: &OrgContext,
) -> Result<Vec<String>> {
    let names: Vec<String> = service
        .query_entity_names(org, RETRIEVABLE_ENTITY_QUERY)?
        .into_iter()
        .filter(|name| !name.ends_with(CUSTOM_OBJECT_SUFFIX))
        .collect();
    debug!("{} standard objects after suffix filtering", names.len());
    Ok(names)
}

/// The fixed standard value-set reference list, as owned names.
pub fn standard_value_set_names() -> Vec<String> {
    STANDARD_VALUE_SETS.iter().map(|s| s.to_string()).collect()
}
