// src/commands/mod.rs
//! Command handlers for the orgsync CLI

mod progress;

pub use progress::CliProgress;

use anyhow::{Context, Result, bail};
use std::process::Command;
use tracing::info;

use orgsync::services::SfCli;
use orgsync::{Category, OrgContext, chunk_for, inventory};

/// Retrieve the org's full metadata inventory in three sequential
/// stages: whole metadata types, standard objects, standard value sets.
pub fn cmd_pull(target_org: &str, chunk_size: usize) -> Result<()> {
    info!("pulling metadata from {}", target_org);

    let service = SfCli::new()?;
    let org = OrgContext::new(target_org);

    let types = inventory::list_metadata_type_names(&service, &org)?;
    let batches = chunk_for(Category::MetadataType, &types, chunk_size)?;
    println!(
        "Retrieving {} metadata types in {} batches",
        types.len(),
        batches.len()
    );
    orgsync::retrieve_batches(
        &service,
        &org,
        &batches,
        &CliProgress::new("Metadata types"),
    )?;

    let objects = inventory::list_retrievable_object_names(&service, &org)?;
    let batches = chunk_for(Category::StandardObject, &objects, chunk_size)?;
    println!(
        "Retrieving {} standard objects in {} batches",
        objects.len(),
        batches.len()
    );
    orgsync::retrieve_batches(
        &service,
        &org,
        &batches,
        &CliProgress::new("Standard objects"),
    )?;

    let value_sets = inventory::standard_value_set_names();
    let batches = chunk_for(Category::StandardValueSet, &value_sets, chunk_size)?;
    println!(
        "Retrieving {} standard value sets in {} batches",
        value_sets.len(),
        batches.len()
    );
    orgsync::retrieve_batches(
        &service,
        &org,
        &batches,
        &CliProgress::new("Standard value sets"),
    )?;

    println!("Pull complete");
    Ok(())
}

/// Diff installed packages between two orgs and install the missing
/// ones into the target.
pub fn cmd_clone(source_org: &str, target_org: &str, diff_only: bool) -> Result<()> {
    info!("diffing packages: {} -> {}", source_org, target_org);

    let service = SfCli::new()?;
    let source = OrgContext::new(source_org);
    let target = OrgContext::new(target_org);

    let missing = orgsync::diff(&service, &source, &target)?;
    if missing.is_empty() {
        println!("No packages to install; {target_org} is up to date");
        return Ok(());
    }

    println!("Packages installed in {source_org} but not in {target_org}:");
    for (version_id, name) in &missing {
        println!("  {version_id}  {name}");
    }

    if diff_only {
        return Ok(());
    }

    let installed = orgsync::install_all(
        &service,
        &missing,
        &target,
        &CliProgress::new("Installing packages"),
    )?;
    println!(
        "Installed {} of {} packages into {}",
        installed,
        missing.len(),
        target_org
    );
    Ok(())
}

/// Strip Flexipage action overrides from retrieved object definitions,
/// optionally on a fresh git branch so the rewrites stay reviewable.
pub fn cmd_datamodel(pattern: &str, branch: Option<&str>) -> Result<()> {
    if let Some(name) = branch {
        create_branch(name)?;
        println!("Created branch {name}");
    }

    let summary = orgsync::strip_all(pattern, &CliProgress::new("Rewriting object definitions"))?;
    println!(
        "Scanned {} files; removed {} Flexipage overrides across {} files",
        summary.files_scanned, summary.overrides_removed, summary.files_changed
    );
    Ok(())
}

/// Create and switch to a git branch before mutating the working tree.
fn create_branch(name: &str) -> Result<()> {
    which::which("git").context("git not installed")?;

    info!("creating branch {}", name);
    let status = Command::new("git")
        .args(["checkout", "-b", name])
        .status()
        .context("failed to run git")?;
    if !status.success() {
        bail!("git branch / checkout failed");
    }
    Ok(())
}
