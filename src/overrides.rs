// src/overrides.rs

//! Flexipage action-override removal from object-definition documents
//!
//! Retrieved `*.object-meta.xml` files carry `actionOverrides` elements
//! that pin standard actions to Flexipage UI surfaces; deploying them
//! back unchanged clobbers the target org's page assignments, so they
//! are stripped after retrieval.
//!
//! The document is parsed into its full event sequence and the surviving
//! events are selected by a single pure filter pass: an `actionOverrides`
//! subtree whose `type` text equals the target kind is dropped together
//! with the indentation that precedes it, everything else is carried
//! verbatim. The file is rewritten only when at least one override was
//! dropped, so a second run finds nothing to remove and leaves the bytes
//! untouched.

use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::Event;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::progress::ProgressReporter;

/// Override kind removed from retrieved documents
pub const TARGET_OVERRIDE_TYPE: &str = "Flexipage";

/// Where object definitions land in a conventional project tree
pub const DEFAULT_OBJECT_PATTERN: &str =
    "force-app/main/default/objects/**/*.object-meta.xml";

/// Element holding one action override, repeated under the document root
const OVERRIDE_ELEMENT: &[u8] = b"actionOverrides";

/// Child element naming the override kind
const TYPE_ELEMENT: &[u8] = b"type";

/// Outcome of a directory-wide stripping pass
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StripSummary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub overrides_removed: usize,
}

/// Strip target-kind action overrides from the document at `path`.
///
/// Returns whether the file was rewritten. A document without action
/// overrides (or with none of the target kind) is left untouched.
pub fn strip_overrides(path: &Path) -> Result<bool> {
    Ok(strip_file(path)? > 0)
}

/// Strip every matching document under `pattern`, one file at a time in
/// glob order, reporting current/total progress. The first file that
/// fails to parse or write aborts the scan.
pub fn strip_all(pattern: &str, progress: &dyn ProgressReporter) -> Result<StripSummary> {
    let paths: Vec<PathBuf> = glob::glob(pattern)?.collect::<std::result::Result<_, _>>()?;

    info!("{} object definitions match {}", paths.len(), pattern);
    progress.begin(paths.len() as u64);

    let mut summary = StripSummary::default();
    for (index, path) in paths.iter().enumerate() {
        progress.message(&path.display().to_string());
        let removed = strip_file(path)?;
        summary.files_scanned += 1;
        if removed > 0 {
            summary.files_changed += 1;
            summary.overrides_removed += removed;
        }
        progress.advance((index + 1) as u64);
    }

    progress.finish(&format!(
        "removed {} overrides across {} files",
        summary.overrides_removed, summary.files_changed
    ));
    Ok(summary)
}

/// Read, filter, and conditionally rewrite one document. Returns the
/// number of overrides removed.
fn strip_file(path: &Path) -> Result<usize> {
    let text = std::fs::read_to_string(path)?;
    let (rewritten, removed) = strip_document(&text)?;

    if let Some(new_text) = rewritten {
        info!(
            "removed {} Flexipage action overrides from {}",
            removed,
            path.display()
        );
        std::fs::write(path, new_text)?;
    } else {
        debug!("no Flexipage action overrides in {}", path.display());
    }
    Ok(removed)
}

/// Pure filter over the document's event sequence. Returns the rewritten
/// text when at least one override was removed, `None` otherwise.
fn strip_document(input: &str) -> Result<(Option<String>, usize)> {
    let mut reader = Reader::from_str(input);
    let mut events: Vec<Event<'static>> = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            ev => events.push(ev.into_owned()),
        }
    }

    let mut kept: Vec<&Event> = Vec::with_capacity(events.len());
    // Whitespace runs are held back until the following node is kept, so
    // a dropped override takes its own indentation with it.
    let mut pending_ws: Vec<&Event> = Vec::new();
    let mut removed = 0usize;
    let mut depth = 0usize;

    let mut index = 0;
    while index < events.len() {
        let event = &events[index];
        match event {
            Event::Start(start) => {
                if depth == 1 && start.name().as_ref() == OVERRIDE_ELEMENT {
                    let (end_index, override_type) = scan_override(&events, index)?;
                    if override_type.as_deref() == Some(TARGET_OVERRIDE_TYPE) {
                        pending_ws.clear();
                        removed += 1;
                    } else {
                        kept.append(&mut pending_ws);
                        kept.extend(&events[index..=end_index]);
                    }
                    index = end_index + 1;
                    continue;
                }
                kept.append(&mut pending_ws);
                kept.push(event);
                depth += 1;
            }
            Event::End(_) => {
                kept.append(&mut pending_ws);
                kept.push(event);
                depth = depth.saturating_sub(1);
            }
            Event::Text(text) => {
                let raw = text.unescape()?;
                if raw.chars().all(char::is_whitespace) {
                    pending_ws.push(event);
                } else {
                    kept.append(&mut pending_ws);
                    kept.push(event);
                }
            }
            _ => {
                kept.append(&mut pending_ws);
                kept.push(event);
            }
        }
        index += 1;
    }
    kept.append(&mut pending_ws);

    if removed == 0 {
        return Ok((None, 0));
    }

    let mut writer = Writer::new(Vec::new());
    for event in kept {
        writer.write_event(event.clone())?;
    }
    let output = String::from_utf8(writer.into_inner())
        .map_err(|e| Error::ParseError(format!("document is not valid UTF-8 after rewrite: {e}")))?;
    Ok((Some(output), removed))
}

/// Walk one `actionOverrides` subtree starting at `start_index`. Returns
/// the index of its end event and the text of its direct `type` child,
/// if any.
fn scan_override(events: &[Event<'_>], start_index: usize) -> Result<(usize, Option<String>)> {
    let mut level = 1usize;
    let mut override_type: Option<String> = None;
    let mut in_type = false;

    for (offset, event) in events[start_index + 1..].iter().enumerate() {
        match event {
            Event::Start(start) => {
                if level == 1 && start.name().as_ref() == TYPE_ELEMENT {
                    in_type = true;
                }
                level += 1;
            }
            Event::End(_) => {
                level -= 1;
                if level == 1 {
                    in_type = false;
                }
                if level == 0 {
                    return Ok((start_index + 1 + offset, override_type));
                }
            }
            Event::Text(text) => {
                if in_type && override_type.is_none() {
                    override_type = Some(text.unescape()?.into_owned());
                }
            }
            _ => {}
        }
    }

    Err(Error::ParseError(
        "unterminated actionOverrides element".to_string(),
    ))
}
