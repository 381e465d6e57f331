// SPDX-License-Identifier: PMPL-1.0-or-later

//! Discovery: enumerate the language packs under a pack root
//!
//! Every immediate subdirectory of the pack root is one language pack,
//! named by its code. The alternate-dialect directory sits alongside them
//! but is storage, not a selectable language, so it is filtered out.
//! Symlinked pack directories count as packs; dangling links are skipped.

use crate::types::LanguagePack;
use anyhow::{bail, Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Directory holding informal-register sources; never listed as a language.
pub const ALT_DIALECT_DIR: &str = "_alt";

/// Directory names under the pack root that are not language codes.
const FILTERED_DIRS: &[&str] = &[ALT_DIALECT_DIR];

/// Find all language packs directly under `root`, sorted by code.
///
/// The codes of the returned packs are the discovered language set.
pub fn discover_packs(root: &Path) -> Result<Vec<LanguagePack>> {
    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let mut packs = Vec::new();
    let walker = WalkDir::new(root).min_depth(1).max_depth(1).follow_links(true);
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Unreadable link targets below the root are not packs.
            Err(err) if err.depth() > 0 => continue,
            Err(err) => {
                return Err(err).with_context(|| format!("reading pack root {}", root.display()))
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if FILTERED_DIRS.contains(&name.as_str()) {
            continue;
        }
        packs.push(LanguagePack::new(name, entry.into_path()));
    }

    packs.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(packs)
}
