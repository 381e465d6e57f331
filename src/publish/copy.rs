// SPDX-License-Identifier: PMPL-1.0-or-later

//! File-level operations: target directories and confirmed copies

use crate::i18n::{t_with, Lang};
use crate::prompt::{ask_until, parse_yes_no};
use crate::terminal::Terminal;
use crate::types::CopyOutcome;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Permissions for created language directories (unix only).
#[cfg(unix)]
const DIR_MODE: u32 = 0o775;

/// Create `dir` (and missing parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
        .create(dir)
        .with_context(|| format!("creating {}", dir.display()))
}

/// Copy `source` over `target`, turning I/O failures into an outcome.
pub fn copy_file(source: &Path, target: &Path) -> CopyOutcome {
    match fs::copy(source, target) {
        Ok(_) => CopyOutcome::Copied {
            target: target.to_path_buf(),
        },
        Err(err) => CopyOutcome::Failed {
            target: target.to_path_buf(),
            reason: err.to_string(),
        },
    }
}

/// Copy one file, asking before replacing an existing target.
///
/// Returns `Ok(None)` when the overwrite question ran out of attempts.
pub fn confirm_overwrite(
    term: &mut dyn Terminal,
    lang: Lang,
    source: &Path,
    target: &Path,
    force: bool,
    max_attempts: usize,
) -> Result<Option<CopyOutcome>> {
    if !source.exists() {
        return Ok(Some(CopyOutcome::Missing {
            source: source.to_path_buf(),
        }));
    }
    if force || !target.exists() {
        return Ok(Some(copy_file(source, target)));
    }

    let file = target.display().to_string();
    let question = t_with(lang, "copy.exists", &[("file", file.as_str())]);
    let outcome = ask_until(term, &question, max_attempts, parse_yes_no)?.map(|overwrite| {
        if overwrite {
            copy_file(source, target)
        } else {
            CopyOutcome::Declined {
                target: target.to_path_buf(),
            }
        }
    });
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ScriptedTerminal;
    use tempfile::TempDir;

    fn setup() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.php");
        let target = dir.path().join("target.php");
        fs::write(&source, "new").unwrap();
        (dir, source, target)
    }

    #[test]
    fn missing_source_is_reported_without_prompt() {
        let (dir, _, target) = setup();
        let mut term = ScriptedTerminal::default();
        let outcome =
            confirm_overwrite(&mut term, Lang::En, &dir.path().join("nope.php"), &target, false, 3)
                .unwrap();
        assert!(matches!(outcome, Some(CopyOutcome::Missing { .. })));
        assert!(!target.exists());
        assert!(term.questions().is_empty());
    }

    #[test]
    fn fresh_target_is_copied_without_prompt() {
        let (_dir, source, target) = setup();
        let mut term = ScriptedTerminal::default();
        let outcome = confirm_overwrite(&mut term, Lang::En, &source, &target, false, 3).unwrap();
        assert!(matches!(outcome, Some(CopyOutcome::Copied { .. })));
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn existing_target_declined_keeps_content() {
        let (_dir, source, target) = setup();
        fs::write(&target, "old").unwrap();
        let mut term = ScriptedTerminal::new(["n"]);
        let outcome = confirm_overwrite(&mut term, Lang::En, &source, &target, false, 3).unwrap();
        assert!(matches!(outcome, Some(CopyOutcome::Declined { .. })));
        assert_eq!(fs::read_to_string(&target).unwrap(), "old");
    }

    #[test]
    fn existing_target_reprompts_until_yes() {
        let (_dir, source, target) = setup();
        fs::write(&target, "old").unwrap();
        let mut term = ScriptedTerminal::new(["perhaps", "YES"]);
        let outcome = confirm_overwrite(&mut term, Lang::En, &source, &target, false, 3).unwrap();
        assert!(matches!(outcome, Some(CopyOutcome::Copied { .. })));
        assert_eq!(term.questions().len(), 2);
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn exhausted_prompt_leaves_target_alone() {
        let (_dir, source, target) = setup();
        fs::write(&target, "old").unwrap();
        let mut term = ScriptedTerminal::new(["a", "b"]);
        let outcome = confirm_overwrite(&mut term, Lang::En, &source, &target, false, 2).unwrap();
        assert!(outcome.is_none());
        assert_eq!(fs::read_to_string(&target).unwrap(), "old");
    }

    #[test]
    fn force_overwrites_without_prompt() {
        let (_dir, source, target) = setup();
        fs::write(&target, "old").unwrap();
        let mut term = ScriptedTerminal::default();
        let outcome = confirm_overwrite(&mut term, Lang::En, &source, &target, true, 3).unwrap();
        assert!(matches!(outcome, Some(CopyOutcome::Copied { .. })));
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("lang").join("pt_BR");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).unwrap();
    }
}
