// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run summary: accumulated infos, warnings and errors
//!
//! One [`Summary`] is owned by each publisher run and handed back to the
//! caller, which flushes it once after the copy loop.

use crate::i18n::{t_with, Lang};
use crate::terminal::Terminal;
use crate::types::CopyOutcome;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub infos: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one copy outcome as a localized message in the matching list.
    pub fn record(&mut self, lang: Lang, outcome: &CopyOutcome) {
        match outcome {
            CopyOutcome::Copied { target } => {
                self.infos.push(file_message(lang, "copy.added", target));
            }
            CopyOutcome::Declined { target } => {
                self.warnings.push(file_message(lang, "copy.declined", target));
            }
            CopyOutcome::Missing { source } => {
                self.errors.push(file_message(lang, "copy.missing", source));
            }
            CopyOutcome::Failed { target, reason } => {
                let file = target.display().to_string();
                self.errors.push(t_with(
                    lang,
                    "copy.failed",
                    &[("file", file.as_str()), ("reason", reason.as_str())],
                ));
            }
        }
    }

    pub fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    /// Print the banner, then infos, warnings and errors in that order.
    pub fn flush(&self, term: &mut dyn Terminal, title: &str) {
        for row in banner(title) {
            term.plain(&row);
        }
        for info in &self.infos {
            term.info(info);
        }
        for warning in &self.warnings {
            term.warn(warning);
        }
        for error in &self.errors {
            term.error(error);
        }
    }
}

fn file_message(lang: Lang, key: &str, path: &Path) -> String {
    let file = path.display().to_string();
    t_with(lang, key, &[("file", file.as_str())])
}

/// Boxed title: a blank line, then `#` rows framing `#   title   #`.
pub fn banner(title: &str) -> Vec<String> {
    let middle = format!("#   {}   #", title);
    let row = "#".repeat(middle.chars().count());
    vec![String::new(), row.clone(), middle, row]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{LineKind, ScriptedTerminal};
    use std::path::PathBuf;

    #[test]
    fn banner_rows_match_title_width() {
        let rows = banner("Action executed");
        assert_eq!(rows[0], "");
        assert_eq!(rows[2], "#   Action executed   #");
        assert_eq!(rows[1].len(), rows[2].len());
        assert_eq!(rows[1], rows[3]);
    }

    #[test]
    fn banner_counts_characters_not_bytes() {
        let rows = banner("Aktion ausgeführt");
        assert_eq!(rows[1].chars().count(), rows[2].chars().count());
    }

    #[test]
    fn record_sorts_outcomes_into_lists() {
        let mut summary = Summary::new();
        summary.record(Lang::En, &CopyOutcome::Copied { target: PathBuf::from("a.php") });
        summary.record(Lang::En, &CopyOutcome::Declined { target: PathBuf::from("b.php") });
        summary.record(Lang::En, &CopyOutcome::Missing { source: PathBuf::from("c.php") });

        assert_eq!(summary.infos, vec!["The file a.php has been added."]);
        assert_eq!(
            summary.warnings,
            vec!["The file b.php was not copied because it already exists."]
        );
        assert_eq!(summary.errors, vec!["The file c.php was not found."]);
    }

    #[test]
    fn flush_prints_in_fixed_order() {
        let mut summary = Summary::new();
        summary.error("boom".to_string());
        summary.warnings.push("careful".to_string());
        summary.infos.push("done".to_string());

        let mut term = ScriptedTerminal::default();
        summary.flush(&mut term, "Action executed");

        let kinds: Vec<LineKind> = term.lines().iter().skip(4).map(|(k, _)| *k).collect();
        assert_eq!(kinds, vec![LineKind::Info, LineKind::Warn, LineKind::Error]);
    }
}
