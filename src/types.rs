// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core types for language-pack publishing

use std::path::PathBuf;

use crate::summary::Summary;

/// Codes that carry an informal ("du") variant under the alternate-dialect directory.
pub const DIALECT_CODES: &[&str] = &["de", "de-CH"];

/// Literal request token that expands to every discovered pack.
pub const ALL_LANGUAGES: &str = "all";

/// A language pack found under the pack root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePack {
    pub code: String,
    /// Formal-register sources for this code.
    pub source_dir: PathBuf,
    pub has_dialect: bool,
}

impl LanguagePack {
    pub fn new(code: impl Into<String>, source_dir: PathBuf) -> Self {
        let code = code.into();
        let has_dialect = DIALECT_CODES.contains(&code.as_str());
        Self {
            code,
            source_dir,
            has_dialect,
        }
    }
}

/// Register used for languages that ship a formal and an informal variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Formal,
    Informal,
}

/// One run's worth of requested languages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublishRequest {
    pub languages: Vec<String>,
}

impl PublishRequest {
    /// Build a request from a comma-separated list, trimming entries and
    /// dropping duplicates while keeping first-seen order.
    pub fn parse(raw: &str) -> Self {
        let mut languages: Vec<String> = Vec::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            if !languages.iter().any(|seen| seen == entry) {
                languages.push(entry.to_string());
            }
        }
        Self { languages }
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn wants_all(&self) -> bool {
        self.languages.iter().any(|code| code == ALL_LANGUAGES)
    }
}

/// Result of a single source → target copy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { target: PathBuf },
    Declined { target: PathBuf },
    Missing { source: PathBuf },
    Failed { target: PathBuf, reason: String },
}

/// Why a run stopped before (or during) the copy loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// Nothing was requested (empty flag or empty interactive answer)
    NoLanguages,
    /// The pack root could not be enumerated
    PackUnavailable,
    /// At least one requested code is not a discovered pack
    UnknownLanguages(Vec<String>),
    /// The operator declined the "publish all languages" confirmation
    AllDeclined,
}

/// Final state of a publisher run
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The copy loop ran over every requested language
    Completed(Summary),
    /// A prompt inside the copy loop ran out of attempts; earlier copies stay
    Interrupted(Summary),
    /// Nothing was published
    Aborted(AbortReason),
}

impl RunOutcome {
    /// Process exit code: 0 when the copy loop ran to the end, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Completed(_) => 0,
            RunOutcome::Interrupted(_) | RunOutcome::Aborted(_) => 1,
        }
    }

    /// The run summary, when the copy loop started.
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            RunOutcome::Completed(summary) | RunOutcome::Interrupted(summary) => Some(summary),
            RunOutcome::Aborted(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parse_dedups_in_order() {
        let request = PublishRequest::parse("fr,en, fr ,,de");
        assert_eq!(request.languages, vec!["fr", "en", "de"]);
        assert!(!request.wants_all());
    }

    #[test]
    fn request_parse_empty_input() {
        assert!(PublishRequest::parse("").is_empty());
        assert!(PublishRequest::parse(" , ,").is_empty());
    }

    #[test]
    fn dialect_flag_only_for_german() {
        assert!(LanguagePack::new("de", PathBuf::from("de")).has_dialect);
        assert!(LanguagePack::new("de-CH", PathBuf::from("de-CH")).has_dialect);
        assert!(!LanguagePack::new("de_AT", PathBuf::from("de_AT")).has_dialect);
    }

    #[test]
    fn exit_codes_follow_conventional_polarity() {
        assert_eq!(RunOutcome::Completed(Summary::default()).exit_code(), 0);
        assert_eq!(RunOutcome::Interrupted(Summary::default()).exit_code(), 1);
        assert_eq!(RunOutcome::Aborted(AbortReason::AllDeclined).exit_code(), 1);
    }
}
