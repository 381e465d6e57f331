// SPDX-License-Identifier: PMPL-1.0-or-later

//! Publisher: copy bundled language packs into a host application
//!
//! A run goes through fixed phases:
//!
//! 1. discover packs under the pack root
//! 2. read the request (flag or interactive prompt)
//! 3. validate every requested code, aborting if any is unknown
//! 4. expand `all` and confirm when every pack is selected
//! 5. per language: choose the German register, create the target
//!    directory, copy the resource files and the aggregate JSON file
//!
//! Nothing is written before phase 5. Phase 5 is not transactional: an
//! interrupted run keeps whatever was already copied.

mod copy;

pub use copy::{confirm_overwrite, copy_file, ensure_dir};

use crate::config::PublishConfig;
use crate::discovery::{discover_packs, ALT_DIALECT_DIR};
use crate::i18n::{language_name, t, t_with, Lang};
use crate::prompt::{ask_until, is_confirmed, parse_dialect};
use crate::summary::Summary;
use crate::terminal::Terminal;
use crate::types::*;
use anyhow::Result;
use std::path::PathBuf;

/// Separator printed above the "nothing was published" message.
const ABORT_RULE: &str = "▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲";

/// Whether the copy loop should keep going
enum Progress {
    Continue,
    Cancelled,
}

pub struct Publisher {
    config: PublishConfig,
    force: bool,
}

impl Publisher {
    pub fn new(config: PublishConfig, force: bool) -> Self {
        Self { config, force }
    }

    fn lang(&self) -> Lang {
        self.config.locale
    }

    /// Run the whole wizard. `languages` is the raw `--languages` value;
    /// `None` asks the operator.
    pub fn run(&self, term: &mut dyn Terminal, languages: Option<&str>) -> Result<RunOutcome> {
        let lang = self.lang();

        let packs = match discover_packs(&self.config.pack_root) {
            Ok(packs) => packs,
            Err(_) => {
                term.error(t(lang, "pack.unresolved"));
                return Ok(RunOutcome::Aborted(AbortReason::PackUnavailable));
            }
        };

        let raw = match languages {
            Some(raw) => raw.to_string(),
            None => self.ask_languages(term, &packs)?,
        };

        let request = PublishRequest::parse(&raw);
        if request.is_empty() {
            term.error(t(lang, "request.canceled"));
            return Ok(RunOutcome::Aborted(AbortReason::NoLanguages));
        }

        let unknown = self.validate(term, &request, &packs);
        if !unknown.is_empty() {
            term.error(ABORT_RULE);
            term.error(t(lang, "request.check"));
            return Ok(RunOutcome::Aborted(AbortReason::UnknownLanguages(unknown)));
        }

        let selected = expand_all(&request, &packs);
        if selected.is_empty() {
            term.error(t(lang, "request.canceled"));
            return Ok(RunOutcome::Aborted(AbortReason::NoLanguages));
        }

        if selected.len() == packs.len() {
            let answer = term.ask(t(lang, "request.confirm_all"))?;
            if !is_confirmed(&answer) {
                term.error(t(lang, "request.canceled"));
                return Ok(RunOutcome::Aborted(AbortReason::AllDeclined));
            }
        }

        let mut summary = Summary::new();
        for pack in &selected {
            let progress = self.publish_pack(term, pack, &mut summary)?;
            if let Progress::Cancelled = progress {
                summary.error(t(lang, "request.exhausted").to_string());
                return Ok(RunOutcome::Interrupted(summary));
            }
        }

        Ok(RunOutcome::Completed(summary))
    }

    fn ask_languages(&self, term: &mut dyn Terminal, packs: &[LanguagePack]) -> Result<String> {
        let lang = self.lang();
        list_languages(term, lang, packs);
        term.plain("");
        term.info(t(lang, "request.intro"));
        term.info(t(lang, "request.help"));
        term.ask(t(lang, "request.ask"))
    }

    /// Report every requested code that is neither `all` nor a discovered
    /// pack. All entries are checked before returning.
    fn validate(
        &self,
        term: &mut dyn Terminal,
        request: &PublishRequest,
        packs: &[LanguagePack],
    ) -> Vec<String> {
        let mut unknown = Vec::new();
        for code in &request.languages {
            if code == ALL_LANGUAGES || packs.iter().any(|pack| &pack.code == code) {
                continue;
            }
            term.error(&t_with(self.lang(), "request.not_found", &[("miss", code.as_str())]));
            unknown.push(code.clone());
        }
        unknown
    }

    /// Ask for the German register. `Ok(None)` means no valid answer.
    pub fn choose_dialect(&self, term: &mut dyn Terminal, code: &str) -> Result<Option<Dialect>> {
        let label = format!("[{}] ({})", code, language_name(self.lang(), code));
        let question = t_with(self.lang(), "dialect.ask", &[("lang", label.as_str())]);
        ask_until(term, &question, self.config.max_prompt_attempts, parse_dialect)
    }

    fn publish_pack(
        &self,
        term: &mut dyn Terminal,
        pack: &LanguagePack,
        summary: &mut Summary,
    ) -> Result<Progress> {
        let dialect = if pack.has_dialect {
            match self.choose_dialect(term, &pack.code)? {
                Some(dialect) => dialect,
                None => return Ok(Progress::Cancelled),
            }
        } else {
            Dialect::Formal
        };
        self.publish_language(term, pack, dialect, summary)
    }

    /// Copy one language's resource files and JSON file into the host.
    fn publish_language(
        &self,
        term: &mut dyn Terminal,
        pack: &LanguagePack,
        dialect: Dialect,
        summary: &mut Summary,
    ) -> Result<Progress> {
        let lang = self.lang();
        let target_dir = self.config.lang_dir().join(&pack.code);
        if let Err(err) = ensure_dir(&target_dir) {
            let dir = target_dir.display().to_string();
            let reason = format!("{:#}", err);
            summary.error(t_with(
                lang,
                "copy.mkdir_failed",
                &[("dir", dir.as_str()), ("reason", reason.as_str())],
            ));
            return Ok(Progress::Continue);
        }

        for (source, target) in self.file_pairs(pack, dialect) {
            let outcome = confirm_overwrite(
                term,
                lang,
                &source,
                &target,
                self.force,
                self.config.max_prompt_attempts,
            )?;
            match outcome {
                Some(outcome) => summary.record(lang, &outcome),
                None => return Ok(Progress::Cancelled),
            }
        }
        Ok(Progress::Continue)
    }

    /// Source and target of every file published for `pack`, resource
    /// files first, JSON file last. Informal sources come from the
    /// alternate-dialect directories instead of the pack itself.
    pub fn file_pairs(&self, pack: &LanguagePack, dialect: Dialect) -> Vec<(PathBuf, PathBuf)> {
        let code = pack.code.as_str();
        let (source_dir, json_root) = match dialect {
            Dialect::Formal => (pack.source_dir.clone(), self.config.json_root.clone()),
            Dialect::Informal => (
                self.config.pack_root.join(ALT_DIALECT_DIR).join(code),
                self.config.json_root.join(ALT_DIALECT_DIR),
            ),
        };
        let target_dir = self.config.lang_dir().join(code);

        let mut pairs: Vec<(PathBuf, PathBuf)> = self
            .config
            .resource_files
            .iter()
            .map(|name| {
                let file = format!("{}.{}", name, self.config.resource_extension);
                (source_dir.join(&file), target_dir.join(&file))
            })
            .collect();

        let json = format!("{}.json", code);
        pairs.push((json_root.join(&json), self.config.lang_dir().join(&json)));
        pairs
    }
}

/// Apply the `all` wildcard, returning the packs to publish in request order.
pub fn expand_all(request: &PublishRequest, packs: &[LanguagePack]) -> Vec<LanguagePack> {
    if request.wants_all() {
        return packs.to_vec();
    }
    request
        .languages
        .iter()
        .filter_map(|code| packs.iter().find(|pack| &pack.code == code).cloned())
        .collect()
}

/// Print every pack as `code => display name`.
pub fn list_languages(term: &mut dyn Terminal, lang: Lang, packs: &[LanguagePack]) {
    for pack in packs {
        let name = language_name(lang, &pack.code);
        term.plain(&t_with(
            lang,
            "pack.entry",
            &[("code", pack.code.as_str()), ("name", name.as_str())],
        ));
    }
}
