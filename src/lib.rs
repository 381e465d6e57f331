// SPDX-License-Identifier: PMPL-1.0-or-later

//! lang-publish: install bundled translation packs into an application.
//!
//! A pack root ships one directory per language code (`en`, `pt_BR`,
//! `de-CH`, ...) holding the `auth`, `pagination`, `passwords` and
//! `validation` resource files, plus a sibling JSON root with one
//! `<code>.json` per language. The publisher copies the requested packs into
//! `<resource-root>/lang/`, asking before it overwrites anything.
//!
//! MODULES:
//! 1. **publish**: the wizard itself (validation, `all` expansion, German
//!    register selection, confirmed copies).
//! 2. **discovery** / **i18n**: what packs exist and what they are called.
//! 3. **terminal** / **prompt**: operator I/O with bounded re-prompting.

pub mod config;
pub mod discovery;
pub mod i18n;
pub mod prompt;
pub mod publish;
pub mod summary;
pub mod terminal;
pub mod types;
