// SPDX-License-Identifier: PMPL-1.0-or-later

//! lang-publish: publish bundled language files into an application's
//! resource directory.

use anyhow::Result;
use clap::Parser;
use colored::*;
use lang_publish::config::PublishConfig;
use lang_publish::discovery::discover_packs;
use lang_publish::i18n::{t, Lang};
use lang_publish::publish::{list_languages, Publisher};
use lang_publish::terminal::{ConsoleTerminal, Terminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lang-publish")]
#[command(version)]
#[command(about = "Publish language files for your application")]
#[command(long_about = None)]
struct Cli {
    /// Languages to publish, comma separated, or "all" (asks when omitted)
    #[arg(short, long, value_name = "CODES")]
    languages: Option<String>,

    /// Overwrite existing files without asking
    #[arg(short, long)]
    force: bool,

    /// Config file (JSON or YAML); defaults to ./lang-publish.yaml if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing one folder per language pack
    #[arg(long)]
    pack_root: Option<PathBuf>,

    /// Directory containing one <code>.json per language pack
    #[arg(long)]
    json_root: Option<PathBuf>,

    /// Application resource directory (files land in <dir>/lang)
    #[arg(long)]
    resource_root: Option<PathBuf>,

    /// Language for the wizard's own messages (en, de, fr, es)
    #[arg(long, value_parser = parse_locale)]
    locale: Option<Lang>,

    /// How often an unclear answer is re-asked before giving up
    #[arg(long)]
    max_attempts: Option<usize>,

    /// List available language packs and exit
    #[arg(long)]
    list: bool,
}

fn parse_locale(value: &str) -> Result<Lang, String> {
    Lang::from_code(value).ok_or_else(|| {
        let supported: Vec<&str> = Lang::all().iter().map(|l| l.code()).collect();
        format!("unsupported locale {} (expected one of {})", value, supported.join(", "))
    })
}

impl Cli {
    fn apply(&self, config: &mut PublishConfig) {
        if let Some(dir) = &self.pack_root {
            config.pack_root = dir.clone();
        }
        if let Some(dir) = &self.json_root {
            config.json_root = dir.clone();
        }
        if let Some(dir) = &self.resource_root {
            config.resource_root = dir.clone();
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(attempts) = self.max_attempts {
            config.max_prompt_attempts = attempts;
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<u8> {
    let cli = Cli::parse();

    let mut config = PublishConfig::resolve(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    let mut term = ConsoleTerminal::new();
    let lang = config.locale;

    if cli.list {
        return match discover_packs(&config.pack_root) {
            Ok(packs) => {
                list_languages(&mut term, lang, &packs);
                Ok(0)
            }
            Err(_) => {
                term.error(t(lang, "pack.unresolved"));
                Ok(1)
            }
        };
    }

    let publisher = Publisher::new(config, cli.force);
    let outcome = publisher.run(&mut term, cli.languages.as_deref())?;

    if let Some(summary) = outcome.summary() {
        summary.flush(&mut term, t(lang, "summary.done"));
    }
    Ok(outcome.exit_code())
}
