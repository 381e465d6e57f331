// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalog for lang-publish.
//!
//! Every operator-facing line is looked up here by a dotted key, so the
//! wizard can speak the operator's language independently of which packs
//! are being published. Lookup is a linear scan over ~20 keys per language.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()` and `Lang::from_code()`
//! 3. Create a `const XX: &[(&str, &str)]` table below
//! 4. Add `Lang::Xx => XX` to the match in `catalog_for()`
//!
//! Placeholders are written `:name` and filled by [`t_with`].

use serde::{Deserialize, Serialize};

/// Languages the wizard itself can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    De,
    Fr,
    Es,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
            Lang::Fr => "fr",
            Lang::Es => "es",
        }
    }

    /// Parse a code into a supported UI language. Case-insensitive; region
    /// subtags (`de_CH`, `fr-CA`) resolve to their base language.
    pub fn from_code(code: &str) -> Option<Lang> {
        let base = code
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match base.as_str() {
            "en" => Some(Lang::En),
            "de" => Some(Lang::De),
            "fr" => Some(Lang::Fr),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }

    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::De, Lang::Fr, Lang::Es]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Look up a message key, falling back to English, then to the key itself.
///
/// ```
/// use lang_publish::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "summary.done"), "Action executed");
/// assert_eq!(t(Lang::De, "summary.done"), "Aktion ausgeführt");
/// assert_eq!(t(Lang::De, "no.such.key"), "no.such.key");
/// ```
pub fn t<'a>(lang: Lang, key: &'a str) -> &'a str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    key
}

/// Look up a message and substitute `:name` placeholders.
///
/// The template is scanned once, left to right. A placeholder name runs
/// over ASCII letters, digits and `_`; names without an argument are kept
/// verbatim, and substituted values are never scanned again.
pub fn t_with(lang: Lang, key: &str, args: &[(&str, &str)]) -> String {
    let template = t(lang, key);
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(':') {
        rendered.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let name = &after[..len];
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) if !name.is_empty() => rendered.push_str(value),
            _ => {
                rendered.push(':');
                rendered.push_str(name);
            }
        }
        rest = &after[len..];
    }
    rendered.push_str(rest);
    rendered
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::De => DE,
        Lang::Fr => FR,
        Lang::Es => ES,
    }
}

// ─── English (source language, all keys defined here) ──────────────

const EN: &[(&str, &str)] = &[
    ("common.unknown", "unknown"),
    // Request
    ("request.intro", "You must choose one or more languages that you want to publish."),
    ("request.help", "With comma separation you can publish multiple languages. Or enter the word \"all\" to publish all languages."),
    ("request.ask", "Which languages would you like to publish? (Cancel with CTRL+X)"),
    ("request.canceled", "The action was canceled. No language was published."),
    ("request.not_found", "Error. The language \":miss\" was not found."),
    ("request.check", "No language was published. Please check your request."),
    ("request.confirm_all", "Warning. You've selected all languages. Do you really want to publish all languages? [y/yes]"),
    ("request.exhausted", "No valid answer was given. The action was canceled."),
    // Discovery
    ("pack.unresolved", "The folder could not be resolved. Please copy files manually."),
    ("pack.entry", ":code => :name"),
    // Dialect
    ("dialect.ask", "If you prefer to use the informal \"du\" form for language :lang instead of the formal \"Sie\" form, then enter \"du\". For the formal \"Sie\" form, leave the entry empty."),
    // Copy
    ("copy.added", "The file :file has been added."),
    ("copy.exists", "The file :file already exists. Do you want to overwrite it? [y/n]"),
    ("copy.declined", "The file :file was not copied because it already exists."),
    ("copy.missing", "The file :file was not found."),
    ("copy.failed", "The file :file could not be copied: :reason"),
    ("copy.mkdir_failed", "The folder :dir could not be created: :reason"),
    // Summary
    ("summary.done", "Action executed"),
];

// ─── German ─────────────────────────────────────────────────────────

const DE: &[(&str, &str)] = &[
    ("common.unknown", "unbekannt"),
    ("request.intro", "Du musst eine oder mehrere Sprachen auswählen, die veröffentlicht werden sollen."),
    ("request.help", "Mehrere Sprachen werden durch Kommas getrennt. Mit dem Wort \"all\" werden alle Sprachen veröffentlicht."),
    ("request.ask", "Welche Sprachen möchtest du veröffentlichen? (Abbrechen mit STRG+X)"),
    ("request.canceled", "Die Aktion wurde abgebrochen. Es wurde keine Sprache veröffentlicht."),
    ("request.not_found", "Fehler. Die Sprache \":miss\" wurde nicht gefunden."),
    ("request.check", "Es wurde keine Sprache veröffentlicht. Bitte überprüfe deine Anfrage."),
    ("request.confirm_all", "Achtung. Du hast alle Sprachen ausgewählt. Möchtest du wirklich alle Sprachen veröffentlichen? [y/yes]"),
    ("request.exhausted", "Es wurde keine gültige Antwort gegeben. Die Aktion wurde abgebrochen."),
    ("pack.unresolved", "Der Ordner konnte nicht aufgelöst werden. Bitte kopiere die Dateien manuell."),
    ("dialect.ask", "Wenn du für die Sprache :lang die informelle \"du\"-Form statt der formellen \"Sie\"-Form bevorzugst, gib \"du\" ein. Für die formelle \"Sie\"-Form lass die Eingabe leer."),
    ("copy.added", "Die Datei :file wurde hinzugefügt."),
    ("copy.exists", "Die Datei :file existiert bereits. Möchtest du sie überschreiben? [y/n]"),
    ("copy.declined", "Die Datei :file wurde nicht kopiert, weil sie bereits existiert."),
    ("copy.missing", "Die Datei :file wurde nicht gefunden."),
    ("copy.failed", "Die Datei :file konnte nicht kopiert werden: :reason"),
    ("copy.mkdir_failed", "Der Ordner :dir konnte nicht erstellt werden: :reason"),
    ("summary.done", "Aktion ausgeführt"),
];

// ─── French ─────────────────────────────────────────────────────────

const FR: &[(&str, &str)] = &[
    ("common.unknown", "inconnu"),
    ("request.intro", "Vous devez choisir une ou plusieurs langues à publier."),
    ("request.help", "Séparez les langues par des virgules pour en publier plusieurs, ou saisissez \"all\" pour toutes les publier."),
    ("request.ask", "Quelles langues voulez-vous publier ? (Annuler avec CTRL+X)"),
    ("request.canceled", "L'action a été annulée. Aucune langue n'a été publiée."),
    ("request.not_found", "Erreur. La langue \":miss\" est introuvable."),
    ("request.check", "Aucune langue n'a été publiée. Veuillez vérifier votre demande."),
    ("request.confirm_all", "Attention. Vous avez sélectionné toutes les langues. Voulez-vous vraiment publier toutes les langues ? [y/yes]"),
    ("pack.unresolved", "Le dossier est introuvable. Veuillez copier les fichiers manuellement."),
    ("copy.added", "Le fichier :file a été ajouté."),
    ("copy.exists", "Le fichier :file existe déjà. Voulez-vous l'écraser ? [y/n]"),
    ("copy.declined", "Le fichier :file n'a pas été copié car il existe déjà."),
    ("copy.missing", "Le fichier :file est introuvable."),
    ("summary.done", "Action exécutée"),
];

// ─── Spanish ────────────────────────────────────────────────────────

const ES: &[(&str, &str)] = &[
    ("common.unknown", "desconocido"),
    ("request.intro", "Debe elegir uno o más idiomas para publicar."),
    ("request.help", "Separe los idiomas con comas para publicar varios, o escriba \"all\" para publicarlos todos."),
    ("request.ask", "¿Qué idiomas desea publicar? (Cancelar con CTRL+X)"),
    ("request.canceled", "La acción fue cancelada. No se publicó ningún idioma."),
    ("request.not_found", "Error. No se encontró el idioma \":miss\"."),
    ("request.check", "No se publicó ningún idioma. Por favor revise su solicitud."),
    ("request.confirm_all", "Atención. Ha seleccionado todos los idiomas. ¿Realmente desea publicar todos los idiomas? [y/yes]"),
    ("pack.unresolved", "No se pudo resolver la carpeta. Copie los archivos manualmente."),
    ("copy.added", "Se ha añadido el archivo :file."),
    ("copy.exists", "El archivo :file ya existe. ¿Desea sobrescribirlo? [y/n]"),
    ("copy.declined", "El archivo :file no se copió porque ya existe."),
    ("copy.missing", "No se encontró el archivo :file."),
    ("summary.done", "Acción ejecutada"),
];
