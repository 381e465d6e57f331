// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display names for language-pack codes.
//!
//! Pack directories are named with ISO 639 codes, optionally followed by a
//! script or region subtag (`pt_BR`, `sr_Latn`, `de-CH`). The table below
//! covers every code the bundled packs ship; anything else is rendered from
//! its base language, or as a localized `<unknown>` placeholder.

use super::catalog::{t, Lang};

/// Look up a display name, rendering unknown codes instead of failing.
///
/// Hyphens are treated as underscores, so `fr-CH` and `fr_CH` resolve the
/// same way. A code missing from the table but with a known base language
/// renders as `"<base> - <subtag>"`.
///
/// # Examples
/// ```
/// use lang_publish::i18n::{language_name, Lang};
/// assert_eq!(language_name(Lang::En, "pt_BR"), "Brazilian Portuguese");
/// assert_eq!(language_name(Lang::En, "fr-CH"), "Swiss French");
/// assert_eq!(language_name(Lang::En, "en_NZ"), "English - NZ");
/// assert_eq!(language_name(Lang::En, "xx_YY"), "<unknown>");
/// ```
pub fn language_name(ui: Lang, code: &str) -> String {
    let normalized = code.replace('-', "_");
    if let Some(name) = lookup(&normalized) {
        return name.to_string();
    }

    let mut parts = normalized.split('_');
    let base = parts.next().and_then(lookup);
    if let (Some(base), Some(subtag)) = (base, parts.next()) {
        return format!("{} - {}", base, subtag);
    }

    format!("<{}>", t(ui, "common.unknown"))
}

fn lookup(code: &str) -> Option<&'static str> {
    LANGUAGE_NAMES
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, v)| *v)
}

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("de_AT", "Austrian German"),
    ("de_CH", "Swiss German"),
    ("el", "Greek"),
    ("en", "English"),
    ("en_AU", "Australian English"),
    ("en_CA", "Canadian English"),
    ("en_GB", "British English"),
    ("en_US", "American English"),
    ("eo", "Esperanto"),
    ("es", "Spanish"),
    ("es_419", "Latin American Spanish"),
    ("es_ES", "European Spanish"),
    ("es_MX", "Mexican Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("fr_CA", "Canadian French"),
    ("fr_CH", "Swiss French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("my", "Burmese"),
    ("nb", "Norwegian Bokmål"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("nl_BE", "Flemish"),
    ("nn", "Norwegian Nynorsk"),
    ("oc", "Occitan"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("pt_BR", "Brazilian Portuguese"),
    ("pt_PT", "European Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sc", "Sardinian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sr_Cyrl", "Serbian (Cyrillic)"),
    ("sr_Latn", "Serbian (Latin)"),
    ("sr_Latn_ME", "Montenegrin"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("tg", "Tajik"),
    ("th", "Thai"),
    ("tk", "Turkmen"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("ug", "Uyghur"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("uz_Cyrl", "Uzbek (Cyrillic)"),
    ("uz_Latn", "Uzbek (Latin)"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
    ("zh_CN", "Chinese (Simplified)"),
    ("zh_HK", "Chinese (Hong Kong)"),
    ("zh_TW", "Chinese (Traditional)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_codes_resolve() {
        assert_eq!(language_name(Lang::En, "pt_BR"), "Brazilian Portuguese");
        assert_eq!(language_name(Lang::En, "de"), "German");
        assert_eq!(language_name(Lang::En, "sr_Latn_ME"), "Montenegrin");
    }

    #[test]
    fn hyphen_and_underscore_are_equivalent() {
        assert_eq!(language_name(Lang::En, "fr-CH"), language_name(Lang::En, "fr_CH"));
        assert_eq!(language_name(Lang::En, "fr-CH"), "Swiss French");
        assert_eq!(language_name(Lang::En, "de-CH"), "Swiss German");
    }

    #[test]
    fn region_fallback_uses_base_name() {
        assert_eq!(language_name(Lang::En, "it_CH"), "Italian - CH");
        assert_eq!(language_name(Lang::En, "es-AR"), "Spanish - AR");
    }

    #[test]
    fn unknown_codes_render_placeholder() {
        assert_eq!(language_name(Lang::En, "xx_YY"), "<unknown>");
        assert_eq!(language_name(Lang::En, "xx"), "<unknown>");
        assert_eq!(language_name(Lang::En, ""), "<unknown>");
        assert_eq!(language_name(Lang::De, "xx"), "<unbekannt>");
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut seen = std::collections::HashSet::new();
        for (code, _) in LANGUAGE_NAMES {
            assert!(seen.insert(*code), "duplicate code {}", code);
        }
    }
}
