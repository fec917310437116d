use crate::i18n::StringTable;
use crate::registry::{Choice, ChoiceValue};
use serde::Serialize;
use std::cmp::Ordering;
use strum_macros::{Display, EnumIter, EnumString};

/// Font family the watch face needs to draw a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScriptClass {
    Latin,
    Extended,
    Rtl,
    Zh,
    Ja,
    Ko,
    Th,
    Ta,
    Hi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub english_name: &'static str,
    pub script: ScriptClass,
    /// Position of the language in the watch face's own table.
    pub index: u8,
}

impl LanguageEntry {
    pub fn catalog_key(&self) -> String {
        format!("lang_{}", self.code)
    }
}

/// Which slice of [`ALL_LANGUAGES`] a product generation shipped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum LanguageSet {
    /// The first fifteen translations (no Tagalog).
    Classic,
    /// Twenty-seven translations, up to Hindi.
    Extended,
    /// Everything, including Bulgarian and Norwegian.
    Full,
}

impl LanguageSet {
    pub fn entries(self) -> Vec<LanguageEntry> {
        ALL_LANGUAGES
            .iter()
            .filter(|e| match self {
                LanguageSet::Classic => e.index <= 15 && e.code != "tl",
                LanguageSet::Extended => e.index < 27,
                LanguageSet::Full => true,
            })
            .copied()
            .collect()
    }
}

/// A language with its display name resolved through the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLanguage {
    pub entry: LanguageEntry,
    pub display_name: String,
}

/// Resolves display names and sorts by them.
pub fn resolve_sorted(entries: &[LanguageEntry], strings: &StringTable) -> Vec<ResolvedLanguage> {
    let mut resolved: Vec<ResolvedLanguage> = entries
        .iter()
        .map(|e| ResolvedLanguage {
            entry: *e,
            display_name: strings.lookup(&e.catalog_key()),
        })
        .collect();
    resolved.sort_by(|a, b| compare_display_names(&a.display_name, &b.display_name));
    resolved
}

pub fn language_choices(entries: &[LanguageEntry], strings: &StringTable) -> Vec<Choice> {
    resolve_sorted(entries, strings)
        .into_iter()
        .map(|r| Choice::new(ChoiceValue::Text(r.entry.code.to_string()), r.display_name))
        .collect()
}

/// Alphabetic comparison that ignores case and common Latin accents.
/// Ties break on accents (unaccented first), then on case (lowercase
/// first), then on code points. Names in other scripts are not collated:
/// they sort after the Latin ones in plain code-point order, so `中文`
/// lands before `한국어`.
pub fn compare_display_names(a: &str, b: &str) -> Ordering {
    let fa = a.chars().flat_map(fold_char);
    let fb = b.chars().flat_map(fold_char);
    fa.cmp(fb)
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn fold_char(c: char) -> std::char::ToLowercase {
    let base = match c {
        'À'..='Å' | 'à'..='å' | 'Ā' | 'ā' => 'a',
        'Ç' | 'ç' | 'Č' | 'č' => 'c',
        'È'..='Ë' | 'è'..='ë' | 'Ě' | 'ě' => 'e',
        'Ì'..='Ï' | 'ì'..='ï' => 'i',
        'Ñ' | 'ñ' => 'n',
        'Ò'..='Ö' | 'ò'..='ö' | 'Ø' | 'ø' => 'o',
        'Ù'..='Ü' | 'ù'..='ü' => 'u',
        'Ý' | 'ý' | 'ÿ' => 'y',
        'Š' | 'š' => 's',
        'Ž' | 'ž' => 'z',
        'Ř' | 'ř' => 'r',
        _ => c,
    };
    base.to_lowercase()
}

pub const ALL_LANGUAGES: &[LanguageEntry] = &[
    lang("en_US", "English", ScriptClass::Latin, 0),
    lang("fr_FR", "French", ScriptClass::Latin, 1),
    lang("it_IT", "Italian", ScriptClass::Latin, 2),
    lang("es_ES", "Spanish", ScriptClass::Latin, 3),
    lang("pt_PT", "Portuguese", ScriptClass::Latin, 4),
    lang("de_DE", "German", ScriptClass::Latin, 5),
    lang("nl_NL", "Dutch", ScriptClass::Latin, 6),
    lang("da_DK", "Danish", ScriptClass::Latin, 7),
    lang("sv_SE", "Swedish", ScriptClass::Latin, 8),
    lang("is_IS", "Icelandic", ScriptClass::Latin, 9),
    lang("tl", "Tagalog", ScriptClass::Latin, 10),
    lang("el_GR", "Greek", ScriptClass::Extended, 11),
    lang("hu_HU", "Hungarian", ScriptClass::Latin, 12),
    lang("ru_RU", "Russian", ScriptClass::Extended, 13),
    lang("pl_PL", "Polish", ScriptClass::Latin, 14),
    lang("cs_CZ", "Czech", ScriptClass::Latin, 15),
    lang("hy_AM", "Armenian", ScriptClass::Extended, 16),
    lang("tr_TR", "Turkish", ScriptClass::Latin, 17),
    lang("he_IL", "Hebrew", ScriptClass::Rtl, 18),
    lang("fa_IR", "Farsi", ScriptClass::Rtl, 19),
    lang("ar_SA", "Arabic", ScriptClass::Rtl, 20),
    lang("zh_CN", "Chinese", ScriptClass::Zh, 21),
    lang("ja_JP", "Japanese", ScriptClass::Ja, 22),
    lang("ko_KR", "Korean", ScriptClass::Ko, 23),
    lang("th_TH", "Thai", ScriptClass::Th, 24),
    lang("ta_IN", "Tamil", ScriptClass::Ta, 25),
    lang("hi_IN", "Hindi", ScriptClass::Hi, 26),
    lang("bg_BG", "Bulgarian", ScriptClass::Extended, 27),
    lang("nb_NO", "Norwegian", ScriptClass::Latin, 28),
];

const fn lang(
    code: &'static str,
    english_name: &'static str,
    script: ScriptClass,
    index: u8,
) -> LanguageEntry {
    LanguageEntry {
        code,
        english_name,
        script,
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_sizes() {
        assert_eq!(LanguageSet::Classic.entries().len(), 15);
        assert_eq!(LanguageSet::Extended.entries().len(), 27);
        assert_eq!(LanguageSet::Full.entries().len(), 29);
    }

    #[test]
    fn test_sorted_by_native_name() {
        let entries: Vec<LanguageEntry> = ALL_LANGUAGES
            .iter()
            .filter(|e| ["en_US", "fr_FR", "de_DE"].contains(&e.code))
            .copied()
            .collect();
        let resolved = resolve_sorted(&entries, &StringTable::builtin());
        let codes: Vec<&str> = resolved.iter().map(|r| r.entry.code).collect();
        assert_eq!(codes, vec!["de_DE", "en_US", "fr_FR"]);
    }

    #[test]
    fn test_accents_do_not_push_names_to_the_end() {
        assert_eq!(compare_display_names("Íslenska", "Magyar"), Ordering::Less);
        assert_eq!(compare_display_names("Čeština", "Dansk"), Ordering::Less);
        assert_eq!(compare_display_names("english", "English"), Ordering::Greater);
    }

    #[test]
    fn test_ties_put_lowercase_and_unaccented_first() {
        assert_eq!(compare_display_names("english", "English"), Ordering::Less);
        assert_eq!(compare_display_names("English", "english"), Ordering::Greater);
        assert_eq!(compare_display_names("Ceska", "Česka"), Ordering::Less);
        assert_eq!(compare_display_names("cesko", "Česko"), Ordering::Less);
        assert_eq!(compare_display_names("Dansk", "Dansk"), Ordering::Equal);
    }

    #[test]
    fn test_missing_names_sort_by_raw_key() {
        let entries = LanguageSet::Classic.entries();
        let resolved = resolve_sorted(&entries, &StringTable::empty());
        assert_eq!(resolved[0].display_name, "lang_cs_CZ");
        assert_eq!(resolved.last().unwrap().display_name, "lang_sv_SE");
    }
}
