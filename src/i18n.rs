//! Display-string catalog.
//!
//! Labels and language names are looked up by key. The host's string
//! tables use a `__` prefix on every key; the prefix is stripped on load so
//! `__SecondHand` and `SecondHand` name the same entry. A missing key is
//! shown as the raw key instead of failing.

use crate::error::{CfResult, ConfigError};
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, info};

const HOST_KEY_PREFIX: &str = "__";

#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// English strings plus the native name of every supported language.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for (key, value) in BUILTIN_EN.iter().chain(LANGUAGE_NAMES) {
            table.insert(*key, *value);
        }
        table
    }

    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(normalize_key(key.as_ref()).to_string(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(normalize_key(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolved text, or the raw key when the catalog has no entry.
    pub fn lookup(&self, key: &str) -> String {
        match self.entries.get(normalize_key(key)) {
            Some(v) => v.clone(),
            None => {
                debug!("Missing display string '{}'", key);
                key.to_string()
            }
        }
    }

    pub fn merge(&mut self, other: StringTable) {
        self.entries.extend(other.entries);
    }

    /// Loads a catalog file. `.csv` files hold `key,value` rows (a header
    /// row named `key` is skipped); anything else is read as a flat JSON
    /// object of strings.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

        let table = if is_csv {
            Self::load_csv(path)?
        } else {
            Self::load_json(path)?
        };

        info!(
            "Loaded {} display strings from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    fn load_json(path: &Path) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let raw: HashMap<String, String> = serde_json::from_str(&content)?;
        let mut table = Self::default();
        for (k, v) in raw {
            table.insert(k, v);
        }
        Ok(table)
    }

    fn load_csv(path: &Path) -> CfResult<Self> {
        let file = File::open(path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_reader(file);

        let mut table = Self::default();
        for (row, result) in rdr.records().enumerate() {
            let rec = result?;
            if rec.len() < 2 {
                return Err(ConfigError::Config(format!(
                    "{}: row {} needs a key and a value",
                    path.display(),
                    row + 1
                )));
            }
            let key = rec[0].trim();
            if row == 0 && key.eq_ignore_ascii_case("key") {
                continue;
            }
            if key.is_empty() {
                continue;
            }
            table.insert(key, &rec[1]);
        }
        Ok(table)
    }
}

fn normalize_key(key: &str) -> &str {
    key.strip_prefix(HOST_KEY_PREFIX).unwrap_or(key)
}

const BUILTIN_EN: &[(&str, &str)] = &[
    ("Cancel", "Cancel"),
    ("Save", "Save"),
    ("Version", "version"),
    ("Off", "Off"),
    ("On", "On"),
    ("No", "No"),
    ("Yes", "Yes"),
    ("One", "One"),
    ("Two", "Two"),
    ("Three", "Three"),
    ("Four", "Four"),
    ("Five", "Five"),
    ("Six", "Six"),
    ("Seven", "Seven"),
    ("Eight", "Eight"),
    ("Nine", "Nine"),
    ("Ten", "Ten"),
    ("KeepBatteryGauge", "Keep battery visible"),
    ("KeepBluetoothIndicator", "Keep bluetooth visible"),
    ("SecondHand", "Second hand"),
    ("SweepSeconds", "Smooth-sweep seconds (heavy battery use)"),
    ("FaceIndex", "Select face variant"),
    ("ColorMode", "Select color variant"),
    ("DrawMode", "Invert colors"),
    ("ChronoDial", "Bottom chrono dial shows"),
    ("ChronoTenths", "Tenths"),
    ("ChronoHours", "Hours"),
    ("ChronoDual", "Dual (tenths, then hours)"),
    ("ShowDay", "Show day of week"),
    ("ShowDate", "Show numeric date"),
    ("LanguageForDay", "Language for day"),
    ("DisplayLang", "Language for date windows"),
    ("TopSubdial", "Top subdial shows"),
    ("PebbleLabel", "Pebble label"),
    ("LunarPhase", "Lunar phase"),
    ("DateWindowNamePrefix", "Date window "),
    ("DateWindowNameSuffix", ""),
    ("DateIdentifyWindow", "Identify window"),
    ("DateNumericDate", "Numeric date"),
    ("DateWeekday", "Weekday"),
    ("DateMonth", "Month"),
    ("DateYear", "Year"),
    ("DateWeekNumber", "Week number"),
    ("DateAmPm", "am/pm"),
    ("DateOrdinal", "Day of year"),
    ("DateStepCount", "Step count"),
    ("DateStepCount10", "Step count (x10)"),
    ("DateActiveTime", "Active time"),
    ("DateWalkedDistance", "Walked distance"),
    ("DateSleepTime", "Sleep time"),
    ("DateSleepRestfulTime", "Restful sleep time"),
    ("DateCaloriesBurned", "Calories burned"),
    ("DateHeartRate", "Heart rate"),
    ("WeekNumbering", "Week numbering"),
    ("WeekMon4", "ISO 8601 (Monday, first 4-day week)"),
    ("WeekSun1", "US (Sunday, week of Jan 1)"),
    ("WeekSat1", "Middle East (Saturday, week of Jan 1)"),
    ("LunarBackground", "Moon background color"),
    ("LunarBackgroundMatch", "Same as watch background"),
    ("LunarBackgroundBlack", "Always black"),
    ("LunarDirection", "Moon phase direction"),
    ("LunarDirectionNorth", "Right-to-left (northern hemisphere)"),
    ("LunarDirectionSouth", "Left-to-right (southern hemisphere)"),
    ("HourBuzzer", "Vibrate at each hour"),
    ("BluetoothBuzzer", "Vibrate on disconnect"),
    ("BluetoothIndicator", "Connection indicator"),
    ("BatteryGauge", "Battery gauge"),
    ("WhenNeeded", "When needed"),
    ("Always", "Always"),
    ("DigitalBattery", "Digital"),
    ("ShowDebug", "Show developer options"),
];

// Each language is listed under its own name.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("lang_en_US", "English"),
    ("lang_fr_FR", "Français"),
    ("lang_it_IT", "Italiano"),
    ("lang_es_ES", "Español"),
    ("lang_pt_PT", "Português"),
    ("lang_de_DE", "Deutsch"),
    ("lang_nl_NL", "Nederlands"),
    ("lang_da_DK", "Dansk"),
    ("lang_sv_SE", "Svenska"),
    ("lang_is_IS", "Íslenska"),
    ("lang_tl", "Tagalog"),
    ("lang_el_GR", "Ελληνικά"),
    ("lang_hu_HU", "Magyar"),
    ("lang_ru_RU", "Русский"),
    ("lang_pl_PL", "Polski"),
    ("lang_cs_CZ", "Čeština"),
    ("lang_hy_AM", "Հայերեն"),
    ("lang_tr_TR", "Türkçe"),
    ("lang_he_IL", "עברית"),
    ("lang_fa_IR", "فارسی"),
    ("lang_ar_SA", "العربية"),
    ("lang_zh_CN", "中文"),
    ("lang_ja_JP", "日本語"),
    ("lang_ko_KR", "한국어"),
    ("lang_th_TH", "ไทย"),
    ("lang_ta_IN", "தமிழ்"),
    ("lang_hi_IN", "हिन्दी"),
    ("lang_bg_BG", "Български"),
    ("lang_nb_NO", "Norsk bokmål"),
];
