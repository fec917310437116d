//! Per-generation option declarations.
//!
//! Every Rosewright release shipped its own copy of the configuration
//! page. They differ only in which settings exist, the order of a few
//! blocks, and the size of some choice lists, so one declaration routine
//! walks the union of all settings and consults a [`ProductProfile`].

use crate::capability::CapabilitySet;
use crate::error::CfResult;
use crate::i18n::StringTable;
use crate::langs::{language_choices, LanguageSet};
use crate::registry::{Choice, OptionRegistry, OptionSpec, Serializer};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum Generation {
    #[strum(serialize = "2.4")]
    #[serde(rename = "2.4")]
    V2_4,
    #[strum(serialize = "2.4.2")]
    #[serde(rename = "2.4.2")]
    V2_4_2,
    #[strum(serialize = "2.9")]
    #[serde(rename = "2.9")]
    V2_9,
    #[strum(serialize = "2.12")]
    #[serde(rename = "2.12")]
    V2_12,
    #[strum(serialize = "3.6")]
    #[serde(rename = "3.6")]
    V3_6,
    #[default]
    #[strum(serialize = "4.14")]
    #[serde(rename = "4.14")]
    V4_14,
}

/// Where the 2.4-era "keep visible" toggles sit in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepToggles {
    None,
    /// First in the form; `hour_buzzer` follows the sweep toggle.
    First,
    /// Last in the form, right after `hour_buzzer`.
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindowScheme {
    None,
    /// `num_date_windows` slots lettered from `a`.
    Counted,
    /// One slot per letter of `date_window_keys`, stored by position.
    KeyedByIndex,
    /// One slot per letter of `date_window_keys`, stored by letter.
    Keyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindowOptions {
    Classic,
    Extended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LunarGate {
    Never,
    SupportMoon,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopSubdial {
    None,
    LunarOnly,
    LabelAndLunar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductProfile {
    /// Catalog keys for the default two-way choice list.
    pub boolean_keys: (&'static str, &'static str),
    pub keep_toggles: KeepToggles,
    /// Length of the face list; zero when the generation has no face picker.
    pub face_list_len: usize,
    pub color_list_len: usize,
    pub day_and_date: bool,
    pub top_subdial: TopSubdial,
    pub date_windows: DateWindowScheme,
    pub date_window_options: DateWindowOptions,
    pub lunar: LunarGate,
    pub week_numbering: bool,
    pub connection_controls: bool,
    pub debug_toggle: bool,
    pub developer_unlock: bool,
    pub buttons: bool,
    pub header_footer: bool,
    pub languages: LanguageSet,
}

const LEGACY: ProductProfile = ProductProfile {
    boolean_keys: ("Off", "On"),
    keep_toggles: KeepToggles::First,
    face_list_len: 0,
    color_list_len: 0,
    day_and_date: true,
    top_subdial: TopSubdial::None,
    date_windows: DateWindowScheme::None,
    date_window_options: DateWindowOptions::Classic,
    lunar: LunarGate::Never,
    week_numbering: false,
    connection_controls: false,
    debug_toggle: false,
    developer_unlock: false,
    buttons: false,
    header_footer: false,
    languages: LanguageSet::Classic,
};

impl Generation {
    pub fn profile(self) -> ProductProfile {
        match self {
            Generation::V2_4 => LEGACY,
            Generation::V2_4_2 => ProductProfile {
                keep_toggles: KeepToggles::Last,
                face_list_len: 5,
                ..LEGACY
            },
            Generation::V2_9 | Generation::V2_12 => ProductProfile {
                keep_toggles: KeepToggles::None,
                face_list_len: 5,
                day_and_date: false,
                date_windows: DateWindowScheme::Counted,
                lunar: LunarGate::SupportMoon,
                connection_controls: true,
                languages: LanguageSet::Extended,
                ..LEGACY
            },
            Generation::V3_6 => ProductProfile {
                boolean_keys: ("No", "Yes"),
                keep_toggles: KeepToggles::None,
                face_list_len: 6,
                color_list_len: 6,
                day_and_date: false,
                top_subdial: TopSubdial::LunarOnly,
                date_windows: DateWindowScheme::KeyedByIndex,
                lunar: LunarGate::Always,
                connection_controls: true,
                buttons: true,
                languages: LanguageSet::Extended,
                ..LEGACY
            },
            Generation::V4_14 => ProductProfile {
                boolean_keys: ("No", "Yes"),
                keep_toggles: KeepToggles::None,
                face_list_len: 10,
                color_list_len: 10,
                day_and_date: false,
                top_subdial: TopSubdial::LabelAndLunar,
                date_windows: DateWindowScheme::Keyed,
                date_window_options: DateWindowOptions::Extended,
                lunar: LunarGate::Always,
                week_numbering: true,
                connection_controls: true,
                debug_toggle: true,
                developer_unlock: true,
                buttons: true,
                header_footer: true,
                languages: LanguageSet::Full,
            },
        }
    }
}

impl ProductProfile {
    fn lunar_enabled(&self, caps: &CapabilitySet) -> bool {
        match self.lunar {
            LunarGate::Never => false,
            LunarGate::SupportMoon => caps.is_set("support_moon"),
            LunarGate::Always => true,
        }
    }
}

const COUNT_LABEL_KEYS: [&str; 10] = [
    "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
];

/// Most slots a counted scheme can letter.
const MAX_COUNTED_WINDOWS: usize = 26;

pub const DEVELOPER_WINDOW_OPTIONS: [(i64, &str); 4] = [
    (201, "(dev) heap free"),
    (202, "(dev) memory panic count"),
    (203, "(dev) resource reads"),
    (204, "(dev) draw face count"),
];

/// Runs the capability-gated declarations for one generation.
pub fn declare_options(
    generation: Generation,
    caps: &CapabilitySet,
    strings: &StringTable,
) -> CfResult<OptionRegistry> {
    let profile = generation.profile();
    let (off_key, on_key) = profile.boolean_keys;
    let mut decl = Declarer {
        profile,
        caps,
        strings,
        reg: OptionRegistry::new(strings.lookup(off_key), strings.lookup(on_key)),
    };

    decl.run()?;

    debug!(
        "{} declarations for generation {}",
        decl.reg.len(),
        generation
    );
    Ok(decl.reg)
}

struct Declarer<'a> {
    profile: ProductProfile,
    caps: &'a CapabilitySet,
    strings: &'a StringTable,
    reg: OptionRegistry,
}

impl Declarer<'_> {
    fn t(&self, key: &str) -> String {
        self.strings.lookup(key)
    }

    fn choices(&self, pairs: &[(i64, &str)]) -> Vec<Choice> {
        pairs.iter().map(|&(v, k)| Choice::int(v, self.t(k))).collect()
    }

    fn toggle(&mut self, key: &str, label_key: &str) -> CfResult<()> {
        let spec = OptionSpec::new(key, self.t(label_key));
        self.reg.declare(spec)?;
        Ok(())
    }

    fn select(&mut self, key: &str, label_key: &str, pairs: &[(i64, &str)]) -> CfResult<()> {
        let spec = OptionSpec::new(key, self.t(label_key)).choices(self.choices(pairs));
        self.reg.declare(spec)?;
        Ok(())
    }

    fn run(&mut self) -> CfResult<()> {
        let profile = self.profile;

        if profile.keep_toggles == KeepToggles::First {
            self.keep_toggles()?;
        }

        self.toggle("second_hand", "SecondHand")?;

        if self.caps.is_defined("sweep_seconds") {
            self.toggle("sweep_seconds", "SweepSeconds")?;
        }

        if profile.keep_toggles == KeepToggles::First {
            self.toggle("hour_buzzer", "HourBuzzer")?;
        }

        self.counted_list("face_index", "FaceIndex", "num_faces", profile.face_list_len)?;
        self.counted_list(
            "color_mode",
            "ColorMode",
            "num_face_colors",
            profile.color_list_len,
        )?;

        self.toggle("draw_mode", "DrawMode")?;

        if self.caps.is_defined("chrono_dial") {
            self.select(
                "chrono_dial",
                "ChronoDial",
                &[
                    (0, "Off"),
                    (1, "ChronoTenths"),
                    (2, "ChronoHours"),
                    (3, "ChronoDual"),
                ],
            )?;
        }

        if profile.day_and_date {
            if self.caps.is_defined("show_day") {
                self.toggle("show_day", "ShowDay")?;
                self.display_lang("LanguageForDay")?;
            }
            if self.caps.is_defined("show_date") {
                self.toggle("show_date", "ShowDate")?;
            }
        }

        if profile.keep_toggles == KeepToggles::Last {
            self.toggle("hour_buzzer", "HourBuzzer")?;
            self.keep_toggles()?;
        }

        self.top_subdial()?;
        self.date_windows()?;

        if profile.week_numbering && self.caps.is_set("week_numbering") {
            self.select(
                "week_numbering",
                "WeekNumbering",
                &[(0, "WeekMon4"), (1, "WeekSun1"), (2, "WeekSat1")],
            )?;
        }

        if self.profile.lunar_enabled(self.caps) {
            self.select(
                "lunar_background",
                "LunarBackground",
                &[(0, "LunarBackgroundMatch"), (1, "LunarBackgroundBlack")],
            )?;
            self.select(
                "lunar_direction",
                "LunarDirection",
                &[(0, "LunarDirectionNorth"), (1, "LunarDirectionSouth")],
            )?;
        }

        if profile.connection_controls {
            self.toggle("hour_buzzer", "HourBuzzer")?;
            self.toggle("bluetooth_buzzer", "BluetoothBuzzer")?;
            self.select(
                "bluetooth_indicator",
                "BluetoothIndicator",
                &[(0, "Off"), (1, "WhenNeeded"), (2, "Always")],
            )?;
            self.select(
                "battery_gauge",
                "BatteryGauge",
                &[
                    (0, "Off"),
                    (1, "WhenNeeded"),
                    (2, "Always"),
                    (3, "DigitalBattery"),
                ],
            )?;
        }

        if profile.debug_toggle && self.caps.is_set("show_debug") {
            self.toggle("show_debug", "ShowDebug")?;
        }

        Ok(())
    }

    fn keep_toggles(&mut self) -> CfResult<()> {
        self.toggle("keep_battery_gauge", "KeepBatteryGauge")?;
        self.toggle("keep_bluetooth_indicator", "KeepBluetoothIndicator")
    }

    /// A `One`, `Two`, ... list cut down to the bound carried by `cap`.
    /// Declared only when the bound exceeds one.
    fn counted_list(
        &mut self,
        key: &str,
        label_key: &str,
        cap: &str,
        list_len: usize,
    ) -> CfResult<()> {
        if list_len == 0 || !self.caps.number(cap).is_some_and(|n| n > 1.0) {
            return Ok(());
        }

        let mut bound = self.caps.count(cap);
        if bound > list_len {
            warn!(
                "{}={} exceeds the {} available choices; clamping",
                cap, bound, list_len
            );
            bound = list_len;
        }

        let choices = COUNT_LABEL_KEYS[..bound]
            .iter()
            .enumerate()
            .map(|(i, k)| Choice::int(i as i64, self.t(k)))
            .collect();
        let spec = OptionSpec::new(key, self.t(label_key)).choices(choices);
        self.reg.declare(spec)?;
        Ok(())
    }

    fn display_lang(&mut self, label_key: &str) -> CfResult<()> {
        let entries = self.profile.languages.entries();
        let choices = language_choices(&entries, self.strings);
        let spec = OptionSpec::new("display_lang", self.t(label_key))
            .choices(choices)
            .serializer(Serializer::Text);
        self.reg.declare(spec)?;
        Ok(())
    }

    fn top_subdial(&mut self) -> CfResult<()> {
        if !self.caps.is_set("top_subdial") {
            return Ok(());
        }
        match self.profile.top_subdial {
            TopSubdial::None => Ok(()),
            TopSubdial::LunarOnly => {
                self.select("top_subdial", "TopSubdial", &[(0, "Off"), (1, "LunarPhase")])
            }
            TopSubdial::LabelAndLunar => self.select(
                "top_subdial",
                "TopSubdial",
                &[(0, "Off"), (1, "PebbleLabel"), (2, "LunarPhase")],
            ),
        }
    }

    fn date_window_choices(&self) -> Vec<Choice> {
        match self.profile.date_window_options {
            DateWindowOptions::Classic => {
                let mut choices = self.choices(&[
                    (0, "Off"),
                    (1, "DateIdentifyWindow"),
                    (2, "DateNumericDate"),
                    (4, "DateWeekday"),
                    (5, "DateMonth"),
                    (3, "DateYear"),
                    (6, "DateAmPm"),
                ]);
                if self.profile.lunar_enabled(self.caps) {
                    choices.push(Choice::int(7, self.t("LunarPhase")));
                }
                choices
            }
            DateWindowOptions::Extended => {
                let mut choices = self.choices(&[
                    (0, "Off"),
                    (1, "DateIdentifyWindow"),
                    (2, "DateNumericDate"),
                    (6, "DateWeekday"),
                    (7, "DateMonth"),
                    (3, "DateYear"),
                    (5, "DateWeekNumber"),
                    (8, "DateAmPm"),
                    (4, "DateOrdinal"),
                    (10, "DateStepCount"),
                    (11, "DateStepCount10"),
                    (12, "DateActiveTime"),
                    (13, "DateWalkedDistance"),
                    (14, "DateSleepTime"),
                    (15, "DateSleepRestfulTime"),
                    (16, "DateCaloriesBurned"),
                    (17, "DateHeartRate"),
                ]);
                if self.caps.is_set("show_debug") {
                    choices.extend(
                        DEVELOPER_WINDOW_OPTIONS
                            .iter()
                            .map(|&(v, text)| Choice::int(v, text)),
                    );
                }
                choices
            }
        }
    }

    fn date_window_label(&self, letter: char) -> String {
        format!(
            "{}{}{}",
            self.t("DateWindowNamePrefix"),
            letter.to_uppercase(),
            self.t("DateWindowNameSuffix")
        )
    }

    fn date_windows(&mut self) -> CfResult<()> {
        let letters: Vec<char> = match self.profile.date_windows {
            DateWindowScheme::None => return Ok(()),
            DateWindowScheme::Counted => {
                if !self.caps.is_set("num_date_windows") {
                    return Ok(());
                }
                let mut count = self.caps.steps_below("num_date_windows");
                if count > MAX_COUNTED_WINDOWS {
                    warn!(
                        "num_date_windows={} exceeds {}; clamping",
                        count, MAX_COUNTED_WINDOWS
                    );
                    count = MAX_COUNTED_WINDOWS;
                }
                ('a'..='z').take(count).collect()
            }
            DateWindowScheme::KeyedByIndex | DateWindowScheme::Keyed => {
                match self.caps.get("date_window_keys") {
                    Some(keys) if !keys.is_empty() => keys.chars().collect(),
                    _ => return Ok(()),
                }
            }
        };

        let choices = self.date_window_choices();
        for (i, letter) in letters.iter().enumerate() {
            let key = date_window_key(*letter);
            let storage_key = match self.profile.date_windows {
                DateWindowScheme::KeyedByIndex => format!("date_window_{}", i),
                _ => key.clone(),
            };
            if self.reg.contains(&storage_key) {
                warn!(
                    "date window '{}' repeats in date_window_keys; skipping",
                    letter
                );
                continue;
            }
            let label = self.date_window_label(*letter);
            self.reg.declare(
                OptionSpec::new(key, label)
                    .choices(choices.clone())
                    .storage_key(storage_key),
            )?;
        }

        self.display_lang("DisplayLang")
    }
}

pub fn date_window_key(letter: char) -> String {
    format!("date_window_{}", letter)
}
