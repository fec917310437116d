use crate::error::CfResult;
use crate::i18n::StringTable;
use crate::product::Generation;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Product generation whose page layout to use.
    #[arg(long, default_value_t = Generation::V4_14)]
    pub generation: Generation,

    /// Translation catalog (.json or .csv) layered over the built-in strings.
    #[arg(long)]
    pub strings: Option<String>,

    /// Start from an empty catalog instead of the built-in English strings.
    #[arg(long, default_value_t = false)]
    pub no_builtin_strings: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            generation: Generation::V4_14,
            strings: None,
            no_builtin_strings: false,
        }
    }
}

impl PageConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies over every field that was given explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &PageConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(generation, "generation");
        update_if_present!(strings, "strings");
        update_if_present!(no_builtin_strings, "no_builtin_strings");
    }

    pub fn load_strings(&self) -> CfResult<StringTable> {
        let mut table = if self.no_builtin_strings {
            StringTable::empty()
        } else {
            StringTable::builtin()
        };
        if let Some(path) = &self.strings {
            table.merge(StringTable::load_from_file(path)?);
        }
        Ok(table)
    }
}
