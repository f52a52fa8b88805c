use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Language packs merged on top of the built-in English and French
    /// tables. This file is the only place a new language is added.
    #[serde(default)]
    pub languages: Vec<LanguagePack>,
}

/// Label aliases, risk keywords, and boilerplate phrases for one language.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct LanguagePack {
    pub name: String,

    /// Canonical field name (text, image, audio, document, observations,
    /// possibilities, limitations) to accepted label spellings.
    #[serde(default)]
    pub labels: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub high_keywords: Vec<String>,

    #[serde(default)]
    pub low_keywords: Vec<String>,

    /// Whole-string "nothing to report" phrases suppressed from sub-fields.
    #[serde(default)]
    pub boilerplate: Vec<String>,

    /// Substring phrases that drop a red-flag entry entirely.
    #[serde(default)]
    pub red_flag_denylist: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            languages: Vec::new(),
        }
    }
}

pub fn default_version() -> u32 {
    1
}
