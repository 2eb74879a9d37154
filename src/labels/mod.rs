//! Label lookup
//!
//! Rendering code never carries display text; it asks a [`LabelLookup`] for a
//! key in an explicit [`Language`]. The language is passed along with each
//! call rather than held in shared state.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::Error;

mod table;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    /// The other language, as flipped by the language button.
    pub fn toggled(self) -> Self {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "cn" => Ok(Language::Zh),
            "en" | "en-us" => Ok(Language::En),
            other => Err(Error::Other(format!("unsupported language '{}'", other))),
        }
    }
}

/// Source of display text
pub trait LabelLookup: Send + Sync {
    /// Text for `key` in `lang`. Unknown keys come back unchanged.
    fn lookup(&self, key: &str, lang: Language) -> String;
}

/// The built-in bilingual label table
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLabels;

fn index() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    static INDEX: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();
    INDEX.get_or_init(|| {
        table::ENTRIES
            .iter()
            .map(|(key, zh, en)| (*key, (*zh, *en)))
            .collect()
    })
}

impl BundledLabels {
    pub fn contains(&self, key: &str) -> bool {
        index().contains_key(key)
    }
}

impl LabelLookup for BundledLabels {
    fn lookup(&self, key: &str, lang: Language) -> String {
        match index().get(key) {
            Some((zh, en)) => match lang {
                Language::Zh => (*zh).to_string(),
                Language::En => (*en).to_string(),
            },
            None => {
                log::debug!("labels: no entry for '{}'", key);
                key.to_string()
            }
        }
    }
}
