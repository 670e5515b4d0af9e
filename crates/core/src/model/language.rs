use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::LogicMap;

/// Display language for the lesson content. `En` is the base language the
/// content is authored in; everything else resolves through translation
/// tables with an identity fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Uz,
}

impl Language {
    /// All supported languages, in UI order.
    pub const ALL: [Language; 3] = [Language::En, Language::Ru, Language::Uz];

    /// Returns true for the base (authoring) language.
    #[must_use]
    pub fn is_base(self) -> bool {
        matches!(self, Language::En)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Uz => "uz",
        };
        write!(f, "{code}")
    }
}

/// Error type for parsing a language code from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    code: String,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language code {:?}", self.code)
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            "uz" => Ok(Language::Uz),
            other => Err(ParseLanguageError {
                code: other.to_string(),
            }),
        }
    }
}

// ─── Translation Tables ────────────────────────────────────────────────────────

/// Translated counterparts for one topic in one language.
///
/// Structural fields override the topic's own fields; `lines` maps arbitrary
/// display strings by exact equality. All fields are optional so authors can
/// translate incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic_map: Option<LogicMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub lines: HashMap<String, String>,
}

/// Per-topic translation tables for the non-base languages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicTranslations {
    #[serde(default)]
    pub ru: TranslatedContent,
    #[serde(default)]
    pub uz: TranslatedContent,
}

impl TopicTranslations {
    /// Returns the table for a display language, `None` for the base language.
    #[must_use]
    pub fn for_language(&self, lang: Language) -> Option<&TranslatedContent> {
        match lang {
            Language::En => None,
            Language::Ru => Some(&self.ru),
            Language::Uz => Some(&self.uz),
        }
    }
}
