//! Display-string translation lookup.
//!
//! Lookup is by exact string equality against a small set of known sources,
//! in a strict priority order. This deliberately couples content authoring
//! to the lookup logic instead of introducing an i18n key system: the
//! content is static and author-controlled, so two fields sharing identical
//! text resolve via whichever branch is checked first.

use crate::model::{Language, Topic};

/// Resolves a display string for a language. Total: unknown text comes back
/// unchanged, and the base language short-circuits to identity.
///
/// Priority: milestone-label dictionary, then the topic's per-language
/// `lines` map, then the topic's own structural fields.
#[must_use]
pub fn resolve<'a>(text: &'a str, lang: Language, topic: &'a Topic) -> &'a str {
    if lang.is_base() {
        return text;
    }

    if let Some(label) = milestone_label(text, lang) {
        return label;
    }

    let Some(table) = topic
        .translations
        .as_ref()
        .and_then(|t| t.for_language(lang))
    else {
        return text;
    };

    if let Some(line) = table.lines.get(text) {
        return line;
    }

    // Structural fallback for the known big blocks.
    if text == topic.title {
        if let Some(title) = &table.title {
            return title;
        }
    }
    if text == topic.prompt {
        if let Some(prompt) = &table.prompt {
            return prompt;
        }
    }
    if text == topic.trap {
        if let Some(trap) = &table.trap {
            return trap;
        }
    }
    if text == topic.specific_question {
        if let Some(question) = &table.specific_question {
            return question;
        }
    }
    if let Some(map) = &table.logic_map {
        if text == topic.logic_map.view_a {
            return &map.view_a;
        }
        if text == topic.logic_map.view_b {
            return &map.view_b;
        }
        if text == topic.logic_map.position {
            return &map.position;
        }
    }

    text
}

fn milestone_label(text: &str, lang: Language) -> Option<&'static str> {
    let label = match (lang, text) {
        (Language::Ru, "Briefing") => "Брифинг",
        (Language::Ru, "The Trap") => "Ловушка",
        (Language::Ru, "Logic Core") => "Логика",
        (Language::Ru, "Synthesis") => "Синтез",
        (Language::Ru, "Mastery") => "Мастерство",
        (Language::Uz, "Briefing") => "Brifing",
        (Language::Uz, "The Trap") => "Tuzoq",
        (Language::Uz, "Logic Core") => "Mantiq",
        (Language::Uz, "Synthesis") => "Sintez",
        (Language::Uz, "Mastery") => "Mahorat",
        _ => return None,
    };
    Some(label)
}
