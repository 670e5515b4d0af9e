use serde::{Deserialize, Serialize};

use crate::model::{LogicMap, PracticeChamber, Topic, TopicId};

/// The structured reply of the live-tutor analysis gateway.
///
/// All fields except `practice` are required: a JSON body missing any of
/// them fails deserialization outright, which the caller surfaces as a
/// malformed-reply error. The live-tutor flow never asks the gateway to
/// populate `practice`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgicalAnalysis {
    pub topic_title: String,
    pub specific_question: String,
    pub the_trap: String,
    pub logic_map: LogicMap,
    pub introduction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice: Option<PracticeChamber>,
}

impl SurgicalAnalysis {
    /// Adapts a gateway reply into the same `Topic` shape the static
    /// catalog uses, so one journey builder serves both flows.
    #[must_use]
    pub fn into_topic(self, id: TopicId, year: impl Into<String>, prompt: impl Into<String>) -> Topic {
        Topic {
            id,
            year: year.into(),
            title: self.topic_title,
            prompt: prompt.into(),
            specific_question: self.specific_question,
            trap: self.the_trap,
            logic_map: self.logic_map,
            introduction: self.introduction,
            practice: self.practice,
            translations: None,
        }
    }
}
