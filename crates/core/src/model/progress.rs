use crate::model::{Topic, TopicId};

/// Session-scoped learner progress.
///
/// Lives only for the UI session; it is never persisted. Completion only
/// grows — there is no removal operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProgress {
    completed: Vec<TopicId>,
}

impl UserProgress {
    /// Fresh-session progress: nothing completed, first topic implicitly unlocked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Topic ids completed this session, in completion order.
    #[must_use]
    pub fn completed(&self) -> &[TopicId] {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, topic_id: TopicId) -> bool {
        self.completed.contains(&topic_id)
    }

    /// Marks a topic complete. Idempotent: completing the same topic twice
    /// does not create a duplicate entry.
    pub fn mark_complete(&mut self, topic_id: TopicId) {
        if !self.is_completed(topic_id) {
            self.completed.push(topic_id);
        }
    }

    /// Whether the topic at `index` within `topics` is selectable.
    ///
    /// The first topic is always unlocked; any later topic unlocks once the
    /// immediately preceding topic has been completed.
    #[must_use]
    pub fn is_unlocked(&self, index: usize, topics: &[Topic]) -> bool {
        if index >= topics.len() {
            return false;
        }
        if index == 0 {
            return true;
        }
        self.is_completed(topics[index - 1].id)
    }
}
