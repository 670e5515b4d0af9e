use journey_core::catalog;
use journey_core::model::{Topic, TopicId, UserProgress};

use crate::error::PlayerError;
use super::session::JourneyPlayer;

/// Orchestrates topic selection, unlock gating, and completion marking.
///
/// Progress is an explicit value passed in and out, so a fresh session (or
/// test) starts from `UserProgress::new()` with nothing leaking between
/// sessions.
#[derive(Debug, Clone)]
pub struct LessonWorkflow {
    topics: Vec<Topic>,
}

impl LessonWorkflow {
    #[must_use]
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    /// Workflow over the built-in static catalog.
    #[must_use]
    pub fn from_catalog() -> Self {
        Self::new(catalog::static_topics())
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Whether the topic at `index` is selectable under `progress`.
    #[must_use]
    pub fn is_unlocked(&self, progress: &UserProgress, index: usize) -> bool {
        progress.is_unlocked(index, &self.topics)
    }

    /// Start a journey for an unlocked topic.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::UnknownTopic` for an id outside the catalog and
    /// `PlayerError::Locked` when the preceding topic is not completed yet.
    pub fn select(
        &self,
        progress: &UserProgress,
        topic_id: TopicId,
    ) -> Result<JourneyPlayer, PlayerError> {
        let index = self
            .topics
            .iter()
            .position(|t| t.id == topic_id)
            .ok_or(PlayerError::UnknownTopic(topic_id))?;
        if !self.is_unlocked(progress, index) {
            return Err(PlayerError::Locked(topic_id));
        }
        Ok(JourneyPlayer::new(self.topics[index].clone()))
    }

    /// Record the outcome of a finished player. Marks the topic complete
    /// only for a completed close; early exits mutate nothing. Returns
    /// whether progress was updated.
    pub fn finish(&self, progress: &mut UserProgress, player: &JourneyPlayer) -> bool {
        if player.is_completed() && !progress.is_completed(player.topic().id) {
            progress.mark_complete(player.topic().id);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(player: &mut JourneyPlayer) {
        use journey_core::model::Interaction;

        while !player.is_closed() {
            let interaction = player
                .current_slide()
                .and_then(|slide| slide.interaction().cloned());
            let fired = match interaction {
                Some(Interaction::Quiz { question, .. }) => {
                    let scheduled = player.choose(&question.answer);
                    if scheduled.is_none() {
                        player.continue_lesson()
                    } else {
                        scheduled
                    }
                }
                Some(Interaction::Gap(_)) => player.reveal(),
                None => player.tap(),
            };
            if let Some(timer) = fired {
                player.handle_timer(timer.token);
            }
        }
    }

    #[test]
    fn locked_topic_cannot_be_selected() {
        let workflow = LessonWorkflow::from_catalog();
        let progress = UserProgress::new();

        assert!(workflow.select(&progress, TopicId::new(1)).is_ok());
        assert_eq!(
            workflow.select(&progress, TopicId::new(2)).unwrap_err(),
            PlayerError::Locked(TopicId::new(2))
        );
    }

    #[test]
    fn unknown_topic_is_rejected() {
        let workflow = LessonWorkflow::from_catalog();
        let progress = UserProgress::new();
        assert_eq!(
            workflow.select(&progress, TopicId::new(99)).unwrap_err(),
            PlayerError::UnknownTopic(TopicId::new(99))
        );
    }

    #[test]
    fn completing_a_topic_unlocks_the_next() {
        let workflow = LessonWorkflow::from_catalog();
        let mut progress = UserProgress::new();

        let mut player = workflow.select(&progress, TopicId::new(1)).unwrap();
        run_to_completion(&mut player);
        assert!(workflow.finish(&mut progress, &player));

        assert!(workflow.is_unlocked(&progress, 1));
        assert!(!workflow.is_unlocked(&progress, 2));
        assert!(workflow.select(&progress, TopicId::new(2)).is_ok());
    }

    #[test]
    fn early_exit_mutates_nothing() {
        let workflow = LessonWorkflow::from_catalog();
        let mut progress = UserProgress::new();

        let mut player = workflow.select(&progress, TopicId::new(1)).unwrap();
        player.tap();
        player.close();
        assert!(!workflow.finish(&mut progress, &player));
        assert!(progress.completed().is_empty());
    }

    #[test]
    fn finishing_twice_reports_once() {
        let workflow = LessonWorkflow::from_catalog();
        let mut progress = UserProgress::new();

        let mut player = workflow.select(&progress, TopicId::new(1)).unwrap();
        run_to_completion(&mut player);
        assert!(workflow.finish(&mut progress, &player));
        assert!(!workflow.finish(&mut progress, &player));
        assert_eq!(progress.completed(), &[TopicId::new(1)]);
    }
}
