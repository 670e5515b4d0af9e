use std::fmt;

use journey_core::build_journey;
use journey_core::model::{Interaction, Slide, Topic};

use super::evaluator::{evaluate_quiz, QuizEvaluation};
use super::timer::{ScheduledTimer, TimerKind, TimerToken};
use super::timing;

/// Where the player is in its journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    AtSlide(usize),
    Closed { completed: bool },
}

/// Per-slide-visit interaction state. Reset to `Idle` on every slide entry;
/// layered on top of the slides, never stored in them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionStatus {
    #[default]
    Idle,
    Correct,
    Wrong,
}

//
// ─── PLAYER ────────────────────────────────────────────────────────────────────
//

/// In-memory player for one topic's journey.
///
/// Builds the slide sequence once on construction and steps through it.
/// Operations are total: on a closed player they are no-ops that schedule
/// nothing. Methods that can start a delayed transition return a
/// `ScheduledTimer` for the driving loop to run and feed back through
/// [`JourneyPlayer::handle_timer`].
pub struct JourneyPlayer {
    topic: Topic,
    slides: Vec<Slide>,
    current: usize,
    closed: Option<bool>,
    status: InteractionStatus,
    epoch: u64,
}

impl JourneyPlayer {
    /// Create a player positioned at the first slide of the topic's journey.
    #[must_use]
    pub fn new(topic: Topic) -> Self {
        let slides = build_journey(&topic);
        Self {
            topic,
            slides,
            current: 0,
            closed: None,
            status: InteractionStatus::Idle,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn state(&self) -> PlayerState {
        match self.closed {
            Some(completed) => PlayerState::Closed { completed },
            None => PlayerState::AtSlide(self.current),
        }
    }

    #[must_use]
    pub fn status(&self) -> InteractionStatus {
        self.status
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.is_some()
    }

    /// True once the journey was walked to the end (not after an early exit).
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.closed == Some(true)
    }

    /// The slide under the cursor; `None` once closed.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        if self.closed.is_some() {
            None
        } else {
            self.slides.get(self.current)
        }
    }

    /// Tap on the slide background. Advances everywhere except interactive
    /// slides, where tap-to-advance is suppressed; at the last slide the
    /// player closes completed.
    pub fn tap(&mut self) -> Option<ScheduledTimer> {
        let slide = self.current_slide()?;
        if slide.is_interactive() {
            return None;
        }
        self.advance()
    }

    /// Explicit continue control: the post-explanation quiz button and the
    /// reward-slide button. On an interactive slide it only acts once the
    /// interaction reached `Correct`.
    pub fn continue_lesson(&mut self) -> Option<ScheduledTimer> {
        let slide = self.current_slide()?;
        if slide.is_interactive() && self.status != InteractionStatus::Correct {
            return None;
        }
        self.advance()
    }

    /// Answer the current quiz slide with one of its options.
    ///
    /// Choices outside the declared options, non-quiz slides, and already
    /// solved quizzes are silently ignored.
    pub fn choose(&mut self, option: &str) -> Option<ScheduledTimer> {
        let slide = self.current_slide()?;
        let Some(Interaction::Quiz { question, .. }) = slide.interaction() else {
            return None;
        };
        if self.status == InteractionStatus::Correct {
            return None;
        }

        match evaluate_quiz(question, option) {
            QuizEvaluation::Ignored => None,
            QuizEvaluation::Correct { wait_for_continue } => {
                self.status = InteractionStatus::Correct;
                if wait_for_continue {
                    None
                } else {
                    Some(self.schedule(TimerKind::AdvanceAfterCorrect, timing::QUIZ_ADVANCE_DELAY))
                }
            }
            QuizEvaluation::Wrong => {
                self.status = InteractionStatus::Wrong;
                Some(self.schedule(TimerKind::ResetAfterWrong, timing::WRONG_RESET_DELAY))
            }
        }
    }

    /// Reveal the current gap-fill slide: a single action that jumps the
    /// interaction straight to `Correct`.
    pub fn reveal(&mut self) -> Option<ScheduledTimer> {
        let slide = self.current_slide()?;
        if !matches!(slide.interaction(), Some(Interaction::Gap(_))) {
            return None;
        }
        if self.status == InteractionStatus::Correct {
            return None;
        }
        self.status = InteractionStatus::Correct;
        Some(self.schedule(TimerKind::AdvanceAfterCorrect, timing::GAP_ADVANCE_DELAY))
    }

    /// Apply a fired timer. Stale tokens — the slide changed since they were
    /// scheduled — are ignored, so a timer can never act on a newer slide.
    pub fn handle_timer(&mut self, token: TimerToken) -> Option<ScheduledTimer> {
        if self.closed.is_some() || token.epoch != self.epoch {
            return None;
        }
        match token.kind {
            TimerKind::CheckpointTimeout | TimerKind::AdvanceAfterCorrect => self.advance(),
            TimerKind::ResetAfterWrong => {
                if self.status == InteractionStatus::Wrong {
                    self.status = InteractionStatus::Idle;
                }
                None
            }
        }
    }

    /// Exit before the end. Keeps a completed close completed.
    pub fn close(&mut self) {
        if self.closed.is_none() {
            self.closed = Some(false);
        }
    }

    /// Move to the next slide, or close completed at the end. Every slide
    /// change bumps the timer epoch and resets the interaction status;
    /// entering a checkpoint schedules its self-advance timeout so the
    /// player can never stall there.
    fn advance(&mut self) -> Option<ScheduledTimer> {
        self.epoch += 1;
        self.status = InteractionStatus::Idle;

        if self.current + 1 < self.slides.len() {
            self.current += 1;
            if self.slides[self.current].is_checkpoint() {
                return Some(
                    self.schedule(TimerKind::CheckpointTimeout, timing::CHECKPOINT_TIMEOUT),
                );
            }
            None
        } else {
            self.closed = Some(true);
            None
        }
    }

    fn schedule(&self, kind: TimerKind, delay: std::time::Duration) -> ScheduledTimer {
        ScheduledTimer {
            token: TimerToken {
                epoch: self.epoch,
                kind,
            },
            delay,
        }
    }
}

impl fmt::Debug for JourneyPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JourneyPlayer")
            .field("topic_id", &self.topic.id)
            .field("slides_len", &self.slides.len())
            .field("current", &self.current)
            .field("closed", &self.closed)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
