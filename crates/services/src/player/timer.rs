use std::time::Duration;

/// What a fired timer should do to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Checkpoint slides self-advance after their timeout.
    CheckpointTimeout,
    /// Advance after a correct quiz answer or a gap reveal.
    AdvanceAfterCorrect,
    /// Clear the wrong-answer highlight so the learner can retry.
    ResetAfterWrong,
}

/// Identifies one scheduled single-shot timer.
///
/// The epoch pins the token to the slide visit that scheduled it: any slide
/// change bumps the player's epoch, so a timer that outlives its slide comes
/// back stale and is ignored. That is the whole cancellation story — no
/// handle juggling, and a delayed callback can never act on a newer slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    pub(crate) epoch: u64,
    pub(crate) kind: TimerKind,
}

impl TimerToken {
    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

/// A timer the driving loop should run and feed back to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub token: TimerToken,
    pub delay: Duration,
}

/// Waits out a scheduled timer and returns its token for
/// `JourneyPlayer::handle_timer`.
pub async fn elapse(timer: ScheduledTimer) -> TimerToken {
    tokio::time::sleep(timer.delay).await;
    timer.token
}
