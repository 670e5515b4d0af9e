#![forbid(unsafe_code)]

pub mod error;
pub mod live_tutor;
pub mod player;

pub use error::{LiveTutorError, PlayerError};
pub use live_tutor::{LiveTutorConfig, LiveTutorService};

pub use player::{
    InteractionStatus, JourneyPlayer, LessonWorkflow, PlayerState, QuizEvaluation, ScheduledTimer,
    TimerKind, TimerToken,
};
