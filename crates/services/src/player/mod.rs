//! The journey player: a cursor over one topic's slides plus the per-slide
//! interaction state, driven by taps, quiz choices, and single-shot timers.

mod evaluator;
mod session;
mod timer;
pub mod timing;
mod view;
mod workflow;

pub use evaluator::{evaluate_quiz, QuizEvaluation};
pub use session::{InteractionStatus, JourneyPlayer, PlayerState};
pub use timer::{elapse, ScheduledTimer, TimerKind, TimerToken};
pub use view::{render_gap, PlayerView, BLANK_PLACEHOLDER};
pub use workflow::LessonWorkflow;
