mod analysis;
mod ids;
mod language;
mod progress;
mod slide;
mod topic;

pub use analysis::SurgicalAnalysis;
pub use ids::{ParseIdError, SlideId, TopicId};
pub use language::{Language, ParseLanguageError, TopicTranslations, TranslatedContent};
pub use progress::UserProgress;
pub use slide::{ExerciseKind, Interaction, Milestone, Slide, SlideKind, SlideTheme};
pub use topic::{GapFill, LogicMap, PracticeChamber, PracticeError, QuizQuestion, Topic};
