use crate::model::{GapFill, QuizQuestion, SlideId};

//
// ─── THEMES & MILESTONES ───────────────────────────────────────────────────────
//

/// Cosmetic grouping of slides; drives background/accent choices only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideTheme {
    Neutral,
    Trap,
    Logic,
    Success,
    Checkpoint,
}

/// The five named phases of a lesson, used by progress-indicator UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Milestone {
    Briefing,
    Trap,
    Logic,
    Synthesis,
    Mastery,
}

impl Milestone {
    /// All milestones in lesson order.
    pub const ALL: [Milestone; 5] = [
        Milestone::Briefing,
        Milestone::Trap,
        Milestone::Logic,
        Milestone::Synthesis,
        Milestone::Mastery,
    ];

    /// Base-language display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Milestone::Briefing => "Briefing",
            Milestone::Trap => "The Trap",
            Milestone::Logic => "Logic Core",
            Milestone::Synthesis => "Synthesis",
            Milestone::Mastery => "Mastery",
        }
    }
}

//
// ─── INTERACTIVE PAYLOADS ──────────────────────────────────────────────────────
//

/// Which practice exercise an interactive slide carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseKind {
    TrapQuiz,
    LogicQuiz,
    VocabQuiz,
    Gap,
}

/// Payload of an interactive slide.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Quiz {
        kind: ExerciseKind,
        question: QuizQuestion,
    },
    Gap(GapFill),
}

impl Interaction {
    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        match self {
            Interaction::Quiz { kind, .. } => *kind,
            Interaction::Gap(_) => ExerciseKind::Gap,
        }
    }
}

//
// ─── SLIDES ────────────────────────────────────────────────────────────────────
//

/// What a slide is; rendering dispatches on this closed set.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideKind {
    Cover,
    Text,
    Interactive(Interaction),
    Checkpoint,
    Reward,
}

/// One atomic screen in a generated lesson sequence.
///
/// Slides are ephemeral: a fresh sequence is built per topic selection and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: SlideId,
    pub kind: SlideKind,
    pub theme: SlideTheme,
    pub overline: Option<String>,
    pub title: Option<String>,
    /// At most 3 display lines.
    pub lines: Vec<String>,
    pub milestone: Milestone,
}

impl Slide {
    /// True when tap-to-advance must be suppressed for this slide.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self.kind, SlideKind::Interactive(_))
    }

    /// True for auto-advancing transition slides.
    #[must_use]
    pub fn is_checkpoint(&self) -> bool {
        matches!(self.kind, SlideKind::Checkpoint)
    }

    /// Returns the interactive payload, if any.
    #[must_use]
    pub fn interaction(&self) -> Option<&Interaction> {
        match &self.kind {
            SlideKind::Interactive(interaction) => Some(interaction),
            _ => None,
        }
    }
}
