//! Turns one topic into its ordered slide sequence.
//!
//! The order is fixed for every topic: cover, task, then the trap, logic,
//! synthesis and mastery phases separated by checkpoint slides, ending in a
//! reward. Interactive slides appear only when the topic carries a practice
//! chamber. Building is pure and deterministic: the same topic always yields
//! a structurally identical journey.

use crate::model::{
    ExerciseKind, Interaction, Milestone, Slide, SlideId, SlideKind, SlideTheme, Topic,
};

/// Builds the full journey for a topic.
#[must_use]
pub fn build_journey(topic: &Topic) -> Vec<Slide> {
    let mut journey = JourneyAssembler::default();

    // Briefing
    journey.push(
        SlideKind::Cover,
        SlideTheme::Neutral,
        Milestone::Briefing,
        Some(format!("Module 0{}", topic.id)),
        Some(topic.title.clone()),
        vec!["The Invisible Work".to_string(), "2025 Edition".to_string()],
    );
    journey.push(
        SlideKind::Text,
        SlideTheme::Neutral,
        Milestone::Briefing,
        Some("The Task".to_string()),
        Some("Analyze Prompt".to_string()),
        vec![topic.prompt.clone()],
    );

    // The Trap
    journey.checkpoint(SlideTheme::Trap, Milestone::Trap, "Enter Danger Zone");
    journey.push(
        SlideKind::Text,
        SlideTheme::Trap,
        Milestone::Trap,
        Some("Warning".to_string()),
        Some("The Trap".to_string()),
        vec![
            "Most students write:".to_string(),
            format!("\"{}\"", topic.trap),
            "This limits you to Band 6.0.".to_string(),
        ],
    );
    if let Some(practice) = &topic.practice {
        journey.quiz(
            SlideTheme::Trap,
            Milestone::Trap,
            "Check: The Trap",
            ExerciseKind::TrapQuiz,
            practice.trap.clone(),
        );
    }

    // Logic Core
    journey.checkpoint(SlideTheme::Logic, Milestone::Logic, "Activate Logic Core");
    journey.push(
        SlideKind::Text,
        SlideTheme::Logic,
        Milestone::Logic,
        Some("The Shift".to_string()),
        Some("Invisible Work".to_string()),
        vec![
            "Stop writing.".to_string(),
            "Start thinking.".to_string(),
            "Find the specific question.".to_string(),
        ],
    );
    journey.push(
        SlideKind::Text,
        SlideTheme::Logic,
        Milestone::Logic,
        Some("Precision".to_string()),
        Some("Specific Question".to_string()),
        vec![topic.specific_question.clone()],
    );
    journey.push(
        SlideKind::Text,
        SlideTheme::Logic,
        Milestone::Logic,
        Some("Logic Map".to_string()),
        Some("View A".to_string()),
        vec![topic.logic_map.view_a.clone()],
    );
    journey.push(
        SlideKind::Text,
        SlideTheme::Logic,
        Milestone::Logic,
        Some("Logic Map".to_string()),
        Some("View B".to_string()),
        vec![topic.logic_map.view_b.clone()],
    );
    journey.push(
        SlideKind::Text,
        SlideTheme::Logic,
        Milestone::Logic,
        Some("Critical Thinking".to_string()),
        Some("My Position".to_string()),
        vec![topic.logic_map.position.clone()],
    );
    if let Some(practice) = &topic.practice {
        journey.quiz(
            SlideTheme::Logic,
            Milestone::Logic,
            "Check: Logic",
            ExerciseKind::LogicQuiz,
            practice.logic.clone(),
        );
    }

    // Synthesis: one slide per introduction sentence
    journey.checkpoint(SlideTheme::Neutral, Milestone::Synthesis, "Begin Surgery");
    for (i, sentence) in split_sentences(&topic.introduction).into_iter().enumerate() {
        let title = if i == 0 { "Thesis" } else { "Development" };
        journey.push(
            SlideKind::Text,
            SlideTheme::Neutral,
            Milestone::Synthesis,
            Some("Surgical Introduction".to_string()),
            Some(title.to_string()),
            vec![sentence],
        );
    }

    // Mastery
    journey.checkpoint(SlideTheme::Success, Milestone::Mastery, "Prove Mastery");
    if let Some(practice) = &topic.practice {
        journey.quiz(
            SlideTheme::Neutral,
            Milestone::Mastery,
            "Vocab Check",
            ExerciseKind::VocabQuiz,
            practice.vocab.clone(),
        );
        journey.push(
            SlideKind::Interactive(Interaction::Gap(practice.gap.clone())),
            SlideTheme::Neutral,
            Milestone::Mastery,
            None,
            Some("Gap Fill".to_string()),
            Vec::new(),
        );
    }
    journey.push(
        SlideKind::Reward,
        SlideTheme::Success,
        Milestone::Mastery,
        None,
        Some("Module Complete".to_string()),
        vec![
            "XP Gained: +100".to_string(),
            "Next Level Unlocked".to_string(),
        ],
    );

    journey.slides
}

/// Splits text into sentences: runs of non-terminator characters followed by
/// one or more of `.`, `!`, `?`, trimmed of surrounding whitespace. Text with
/// no terminator at all is returned whole, untrimmed.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = None;
    let mut terminated = false;

    for (i, ch) in text.char_indices() {
        let is_terminator = matches!(ch, '.' | '!' | '?');
        if is_terminator {
            if start.is_some() {
                terminated = true;
            }
            // terminators with no preceding run are skipped
        } else {
            if terminated {
                if let Some(s) = start.take() {
                    sentences.push(text[s..i].trim().to_string());
                }
                terminated = false;
            }
            if start.is_none() {
                start = Some(i);
            }
        }
    }
    if terminated {
        if let Some(s) = start {
            sentences.push(text[s..].trim().to_string());
        }
    }

    if sentences.is_empty() {
        vec![text.to_string()]
    } else {
        sentences
    }
}

#[derive(Default)]
struct JourneyAssembler {
    slides: Vec<Slide>,
    next_id: u32,
}

impl JourneyAssembler {
    fn push(
        &mut self,
        kind: SlideKind,
        theme: SlideTheme,
        milestone: Milestone,
        overline: Option<String>,
        title: Option<String>,
        lines: Vec<String>,
    ) {
        let id = SlideId::new(self.next_id);
        self.next_id += 1;
        self.slides.push(Slide {
            id,
            kind,
            theme,
            overline,
            title,
            lines,
            milestone,
        });
    }

    /// Checkpoint slides carry the milestone of the phase they lead into.
    fn checkpoint(&mut self, theme: SlideTheme, milestone: Milestone, line: &str) {
        self.push(
            SlideKind::Checkpoint,
            theme,
            milestone,
            None,
            Some("Checkpoint Reached".to_string()),
            vec![line.to_string()],
        );
    }

    fn quiz(
        &mut self,
        theme: SlideTheme,
        milestone: Milestone,
        title: &str,
        kind: ExerciseKind,
        question: crate::model::QuizQuestion,
    ) {
        self.push(
            SlideKind::Interactive(Interaction::Quiz { kind, question }),
            theme,
            milestone,
            None,
            Some(title.to_string()),
            Vec::new(),
        );
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GapFill, LogicMap, PracticeChamber, QuizQuestion, TopicId};

    fn quiz(answer: &str) -> QuizQuestion {
        QuizQuestion {
            question: "Q?".to_string(),
            options: vec![answer.to_string(), "other".to_string()],
            answer: answer.to_string(),
            explanation: None,
        }
    }

    fn chamber() -> PracticeChamber {
        PracticeChamber {
            logic: quiz("logic"),
            trap: quiz("trap"),
            vocab: quiz("vocab"),
            gap: GapFill {
                text_parts: vec!["Fill ".to_string(), " here.".to_string()],
                answers: vec!["this".to_string()],
            },
        }
    }

    fn topic(practice: Option<PracticeChamber>) -> Topic {
        Topic {
            id: TopicId::new(1),
            year: "2025".to_string(),
            title: "Media & Censorship".to_string(),
            prompt: "Discuss both views.".to_string(),
            specific_question: "Hide or show?".to_string(),
            trap: "Writing generally.".to_string(),
            logic_map: LogicMap {
                view_a: "Panic.".to_string(),
                view_b: "Awareness.".to_string(),
                position: "Transparency without gore.".to_string(),
            },
            introduction: "First sentence. Second one! Third?".to_string(),
            practice,
            translations: None,
        }
    }

    fn count_kind(slides: &[Slide], pred: impl Fn(&SlideKind) -> bool) -> usize {
        slides.iter().filter(|s| pred(&s.kind)).count()
    }

    #[test]
    fn journey_with_practice_has_four_interactive_slides() {
        let slides = build_journey(&topic(Some(chamber())));
        assert_eq!(
            count_kind(&slides, |k| matches!(k, SlideKind::Interactive(_))),
            4
        );
    }

    #[test]
    fn journey_without_practice_has_no_interactive_slides() {
        let slides = build_journey(&topic(None));
        assert_eq!(
            count_kind(&slides, |k| matches!(k, SlideKind::Interactive(_))),
            0
        );
    }

    #[test]
    fn journey_always_has_fixed_structural_slides() {
        for practice in [None, Some(chamber())] {
            let slides = build_journey(&topic(practice));
            assert_eq!(count_kind(&slides, |k| matches!(k, SlideKind::Cover)), 1);
            assert_eq!(count_kind(&slides, |k| matches!(k, SlideKind::Reward)), 1);
            assert_eq!(
                count_kind(&slides, |k| matches!(k, SlideKind::Checkpoint)),
                4
            );
            assert!(matches!(slides[0].kind, SlideKind::Cover));
            assert!(matches!(slides.last().unwrap().kind, SlideKind::Reward));
        }
    }

    #[test]
    fn slide_ids_are_sequential() {
        let slides = build_journey(&topic(Some(chamber())));
        for (i, slide) in slides.iter().enumerate() {
            assert_eq!(slide.id.value() as usize, i);
        }
    }

    #[test]
    fn building_twice_is_deterministic() {
        let t = topic(Some(chamber()));
        assert_eq!(build_journey(&t), build_journey(&t));
    }

    #[test]
    fn checkpoint_milestone_matches_following_slide() {
        let slides = build_journey(&topic(Some(chamber())));
        for pair in slides.windows(2) {
            if pair[0].is_checkpoint() {
                assert_eq!(pair[0].milestone, pair[1].milestone);
            }
        }
    }

    #[test]
    fn interactive_order_is_trap_logic_vocab_gap() {
        let slides = build_journey(&topic(Some(chamber())));
        let kinds: Vec<_> = slides
            .iter()
            .filter_map(|s| s.interaction())
            .map(Interaction::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ExerciseKind::TrapQuiz,
                ExerciseKind::LogicQuiz,
                ExerciseKind::VocabQuiz,
                ExerciseKind::Gap
            ]
        );
    }

    #[test]
    fn one_text_slide_per_introduction_sentence() {
        let slides = build_journey(&topic(None));
        let synthesis: Vec<_> = slides
            .iter()
            .filter(|s| {
                s.milestone == Milestone::Synthesis && matches!(s.kind, SlideKind::Text)
            })
            .collect();
        assert_eq!(synthesis.len(), 3);
        assert_eq!(synthesis[0].title.as_deref(), Some("Thesis"));
        assert_eq!(synthesis[0].lines, vec!["First sentence.".to_string()]);
        assert_eq!(synthesis[1].title.as_deref(), Some("Development"));
        assert_eq!(synthesis[1].lines, vec!["Second one!".to_string()]);
        assert_eq!(synthesis[2].lines, vec!["Third?".to_string()]);
    }

    #[test]
    fn cover_carries_module_overline_and_taglines() {
        let slides = build_journey(&topic(None));
        let cover = &slides[0];
        assert_eq!(cover.overline.as_deref(), Some("Module 01"));
        assert_eq!(cover.title.as_deref(), Some("Media & Censorship"));
        assert_eq!(
            cover.lines,
            vec!["The Invisible Work".to_string(), "2025 Edition".to_string()]
        );
    }

    // ─── sentence splitting ───

    #[test]
    fn splits_well_punctuated_text() {
        assert_eq!(split_sentences("A. B. C."), vec!["A.", "B.", "C."]);
    }

    #[test]
    fn text_without_terminators_is_one_sentence() {
        assert_eq!(
            split_sentences("No punctuation here"),
            vec!["No punctuation here"]
        );
    }

    #[test]
    fn repeated_terminators_stay_with_their_sentence() {
        assert_eq!(
            split_sentences("Wait... really?! Yes."),
            vec!["Wait...", "really?!", "Yes."]
        );
    }

    #[test]
    fn empty_text_is_one_empty_sentence() {
        assert_eq!(split_sentences(""), vec![""]);
    }
}
