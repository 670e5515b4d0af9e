use journey_core::model::QuizQuestion;

/// Outcome of evaluating one quiz choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvaluation {
    /// The choice is not one of the declared options; nothing happens.
    Ignored,
    /// The choice equals the declared answer. When `wait_for_continue` is
    /// set the question carries an explanation and the player must wait for
    /// an explicit continue instead of auto-advancing.
    Correct { wait_for_continue: bool },
    /// A declared option, but not the answer. Shown briefly, then reset so
    /// the learner can retry; attempts are unlimited and not recorded.
    Wrong,
}

/// Evaluates a quiz choice against the declared options and answer.
#[must_use]
pub fn evaluate_quiz(question: &QuizQuestion, choice: &str) -> QuizEvaluation {
    if !question.options.iter().any(|opt| opt == choice) {
        return QuizEvaluation::Ignored;
    }
    if choice == question.answer {
        QuizEvaluation::Correct {
            wait_for_continue: question.explanation.is_some(),
        }
    } else {
        QuizEvaluation::Wrong
    }
}
