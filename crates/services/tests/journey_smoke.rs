use journey_core::model::{Interaction, TopicId, UserProgress};
use services::player::elapse;
use services::{InteractionStatus, LessonWorkflow, PlayerState};

/// Drives a full catalog topic through the player the way a UI would:
/// taps on passive slides, real answers on quizzes, reveal on the gap, and
/// every scheduled timer actually awaited. `start_paused` keeps the clock
/// virtual, so checkpoint timeouts and auto-advance delays elapse instantly.
#[tokio::test(start_paused = true)]
async fn first_module_runs_to_completion_and_unlocks_the_next() {
    let workflow = LessonWorkflow::from_catalog();
    let mut progress = UserProgress::new();

    assert!(workflow.is_unlocked(&progress, 0));
    assert!(!workflow.is_unlocked(&progress, 1));

    let mut player = workflow
        .select(&progress, TopicId::new(1))
        .expect("first topic starts unlocked");
    assert_eq!(player.state(), PlayerState::AtSlide(0));

    let mut steps = 0;
    while !player.is_closed() {
        steps += 1;
        assert!(steps < 100, "player failed to terminate");

        let interaction = player
            .current_slide()
            .and_then(|slide| slide.interaction().cloned());
        let scheduled = match interaction {
            Some(Interaction::Quiz { question, .. }) => player.choose(&question.answer),
            Some(Interaction::Gap(_)) => {
                let timer = player.reveal().expect("gap reveal schedules advance");
                assert_eq!(player.status(), InteractionStatus::Correct);
                Some(timer)
            }
            None => player.tap(),
        };
        if let Some(timer) = scheduled {
            let token = elapse(timer).await;
            player.handle_timer(token);
        }
    }

    assert_eq!(player.state(), PlayerState::Closed { completed: true });
    assert!(workflow.finish(&mut progress, &player));
    assert_eq!(progress.completed(), &[TopicId::new(1)]);

    assert!(workflow.is_unlocked(&progress, 1));
    assert!(!workflow.is_unlocked(&progress, 2));
    workflow
        .select(&progress, TopicId::new(2))
        .expect("second topic unlocked after completing the first");
}

/// A wrong answer must leave the journey retryable: the highlight resets
/// after its delay and the same slide accepts the right answer.
#[tokio::test(start_paused = true)]
async fn wrong_answer_resets_and_allows_retry() {
    let workflow = LessonWorkflow::from_catalog();
    let progress = UserProgress::new();
    let mut player = workflow.select(&progress, TopicId::new(1)).unwrap();

    // Walk to the trap quiz.
    loop {
        let quiz = player
            .current_slide()
            .and_then(|slide| slide.interaction().cloned());
        if let Some(Interaction::Quiz { question, .. }) = quiz {
            let wrong = question
                .options
                .iter()
                .find(|opt| **opt != question.answer)
                .cloned()
                .expect("quiz has a wrong option");

            let timer = player.choose(&wrong).expect("wrong answer schedules reset");
            assert_eq!(player.status(), InteractionStatus::Wrong);
            let token = elapse(timer).await;
            player.handle_timer(token);
            assert_eq!(player.status(), InteractionStatus::Idle);

            let timer = player.choose(&question.answer).expect("retry succeeds");
            let token = elapse(timer).await;
            player.handle_timer(token);
            assert_eq!(player.status(), InteractionStatus::Idle);
            return;
        }
        if let Some(timer) = player.tap() {
            let token = elapse(timer).await;
            player.handle_timer(token);
        }
        assert!(!player.is_closed(), "closed before reaching a quiz");
    }
}
