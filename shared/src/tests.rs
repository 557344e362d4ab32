#[cfg(test)]
mod tests {
    use crate::{
        ErrorCode, LandingState, PreorderForm, PreorderSource, Price, QuestionKey, QuizError,
        QuizFlow, QuizView, ValidationError, PRODUCTS, QUESTIONS, RECOMMENDATION, TRIAL_PRICE,
    };

    fn open_quiz() -> QuizFlow {
        let mut quiz = QuizFlow::new();
        quiz.open();
        quiz
    }

    fn completed_landing(email: &str) -> LandingState {
        let mut state = LandingState::new();
        state.set_email(email);
        state.open_quiz();
        state.answer(QuestionKey::Concern, "hair").unwrap();
        state.answer(QuestionKey::Exercise, "rarely").unwrap();
        state.answer(QuestionKey::Pref, "topical").unwrap();
        state
    }

    #[test]
    fn test_every_answer_sequence_completes() {
        let [concern, exercise, pref] = QUESTIONS;
        for c in concern.options {
            for e in exercise.options {
                for p in pref.options {
                    let mut quiz = open_quiz();
                    assert_eq!(quiz.answer(QuestionKey::Concern, c.value), Ok(1));
                    assert_eq!(quiz.answer(QuestionKey::Exercise, e.value), Ok(2));
                    assert_eq!(quiz.answer(QuestionKey::Pref, p.value), Ok(3));

                    assert_eq!(quiz.step(), 3);
                    assert_eq!(quiz.answers().len(), 3);
                    assert_eq!(quiz.answers()[&QuestionKey::Concern], c.value);
                    assert_eq!(quiz.answers()[&QuestionKey::Exercise], e.value);
                    assert_eq!(quiz.answers()[&QuestionKey::Pref], p.value);
                    assert_eq!(quiz.view(), QuizView::Recommendation);
                }
            }
        }
    }

    #[test]
    fn test_step_tracks_answer_count() {
        let mut quiz = open_quiz();
        for (step, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(quiz.view(), QuizView::Question(step));
            assert_eq!(quiz.answers().len(), step);
            assert_eq!(quiz.current_question().map(|q| q.key), Some(question.key));
            quiz.answer(question.key, "anything at all").unwrap();
        }
        assert!(quiz.is_complete());
        assert_eq!(quiz.current_question(), None);
    }

    #[test]
    fn test_answer_value_is_not_validated() {
        let mut quiz = open_quiz();
        assert!(quiz.answer(QuestionKey::Concern, "").is_ok());
        assert_eq!(quiz.answers()[&QuestionKey::Concern], "");
    }

    #[test]
    fn test_rejected_answers_leave_state_untouched() {
        let mut quiz = QuizFlow::new();
        assert_eq!(quiz.answer(QuestionKey::Concern, "hair"), Err(QuizError::Closed));
        assert_eq!(quiz.step(), 0);

        quiz.open();
        assert_eq!(
            quiz.answer(QuestionKey::Pref, "topical"),
            Err(QuizError::UnexpectedQuestion { expected: QuestionKey::Concern, got: QuestionKey::Pref })
        );
        assert_eq!(quiz.step(), 0);
        assert!(quiz.answers().is_empty());

        quiz.answer(QuestionKey::Concern, "hair").unwrap();
        quiz.answer(QuestionKey::Exercise, "rarely").unwrap();
        quiz.answer(QuestionKey::Pref, "topical").unwrap();
        assert_eq!(quiz.answer(QuestionKey::Pref, "ingestible"), Err(QuizError::AlreadyComplete));
        assert_eq!(quiz.step(), 3);
        assert_eq!(quiz.answers()[&QuestionKey::Pref], "topical");
    }

    #[test]
    fn test_close_and_reopen_resumes() {
        let mut quiz = open_quiz();
        quiz.answer(QuestionKey::Concern, "stress").unwrap();
        quiz.close();
        assert_eq!(quiz.view(), QuizView::Closed);
        assert_eq!(quiz.step(), 1);

        quiz.open();
        assert_eq!(quiz.view(), QuizView::Question(1));
        assert_eq!(quiz.answers()[&QuestionKey::Concern], "stress");
    }

    #[test]
    fn test_reset_from_any_state() {
        let fresh = QuizFlow::new();
        let opened = open_quiz();
        let mut midway = open_quiz();
        midway.answer(QuestionKey::Concern, "digestion").unwrap();
        let mut finished = midway.clone();
        finished.answer(QuestionKey::Exercise, "regular").unwrap();
        finished.answer(QuestionKey::Pref, "ingestible").unwrap();
        let mut finished_closed = finished.clone();
        finished_closed.close();

        for mut quiz in [fresh, opened, midway, finished, finished_closed] {
            quiz.reset();
            assert_eq!(quiz.step(), 0);
            assert!(quiz.answers().is_empty());
            assert!(!quiz.is_open());
            assert_eq!(quiz.view(), QuizView::Closed);
        }
    }

    #[test]
    fn test_empty_email_schedules_nothing() {
        let mut form = PreorderForm::new();
        assert_eq!(form.submit(), Err(ValidationError::EmptyEmail));
        assert!(!form.is_success());
        assert_eq!(form.pending(), 0);
        assert_eq!(form.error(), Some(&ValidationError::EmptyEmail));

        form.set_email("   ");
        assert!(form.submit().is_err());
        assert_eq!(form.pending(), 0);
    }

    #[test]
    fn test_editing_email_clears_inline_error() {
        let mut form = PreorderForm::new();
        let _ = form.submit();
        assert!(form.error().is_some());
        form.set_email("a");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_submission_resolves_exactly_once() {
        let mut form = PreorderForm::new();
        form.set_email("asha@example.com");
        let ticket = form.submit().unwrap();
        assert!(!form.is_success());
        assert_eq!(form.pending(), 1);

        assert!(form.resolve(ticket));
        assert!(form.is_success());
        assert_eq!(form.pending(), 0);

        assert!(!form.resolve(ticket));

        let preorder = form.preorder().unwrap();
        assert_eq!(preorder.email, "asha@example.com");
        assert_eq!(preorder.source, PreorderSource::Form);
        assert_eq!(preorder.product_id, "reboot");
        assert_eq!(preorder.short_reference().len(), 8);
    }

    #[test]
    fn test_double_submit_is_harmless() {
        let mut form = PreorderForm::new();
        form.set_email("asha@example.com");
        let first = form.submit().unwrap();
        let second = form.submit().unwrap();
        assert_ne!(first, second);
        assert_eq!(form.pending(), 2);

        assert!(form.resolve(first));
        let reference = form.preorder().unwrap().reference;
        assert!(form.resolve(second));

        assert!(form.is_success());
        assert_eq!(form.pending(), 0);
        assert_eq!(form.preorder().unwrap().reference, reference);
    }

    #[test]
    fn test_cancelled_submission_never_succeeds() {
        let mut form = PreorderForm::new();
        form.set_email("asha@example.com");
        let ticket = form.submit().unwrap();

        assert!(form.cancel(ticket));
        assert!(!form.cancel(ticket));
        assert!(!form.resolve(ticket));
        assert!(!form.is_success());
        assert_eq!(form.pending(), 0);
    }

    #[test]
    fn test_quiz_preorder_closes_quiz_in_same_update() {
        let mut state = completed_landing("asha@example.com");
        assert_eq!(state.quiz_view(), QuizView::Recommendation);

        state.preorder_from_quiz().unwrap();
        assert!(state.preorder().is_success());
        assert_eq!(state.quiz_view(), QuizView::Closed);
        assert_eq!(state.preorder().preorder().unwrap().source, PreorderSource::Quiz);
        assert_eq!(state.preorder().preorder().unwrap().email, "asha@example.com");
    }

    #[test]
    fn test_quiz_preorder_requires_email() {
        let mut state = completed_landing("");
        let err = state.preorder_from_quiz().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Please enter an email");
        assert!(!state.preorder().is_success());
        assert_eq!(state.quiz_view(), QuizView::Recommendation);
        assert!(state.preorder().error().is_some());

        state.set_email("asha@example.com");
        assert!(state.preorder_from_quiz().is_ok());
    }

    #[test]
    fn test_quiz_preorder_before_recommendation() {
        let mut state = LandingState::new();
        state.set_email("asha@example.com");
        state.open_quiz();
        state.answer(QuestionKey::Concern, "hair").unwrap();

        let err = state.preorder_from_quiz().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);
        assert!(!state.preorder().is_success());
        assert!(state.quiz().is_open());
    }

    #[test]
    fn test_form_and_quiz_converge_on_one_success_state() {
        let mut state = completed_landing("asha@example.com");
        let ticket = state.submit_preorder().unwrap();
        state.preorder_from_quiz().unwrap();
        assert!(state.resolve_submission(ticket));

        assert!(state.preorder().is_success());
        assert_eq!(state.preorder().preorder().unwrap().source, PreorderSource::Quiz);
    }

    #[test]
    fn test_wrong_question_maps_to_invalid_input() {
        let mut state = LandingState::new();
        state.open_quiz();
        let err = state.answer(QuestionKey::Exercise, "rarely").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.details.unwrap().contains("concern"));
    }

    #[test]
    fn test_hair_rarely_topical_recommends_reboot_kit() {
        let state = completed_landing("");
        assert_eq!(state.quiz_view(), QuizView::Recommendation);

        let [lead, product_name, prompt] = RECOMMENDATION.segments();
        assert_eq!(lead, "Based on your answers, we recommend the ");
        assert_eq!(product_name, "7-Day Reboot Kit");
        assert_eq!(prompt, ". Would you like to pre-order at the special trial price?");
        assert_eq!(
            RECOMMENDATION.summary(),
            "Based on your answers, we recommend the 7-Day Reboot Kit. Would you like to pre-order at the special trial price?"
        );
        assert!(PRODUCTS.iter().any(|p| p.id == RECOMMENDATION.product_id));
    }

    #[test]
    fn test_opening_quiz_clears_stale_form_error() {
        let mut state = LandingState::new();
        assert!(state.submit_preorder().is_err());
        assert!(state.preorder().error().is_some());

        state.open_quiz();
        assert!(state.preorder().error().is_none());
        assert!(!state.preorder().is_success());
        assert_eq!(state.quiz_view(), QuizView::Question(0));
    }

    #[test]
    fn test_catalog() {
        assert_eq!(PRODUCTS.len(), 3);
        assert_eq!(PRODUCTS.map(|p| p.price.to_string()), ["₹999", "₹1299", "Custom"]);
        assert_eq!(TRIAL_PRICE.to_string(), "₹499");
        assert_eq!(PRODUCTS[2].price, Price::Custom);
    }

    #[test]
    fn test_question_keys() {
        for key in [QuestionKey::Concern, QuestionKey::Exercise, QuestionKey::Pref] {
            assert_eq!(key.as_str().parse::<QuestionKey>(), Ok(key));
            assert_eq!(serde_json::to_string(&key).unwrap(), format!("\"{}\"", key));
        }
        assert!("diet".parse::<QuestionKey>().is_err());
    }
}
