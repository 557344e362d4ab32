use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Question, QuestionKey, QuizAnswers, QUESTIONS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("The quiz is not open")] Closed,
    #[error("All questions have already been answered")] AlreadyComplete,
    #[error("Expected an answer for {expected}, got {got}")] UnexpectedQuestion { expected: QuestionKey, got: QuestionKey },
    #[error("The quiz has not reached its recommendation yet")] NotComplete,
}

/// What the quiz modal should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizView {
    Closed,
    Question(usize),
    Recommendation,
}

/// Linear three-question flow. Visibility and progress are independent, so a
/// closed quiz reopens at the step it was left on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizFlow {
    open: bool,
    step: usize,
    answers: QuizAnswers,
}

impl QuizFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        debug!(step = self.step, "quiz opened");
        self.open = true;
    }

    pub fn close(&mut self) {
        debug!(step = self.step, "quiz closed");
        self.open = false;
    }

    pub fn answer(&mut self, key: QuestionKey, value: impl Into<String>) -> Result<usize, QuizError> {
        if !self.open {
            warn!(%key, "answer while quiz closed");
            return Err(QuizError::Closed);
        }
        let expected = self.current_question()
            .map(|question| question.key)
            .ok_or(QuizError::AlreadyComplete)?;
        if expected != key {
            warn!(%expected, got = %key, "answer for the wrong question");
            return Err(QuizError::UnexpectedQuestion { expected, got: key });
        }

        let value = value.into();
        debug!(%key, %value, step = self.step, "quiz answered");
        self.answers.insert(key, value);
        self.step += 1;
        Ok(self.step)
    }

    pub fn reset(&mut self) {
        debug!(step = self.step, "quiz reset");
        self.answers.clear();
        self.step = 0;
        self.open = false;
    }

    pub fn view(&self) -> QuizView {
        match (self.open, self.step) {
            (false, _) => QuizView::Closed,
            (true, step) if step < QUESTIONS.len() => QuizView::Question(step),
            (true, _) => QuizView::Recommendation,
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.step)
    }

    pub fn is_open(&self) -> bool { self.open }

    pub fn is_complete(&self) -> bool { self.step >= QUESTIONS.len() }

    pub fn step(&self) -> usize { self.step }

    pub fn answers(&self) -> &QuizAnswers { &self.answers }
}
