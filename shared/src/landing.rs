use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{PreorderSource, QuestionKey};
use crate::preorder::{PreorderForm, SubmissionTicket};
use crate::quiz_flow::{QuizError, QuizFlow, QuizView};
use crate::validation::validate_email;

/// All mutable state of the landing page, owned by its root component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandingState {
    quiz: QuizFlow,
    preorder: PreorderForm,
}

impl LandingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiz(&self) -> &QuizFlow { &self.quiz }

    pub fn preorder(&self) -> &PreorderForm { &self.preorder }

    pub fn quiz_view(&self) -> QuizView { self.quiz.view() }

    /// Also drops any validation message left behind by the form.
    pub fn open_quiz(&mut self) {
        self.preorder.clear_error();
        self.quiz.open();
    }

    pub fn close_quiz(&mut self) { self.quiz.close() }

    pub fn answer(&mut self, key: QuestionKey, value: impl Into<String>) -> Result<usize> {
        Ok(self.quiz.answer(key, value)?)
    }

    pub fn retake_quiz(&mut self) { self.quiz.reset() }

    pub fn set_email(&mut self, value: impl Into<String>) { self.preorder.set_email(value) }

    pub fn submit_preorder(&mut self) -> Result<SubmissionTicket> {
        Ok(self.preorder.submit()?)
    }

    pub fn resolve_submission(&mut self, ticket: SubmissionTicket) -> bool {
        self.preorder.resolve(ticket)
    }

    pub fn cancel_submission(&mut self, ticket: SubmissionTicket) -> bool {
        self.preorder.cancel(ticket)
    }

    /// Pre-order straight from the recommendation screen. Succeeds and closes
    /// the quiz in one step, but only once an email has been captured.
    pub fn preorder_from_quiz(&mut self) -> Result<()> {
        if self.quiz.view() != QuizView::Recommendation {
            warn!(step = self.quiz.step(), "quiz pre-order before recommendation");
            return Err(QuizError::NotComplete.into());
        }
        if let Err(err) = validate_email(self.preorder.email()) {
            self.preorder.reject(err.clone());
            return Err(err.into());
        }

        let email = self.preorder.email().to_string();
        self.preorder.mark_success(email, PreorderSource::Quiz);
        self.quiz.close();
        debug!("quiz pre-order complete");
        Ok(())
    }
}
