use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

use crate::models::{Preorder, PreorderSource, RECOMMENDATION};
use crate::validation::{validate_email, ValidationError};

/// Handle for one scheduled simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(u64);

impl fmt::Display for SubmissionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Email capture with a simulated, always-successful submission.
///
/// `submit` only hands out a ticket; whoever owns the timer calls `resolve`
/// once the delay has elapsed, or `cancel` if the view goes away first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreorderForm {
    email: String,
    success: bool,
    error: Option<ValidationError>,
    next_ticket: u64,
    pending: BTreeMap<SubmissionTicket, String>,
    preorder: Option<Preorder>,
}

impl PreorderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.error = None;
    }

    pub fn submit(&mut self) -> Result<SubmissionTicket, ValidationError> {
        if let Err(err) = validate_email(&self.email) {
            debug!("pre-order submit rejected: {}", err);
            self.error = Some(err.clone());
            return Err(err);
        }

        self.error = None;
        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.insert(ticket, self.email.clone());
        debug!(%ticket, "pre-order submission scheduled");
        Ok(ticket)
    }

    /// Completes a scheduled submission. Returns false for tickets that were
    /// already resolved, cancelled or never issued.
    pub fn resolve(&mut self, ticket: SubmissionTicket) -> bool {
        match self.pending.remove(&ticket) {
            Some(email) => {
                self.mark_success(email, PreorderSource::Form);
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self, ticket: SubmissionTicket) -> bool {
        let removed = self.pending.remove(&ticket).is_some();
        if removed {
            debug!(%ticket, "pre-order submission cancelled");
        }
        removed
    }

    /// The one place success is set, shared by the form and the quiz.
    pub(crate) fn mark_success(&mut self, email: String, source: PreorderSource) {
        self.success = true;
        if self.preorder.is_none() {
            let preorder = Preorder::new(email, source, RECOMMENDATION.product_id);
            info!(reference = %preorder.reference, ?source, "pre-order placed");
            self.preorder = Some(preorder);
        }
    }

    pub(crate) fn reject(&mut self, err: ValidationError) {
        self.error = Some(err);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn email(&self) -> &str { &self.email }

    pub fn is_success(&self) -> bool { self.success }

    pub fn error(&self) -> Option<&ValidationError> { self.error.as_ref() }

    pub fn pending(&self) -> usize { self.pending.len() }

    pub fn preorder(&self) -> Option<&Preorder> { self.preorder.as_ref() }
}
