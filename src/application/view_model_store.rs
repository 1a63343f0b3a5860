//! # View Model Store
//!
//! Explicitly owned state shared between the form step and the result step.
//! The submission flow is the only writer; the result view only reads.

use std::mem;

use crate::domain::{DomainError, ErrorKind, ReviewResult, ViewState};

#[derive(Debug, Default)]
pub struct ViewModelStore {
    state: ViewState,
    /// Last successful result, held back while a newer submission is loading
    /// and shown again if it fails. Always `None` while the state is `Ready`.
    previous: Option<ReviewResult>,
}

impl ViewModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a result restored from a session mirror.
    pub fn with_result(result: ReviewResult) -> Self {
        Self {
            state: ViewState::Ready(result),
            previous: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The result the presentation layer should show, if any. Nothing is
    /// shown while a submission is loading.
    pub fn result(&self) -> Option<&ReviewResult> {
        match &self.state {
            ViewState::Ready(result) => Some(result),
            ViewState::Loading => None,
            ViewState::Idle | ViewState::Failed(_) => self.previous.as_ref(),
        }
    }

    /// Enter `Loading`. Rejected while another submission is in flight.
    pub fn begin_loading(&mut self) -> Result<(), DomainError> {
        if self.is_loading() {
            return Err(DomainError::conflict("a submission is already in progress"));
        }

        if let ViewState::Ready(result) = mem::replace(&mut self.state, ViewState::Loading) {
            self.previous = Some(result);
        }
        Ok(())
    }

    pub fn complete(&mut self, result: ReviewResult) {
        self.previous = None;
        self.state = ViewState::Ready(result);
    }

    /// Record a failure. Any previously stored result is kept.
    pub fn fail(&mut self, kind: ErrorKind) {
        self.state = ViewState::Failed(kind);
    }

    pub fn reset(&mut self) {
        self.previous = None;
        self.state = ViewState::Idle;
    }
}

/// What the result step should do when it is entered.
#[derive(Debug, PartialEq)]
pub enum ResultView<'a> {
    Render(&'a ReviewResult),
    RedirectToForm,
}

impl<'a> ResultView<'a> {
    pub fn enter(store: &'a ViewModelStore) -> Self {
        match store.result() {
            Some(result) => ResultView::Render(result),
            None => ResultView::RedirectToForm,
        }
    }
}
