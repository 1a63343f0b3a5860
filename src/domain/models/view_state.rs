use crate::domain::ErrorKind;

use super::ReviewResult;

/// Lifecycle of a single review submission as seen by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Ready(ReviewResult),
    Failed(ErrorKind),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    pub fn error(&self) -> Option<ErrorKind> {
        match self {
            ViewState::Failed(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Ready(_) => "ready",
            ViewState::Failed(_) => "failed",
        }
    }
}
