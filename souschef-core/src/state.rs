//! Request lifecycle state for recipe generation frontends.

use crate::actions::GenerateOutcome;
use crate::recipe::Recipe;

/// Lifecycle of a single generate request as a display surface sees it.
///
/// A request starts idle, moves to loading when dispatched, and lands on
/// exactly one of success or error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(Recipe),
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Fold a finished generate call into its terminal state.
    pub fn from_outcome(outcome: GenerateOutcome) -> Self {
        match (outcome.recipe, outcome.error) {
            (Some(recipe), _) => RequestState::Success(recipe),
            (None, Some(error)) => RequestState::Error(error),
            (None, None) => RequestState::Idle,
        }
    }
}
