//! UI state and its transition function.
//!
//! Every user action and every request completion is a [`UiEvent`];
//! [`reduce`] maps `(state, event)` to a new state plus an optional
//! [`Effect`] for the owner to carry out. The state itself is never
//! mutated in place.

use premium_core::{InputField, InputSet, PredictionOutcome};
use serde::Serialize;

/// Identifies one submission so late completions can be recognised.
pub type RequestId = u64;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UiState {
    pub inputs: InputSet,
    /// True while a request is in flight. Submission is disabled.
    pub loading: bool,
    /// Outcome of the latest attempt, `Pending` while in flight.
    pub outcome: Option<PredictionOutcome>,
    pub show_result: bool,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
}

impl UiState {
    pub fn new(inputs: InputSet) -> Self {
        Self {
            inputs,
            ..Default::default()
        }
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Edit { field: InputField, value: String },
    Submit,
    Resolved {
        request_id: RequestId,
        outcome: PredictionOutcome,
    },
    CloseResult,
}

/// Work the owner must perform after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SendRequest {
        request_id: RequestId,
        inputs: InputSet,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: UiState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: UiState) -> Self {
        Self { state, effect: None }
    }
}

pub fn reduce(state: &UiState, event: UiEvent) -> Transition {
    match event {
        UiEvent::Edit { field, value } => Transition::to(UiState {
            inputs: state.inputs.with(field, value),
            ..state.clone()
        }),

        UiEvent::Submit if state.loading => {
            tracing::debug!("submit ignored: request already in flight");
            Transition::to(state.clone())
        }

        UiEvent::Submit if !state.inputs.is_complete() => {
            tracing::debug!(missing = ?state.inputs.missing_fields(), "submit rejected");
            Transition::to(UiState {
                outcome: Some(PredictionOutcome::ValidationError),
                show_result: true,
                ..state.clone()
            })
        }

        UiEvent::Submit => {
            let request_id = state.next_request_id;
            Transition {
                state: UiState {
                    loading: true,
                    outcome: Some(PredictionOutcome::Pending),
                    show_result: false,
                    in_flight: Some(request_id),
                    next_request_id: request_id + 1,
                    ..state.clone()
                },
                effect: Some(Effect::SendRequest {
                    request_id,
                    inputs: state.inputs.clone(),
                }),
            }
        }

        UiEvent::Resolved {
            request_id,
            outcome,
        } => {
            if state.in_flight != Some(request_id) {
                tracing::debug!(request_id, "discarding stale completion");
                return Transition::to(state.clone());
            }
            Transition::to(UiState {
                loading: false,
                outcome: Some(outcome),
                show_result: true,
                in_flight: None,
                ..state.clone()
            })
        }

        UiEvent::CloseResult => Transition::to(UiState {
            show_result: false,
            ..state.clone()
        }),
    }
}
