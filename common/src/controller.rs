//! Form controller state machine
//!
//! `Idle → Loading → {Results | Error}`, back to `Loading` on every accepted
//! submission. The controller does no I/O: callers take the `Submission`
//! returned by [`FormController::submit`], perform the request, and hand the
//! outcome to [`FormController::resolve`].

use crate::error::{Error, Result};
use crate::form::FormFields;
use crate::types::{ResponseEnvelope, UserInput};
use crate::view::{render_results, RenderConfig, ResultsView};

/// What the page shows. At most one region is visible at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Nothing submitted yet
    #[default]
    Idle,
    Loading,
    Error(String),
    Results(ResultsView),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(m) => Some(m),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&ResultsView> {
        match self {
            ViewState::Results(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Error(_) => "error",
            ViewState::Results(_) => "results",
        }
    }
}

/// Identifies one accepted submission. Later submissions get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A validated request waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub input: UserInput,
}

/// Result of handing a response to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The response belonged to the latest submission and now drives the view
    Applied,
    /// An older or abandoned submission; ignored
    Stale,
}

#[derive(Debug, Clone)]
pub struct FormController {
    config: RenderConfig,
    state: ViewState,
    revision: u64,
    last_ticket: u64,
    in_flight: Option<Submission>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl FormController {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            state: ViewState::Idle,
            revision: 0,
            last_ticket: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Bumped every time a region is shown, even when the state repeats
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Validate the form and, if complete, enter `Loading`.
    ///
    /// Returns `None` when a field is empty; the validation message is shown
    /// and no request must be made. A failed validation also abandons any
    /// request still in flight.
    pub fn submit(&mut self, fields: &FormFields) -> Option<Submission> {
        self.revision += 1;
        match fields.validate() {
            Ok(input) => {
                self.last_ticket += 1;
                let submission = Submission {
                    ticket: Ticket(self.last_ticket),
                    input,
                };
                self.in_flight = Some(submission.clone());
                self.state = ViewState::Loading;
                Some(submission)
            }
            Err(e) => {
                self.in_flight = None;
                self.state = ViewState::Error(e.to_string());
                None
            }
        }
    }

    /// Apply the outcome of the request identified by `ticket`
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<ResponseEnvelope>) -> Resolution {
        let submission = match self.in_flight.take() {
            Some(s) if s.ticket == ticket => s,
            other => {
                self.in_flight = other;
                return Resolution::Stale;
            }
        };

        self.state = match outcome {
            Ok(envelope) => self.state_for(envelope, submission.input),
            Err(e) => ViewState::Error(e.to_string()),
        };
        self.revision += 1;
        Resolution::Applied
    }

    fn state_for(&self, envelope: ResponseEnvelope, submitted: UserInput) -> ViewState {
        if !envelope.success {
            return ViewState::Error(Error::application(envelope.error).to_string());
        }

        let recommendations = envelope.recommendations.unwrap_or_default();
        let user_input = envelope.user_input.unwrap_or(submitted);
        ViewState::Results(render_results(&recommendations, &user_input, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecommendationItem;

    fn fields() -> FormFields {
        FormFields::new("500k-1jt", "Rock", "Seimbang")
    }

    fn success(names: &[&str]) -> ResponseEnvelope {
        ResponseEnvelope {
            success: true,
            recommendations: Some(
                names
                    .iter()
                    .map(|n| RecommendationItem {
                        name: n.to_string(),
                        ..Default::default()
                    })
                    .collect(),
            ),
            user_input: None,
            error: None,
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let controller = FormController::default();
        assert_eq!(controller.state(), &ViewState::Idle);
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_submit_empty_field_shows_validation_error() {
        let mut controller = FormController::default();
        let submission = controller.submit(&FormFields::new("500k-1jt", "", "Seimbang"));

        assert!(submission.is_none());
        assert_eq!(controller.state().error_message(), Some("All fields are required"));
    }

    #[test]
    fn test_submit_enters_loading() {
        let mut controller = FormController::default();
        let submission = controller.submit(&fields()).expect("submission expected");

        assert!(controller.is_loading());
        assert_eq!(submission.input.genre, "Rock");
        assert_eq!(
            serde_json::to_string(&submission.input).expect("serialize failed"),
            r#"{"budget":"500k-1jt","genre":"Rock","sound_character":"Seimbang"}"#
        );
    }

    #[test]
    fn test_resolve_success_renders_results() {
        let mut controller = FormController::default();
        let submission = controller.submit(&fields()).expect("submission expected");

        let resolution = controller.resolve(submission.ticket, Ok(success(&["A", "B"])));
        assert_eq!(resolution, Resolution::Applied);

        let results = controller.state().results().expect("results expected");
        assert_eq!(results.cards.len(), 2);
        // user_input absent: summary falls back to what was submitted
        assert_eq!(results.summary.entries[0].value, "500k-1jt");
    }

    #[test]
    fn test_resolve_success_without_recommendations() {
        let mut controller = FormController::default();
        let submission = controller.submit(&fields()).expect("submission expected");

        let envelope = ResponseEnvelope { success: true, ..Default::default() };
        controller.resolve(submission.ticket, Ok(envelope));
        assert!(controller.state().results().expect("results expected").cards.is_empty());
    }

    #[test]
    fn test_resolve_application_error() {
        let mut controller = FormController::default();
        let submission = controller.submit(&fields()).expect("submission expected");

        let envelope = ResponseEnvelope {
            success: false,
            error: Some("X".to_string()),
            ..Default::default()
        };
        controller.resolve(submission.ticket, Ok(envelope));
        assert_eq!(controller.state(), &ViewState::Error("X".to_string()));
    }

    #[test]
    fn test_resolve_transport_error_hides_loading() {
        let mut controller = FormController::default();
        let submission = controller.submit(&fields()).expect("submission expected");

        controller.resolve(submission.ticket, Err(Error::transport("timeout")));
        assert!(!controller.is_loading());
        assert!(controller.state().error_message().expect("error expected").contains("timeout"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller = FormController::default();
        let first = controller.submit(&fields()).expect("first");
        let second = controller.submit(&fields()).expect("second");
        assert!(second.ticket > first.ticket);

        // second resolves first, then the older response arrives
        assert_eq!(controller.resolve(second.ticket, Ok(success(&["new"]))), Resolution::Applied);
        assert_eq!(controller.resolve(first.ticket, Ok(success(&["old"]))), Resolution::Stale);

        let results = controller.state().results().expect("results expected");
        assert_eq!(results.cards[0].name, "new");
    }

    #[test]
    fn test_stale_response_does_not_end_loading() {
        let mut controller = FormController::default();
        let first = controller.submit(&fields()).expect("first");
        let second = controller.submit(&fields()).expect("second");

        assert_eq!(controller.resolve(first.ticket, Err(Error::transport("x"))), Resolution::Stale);
        assert!(controller.is_loading());

        assert_eq!(controller.resolve(second.ticket, Ok(success(&[]))), Resolution::Applied);
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_validation_failure_abandons_in_flight() {
        let mut controller = FormController::default();
        let pending = controller.submit(&fields()).expect("submission expected");
        controller.submit(&FormFields::default());

        assert_eq!(controller.resolve(pending.ticket, Ok(success(&["late"]))), Resolution::Stale);
        assert_eq!(controller.state().error_message(), Some("All fields are required"));
    }

    #[test]
    fn test_repeated_validation_failure_bumps_revision() {
        let mut controller = FormController::default();
        controller.submit(&FormFields::default());
        let first = controller.revision();
        let state = controller.state().clone();

        controller.submit(&FormFields::default());
        assert_eq!(controller.state(), &state);
        assert!(controller.revision() > first);
    }

    #[test]
    fn test_stale_response_keeps_revision() {
        let mut controller = FormController::default();
        let first = controller.submit(&fields()).expect("first");
        controller.submit(&fields()).expect("second");
        let revision = controller.revision();

        controller.resolve(first.ticket, Ok(success(&["old"])));
        assert_eq!(controller.revision(), revision);
    }

    #[test]
    fn test_resubmit_after_error() {
        let mut controller = FormController::default();
        controller.submit(&FormFields::default());
        assert_eq!(controller.state().as_str(), "error");

        let submission = controller.submit(&fields()).expect("submission expected");
        assert_eq!(controller.state().as_str(), "loading");
        controller.resolve(submission.ticket, Ok(success(&["A"])));
        assert_eq!(controller.state().as_str(), "results");
    }
}
