use serde::Serialize;

use crate::view::{DisplayNode, EchoError, Result, StructuredValue, render};

/// Progress of one analysis action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
	/// Not started.
	#[default]
	Idle,
	/// Request in flight.
	Loading,
	/// Reply rendered.
	Success,
	/// Reply rejected or unusable.
	Error,
}

impl ActionStatus {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			ActionStatus::Idle => "idle",
			ActionStatus::Loading => "loading",
			ActionStatus::Success => "success",
			ActionStatus::Error => "error",
		}
	}
}

/// Titled container showing an action's status and its rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
	/// Card heading.
	pub title: String,
	/// Current action status.
	pub status: ActionStatus,
	/// Error message for failed actions.
	pub message: Option<String>,
	/// Rendered result; only set on success.
	pub body: Option<DisplayNode>,
	#[serde(skip)]
	depth: u32,
}

impl ResultCard {
	/// Create an idle card with no body.
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			status: ActionStatus::Idle,
			message: None,
			body: None,
			depth: 0,
		}
	}

	/// Render bodies starting at `depth` instead of the root.
	pub fn with_depth(mut self, depth: u32) -> Self {
		self.depth = depth;
		self
	}

	/// Build a finished card from one action outcome.
	pub fn from_outcome(title: impl Into<String>, outcome: Result<StructuredValue>) -> Self {
		let mut card = Self::new(title);
		card.finish(outcome);
		card
	}

	/// Mark the action as in flight, clearing any previous result.
	pub fn start(&mut self) {
		self.status = ActionStatus::Loading;
		self.message = None;
		self.body = None;
	}

	/// Record the action outcome. Errors never produce a body.
	pub fn finish(&mut self, outcome: Result<StructuredValue>) {
		match outcome {
			Ok(value) => {
				self.status = ActionStatus::Success;
				self.message = None;
				self.body = Some(render(&value, self.depth));
			}
			Err(err) => self.fail(&err),
		}
	}

	fn fail(&mut self, err: &EchoError) {
		self.status = ActionStatus::Error;
		self.message = Some(err.to_string());
		self.body = None;
	}

	/// Status line shown above the body, if any.
	pub fn status_line(&self) -> Option<&'static str> {
		match self.status {
			ActionStatus::Loading => Some("Loading..."),
			ActionStatus::Error => Some("Something went wrong."),
			ActionStatus::Idle | ActionStatus::Success => None,
		}
	}
}
