//! Wire DTOs for the game service plus envelope decoding.
//!
//! DESIGN
//! ======
//! Every service response is a JSON record with a `success` flag; failures
//! carry an `error` string. Decoding is kept here, independent of the HTTP
//! layer, so the success/rejection/malformed split is covered natively.
//!
//! ERROR HANDLING
//! ==============
//! Contract violations (scores outside 0..=4, malformed AI guesses) are
//! reported as `ServiceError::Malformed` rather than trusted, so the state
//! machine never renders impossible values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::state::digits::{CODE_LENGTH, is_complete_code};
use crate::state::game::Actor;
use crate::state::history::HistoryEntry;

/// Generic inline text for rejections that arrive without a message.
pub const REJECTED_FALLBACK: &str = "The game server rejected the request.";
/// Generic inline text for requests that never completed.
pub const TRANSPORT_FALLBACK: &str = "Network error. Please try again.";

/// Failure of a game-service exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The service answered `success: false`.
    #[error("rejected: {0}")]
    Rejected(String),
    /// The request never completed.
    #[error("transport failed: {0}")]
    Transport(String),
    /// The response could not be decoded or broke the contract.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ServiceError {
    /// Text to show next to the control that triggered the request.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(msg) if !msg.trim().is_empty() => msg.clone(),
            Self::Rejected(_) | Self::Malformed(_) => REJECTED_FALLBACK.to_owned(),
            Self::Transport(_) => TRANSPORT_FALLBACK.to_owned(),
        }
    }
}

/// Body of `SubmitHumanGuess`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GuessRequest {
    pub guess: String,
}

/// Body of `SubmitAiFeedback`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackRequest {
    pub bulls: u8,
    pub cows: u8,
}

/// Successful `StartGame` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StartGameResponse {
    #[serde(default = "default_game_route")]
    pub redirect: String,
}

fn default_game_route() -> String {
    "/game".to_owned()
}

/// Successful `SubmitHumanGuess` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HumanGuessOutcome {
    pub bulls: u8,
    pub cows: u8,
    pub won: bool,
    /// Present only when `won`.
    #[serde(default)]
    pub ai_secret: Option<String>,
}

/// Successful `RequestAiTurn` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AiTurnResponse {
    pub ai_guess: String,
}

/// Successful `SubmitAiFeedback` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeedbackOutcome {
    pub won: bool,
    /// Present only when `won`.
    #[serde(default)]
    pub human_secret: Option<String>,
}

/// Successful `GetResult` response: the server's view of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GameSummary {
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub winner: Option<Actor>,
    #[serde(default)]
    pub human_guesses: Vec<HistoryEntry>,
    #[serde(default)]
    pub ai_guesses: Vec<HistoryEntry>,
    #[serde(default)]
    pub turn: Option<Actor>,
}

#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Responses whose fields carry range constraints beyond their JSON types.
pub trait Validate {
    /// # Errors
    ///
    /// Returns a description of the first violated constraint.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Validate for StartGameResponse {}
impl Validate for FeedbackOutcome {}
impl Validate for GameSummary {}

impl Validate for HumanGuessOutcome {
    fn validate(&self) -> Result<(), String> {
        validate_score(self.bulls, self.cows)
    }
}

impl Validate for AiTurnResponse {
    fn validate(&self) -> Result<(), String> {
        if is_complete_code(&self.ai_guess) {
            Ok(())
        } else {
            Err(format!("ai_guess must be {CODE_LENGTH} digits, got {:?}", self.ai_guess))
        }
    }
}

fn validate_score(bulls: u8, cows: u8) -> Result<(), String> {
    let max = u8::try_from(CODE_LENGTH).unwrap_or(u8::MAX);
    if bulls > max || cows > max || bulls.saturating_add(cows) > max {
        return Err(format!("score out of range: {bulls} bulls, {cows} cows"));
    }
    Ok(())
}

/// Decode a service response body.
///
/// # Errors
///
/// `Rejected` when `success` is false, `Malformed` when the envelope or the
/// typed payload cannot be decoded or fails validation.
pub fn decode_response<T>(body: serde_json::Value) -> Result<T, ServiceError>
where
    T: DeserializeOwned + Validate,
{
    let envelope = Envelope::deserialize(&body).map_err(|e| ServiceError::Malformed(e.to_string()))?;
    if !envelope.success {
        return Err(ServiceError::Rejected(envelope.error.unwrap_or_default()));
    }
    let payload = T::deserialize(&body).map_err(|e| ServiceError::Malformed(e.to_string()))?;
    payload.validate().map_err(ServiceError::Malformed)?;
    Ok(payload)
}
