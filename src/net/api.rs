//! HTTP helpers for the game service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning a transport error, since these
//! exchanges are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The service answers rejections with a 4xx status and a JSON
//! `{success: false, error}` body, so bodies are decoded regardless of status.
//! Only a body that is not JSON at all falls back to a status message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ClientConfig;
use crate::net::types::{
    AiTurnResponse, FeedbackOutcome, FeedbackRequest, GameSummary, GuessRequest, HumanGuessOutcome, ServiceError,
    StartGameResponse,
};

pub const START_PATH: &str = "/start";
pub const HUMAN_TURN_PATH: &str = "/human-turn";
pub const AI_TURN_PATH: &str = "/ai-turn";
pub const AI_FEEDBACK_PATH: &str = "/ai-feedback";
pub const RESULT_PATH: &str = "/result";
pub const RESET_PATH: &str = "/reset";

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ServiceError {
    ServiceError::Transport("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
mod http {
    use gloo_net::http::{Request, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use web_sys::RequestCredentials;

    use super::request_failed_message;
    use crate::net::types::{ServiceError, Validate, decode_response};

    async fn read_body<T>(resp: Response) -> Result<T, ServiceError>
    where
        T: DeserializeOwned + Validate,
    {
        match resp.json::<serde_json::Value>().await {
            Ok(body) => decode_response(body),
            Err(_) if !resp.ok() => Err(ServiceError::Rejected(request_failed_message(resp.status()))),
            Err(e) => Err(ServiceError::Malformed(e.to_string())),
        }
    }

    pub(super) async fn get<T>(url: &str) -> Result<T, ServiceError>
    where
        T: DeserializeOwned + Validate,
    {
        let resp = Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        read_body(resp).await
    }

    pub(super) async fn post<B, T>(url: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize,
        T: DeserializeOwned + Validate,
    {
        let resp = Request::post(url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ServiceError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        read_body(resp).await
    }
}

/// Begin a new game via `POST /start`.
///
/// # Errors
///
/// Returns the service rejection or transport failure.
pub async fn start_game(config: &ClientConfig) -> Result<StartGameResponse, ServiceError> {
    #[cfg(feature = "csr")]
    {
        http::post(&config.endpoint(START_PATH), &serde_json::json!({})).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(unavailable())
    }
}

/// Score a human guess against the AI's secret via `POST /human-turn`.
///
/// # Errors
///
/// Returns the service rejection or transport failure.
pub async fn submit_human_guess(config: &ClientConfig, request: &GuessRequest) -> Result<HumanGuessOutcome, ServiceError> {
    #[cfg(feature = "csr")]
    {
        http::post(&config.endpoint(HUMAN_TURN_PATH), request).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err(unavailable())
    }
}

/// Fetch the AI's next guess via `GET /ai-turn`.
///
/// # Errors
///
/// Returns the service rejection or transport failure.
pub async fn request_ai_turn(config: &ClientConfig) -> Result<AiTurnResponse, ServiceError> {
    #[cfg(feature = "csr")]
    {
        http::get(&config.endpoint(AI_TURN_PATH)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(unavailable())
    }
}

/// Report bulls/cows for the AI's last guess via `POST /ai-feedback`.
///
/// # Errors
///
/// Returns the service rejection or transport failure.
pub async fn submit_ai_feedback(config: &ClientConfig, request: &FeedbackRequest) -> Result<FeedbackOutcome, ServiceError> {
    #[cfg(feature = "csr")]
    {
        http::post(&config.endpoint(AI_FEEDBACK_PATH), request).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err(unavailable())
    }
}

/// Fetch the server's view of the current session via `GET /result`.
///
/// # Errors
///
/// Returns the service rejection or transport failure.
pub async fn fetch_summary(config: &ClientConfig) -> Result<GameSummary, ServiceError> {
    #[cfg(feature = "csr")]
    {
        http::get(&config.endpoint(RESULT_PATH)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(unavailable())
    }
}

/// Discard the session via `POST /reset`. Failures are logged and ignored.
pub async fn reset_game(config: &ClientConfig) {
    #[cfg(feature = "csr")]
    {
        let result: Result<StartGameResponse, ServiceError> =
            http::post(&config.endpoint(RESET_PATH), &serde_json::json!({})).await;
        if let Err(e) = result {
            log::warn!("reset failed: {e}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
