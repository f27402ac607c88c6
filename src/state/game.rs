//! Turn state machine for one game against the AI.
//!
//! DESIGN
//! ======
//! `GameState::handle` is the only way the game moves: it takes one
//! `GameEvent` (user submission, service response, elapsed delay) and returns
//! the `Effect`s the page driver must run (requests, scheduled events, widget
//! commands). Nothing here touches the network, timers, or the DOM, so whole
//! games can be replayed under a virtual clock in tests.
//!
//! Every response or timer event belongs to whatever the machine is
//! currently `Pending` on. An event that does not match (late response,
//! duplicate timer, out-of-phase submit) is logged and dropped, which keeps
//! the client from ever advancing without the service's confirmation.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use serde::{Deserialize, Serialize};

use crate::config::Timing;
use crate::net::types::{
    AiTurnResponse, FeedbackOutcome, FeedbackRequest, GameSummary, GuessRequest, HumanGuessOutcome, ServiceError,
};
use crate::state::digits::{CODE_LENGTH, is_complete_code};
use crate::state::history::{HistoryEntry, HistoryLog};

/// Inline error for a guess with fewer than four digits.
pub const INCOMPLETE_GUESS_MESSAGE: &str = "Please enter all 4 digits.";
/// Inline error for feedback whose bulls and cows add up past four.
pub const INVALID_FEEDBACK_MESSAGE: &str = "Bulls + Cows cannot be more than 4.";
/// Shown in place of a secret the service did not reveal.
pub const UNKNOWN_SECRET: &str = "????";

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Human,
    Ai,
}

impl Actor {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "You",
            Self::Ai => "AI",
        }
    }
}

/// The single active phase; it decides which page region is visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    HumanTurnInput,
    ResultDisplay,
    AiTurnDisplay,
    AiFeedbackInput,
    GameWon {
        winner: Actor,
        /// The loser's secret, revealed on the win screen.
        secret: String,
    },
}

/// Visual cue for a scored guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTier {
    Exact,
    Hot,
    Default,
}

impl FeedbackTier {
    #[must_use]
    pub fn for_bulls(bulls: u8) -> Self {
        match bulls {
            4 => Self::Exact,
            2..=3 => Self::Hot,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Exact => "result--exact",
            Self::Hot => "result--hot",
            Self::Default => "result--default",
        }
    }
}

/// Bulls/cows the human is about to report for the AI's guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub bulls: u8,
    pub cows: u8,
}

impl FeedbackDraft {
    #[must_use]
    pub fn is_valid(self) -> bool {
        usize::from(self.bulls) + usize::from(self.cows) <= CODE_LENGTH
    }
}

/// Inputs to the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The human pressed submit; `guess` is whatever the digit group read.
    GuessSubmitted { guess: String },
    GuessScored(Result<HumanGuessOutcome, ServiceError>),
    ResultHoldElapsed,
    AiGuessReceived(Result<AiTurnResponse, ServiceError>),
    AiDigitRevealed,
    FeedbackEdited(FeedbackDraft),
    FeedbackSubmitted,
    FeedbackScored(Result<FeedbackOutcome, ServiceError>),
    HandoffElapsed,
    SummaryLoaded(GameSummary),
}

/// Side effects the driver executes on the machine's behalf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    SubmitHumanGuess(GuessRequest),
    RequestAiTurn,
    SubmitAiFeedback(FeedbackRequest),
    /// Feed `event` back into the machine after `after_ms`.
    Schedule { after_ms: u32, event: GameEvent },
    ClearGuessInput,
    FocusGuessInput,
    /// Scroll the actor's history log to its newest row.
    RevealLatest(Actor),
    LaunchCelebration,
    /// Blocking alert (used when the AI's move cannot be fetched).
    Alert(String),
}

/// What the machine is waiting on. `None` means the active control is enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Pending {
    GuessResponse { guess: String },
    ResultHold,
    AiGuess,
    AiReveal,
    FeedbackResponse(FeedbackDraft),
    Handoff,
}

#[derive(Clone, Debug, Default)]
pub struct GameState {
    phase: GamePhase,
    timing: Timing,
    pending: Option<Pending>,
    human_history: HistoryLog,
    ai_history: HistoryLog,
    last_result: Option<HistoryEntry>,
    pending_win: Option<(Actor, String)>,
    ai_guess: Option<String>,
    revealed_digits: usize,
    feedback: FeedbackDraft,
    guess_error: Option<String>,
    feedback_error: Option<String>,
    alert: Option<String>,
}

impl GameState {
    #[must_use]
    pub fn new(timing: Timing) -> Self {
        Self { timing, ..Self::default() }
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    #[must_use]
    pub fn history(&self, actor: Actor) -> &HistoryLog {
        match actor {
            Actor::Human => &self.human_history,
            Actor::Ai => &self.ai_history,
        }
    }

    /// Latest scored human guess, shown by the result overlay.
    #[must_use]
    pub fn last_result(&self) -> Option<&HistoryEntry> {
        self.last_result.as_ref()
    }

    #[must_use]
    pub fn result_tier(&self) -> Option<FeedbackTier> {
        self.last_result.as_ref().map(|r| FeedbackTier::for_bulls(r.bulls))
    }

    /// AI guess digits revealed so far; unrevealed positions are `None`.
    #[must_use]
    pub fn revealed_ai_digits(&self) -> [Option<char>; CODE_LENGTH] {
        let mut out = [None; CODE_LENGTH];
        let shown = match self.phase {
            GamePhase::AiFeedbackInput => CODE_LENGTH,
            _ => self.revealed_digits,
        };
        if let Some(guess) = &self.ai_guess {
            for (slot, c) in out.iter_mut().zip(guess.chars()).take(shown) {
                *slot = Some(c);
            }
        }
        out
    }

    #[must_use]
    pub fn feedback(&self) -> FeedbackDraft {
        self.feedback
    }

    #[must_use]
    pub fn guess_error(&self) -> Option<&str> {
        self.guess_error.as_deref()
    }

    #[must_use]
    pub fn feedback_error(&self) -> Option<&str> {
        self.feedback_error.as_deref()
    }

    /// Message of the last blocking alert, kept for display after dismissal.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Whether the human guess submit control is enabled.
    #[must_use]
    pub fn can_submit_guess(&self) -> bool {
        self.phase == GamePhase::HumanTurnInput && self.pending.is_none()
    }

    /// Whether the feedback submit control is enabled.
    #[must_use]
    pub fn can_submit_feedback(&self) -> bool {
        self.phase == GamePhase::AiFeedbackInput && self.pending.is_none()
    }

    // --- Transitions ---

    /// Apply one event and return the effects to run, in order.
    pub fn handle(&mut self, event: GameEvent) -> Vec<Effect> {
        let before = self.phase.clone();
        let effects = match event {
            GameEvent::GuessSubmitted { guess } => self.submit_guess(guess),
            GameEvent::GuessScored(result) => self.guess_scored(result),
            GameEvent::ResultHoldElapsed => self.result_hold_elapsed(),
            GameEvent::AiGuessReceived(result) => self.ai_guess_received(result),
            GameEvent::AiDigitRevealed => self.ai_digit_revealed(),
            GameEvent::FeedbackEdited(draft) => self.edit_feedback(draft),
            GameEvent::FeedbackSubmitted => self.submit_feedback(),
            GameEvent::FeedbackScored(result) => self.feedback_scored(result),
            GameEvent::HandoffElapsed => self.handoff_elapsed(),
            GameEvent::SummaryLoaded(summary) => self.restore(summary),
        };
        if before != self.phase {
            log::debug!("game phase {before:?} -> {:?}", self.phase);
        }
        effects
    }

    fn submit_guess(&mut self, guess: String) -> Vec<Effect> {
        if !self.can_submit_guess() {
            return self.ignore("guess submission");
        }
        if !is_complete_code(&guess) {
            self.guess_error = Some(INCOMPLETE_GUESS_MESSAGE.to_owned());
            return Vec::new();
        }
        self.guess_error = None;
        self.pending = Some(Pending::GuessResponse { guess: guess.clone() });
        vec![Effect::SubmitHumanGuess(GuessRequest { guess })]
    }

    fn guess_scored(&mut self, result: Result<HumanGuessOutcome, ServiceError>) -> Vec<Effect> {
        let guess = match (&self.phase, &self.pending) {
            (GamePhase::HumanTurnInput, Some(Pending::GuessResponse { guess })) => guess.clone(),
            _ => return self.ignore("guess response"),
        };
        self.pending = None;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("guess {guess} failed: {err}");
                self.guess_error = Some(err.user_message());
                return Vec::new();
            }
        };

        let entry = HistoryEntry::new(guess, outcome.bulls, outcome.cows);
        self.last_result = Some(entry.clone());
        self.phase = GamePhase::ResultDisplay;
        self.pending = Some(Pending::ResultHold);

        if outcome.won {
            let secret = outcome.ai_secret.unwrap_or_else(|| UNKNOWN_SECRET.to_owned());
            self.pending_win = Some((Actor::Human, secret));
            return vec![schedule(self.timing.win_reveal_ms, GameEvent::ResultHoldElapsed)];
        }

        self.human_history.append(entry);
        vec![
            Effect::ClearGuessInput,
            Effect::RevealLatest(Actor::Human),
            schedule(self.timing.result_hold_ms, GameEvent::ResultHoldElapsed),
        ]
    }

    fn result_hold_elapsed(&mut self) -> Vec<Effect> {
        if self.phase != GamePhase::ResultDisplay || self.pending != Some(Pending::ResultHold) {
            return self.ignore("result hold timer");
        }
        self.pending = None;
        match self.pending_win.take() {
            Some((winner, secret)) => self.win(winner, secret),
            None => self.start_ai_turn(),
        }
    }

    fn start_ai_turn(&mut self) -> Vec<Effect> {
        self.phase = GamePhase::AiTurnDisplay;
        self.pending = Some(Pending::AiGuess);
        self.ai_guess = None;
        self.revealed_digits = 0;
        self.alert = None;
        vec![Effect::RequestAiTurn]
    }

    fn ai_guess_received(&mut self, result: Result<AiTurnResponse, ServiceError>) -> Vec<Effect> {
        if self.phase != GamePhase::AiTurnDisplay || self.pending != Some(Pending::AiGuess) {
            return self.ignore("AI guess response");
        }
        match result {
            Ok(turn) => {
                self.ai_guess = Some(turn.ai_guess);
                self.revealed_digits = 0;
                self.pending = Some(Pending::AiReveal);
                vec![schedule(self.timing.ai_digit_ms, GameEvent::AiDigitRevealed)]
            }
            Err(err) => {
                log::warn!("AI turn request failed: {err}");
                self.pending = None;
                let message = format!("Could not get the AI's move: {}", err.user_message());
                self.alert = Some(message.clone());
                vec![Effect::Alert(message)]
            }
        }
    }

    fn ai_digit_revealed(&mut self) -> Vec<Effect> {
        if self.phase != GamePhase::AiTurnDisplay || self.pending != Some(Pending::AiReveal) {
            return self.ignore("AI reveal timer");
        }
        self.revealed_digits += 1;
        if self.revealed_digits < CODE_LENGTH {
            return vec![schedule(self.timing.ai_digit_ms, GameEvent::AiDigitRevealed)];
        }
        self.phase = GamePhase::AiFeedbackInput;
        self.pending = None;
        self.feedback = FeedbackDraft::default();
        self.feedback_error = None;
        Vec::new()
    }

    fn edit_feedback(&mut self, draft: FeedbackDraft) -> Vec<Effect> {
        if !self.can_submit_feedback() {
            return self.ignore("feedback edit");
        }
        self.feedback = draft;
        self.feedback_error = None;
        Vec::new()
    }

    fn submit_feedback(&mut self) -> Vec<Effect> {
        if !self.can_submit_feedback() {
            return self.ignore("feedback submission");
        }
        let draft = self.feedback;
        if !draft.is_valid() {
            self.feedback_error = Some(INVALID_FEEDBACK_MESSAGE.to_owned());
            return Vec::new();
        }
        self.feedback_error = None;
        self.pending = Some(Pending::FeedbackResponse(draft));
        vec![Effect::SubmitAiFeedback(FeedbackRequest { bulls: draft.bulls, cows: draft.cows })]
    }

    fn feedback_scored(&mut self, result: Result<FeedbackOutcome, ServiceError>) -> Vec<Effect> {
        let draft = match (&self.phase, &self.pending) {
            (GamePhase::AiFeedbackInput, Some(Pending::FeedbackResponse(draft))) => *draft,
            _ => return self.ignore("feedback response"),
        };
        self.pending = None;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("feedback {draft:?} failed: {err}");
                self.feedback_error = Some(err.user_message());
                return Vec::new();
            }
        };

        self.pending = Some(Pending::Handoff);
        if outcome.won {
            let secret = outcome.human_secret.unwrap_or_else(|| UNKNOWN_SECRET.to_owned());
            self.pending_win = Some((Actor::Ai, secret));
            return vec![schedule(self.timing.win_reveal_ms, GameEvent::HandoffElapsed)];
        }

        let guess = self.ai_guess.clone().unwrap_or_else(|| UNKNOWN_SECRET.to_owned());
        self.ai_history.append(HistoryEntry::new(guess, draft.bulls, draft.cows));
        self.feedback = FeedbackDraft::default();
        vec![Effect::RevealLatest(Actor::Ai), schedule(self.timing.handoff_ms, GameEvent::HandoffElapsed)]
    }

    fn handoff_elapsed(&mut self) -> Vec<Effect> {
        if self.phase != GamePhase::AiFeedbackInput || self.pending != Some(Pending::Handoff) {
            return self.ignore("hand-off timer");
        }
        self.pending = None;
        if let Some((winner, secret)) = self.pending_win.take() {
            return self.win(winner, secret);
        }
        self.phase = GamePhase::HumanTurnInput;
        self.ai_guess = None;
        self.revealed_digits = 0;
        self.guess_error = None;
        vec![Effect::FocusGuessInput]
    }

    fn win(&mut self, winner: Actor, secret: String) -> Vec<Effect> {
        log::info!("game won by {winner:?}");
        self.phase = GamePhase::GameWon { winner, secret };
        self.pending = None;
        match winner {
            Actor::Human => vec![Effect::LaunchCelebration],
            Actor::Ai => Vec::new(),
        }
    }

    /// Replay a server-side session summary into a freshly loaded page.
    fn restore(&mut self, summary: GameSummary) -> Vec<Effect> {
        let pristine = self.can_submit_guess() && self.human_history.is_empty() && self.ai_history.is_empty();
        if !pristine {
            return self.ignore("session summary");
        }
        let GameSummary { game_over, winner, mut human_guesses, mut ai_guesses, turn } = summary;
        if game_over && winner.is_none() {
            log::warn!("ignoring finished session summary without a winner");
            return Vec::new();
        }
        // Live play never logs the winning round.
        if let Some(winner) = winner.filter(|_| game_over) {
            let guesses = match winner {
                Actor::Human => &mut human_guesses,
                Actor::Ai => &mut ai_guesses,
            };
            if guesses.last().is_some_and(|entry| usize::from(entry.bulls) == CODE_LENGTH) {
                guesses.pop();
            }
        }
        self.human_history = human_guesses.into_iter().collect();
        self.ai_history = ai_guesses.into_iter().collect();
        self.last_result = self.human_history.latest().cloned();

        let mut effects = [Actor::Human, Actor::Ai]
            .into_iter()
            .filter(|actor| !self.history(*actor).is_empty())
            .map(Effect::RevealLatest)
            .collect::<Vec<_>>();

        if let Some(winner) = winner.filter(|_| game_over) {
            self.phase = GamePhase::GameWon { winner, secret: UNKNOWN_SECRET.to_owned() };
        } else if turn == Some(Actor::Ai) {
            effects.extend(self.start_ai_turn());
        }
        effects
    }

    fn ignore(&self, what: &str) -> Vec<Effect> {
        log::debug!("ignoring {what} in phase {:?} (pending {:?})", self.phase, self.pending);
        Vec::new()
    }
}

fn schedule(after_ms: u32, event: GameEvent) -> Effect {
    Effect::Schedule { after_ms, event }
}
