use super::*;

// =============================================================
// Virtual-clock harness
// =============================================================

/// Runs the machine the way the page driver does, but with a virtual clock:
/// scheduled events sit in a timer queue until `advance` passes their due time,
/// every other effect is recorded for inspection.
struct Harness {
    state: GameState,
    now_ms: u64,
    seq: u64,
    timers: Vec<(u64, u64, GameEvent)>,
    effects: Vec<Effect>,
}

impl Harness {
    fn new() -> Self {
        Self { state: GameState::new(Timing::default()), now_ms: 0, seq: 0, timers: Vec::new(), effects: Vec::new() }
    }

    fn timing(&self) -> Timing {
        Timing::default()
    }

    fn dispatch(&mut self, event: GameEvent) {
        for effect in self.state.handle(event) {
            match effect {
                Effect::Schedule { after_ms, event } => {
                    self.seq += 1;
                    self.timers.push((self.now_ms + u64::from(after_ms), self.seq, event));
                }
                other => self.effects.push(other),
            }
        }
    }

    fn advance(&mut self, ms: u32) {
        let target = self.now_ms + u64::from(ms);
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, (due, _, _))| *due <= target)
                .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                .map(|(i, _)| i);
            let Some(index) = next else {
                break;
            };
            let (due, _, event) = self.timers.remove(index);
            self.now_ms = due;
            self.dispatch(event);
        }
        self.now_ms = target;
    }

    fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    fn count(&self, wanted: impl Fn(&Effect) -> bool) -> usize {
        self.effects.iter().filter(|e| wanted(e)).count()
    }

    fn submit_guess(&mut self, guess: &str) {
        self.dispatch(GameEvent::GuessSubmitted { guess: guess.to_owned() });
    }

    fn score_guess(&mut self, bulls: u8, cows: u8) {
        self.dispatch(GameEvent::GuessScored(Ok(HumanGuessOutcome { bulls, cows, won: false, ai_secret: None })));
    }

    /// Play a non-winning human round through to the AI's feedback form.
    fn reach_feedback_input(&mut self, human_guess: &str, ai_guess: &str) {
        self.submit_guess(human_guess);
        self.score_guess(0, 1);
        self.advance(self.timing().result_hold_ms);
        self.dispatch(GameEvent::AiGuessReceived(Ok(AiTurnResponse { ai_guess: ai_guess.to_owned() })));
        self.advance(self.timing().ai_digit_ms * 4);
        assert_eq!(self.state.phase(), &GamePhase::AiFeedbackInput);
    }

    fn give_feedback(&mut self, bulls: u8, cows: u8) {
        self.dispatch(GameEvent::FeedbackEdited(FeedbackDraft { bulls, cows }));
        self.dispatch(GameEvent::FeedbackSubmitted);
    }
}

fn rejected(msg: &str) -> ServiceError {
    ServiceError::Rejected(msg.to_owned())
}

// =============================================================
// Human turn
// =============================================================

#[test]
fn starts_in_human_turn_with_submit_enabled() {
    let h = Harness::new();
    assert_eq!(h.state.phase(), &GamePhase::HumanTurnInput);
    assert!(h.state.can_submit_guess());
    assert!(!h.state.can_submit_feedback());
    assert!(h.state.history(Actor::Human).is_empty());
    assert!(h.state.history(Actor::Ai).is_empty());
}

#[test]
fn incomplete_guess_never_reaches_transport() {
    let mut h = Harness::new();
    for guess in ["", "1", "12", "123", "12345", "12a4"] {
        h.submit_guess(guess);
        assert_eq!(h.state.guess_error(), Some(INCOMPLETE_GUESS_MESSAGE));
        assert_eq!(h.state.phase(), &GamePhase::HumanTurnInput);
        assert!(h.state.can_submit_guess());
    }
    assert_eq!(h.count(|e| matches!(e, Effect::SubmitHumanGuess(_))), 0);
}

#[test]
fn complete_guess_is_sent_and_disables_submit() {
    let mut h = Harness::new();
    h.submit_guess("4071");
    assert_eq!(
        h.take_effects(),
        vec![Effect::SubmitHumanGuess(GuessRequest { guess: "4071".to_owned() })]
    );
    assert!(!h.state.can_submit_guess());
    assert_eq!(h.state.guess_error(), None);
}

#[test]
fn second_submission_while_in_flight_is_a_no_op() {
    let mut h = Harness::new();
    h.submit_guess("4071");
    h.submit_guess("4071");
    assert_eq!(h.count(|e| matches!(e, Effect::SubmitHumanGuess(_))), 1);
}

#[test]
fn rejected_guess_stays_in_turn_with_service_message() {
    let mut h = Harness::new();
    h.submit_guess("1123");
    h.dispatch(GameEvent::GuessScored(Err(rejected("All digits must be unique (no repeating digits)."))));
    assert_eq!(h.state.phase(), &GamePhase::HumanTurnInput);
    assert_eq!(h.state.guess_error(), Some("All digits must be unique (no repeating digits)."));
    assert!(h.state.can_submit_guess());
    assert!(h.state.history(Actor::Human).is_empty());
}

#[test]
fn transport_failure_uses_generic_message_and_allows_retry() {
    let mut h = Harness::new();
    h.submit_guess("1234");
    h.dispatch(GameEvent::GuessScored(Err(ServiceError::Transport("offline".to_owned()))));
    assert_eq!(h.state.guess_error(), Some(crate::net::types::TRANSPORT_FALLBACK));
    h.take_effects();
    h.submit_guess("1234");
    assert_eq!(h.count(|e| matches!(e, Effect::SubmitHumanGuess(_))), 1);
}

#[test]
fn non_winning_guess_shows_result_then_requests_ai_turn_once() {
    let mut h = Harness::new();
    h.submit_guess("1111");
    h.take_effects();
    h.score_guess(1, 1);

    assert_eq!(h.state.phase(), &GamePhase::ResultDisplay);
    assert_eq!(h.state.last_result(), Some(&HistoryEntry::new("1111", 1, 1)));
    assert_eq!(h.state.result_tier(), Some(FeedbackTier::Default));
    assert_eq!(h.state.history(Actor::Human).len(), 1);
    assert_eq!(h.take_effects(), vec![Effect::ClearGuessInput, Effect::RevealLatest(Actor::Human)]);

    h.advance(h.timing().result_hold_ms - 1);
    assert_eq!(h.state.phase(), &GamePhase::ResultDisplay);
    assert_eq!(h.count(|e| matches!(e, Effect::RequestAiTurn)), 0);

    h.advance(1);
    assert_eq!(h.state.phase(), &GamePhase::AiTurnDisplay);
    assert_eq!(h.take_effects(), vec![Effect::RequestAiTurn]);

    h.advance(60_000);
    assert!(h.take_effects().is_empty());
}

#[test]
fn winning_guess_reveals_secret_and_celebrates_once() {
    let mut h = Harness::new();
    h.submit_guess("1234");
    h.take_effects();
    h.dispatch(GameEvent::GuessScored(Ok(HumanGuessOutcome {
        bulls: 4,
        cows: 0,
        won: true,
        ai_secret: Some("5678".to_owned()),
    })));

    assert_eq!(h.state.phase(), &GamePhase::ResultDisplay);
    assert_eq!(h.state.last_result(), Some(&HistoryEntry::new("1234", 4, 0)));
    assert_eq!(h.state.result_tier(), Some(FeedbackTier::Exact));
    assert!(h.take_effects().is_empty());

    h.advance(h.timing().win_reveal_ms);
    assert_eq!(
        h.state.phase(),
        &GamePhase::GameWon { winner: Actor::Human, secret: "5678".to_owned() }
    );
    h.advance(60_000);
    assert_eq!(h.take_effects(), vec![Effect::LaunchCelebration]);
    assert!(h.state.history(Actor::Human).is_empty());
}

#[test]
fn winning_guess_without_secret_uses_placeholder() {
    let mut h = Harness::new();
    h.submit_guess("1234");
    h.dispatch(GameEvent::GuessScored(Ok(HumanGuessOutcome { bulls: 4, cows: 0, won: true, ai_secret: None })));
    h.advance(h.timing().win_reveal_ms);
    assert_eq!(
        h.state.phase(),
        &GamePhase::GameWon { winner: Actor::Human, secret: UNKNOWN_SECRET.to_owned() }
    );
}

// =============================================================
// AI turn
// =============================================================

#[test]
fn ai_guess_is_revealed_one_digit_per_tick() {
    let mut h = Harness::new();
    h.submit_guess("1111");
    h.score_guess(0, 0);
    h.advance(h.timing().result_hold_ms);
    h.dispatch(GameEvent::AiGuessReceived(Ok(AiTurnResponse { ai_guess: "0917".to_owned() })));

    assert_eq!(h.state.revealed_ai_digits(), [None; 4]);
    h.advance(h.timing().ai_digit_ms);
    assert_eq!(h.state.revealed_ai_digits(), [Some('0'), None, None, None]);
    h.advance(h.timing().ai_digit_ms * 2);
    assert_eq!(h.state.revealed_ai_digits(), [Some('0'), Some('9'), Some('1'), None]);
    assert_eq!(h.state.phase(), &GamePhase::AiTurnDisplay);

    h.advance(h.timing().ai_digit_ms);
    assert_eq!(h.state.phase(), &GamePhase::AiFeedbackInput);
    assert_eq!(h.state.revealed_ai_digits(), [Some('0'), Some('9'), Some('1'), Some('7')]);
    assert!(h.state.can_submit_feedback());
    assert_eq!(h.state.feedback(), FeedbackDraft::default());
}

#[test]
fn ai_turn_failure_alerts_and_does_not_advance() {
    let mut h = Harness::new();
    h.submit_guess("1111");
    h.score_guess(0, 0);
    h.advance(h.timing().result_hold_ms);
    h.take_effects();

    h.dispatch(GameEvent::AiGuessReceived(Err(rejected("It is not the AI's turn."))));
    let effects = h.take_effects();
    assert_eq!(effects.len(), 1);
    assert!(matches!(&effects[0], Effect::Alert(msg) if msg.contains("It is not the AI's turn.")));
    assert_eq!(h.state.phase(), &GamePhase::AiTurnDisplay);
    assert!(h.state.alert().is_some());

    h.advance(60_000);
    assert_eq!(h.state.phase(), &GamePhase::AiTurnDisplay);
    assert!(h.take_effects().is_empty());
}

// =============================================================
// AI feedback
// =============================================================

#[test]
fn invalid_feedback_is_blocked_client_side() {
    let mut h = Harness::new();
    h.reach_feedback_input("1111", "0917");
    h.take_effects();

    h.give_feedback(3, 2);
    assert_eq!(h.state.feedback_error(), Some(INVALID_FEEDBACK_MESSAGE));
    assert_eq!(h.state.phase(), &GamePhase::AiFeedbackInput);
    assert_eq!(h.count(|e| matches!(e, Effect::SubmitAiFeedback(_))), 0);
    assert!(h.state.can_submit_feedback());
}

#[test]
fn editing_feedback_clears_previous_error() {
    let mut h = Harness::new();
    h.reach_feedback_input("1111", "0917");
    h.give_feedback(4, 1);
    assert!(h.state.feedback_error().is_some());
    h.dispatch(GameEvent::FeedbackEdited(FeedbackDraft { bulls: 1, cows: 1 }));
    assert_eq!(h.state.feedback_error(), None);
}

#[test]
fn accepted_feedback_records_ai_round_and_returns_turn() {
    let mut h = Harness::new();
    h.reach_feedback_input("1111", "0917");
    h.take_effects();

    h.give_feedback(1, 2);
    assert_eq!(h.take_effects(), vec![Effect::SubmitAiFeedback(FeedbackRequest { bulls: 1, cows: 2 })]);
    assert!(!h.state.can_submit_feedback());

    h.dispatch(GameEvent::FeedbackScored(Ok(FeedbackOutcome { won: false, human_secret: None })));
    assert_eq!(h.state.history(Actor::Ai).entries(), &[HistoryEntry::new("0917", 1, 2)]);
    assert_eq!(h.state.feedback(), FeedbackDraft::default());
    assert_eq!(h.state.phase(), &GamePhase::AiFeedbackInput);
    assert_eq!(h.take_effects(), vec![Effect::RevealLatest(Actor::Ai)]);

    h.advance(h.timing().handoff_ms);
    assert_eq!(h.state.phase(), &GamePhase::HumanTurnInput);
    assert!(h.state.can_submit_guess());
    assert_eq!(h.take_effects(), vec![Effect::FocusGuessInput]);
}

#[test]
fn rejected_feedback_stays_with_message() {
    let mut h = Harness::new();
    h.reach_feedback_input("1111", "0917");
    h.give_feedback(0, 0);
    h.dispatch(GameEvent::FeedbackScored(Err(rejected(
        "Incorrect feedback! The real result is 1 Bulls, 0 Cows.",
    ))));
    assert_eq!(h.state.phase(), &GamePhase::AiFeedbackInput);
    assert_eq!(h.state.feedback_error(), Some("Incorrect feedback! The real result is 1 Bulls, 0 Cows."));
    assert!(h.state.can_submit_feedback());
    assert!(h.state.history(Actor::Ai).is_empty());
}

#[test]
fn ai_win_reveals_human_secret_without_celebration() {
    let mut h = Harness::new();
    h.reach_feedback_input("1111", "1234");
    h.give_feedback(4, 0);
    h.dispatch(GameEvent::FeedbackScored(Ok(FeedbackOutcome { won: true, human_secret: Some("1234".to_owned()) })));
    assert_eq!(h.state.phase(), &GamePhase::AiFeedbackInput);

    h.advance(h.timing().win_reveal_ms);
    assert_eq!(
        h.state.phase(),
        &GamePhase::GameWon { winner: Actor::Ai, secret: "1234".to_owned() }
    );
    assert_eq!(h.count(|e| matches!(e, Effect::LaunchCelebration)), 0);
    assert!(h.state.history(Actor::Ai).is_empty());
}

// =============================================================
// Whole-game properties
// =============================================================

#[test]
fn history_counts_track_successful_non_winning_rounds() {
    let mut h = Harness::new();
    let rounds = [("1234", "5678"), ("2345", "6789"), ("3456", "7890")];
    for (n, (human, ai)) in rounds.iter().enumerate() {
        h.reach_feedback_input(human, ai);
        h.give_feedback(0, 1);
        h.dispatch(GameEvent::FeedbackScored(Ok(FeedbackOutcome { won: false, human_secret: None })));
        h.advance(h.timing().handoff_ms);

        assert_eq!(h.state.history(Actor::Human).len(), n + 1);
        assert_eq!(h.state.history(Actor::Ai).len(), n + 1);
    }
    let ai_guesses = h
        .state
        .history(Actor::Ai)
        .entries()
        .iter()
        .map(|e| e.guess.clone())
        .collect::<Vec<_>>();
    assert_eq!(ai_guesses, vec!["5678", "6789", "7890"]);
}

#[test]
fn failed_submissions_do_not_grow_history() {
    let mut h = Harness::new();
    h.submit_guess("1234");
    h.dispatch(GameEvent::GuessScored(Err(rejected("nope"))));
    h.submit_guess("12");
    assert!(h.state.history(Actor::Human).is_empty());
}

#[test]
fn late_and_out_of_phase_events_are_ignored() {
    let mut h = Harness::new();
    h.score_guess(2, 2);
    h.dispatch(GameEvent::ResultHoldElapsed);
    h.dispatch(GameEvent::AiGuessReceived(Ok(AiTurnResponse { ai_guess: "1234".to_owned() })));
    h.dispatch(GameEvent::FeedbackSubmitted);
    h.dispatch(GameEvent::HandoffElapsed);
    assert_eq!(h.state.phase(), &GamePhase::HumanTurnInput);
    assert!(h.state.history(Actor::Human).is_empty());
    assert!(h.take_effects().is_empty());
    assert!(h.timers.is_empty());
}

#[test]
fn won_game_ignores_everything() {
    let mut h = Harness::new();
    h.submit_guess("1234");
    h.dispatch(GameEvent::GuessScored(Ok(HumanGuessOutcome {
        bulls: 4,
        cows: 0,
        won: true,
        ai_secret: Some("1234".to_owned()),
    })));
    h.advance(h.timing().win_reveal_ms);
    h.take_effects();

    h.submit_guess("5678");
    h.dispatch(GameEvent::FeedbackEdited(FeedbackDraft { bulls: 1, cows: 0 }));
    h.dispatch(GameEvent::SummaryLoaded(GameSummary::default()));
    assert!(matches!(h.state.phase(), GamePhase::GameWon { .. }));
    assert!(h.take_effects().is_empty());
}

// =============================================================
// Session resume
// =============================================================

#[test]
fn summary_restores_histories_and_resumes_ai_turn() {
    let mut h = Harness::new();
    h.dispatch(GameEvent::SummaryLoaded(GameSummary {
        game_over: false,
        winner: None,
        human_guesses: vec![HistoryEntry::new("1234", 0, 2)],
        ai_guesses: vec![],
        turn: Some(Actor::Ai),
    }));
    assert_eq!(h.state.history(Actor::Human).len(), 1);
    assert_eq!(h.state.phase(), &GamePhase::AiTurnDisplay);
    assert_eq!(h.take_effects(), vec![Effect::RevealLatest(Actor::Human), Effect::RequestAiTurn]);
}

#[test]
fn summary_of_finished_game_shows_winner() {
    let mut h = Harness::new();
    h.dispatch(GameEvent::SummaryLoaded(GameSummary {
        game_over: true,
        winner: Some(Actor::Ai),
        human_guesses: vec![],
        ai_guesses: vec![HistoryEntry::new("1234", 4, 0)],
        turn: Some(Actor::Ai),
    }));
    assert_eq!(
        h.state.phase(),
        &GamePhase::GameWon { winner: Actor::Ai, secret: UNKNOWN_SECRET.to_owned() }
    );
    assert_eq!(h.count(|e| matches!(e, Effect::LaunchCelebration)), 0);
}

#[test]
fn resumed_human_win_matches_live_history() {
    let mut live = Harness::new();
    live.reach_feedback_input("5678", "0123");
    live.give_feedback(0, 0);
    live.dispatch(GameEvent::FeedbackScored(Ok(FeedbackOutcome { won: false, human_secret: None })));
    live.advance(live.timing().handoff_ms);
    live.submit_guess("1234");
    live.dispatch(GameEvent::GuessScored(Ok(HumanGuessOutcome {
        bulls: 4,
        cows: 0,
        won: true,
        ai_secret: Some("1234".to_owned()),
    })));
    live.advance(live.timing().win_reveal_ms);
    assert!(matches!(live.state.phase(), GamePhase::GameWon { winner: Actor::Human, .. }));

    let mut resumed = Harness::new();
    resumed.dispatch(GameEvent::SummaryLoaded(GameSummary {
        game_over: true,
        winner: Some(Actor::Human),
        human_guesses: vec![HistoryEntry::new("5678", 0, 1), HistoryEntry::new("1234", 4, 0)],
        ai_guesses: vec![HistoryEntry::new("0123", 0, 0)],
        turn: Some(Actor::Human),
    }));

    assert_eq!(resumed.state.history(Actor::Human), live.state.history(Actor::Human));
    assert_eq!(resumed.state.history(Actor::Ai), live.state.history(Actor::Ai));
    assert_eq!(resumed.state.history(Actor::Human).len(), 1);
}

#[test]
fn resumed_ai_win_drops_only_the_winning_round() {
    let mut h = Harness::new();
    h.dispatch(GameEvent::SummaryLoaded(GameSummary {
        game_over: true,
        winner: Some(Actor::Ai),
        human_guesses: vec![HistoryEntry::new("1234", 4, 0)],
        ai_guesses: vec![HistoryEntry::new("9876", 1, 2), HistoryEntry::new("5678", 4, 0)],
        turn: Some(Actor::Human),
    }));
    assert_eq!(h.state.history(Actor::Ai).len(), 1);
    assert_eq!(h.state.history(Actor::Ai).latest(), Some(&HistoryEntry::new("9876", 1, 2)));
    // Only the winner's log is trimmed.
    assert_eq!(h.state.history(Actor::Human).len(), 1);
}

#[test]
fn finished_summary_without_winner_is_ignored() {
    let mut h = Harness::new();
    h.dispatch(GameEvent::SummaryLoaded(GameSummary {
        game_over: true,
        winner: None,
        human_guesses: vec![HistoryEntry::new("1234", 1, 1)],
        ai_guesses: vec![HistoryEntry::new("5678", 0, 0)],
        turn: Some(Actor::Ai),
    }));
    assert_eq!(h.state.phase(), &GamePhase::HumanTurnInput);
    assert!(h.state.history(Actor::Human).is_empty());
    assert!(h.state.history(Actor::Ai).is_empty());
    assert!(h.state.last_result().is_none());
    assert!(h.take_effects().is_empty());
}

#[test]
fn summary_after_play_started_is_ignored() {
    let mut h = Harness::new();
    h.submit_guess("1234");
    h.dispatch(GameEvent::SummaryLoaded(GameSummary {
        human_guesses: vec![HistoryEntry::new("9999", 0, 0)],
        turn: Some(Actor::Ai),
        ..GameSummary::default()
    }));
    assert!(h.state.history(Actor::Human).is_empty());
    assert_eq!(h.state.phase(), &GamePhase::HumanTurnInput);
}

// =============================================================
// Presentation helpers
// =============================================================

#[test]
fn feedback_tier_follows_bulls() {
    assert_eq!(FeedbackTier::for_bulls(4), FeedbackTier::Exact);
    assert_eq!(FeedbackTier::for_bulls(3), FeedbackTier::Hot);
    assert_eq!(FeedbackTier::for_bulls(2), FeedbackTier::Hot);
    assert_eq!(FeedbackTier::for_bulls(1), FeedbackTier::Default);
    assert_eq!(FeedbackTier::for_bulls(0), FeedbackTier::Default);
    assert_ne!(FeedbackTier::Exact.css_class(), FeedbackTier::Hot.css_class());
    assert_ne!(FeedbackTier::Hot.css_class(), FeedbackTier::Default.css_class());
}

#[test]
fn feedback_draft_validity() {
    assert!(FeedbackDraft { bulls: 4, cows: 0 }.is_valid());
    assert!(FeedbackDraft { bulls: 2, cows: 2 }.is_valid());
    assert!(!FeedbackDraft { bulls: 3, cows: 2 }.is_valid());
}

#[test]
fn actor_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Actor::Ai).unwrap(), "\"ai\"");
    assert_eq!(serde_json::from_str::<Actor>("\"human\"").unwrap(), Actor::Human);
    assert_eq!(Actor::Human.label(), "You");
}
