use crate::bidding::{PendingRaise, Stake};
use crate::cards::Card;
use crate::engine::GameEngine;
use crate::game::Phase;
use crate::score::TeamId;
use crate::trick;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::time::{Duration, Instant};

use super::{acting_seat, dispatch, Action, ActionError, AgentKind, PlayerAgent};

/// Difficulty tiers for bot play style and mistake rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Configuration for a bot's play style and randomness.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BotProfile {
    pub difficulty: Difficulty,
    /// Propensity to call truco with a strong hand.
    pub boldness: f64,
    /// Propensity to raise with a weak hand anyway.
    pub bluff: f64,
    /// Willingness to accept or counter a raise instead of declining.
    pub nerve: f64,
    /// Decision noise.
    pub tilt: f64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    /// Create a profile with tuned defaults for a difficulty tier.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let (boldness, bluff, nerve, tilt) = match difficulty {
            Difficulty::Easy => (0.1, 0.02, 0.35, 0.3),
            Difficulty::Medium => (0.25, 0.05, 0.5, 0.15),
            Difficulty::Hard => (0.4, 0.08, 0.62, 0.08),
            Difficulty::Expert => (0.5, 0.12, 0.7, 0.05),
        };
        Self {
            difficulty,
            boldness,
            bluff,
            nerve,
            tilt,
            min_delay_ms: 0,
            max_delay_ms: 0,
            rng_seed: None,
        }
    }

    /// Set a deterministic RNG seed for reproducible decisions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for BotProfile {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::Medium)
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng }
    }
}

#[derive(Debug, Clone)]
struct BotDecision {
    action: Action,
    #[allow(dead_code)]
    confidence: f64,
    #[allow(dead_code)]
    reason: &'static str,
}

struct BotContext<'a> {
    hand: &'a [Card],
    /// The card currently taking the trick, when the opposing team holds it.
    to_beat: Option<Card>,
    stake: Stake,
    pending: Option<PendingRaise>,
    tricks_won: [u8; 2],
    team: TeamId,
}

struct BotPolicy;

impl BotPolicy {
    fn decide(ctx: &BotContext<'_>, profile: &BotProfile, state: &mut BotState) -> BotDecision {
        let strength = estimate_strength(ctx.hand);
        let noise = state.rng.random_range(-1.0..=1.0) * profile.tilt * 0.1;
        let adjusted = (strength + noise).clamp(0.0, 1.0);

        if ctx.pending.is_some() {
            return decide_answer(ctx, state, profile, adjusted);
        }

        // Occasionally escalate before playing: genuinely strong hands, plus
        // the odd bluff, and more readily when a trick is already banked.
        if let Some(target) = next_raise(ctx.stake) {
            let banked = ctx.tricks_won[ctx.team.index()] > 0;
            let drive = profile.boldness + if banked { 0.15 } else { 0.0 };
            let wants_value = adjusted > 0.7 && state.rng.random::<f64>() < drive;
            let wants_bluff = adjusted < 0.35 && state.rng.random::<f64>() < profile.bluff;
            if wants_value || wants_bluff {
                return BotDecision {
                    action: Action::CallTruco(target),
                    confidence: adjusted,
                    reason: if wants_value { "value_raise" } else { "bluff_raise" },
                };
            }
        }

        let index = choose_card_index(ctx.hand, ctx.to_beat);
        BotDecision { action: Action::Play(index), confidence: adjusted, reason: "play" }
    }
}

fn decide_answer(
    ctx: &BotContext<'_>,
    state: &mut BotState,
    profile: &BotProfile,
    adjusted: f64,
) -> BotDecision {
    let pending = match ctx.pending {
        Some(p) => p,
        None => {
            // Caller checked; fall back to shedding a card.
            let index = choose_card_index(ctx.hand, ctx.to_beat);
            return BotDecision { action: Action::Play(index), confidence: 0.0, reason: "play" };
        }
    };
    let accept_threshold = (0.55 - profile.nerve * 0.3).clamp(0.1, 0.9);
    if adjusted < accept_threshold {
        return BotDecision {
            action: Action::Decline,
            confidence: 1.0 - adjusted,
            reason: "decline",
        };
    }
    if let Some(counter) = next_raise(pending.to) {
        if adjusted > 0.85 && state.rng.random::<f64>() < profile.nerve * 0.4 {
            return BotDecision {
                action: Action::Counter(counter),
                confidence: adjusted,
                reason: "counter_raise",
            };
        }
    }
    BotDecision { action: Action::Accept, confidence: adjusted, reason: "accept" }
}

/// The cheapest legal raise strictly above `current`, if any.
fn next_raise(current: Stake) -> Option<Stake> {
    Stake::RAISES.into_iter().find(|&s| s > current)
}

/// Hand quality in 0..=1, weighting the best card over the average: one
/// manilha carries a weak hand further than three middling cards.
fn estimate_strength(hand: &[Card]) -> f64 {
    if hand.is_empty() {
        return 0.0;
    }
    let top = 43.0; // strongest manilha
    let best = hand.iter().map(|&c| trick::strength(c)).max().unwrap_or(0) as f64;
    let mean =
        hand.iter().map(|&c| trick::strength(c) as f64).sum::<f64>() / hand.len() as f64;
    ((best / top) * 0.7 + (mean / top) * 0.3).clamp(0.0, 1.0)
}

/// Pick a card position: beat the trick as cheaply as possible, shed the
/// weakest card when the trick is lost or already ours, lead with the
/// strongest card otherwise.
fn choose_card_index(hand: &[Card], to_beat: Option<Card>) -> usize {
    if hand.is_empty() {
        return 0;
    }
    match to_beat {
        Some(target) => {
            let cheapest_winner = hand
                .iter()
                .enumerate()
                .filter(|&(_, &c)| trick::beats(c, target))
                .min_by_key(|&(_, &c)| trick::strength(c))
                .map(|(i, _)| i);
            match cheapest_winner {
                Some(i) => i,
                None => weakest_index(hand),
            }
        }
        None => strongest_index(hand),
    }
}

fn weakest_index(hand: &[Card]) -> usize {
    hand.iter()
        .enumerate()
        .min_by_key(|&(_, &c)| trick::strength(c))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn strongest_index(hand: &[Card]) -> usize {
    hand.iter()
        .enumerate()
        .max_by_key(|&(_, &c)| trick::strength(c))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// A flexible bot agent with adjustable profile and difficulty tiers.
pub struct BotAgent {
    profile: BotProfile,
    state: BotState,
    next_action_at: Option<Instant>,
}

impl BotAgent {
    pub fn new(profile: BotProfile) -> Self {
        let state = BotState::new(profile.rng_seed);
        Self { profile, state, next_action_at: None }
    }
}

impl PlayerAgent for BotAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, ActionError> {
        if matches!(engine.phase(), Phase::Resolved) {
            return Ok(false);
        }
        if acting_seat(engine) != seat {
            return Ok(false);
        }
        let now = Instant::now();
        let delay = choose_delay_ms(&self.profile, &mut self.state);
        if delay > 0 {
            match self.next_action_at {
                None => {
                    self.next_action_at = Some(now + Duration::from_millis(delay));
                    return Ok(false);
                }
                Some(next) if now < next => {
                    return Ok(false);
                }
                Some(_) => {}
            }
        }
        self.next_action_at = None;

        let team = engine.team_of(seat);
        let hand: Vec<Card> = engine.hand(seat).to_vec();
        let to_beat = match engine.trick_winning_team() {
            Some(holder) if holder != team => engine.trick_winning_card(),
            _ => None,
        };
        let ctx = BotContext {
            hand: &hand,
            to_beat,
            stake: engine.stake(),
            pending: engine.pending_raise(),
            tricks_won: engine.tricks_won(),
            team,
        };

        let decision = BotPolicy::decide(&ctx, &self.profile, &mut self.state);
        dispatch(engine, seat, decision.action).map(|_| true)
    }
}

fn choose_delay_ms(profile: &BotProfile, state: &mut BotState) -> u64 {
    let min = profile.min_delay_ms;
    let max = profile.max_delay_ms.max(min);
    if max == min {
        min
    } else {
        state.rng.random_range(min..=max)
    }
}
