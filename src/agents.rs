//! Agents: pluggable players (bots, potentially humans via other frontends).
//!
//! This module introduces a small trait `PlayerAgent` and a minimal manager
//! `AgentTable` that coordinates which agent controls which seat. It lives in
//! the library so UIs (TUI/GUI) remain thin and scene logic does not need to
//! implement bot coordination.

use crate::bidding::{BidError, RaiseResponse, Stake};
use crate::engine::GameEngine;
use crate::game::{Phase, PlayError};
use core::fmt;
use std::time::{Duration, Instant};

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// Seat-level action intents, typically produced by a UI for a human player.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum Action {
    /// Play the card at this position in the seat's hand.
    Play(usize),
    /// Call truco, raising the hand to the given stake.
    CallTruco(Stake),
    /// Accept the pending raise.
    Accept,
    /// Decline the pending raise, conceding the hand at the old stake.
    Decline,
    /// Answer the pending raise with a higher one.
    Counter(Stake),
}

/// Errors an agent action can surface: either a play or a bid was rejected.
/// All are recoverable; the engine state is unchanged and the seat may try
/// again.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error(transparent)]
    Play(#[from] PlayError),
    #[error(transparent)]
    Bid(#[from] BidError),
}

/// The seat expected to act next: normally the seat about to play a card,
/// but while a truco call is pending it is a seat of the team that must
/// answer: the current seat if it belongs to that team, otherwise the seat
/// right after it (seats alternate teams).
pub fn acting_seat(engine: &dyn GameEngine) -> usize {
    let current = engine.current();
    match engine.pending_raise() {
        Some(pending) => {
            let responder = pending.by.opponent();
            if engine.team_of(current) == responder {
                current
            } else {
                (current + 1) % engine.num_players().max(1)
            }
        }
        None => current,
    }
}

/// A seat controller that can act for a player when it is their turn.
pub trait PlayerAgent {
    /// Called when `seat` is the acting seat. Implementations may throttle
    /// internally.
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, ActionError>;
    /// The kind of this agent (human, bot, etc.).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally receive a seat-intent action; default is to ignore and return false.
    fn receive(&mut self, _action: Action) -> bool {
        false
    }
}

mod bots;

pub use bots::{BotAgent, BotProfile, Difficulty};

fn dispatch(engine: &mut dyn GameEngine, seat: usize, action: Action) -> Result<(), ActionError> {
    let team = engine.team_of(seat);
    match action {
        Action::Play(index) => engine.play_card(index)?,
        Action::CallTruco(to) => engine.call_truco(team, to)?,
        Action::Accept => engine.respond_truco(team, RaiseResponse::Accept)?,
        Action::Decline => engine.respond_truco(team, RaiseResponse::Decline)?,
        Action::Counter(to) => engine.respond_truco(team, RaiseResponse::Counter(to))?,
    }
    Ok(())
}

/// A simple agent that executes user-intended actions when it's their turn.
pub struct HumanAgent {
    pending: Option<Action>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self { pending: None }
    }
}

impl Default for HumanAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    fn receive(&mut self, action: Action) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(action);
        true
    }
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, ActionError> {
        if matches!(engine.phase(), Phase::Resolved) {
            self.pending = None;
            return Ok(false);
        }
        if acting_seat(engine) != seat {
            return Ok(false);
        }
        if let Some(act) = self.pending.take() {
            return dispatch(engine, seat, act).map(|_| true);
        }
        Ok(false)
    }
}

/// Manages a set of optional agents, one per seat, and drives the agent at
/// the acting seat when appropriate.
pub struct AgentTable {
    seats: Vec<Option<Box<dyn PlayerAgent>>>,
    min_action_delay: Duration,
    next_action_at: Option<Instant>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<char> =
            self.seats.iter().map(|a| if a.is_some() { 'B' } else { '-' }).collect();
        write!(f, "AgentTable({})", flags.into_iter().collect::<String>())
    }
}

impl AgentTable {
    /// Create a table with `n` seats, all empty.
    pub fn for_seats(n: usize) -> Self {
        let mut seats = Vec::with_capacity(n);
        for _ in 0..n {
            seats.push(None);
        }
        Self { seats, min_action_delay: Duration::from_millis(0), next_action_at: None }
    }

    /// Ensure the table has room for `n` seats.
    pub fn ensure_len(&mut self, n: usize) {
        if self.seats.len() < n {
            self.seats.resize_with(n, || None);
        }
        if self.seats.len() > n {
            self.seats.truncate(n);
        }
    }

    /// Assign an agent to a seat (or remove when `None`).
    pub fn set_agent(&mut self, seat: usize, agent: Option<Box<dyn PlayerAgent>>) {
        if seat >= self.seats.len() {
            self.ensure_len(seat + 1);
        }
        self.seats[seat] = agent;
    }

    /// Get immutable access to an agent for inspection.
    pub fn agent(&self, seat: usize) -> Option<&dyn PlayerAgent> {
        self.seats.get(seat).and_then(|a| a.as_deref())
    }

    /// Return the kind of agent at a seat, if any.
    pub fn agent_kind(&self, seat: usize) -> Option<AgentKind> {
        self.seats.get(seat).and_then(|a| a.as_deref().map(|ag| ag.kind()))
    }

    /// Send an action intent to a specific seat agent, if any.
    pub fn receive(&mut self, seat: usize, action: Action) -> bool {
        if let Some(Some(agent)) = self.seats.get_mut(seat) {
            return agent.receive(action);
        }
        false
    }

    /// Whether a seat currently has an agent assigned.
    pub fn has_agent(&self, seat: usize) -> bool {
        self.seats.get(seat).map(|a| a.is_some()).unwrap_or(false)
    }

    /// Whether any agents are currently assigned.
    pub fn any_agents(&self) -> bool {
        self.seats.iter().any(|a| a.is_some())
    }

    /// Whether any non-human (bot) agents are assigned.
    pub fn any_bots(&self) -> bool {
        self.seats.iter().filter_map(|a| a.as_deref()).any(|ag| matches!(ag.kind(), AgentKind::Bot))
    }

    /// Set a global minimum delay between any actions at the table.
    pub fn set_min_action_delay_ms(&mut self, delay_ms: u64) {
        self.min_action_delay = Duration::from_millis(delay_ms);
    }

    /// Drive the agent assigned to the acting seat, if any.
    pub fn on_turn(&mut self, engine: &mut dyn GameEngine) -> Result<bool, ActionError> {
        let seat = acting_seat(engine);
        if let Some(Some(agent)) = self.seats.get_mut(seat) {
            let is_bot = matches!(agent.kind(), AgentKind::Bot);
            let now = Instant::now();
            if is_bot {
                if let Some(next) = self.next_action_at {
                    if now < next {
                        return Ok(false);
                    }
                }
            }
            let acted = agent.on_turn(engine, seat)?;
            if acted && self.min_action_delay > Duration::from_millis(0) {
                self.next_action_at = Some(now + self.min_action_delay);
            }
            return Ok(acted);
        }
        Ok(false)
    }

    /// Remove all agents.
    pub fn clear(&mut self) {
        for a in &mut self.seats {
            *a = None;
        }
        self.next_action_at = None;
    }
}
