// Minimal game engine API boundary. This trait exposes the core truco
// actions and queries so UIs (TUI, GUI, bots) can drive a game without
// depending on engine internals. It is implemented for the core `Game` type.

use crate::bidding::{BidError, PendingRaise, RaiseResponse, Stake};
use crate::cards::Card;
use crate::game::{Phase, PlayError};
use crate::score::TeamId;

pub trait GameEngine {
    // Hand lifecycle
    fn deal_hand(&mut self);

    // Player and team actions
    fn play_card(&mut self, index: usize) -> Result<(), PlayError>;
    fn call_truco(&mut self, team: TeamId, to: Stake) -> Result<(), BidError>;
    fn respond_truco(&mut self, team: TeamId, response: RaiseResponse) -> Result<(), BidError>;

    // Queries
    fn phase(&self) -> Phase;
    fn current(&self) -> usize;
    fn leader(&self) -> usize;
    fn num_players(&self) -> usize;
    fn team_of(&self, seat: usize) -> TeamId;
    fn hand(&self, seat: usize) -> &[Card];
    fn stake(&self) -> Stake;
    fn pending_raise(&self) -> Option<PendingRaise>;
    fn tricks_won(&self) -> [u8; 2];
    fn trick_winning_card(&self) -> Option<Card>;
    fn trick_winning_team(&self) -> Option<TeamId>;
    fn hand_winner(&self) -> Option<TeamId>;
    fn winner(&self) -> Option<TeamId>;
    fn totals(&self) -> [u16; 2];
}

impl GameEngine for crate::game::Game {
    fn deal_hand(&mut self) {
        self.deal_hand();
    }

    fn play_card(&mut self, index: usize) -> Result<(), PlayError> {
        self.play_card(index)
    }
    fn call_truco(&mut self, team: TeamId, to: Stake) -> Result<(), BidError> {
        self.call_truco(team, to)
    }
    fn respond_truco(&mut self, team: TeamId, response: RaiseResponse) -> Result<(), BidError> {
        self.respond_truco(team, response)
    }

    fn phase(&self) -> Phase {
        self.phase()
    }
    fn current(&self) -> usize {
        self.current()
    }
    fn leader(&self) -> usize {
        self.leader()
    }
    fn num_players(&self) -> usize {
        self.num_players()
    }
    fn team_of(&self, seat: usize) -> TeamId {
        self.team_of(seat)
    }
    fn hand(&self, seat: usize) -> &[Card] {
        self.players()[seat].hand()
    }
    fn stake(&self) -> Stake {
        self.stake()
    }
    fn pending_raise(&self) -> Option<PendingRaise> {
        self.pending_raise()
    }
    fn tricks_won(&self) -> [u8; 2] {
        self.tricks_won()
    }
    fn trick_winning_card(&self) -> Option<Card> {
        self.trick().map(|t| t.winning_card())
    }
    fn trick_winning_team(&self) -> Option<TeamId> {
        self.trick().map(|t| t.winning_team())
    }
    fn hand_winner(&self) -> Option<TeamId> {
        self.hand_winner()
    }
    fn winner(&self) -> Option<TeamId> {
        self.winner()
    }
    fn totals(&self) -> [u16; 2] {
        self.scoreboard().totals()
    }
}
