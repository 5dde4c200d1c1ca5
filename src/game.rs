use crate::bidding::{BidError, BidOutcome, Bidding, PendingRaise, RaiseResponse, Stake};
use crate::cards::Card;
use crate::dealer::{CardSource, RandomDealer, HAND_SIZE};
use crate::score::{Scoreboard, TeamId};
use crate::trick::Trick;
use std::fmt;

/// A hand is decided over at most this many tricks.
pub const TRICKS_PER_HAND: u8 = 3;

/// Where the hand in progress stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// Cards are dealt; the first card of the hand has not been played yet.
    Dealt,
    /// Trick `1..=3` has at least one card on the table.
    Trick(u8),
    /// The last hand has been awarded (or none dealt yet); waiting for the
    /// next deal.
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventVerb {
    HandDealt,
    CardPlayed,
    TrickWon,
    StakeRaised,
    RaiseAccepted,
    RaiseDeclined,
    HandWon,
    GameWon,
}

impl EventVerb {
    pub fn label(self) -> &'static str {
        match self {
            EventVerb::HandDealt => "Deal",
            EventVerb::CardPlayed => "Play",
            EventVerb::TrickWon => "Trick",
            EventVerb::StakeRaised => "Truco to",
            EventVerb::RaiseAccepted => "Accept",
            EventVerb::RaiseDeclined => "Decline",
            EventVerb::HandWon => "Hand",
            EventVerb::GameWon => "Game",
        }
    }
}

/// One line of the engine's observational feed: everything a presentation
/// layer needs to narrate tricks, bids and scores. Recording is append-only
/// and never influences play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct EventEntry {
    pub verb: EventVerb,
    pub team: Option<TeamId>,
    pub seat: Option<usize>,
    pub card: Option<Card>,
    pub points: Option<u16>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayError {
    #[error("no play is expected right now")]
    OutOfTurn,
    #[error("card index out of range: hand has {hand_len} cards, got {index}")]
    InvalidCardSelection { hand_len: usize, index: usize },
}

/// A seated player: display name plus the cards still in hand.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Vec<Card>,
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards still held. Order may change after a play: removal swaps the
    /// last card into the vacated slot.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn play(&mut self, index: usize) -> Card {
        self.hand.swap_remove(index)
    }
}

/// The round engine: owns the seats, the scoreboard, the bidding state and
/// the injected card source, and drives hands of three tricks each.
///
/// Seats are interleaved between the two teams (even seats are team one,
/// odd seats team two), so consecutive seats always alternate sides. Within
/// a trick every seat plays exactly once, clockwise from the trick leader;
/// the seat that played the winning card leads the next trick, and the seat
/// leading the first trick rotates by one each hand.
///
/// ```
/// use truco_rs::dealer::StackedDealer;
/// use truco_rs::cards::parse_cards;
/// use truco_rs::game::{Game, Phase};
///
/// let script = parse_cards("3c 2c Kh 4d 5d 6d").unwrap();
/// let mut game = Game::with_source(1, Box::new(StackedDealer::new(script)));
/// game.deal_hand();
/// assert_eq!(game.phase(), Phase::Dealt);
/// game.play_card(0).unwrap(); // seat 0 leads 3c
/// game.play_card(0).unwrap(); // seat 1 answers 4d
/// assert_eq!(game.tricks_won(), [1, 0]);
/// ```
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) source: Box<dyn CardSource>,
    pub(crate) scoreboard: Scoreboard,
    pub(crate) bidding: Bidding,
    pub(crate) phase: Phase,
    /// Seat leading the first trick of the current hand.
    pub(crate) hand_leader: usize,
    /// Seat leading the trick in progress.
    pub(crate) leader: usize,
    /// Seat expected to play next.
    pub(crate) current: usize,
    pub(crate) plays_in_trick: usize,
    pub(crate) trick: Option<Trick>,
    pub(crate) tricks_won: [u8; 2],
    pub(crate) first_trick_winner: Option<TeamId>,
    pub(crate) hand_winner: Option<TeamId>,
    hands_dealt: u32,
    history: Vec<EventEntry>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("tricks_won", &self.tricks_won)
            .field("stake", &self.bidding.stake())
            .field("totals", &self.scoreboard.totals())
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Table with `players_per_team` seats per side (clamped to 1..=3) and
    /// an entropy-seeded random card source.
    pub fn new(players_per_team: usize) -> Self {
        Self::with_source(players_per_team, Box::new(RandomDealer::new()))
    }

    /// Table with an explicit card source (scripted tests, seeded replays).
    pub fn with_source(players_per_team: usize, source: Box<dyn CardSource>) -> Self {
        let per_team = players_per_team.clamp(1, 3);
        let players = (1..=per_team * 2)
            .map(|i| Player { name: format!("P{i}"), hand: Vec::new() })
            .collect();
        Self {
            players,
            source,
            scoreboard: Scoreboard::new(),
            bidding: Bidding::new(),
            phase: Phase::Resolved,
            hand_leader: 0,
            leader: 0,
            current: 0,
            plays_in_trick: 0,
            trick: None,
            tricks_won: [0, 0],
            first_trick_winner: None,
            hand_winner: None,
            hands_dealt: 0,
            history: Vec::new(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn players_per_team(&self) -> usize {
        self.players.len() / 2
    }

    /// Which side a seat plays for: even seats team one, odd seats team two.
    pub fn team_of(&self, seat: usize) -> TeamId {
        if seat % 2 == 0 {
            TeamId::One
        } else {
            TeamId::Two
        }
    }

    pub fn set_player_name(&mut self, seat: usize, name: impl Into<String>) {
        if let Some(p) = self.players.get_mut(seat) {
            p.name = name.into();
        }
    }

    /// Override which seat leads the first trick of the next hand.
    pub fn set_hand_leader(&mut self, seat: usize) {
        if !self.players.is_empty() {
            self.hand_leader = seat % self.players.len();
            self.hands_dealt = 0;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn leader(&self) -> usize {
        self.leader
    }

    pub fn hand_leader(&self) -> usize {
        self.hand_leader
    }

    pub fn stake(&self) -> Stake {
        self.bidding.stake()
    }

    pub fn pending_raise(&self) -> Option<PendingRaise> {
        self.bidding.pending()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Tricks taken so far this hand, indexed by team.
    pub fn tricks_won(&self) -> [u8; 2] {
        self.tricks_won
    }

    /// Winner of the most recently resolved hand.
    pub fn hand_winner(&self) -> Option<TeamId> {
        self.hand_winner
    }

    /// The team that has won the game, if any. Terminal: once set, no
    /// further hands are dealt.
    pub fn winner(&self) -> Option<TeamId> {
        self.scoreboard.winner()
    }

    /// Running winner of the trick in progress.
    pub fn trick(&self) -> Option<Trick> {
        self.trick
    }

    /// Number of the trick in progress (1..=3), if one is under way.
    pub fn trick_no(&self) -> Option<u8> {
        match self.phase {
            Phase::Trick(no) => Some(no),
            Phase::Dealt | Phase::Resolved => None,
        }
    }

    pub fn history_recent(&self, n: usize) -> Vec<EventEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        let start = len.saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<EventEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Deal three fresh cards to every seat and open a new hand.
    ///
    /// Resets the stake and the per-hand trick counts, and rotates the seat
    /// that leads the first trick. A no-op once the game has a winner.
    pub fn deal_hand(&mut self) {
        if self.scoreboard.winner().is_some() {
            return;
        }
        for p in &mut self.players {
            p.hand = self.source.deal(HAND_SIZE);
        }
        self.bidding.reset();
        self.tricks_won = [0, 0];
        self.first_trick_winner = None;
        self.hand_winner = None;
        self.trick = None;
        self.plays_in_trick = 0;
        if self.hands_dealt > 0 && !self.players.is_empty() {
            self.hand_leader = (self.hand_leader + 1) % self.players.len();
        }
        self.hands_dealt += 1;
        self.leader = self.hand_leader;
        self.current = self.hand_leader;
        self.phase = Phase::Dealt;
        self.record(EventVerb::HandDealt, None, None, None, None);
    }

    /// The current seat plays the card at `index` in its hand.
    ///
    /// Rejected (state unchanged) when no hand is in progress or while a
    /// truco call awaits its answer, and when the index does not refer to a
    /// held card; the input collaborator re-prompts on
    /// [`PlayError::InvalidCardSelection`]. Playing from an empty hand
    /// cannot happen: each seat gets exactly three turns per hand.
    pub fn play_card(&mut self, index: usize) -> Result<(), PlayError> {
        match self.phase {
            Phase::Dealt | Phase::Trick(_) => {}
            Phase::Resolved => return Err(PlayError::OutOfTurn),
        }
        if self.bidding.pending().is_some() {
            return Err(PlayError::OutOfTurn);
        }
        let seat = self.current;
        let hand_len = self.players[seat].hand.len();
        if index >= hand_len {
            return Err(PlayError::InvalidCardSelection { hand_len, index });
        }

        let trick_no = match self.phase {
            Phase::Trick(no) => no,
            _ => {
                self.phase = Phase::Trick(1);
                1
            }
        };
        let card = self.players[seat].play(index);
        let team = self.team_of(seat);
        match self.trick.as_mut() {
            Some(t) => t.fold(card, seat, team),
            None => self.trick = Some(Trick::open(card, seat, team)),
        }
        self.record(EventVerb::CardPlayed, Some(team), Some(seat), Some(card), None);
        self.plays_in_trick += 1;

        if self.plays_in_trick == self.players.len() {
            self.finish_trick(trick_no);
        } else {
            self.current = (seat + 1) % self.players.len();
        }
        Ok(())
    }

    /// Raise the hand's stake to `to` on behalf of `team`.
    ///
    /// Only the team whose seat is about to play may call, and only while a
    /// hand is in progress; the opposing team must answer through
    /// [`Game::respond_truco`] before any card is played.
    pub fn call_truco(&mut self, team: TeamId, to: Stake) -> Result<(), BidError> {
        match self.phase {
            Phase::Dealt | Phase::Trick(_) => {}
            Phase::Resolved => return Err(BidError::OutOfTurn),
        }
        if team != self.team_of(self.current) {
            return Err(BidError::OutOfTurn);
        }
        self.bidding.raise(team, to)?;
        self.record(EventVerb::StakeRaised, Some(team), None, None, Some(to.points()));
        Ok(())
    }

    /// Answer the pending truco call on behalf of `team`.
    ///
    /// Declining ends the hand immediately; the raising team collects the
    /// stake the teams had agreed to before the call.
    pub fn respond_truco(&mut self, team: TeamId, response: RaiseResponse) -> Result<(), BidError> {
        match self.phase {
            Phase::Dealt | Phase::Trick(_) => {}
            Phase::Resolved => return Err(BidError::OutOfTurn),
        }
        match self.bidding.respond(team, response)? {
            BidOutcome::Continue => {
                match response {
                    RaiseResponse::Accept => {
                        let points = self.bidding.stake().points();
                        self.record(EventVerb::RaiseAccepted, Some(team), None, None, Some(points));
                    }
                    RaiseResponse::Counter(to) => {
                        self.record(
                            EventVerb::StakeRaised,
                            Some(team),
                            None,
                            None,
                            Some(to.points()),
                        );
                    }
                    // Decline never yields Continue.
                    RaiseResponse::Decline => {}
                }
                Ok(())
            }
            BidOutcome::HandEnds { winner, points } => {
                self.record(EventVerb::RaiseDeclined, Some(team), None, None, None);
                self.resolve_hand(winner, points);
                Ok(())
            }
        }
    }

    fn finish_trick(&mut self, trick_no: u8) {
        let Some(trick) = self.trick.take() else {
            return;
        };
        let team = trick.winning_team();
        self.tricks_won[team.index()] += 1;
        if self.first_trick_winner.is_none() {
            self.first_trick_winner = Some(team);
        }
        self.record(
            EventVerb::TrickWon,
            Some(team),
            Some(trick.winning_seat()),
            Some(trick.winning_card()),
            None,
        );

        let [one, two] = self.tricks_won;
        if one.max(two) >= 2 || trick_no >= TRICKS_PER_HAND {
            let winner = if one > two {
                TeamId::One
            } else if two > one {
                TeamId::Two
            } else {
                // An even split cannot happen while every trick has a strict
                // winner; the drawn-hand convention falls back to the team
                // that took the first trick.
                self.first_trick_winner.unwrap_or(team)
            };
            let points = self.bidding.stake().points();
            self.resolve_hand(winner, points);
        } else {
            self.leader = trick.winning_seat();
            self.current = self.leader;
            self.plays_in_trick = 0;
            self.phase = Phase::Trick(trick_no + 1);
        }
    }

    fn resolve_hand(&mut self, winner: TeamId, points: u16) {
        self.scoreboard.award(winner, points);
        self.hand_winner = Some(winner);
        self.trick = None;
        self.plays_in_trick = 0;
        self.phase = Phase::Resolved;
        self.record(EventVerb::HandWon, Some(winner), None, None, Some(points));
        if let Some(champion) = self.scoreboard.winner() {
            self.record(EventVerb::GameWon, Some(champion), None, None, None);
        }
    }

    fn record(
        &mut self,
        verb: EventVerb,
        team: Option<TeamId>,
        seat: Option<usize>,
        card: Option<Card>,
        points: Option<u16>,
    ) {
        self.history.push(EventEntry { verb, team, seat, card, points });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::dealer::StackedDealer;

    /// 1v1 table with a scripted deal: seat 0 gets the first three cards,
    /// seat 1 the next three.
    fn mk_game(script: &str) -> Game {
        let cards = parse_cards(script).expect("valid script");
        Game::with_source(1, Box::new(StackedDealer::new(cards)))
    }

    #[test]
    fn deal_gives_three_cards_per_seat() {
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        g.deal_hand();
        assert_eq!(g.phase(), Phase::Dealt);
        for p in g.players() {
            assert_eq!(p.hand().len(), 3);
        }
        assert_eq!(g.stake(), Stake::One);
        assert_eq!(g.tricks_won(), [0, 0]);
    }

    #[test]
    fn strong_hand_sweeps_in_two_tricks() {
        // Seat 0: 3c 2c Kh beats seat 1: 4d 5d 6d in the first two tricks.
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        g.deal_hand();
        g.play_card(0).unwrap(); // 3c
        g.play_card(0).unwrap(); // 4d
        assert_eq!(g.tricks_won(), [1, 0]);
        assert_eq!(g.current(), 0, "trick winner leads the next trick");
        g.play_card(0).unwrap(); // Kh (swap_remove moved it into slot 0)
        g.play_card(0).unwrap(); // 5d
        assert_eq!(g.phase(), Phase::Resolved);
        assert_eq!(g.hand_winner(), Some(TeamId::One));
        assert_eq!(g.scoreboard().total(TeamId::One), 1);
        assert_eq!(g.scoreboard().total(TeamId::Two), 0);
        // Third cards were never played.
        assert_eq!(g.players()[0].hand().len(), 1);
        assert_eq!(g.players()[1].hand().len(), 1);
    }

    #[test]
    fn split_hand_goes_to_three_tricks() {
        // Seat 0 takes trick 1 (3c), seat 1 takes trick 2 (2h over 4s),
        // seat 0 takes trick 3 (Kh over 6d).
        let mut g = mk_game("3c 4s Kh 4d 2h 6d");
        g.deal_hand();
        g.play_card(0).unwrap(); // seat 0: 3c, hand becomes [Kh, 4s]
        g.play_card(0).unwrap(); // seat 1: 4d -> trick 1 to team one
        assert_eq!(g.tricks_won(), [1, 0]);

        g.play_card(1).unwrap(); // seat 0: 4s
        g.play_card(1).unwrap(); // seat 1: 2h -> trick 2 to team two
        assert_eq!(g.tricks_won(), [1, 1]);
        assert_eq!(g.current(), 1, "seat 1 won trick 2 and leads trick 3");

        g.play_card(0).unwrap(); // seat 1: 6d
        g.play_card(0).unwrap(); // seat 0: Kh -> trick 3 to team one
        assert_eq!(g.phase(), Phase::Resolved);
        assert_eq!(g.hand_winner(), Some(TeamId::One));
        assert_eq!(g.tricks_won(), [2, 1]);
    }

    #[test]
    fn invalid_card_selection_leaves_state_alone() {
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        g.deal_hand();
        let err = g.play_card(3).unwrap_err();
        assert_eq!(err, PlayError::InvalidCardSelection { hand_len: 3, index: 3 });
        assert_eq!(g.players()[0].hand().len(), 3);
        assert_eq!(g.current(), 0);
        assert_eq!(g.phase(), Phase::Dealt);
    }

    #[test]
    fn play_is_rejected_between_hands() {
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        assert_eq!(g.play_card(0), Err(PlayError::OutOfTurn));
    }

    #[test]
    fn play_is_rejected_while_a_raise_is_pending() {
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        g.deal_hand();
        g.call_truco(TeamId::One, Stake::Three).unwrap();
        assert_eq!(g.play_card(0), Err(PlayError::OutOfTurn));
        g.respond_truco(TeamId::Two, RaiseResponse::Accept).unwrap();
        assert_eq!(g.stake(), Stake::Three);
        g.play_card(0).unwrap();
    }

    #[test]
    fn only_the_acting_team_may_call_truco() {
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        g.deal_hand();
        assert_eq!(g.current(), 0);
        assert_eq!(g.call_truco(TeamId::Two, Stake::Three), Err(BidError::OutOfTurn));
        g.call_truco(TeamId::One, Stake::Three).unwrap();
    }

    #[test]
    fn declined_raise_ends_the_hand_at_the_old_stake() {
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        g.deal_hand();
        g.play_card(0).unwrap();
        g.play_card(0).unwrap(); // trick 1 done, seat 0 leads again
        g.call_truco(TeamId::One, Stake::Three).unwrap();
        g.respond_truco(TeamId::Two, RaiseResponse::Decline).unwrap();
        assert_eq!(g.phase(), Phase::Resolved);
        assert_eq!(g.hand_winner(), Some(TeamId::One));
        assert_eq!(g.scoreboard().total(TeamId::One), 1, "pre-raise stake, not 3");
    }

    #[test]
    fn accepted_raise_is_worth_its_points() {
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        g.deal_hand();
        g.call_truco(TeamId::One, Stake::Six).unwrap();
        g.respond_truco(TeamId::Two, RaiseResponse::Accept).unwrap();
        g.play_card(0).unwrap();
        g.play_card(0).unwrap();
        g.play_card(0).unwrap();
        g.play_card(0).unwrap();
        assert_eq!(g.phase(), Phase::Resolved);
        assert_eq!(g.scoreboard().total(TeamId::One), 6);
    }

    #[test]
    fn stake_resets_on_the_next_deal() {
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        g.deal_hand();
        g.call_truco(TeamId::One, Stake::Nine).unwrap();
        g.respond_truco(TeamId::Two, RaiseResponse::Decline).unwrap();
        g.deal_hand();
        assert_eq!(g.stake(), Stake::One);
    }

    #[test]
    fn hand_leader_rotates_between_hands() {
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        g.deal_hand();
        assert_eq!(g.hand_leader(), 0);
        g.call_truco(TeamId::One, Stake::Three).unwrap();
        g.respond_truco(TeamId::Two, RaiseResponse::Decline).unwrap();
        g.deal_hand();
        assert_eq!(g.hand_leader(), 1);
        assert_eq!(g.current(), 1);
    }

    #[test]
    fn no_dealing_after_the_game_is_won() {
        // The script repeats, so team one sweeps every hand at one point
        // apiece until the target falls.
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        for _ in 0..12 {
            g.deal_hand();
            if g.winner().is_some() {
                break;
            }
            while g.phase() != Phase::Resolved {
                g.play_card(0).unwrap();
            }
        }
        assert_eq!(g.winner(), Some(TeamId::One));
        let phase = g.phase();
        g.deal_hand();
        assert_eq!(g.phase(), phase, "deal_hand is a no-op after game over");
        assert!(g.players().iter().all(|p| p.hand().len() == 1));
    }

    #[test]
    fn history_records_hand_milestones() {
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        g.deal_hand();
        g.play_card(0).unwrap();
        g.play_card(0).unwrap();
        g.play_card(0).unwrap();
        g.play_card(0).unwrap();
        let verbs: Vec<EventVerb> = g
            .history_recent(usize::MAX)
            .iter()
            .map(|e| e.verb)
            .collect();
        assert_eq!(
            verbs,
            vec![
                EventVerb::HandDealt,
                EventVerb::CardPlayed,
                EventVerb::CardPlayed,
                EventVerb::TrickWon,
                EventVerb::CardPlayed,
                EventVerb::CardPlayed,
                EventVerb::TrickWon,
                EventVerb::HandWon,
            ]
        );
    }

    #[test]
    fn history_offset_pages_backwards() {
        let mut g = mk_game("3c 2c Kh 4d 5d 6d");
        g.deal_hand();
        g.play_card(0).unwrap();
        let all = g.history_recent(usize::MAX);
        let page = g.history_recent_offset(1, 1);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0], all[all.len() - 2]);
    }

    #[test]
    fn four_seat_table_alternates_teams() {
        let cards = parse_cards("3c 2c Kh 4d 5d 6d 4s 5s 6s 4h 5h 6h").unwrap();
        let mut g = Game::with_source(2, Box::new(StackedDealer::new(cards)));
        assert_eq!(g.num_players(), 4);
        assert_eq!(g.team_of(0), TeamId::One);
        assert_eq!(g.team_of(1), TeamId::Two);
        assert_eq!(g.team_of(2), TeamId::One);
        assert_eq!(g.team_of(3), TeamId::Two);
        g.deal_hand();
        // All four seats play in rotation before the trick closes.
        for expected in [0, 1, 2, 3] {
            assert_eq!(g.current(), expected);
            g.play_card(0).unwrap();
        }
        assert_eq!(g.tricks_won().iter().sum::<u8>(), 1);
    }
}
