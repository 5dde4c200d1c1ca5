use crate::score::TeamId;
use std::fmt;

/// How many points the hand in progress is worth.
///
/// A fresh hand is worth one point; truco calls raise it along the fixed
/// ladder 3, 6, 9, 12. Values are closed; there is nothing above Twelve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Stake {
    One = 1,
    Three = 3,
    Six = 6,
    Nine = 9,
    Twelve = 12,
}

impl Stake {
    /// Legal raise targets, ascending. Skipping values is allowed.
    pub const RAISES: [Stake; 4] = [Stake::Three, Stake::Six, Stake::Nine, Stake::Twelve];

    pub const fn points(self) -> u16 {
        self as u16
    }

    pub fn try_from_points(points: u16) -> Option<Stake> {
        match points {
            1 => Some(Stake::One),
            3 => Some(Stake::Three),
            6 => Some(Stake::Six),
            9 => Some(Stake::Nine),
            12 => Some(Stake::Twelve),
            _ => None,
        }
    }
}

impl fmt::Display for Stake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BidError {
    #[error("raise target must exceed the current stake: current {current}, requested {requested}")]
    InvalidRaise { current: u16, requested: u16 },
    #[error("team may not bid right now")]
    OutOfTurn,
}

/// A team's answer to a pending truco call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaiseResponse {
    Accept,
    Decline,
    Counter(Stake),
}

/// What the round engine should do after a bidding action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BidOutcome {
    /// Play continues (raise accepted, or a counter now awaits an answer).
    Continue,
    /// The raise was declined: the hand ends at once and `winner` collects
    /// the pre-raise stake.
    HandEnds { winner: TeamId, points: u16 },
}

/// A truco call awaiting the opposing team's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRaise {
    pub to: Stake,
    pub by: TeamId,
}

/// Per-hand bidding state: the stake both teams have agreed to, plus at most
/// one raise in flight. The agreed stake never decreases within a hand and
/// resets to One when the next hand is dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bidding {
    accepted: Stake,
    pending: Option<PendingRaise>,
}

impl Default for Bidding {
    fn default() -> Self {
        Self::new()
    }
}

impl Bidding {
    pub fn new() -> Self {
        Self { accepted: Stake::One, pending: None }
    }

    /// The stake the hand is currently worth if it resolves by play.
    pub fn stake(&self) -> Stake {
        self.accepted
    }

    pub fn pending(&self) -> Option<PendingRaise> {
        self.pending
    }

    /// Back to a fresh one-point hand.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Issue a truco call raising the hand to `to`.
    ///
    /// The caller (the round engine) is responsible for checking that it is
    /// actually `team`'s turn to act; this layer rejects a raise while an
    /// earlier one still awaits its answer, and any target that does not
    /// strictly exceed the agreed stake.
    pub fn raise(&mut self, team: TeamId, to: Stake) -> Result<(), BidError> {
        if self.pending.is_some() {
            return Err(BidError::OutOfTurn);
        }
        if to <= self.accepted {
            return Err(BidError::InvalidRaise {
                current: self.accepted.points(),
                requested: to.points(),
            });
        }
        self.pending = Some(PendingRaise { to, by: team });
        Ok(())
    }

    /// Answer the pending raise. Only the team opposing the raiser may
    /// respond.
    ///
    /// - `Accept`: the offered stake becomes the agreed stake.
    /// - `Decline`: the hand ends; the raiser wins the pre-raise stake.
    /// - `Counter`: the offer is implicitly accepted and a higher raise goes
    ///   back the other way; teams alternate until accept or decline.
    pub fn respond(&mut self, team: TeamId, response: RaiseResponse) -> Result<BidOutcome, BidError> {
        let pending = self.pending.ok_or(BidError::OutOfTurn)?;
        if team != pending.by.opponent() {
            return Err(BidError::OutOfTurn);
        }
        match response {
            RaiseResponse::Accept => {
                self.accepted = pending.to;
                self.pending = None;
                Ok(BidOutcome::Continue)
            }
            RaiseResponse::Decline => {
                let points = self.accepted.points();
                self.pending = None;
                Ok(BidOutcome::HandEnds { winner: pending.by, points })
            }
            RaiseResponse::Counter(to) => {
                if to <= pending.to {
                    return Err(BidError::InvalidRaise {
                        current: pending.to.points(),
                        requested: to.points(),
                    });
                }
                self.accepted = pending.to;
                self.pending = Some(PendingRaise { to, by: team });
                Ok(BidOutcome::Continue)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stake_points_round_trip() {
        for stake in [Stake::One, Stake::Three, Stake::Six, Stake::Nine, Stake::Twelve] {
            assert_eq!(Stake::try_from_points(stake.points()), Some(stake));
        }
        assert_eq!(Stake::try_from_points(0), None);
        assert_eq!(Stake::try_from_points(2), None);
        assert_eq!(Stake::try_from_points(13), None);
    }

    #[test]
    fn accept_moves_the_agreed_stake() {
        let mut bidding = Bidding::new();
        bidding.raise(TeamId::One, Stake::Three).unwrap();
        let outcome = bidding.respond(TeamId::Two, RaiseResponse::Accept).unwrap();
        assert_eq!(outcome, BidOutcome::Continue);
        assert_eq!(bidding.stake(), Stake::Three);
        assert_eq!(bidding.pending(), None);
    }

    #[test]
    fn decline_awards_pre_raise_stake() {
        let mut bidding = Bidding::new();
        bidding.raise(TeamId::One, Stake::Three).unwrap();
        let outcome = bidding.respond(TeamId::Two, RaiseResponse::Decline).unwrap();
        assert_eq!(outcome, BidOutcome::HandEnds { winner: TeamId::One, points: 1 });
        assert_eq!(bidding.stake(), Stake::One);
    }

    #[test]
    fn counter_raises_alternate_teams() {
        let mut bidding = Bidding::new();
        bidding.raise(TeamId::One, Stake::Three).unwrap();
        let outcome = bidding.respond(TeamId::Two, RaiseResponse::Counter(Stake::Six)).unwrap();
        assert_eq!(outcome, BidOutcome::Continue);
        // Countering accepted the three; six is now on the table from Two.
        assert_eq!(bidding.stake(), Stake::Three);
        assert_eq!(bidding.pending(), Some(PendingRaise { to: Stake::Six, by: TeamId::Two }));

        // One declines the counter: Two wins what had been agreed.
        let outcome = bidding.respond(TeamId::One, RaiseResponse::Decline).unwrap();
        assert_eq!(outcome, BidOutcome::HandEnds { winner: TeamId::Two, points: 3 });
    }

    #[test]
    fn skipping_values_is_allowed() {
        let mut bidding = Bidding::new();
        bidding.raise(TeamId::Two, Stake::Nine).unwrap();
        bidding.respond(TeamId::One, RaiseResponse::Accept).unwrap();
        assert_eq!(bidding.stake(), Stake::Nine);
    }

    #[test]
    fn non_increasing_raise_is_rejected() {
        let mut bidding = Bidding::new();
        bidding.raise(TeamId::One, Stake::Six).unwrap();
        bidding.respond(TeamId::Two, RaiseResponse::Accept).unwrap();
        let err = bidding.raise(TeamId::Two, Stake::Six).unwrap_err();
        assert_eq!(err, BidError::InvalidRaise { current: 6, requested: 6 });
        let err = bidding.raise(TeamId::Two, Stake::Three).unwrap_err();
        assert_eq!(err, BidError::InvalidRaise { current: 6, requested: 3 });
    }

    #[test]
    fn counter_must_exceed_the_offer() {
        let mut bidding = Bidding::new();
        bidding.raise(TeamId::One, Stake::Six).unwrap();
        let err = bidding.respond(TeamId::Two, RaiseResponse::Counter(Stake::Six)).unwrap_err();
        assert_eq!(err, BidError::InvalidRaise { current: 6, requested: 6 });
        // The failed counter leaves the pending raise untouched.
        assert_eq!(bidding.pending(), Some(PendingRaise { to: Stake::Six, by: TeamId::One }));
    }

    #[test]
    fn raise_while_pending_is_out_of_turn() {
        let mut bidding = Bidding::new();
        bidding.raise(TeamId::One, Stake::Three).unwrap();
        assert_eq!(bidding.raise(TeamId::One, Stake::Six), Err(BidError::OutOfTurn));
        assert_eq!(bidding.raise(TeamId::Two, Stake::Six), Err(BidError::OutOfTurn));
    }

    #[test]
    fn only_the_opposing_team_may_respond() {
        let mut bidding = Bidding::new();
        assert_eq!(bidding.respond(TeamId::Two, RaiseResponse::Accept), Err(BidError::OutOfTurn));
        bidding.raise(TeamId::One, Stake::Three).unwrap();
        assert_eq!(bidding.respond(TeamId::One, RaiseResponse::Accept), Err(BidError::OutOfTurn));
    }

    #[test]
    fn reset_returns_to_one_point() {
        let mut bidding = Bidding::new();
        bidding.raise(TeamId::One, Stake::Twelve).unwrap();
        bidding.respond(TeamId::Two, RaiseResponse::Accept).unwrap();
        bidding.reset();
        assert_eq!(bidding.stake(), Stake::One);
        assert_eq!(bidding.pending(), None);
    }
}
