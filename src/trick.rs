//! Trick resolution: which of two contending cards wins.
//!
//! The comparison is a strict total order over all 40 (rank, suit)
//! combinations: the four manilhas sit above everything else in their own
//! ladder, ordinary cards compare by rank, and equal ranks fall back to the
//! fixed suit order. There is no "equal" outcome: when two identical cards
//! meet (possible, since hands are independent draws) the incumbent keeps
//! the trick.

use crate::cards::Card;
use crate::score::TeamId;

/// Whether `challenger` strictly beats `incumbent`.
///
/// Ordered decision list; the first matching rule decides:
/// 1. exactly one card is a manilha: the manilha wins;
/// 2. both are manilhas: the higher ladder position wins;
/// 3. ranks differ: the higher rank wins;
/// 4. equal ranks: the higher suit wins.
///
/// ```
/// use truco_rs::cards::{Card, Rank, Suit};
/// use truco_rs::trick::beats;
///
/// // The weakest manilha beats the strongest ordinary card.
/// let seven_d = Card::new(Rank::Seven, Suit::Diamonds);
/// let three_c = Card::new(Rank::Three, Suit::Clubs);
/// assert!(beats(seven_d, three_c));
/// assert!(!beats(three_c, seven_d));
/// ```
pub fn beats(challenger: Card, incumbent: Card) -> bool {
    match (challenger.manilha_strength(), incumbent.manilha_strength()) {
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (Some(a), Some(b)) => a > b,
        (None, None) => {
            if challenger.rank() != incumbent.rank() {
                challenger.rank().strength() > incumbent.rank().strength()
            } else {
                challenger.suit().strength() > incumbent.suit().strength()
            }
        }
    }
}

/// Return whichever of the two cards wins the trick so far.
///
/// Always one of the two inputs; an exactly-equal challenger does not take
/// the trick from the current winner.
pub fn resolve(current_winner: Card, challenger: Card) -> Card {
    if beats(challenger, current_winner) {
        challenger
    } else {
        current_winner
    }
}

/// Packed comparable key: ordinary cards occupy 0..40 (rank-major, suit
/// minor), manilhas 40..44. Agrees with [`beats`]: `beats(a, b)` iff
/// `strength(a) > strength(b)`, which makes transitivity of the trick
/// order immediate. Useful for sorting a hand by strength.
pub fn strength(card: Card) -> u8 {
    match card.manilha_strength() {
        Some(m) => 40 + m,
        None => card.rank().strength() * 4 + card.suit().strength(),
    }
}

/// Running winner of the trick in progress. Rebuilt fresh each trick: the
/// leader's card seeds it, every later play is folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trick {
    card: Card,
    seat: usize,
    team: TeamId,
}

impl Trick {
    pub fn open(card: Card, seat: usize, team: TeamId) -> Self {
        Self { card, seat, team }
    }

    /// Fold one more play into the running winner.
    pub fn fold(&mut self, card: Card, seat: usize, team: TeamId) {
        if beats(card, self.card) {
            self.card = card;
            self.seat = seat;
            self.team = team;
        }
    }

    pub fn winning_card(&self) -> Card {
        self.card
    }
    pub fn winning_seat(&self) -> usize {
        self.seat
    }
    pub fn winning_team(&self) -> TeamId {
        self.team
    }
}
