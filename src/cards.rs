use std::fmt;
use std::str::FromStr;

/// Card ranks from Four (weakest) to Three (strongest ordinary card).
///
/// Declaration order is the ordinary strength order, so the derived `Ord`
/// agrees with [`Rank::strength`]. Manilhas outrank everything here; see
/// [`Card::is_manilha`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Four,
    Five,
    Six,
    King,
    Jack,
    Queen,
    Seven,
    Ace,
    Two,
    Three,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::King,
        Rank::Jack,
        Rank::Queen,
        Rank::Seven,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    /// Position in the ascending ordinary order, 0..=9.
    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::King => 'K',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::Seven => '7',
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            'K' => Ok(Rank::King),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            '7' => Ok(Rank::Seven),
            'A' => Ok(Rank::Ace),
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

/// Four suits; declaration order is the tie-break order between equal-rank
/// ordinary cards: d < s < h < c.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Diamonds,
    Spades,
    Hearts,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs];

    /// Position in the tie-break order, 0..=3.
    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Clubs => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() == 1 {
            let c = t.chars().next().ok_or_else(|| SuitParseError::Invalid(s.to_string()))?;
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "diamonds" => Ok(Suit::Diamonds),
            "spades" => Ok(Suit::Spades),
            "hearts" => Ok(Suit::Hearts),
            "clubs" => Ok(Suit::Clubs),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'd' => Ok(Suit::Diamonds),
            's' => Ok(Suit::Spades),
            'h' => Ok(Suit::Hearts),
            'c' => Ok(Suit::Clubs),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: rank + suit.
///
/// Cards are plain values; two players may well hold the same card, since
/// hands are dealt as independent draws rather than from a shared deck.
/// The derived ordering is rank-then-suit and is only meant for sorting and
/// display; trick strength (which puts manilhas on top) lives in
/// [`crate::trick`].
///
/// ```
/// use truco_rs::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Three, Suit::Clubs);
/// assert_eq!(card.to_string(), "3c");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// The four manilhas, weakest to strongest: 7d, As, 7h, 4c.
    ///
    /// A fixed table; it is not derived from a turned-up vira and never
    /// changes during a game. Each entry beats every non-manilha card.
    pub const MANILHAS: [Card; 4] = [
        Card::new(Rank::Seven, Suit::Diamonds),
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Four, Suit::Clubs),
    ];

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn to_tuple(self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }

    /// Whether this exact (rank, suit) pair is one of the four manilhas.
    pub fn is_manilha(self) -> bool {
        self.manilha_strength().is_some()
    }

    /// Position in the manilha ladder (0 = weakest manilha), if any.
    pub fn manilha_strength(self) -> Option<u8> {
        Self::MANILHAS.iter().position(|&m| m == self).map(|i| i as u8)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        let (rank_ch, suit_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => (r, su),
            _ => return Err(CardParseError::Invalid(s.to_string())),
        };
        let rank = Rank::try_from(rank_ch)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use truco_rs::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("3c, As 7d").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Three, Suit::Clubs));
/// assert_eq!(cards[1], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[2], Card::new(Rank::Seven, Suit::Diamonds));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
