//! truco-rs: rules engine for a simplified two-team Truco variant
//!
//! Goals:
//! - A total, deterministic trick order: four fixed manilhas above ten
//!   ordinary ranks, suit order breaking ties
//! - A small, well-documented public API around hands of three tricks,
//!   escalating truco stakes and first-to-twelve scoring
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: resolve a trick and play a scripted hand
//! ```
//! use truco_rs::cards::{parse_cards, Card, Rank, Suit};
//! use truco_rs::dealer::StackedDealer;
//! use truco_rs::game::{Game, Phase};
//! use truco_rs::trick::resolve;
//!
//! // The weakest manilha outranks the strongest ordinary card.
//! let zap = Card::new(Rank::Four, Suit::Clubs);
//! let three = Card::new(Rank::Three, Suit::Hearts);
//! assert_eq!(resolve(three, zap), zap);
//!
//! // One-on-one hand from a scripted deal: seat 0 sweeps two tricks.
//! let script = parse_cards("3c 2c Kh 4d 5d 6d").unwrap();
//! let mut game = Game::with_source(1, Box::new(StackedDealer::new(script)));
//! game.deal_hand();
//! game.play_card(0).unwrap();
//! game.play_card(0).unwrap();
//! game.play_card(0).unwrap();
//! game.play_card(0).unwrap();
//! assert_eq!(game.phase(), Phase::Resolved);
//! assert_eq!(game.scoreboard().totals(), [1, 0]);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin truco-rs
//! ```

pub mod agents;
pub mod bidding;
pub mod cards;
pub mod dealer;
pub mod engine;
pub mod game;
pub mod score;
pub mod trick;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
