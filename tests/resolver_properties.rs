use proptest::prelude::*;
use truco_rs::cards::{Card, Rank, Suit};
use truco_rs::trick::{beats, resolve, strength};

fn any_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Diamonds), Just(Suit::Spades), Just(Suit::Hearts), Just(Suit::Clubs),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn any_manilha() -> impl Strategy<Value = Card> {
    prop::sample::select(Card::MANILHAS.to_vec())
}

proptest! {
    #[test]
    fn resolve_is_argument_order_independent(a in any_card(), b in any_card()) {
        prop_assume!(a != b);
        prop_assert_eq!(resolve(a, b), resolve(b, a));
    }

    #[test]
    fn resolve_always_returns_one_of_its_inputs(a in any_card(), b in any_card()) {
        let w = resolve(a, b);
        prop_assert!(w == a || w == b);
    }

    #[test]
    fn exactly_one_of_a_distinct_pair_wins(a in any_card(), b in any_card()) {
        prop_assume!(a != b);
        prop_assert!(beats(a, b) ^ beats(b, a));
    }

    #[test]
    fn no_cycles_among_three_cards(a in any_card(), b in any_card(), c in any_card()) {
        if beats(a, b) && beats(b, c) {
            prop_assert!(beats(a, c));
        }
    }

    #[test]
    fn beats_agrees_with_the_packed_key(a in any_card(), b in any_card()) {
        prop_assert_eq!(beats(a, b), strength(a) > strength(b));
    }

    #[test]
    fn any_manilha_beats_any_ordinary_card(m in any_manilha(), c in any_card()) {
        prop_assume!(!c.is_manilha());
        prop_assert!(beats(m, c));
        prop_assert!(!beats(c, m));
    }
}

/// Exhaustive check over every pair drawn from ranks x suits: the trick
/// order is strict and total once the manilha table is fixed.
#[test]
fn all_forty_cards_form_a_strict_total_order() {
    let mut cards: Vec<Card> = Rank::ALL
        .iter()
        .flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s)))
        .collect();
    assert_eq!(cards.len(), 40);
    cards.sort_by_key(|&c| strength(c));

    for (i, &a) in cards.iter().enumerate() {
        for (j, &b) in cards.iter().enumerate() {
            assert_eq!(beats(a, b), i > j, "{a} vs {b}");
        }
    }
}

#[test]
fn weakest_manilha_beats_strongest_ordinary_rank() {
    let weakest = Card::MANILHAS[0];
    for &suit in &Suit::ALL {
        let three = Card::new(Rank::Three, suit);
        if three.is_manilha() {
            continue;
        }
        assert_eq!(resolve(three, weakest), weakest);
    }
}
