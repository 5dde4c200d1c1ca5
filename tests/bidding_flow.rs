use truco_rs::bidding::{BidError, RaiseResponse, Stake};
use truco_rs::cards::parse_cards;
use truco_rs::dealer::StackedDealer;
use truco_rs::game::{Game, Phase, PlayError};
use truco_rs::score::TeamId;

fn mk_game(script: &str) -> Game {
    let cards = parse_cards(script).expect("valid script");
    Game::with_source(1, Box::new(StackedDealer::new(cards)))
}

#[test]
fn declined_truco_ends_the_hand_at_the_pre_raise_stake() {
    // Raise 1 -> 3, decline: the raiser banks one point, not three.
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    g.deal_hand();
    g.call_truco(TeamId::One, Stake::Three).unwrap();
    g.respond_truco(TeamId::Two, RaiseResponse::Decline).unwrap();
    assert_eq!(g.phase(), Phase::Resolved);
    assert_eq!(g.scoreboard().totals(), [1, 0]);
}

#[test]
fn accepted_truco_plays_out_for_the_raised_stake() {
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    g.deal_hand();
    g.call_truco(TeamId::One, Stake::Three).unwrap();
    g.respond_truco(TeamId::Two, RaiseResponse::Accept).unwrap();
    assert_eq!(g.stake(), Stake::Three);
    while g.phase() != Phase::Resolved {
        g.play_card(0).unwrap();
    }
    assert_eq!(g.scoreboard().totals(), [3, 0]);
}

#[test]
fn counter_chain_escalates_to_twelve() {
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    g.deal_hand();
    g.call_truco(TeamId::One, Stake::Three).unwrap();
    g.respond_truco(TeamId::Two, RaiseResponse::Counter(Stake::Six)).unwrap();
    g.respond_truco(TeamId::One, RaiseResponse::Counter(Stake::Nine)).unwrap();
    g.respond_truco(TeamId::Two, RaiseResponse::Counter(Stake::Twelve)).unwrap();
    g.respond_truco(TeamId::One, RaiseResponse::Accept).unwrap();
    assert_eq!(g.stake(), Stake::Twelve);
    while g.phase() != Phase::Resolved {
        g.play_card(0).unwrap();
    }
    assert_eq!(g.scoreboard().totals(), [12, 0]);
    assert_eq!(g.winner(), Some(TeamId::One), "a twelve-point hand ends the game");
}

#[test]
fn declining_a_counter_awards_the_last_agreed_stake() {
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    g.deal_hand();
    g.call_truco(TeamId::One, Stake::Three).unwrap();
    g.respond_truco(TeamId::Two, RaiseResponse::Counter(Stake::Nine)).unwrap();
    g.respond_truco(TeamId::One, RaiseResponse::Decline).unwrap();
    // Countering accepted the three; team two collects it.
    assert_eq!(g.scoreboard().totals(), [0, 3]);
    assert_eq!(g.hand_winner(), Some(TeamId::Two));
}

#[test]
fn skipping_ladder_values_is_legal() {
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    g.deal_hand();
    g.call_truco(TeamId::One, Stake::Nine).unwrap();
    g.respond_truco(TeamId::Two, RaiseResponse::Accept).unwrap();
    assert_eq!(g.stake(), Stake::Nine);
}

#[test]
fn non_increasing_targets_are_invalid() {
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    g.deal_hand();
    g.call_truco(TeamId::One, Stake::Six).unwrap();
    g.respond_truco(TeamId::Two, RaiseResponse::Accept).unwrap();
    assert_eq!(
        g.call_truco(TeamId::One, Stake::Three),
        Err(BidError::InvalidRaise { current: 6, requested: 3 })
    );
    assert_eq!(
        g.call_truco(TeamId::One, Stake::Six),
        Err(BidError::InvalidRaise { current: 6, requested: 6 })
    );
    // The rejected calls change nothing.
    assert_eq!(g.stake(), Stake::Six);
    assert_eq!(g.pending_raise(), None);
}

#[test]
fn targets_above_twelve_do_not_exist() {
    // The stake ladder is closed at twelve: there is no higher target to
    // request, so a raise from twelve can only be invalid.
    assert_eq!(Stake::try_from_points(13), None);
    assert_eq!(Stake::try_from_points(15), None);
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    g.deal_hand();
    g.call_truco(TeamId::One, Stake::Twelve).unwrap();
    g.respond_truco(TeamId::Two, RaiseResponse::Accept).unwrap();
    let err = g.call_truco(TeamId::One, Stake::Twelve).unwrap_err();
    assert_eq!(err, BidError::InvalidRaise { current: 12, requested: 12 });
}

#[test]
fn only_the_acting_team_may_raise() {
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    g.deal_hand();
    assert_eq!(g.current(), 0);
    assert_eq!(g.call_truco(TeamId::Two, Stake::Three), Err(BidError::OutOfTurn));
    // After seat 0 plays, seat 1 (team two) is the one entitled to call.
    g.play_card(0).unwrap();
    assert_eq!(g.call_truco(TeamId::One, Stake::Three), Err(BidError::OutOfTurn));
    g.call_truco(TeamId::Two, Stake::Three).unwrap();
}

#[test]
fn the_raising_team_may_not_answer_its_own_call() {
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    g.deal_hand();
    g.call_truco(TeamId::One, Stake::Three).unwrap();
    assert_eq!(
        g.respond_truco(TeamId::One, RaiseResponse::Accept),
        Err(BidError::OutOfTurn)
    );
    assert_eq!(
        g.respond_truco(TeamId::Two, RaiseResponse::Counter(Stake::Three)),
        Err(BidError::InvalidRaise { current: 3, requested: 3 })
    );
}

#[test]
fn bidding_is_closed_between_hands() {
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    assert_eq!(g.call_truco(TeamId::One, Stake::Three), Err(BidError::OutOfTurn));
    g.deal_hand();
    while g.phase() != Phase::Resolved {
        g.play_card(0).unwrap();
    }
    assert_eq!(g.call_truco(TeamId::One, Stake::Three), Err(BidError::OutOfTurn));
}

#[test]
fn play_waits_for_the_answer() {
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    g.deal_hand();
    g.call_truco(TeamId::One, Stake::Three).unwrap();
    assert_eq!(g.play_card(0), Err(PlayError::OutOfTurn));
    g.respond_truco(TeamId::Two, RaiseResponse::Accept).unwrap();
    g.play_card(0).unwrap();
}

#[test]
fn stake_is_monotone_within_a_hand_and_resets_after() {
    let mut g = mk_game("3c 2c Kh 4d 5d 6d");
    g.deal_hand();
    assert_eq!(g.stake(), Stake::One);
    g.call_truco(TeamId::One, Stake::Three).unwrap();
    g.respond_truco(TeamId::Two, RaiseResponse::Accept).unwrap();
    assert_eq!(g.stake(), Stake::Three);
    g.play_card(0).unwrap();
    g.play_card(0).unwrap();
    g.call_truco(TeamId::One, Stake::Six).unwrap();
    g.respond_truco(TeamId::Two, RaiseResponse::Accept).unwrap();
    assert_eq!(g.stake(), Stake::Six);
    while g.phase() != Phase::Resolved {
        g.play_card(0).unwrap();
    }
    g.deal_hand();
    assert_eq!(g.stake(), Stake::One);
}
