use truco_rs::agents::{AgentTable, BotAgent, BotProfile, Difficulty, PlayerAgent};
use truco_rs::cards::parse_cards;
use truco_rs::dealer::{RandomDealer, StackedDealer};
use truco_rs::game::{Game, Phase};

fn bot(seed: u64, difficulty: Difficulty) -> Box<dyn PlayerAgent> {
    Box::new(BotAgent::new(BotProfile::for_difficulty(difficulty).with_seed(seed)))
}

#[test]
fn two_bots_finish_a_scripted_hand() {
    let script = parse_cards("3c 2c Kh 4d 5d 6d").unwrap();
    let mut g = Game::with_source(1, Box::new(StackedDealer::new(script)));
    g.deal_hand();

    let mut table = AgentTable::for_seats(2);
    table.set_agent(0, Some(bot(1, Difficulty::Medium)));
    table.set_agent(1, Some(bot(2, Difficulty::Medium)));

    let mut ticks = 0;
    while g.phase() != Phase::Resolved {
        table.on_turn(&mut g).expect("bot actions are always legal");
        ticks += 1;
        assert!(ticks < 100, "bots must drive the hand to resolution");
    }
    let totals = g.scoreboard().totals();
    assert!(totals[0] + totals[1] >= 1, "someone banked the stake");
}

#[test]
fn bots_play_a_seeded_game_to_completion() {
    let mut g = Game::with_source(2, Box::new(RandomDealer::seeded(42)));
    let mut table = AgentTable::for_seats(4);
    for seat in 0..4 {
        table.set_agent(seat, Some(bot(seat as u64, Difficulty::Hard)));
    }

    let mut ticks = 0;
    while g.winner().is_none() {
        if g.phase() == Phase::Resolved {
            g.deal_hand();
        }
        table.on_turn(&mut g).expect("bot actions are always legal");
        ticks += 1;
        assert!(ticks < 100_000, "a seeded bot game must terminate");
    }
    let totals = g.scoreboard().totals();
    assert!(totals[0].max(totals[1]) >= 12);
}

#[test]
fn seeded_bots_are_deterministic() {
    let run = || {
        let script = parse_cards("3c 2c Kh 4d 5d 6d Qs Jh 2d 5h 6s Ah").unwrap();
        let mut g = Game::with_source(1, Box::new(StackedDealer::new(script)));
        let mut table = AgentTable::for_seats(2);
        table.set_agent(0, Some(bot(7, Difficulty::Expert)));
        table.set_agent(1, Some(bot(9, Difficulty::Expert)));
        for _ in 0..3 {
            g.deal_hand();
            let mut ticks = 0;
            while g.phase() != Phase::Resolved {
                table.on_turn(&mut g).expect("legal");
                ticks += 1;
                assert!(ticks < 100);
            }
        }
        g.scoreboard().totals()
    };
    assert_eq!(run(), run());
}
