use handreader_engine::cards::{parse_cards, Card};
use handreader_engine::errors::{EvalError, HoldingPart};
use handreader_engine::game::Game;
use handreader_engine::hand::Category;
use handreader_engine::qualifier::Qualifier;
use handreader_engine::showdown::{resolve, Seat, Showdown, ShowdownResult, Table};

fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).unwrap()
}

fn game(id: &str) -> Game {
    id.parse().unwrap()
}

fn table(seats: &[(Seat, &str)]) -> Table {
    seats
        .iter()
        .fold(Table::new(), |t, &(seat, hole)| t.with_seat(seat, cards(hole)))
}

fn winners(showdown: Showdown) -> ShowdownResult {
    match showdown {
        Showdown::Winners(result) => result,
        other => panic!("expected winners, got {:?}", other),
    }
}

#[test]
fn holdem_uses_best_five_of_seven() {
    let t = table(&[(1, "As Ks"), (2, "7d 2c")]).with_board(cards("Qs Js Ts 3h 4d"));
    let result = winners(resolve(Game::Holdem, &t).unwrap());
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.description, "Royal Flush");
    assert_eq!(result.hands[0].category, "Royal Flush");
    assert_eq!(result.hands[0].cards.len(), 5);
}

#[test]
fn holdem_board_plays_for_a_split() {
    let t = table(&[(3, "2c 3d"), (1, "2h 3s"), (2, "4c 4d")])
        .with_board(cards("Ts Js Qh Kd Ac"));
    let result = winners(resolve(Game::Holdem, &t).unwrap());
    assert_eq!(result.winners, vec![1, 2, 3]);
    assert_eq!(result.description, "Straight, A High");
    let seats: Vec<Seat> = result.hands.iter().map(|h| h.seat).collect();
    assert_eq!(seats, vec![1, 2, 3]);
}

#[test]
fn holdem_accepts_flop_and_turn_boards() {
    let t = table(&[(1, "Ah Ad"), (2, "Kh Kd")]).with_board(cards("2s 7c 9d"));
    assert_eq!(resolve(Game::Holdem, &t).unwrap().winners(), &[1]);
    let t = t.with_board(cards("2s 7c 9d Kc"));
    assert_eq!(resolve(Game::Holdem, &t).unwrap().winners(), &[2]);
}

#[test]
fn omaha_must_use_exactly_two_hole_cards() {
    let board = cards("Ah Kh 7h 2h 9c");
    let t = table(&[(1, "Qh 3c 4d 5s"), (2, "Jc Js 8d 8c")]).with_board(board.clone());
    let result = winners(resolve(game("omaha-hi"), &t).unwrap());
    assert_eq!(result.winners, vec![2]);
    assert_eq!(result.hands[0].category, "Pair");

    let holdem_like = table(&[(1, "Qh 3c")]).with_board(board);
    let holdem = winners(resolve(Game::Holdem, &holdem_like).unwrap());
    assert_eq!(holdem.hands[0].category, "Flush");
}

#[test]
fn omaha_winning_hand_holds_two_hole_and_three_board() {
    let hole = cards("Qh Th 3c 4d");
    let board = cards("Ah Kh 7h 2s 9c");
    let t = Table::new().with_seat(1, hole.clone()).with_board(board.clone());
    let result = winners(resolve(game("omaha-hi"), &t).unwrap());
    let hand = &result.hands[0];
    assert_eq!(hand.category, "Flush");
    assert_eq!(hand.cards.iter().filter(|c| hole.contains(c)).count(), 2);
    assert_eq!(hand.cards.iter().filter(|c| board.contains(c)).count(), 3);
}

#[test]
fn omaha_accepts_six_hole_cards() {
    let t = table(&[(1, "Ah Ad 2c 3c 4d 5d"), (2, "Kh Kd 6c 7c 8d 9d")])
        .with_board(cards("As Ks 2h 3h 4h"));
    let result = winners(resolve(game("omaha-hi"), &t).unwrap());
    assert_eq!(result.winners, vec![1]);
}

#[test]
fn omaha_low_eight_or_better() {
    let t = table(&[(1, "Ah 4c 9d 9h"), (2, "5s 6s Kc Ks")]).with_board(cards("2h 3d 7c Kd Qs"));
    let result = winners(resolve(game("omaha-lo8"), &t).unwrap());
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.description, "7-Low: 7c 4c 3d 2h Ah");
}

#[test]
fn omaha_low_without_three_low_board_cards_has_no_qualifier() {
    let t = table(&[(1, "Ah 2c 3d 4h"), (2, "5s 6s 7c 8s")]).with_board(cards("Kd Qs Jh 9c 8d"));
    let showdown = resolve(game("omaha-lo8"), &t).unwrap();
    assert_eq!(
        showdown,
        Showdown::NoQualifyingHand {
            game: game("omaha-lo8"),
            qualifier: Qualifier::EightOrBetterLow,
        }
    );
    assert_eq!(showdown.description(), "No qualifying low");
    assert!(showdown.winners().is_empty());
}

#[test]
fn draw_a5_trips_lose_to_pair() {
    let t = table(&[(1, "8s Qs 3s 8h 8c"), (2, "Tc 5c Jd Qd 5d")]);
    let result = winners(resolve(game("draw-a5"), &t).unwrap());
    assert_eq!(result.winners, vec![2]);
    assert_eq!(result.hands[0].category, "One Pair");
    assert_eq!(result.description, "One Pair: Qd Jd Tc 5d 5c");
}

#[test]
fn wheel_wins_a5_but_loses_27() {
    let t = table(&[(1, "Ah 2c 3d 4s 5h"), (2, "7h 5c 4d 3s 2h")]);
    assert_eq!(resolve(game("draw-a5"), &t).unwrap().winners(), &[1]);
    let result = winners(resolve(game("draw-27"), &t).unwrap());
    assert_eq!(result.winners, vec![2]);
    assert_eq!(result.description, "High Card: 7h 5c 4d 3s 2h");
}

#[test]
fn draw_27_ranks_seven_five_eight_five_and_pair() {
    let t = table(&[(4, "7h 7c 4d 3s 2h"), (2, "8h 5c 4c 3d 2d"), (7, "7d 5s 4s 3c 2s")]);
    let result = winners(resolve(game("draw-27"), &t).unwrap());
    assert_eq!(result.winners, vec![7]);
}

#[test]
fn lowball_ties_are_exact() {
    let t = table(&[(1, "7h 5c 4d 3s 2h"), (2, "7c 5d 4s 3h 2c")]);
    assert_eq!(resolve(game("draw-27"), &t).unwrap().winners(), &[1, 2]);
}

#[test]
fn draw_lo8_drops_non_qualifying_seats() {
    let t = table(&[(1, "Kd Qs Jh 9c 8d"), (2, "As 2s 3s 4s 9h"), (3, "8h 7c 6d 5s 4h")]);
    let result = winners(resolve(game("draw-lo8"), &t).unwrap());
    assert_eq!(result.winners, vec![3]);
    assert_eq!(result.description, "8-Low: 8h 7c 6d 5s 4h");
}

#[test]
fn draw_lo8_without_qualifier() {
    let t = table(&[(1, "Kd Qs Jh 9c 8d"), (2, "As 2s 3s 4s 9h"), (3, "2c 2d 3c 4c 5c")]);
    let showdown = resolve(game("draw-lo8"), &t).unwrap();
    assert!(matches!(
        showdown,
        Showdown::NoQualifyingHand {
            qualifier: Qualifier::EightOrBetterLow,
            ..
        }
    ));
}

#[test]
fn draw_hi9_needs_nines_or_better() {
    let t = table(&[(1, "8s 8h 3c 4d 6h"), (2, "Ks Qd 7c 5s 2d")]);
    let showdown = resolve(game("draw-hi9"), &t).unwrap();
    assert_eq!(showdown.description(), "No qualifying high");

    let t = table(&[(1, "8s 8h 3c 4d 6h"), (2, "9s 9h Qc 5d 2c")]);
    let result = winners(resolve(game("draw-hi9"), &t).unwrap());
    assert_eq!(result.winners, vec![2]);
    assert_eq!(result.description, "Pair, 9's");
}

#[test]
fn draw_hi9_plays_the_shared_card() {
    let t = table(&[(1, "8s 8h 3c 4d 6h"), (2, "Ks Qd 7c 5s 2d")]).with_board(cards("8d"));
    let result = winners(resolve(game("draw-hi9"), &t).unwrap());
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.hands[0].category, "Three of a Kind");
}

#[test]
fn stud_combines_hole_and_up_cards() {
    let t = table(&[(1, "As Ad 2c"), (2, "Ks Kd Kc")])
        .with_up_cards(1, cards("Ac 7d 8h 9s"))
        .with_up_cards(2, cards("Kh 3d 4h 5s"));
    let result = winners(resolve(game("stud-hi"), &t).unwrap());
    assert_eq!(result.winners, vec![2]);
    assert_eq!(result.description, "Four of a Kind, K's");
}

#[test]
fn razz_takes_the_lowest_five() {
    let t = table(&[(1, "As 2d 3c"), (2, "Ac 2h 3d")])
        .with_up_cards(1, cards("4h 5s Kd Qh"))
        .with_up_cards(2, cards("4c 6s Kh Qd"));
    let result = winners(resolve(game("razz"), &t).unwrap());
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.description, "High Card: 5s 4h 3c 2d As");
}

#[test]
fn stud_27_and_stud_lo8() {
    let t = table(&[(1, "2s 3d 4c"), (2, "As 2h 3h")])
        .with_up_cards(1, cards("5h 7s Kd Kh"))
        .with_up_cards(2, cards("4h 5c Qc Jc"));
    // seat 2 has a wheel for A-5 but only a jack-high for 2-7
    assert_eq!(resolve(game("stud-lo8"), &t).unwrap().winners(), &[2]);
    assert_eq!(resolve(game("stud-27"), &t).unwrap().winners(), &[1]);
}

#[test]
fn badugi_count_and_ace_rule() {
    let t = table(&[(1, "As 2d 3h 4c"), (2, "5s 6d 7h 8c"), (3, "Ac 2c 3c 4d")]);
    let a5 = winners(resolve(game("badugi-a5"), &t).unwrap());
    assert_eq!(a5.winners, vec![1]);
    assert_eq!(a5.description, "Badugi: As 2d 3h 4c");

    let deuce = winners(resolve(game("badugi-27"), &t).unwrap());
    assert_eq!(deuce.winners, vec![2]);
    assert_eq!(deuce.hands[0].category, "Badugi");
}

#[test]
fn badugi_reads_seven_card_holdings_with_up_cards() {
    let t = table(&[(1, "Ac Ad 2c"), (2, "Kc Kd Ks")])
        .with_up_cards(1, cards("3d 4h 5h 6h"))
        .with_up_cards(2, cards("Qc Qd Qh Js"));
    let result = winners(resolve(game("badugi-a5"), &t).unwrap());
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.hands[0].cards.len(), 3);
    assert!(result.description.starts_with("3-card: "));
}

#[test]
fn drawmaha_49() {
    let t = table(&[(1, "Ts Th Td Tc 9s"), (2, "9h 9d 9c 8s 8h")]);
    let result = winners(resolve(game("drawmaha-49"), &t).unwrap());
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.hands[0].total, Some(49));
    assert_eq!(result.hands[0].distance, Some(0));
    assert_eq!(result.description, "Score: 49 (distance to 49: 0)");
}

#[test]
fn drawmaha_49_ties_on_equal_totals() {
    let t = table(&[(2, "Ts Th 9s 9h 8s"), (5, "Td Tc 9d 9c 8h")]);
    let result = winners(resolve(game("drawmaha-49"), &t).unwrap());
    assert_eq!(result.winners, vec![2, 5]);
    assert_eq!(result.hands[1].distance, Some(3));
}

#[test]
fn drawmaha_zero() {
    let t = table(&[(1, "Ks Qs Js Kh As"), (2, "Kd Qd Jd Kc 2s")]);
    let result = winners(resolve(game("drawmaha-zero"), &t).unwrap());
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.description, "Score: 1");
}

#[test]
fn single_seat_wins_alone() {
    let t = table(&[(9, "Ah 2c 3d 4s 5h")]);
    assert_eq!(resolve(game("draw-hi"), &t).unwrap().winners(), &[9]);
}

#[test]
fn empty_table_is_rejected() {
    let err = resolve(Game::Holdem, &Table::new()).unwrap_err();
    assert!(matches!(
        err,
        EvalError::InvalidHoldingSize {
            part: HoldingPart::Table,
            actual: 0,
            ..
        }
    ));
}

#[test]
fn wrong_hole_count_is_rejected() {
    let t = table(&[(1, "As Ks"), (2, "7d 2c 3c")]).with_board(cards("Qs Js Ts"));
    let err = resolve(Game::Holdem, &t).unwrap_err();
    assert_eq!(
        err,
        EvalError::InvalidHoldingSize {
            part: HoldingPart::Hole(2),
            expected: "2".to_string(),
            actual: 3,
        }
    );
    assert_eq!(
        err.to_string(),
        "Invalid holding size for seat 2 hole cards: expected 2, got 3"
    );
}

#[test]
fn wrong_board_count_is_rejected() {
    let t = table(&[(1, "As Ks")]).with_board(cards("Qs Js"));
    let err = resolve(Game::Holdem, &t).unwrap_err();
    assert_eq!(
        err,
        EvalError::InvalidHoldingSize {
            part: HoldingPart::Board,
            expected: "3-5".to_string(),
            actual: 2,
        }
    );

    let t = table(&[(1, "Ts Th Td Tc 9s")]).with_board(cards("2c"));
    assert!(resolve(game("drawmaha-49"), &t).is_err());
}

#[test]
fn short_stud_pool_is_rejected() {
    let t = table(&[(1, "As Ad"), (2, "Ks Kd Kc")])
        .with_up_cards(1, cards("2c"))
        .with_up_cards(2, cards("Kh 3d"));
    let err = resolve(game("stud-hi"), &t).unwrap_err();
    assert!(matches!(
        err,
        EvalError::InvalidHoldingSize {
            part: HoldingPart::Pool(1),
            actual: 3,
            ..
        }
    ));
}

#[test]
fn up_cards_are_rejected_outside_stud_and_badugi() {
    let t = table(&[(1, "As Ks")])
        .with_up_cards(1, cards("2c"))
        .with_board(cards("Qs Js Ts"));
    let err = resolve(Game::Holdem, &t).unwrap_err();
    assert!(matches!(
        err,
        EvalError::InvalidHoldingSize {
            part: HoldingPart::UpCards(1),
            ..
        }
    ));
}

#[test]
fn up_cards_for_an_empty_seat_are_rejected() {
    let t = table(&[(1, "As Ad 2c")])
        .with_up_cards(1, cards("Ac 7d 8h 9s"))
        .with_up_cards(4, cards("Kh"));
    assert_eq!(
        resolve(game("stud-hi"), &t).unwrap_err(),
        EvalError::UnknownSeat { seat: 4 }
    );
}

#[test]
fn duplicate_cards_are_rejected_before_scoring() {
    let t = table(&[(1, "As Ks"), (2, "As 2c")]).with_board(cards("Qs Js Ts"));
    assert_eq!(
        resolve(Game::Holdem, &t).unwrap_err(),
        EvalError::DuplicateCard {
            card: "As".parse().unwrap()
        }
    );

    let t = table(&[(1, "As Ks"), (2, "7d 2c")]).with_board(cards("Qs Js Ks"));
    assert!(matches!(
        resolve(Game::Holdem, &t),
        Err(EvalError::DuplicateCard { .. })
    ));
}

#[test]
fn result_serializes_with_game_id() {
    let t = table(&[(1, "Ts Th Td Tc 9s"), (2, "9h 9d 9c 8s 8h")]);
    let showdown = resolve(game("drawmaha-49"), &t).unwrap();
    let json = serde_json::to_value(&showdown).unwrap();
    assert_eq!(json["outcome"], "winners");
    assert_eq!(json["game"], "drawmaha-49");
    assert_eq!(json["winners"], serde_json::json!([1]));
    assert_eq!(json["hands"][0]["cards"][0], "Ts");
    assert_eq!(json["hands"][0]["total"], 49);

    let back: Showdown = serde_json::from_value(json).unwrap();
    assert_eq!(back, showdown);
}

#[test]
fn no_qualifier_serializes_its_reason() {
    let t = table(&[(1, "Kd Qs Jh 9c 8d")]);
    let json = serde_json::to_value(resolve(game("draw-lo8"), &t).unwrap()).unwrap();
    assert_eq!(json["outcome"], "no_qualifying_hand");
    assert_eq!(json["qualifier"], "eight_or_better_low");
}

#[test]
fn high_category_labels_come_from_the_oracle() {
    let t = table(&[(1, "Kh Kd Kc 3s 3h")]);
    let result = winners(resolve(game("draw-hi"), &t).unwrap());
    assert_eq!(result.hands[0].category, Category::FullHouse.name());
}

#[test]
fn stud_needs_two_down_cards() {
    let t = table(&[(1, "Ah"), (2, "Kc Kd")])
        .with_up_cards(1, cards("2c 3d 4s 5h 6h"))
        .with_up_cards(2, cards("7c 8d 9s"));
    assert_eq!(
        resolve(game("razz"), &t).unwrap_err(),
        EvalError::InvalidHoldingSize {
            part: HoldingPart::Hole(1),
            expected: "2-7".to_string(),
            actual: 1,
        }
    );
}

#[test]
fn every_game_variant_has_its_own_name() {
    use handreader_engine::game::Scoring;
    use handreader_engine::lowball::LowRule;
    use std::collections::HashSet;

    let scorings = [
        Scoring::High,
        Scoring::HighNinesOrBetter,
        Scoring::Lowball(LowRule::AceToFive),
        Scoring::Lowball(LowRule::DeuceToSeven),
        Scoring::LowEightOrBetter,
    ];
    let mut names = HashSet::new();
    for s in scorings {
        for g in [Game::Omaha(s), Game::Draw(s), Game::Stud(s)] {
            assert!(names.insert(g.name()), "{:?} shares the name {}", g, g.name());
        }
    }
}
