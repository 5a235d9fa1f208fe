use handreader_engine::badugi::{best_badugi, greedy_walk};
use handreader_engine::cards::{parse_cards, Card};
use handreader_engine::combos::combinations;
use handreader_engine::lowball::LowRule;

fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).unwrap()
}

#[test]
fn four_rainbow_cards_make_a_badugi() {
    let hand = best_badugi(&cards("Kc Qd Jh Ts"), LowRule::AceToFive);
    assert_eq!(hand.count(), 4);
    assert_eq!(hand.ranks, vec![13, 12, 11, 10]);
    assert_eq!(hand.describe(), "Badugi: Ts Jh Qd Kc");
}

#[test]
fn more_cards_always_win_under_both_rules() {
    for rule in [LowRule::AceToFive, LowRule::DeuceToSeven] {
        let king_badugi = best_badugi(&cards("Kc Qd Jh Ts"), rule);
        let three_card = best_badugi(&cards("Ac 2d 3h 4h"), rule);
        assert_eq!(three_card.count(), 3);
        assert!(king_badugi < three_card, "{rule}");
    }
}

#[test]
fn ace_rule_decides_equal_counts() {
    let ace_low = cards("As 2d 3h 4c");
    let eight_high = cards("5s 6d 7h 8c");

    let a5 = (
        best_badugi(&ace_low, LowRule::AceToFive),
        best_badugi(&eight_high, LowRule::AceToFive),
    );
    assert!(a5.0 < a5.1);
    assert_eq!(a5.0.ranks, vec![4, 3, 2, 1]);

    let deuce = (
        best_badugi(&ace_low, LowRule::DeuceToSeven),
        best_badugi(&eight_high, LowRule::DeuceToSeven),
    );
    assert!(deuce.1 < deuce.0);
    assert_eq!(deuce.0.ranks, vec![14, 4, 3, 2]);
}

#[test]
fn subset_search_beats_a_single_greedy_pass() {
    let hand = cards("Ac Ad 2c");
    let single = greedy_walk(&hand, LowRule::AceToFive);
    assert_eq!(single.count(), 1);

    let best = best_badugi(&hand, LowRule::AceToFive);
    assert_eq!(best.count(), 2);
    assert_eq!(best.describe(), "2-card: Ad 2c");
}

#[test]
fn best_badugi_is_optimal_for_seven_cards() {
    let hand = cards("Ac Ad 2c 3d 4h 5h Ks");
    for rule in [LowRule::AceToFive, LowRule::DeuceToSeven] {
        let best = best_badugi(&hand, rule);
        // brute force over every rainbow subset
        for size in 1..=4 {
            for subset in combinations(&hand, size) {
                let rainbow = subset.iter().enumerate().all(|(i, a)| {
                    subset[i + 1..]
                        .iter()
                        .all(|b| a.rank != b.rank && a.suit != b.suit)
                });
                if rainbow {
                    assert!(best <= greedy_walk(&subset, rule));
                }
            }
        }
    }
}

#[test]
fn paired_and_suited_cards_are_dropped() {
    let hand = best_badugi(&cards("2c 2d 5c 9c"), LowRule::AceToFive);
    assert_eq!(hand.count(), 2);
    assert_eq!(hand.ranks, vec![5, 2]);
    assert_eq!(hand.describe(), "2-card: 2d 5c");
}
