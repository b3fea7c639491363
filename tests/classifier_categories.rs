use handrank::evaluator::{classify_five, Category};
use handrank::hand::Hand;

fn hand(s: &str) -> Hand {
    s.parse().expect("valid hand")
}

#[test]
fn category_royal_flush() {
    let e = classify_five(&hand("As Ks Qs Js Ts"));
    assert_eq!(e.category, Category::RoyalFlush);
    assert_eq!(e.rank_bits.raw(), 31744); // 0x7C00
    assert_eq!(e.duplicate_signature, 5);
}

#[test]
fn category_straight_flush_wheel() {
    let e = classify_five(&hand("Ad 2d 3d 4d 5d"));
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.rank_bits.raw(), 16444); // 0x403C
}

#[test]
fn category_straight_flush() {
    let e = classify_five(&hand("9h 8h 7h 6h 5h"));
    assert_eq!(e.category, Category::StraightFlush);
}

#[test]
fn category_four_of_a_kind() {
    let e = classify_five(&hand("Jh Jc Jd Js 2h"));
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(e.duplicate_signature, 1);
}

#[test]
fn category_full_house() {
    let e = classify_five(&hand("8h 8c 8d 9s 9h"));
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(e.duplicate_signature, 10);
}

#[test]
fn category_flush() {
    let e = classify_five(&hand("Kh Th 8h 6h 3h"));
    assert_eq!(e.category, Category::Flush);
    assert_eq!(e.duplicate_signature, 5);
}

#[test]
fn category_straight() {
    let e = classify_five(&hand("Ac 5c 4d 3h 2s"));
    assert_eq!(e.category, Category::Straight);
    assert_eq!(e.rank_bits.raw(), 16444);
}

#[test]
fn category_three_of_a_kind() {
    let e = classify_five(&hand("Qc Qd Qh Ts 2c"));
    assert_eq!(e.category, Category::ThreeOfAKind);
    assert_eq!(e.duplicate_signature, 9);
}

#[test]
fn category_two_pair() {
    let e = classify_five(&hand("Jc Jd 9c 9h 2s"));
    assert_eq!(e.category, Category::TwoPair);
    assert_eq!(e.duplicate_signature, 7);
}

#[test]
fn category_pair() {
    let e = classify_five(&hand("Ah Ad Ts 9c 2d"));
    assert_eq!(e.category, Category::Pair);
    assert_eq!(e.duplicate_signature, 6);
}

#[test]
fn category_high_card() {
    let e = classify_five(&hand("Ah Kd 7s 5c 2d"));
    assert_eq!(e.category, Category::HighCard);
    assert_eq!(e.duplicate_signature, 5);
}

#[test]
fn category_ordering_is_total_and_ascending() {
    let ladder = [
        "Ah Kd 7s 5c 2d", // high card
        "Ah Ad Ts 9c 2d", // pair
        "Jc Jd 9c 9h 2s", // two pair
        "Qc Qd Qh Ts 2c", // trips
        "Ac 5c 4d 3h 2s", // straight
        "Kh Th 8h 6h 3h", // flush
        "8h 8c 8d 9s 9h", // full house
        "Jh Jc Jd Js 2h", // quads
        "9h 8h 7h 6h 5h", // straight flush
        "As Ks Qs Js Ts", // royal flush
    ];
    let categories: Vec<Category> =
        ladder.iter().map(|s| classify_five(&hand(s)).category).collect();
    for pair in categories.windows(2) {
        assert!(pair[0] < pair[1], "{:?} should rank below {:?}", pair[0], pair[1]);
    }
    assert_eq!(categories[0].ordinal(), 0);
    assert_eq!(categories[9].ordinal(), 9);
}
