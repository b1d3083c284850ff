//! Property tests for card ordering.

use std::cmp::Ordering;

use proptest::prelude::*;
use proptest::sample::select;
use tabletop::{Card, compare, full_deck};

fn deck_card() -> impl Strategy<Value = Card> {
    select(full_deck())
}

fn any_card() -> impl Strategy<Value = Card> {
    (any::<u8>(), any::<u8>(), any::<bool>())
        .prop_map(|(rank, suit, sleeved)| Card::from_raw(rank, suit, sleeved))
}

proptest! {
    #[test]
    fn compare_is_reflexive(a in deck_card()) {
        prop_assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in deck_card(), b in deck_card()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        prop_assert_eq!(compare(&a, &b) == Ordering::Equal, a == b);
    }

    #[test]
    fn compare_is_transitive(a in deck_card(), b in deck_card(), c in deck_card()) {
        if compare(&a, &b) != Ordering::Greater && compare(&b, &c) != Ordering::Greater {
            prop_assert_ne!(compare(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn sleeved_absorbs_everything(s in any_card(), c in any_card()) {
        let s = s.sleeve();
        prop_assert_eq!(compare(&s, &c), Ordering::Equal);
        prop_assert_eq!(compare(&c, &s), Ordering::Equal);
    }

    #[test]
    fn black_joker_is_lowest(c in deck_card()) {
        prop_assume!(c != Card::BLACK_JOKER);
        prop_assert_eq!(compare(&Card::BLACK_JOKER, &c), Ordering::Less);
        prop_assert_eq!(compare(&c, &Card::BLACK_JOKER), Ordering::Greater);
    }

    #[test]
    fn red_joker_is_highest(c in deck_card()) {
        prop_assume!(c != Card::RED_JOKER && c != Card::BLACK_JOKER);
        prop_assert_eq!(compare(&Card::RED_JOKER, &c), Ordering::Greater);
    }
}
