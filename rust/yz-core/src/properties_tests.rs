//! Property tests over arbitrary raw input.

use proptest::prelude::*;

use crate::{scores_for_hand, Category, Hand, HandError};

fn dice_strategy() -> impl Strategy<Value = [i32; 5]> {
    prop::array::uniform5(1..=6i32)
}

proptest! {
    #[test]
    fn valid_dice_always_build(dice in dice_strategy()) {
        let hand = Hand::new(&dice).unwrap();
        prop_assert_eq!(hand.dice().map(i32::from), dice);
    }

    #[test]
    fn wrong_arity_is_rejected(values in prop::collection::vec(-10..=10i32, 0..12)) {
        prop_assume!(values.len() != 5);
        prop_assert_eq!(
            Hand::new(&values),
            Err(HandError::InvalidArity { len: values.len() })
        );
    }

    #[test]
    fn out_of_range_face_is_rejected(
        dice in dice_strategy(),
        pos in 0..5usize,
        bad in prop_oneof![i32::MIN..=0, 7..=i32::MAX],
    ) {
        let mut values = dice;
        values[pos] = bad;
        prop_assert_eq!(
            Hand::new(&values),
            Err(HandError::InvalidFace { index: pos, value: bad })
        );
    }

    #[test]
    fn rebuilt_hand_scores_identically(dice in dice_strategy()) {
        let hand = Hand::new(&dice).unwrap();
        let rebuilt = Hand::try_from(hand.dice()).unwrap();
        prop_assert_eq!(rebuilt, hand);
        prop_assert_eq!(scores_for_hand(&rebuilt), scores_for_hand(&hand));
        // Scoring does not disturb the hand.
        prop_assert_eq!(hand.dice().map(i32::from), dice);
    }

    #[test]
    fn chance_is_sum(dice in dice_strategy()) {
        let hand = Hand::new(&dice).unwrap();
        prop_assert_eq!(crate::score(&hand, Category::Chance), dice.iter().sum::<i32>());
    }
}
