//! Exploding die integration tests.

use rand::RngCore;
use tabletop::{Die, DieError, DieOptions};

/// Yields the maximum word `highs` times, then zero forever. A die fed by it
/// rolls its top face `highs` times and then a one.
struct ScriptedRng {
    highs: usize,
}

impl ScriptedRng {
    fn next_word(&mut self) -> u64 {
        if self.highs == 0 {
            0
        } else {
            self.highs -= 1;
            u64::MAX
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_word() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let word = self.next_word() as u8;
        dst.fill(word);
    }
}

#[test]
fn options_presets_and_builder() {
    assert_eq!(DieOptions::d4().sides, 4);
    assert_eq!(DieOptions::d6().sides, 6);
    assert_eq!(DieOptions::d8().sides, 8);
    assert_eq!(DieOptions::d10().sides, 10);
    assert_eq!(DieOptions::d12().sides, 12);
    assert_eq!(DieOptions::d20().sides, 20);
    assert_eq!(DieOptions::default(), DieOptions::d6());
    assert_eq!(DieOptions::d4().with_sides(100).sides, 100);
}

#[test]
fn too_few_sides_is_rejected() {
    for sides in [0, 1] {
        let options = DieOptions::default().with_sides(sides);
        assert_eq!(options.validate(), Err(DieError::TooFewSides { sides }));
        assert_eq!(
            Die::new(options, 1).unwrap_err(),
            DieError::TooFewSides { sides }
        );
    }
    assert_eq!(
        DieError::TooFewSides { sides: 1 }.to_string(),
        "a die needs at least 2 sides, got 1"
    );
    assert!(Die::new(DieOptions::default().with_sides(2), 1).is_ok());
}

#[test]
fn rolls_stay_in_range_and_sum_to_total() {
    for options in [
        DieOptions::d4(),
        DieOptions::d6(),
        DieOptions::d8(),
        DieOptions::d10(),
        DieOptions::d12(),
    ] {
        let mut die = Die::new(options, 17).unwrap();
        assert_eq!(die.sides(), options.sides);
        for _ in 0..200 {
            let roll = die.roll();
            assert!(!roll.rolls.is_empty());
            assert!(roll.rolls.iter().all(|v| (1..=options.sides).contains(v)));
            assert_eq!(roll.total, roll.rolls.iter().sum::<u32>());

            let (last, exploding) = roll.rolls.split_last().unwrap();
            assert_ne!(*last, options.sides);
            assert!(exploding.iter().all(|&v| v == options.sides));
            assert_eq!(roll.exploded(), !exploding.is_empty());
        }
    }
}

#[test]
fn top_face_explodes() {
    let mut die = Die::with_rng(DieOptions::d6(), ScriptedRng { highs: 2 }).unwrap();
    let roll = die.roll();
    assert_eq!(roll.rolls, vec![6, 6, 1]);
    assert_eq!(roll.total, 13);
    assert!(roll.exploded());

    let roll = die.roll();
    assert_eq!(roll.rolls, vec![1]);
    assert_eq!(roll.total, 1);
    assert!(!roll.exploded());
}

#[test]
fn small_dice_explode_eventually() {
    let mut die = Die::new(DieOptions::d4(), 5).unwrap();
    assert!((0..1000).any(|_| die.roll().exploded()));
}

#[test]
fn same_seed_rolls_same_sequence() {
    let mut a = Die::new(DieOptions::d8(), 99).unwrap();
    let mut b = Die::new(DieOptions::d8(), 99).unwrap();
    for _ in 0..50 {
        assert_eq!(a.roll(), b.roll());
    }
}

#[test]
fn entropy_seeded_dice_roll_independently() {
    let mut a = Die::from_entropy(DieOptions::d20()).unwrap();
    let mut b = Die::from_entropy(DieOptions::d20()).unwrap();
    let first: Vec<u32> = (0..32).map(|_| a.roll().total).collect();
    let second: Vec<u32> = (0..32).map(|_| b.roll().total).collect();
    assert_ne!(first, second);
}
