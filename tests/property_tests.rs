#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use deepq::replay_buffer::ReplayMemory;
    use deepq::types::Transition;
    use ndarray::array;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn transition(i: usize) -> Transition {
        if i % 5 == 4 {
            Transition::terminal(array![i as f32], i % 3, -(i as f32))
        } else {
            Transition::new(array![i as f32], i % 3, i as f32, Some(array![(i + 1) as f32]))
        }
    }

    proptest! {
        #[test]
        fn test_memory_never_exceeds_cap(max_size in 1usize..=32, n in 0usize..=128) {
            let mut memory = ReplayMemory::new(max_size, 1);
            for i in 0..n {
                memory.add(transition(i));
                prop_assert!(memory.size() <= max_size);
            }
            prop_assert_eq!(memory.size(), n.min(max_size));
        }

        #[test]
        fn test_memory_keeps_most_recent_in_order(max_size in 1usize..=32, n in 0usize..=128) {
            let mut memory = ReplayMemory::new(max_size, 1);
            for i in 0..n {
                memory.add(transition(i));
            }

            let expected: Vec<Transition> =
                (n.saturating_sub(max_size)..n).map(transition).collect();
            let actual: Vec<Transition> = memory.iter().cloned().collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn test_can_train_iff_threshold_reached(train_size in 0usize..=16, n in 0usize..=32) {
            let mut memory = ReplayMemory::new(32, train_size);
            prop_assert_eq!(memory.can_train(), train_size == 0);
            for i in 0..n {
                memory.add(transition(i));
                prop_assert_eq!(memory.can_train(), memory.size() >= train_size);
            }
        }

        #[test]
        fn test_shuffle_preserves_contents(
            max_size in 1usize..=32,
            n in 0usize..=64,
            seed in any::<u64>(),
        ) {
            let mut memory = ReplayMemory::new(max_size, 1);
            for i in 0..n {
                memory.add(transition(i));
            }

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut shuffled: Vec<usize> = memory
                .sample_shuffled(&mut rng)
                .iter()
                .map(|t| t.state[0] as usize)
                .collect();
            shuffled.sort_unstable();

            let stored: Vec<usize> = memory.iter().map(|t| t.state[0] as usize).collect();
            prop_assert_eq!(shuffled, stored);
        }
    }
}
