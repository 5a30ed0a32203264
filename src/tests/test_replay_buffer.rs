use ndarray::array;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use crate::replay_buffer::ReplayMemory;
use crate::types::Transition;

fn transition(i: usize) -> Transition {
    Transition::new(array![i as f32], i % 2, i as f32, Some(array![(i + 1) as f32]))
}

#[test]
fn test_replay_memory_add_and_size() {
    let mut memory = ReplayMemory::new(10, 1);
    assert!(memory.is_empty());

    let stored = memory.add(transition(0)).clone();
    assert_eq!(stored, transition(0));
    assert_eq!(memory.size(), 1);
    assert!(!memory.is_empty());
}

#[test]
fn test_replay_memory_evicts_oldest_first() {
    let mut memory = ReplayMemory::new(3, 1);
    let a = transition(0);
    let b = transition(1);
    let c = transition(2);
    let d = transition(3);

    for t in [a, b.clone(), c.clone(), d.clone()] {
        memory.add(t);
        assert!(memory.size() <= 3);
    }

    let contents: Vec<Transition> = memory.iter().cloned().collect();
    assert_eq!(contents, vec![b, c, d]);
}

#[test]
fn test_add_returns_latest_after_eviction() {
    let mut memory = ReplayMemory::new(1, 1);
    memory.add(transition(0));
    let stored = memory.add(transition(1)).clone();

    assert_eq!(stored, transition(1));
    assert_eq!(memory.size(), 1);
}

#[test]
fn test_can_train_threshold() {
    let mut memory = ReplayMemory::new(10, 5);
    assert!(!memory.can_train());

    for i in 0..4 {
        memory.add(transition(i));
        assert!(!memory.can_train());
    }

    memory.add(transition(4));
    assert!(memory.can_train());
}

#[test]
fn test_sample_shuffled_is_permutation() {
    let mut memory = ReplayMemory::new(50, 1);
    for i in 0..20 {
        memory.add(transition(i));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let samples = memory.sample_shuffled(&mut rng);
    assert_eq!(samples.len(), 20);

    let mut seen: Vec<usize> = samples.iter().map(|t| t.state[0] as usize).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..20).collect::<Vec<_>>());
}

#[test]
fn test_sample_shuffled_is_reproducible() {
    let mut memory = ReplayMemory::new(50, 1);
    for i in 0..20 {
        memory.add(transition(i));
    }

    let first = memory.sample_shuffled(&mut ChaCha8Rng::seed_from_u64(11));
    let second = memory.sample_shuffled(&mut ChaCha8Rng::seed_from_u64(11));
    assert_eq!(first, second);
}

#[test]
fn test_sample_shuffled_empty() {
    let memory = ReplayMemory::new(4, 1);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(memory.sample_shuffled(&mut rng).is_empty());
}

#[test]
#[should_panic]
fn test_zero_capacity_panics() {
    let _ = ReplayMemory::new(0, 0);
}
