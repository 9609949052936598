use rand::Rng;

use super::*;

#[test]
fn test_build_keeps_heap_invariant() {
    let queue = PriorityQueue::build(vec![11, 6, 10, 3, 7, 1, 9]);

    assert!(queue.is_heap());
    assert_eq!(queue.len(), 7);
    assert_eq!(queue.peek(), Some(&1));
}

#[test]
fn test_extract_min_in_order() {
    let mut queue = PriorityQueue::build(vec![5, 3, 8, 1, 9, 2, 2]);
    let mut out = Vec::new();

    while let Some(x) = queue.extract_min() {
        assert!(queue.is_heap());
        out.push(x);
    }

    assert_eq!(out, vec![1, 2, 2, 3, 5, 8, 9]);
}

#[test]
fn test_extract_from_empty() {
    let mut queue: PriorityQueue<u32> = PriorityQueue::new();

    assert!(queue.is_empty());
    assert_eq!(queue.extract_min(), None);
    assert_eq!(queue.peek(), None);
}

#[test]
fn test_build_single_and_empty() {
    let queue: PriorityQueue<u8> = PriorityQueue::build(vec![]);
    assert!(queue.is_empty());

    let mut queue = PriorityQueue::build(vec![42]);
    assert_eq!(queue.extract_min(), Some(42));
    assert!(queue.is_empty());
}

#[test]
fn test_insert_sifts_up() {
    let mut queue = PriorityQueue::build(vec![4, 8, 6]);

    queue.insert(1);
    assert_eq!(queue.peek(), Some(&1));
    assert!(queue.is_heap());

    queue.insert(7);
    queue.insert(0);
    assert_eq!(queue.peek(), Some(&0));
    assert_eq!(queue.len(), 6);
}

#[test]
fn test_interleaved_random_operations() {
    let mut rng = rand::thread_rng();
    let mut queue = PriorityQueue::with_capacity(64);
    let mut reference: Vec<u32> = Vec::new();

    for _ in 0..2000 {
        if rng.gen_bool(0.6) || reference.is_empty() {
            let x = rng.gen_range(0..100);
            queue.insert(x);
            reference.push(x);
        } else {
            reference.sort_unstable();
            let expected = reference.remove(0);
            assert_eq!(queue.extract_min(), Some(expected));
        }
        assert!(queue.is_heap());
        assert_eq!(queue.len(), reference.len());
    }
}

#[test]
fn test_tuple_keys_break_ties_on_second_field() {
    let mut queue: PriorityQueue<(u64, usize)> = vec![(2, 4), (1, 3), (2, 0), (1, 1)].into_iter().collect();

    assert_eq!(queue.extract_min(), Some((1, 1)));
    assert_eq!(queue.extract_min(), Some((1, 3)));
    assert_eq!(queue.extract_min(), Some((2, 0)));
    assert_eq!(queue.extract_min(), Some((2, 4)));
}

#[test]
fn test_display_in_heap_order() {
    let mut queue = PriorityQueue::build(vec![3, 1, 2]);

    assert_eq!(queue.to_string(), "1--3--2");

    queue.extract_min();
    assert_eq!(queue.to_string(), "2--3");

    assert_eq!(PriorityQueue::<u8>::new().to_string(), "");
}
