use balanced_collections::avl_tree::AvlSet;
use balanced_collections::red_black_tree::RedBlackSet;
use balanced_collections::{Error, SortedSet};
use std::cmp::Ordering;

fn exercise_basic_workflow(set: &mut dyn SortedSet<u32>) {
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);

    assert!(set.insert(10));
    assert!(set.insert(5));
    assert!(set.insert(15));
    assert!(!set.insert(10));
    assert_eq!(set.in_order_traversal(), [&5, &10, &15]);
    assert_eq!(set.len(), 3);
    assert!(set.contains(&5));
    assert!(!set.contains(&7));
    assert_eq!(set.first(), Ok(&5));
    assert_eq!(set.last(), Ok(&15));

    assert!(set.remove(&10));
    assert!(set.remove(&15));
    assert!(!set.remove(&15));
    assert_eq!(set.in_order_traversal(), [&5]);
    assert_eq!(set.len(), 1);

    assert!(set.remove(&5));
    assert!(set.is_empty());

    assert!(set.insert(15));
    assert_eq!(set.in_order_traversal(), [&15]);
    assert_eq!(set.len(), 1);
}

fn exercise_empty_errors(set: &mut dyn SortedSet<u32>) {
    assert_eq!(set.first().err(), Some(Error::EmptyCollection));
    assert_eq!(set.last().err(), Some(Error::EmptyCollection));
    assert_eq!(set.pop_min().err(), Some(Error::EmptyCollection));
    assert!(set.is_empty());
}

fn exercise_pop_min(set: &mut dyn SortedSet<u32>) {
    for element in vec![9, 1, 8, 2, 7, 3] {
        set.insert(element);
    }

    let mut drained = Vec::new();
    while let Ok(element) = set.pop_min() {
        drained.push(element);
    }

    assert_eq!(drained, vec![1, 2, 3, 7, 8, 9]);
    assert!(set.is_empty());
}

#[test]
fn avl_set_satisfies_contract() {
    exercise_basic_workflow(&mut AvlSet::<u32>::new());
    exercise_empty_errors(&mut AvlSet::<u32>::new());
    exercise_pop_min(&mut AvlSet::<u32>::new());
}

#[test]
fn red_black_set_satisfies_contract() {
    exercise_basic_workflow(&mut RedBlackSet::<u32>::new());
    exercise_empty_errors(&mut RedBlackSet::<u32>::new());
    exercise_pop_min(&mut RedBlackSet::<u32>::new());
}

#[test]
fn engines_are_interchangeable() {
    let mut sets: Vec<Box<dyn SortedSet<u32>>> =
        vec![Box::new(AvlSet::<u32>::new()), Box::new(RedBlackSet::<u32>::new())];

    for set in &mut sets {
        for element in vec![2, 4, 1, 3] {
            set.insert(element);
        }
    }

    for set in &sets {
        assert_eq!(set.in_order_traversal(), [&1, &2, &3, &4]);
    }
}

fn evens_before_odds(lhs: &u32, rhs: &u32) -> Ordering {
    (lhs % 2).cmp(&(rhs % 2)).then(lhs.cmp(rhs))
}

#[test]
fn avl_set_respects_injected_ordering() {
    let mut set = AvlSet::with_cmp(evens_before_odds as fn(&u32, &u32) -> Ordering);
    for element in vec![3, 4, 5, 6] {
        set.insert(element);
    }
    assert_eq!(set.in_order_traversal(), [&4, &6, &3, &5]);
}

#[test]
fn red_black_set_respects_injected_ordering() {
    let mut set = RedBlackSet::with_cmp(evens_before_odds as fn(&u32, &u32) -> Ordering);
    for element in vec![3, 4, 5, 6] {
        set.insert(element);
    }
    assert_eq!(set.in_order_traversal(), [&4, &6, &3, &5]);
}
