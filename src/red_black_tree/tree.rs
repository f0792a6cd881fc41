use crate::red_black_tree::node::{Color, Node};
use compare::Compare;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn is_red<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

// reddens the root ahead of a removal so that the descent can borrow from it
pub fn fix_root<T>(tree: &mut Tree<T>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn blacken_root<T>(tree: &mut Tree<T>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert<T, C>(tree: &mut Tree<T>, element: T, cmp: &C) -> bool
where
    C: Compare<T>,
{
    let inserted = match tree {
        Some(ref mut node) => match cmp.compare(&element, &node.element) {
            Ordering::Less => insert(&mut node.left, element, cmp),
            Ordering::Greater => insert(&mut node.right, element, cmp),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(element)));
            return true;
        },
    };

    let node = tree.as_mut().expect("Expected non-empty tree.");

    if is_red(&node.right) && !is_red(&node.left) {
        node.rotate_left();
    }

    let should_rotate = {
        if let Some(ref child) = node.left {
            child.color == Color::Red && is_red(&child.left)
        } else {
            false
        }
    };
    if should_rotate {
        node.rotate_right();
    }

    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }

    inserted
}

// precondition: the element is present in the tree
pub fn remove<T, C>(tree: &mut Tree<T>, element: &T, cmp: &C) -> Option<T>
where
    C: Compare<T>,
{
    let removed = match tree.take() {
        Some(mut node) => {
            if cmp.compares_lt(element, &node.element) {
                let should_shift = {
                    if let Some(ref child) = node.left {
                        child.color != Color::Red && !is_red(&child.left)
                    } else {
                        false
                    }
                };
                if should_shift {
                    node.shift_left();
                }

                let removed = remove(&mut node.left, element, cmp);
                *tree = Some(node);
                removed
            } else {
                if is_red(&node.left) {
                    node.rotate_right();
                }

                if cmp.compares_eq(element, &node.element) && node.right.is_none() {
                    assert!(node.left.is_none());
                    return Some(node.element);
                }

                let should_shift = {
                    if let Some(ref child) = node.right {
                        child.color != Color::Red && !is_red(&child.left)
                    } else {
                        false
                    }
                };
                if should_shift {
                    node.shift_right();
                }

                if cmp.compares_eq(element, &node.element) {
                    let successor = remove_min(&mut node.right)
                        .expect("Expected a non-empty right subtree.");
                    let removed = mem::replace(&mut node.element, successor);
                    *tree = Some(node);
                    Some(removed)
                } else {
                    let removed = remove(&mut node.right, element, cmp);
                    *tree = Some(node);
                    removed
                }
            }
        },
        None => return None,
    };

    let node = tree.as_mut().expect("Expected non-empty tree.");
    node.balance();

    removed
}

pub fn remove_min<T>(tree: &mut Tree<T>) -> Option<T> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let should_shift = {
                if let Some(ref child) = node.left {
                    child.color != Color::Red && !is_red(&child.left)
                } else {
                    false
                }
            };
            if should_shift {
                node.shift_left();
            }

            let removed = remove_min(&mut node.left);
            node.balance();
            return removed;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            let Node { element, .. } = *node;
            Some(element)
        },
        None => None,
    }
}

pub fn contains<T, C>(tree: &Tree<T>, element: &T, cmp: &C) -> bool
where
    C: Compare<T>,
{
    tree.as_ref().map_or(false, |node| {
        match cmp.compare(element, &node.element) {
            Ordering::Less => contains(&node.left, element, cmp),
            Ordering::Greater => contains(&node.right, element, cmp),
            Ordering::Equal => true,
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.element
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.element
    })
}
