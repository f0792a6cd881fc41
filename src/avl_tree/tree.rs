use crate::avl_tree::node::Node;
use compare::Compare;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

// an absent subtree has height -1 so that a single node has height 0
pub fn height<T>(tree: &Tree<T>) -> isize {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance_factor() > 1 {
        if let Some(child) = node.right.take() {
            if child.balance_factor() < 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    } else if node.balance_factor() < -1 {
        if let Some(child) = node.left.take() {
            if child.balance_factor() > 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    }

    *tree = Some(node);
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

    balance(tree);
    inserted
}

pub fn remove<T, C>(tree: &mut Tree<T>, element: &T, cmp: &C) -> Option<T>
where
    C: Compare<T>,
{
    let removed = match tree.take() {
        Some(mut node) => match cmp.compare(element, &node.element) {
            Ordering::Less => {
                let removed = remove(&mut node.left, element, cmp);
                *tree = Some(node);
                removed
            },
            Ordering::Greater => {
                let removed = remove(&mut node.right, element, cmp);
                *tree = Some(node);
                removed
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    let successor = match remove_min(&mut node.right) {
                        Some(successor) => successor,
                        None => unreachable!(),
                    };
                    let removed = mem::replace(&mut node.element, successor);
                    *tree = Some(node);
                    Some(removed)
                } else {
                    let Node {
                        element: removed,
                        left,
                        right,
                        ..
                    } = *node;
                    *tree = left.or(right);
                    return Some(removed);
                }
            },
        },
        None => return None,
    };

    balance(tree);
    removed
}

pub fn remove_min<T>(tree: &mut Tree<T>) -> Option<T> {
    let removed = match tree {
        Some(ref mut node) if node.left.is_some() => remove_min(&mut node.left),
        Some(_) => {
            let node = match tree.take() {
                Some(node) => node,
                None => unreachable!(),
            };
            let Node { element, right, .. } = *node;
            *tree = right;
            return Some(element);
        },
        None => return None,
    };

    balance(tree);
    removed
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
