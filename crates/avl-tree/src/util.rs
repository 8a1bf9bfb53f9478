//! Arena-level AVL algorithms.
//!
//! Every function takes the node [`Arena`] plus a subtree root index and,
//! when it restructures, returns the index of the node that now roots that
//! subtree. Callers write the returned index back into the parent link.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::arena::Arena;
use crate::error::AvlError;
use crate::queue::Queue;
use crate::types::{AvlNode, Balance};

#[inline]
fn bf<T>(arena: &Arena<T>, i: u32) -> i32 {
    arena.node(i).bf
}

#[inline]
fn set_bf<T>(arena: &mut Arena<T>, i: u32, v: i32) {
    arena.node_mut(i).bf = v;
}

/// LL rotation (rotate right) around `n`, which must have a left child.
///
/// The stored factors of `n` and its left child must be their true
/// pre-rotation values; both are updated in place.
pub fn ll_rotate<T>(arena: &mut Arena<T>, n: u32) -> u32 {
    let nl = arena.node(n).l.expect("LL rotation needs a left child");
    let nlr = arena.node(nl).r;

    arena.node_mut(n).l = nlr;
    arena.node_mut(nl).r = Some(n);

    let mut nbf = bf(arena, n);
    let mut nlbf = bf(arena, nl);
    nbf += -1 - nlbf.max(0);
    nlbf += -1 + nbf.min(0);
    set_bf(arena, n, nbf);
    set_bf(arena, nl, nlbf);
    nl
}

/// RR rotation (rotate left) around `n`, which must have a right child.
pub fn rr_rotate<T>(arena: &mut Arena<T>, n: u32) -> u32 {
    let nr = arena.node(n).r.expect("RR rotation needs a right child");
    let nrl = arena.node(nr).l;

    arena.node_mut(n).r = nrl;
    arena.node_mut(nr).l = Some(n);

    let mut nbf = bf(arena, n);
    let mut nrbf = bf(arena, nr);
    nbf += 1 - nrbf.min(0);
    nrbf += 1 + nbf.max(0);
    set_bf(arena, n, nbf);
    set_bf(arena, nr, nrbf);
    nr
}

/// LR case: RR on the left child, then LL on `n`.
pub fn lr_rotate<T>(arena: &mut Arena<T>, n: u32) -> u32 {
    let nl = arena.node(n).l.expect("LR rotation needs a left child");
    let nl = rr_rotate(arena, nl);
    arena.node_mut(n).l = Some(nl);
    ll_rotate(arena, n)
}

/// RL case: LL on the right child, then RR on `n`.
pub fn rl_rotate<T>(arena: &mut Arena<T>, n: u32) -> u32 {
    let nr = arena.node(n).r.expect("RL rotation needs a right child");
    let nr = ll_rotate(arena, nr);
    arena.node_mut(n).r = Some(nr);
    rr_rotate(arena, n)
}

/// Inserts `v` below `root`.
///
/// Values comparing `Less` go left, everything else (equal included) goes
/// right. `taller` reports whether the returned subtree grew by one level.
pub fn insert<T, C>(
    arena: &mut Arena<T>,
    root: Option<u32>,
    v: T,
    cmp: &C,
    taller: &mut bool,
) -> u32
where
    C: Fn(&T, &T) -> Ordering,
{
    let Some(n) = root else {
        *taller = true;
        return arena.alloc(AvlNode::new(v));
    };

    if cmp(&v, &arena.node(n).v) == Ordering::Less {
        let l = arena.node(n).l;
        // Landing in the left child's right subtree makes this an LR shape.
        let inner = l.is_some_and(|l| cmp(&v, &arena.node(l).v) != Ordering::Less);
        let l = insert(arena, l, v, cmp, taller);
        arena.node_mut(n).l = Some(l);
        if !*taller {
            return n;
        }
        match arena.node(n).balance() {
            Some(Balance::LeftHeavy) => {
                *taller = false;
                set_bf(arena, n, 2);
                if inner {
                    lr_rotate(arena, n)
                } else {
                    ll_rotate(arena, n)
                }
            }
            Some(Balance::Even) => {
                set_bf(arena, n, Balance::LeftHeavy.factor());
                n
            }
            Some(Balance::RightHeavy) => {
                *taller = false;
                set_bf(arena, n, Balance::Even.factor());
                n
            }
            None => unreachable!("balance factor {} before insert fixup", bf(arena, n)),
        }
    } else {
        let r = arena.node(n).r;
        let inner = r.is_some_and(|r| cmp(&v, &arena.node(r).v) == Ordering::Less);
        let r = insert(arena, r, v, cmp, taller);
        arena.node_mut(n).r = Some(r);
        if !*taller {
            return n;
        }
        match arena.node(n).balance() {
            Some(Balance::LeftHeavy) => {
                *taller = false;
                set_bf(arena, n, Balance::Even.factor());
                n
            }
            Some(Balance::Even) => {
                set_bf(arena, n, Balance::RightHeavy.factor());
                n
            }
            Some(Balance::RightHeavy) => {
                *taller = false;
                set_bf(arena, n, -2);
                if inner {
                    rl_rotate(arena, n)
                } else {
                    rr_rotate(arena, n)
                }
            }
            None => unreachable!("balance factor {} before insert fixup", bf(arena, n)),
        }
    }
}

/// Locates `v` below `root` and physically removes it.
///
/// Does not rebalance; see [`rebalance`]. On [`AvlError::NotFound`] nothing
/// has been touched, since links are only rewritten on the way back up.
pub fn remove<T, C>(
    arena: &mut Arena<T>,
    root: Option<u32>,
    v: &T,
    cmp: &C,
) -> Result<Option<u32>, AvlError>
where
    C: Fn(&T, &T) -> Ordering,
{
    let Some(n) = root else {
        return Err(AvlError::NotFound);
    };

    match cmp(v, &arena.node(n).v) {
        Ordering::Less => {
            let l = arena.node(n).l;
            let l = remove(arena, l, v, cmp)?;
            arena.node_mut(n).l = l;
            Ok(Some(n))
        }
        Ordering::Greater => {
            let r = arena.node(n).r;
            let r = remove(arena, r, v, cmp)?;
            arena.node_mut(n).r = r;
            Ok(Some(n))
        }
        Ordering::Equal => Ok(unlink(arena, n)),
    }
}

/// Removes node `n`, returning whatever takes its place.
fn unlink<T>(arena: &mut Arena<T>, n: u32) -> Option<u32> {
    let (l, r) = (arena.node(n).l, arena.node(n).r);
    match (l, r) {
        (None, None) => {
            arena.release(n);
            None
        }
        (Some(c), None) | (None, Some(c)) => {
            arena.release(n);
            Some(c)
        }
        (Some(l), Some(_)) => {
            // In-order predecessor: rightmost node of the left subtree.
            let mut prev = None;
            let mut curr = l;
            while let Some(next) = arena.node(curr).r {
                prev = Some(curr);
                curr = next;
            }
            let curr_l = arena.node(curr).l;
            match prev {
                None => arena.node_mut(n).l = curr_l,
                Some(p) => arena.node_mut(p).r = curr_l,
            }
            let pred = arena.release(curr);
            arena.node_mut(n).v = pred.v;
            Some(n)
        }
    }
}

enum Sweep {
    /// Subtree was already balanced; carries its height.
    Height(usize),
    /// A rotation happened somewhere below; carries the subtree's root.
    Rotated(u32),
}

fn sweep<T>(arena: &mut Arena<T>, n: u32) -> Sweep {
    let (l, r) = (arena.node(n).l, arena.node(n).r);
    let lh = match l {
        None => 0,
        Some(l) => match sweep(arena, l) {
            Sweep::Height(h) => h,
            Sweep::Rotated(l) => {
                arena.node_mut(n).l = Some(l);
                return Sweep::Rotated(n);
            }
        },
    };
    let rh = match r {
        None => 0,
        Some(r) => match sweep(arena, r) {
            Sweep::Height(h) => h,
            Sweep::Rotated(r) => {
                arena.node_mut(n).r = Some(r);
                return Sweep::Rotated(n);
            }
        },
    };

    let nbf = lh as i32 - rh as i32;
    set_bf(arena, n, nbf);
    if nbf > 1 {
        let nl = arena.node(n).l.expect("left-heavy node has a left child");
        return Sweep::Rotated(if bf(arena, nl) < 0 {
            lr_rotate(arena, n)
        } else {
            ll_rotate(arena, n)
        });
    }
    if nbf < -1 {
        let nr = arena.node(n).r.expect("right-heavy node has a right child");
        return Sweep::Rotated(if bf(arena, nr) > 0 {
            rl_rotate(arena, n)
        } else {
            rr_rotate(arena, n)
        });
    }
    Sweep::Height(1 + lh.max(rh))
}

/// Whole-tree rebalance used after deletion.
///
/// Recomputes every balance factor from real subtree heights in post-order.
/// The first node found out of `[-1, 1]` is rotated and the sweep restarts
/// from the root; it ends once a full pass rotates nothing. Returns the new
/// root and the number of sweeps run.
pub fn rebalance<T>(arena: &mut Arena<T>, root: Option<u32>) -> (Option<u32>, usize) {
    let Some(mut root) = root else {
        return (None, 0);
    };
    let mut sweeps = 1;
    while let Sweep::Rotated(r) = sweep(arena, root) {
        root = r;
        sweeps += 1;
    }
    (Some(root), sweeps)
}

pub fn find<T, C>(arena: &Arena<T>, root: Option<u32>, v: &T, cmp: &C) -> Option<u32>
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        let n = arena.node(i);
        curr = match cmp(v, &n.v) {
            Ordering::Less => n.l,
            Ordering::Greater => n.r,
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Leftmost node.
pub fn first<T>(arena: &Arena<T>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = arena.node(curr).l {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node.
pub fn last<T>(arena: &Arena<T>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = arena.node(curr).r {
        curr = r;
    }
    Some(curr)
}

/// `height(empty) = 0`, `height(node) = 1 + max(height(l), height(r))`.
pub fn height<T>(arena: &Arena<T>, node: Option<u32>) -> usize {
    node.map_or(0, |i| {
        let n = arena.node(i);
        1 + height(arena, n.l).max(height(arena, n.r))
    })
}

/// True iff every stored factor lies in `[-1, 1]`.
pub fn is_balanced<T>(arena: &Arena<T>, node: Option<u32>) -> bool {
    match node {
        None => true,
        Some(i) => {
            let n = arena.node(i);
            is_balanced(arena, n.l) && (-1..=1).contains(&n.bf) && is_balanced(arena, n.r)
        }
    }
}

pub fn in_order<T, F: FnMut(&T)>(arena: &Arena<T>, node: Option<u32>, visit: &mut F) {
    if let Some(i) = node {
        let n = arena.node(i);
        in_order(arena, n.l, visit);
        visit(&n.v);
        in_order(arena, n.r, visit);
    }
}

pub fn pre_order<T, F: FnMut(&T)>(arena: &Arena<T>, node: Option<u32>, visit: &mut F) {
    if let Some(i) = node {
        let n = arena.node(i);
        visit(&n.v);
        pre_order(arena, n.l, visit);
        pre_order(arena, n.r, visit);
    }
}

pub fn post_order<T, F: FnMut(&T)>(arena: &Arena<T>, node: Option<u32>, visit: &mut F) {
    if let Some(i) = node {
        let n = arena.node(i);
        post_order(arena, n.l, visit);
        post_order(arena, n.r, visit);
        visit(&n.v);
    }
}

pub fn breadth_first<T, F: FnMut(&T)>(arena: &Arena<T>, root: Option<u32>, visit: &mut F) {
    let Some(root) = root else {
        return;
    };
    let mut pending = Queue::new();
    pending.enqueue(root);
    while let Ok(i) = pending.dequeue() {
        let n = arena.node(i);
        visit(&n.v);
        if let Some(l) = n.l {
            pending.enqueue(l);
        }
        if let Some(r) = n.r {
            pending.enqueue(r);
        }
    }
}

/// Deep-copies the subtree at `node` of `src` into `dst`, pre-order.
pub fn copy_tree<T: Clone>(src: &Arena<T>, dst: &mut Arena<T>, node: Option<u32>) -> Option<u32> {
    let n = src.node(node?);
    let i = dst.alloc(AvlNode {
        l: None,
        r: None,
        v: n.v.clone(),
        bf: n.bf,
    });
    let l = copy_tree(src, dst, n.l);
    let r = copy_tree(src, dst, n.r);
    let copy = dst.node_mut(i);
    copy.l = l;
    copy.r = r;
    Some(i)
}

/// Releases every node below `node`, children before parent. Returns how
/// many were released.
pub fn purge<T>(arena: &mut Arena<T>, node: Option<u32>) -> usize {
    let Some(i) = node else {
        return 0;
    };
    let (l, r) = (arena.node(i).l, arena.node(i).r);
    let released = purge(arena, l) + purge(arena, r);
    arena.release(i);
    released + 1
}

fn validate_bf<T>(arena: &Arena<T>, node: Option<u32>) -> Result<usize, String> {
    let Some(i) = node else {
        return Ok(0);
    };
    let n = arena.node(i);
    let lh = validate_bf(arena, n.l)?;
    let rh = validate_bf(arena, n.r)?;
    let expected_bf = lh as i32 - rh as i32;
    if n.bf != expected_bf {
        return Err(format!(
            "Balance factor mismatch: expected {expected_bf}, got {}",
            n.bf
        ));
    }
    if !(-1..=1).contains(&n.bf) {
        return Err("AVL balance violated".to_string());
    }
    Ok(1 + lh.max(rh))
}

/// Checks that stored factors match real heights, stay in `[-1, 1]`, and
/// that in-order values never decrease under `cmp`.
pub fn assert_avl_tree<T, C>(arena: &Arena<T>, root: Option<u32>, cmp: &C) -> Result<(), String>
where
    C: Fn(&T, &T) -> Ordering,
{
    validate_bf(arena, root)?;
    if !is_ordered(arena, root, &mut None, cmp) {
        return Err("Node order violated".to_string());
    }
    Ok(())
}

fn is_ordered<'a, T, C>(
    arena: &'a Arena<T>,
    node: Option<u32>,
    prev: &mut Option<&'a T>,
    cmp: &C,
) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    let Some(i) = node else {
        return true;
    };
    let n = arena.node(i);
    if !is_ordered(arena, n.l, prev, cmp) {
        return false;
    }
    if prev.is_some_and(|p| cmp(p, &n.v) == Ordering::Greater) {
        return false;
    }
    *prev = Some(&n.v);
    is_ordered(arena, n.r, prev, cmp)
}

/// Debug dump of the subtree at `node`.
pub fn print<T: Debug>(arena: &Arena<T>, node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = arena.node(i);
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!(
                "Node[{i}] [bf={}] {:?}\n{tab}L={left}\n{tab}R={right}",
                n.bf, n.v
            )
        }
    }
}
