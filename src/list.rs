// konsa - Persistent singly-linked lists
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! An immutable singly-linked list with structural sharing.
//!
//! A list is either empty or a node holding an element and a shared link
//! to the rest of the list. [`List::cons`] is O(1) and never copies: the
//! new list points at the existing tail, so any number of lists may share
//! a common tail segment. Construction is strictly additive from the
//! empty list, so no cycles can form; shared segments are freed by
//! reference counting once the last list using them is dropped.
//!
//! [`List::fold_right`] and [`List::fold_left`] are the two traversal
//! primitives; `map`, `filter`, `reverse` and `len` are derived from them.
//!
//! ```rust
//! use konsa::List;
//!
//! let one = List::cons(1, &List::empty());
//! let both = List::cons(0, &one); // shares `one` as its tail
//! assert_eq!(both.to_string(), "[0, 1]");
//! assert_eq!(both.tail(), one);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::maybe::Maybe;

type Link<T> = Option<Rc<Node<T>>>;

struct Node<T> {
    elem: T,
    next: Link<T>,
}

/// A persistent singly-linked list.
///
/// Cloning a list is O(1): it bumps the reference count of the head node
/// and shares the whole spine.
pub struct List<T> {
    head: Link<T>,
}

impl<T> List<T> {
    /// The empty list. Allocates nothing.
    pub fn empty() -> Self {
        List { head: None }
    }

    /// Prepend `elem` to `tail`, sharing `tail` as the rest of the new
    /// list. O(1); `tail` itself is untouched and remains usable.
    pub fn cons(elem: T, tail: &List<T>) -> List<T> {
        List {
            head: Some(Rc::new(Node {
                elem,
                next: tail.head.clone(),
            })),
        }
    }

    /// The first element, or `Nothing` for the empty list.
    pub fn head(&self) -> Maybe<&T> {
        match &self.head {
            Some(node) => Maybe::just(&node.elem),
            None => Maybe::nothing(),
        }
    }

    /// Everything but the first element. The tail of the empty list is
    /// the empty list; this never fails.
    pub fn tail(&self) -> List<T> {
        match &self.head {
            Some(node) => List {
                head: node.next.clone(),
            },
            None => List::empty(),
        }
    }

    /// true if this list has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The number of elements, counted with a left fold.
    pub fn len(&self) -> usize {
        self.fold_left(0, |n, _| n + 1)
    }

    /// Iterate the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Reduce from the left: `f(f(f(init, x1), x2), ..., xn)`.
    ///
    /// Implemented as an iterative walk down the spine, so it is
    /// stack-safe for lists of any length.
    pub fn fold_left<R, F>(&self, init: R, mut f: F) -> R
    where
        F: FnMut(R, &T) -> R,
    {
        let mut acc = init;
        let mut link = &self.head;
        while let Some(node) = link {
            acc = f(acc, &node.elem);
            link = &node.next;
        }
        acc
    }

    /// Reduce from the right: `f(x1, f(x2, ... f(xn, init)))`.
    ///
    /// NOT STACK-SAFE: this recurses once per element, so the call depth
    /// equals the list length. Use [`List::fold_left`] (over the reversed
    /// list if association matters) for lists that may be very long.
    pub fn fold_right<R, F>(&self, init: R, f: F) -> R
    where
        F: Fn(&T, R) -> R,
    {
        fn go<T, R, F>(link: &Link<T>, init: R, f: &F) -> R
        where
            F: Fn(&T, R) -> R,
        {
            match link {
                Some(node) => {
                    let folded = go(&node.next, init, f);
                    f(&node.elem, folded)
                }
                None => init,
            }
        }
        go(&self.head, init, &f)
    }

    /// Apply a function to every element, preserving order.
    pub fn map<U, F>(&self, f: F) -> List<U>
    where
        F: Fn(&T) -> U,
    {
        self.fold_right(List::empty(), |x, acc| List::cons(f(x), &acc))
    }

    /// All but the first `n` elements. Shares the remaining spine with
    /// this list instead of copying it; skipping past the end yields the
    /// empty list.
    pub fn skip(&self, n: usize) -> List<T> {
        let mut link = &self.head;
        let mut remaining = n;
        while remaining > 0 {
            match link {
                Some(node) => {
                    link = &node.next;
                    remaining -= 1;
                }
                None => break,
            }
        }
        List { head: link.clone() }
    }
}

impl<T: Clone> List<T> {
    /// The list reversed, built with a left fold.
    pub fn reverse(&self) -> List<T> {
        self.fold_left(List::empty(), |acc, x| List::cons(x.clone(), &acc))
    }

    /// Keep only the elements satisfying `p`, preserving their relative
    /// order.
    pub fn filter<P>(&self, p: P) -> List<T>
    where
        P: Fn(&T) -> bool,
    {
        self.fold_right(List::empty(), |x, acc| {
            if p(x) {
                List::cons(x.clone(), &acc)
            } else {
                acc
            }
        })
    }

    /// The first `min(n, len)` elements, preserving order.
    pub fn take(&self, n: usize) -> List<T> {
        self.iter().take(n).cloned().collect()
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::empty()
    }
}

/// Builds the list by consing in reverse, so iterating the result yields
/// the source elements in their original order.
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        let mut list = List::empty();
        while let Some(item) = items.pop() {
            list = List::cons(item, &list);
        }
        list
    }
}

/// Borrowing iterator over a list's elements, front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.elem
        })
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Structural, element-wise equality. Spines that reach a physically
/// shared node compare equal from there without walking the rest.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = &self.head;
        let mut b = &other.head;
        loop {
            match (a, b) {
                (None, None) => return true,
                (Some(x), Some(y)) => {
                    if Rc::ptr_eq(x, y) {
                        return true;
                    }
                    if x.elem != y.elem {
                        return false;
                    }
                    a = &x.next;
                    b = &y.next;
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in self {
            item.hash(state);
        }
    }
}

/// Renders as `[e1, e2, ..., en]`, `[]` when empty.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Unlinks the spine iteratively. The derived drop would recurse once per
/// node and overflow the stack on a long uniquely-owned spine; this walks
/// it in a loop and stops at the first node another list still shares.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(node) = link {
            match Rc::try_unwrap(node) {
                Ok(mut node) => link = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Construct a list from its elements, in order.
///
/// ```rust
/// use konsa::{list, List};
///
/// let xs: List<i32> = list![1, 2, 3];
/// assert_eq!(xs.to_string(), "[1, 2, 3]");
/// let none: List<i32> = list![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::list::List::empty()
    };
    ($($elem:expr),+ $(,)?) => {
        [$($elem),+].into_iter().collect::<$crate::list::List<_>>()
    };
}

// ============================================================================
// Tests
// ============================================================================
