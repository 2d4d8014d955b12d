use std::fmt;
use std::rc::Rc;

use crate::kind::{clamp_count, SequenceKind};

struct Node<A> {
    element: A,
    next: Option<Rc<Node<A>>>,
}

/// A persistent singly-linked list.
///
/// Lists share their tails: `prepend` is O(1) and `drop` returns a list that
/// shares the remaining nodes with the original. The length is cached.
pub struct List<A> {
    head: Option<Rc<Node<A>>>,
    len: usize,
}

impl<A> List<A> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&A> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Everything but the first element; the empty list stays empty.
    pub fn tail(&self) -> Self {
        match &self.head {
            Some(node) => Self {
                head: node.next.clone(),
                len: self.len - 1,
            },
            None => Self::new(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&A> {
        self.iter().nth(index)
    }

    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Insert an element in front, sharing this list as the tail.
    pub fn prepend(&self, element: A) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Remove up to `n` leading elements; the result shares its nodes.
    pub fn drop_first(&self, n: usize) -> Self {
        let n = n.min(self.len);
        let mut head = self.head.as_ref();
        for _ in 0..n {
            head = head.and_then(|node| node.next.as_ref());
        }
        Self {
            head: head.cloned(),
            len: self.len - n,
        }
    }

    // builds back to front so no reversal is needed
    fn from_vec(mut elements: Vec<A>) -> Self {
        let mut list = Self::new();
        while let Some(element) = elements.pop() {
            list = list.prepend(element);
        }
        list
    }
}

impl<A: Clone> List<A> {
    pub fn of(element: A) -> Self {
        Self::new().prepend(element)
    }

    pub fn take(&self, n: usize) -> Self {
        if n >= self.len {
            return self.clone();
        }
        Self::from_vec(self.iter().take(n).cloned().collect())
    }

    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::new(), |reversed, element| {
                reversed.prepend(element.clone())
            })
    }

    /// This list followed by `suffix`. The result shares `suffix`.
    pub fn concat(&self, suffix: &Self) -> Self {
        if self.is_empty() {
            return suffix.clone();
        }
        if suffix.is_empty() {
            return self.clone();
        }
        let elements = self.iter().cloned().collect::<Vec<_>>();
        elements
            .into_iter()
            .rev()
            .fold(suffix.clone(), |list, element| list.prepend(element))
    }

    /// `prefix` followed by this list. The result shares this list.
    pub fn prepend_all(&self, prefix: &Self) -> Self {
        prefix.concat(self)
    }

    /// Convert every element into another element type.
    pub fn map_into<C>(&self) -> List<C>
    where
        A: Into<C>,
    {
        List::from_vec(self.iter().cloned().map(Into::into).collect())
    }
}

impl<A> Clone for List<A> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<A> Default for List<A> {
    fn default() -> Self {
        Self::new()
    }
}

// unlink iteratively; the default drop would recurse once per node
impl<A> Drop for List<A> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<A: PartialEq> PartialEq for List<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for List<A> {}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<A> From<Vec<A>> for List<A> {
    fn from(elements: Vec<A>) -> Self {
        Self::from_vec(elements)
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: fmt::Debug> fmt::Debug for List<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, A> {
    next: Option<&'a Node<A>>,
    remaining: usize,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A> ExactSizeIterator for Iter<'_, A> {}

/// The linked list backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListKind;

impl SequenceKind for ListKind {
    type Seq<A: Clone> = List<A>;

    fn empty<A: Clone>() -> List<A> {
        List::new()
    }

    fn of<A: Clone>(element: A) -> List<A> {
        List::of(element)
    }

    fn from_iterable<A: Clone>(source: impl IntoIterator<Item = A>) -> List<A> {
        source.into_iter().collect()
    }

    fn to_iterable<A: Clone>(seq: &List<A>) -> impl Iterator<Item = A> + '_ {
        seq.iter().cloned()
    }

    fn len<A: Clone>(seq: &List<A>) -> usize {
        seq.len()
    }

    fn take<A: Clone>(seq: &List<A>, n: isize) -> List<A> {
        seq.take(clamp_count(n, seq.len()))
    }

    fn drop<A: Clone>(seq: &List<A>, n: isize) -> List<A> {
        seq.drop_first(clamp_count(n, seq.len()))
    }

    fn reverse<A: Clone>(seq: &List<A>) -> List<A> {
        seq.reverse()
    }

    fn prepend<A, B, C>(seq: &List<A>, element: B) -> List<C>
    where
        A: Clone + Into<C>,
        B: Into<C>,
        C: Clone,
    {
        seq.map_into::<C>().prepend(element.into())
    }

    fn prepend_all<A, B, C>(seq: &List<A>, prefix: &List<B>) -> List<C>
    where
        A: Clone + Into<C>,
        B: Clone + Into<C>,
        C: Clone,
    {
        seq.map_into::<C>().prepend_all(&prefix.map_into::<C>())
    }

    fn concat<A, B, C>(seq: &List<A>, suffix: &List<B>) -> List<C>
    where
        A: Clone + Into<C>,
        B: Clone + Into<C>,
        C: Clone,
    {
        seq.map_into::<C>().concat(&suffix.map_into::<C>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[i64]) -> List<i64> {
        items.iter().copied().collect()
    }

    fn elements(list: &List<i64>) -> Vec<i64> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_prepend_shares_tail() {
        let a = list(&[2, 3]);
        let b = a.prepend(1);
        assert_eq!(elements(&b), vec![1, 2, 3]);
        assert!(Rc::ptr_eq(
            a.head.as_ref().unwrap(),
            b.head.as_ref().unwrap().next.as_ref().unwrap()
        ));
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_drop_shares_nodes() {
        let a = list(&[1, 2, 3, 4]);
        let b = a.drop_first(2);
        assert_eq!(elements(&b), vec![3, 4]);
        assert_eq!(b.len(), 2);
        assert!(Rc::ptr_eq(
            b.head.as_ref().unwrap(),
            a.tail().tail().head.as_ref().unwrap()
        ));
        assert!(a.drop_first(10).is_empty());
    }

    #[test]
    fn test_head_tail() {
        let a = list(&[1, 2]);
        assert_eq!(a.head(), Some(&1));
        assert_eq!(a.tail().head(), Some(&2));
        assert!(a.tail().tail().tail().is_empty());
        assert_eq!(a.get(1), Some(&2));
        assert_eq!(a.get(2), None);
    }

    #[test]
    fn test_concat_shares_suffix() {
        let a = list(&[1, 2]);
        let b = list(&[3, 4]);
        let c = a.concat(&b);
        assert_eq!(elements(&c), vec![1, 2, 3, 4]);
        assert!(Rc::ptr_eq(
            b.head.as_ref().unwrap(),
            c.drop_first(2).head.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_reverse() {
        assert_eq!(elements(&list(&[1, 2, 3]).reverse()), vec![3, 2, 1]);
        assert!(list(&[]).reverse().is_empty());
    }

    #[test]
    fn test_long_list_drops() {
        let a: List<i64> = (0..200_000).collect();
        assert_eq!(a.len(), 200_000);
        drop(a);
    }

    #[test]
    fn test_shared_drop_keeps_other_alive() {
        let a = list(&[1, 2, 3]);
        let b = a.drop_first(1);
        drop(a);
        assert_eq!(elements(&b), vec![2, 3]);
    }

    #[test]
    fn test_size_hint() {
        let a = list(&[1, 2, 3]);
        let mut iter = a.iter();
        iter.next();
        assert_eq!(iter.len(), 2);
    }
}
