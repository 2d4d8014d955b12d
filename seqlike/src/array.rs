use std::fmt;
use std::rc::Rc;

use crate::kind::{clamp_count, SequenceKind};

/// A sequence backed by one contiguous, shared, immutable slice.
///
/// Cloning is cheap; every operation that changes the contents allocates a
/// new slice.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Array<A> {
    items: Rc<[A]>,
}

impl<A> Array<A> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&A> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[A] {
        &self.items
    }
}

impl<A: Clone> Array<A> {
    pub fn new() -> Self {
        Self {
            items: Rc::from(Vec::new()),
        }
    }

    pub fn take(&self, n: usize) -> Self {
        if n >= self.len() {
            return self.clone();
        }
        self.items[..n].into()
    }

    pub fn drop_first(&self, n: usize) -> Self {
        if n == 0 {
            return self.clone();
        }
        let n = n.min(self.len());
        self.items[n..].into()
    }

    pub fn reverse(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }

    pub fn prepend(&self, element: A) -> Self {
        let mut items = Vec::with_capacity(self.len() + 1);
        items.push(element);
        items.extend(self.items.iter().cloned());
        items.into()
    }

    pub fn concat(&self, suffix: &Self) -> Self {
        if suffix.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return suffix.clone();
        }
        let mut items = Vec::with_capacity(self.len() + suffix.len());
        items.extend(self.items.iter().cloned());
        items.extend(suffix.items.iter().cloned());
        items.into()
    }

    /// Convert every element into another element type.
    pub fn map_into<C>(&self) -> Array<C>
    where
        A: Into<C>,
    {
        Array {
            items: self.items.iter().cloned().map(Into::into).collect(),
        }
    }
}

impl<A: Clone> Default for Array<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> From<Vec<A>> for Array<A> {
    fn from(items: Vec<A>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<A: Clone> From<&[A]> for Array<A> {
    fn from(items: &[A]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<A> FromIterator<A> for Array<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, A> IntoIterator for &'a Array<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<A: fmt::Debug> fmt::Debug for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// The array backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayKind;

impl SequenceKind for ArrayKind {
    type Seq<A: Clone> = Array<A>;

    fn empty<A: Clone>() -> Array<A> {
        Array::new()
    }

    fn of<A: Clone>(element: A) -> Array<A> {
        vec![element].into()
    }

    fn from_iterable<A: Clone>(source: impl IntoIterator<Item = A>) -> Array<A> {
        source.into_iter().collect()
    }

    fn to_iterable<A: Clone>(seq: &Array<A>) -> impl Iterator<Item = A> + '_ {
        seq.iter().cloned()
    }

    fn len<A: Clone>(seq: &Array<A>) -> usize {
        seq.len()
    }

    fn take<A: Clone>(seq: &Array<A>, n: isize) -> Array<A> {
        seq.take(clamp_count(n, seq.len()))
    }

    fn drop<A: Clone>(seq: &Array<A>, n: isize) -> Array<A> {
        seq.drop_first(clamp_count(n, seq.len()))
    }

    fn reverse<A: Clone>(seq: &Array<A>) -> Array<A> {
        seq.reverse()
    }

    fn prepend<A, B, C>(seq: &Array<A>, element: B) -> Array<C>
    where
        A: Clone + Into<C>,
        B: Into<C>,
        C: Clone,
    {
        std::iter::once(element.into())
            .chain(seq.iter().cloned().map(Into::into))
            .collect()
    }

    fn prepend_all<A, B, C>(seq: &Array<A>, prefix: &Array<B>) -> Array<C>
    where
        A: Clone + Into<C>,
        B: Clone + Into<C>,
        C: Clone,
    {
        prefix.map_into::<C>().concat(&seq.map_into::<C>())
    }

    fn concat<A, B, C>(seq: &Array<A>, suffix: &Array<B>) -> Array<C>
    where
        A: Clone + Into<C>,
        B: Clone + Into<C>,
        C: Clone,
    {
        seq.map_into::<C>().concat(&suffix.map_into::<C>())
    }
}
