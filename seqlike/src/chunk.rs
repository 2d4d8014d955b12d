use std::fmt;
use std::rc::Rc;

use crate::kind::{clamp_count, SequenceKind};

// concatenation trees deeper than this are flattened into a single array
const MAXIMUM_DEPTH: usize = 32;

enum Backing<A> {
    Empty,
    Singleton(A),
    Array(Rc<[A]>),
    // a window of `len` elements starting at `offset`
    Slice { array: Rc<[A]>, offset: usize },
    Concat { left: Rc<Chunk<A>>, right: Rc<Chunk<A>> },
}

/// A sequence stored as a tree of shared array pieces.
///
/// `take` and `drop` produce windows onto the existing arrays and
/// concatenation creates a new tree node instead of copying, so most
/// operations avoid copying elements. Trees that grow too deep are compacted
/// into one flat array.
pub struct Chunk<A> {
    backing: Backing<A>,
    len: usize,
    depth: usize,
}

impl<A> Chunk<A> {
    pub const fn new() -> Self {
        Self {
            backing: Backing::Empty,
            len: 0,
            depth: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The depth of the concatenation tree; flat chunks have depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn get(&self, index: usize) -> Option<&A> {
        if index >= self.len {
            return None;
        }
        match &self.backing {
            Backing::Empty => None,
            Backing::Singleton(element) => Some(element),
            Backing::Array(array) => array.get(index),
            Backing::Slice { array, offset } => array.get(offset + index),
            Backing::Concat { left, right } => {
                if index < left.len {
                    left.get(index)
                } else {
                    right.get(index - left.len)
                }
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            stack: vec![self],
            current: Default::default(),
            remaining: self.len,
        }
    }

    fn from_vec(mut elements: Vec<A>) -> Self {
        match elements.len() {
            0 => Self::new(),
            1 => match elements.pop() {
                Some(element) => Self::singleton(element),
                None => Self::new(),
            },
            len => Self {
                backing: Backing::Array(elements.into()),
                len,
                depth: 0,
            },
        }
    }

    fn singleton(element: A) -> Self {
        Self {
            backing: Backing::Singleton(element),
            len: 1,
            depth: 0,
        }
    }
}

impl<A: Clone> Chunk<A> {
    pub fn of(element: A) -> Self {
        Self::singleton(element)
    }

    fn window(array: &Rc<[A]>, offset: usize, len: usize) -> Self {
        match len {
            0 => Self::new(),
            1 => Self::singleton(array[offset].clone()),
            _ if offset == 0 && len == array.len() => Self {
                backing: Backing::Array(array.clone()),
                len,
                depth: 0,
            },
            _ => Self {
                backing: Backing::Slice {
                    array: array.clone(),
                    offset,
                },
                len,
                depth: 0,
            },
        }
    }

    pub fn take(&self, n: usize) -> Self {
        if n == 0 {
            return Self::new();
        }
        if n >= self.len {
            return self.clone();
        }
        match &self.backing {
            Backing::Array(array) => Self::window(array, 0, n),
            Backing::Slice { array, offset } => Self::window(array, *offset, n),
            Backing::Concat { left, right } => {
                if n <= left.len {
                    left.take(n)
                } else {
                    left.concat(&right.take(n - left.len))
                }
            }
            // shorter than any n that gets here
            Backing::Empty | Backing::Singleton(_) => self.clone(),
        }
    }

    pub fn drop_first(&self, n: usize) -> Self {
        if n == 0 {
            return self.clone();
        }
        if n >= self.len {
            return Self::new();
        }
        match &self.backing {
            Backing::Array(array) => Self::window(array, n, self.len - n),
            Backing::Slice { array, offset } => Self::window(array, offset + n, self.len - n),
            Backing::Concat { left, right } => {
                if n >= left.len {
                    right.drop_first(n - left.len)
                } else {
                    left.drop_first(n).concat(right)
                }
            }
            Backing::Empty | Backing::Singleton(_) => Self::new(),
        }
    }

    /// This chunk followed by `suffix`.
    pub fn concat(&self, suffix: &Self) -> Self {
        if self.is_empty() {
            return suffix.clone();
        }
        if suffix.is_empty() {
            return self.clone();
        }
        let depth = self.depth.max(suffix.depth) + 1;
        if depth > MAXIMUM_DEPTH {
            return Self::from_vec(self.iter().chain(suffix.iter()).cloned().collect());
        }
        Self {
            backing: Backing::Concat {
                left: Rc::new(self.clone()),
                right: Rc::new(suffix.clone()),
            },
            len: self.len + suffix.len,
            depth,
        }
    }

    pub fn prepend(&self, element: A) -> Self {
        Self::of(element).concat(self)
    }

    pub fn append(&self, element: A) -> Self {
        self.concat(&Self::of(element))
    }

    /// `prefix` followed by this chunk.
    pub fn prepend_all(&self, prefix: &Self) -> Self {
        prefix.concat(self)
    }

    pub fn reverse(&self) -> Self {
        let mut elements = self.to_vec();
        elements.reverse();
        Self::from_vec(elements)
    }

    /// Flatten the tree into one array.
    pub fn compact(&self) -> Self {
        match &self.backing {
            Backing::Empty | Backing::Singleton(_) | Backing::Array(_) => self.clone(),
            _ => Self::from_vec(self.to_vec()),
        }
    }

    pub fn to_vec(&self) -> Vec<A> {
        self.iter().cloned().collect()
    }

    /// Convert every element into another element type.
    ///
    /// The concatenation tree keeps its shape and depth; only the leaf
    /// pieces are copied.
    pub fn map_into<C>(&self) -> Chunk<C>
    where
        A: Into<C>,
    {
        let backing = match &self.backing {
            Backing::Empty => Backing::Empty,
            Backing::Singleton(element) => Backing::Singleton(element.clone().into()),
            Backing::Array(array) => Backing::Array(array.iter().cloned().map(Into::into).collect()),
            Backing::Slice { array, offset } => Backing::Array(
                array[*offset..*offset + self.len]
                    .iter()
                    .cloned()
                    .map(Into::into)
                    .collect(),
            ),
            Backing::Concat { left, right } => Backing::Concat {
                left: Rc::new(left.map_into::<C>()),
                right: Rc::new(right.map_into::<C>()),
            },
        };
        Chunk {
            backing,
            len: self.len,
            depth: self.depth,
        }
    }
}

impl<A: Clone> Clone for Chunk<A> {
    fn clone(&self) -> Self {
        let backing = match &self.backing {
            Backing::Empty => Backing::Empty,
            Backing::Singleton(element) => Backing::Singleton(element.clone()),
            Backing::Array(array) => Backing::Array(array.clone()),
            Backing::Slice { array, offset } => Backing::Slice {
                array: array.clone(),
                offset: *offset,
            },
            Backing::Concat { left, right } => Backing::Concat {
                left: left.clone(),
                right: right.clone(),
            },
        };
        Self {
            backing,
            len: self.len,
            depth: self.depth,
        }
    }
}

impl<A> Default for Chunk<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq> PartialEq for Chunk<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for Chunk<A> {}

impl<A> FromIterator<A> for Chunk<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<A> From<Vec<A>> for Chunk<A> {
    fn from(elements: Vec<A>) -> Self {
        Self::from_vec(elements)
    }
}

impl<'a, A> IntoIterator for &'a Chunk<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: fmt::Debug> fmt::Debug for Chunk<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterates a chunk tree left to right without copying.
pub struct Iter<'a, A> {
    stack: Vec<&'a Chunk<A>>,
    current: std::slice::Iter<'a, A>,
    remaining: usize,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.current.next() {
                self.remaining -= 1;
                return Some(element);
            }
            let chunk = self.stack.pop()?;
            match &chunk.backing {
                Backing::Empty => {}
                Backing::Singleton(element) => {
                    self.current = std::slice::from_ref(element).iter();
                }
                Backing::Array(array) => {
                    self.current = array.iter();
                }
                Backing::Slice { array, offset } => {
                    self.current = array[*offset..*offset + chunk.len].iter();
                }
                Backing::Concat { left, right } => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A> ExactSizeIterator for Iter<'_, A> {}

/// The chunk backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkKind;

impl SequenceKind for ChunkKind {
    type Seq<A: Clone> = Chunk<A>;

    fn empty<A: Clone>() -> Chunk<A> {
        Chunk::new()
    }

    fn of<A: Clone>(element: A) -> Chunk<A> {
        Chunk::of(element)
    }

    fn from_iterable<A: Clone>(source: impl IntoIterator<Item = A>) -> Chunk<A> {
        source.into_iter().collect()
    }

    fn to_iterable<A: Clone>(seq: &Chunk<A>) -> impl Iterator<Item = A> + '_ {
        seq.iter().cloned()
    }

    fn len<A: Clone>(seq: &Chunk<A>) -> usize {
        seq.len()
    }

    fn take<A: Clone>(seq: &Chunk<A>, n: isize) -> Chunk<A> {
        seq.take(clamp_count(n, seq.len()))
    }

    fn drop<A: Clone>(seq: &Chunk<A>, n: isize) -> Chunk<A> {
        seq.drop_first(clamp_count(n, seq.len()))
    }

    fn reverse<A: Clone>(seq: &Chunk<A>) -> Chunk<A> {
        seq.reverse()
    }

    fn prepend<A, B, C>(seq: &Chunk<A>, element: B) -> Chunk<C>
    where
        A: Clone + Into<C>,
        B: Into<C>,
        C: Clone,
    {
        seq.map_into::<C>().prepend(element.into())
    }

    fn prepend_all<A, B, C>(seq: &Chunk<A>, prefix: &Chunk<B>) -> Chunk<C>
    where
        A: Clone + Into<C>,
        B: Clone + Into<C>,
        C: Clone,
    {
        seq.map_into::<C>().prepend_all(&prefix.map_into::<C>())
    }

    fn concat<A, B, C>(seq: &Chunk<A>, suffix: &Chunk<B>) -> Chunk<C>
    where
        A: Clone + Into<C>,
        B: Clone + Into<C>,
        C: Clone,
    {
        seq.map_into::<C>().concat(&suffix.map_into::<C>())
    }
}
